// src/shell.rs

use crate::category::{Category, CategoryStore};
use crate::diary::Diary;
use crate::error::{DiaryError, Result};
use crate::models::DateQuery;
use std::io::{BufRead, Write};
use tracing::debug;

/// 交互式数字菜单，读写对象可替换，便于测试
pub struct Shell<'a, R, W> {
    store: &'a mut CategoryStore,
    user_name: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut CategoryStore, user_name: impl Into<String>, input: R, output: W) -> Self {
        Shell {
            store,
            user_name: user_name.into(),
            input,
            output,
        }
    }

    /// 主循环，选择 6 或输入结束时退出
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\nWelcome to your personal Diary {}!\n", self.user_name)?;
            writeln!(self.output, "1. Add Text Entry")?;
            writeln!(self.output, "2. View All Entries")?;
            writeln!(self.output, "3. Search Entries by Date")?;
            writeln!(self.output, "4. Edit Entry")?;
            writeln!(self.output, "5. Delete Entry")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            debug!(%choice, "menu choice");

            let keep_going = match choice.trim() {
                "1" => self.add_entry()?,
                "2" => self.view_entries()?,
                "3" => self.search_by_date()?,
                "4" => self.edit_entry()?,
                "5" => self.delete_entry()?,
                "6" => {
                    writeln!(self.output, "Exiting...")?;
                    false
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// 读取一行，输入结束时返回 None；非 UTF-8 的行会提示后重新读取
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Ok(None);
            }
            match String::from_utf8(raw) {
                Ok(line) => return Ok(Some(line.trim_end_matches(['\n', '\r']).to_string())),
                Err(_) => {
                    let e = DiaryError::InvalidInput("line is not valid UTF-8".to_string());
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// 反复询问直到得到 1-3 之间的分类编号
    fn select_category(&mut self) -> Result<Option<Category>> {
        loop {
            writeln!(self.output, "Select Category:")?;
            for (i, name) in self.store.list_categories().iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, name)?;
            }
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                return Ok(None);
            };
            let number = answer.trim().parse::<usize>().unwrap_or(0);
            if let Ok(category) = Category::from_number(number) {
                return Ok(Some(category));
            }
        }
    }

    fn read_number(&mut self, text: &str) -> Result<Option<usize>> {
        // 非数字输入当作无效编号 0 处理
        Ok(self
            .prompt(text)?
            .map(|answer| answer.trim().parse::<usize>().unwrap_or(0)))
    }

    fn add_entry(&mut self) -> Result<bool> {
        let Some(category) = self.select_category()? else {
            return Ok(false);
        };
        let Some(content) = self.prompt("Enter your text entry: ")? else {
            return Ok(false);
        };
        match self.store.diary_mut(category).add(content) {
            Ok(_) => writeln!(self.output, "Entry added successfully.")?,
            Err(e @ DiaryError::InvalidContent) => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn view_entries(&mut self) -> Result<bool> {
        let Some(category) = self.select_category()? else {
            return Ok(false);
        };
        let listing = self.store.diary(category).render_all();
        write!(self.output, "{}", listing)?;
        Ok(true)
    }

    fn search_by_date(&mut self) -> Result<bool> {
        let Some(category) = self.select_category()? else {
            return Ok(false);
        };
        let Some(date) = self.prompt("Enter the date to search (format: day month year): ")? else {
            return Ok(false);
        };
        match DateQuery::parse(&date) {
            Ok(query) => {
                let found = self.store.diary(category).render_search(&query);
                write!(self.output, "{}", found)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn edit_entry(&mut self) -> Result<bool> {
        let Some(category) = self.select_category()? else {
            return Ok(false);
        };
        let Some(number) = self.read_number("Enter the entry number to edit: ")? else {
            return Ok(false);
        };

        let current = Diary::number_to_index(number)
            .and_then(|index| self.store.diary(category).get(index).map(|e| (index, e.to_string())));
        let Some((index, shown)) = current else {
            writeln!(self.output, "Invalid entry number!")?;
            return Ok(true);
        };

        writeln!(self.output, "Current entry:")?;
        writeln!(self.output, "{}", shown)?;
        writeln!(self.output, "\nEnter the new content below the current entry:")?;
        let Some(content) = self.prompt("")? else {
            return Ok(false);
        };

        match self.store.diary_mut(category).edit(index, content) {
            Ok(()) => writeln!(self.output, "Entry edited successfully.")?,
            Err(e @ DiaryError::InvalidContent) => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn delete_entry(&mut self) -> Result<bool> {
        let Some(category) = self.select_category()? else {
            return Ok(false);
        };
        let Some(number) = self.read_number("Enter the entry number to delete: ")? else {
            return Ok(false);
        };

        let diary = self.store.diary_mut(category);
        let result = diary.index_of_number(number).and_then(|index| diary.delete(index));
        match result {
            Ok(_) => writeln!(self.output, "Entry deleted successfully.")?,
            Err(DiaryError::InvalidIndex { .. }) => writeln!(self.output, "Invalid entry number!")?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }
}
