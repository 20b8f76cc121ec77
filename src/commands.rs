// src/commands.rs

use crate::category::{Category, CategoryStore};
use crate::diary::Diary;
use crate::error::{DiaryError, Result};
use crate::models::DateQuery;
use std::env;
use std::io::{self, Write};
use std::process::Command;

/// 打开 $EDITOR 编辑一段文本，返回去掉末尾换行后的内容
fn edit_in_editor(initial: &str) -> Result<String> {
    let mut temp_file = tempfile::NamedTempFile::new()?;
    temp_file.write_all(initial.as_bytes())?;
    temp_file.flush()?;

    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor).arg(temp_file.path()).status()?;
    if !status.success() {
        return Err(DiaryError::EditorError);
    }

    let buf = std::fs::read_to_string(temp_file.path())?;
    Ok(buf.trim_end_matches(['\n', '\r']).to_string())
}

/// 处理 'categories' 命令
pub fn handle_categories(store: &CategoryStore) -> Result<()> {
    for (i, name) in store.list_categories().iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    Ok(())
}

/// 处理 'add' 命令
pub fn handle_add(store: &mut CategoryStore, category: Category, message: Option<String>) -> Result<()> {
    let content = match message {
        Some(msg) => msg,
        None => {
            let text = edit_in_editor("")?;
            if text.trim().is_empty() {
                eprintln!("Empty entry, skipped.");
                return Ok(());
            }
            text
        }
    };

    let diary = store.diary_mut(category);
    diary.add(content)?;
    println!("✓ Entry #{} added to {}.", diary.len(), category);
    Ok(())
}

/// 处理 'list' 命令
pub fn handle_list(store: &CategoryStore, category: Category) -> Result<()> {
    print!("{}", store.diary(category).render_all());
    Ok(())
}

/// 处理 'search' 命令
pub fn handle_search(store: &CategoryStore, category: Category, date: &str) -> Result<()> {
    let query = DateQuery::parse(date)?;
    print!("{}", store.diary(category).render_search(&query));
    Ok(())
}

/// 处理 'edit' 命令
pub fn handle_edit(
    store: &mut CategoryStore,
    category: Category,
    number: usize,
    message: Option<String>,
) -> Result<()> {
    let diary = store.diary_mut(category);
    let index = diary.index_of_number(number)?;

    let content = match message {
        Some(msg) => msg,
        None => {
            let old_content = diary
                .get(index)
                .map(|e| e.content().to_string())
                .unwrap_or_default();
            let new_content = edit_in_editor(&old_content)?;
            if new_content.trim() == old_content.trim() {
                return Err(DiaryError::NoChangesMade);
            }
            new_content
        }
    };

    diary.edit(index, content)?;
    println!("✓ Entry #{} edited.", number);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} (y/N): ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// 处理 'delete' 命令
pub fn handle_delete(store: &mut CategoryStore, category: Category, number: usize, yes: bool) -> Result<()> {
    let diary: &mut Diary = store.diary_mut(category);
    let index = diary.index_of_number(number)?;

    if !yes {
        if let Some(entry) = diary.get(index) {
            println!("Entry #{}", number);
            println!("{}", entry);
        }
        if !confirm("Delete this entry?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    diary.delete(index)?;
    println!("✓ Entry deleted successfully.");
    Ok(())
}
