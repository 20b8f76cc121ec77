// src/diary.rs

use crate::error::{DiaryError, Result};
use crate::models::{DateQuery, Entry};
use crate::store;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::info;

const RULE: &str = "----------------------------";

/// 绑定到单个文件的有序条目集合
///
/// 每次增、改、删之后都会把整个列表重新写回文件。
#[derive(Debug)]
pub struct Diary {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl Diary {
    /// 打开日记，文件不存在时从空列表开始
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = store::load_entries(&path)?;
        Ok(Diary { path, entries })
    }

    /// 将用户看到的 1 起始编号转换为内部下标
    pub fn number_to_index(number: usize) -> Option<usize> {
        number.checked_sub(1)
    }

    /// 将 1 起始编号转换为有效下标，越界时报告无效编号
    pub fn index_of_number(&self, number: usize) -> Result<usize> {
        let index = Self::number_to_index(number).unwrap_or(usize::MAX);
        self.check_index(index)?;
        Ok(index)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// 以当前时间新建一条记录并保存
    pub fn add(&mut self, content: impl Into<String>) -> Result<&Entry> {
        let entry = Entry::new(content)?;
        self.add_entry(entry)?;
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        self.entries.push(entry);
        self.save()?;
        info!(path = %self.path.display(), count = self.entries.len(), "entry added");
        Ok(())
    }

    /// 删除指定位置的记录，后面的记录依次前移
    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        self.save()?;
        info!(path = %self.path.display(), index, "entry deleted");
        Ok(removed)
    }

    /// 只替换内容，时间戳不变
    pub fn edit(&mut self, index: usize, content: impl Into<String>) -> Result<()> {
        self.check_index(index)?;
        self.entries[index].set_content(content)?;
        self.save()?;
        info!(path = %self.path.display(), index, "entry edited");
        Ok(())
    }

    pub fn search_by_date(&self, query: &DateQuery) -> Vec<(usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.date().is_some_and(|date| query.matches(date)))
            .collect()
    }

    /// 渲染全部条目；没有条目时返回提示语
    pub fn render_all(&self) -> String {
        if self.entries.is_empty() {
            return "No entries found!\n".to_string();
        }
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let _ = writeln!(out, "Entry #{}", i + 1);
            let _ = writeln!(out, "{}", entry);
            let _ = writeln!(out, "{}", RULE);
        }
        out
    }

    pub fn render_search(&self, query: &DateQuery) -> String {
        let matches = self.search_by_date(query);
        if matches.is_empty() {
            return format!("No entries found for the date: {}\n", query);
        }
        let mut out = String::new();
        for (_, entry) in matches {
            let _ = writeln!(out, "{}", entry);
            let _ = writeln!(out, "{}", RULE);
        }
        out
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(DiaryError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    fn save(&self) -> Result<()> {
        store::save_entries(&self.path, &self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seeded(path: &Path) -> Diary {
        let mut diary = Diary::open(path).unwrap();
        diary
            .add_entry(Entry::from_parts("Tue Jan 07 14:32:05 2025", "first"))
            .unwrap();
        diary
            .add_entry(Entry::from_parts("Wed Feb 08 09:00:00 2025", "second"))
            .unwrap();
        diary
            .add_entry(Entry::from_parts("Fri Jan 07 08:00:00 2022", "third"))
            .unwrap();
        diary
    }

    #[test]
    fn reload_yields_same_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_diary.txt");
        let mut diary = Diary::open(&path).unwrap();
        diary.add("one").unwrap();
        diary.add("two").unwrap();
        diary.add("").unwrap();

        let reloaded = Diary::open(&path).unwrap();
        assert_eq!(reloaded.entries(), diary.entries());
    }

    #[test]
    fn out_of_range_never_mutates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_diary.txt");
        let mut diary = seeded(&path);
        let before = fs::read_to_string(&path).unwrap();

        assert!(matches!(
            diary.delete(3),
            Err(DiaryError::InvalidIndex { index: 3, len: 3 })
        ));
        assert!(matches!(
            diary.edit(usize::MAX, "x"),
            Err(DiaryError::InvalidIndex { .. })
        ));
        assert!(diary.get(3).is_none());
        assert_eq!(Diary::number_to_index(0), None);
        assert!(diary.index_of_number(0).is_err());
        assert!(diary.index_of_number(4).is_err());
        assert_eq!(diary.index_of_number(3).unwrap(), 2);

        assert_eq!(diary.len(), 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn delete_shifts_following_entries() {
        let dir = tempdir().unwrap();
        let mut diary = seeded(&dir.path().join("work_diary.txt"));

        let removed = diary.delete(1).unwrap();
        assert_eq!(removed.content(), "second");
        assert_eq!(diary.len(), 2);
        assert_eq!(diary.get(1).unwrap().content(), "third");
    }

    #[test]
    fn edit_preserves_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("work_diary.txt");
        let mut diary = seeded(&path);

        diary.edit(0, "rewritten").unwrap();
        let entry = diary.get(0).unwrap();
        assert_eq!(entry.timestamp(), "Tue Jan 07 14:32:05 2025");
        assert_eq!(entry.content(), "rewritten");
        assert_eq!(Diary::open(&path).unwrap().get(0).unwrap().content(), "rewritten");
    }

    #[test]
    fn edit_with_line_break_is_rejected() {
        let dir = tempdir().unwrap();
        let mut diary = seeded(&dir.path().join("work_diary.txt"));
        assert!(matches!(diary.edit(0, "a\nb"), Err(DiaryError::InvalidContent)));
        assert_eq!(diary.get(0).unwrap().content(), "first");
    }

    #[test]
    fn empty_listing_reports_no_entries() {
        let dir = tempdir().unwrap();
        let diary = Diary::open(dir.path().join("work_diary.txt")).unwrap();
        assert_eq!(diary.render_all(), "No entries found!\n");
    }

    #[test]
    fn search_matches_exact_day_month_year() {
        let dir = tempdir().unwrap();
        let diary = seeded(&dir.path().join("work_diary.txt"));

        let query = DateQuery::parse("07 Jan 2025").unwrap();
        let hits = diary.search_by_date(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, 0);
        assert_eq!(hits[0].1.content(), "first");

        let none = DateQuery::parse("01 Jan 2025").unwrap();
        assert!(diary.search_by_date(&none).is_empty());
        assert_eq!(
            diary.render_search(&none),
            "No entries found for the date: 01 Jan 2025\n"
        );
    }

    #[test]
    fn unparseable_timestamps_never_match() {
        let dir = tempdir().unwrap();
        let mut diary = Diary::open(dir.path().join("work_diary.txt")).unwrap();
        diary.add_entry(Entry::from_parts("garbage", "x")).unwrap();
        let query = DateQuery::parse("07 Jan 2025").unwrap();
        assert!(diary.search_by_date(&query).is_empty());
    }

    #[test]
    fn hello_scenario() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("personal_diary.txt");
        let mut diary = Diary::open(&path).unwrap();

        diary.add("Hello").unwrap();
        let listing = diary.render_all();
        assert!(listing.starts_with("Entry #1\nDate: "));
        assert!(listing.contains("Content: Hello\n"));
        assert!(!diary.get(0).unwrap().timestamp().is_empty());

        diary.delete(0).unwrap();
        assert_eq!(diary.render_all(), "No entries found!\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
