// src/category.rs

use crate::config::Config;
use crate::diary::Diary;
use crate::error::{DiaryError, Result};
use std::fmt;

/// 三个固定分类，不支持用户扩展
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Category {
    Work,
    Travel,
    Personal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Travel, Category::Personal];

    pub fn name(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Travel => "Travel",
            Category::Personal => "Personal",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            Category::Work => "work_diary.txt",
            Category::Travel => "travel_diary.txt",
            Category::Personal => "personal_diary.txt",
        }
    }

    /// 按 1 起始编号选择分类
    pub fn from_number(number: usize) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(DiaryError::InvalidCategory(number))
    }

    pub(crate) fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 持有三个分类各自的日记
#[derive(Debug)]
pub struct CategoryStore {
    diaries: [Diary; 3],
}

impl CategoryStore {
    /// 按配置中的路径加载三个日记
    pub fn open(config: &Config) -> Result<Self> {
        let [work, travel, personal] =
            Category::ALL.map(|category| config.path_for(category).to_path_buf());
        Ok(CategoryStore {
            diaries: [Diary::open(work)?, Diary::open(travel)?, Diary::open(personal)?],
        })
    }

    pub fn list_categories(&self) -> [&'static str; 3] {
        Category::ALL.map(Category::name)
    }

    /// 按 1 起始编号取得分类日记
    pub fn with_category(&mut self, number: usize) -> Result<&mut Diary> {
        let category = Category::from_number(number)?;
        Ok(self.diary_mut(category))
    }

    pub fn diary(&self, category: Category) -> &Diary {
        &self.diaries[category.position()]
    }

    pub fn diary_mut(&mut self, category: Category) -> &mut Diary {
        &mut self.diaries[category.position()]
    }
}
