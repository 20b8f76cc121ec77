// src/config.rs

use crate::category::Category;
use crate::error::{DiaryError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_USER_NAME: &str = "friend";

/// 运行配置：数据目录、分类到文件的映射以及问候用的用户名
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub user_name: String,
    files: [PathBuf; 3],
}

impl Config {
    /// 每个分类使用 `dir` 下的默认文件名
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        let data_dir = dir.into();
        let files = Category::ALL.map(|c| data_dir.join(c.default_file_name()));
        Config {
            data_dir,
            user_name: DEFAULT_USER_NAME.to_string(),
            files,
        }
    }

    /// 从命令行参数和环境变量构建配置
    ///
    /// 目录优先级：`--dir`，`DIARY_DIR`，`~/.config/diary`
    pub fn load(dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(
            dir_override,
            env::var_os("DIARY_DIR").map(PathBuf::from),
            dirs::home_dir(),
        )?;
        let user_name = resolve_user_name(env::var("DIARY_USER").ok(), env::var("USER").ok());
        Ok(Config {
            user_name,
            ..Config::with_data_dir(data_dir)
        })
    }

    /// 覆盖某个分类的存储位置
    pub fn set_path(&mut self, category: Category, path: impl Into<PathBuf>) {
        self.files[category.position()] = path.into();
    }

    pub fn path_for(&self, category: Category) -> &Path {
        &self.files[category.position()]
    }

    /// 数据目录不存在时创建
    pub fn ensure_data_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}

fn resolve_data_dir(
    dir_override: Option<PathBuf>,
    env_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = dir_override.or(env_dir).filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let home = home.ok_or(DiaryError::HomeDirNotFound)?;
    Ok(home.join(".config/diary"))
}

fn resolve_user_name(diary_user: Option<String>, user: Option<String>) -> String {
    diary_user
        .or(user)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_string())
}
