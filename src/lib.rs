//! Personal diary with three fixed categories (Work, Travel, Personal),
//! each persisted to its own plain text file as timestamp/content line pairs.

pub mod category;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diary;
pub mod error;
pub mod logging;
pub mod models;
pub mod shell;
pub mod store;

pub use category::{Category, CategoryStore};
pub use config::Config;
pub use diary::Diary;
pub use error::{DiaryError, Result};
pub use models::{DateQuery, Entry};
