// src/cli.rs

use crate::category::Category;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "diary - A personal journal with Work, Travel and Personal categories",
    long_about = "diary keeps free-text entries in three fixed categories, each stored in its own plain text file. Run without a command to open the interactive menu."
)]
pub struct Cli {
    /// Directory holding the diary files. Defaults to $DIARY_DIR or ~/.config/diary
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lists the available categories.
    Categories,

    /// Adds a new entry to a category.
    /// If no message is provided via -m, it opens the default editor.
    Add {
        #[arg(value_enum)]
        category: Category,
        #[arg(short, long, help = "A one-line message for the entry")]
        message: Option<String>,
    },

    /// Shows every entry of a category.
    List {
        #[arg(value_enum)]
        category: Category,
    },

    /// Finds entries written on a given day.
    Search {
        #[arg(value_enum)]
        category: Category,
        /// The date to search, as "day month year" (e.g. "07 Jan 2025")
        date: String,
    },

    /// Replaces the content of an entry, keeping its timestamp.
    /// If no message is provided via -m, it opens the default editor.
    Edit {
        #[arg(value_enum)]
        category: Category,
        #[arg(help = "The entry number as shown by 'list' (starting at 1)")]
        number: usize,
        #[arg(short, long, help = "The new one-line content")]
        message: Option<String>,
    },

    /// Deletes an entry.
    Delete {
        #[arg(value_enum)]
        category: Category,
        #[arg(help = "The entry number as shown by 'list' (starting at 1)")]
        number: usize,
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Opens the interactive menu (the default).
    Shell,
}
