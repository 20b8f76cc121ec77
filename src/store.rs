// src/store.rs

use crate::error::Result;
use crate::models::Entry;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// 从文件读取全部条目，每两行为一条（时间戳在前，内容在后）
///
/// 文件不存在时返回空列表；行数为奇数时，末尾多出的一行被丢弃。
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no backing file yet, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let lines: Vec<&str> = text.lines().collect();
    if lines.len() % 2 == 1 {
        debug!(path = %path.display(), "dropping dangling trailing line");
    }

    let entries: Vec<Entry> = lines
        .chunks_exact(2)
        .map(|pair| Entry::from_parts(pair[0], pair[1]))
        .collect();
    debug!(path = %path.display(), count = entries.len(), "loaded entries");
    Ok(entries)
}

/// 用内存中的条目完整覆盖文件
///
/// 直接覆盖写入，写到一半崩溃可能留下被截断的文件。
pub fn save_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for entry in entries {
        writeln!(writer, "{}", entry.timestamp())?;
        writeln!(writer, "{}", entry.content())?;
    }
    writer.flush()?;
    debug!(path = %path.display(), count = entries.len(), "saved entries");
    Ok(())
}
