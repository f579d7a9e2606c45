// SPDX-License-Identifier: MPL-2.0
//! File facts shown alongside a preview: name, size and modification date.
//!
//! Directories are summarized by a deep count of their contents. Hard links
//! are counted once on Unix so the total size matches disk usage.

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const KIB: f64 = 1024.0;
const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Summary of a directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeepCount {
    pub file_items: u64,
    pub directory_items: u64,
    /// Sub-directories that could not be listed.
    pub unreadable_items: u64,
    pub total_size: u64,
}

impl DeepCount {
    /// Number of entries found below the root, files and folders alike.
    #[must_use]
    pub fn items(&self) -> u64 {
        self.file_items + self.directory_items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    File { size: u64 },
    Directory(DeepCount),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub display_name: String,
    pub kind: FileKind,
    pub modified: Option<DateTime<Local>>,
}

impl FileInfo {
    /// Queries the file system for the facts about `path`.
    ///
    /// Walking a large directory can take a while; call from a blocking
    /// context (see [`load_file_info_async`]).
    pub fn load(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)?;

        let kind = if metadata.is_dir() {
            FileKind::Directory(deep_count(path))
        } else {
            FileKind::File {
                size: metadata.len(),
            }
        };

        let modified = metadata.modified().ok().map(DateTime::<Local>::from);

        Ok(Self {
            path: path.to_path_buf(),
            display_name: display_name(path),
            kind,
            modified,
        })
    }

    /// Human-readable size, e.g. `"1.5 MB"` or `"12.0 KB, 3 items"`.
    #[must_use]
    pub fn size_text(&self, i18n: &I18n) -> String {
        match &self.kind {
            FileKind::File { size } => format_size(*size, i18n),
            FileKind::Directory(count) => format!(
                "{}, {}",
                format_size(count.total_size, i18n),
                i18n.tr_count("file-info-items", count.items())
            ),
        }
    }

    /// Modification time in the locale's preferred date and time format.
    #[must_use]
    pub fn date_text(&self) -> Option<String> {
        self.modified
            .map(|modified| modified.format("%x %X").to_string())
    }

    /// Window title for this file: `"<name> - <size>"`, followed by
    /// `" - <date>"` when the modification time is known.
    #[must_use]
    pub fn title(&self, i18n: &I18n) -> String {
        let title = format!("{} - {}", self.display_name, self.size_text(i18n));
        match self.date_text() {
            Some(date) => format!("{title} - {date}"),
            None => title,
        }
    }
}

pub async fn load_file_info_async(path: PathBuf) -> Result<FileInfo> {
    tokio::task::spawn_blocking(move || FileInfo::load(&path))
        .await
        .map_err(|e| Error::Io(e.to_string()))?
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a byte count with 1024-based units and one decimal.
#[must_use]
pub fn format_size(bytes: u64, i18n: &I18n) -> String {
    if (bytes as f64) < KIB {
        return i18n.tr_count("file-info-size-bytes", bytes);
    }

    let mut value = bytes as f64 / KIB;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value < KIB {
            break;
        }
        value /= KIB;
        unit = next;
    }
    format!("{value:.1} {unit}")
}

/// Counts every entry below `root`, without following symlinks.
#[must_use]
pub fn deep_count(root: &Path) -> DeepCount {
    let mut count = DeepCount::default();
    let mut seen = HashSet::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("Cannot list {}: {}", dir.display(), err);
                count.unreadable_items += 1;
                continue;
            }
        };

        for entry in entries.flatten() {
            let Ok(metadata) = entry.path().symlink_metadata() else {
                count.unreadable_items += 1;
                continue;
            };

            let first_sighting = seen.insert(inode_key(&metadata, &entry.path()));

            if metadata.is_dir() {
                count.directory_items += 1;
                pending.push(entry.path());
            } else {
                count.file_items += 1;
            }

            if first_sighting {
                count.total_size += metadata.len();
            }
        }
    }

    count
}

#[cfg(unix)]
fn inode_key(metadata: &fs::Metadata, _path: &Path) -> InodeKey {
    use std::os::unix::fs::MetadataExt;
    InodeKey::Inode(metadata.dev(), metadata.ino())
}

#[cfg(not(unix))]
fn inode_key(_metadata: &fs::Metadata, path: &Path) -> InodeKey {
    InodeKey::Path(path.to_path_buf())
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum InodeKey {
    #[cfg_attr(not(unix), allow(dead_code))]
    Inode(u64, u64),
    #[cfg_attr(unix, allow(dead_code))]
    Path(PathBuf),
}
