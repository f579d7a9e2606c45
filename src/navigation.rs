// SPDX-License-Identifier: MPL-2.0
//! Sibling-image navigation for the toolbar's previous/next buttons.
//!
//! The list holds every supported image in the directory of the file being
//! shown, sorted by file name. Stepping past either end wraps around.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Direction of a toolbar navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageList {
    images: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the directory containing `current_file`.
    ///
    /// If the file itself is not in the listing (deleted, or an unsupported
    /// extension) the scan still succeeds with no current position.
    pub fn scan_directory(current_file: &Path) -> Result<Self> {
        let parent = current_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if !parent.is_dir() {
            return Err(Error::Io(format!(
                "No parent directory for {}",
                current_file.display()
            )));
        }

        let mut images = Vec::new();
        for entry in std::fs::read_dir(parent)? {
            let path = entry?.path();
            if path.is_file() && media::is_supported_image(&path) {
                images.push(path);
            }
        }
        images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        // Entries share one directory, so the file name identifies them.
        let current_index = images
            .iter()
            .position(|p| p.file_name() == current_file.file_name());

        Ok(Self {
            images,
            current_index,
        })
    }

    #[cfg(test)]
    fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.images.get(idx))
            .map(PathBuf::as_path)
    }

    /// Returns the neighbour in `direction`, wrapping around, without moving.
    pub fn peek(&self, direction: Direction) -> Option<&Path> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }

        let index = match (direction, self.current_index) {
            (Direction::Next, Some(idx)) => (idx + 1) % len,
            (Direction::Next, None) => 0,
            (Direction::Previous, Some(idx)) => (idx + len - 1) % len,
            (Direction::Previous, None) => len - 1,
        };

        self.images.get(index).map(PathBuf::as_path)
    }

    /// Moves one step in `direction` and returns the new current path.
    pub fn step(&mut self, direction: Direction) -> Option<PathBuf> {
        let target = self.peek(direction)?.to_path_buf();
        self.set_current(&target);
        Some(target)
    }

    /// Updates the current index to the given path if it exists in the list.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self
            .images
            .iter()
            .position(|p| p.file_name() == path.file_name());
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
