// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{FileInfo, ImageData};
use crate::ui::viewer_window;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Window(viewer_window::Message),
    /// The native window was created; its id is needed for window tasks.
    WindowOpened(window::Id),
    ImageLoaded {
        /// Load request this result answers; stale results are dropped.
        generation: u64,
        result: Result<ImageData, Error>,
    },
    FileInfoLoaded {
        generation: u64,
        result: Result<FileInfo, Error>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to show on startup.
    pub file_path: Option<PathBuf>,
}
