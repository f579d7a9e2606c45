// SPDX-License-Identifier: MPL-2.0
//! Loading of the files the viewer displays.
//!
//! [`image`] decodes a file into a texture handle with its natural size,
//! [`file_info`] gathers the human-readable facts shown in the window title.

pub mod file_info;
pub mod image;

use std::path::Path;

pub use file_info::FileInfo;
pub use image::{load_image, ImageData};

pub mod extensions {
    /// Image file extensions the viewer can decode.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns true when the path carries one of the supported image extensions.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a/photo.JPG")));
        assert!(is_supported_image(Path::new("drawing.svg")));
    }

    #[test]
    fn unknown_or_missing_extensions_are_rejected() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("Makefile")));
    }
}
