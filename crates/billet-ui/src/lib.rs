//! Shared UI support for the Billet-Doux greeting card.
//!
//! Provides the theme system, the card content configuration, and file
//! utilities for feeding local media to the webview as data URLs.

pub mod content;
pub mod file_utils;
pub mod theme;

pub use content::{CardContent, ContentError};
pub use file_utils::{MediaError, load_media_as_data_url, scan_photo_dir, svg_data_url};
pub use theme::{CURRENT_THEME, Theme, ThemedRoot};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
