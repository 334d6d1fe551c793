//! Entry point for the Billet-Doux greeting card.
//!
//! This Dioxus desktop application plays a scripted proposal sequence:
//! envelope, music, photo carousel, question.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use billet_ui::{CURRENT_THEME, CardContent, SHARED_CSS, Theme};
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use billet_doux::components::App;
use billet_doux::state::{CardState, PHOTO_SLOTS, Photo};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Launch inputs handed from `main` to the Dioxus runtime.
static CONTENT: OnceLock<CardContent> = OnceLock::new();
static PHOTOS: OnceLock<Vec<Photo>> = OnceLock::new();
static MUSIC_SRC: OnceLock<Option<String>> = OnceLock::new();
static THEME: OnceLock<Theme> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "billet-doux")]
#[command(about = "An animated proposal greeting card")]
struct Args {
    /// Color theme: blush or lavender
    #[arg(short, long)]
    theme: Option<String>,

    /// JSON file overriding the card copy
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Directory with up to four photos for the carousel
    #[arg(short, long)]
    photos: Option<PathBuf>,

    /// Audio file for the background music
    #[arg(short, long)]
    music: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Billet-Doux");

    let args = Args::parse();

    let theme = match args.theme.as_deref() {
        Some(value) => Theme::parse(value).unwrap_or_else(|| {
            tracing::warn!(
                "unknown theme '{}', using {}",
                value,
                Theme::default().display_name()
            );
            Theme::default()
        }),
        None => Theme::default(),
    };

    let content = load_content(args.content.as_deref());
    let photos = build_photo_deck(args.photos.as_deref());
    let music_src = args.music.as_deref().and_then(load_music);

    let window_title = content.window_title.clone();

    CONTENT.set(content).ok();
    PHOTOS.set(photos).ok();
    MUSIC_SRC.set(music_src).ok();
    THEME.set(theme).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(&window_title)
                        .with_inner_size(LogicalSize::new(1100, 760)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Dancing+Script:wght@400;700&family=Inter:wght@400;600;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    <style>{}</style>
                    "#,
                    SHARED_CSS, STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Loads the copy override, falling back to the built-in card.
fn load_content(path: Option<&Path>) -> CardContent {
    match path {
        Some(path) => match CardContent::from_json_file(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("content file unusable, using defaults: {err}");
                CardContent::default()
            }
        },
        None => CardContent::default(),
    }
}

/// Soft two-tone placeholders so the deck reads as a stack with no photos
/// configured.
const PLACEHOLDER_TONES: [(&str, &str); PHOTO_SLOTS] = [
    ("#fecdd3", "#ff85a2"),
    ("#e9d5ff", "#a855f7"),
    ("#fff0f3", "#fbb1bd"),
    ("#f3e8ff", "#d8b4fe"),
];

fn placeholder_photo(slot: usize) -> Photo {
    let (fill, glyph) = PLACEHOLDER_TONES[slot % PLACEHOLDER_TONES.len()];
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='280' height='210'>\
         <rect width='280' height='210' fill='{fill}'/>\
         <text x='140' y='125' font-size='56' text-anchor='middle' fill='{glyph}'>&#10084;</text>\
         </svg>"
    );
    Photo {
        key: format!("placeholder-{slot}"),
        src: billet_ui::svg_data_url(&svg),
    }
}

/// Assembles the four-photo deck from a directory, padding with placeholders.
fn build_photo_deck(dir: Option<&Path>) -> Vec<Photo> {
    let mut photos = Vec::with_capacity(PHOTO_SLOTS);

    if let Some(dir) = dir {
        match billet_ui::scan_photo_dir(dir, PHOTO_SLOTS) {
            Ok(paths) => {
                for path in paths {
                    match billet_ui::load_media_as_data_url(&path) {
                        Ok(src) => {
                            let key = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| format!("photo-{}", photos.len()));
                            photos.push(Photo { key, src });
                        }
                        Err(err) => tracing::warn!("skipping photo: {err}"),
                    }
                }
            }
            Err(err) => tracing::warn!("photo directory unusable: {err}"),
        }
    }

    for slot in photos.len()..PHOTO_SLOTS {
        photos.push(placeholder_photo(slot));
    }

    photos
}

/// Loads the music file as a data URL the webview can play.
fn load_music(path: &Path) -> Option<String> {
    match billet_ui::load_media_as_data_url(path) {
        Ok(src) => Some(src),
        Err(err) => {
            tracing::warn!("music file unusable: {err}");
            None
        }
    }
}

/// Root component: builds the state signal and applies the launch inputs.
#[component]
fn RootApp() -> Element {
    // GlobalSignal writes need the Dioxus runtime, so the theme lands here
    // rather than in main.
    use_hook(|| {
        if let Some(theme) = THEME.get() {
            *CURRENT_THEME.write() = *theme;
        }
    });

    use_drop(|| {
        tracing::info!("Shutting down Billet-Doux");
    });

    let state = use_signal(|| {
        let photos = PHOTOS.get().cloned().unwrap_or_default();
        CardState::new(photos)
    });

    let content = CONTENT.get().cloned().unwrap_or_default();
    let music_src = MUSIC_SRC.get().cloned().flatten();

    rsx! {
        App { state, content, music_src }
    }
}
