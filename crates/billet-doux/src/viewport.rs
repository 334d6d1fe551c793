//! Viewport layout tracking.
//!
//! The width-to-layout mapping is a pure function so it can be tested without
//! a display surface; the resize subscription is a thin bridge that streams
//! `window.innerWidth` out of the webview for the component's lifetime.

use dioxus::prelude::*;

use crate::state::CardState;

/// Widths below this render the single-column mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Derived presentation hint: phone-ish or desktop-ish viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    #[default]
    Desktop,
}

impl LayoutMode {
    /// Maps a viewport width to a layout mode.
    pub fn from_width(width: f64) -> LayoutMode {
        if width < MOBILE_BREAKPOINT_PX {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, LayoutMode::Mobile)
    }

    /// Returns the CSS class carrying the layout variant.
    pub fn css_class(&self) -> &'static str {
        match self {
            LayoutMode::Mobile => "layout-mobile",
            LayoutMode::Desktop => "layout-desktop",
        }
    }
}

/// Reports the current width immediately, then again on every resize.
const RESIZE_LISTENER_JS: &str = r#"
    dioxus.send(window.innerWidth);
    window.addEventListener('resize', () => dioxus.send(window.innerWidth));
"#;

/// Streams viewport width changes into the card state.
///
/// Runs until the webview side goes away; spawned in component scope, so it
/// is torn down with the component.
pub async fn watch_viewport(mut state: Signal<CardState>) {
    let mut eval = document::eval(RESIZE_LISTENER_JS);

    while let Ok(width) = eval.recv::<f64>().await {
        let mode = LayoutMode::from_width(width);
        if state.peek().layout != mode {
            tracing::debug!("layout mode -> {:?} ({}px)", mode, width);
            state.write().layout = mode;
        }
    }
}
