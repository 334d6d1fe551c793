//! The sealed envelope shown before the card.
//!
//! A click starts the open sequence and the music together. The sequence is
//! one-way: once opening, further clicks are ignored, and `on_open` fires
//! exactly once after the flap animation and a settle delay.

use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

/// Duration of the flap-open animation, mirrored in styles.css.
const FLAP_ANIMATION_MS: u64 = 600;

/// Settle delay between the flap finishing and the opened callback.
const SETTLE_DELAY_MS: u64 = 1500;

#[component]
pub fn Envelope(
    /// Addressee line on the front.
    label: String,
    /// Pulsing "click to open" hint.
    hint: String,
    /// Seal glyph on the flap.
    seal: String,
    /// Fires synchronously on the activating click.
    on_start_music: EventHandler<()>,
    /// Fires once, after the open sequence has settled.
    on_open: EventHandler<()>,
) -> Element {
    let mut opening = use_signal(|| false);

    let handle_click = move |_| {
        if *opening.peek() {
            return;
        }
        opening.set(true);
        on_start_music.call(());

        spawn(async move {
            sleep(Duration::from_millis(FLAP_ANIMATION_MS)).await;
            sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
            on_open.call(());
        });
    };

    let is_opening = *opening.read();

    rsx! {
        div {
            class: if is_opening { "envelope opening" } else { "envelope" },
            onclick: handle_click,

            // Inner letter, slides up out of the pocket.
            div { class: "letter",
                div { class: "letter-line" }
                div { class: "letter-line" }
                div { class: "letter-line" }
            }

            div { class: "envelope-back" }
            div { class: "envelope-sides" }

            div { class: "envelope-flap",
                div { class: "heart-seal", "{seal}" }
            }

            if !is_opening {
                div { class: "envelope-label",
                    h1 { class: "envelope-to script-font", "{label}" }
                    p { class: "envelope-hint", "{hint}" }
                }
            }
        }
    }
}
