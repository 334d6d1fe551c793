//! Root application component: owns the card state and the timers.

use billet_ui::{CardContent, ThemedRoot};
use dioxus::prelude::*;
use tokio::time::{Duration, sleep};

use crate::audio::{self, AUDIO_ELEMENT_ID, PlaybackOutcome};
use crate::state::{Answer, CardState};
use crate::viewport;

use super::{Envelope, ParticleField, PhotoStack, ProposalCard};

/// Interval between photo rotations.
const CAROUSEL_TICK_MS: u64 = 3000;

/// Delay between the envelope reporting opened and its overlay leaving the tree.
const ENVELOPE_EXIT_DELAY_MS: u64 = 2000;

#[component]
pub fn App(
    mut state: Signal<CardState>,
    content: CardContent,
    music_src: Option<String>,
) -> Element {
    // Viewport watcher, alive for the whole mount.
    use_effect(move || {
        spawn(viewport::watch_viewport(state));
    });

    // Carousel: rotates the deck while the envelope is opened and no answer
    // has been chosen. The run flag keeps state writes from stacking loops;
    // the loop itself exits once the predicate turns false, and the predicate
    // can never turn true again (answers don't unset).
    let mut carousel_running = use_signal(|| false);
    use_effect(move || {
        let active = state.read().carousel_active();
        if !active || *carousel_running.peek() {
            return;
        }
        carousel_running.set(true);
        spawn(async move {
            loop {
                sleep(Duration::from_millis(CAROUSEL_TICK_MS)).await;
                if !state.peek().carousel_active() {
                    break;
                }
                state.write().photos.rotate();
                tracing::debug!("carousel tick");
            }
            carousel_running.set(false);
        });
    });

    let handle_start_music = move |_: ()| {
        spawn(async move {
            let outcome = audio::try_play().await;
            match &outcome {
                PlaybackOutcome::Started => tracing::info!("music started"),
                PlaybackOutcome::Blocked(reason) => tracing::warn!("playback blocked: {reason}"),
            }
            state.write().apply_playback(&outcome);
        });
    };

    let handle_open = move |_: ()| {
        tracing::info!("envelope opened");
        state.write().mark_opened();
        spawn(async move {
            sleep(Duration::from_millis(ENVELOPE_EXIT_DELAY_MS)).await;
            state.write().hide_envelope();
        });
    };

    let handle_toggle = move |_| {
        if state.peek().music.is_playing() {
            audio::pause();
            state.write().mark_paused();
        } else {
            spawn(async move {
                let outcome = audio::try_play().await;
                if let PlaybackOutcome::Blocked(reason) = &outcome {
                    tracing::warn!("playback blocked: {reason}");
                }
                state.write().apply_playback(&outcome);
            });
        }
    };

    let handle_choose = move |answer: Answer| {
        if state.write().choose(answer) {
            tracing::info!("answer chosen: {answer:?}");
        }
    };

    let s = state.read();
    let opened = s.envelope_opened;
    let envelope_visible = s.envelope_visible;
    let is_playing = s.music.is_playing();
    let layout = s.layout;
    let answer = s.answer;
    let photos = s.photos.to_vec();
    drop(s);

    let music = music_src.clone().unwrap_or_default();

    rsx! {
        ThemedRoot {
            div {
                class: "card-screen {layout.css_class()}",

                if !music.is_empty() {
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{music}",
                        r#loop: true,
                    }
                }

                ParticleField {}

                if opened {
                    button {
                        class: "music-toggle",
                        onclick: handle_toggle,
                        if is_playing { "🎵" } else { "🔇" }
                    }
                }

                // The overlay stays in the tree through its exit animation,
                // then handle_open's delayed hide removes it entirely.
                if envelope_visible {
                    div {
                        class: if opened { "envelope-overlay leaving" } else { "envelope-overlay" },
                        Envelope {
                            label: content.envelope_label.clone(),
                            hint: content.envelope_hint.clone(),
                            seal: content.envelope_seal.clone(),
                            on_start_music: handle_start_music,
                            on_open: handle_open,
                        }
                    }
                }

                if opened {
                    main { class: "content-layout",
                        PhotoStack {
                            photos,
                            caption: content.photo_caption.clone(),
                        }
                        ProposalCard {
                            content: content.clone(),
                            answer,
                            on_choose: handle_choose,
                        }
                    }
                }
            }
        }
    }
}
