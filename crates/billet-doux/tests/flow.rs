//! End-to-end exercise of the card flow over the state machine.
//!
//! The components only schedule timers and forward events; every transition
//! they drive lives on `CardState`, so the whole scripted sequence can be
//! walked here without a display surface.

use billet_doux::audio::PlaybackOutcome;
use billet_doux::state::{Answer, CardState, MusicStatus, PHOTO_SLOTS, Photo};
use billet_doux::viewport::LayoutMode;

fn photo(name: &str) -> Photo {
    Photo {
        key: name.to_string(),
        src: format!("data:image/jpeg;base64,{name}"),
    }
}

fn fresh_card() -> CardState {
    CardState::new(vec![photo("a"), photo("b"), photo("c"), photo("d")])
}

fn deck_keys(state: &CardState) -> Vec<String> {
    state.photos.iter().map(|p| p.key.clone()).collect()
}

#[test]
fn test_accept_flow() {
    let mut state = fresh_card();

    // Sealed envelope: overlay up, nothing rotating, no music.
    assert!(state.envelope_visible);
    assert!(!state.envelope_opened);
    assert!(!state.carousel_active());
    assert_eq!(state.music, MusicStatus::Idle);

    // Click: music attempt resolves, envelope runs its sequence.
    state.apply_playback(&PlaybackOutcome::Started);
    assert!(state.music.is_playing());

    state.mark_opened();
    assert!(state.carousel_active());

    // Overlay leaves after the exit delay.
    state.hide_envelope();
    assert!(!state.envelope_visible);
    assert!(state.envelope_opened, "opened never reverts");

    // Three carousel ticks.
    state.photos.rotate();
    assert_eq!(deck_keys(&state), ["b", "c", "d", "a"]);
    state.photos.rotate();
    assert_eq!(deck_keys(&state), ["c", "d", "a", "b"]);
    state.photos.rotate();
    assert_eq!(deck_keys(&state), ["d", "a", "b", "c"]);
    assert_eq!(state.photos.len(), PHOTO_SLOTS);

    // Saying yes stops the carousel for good.
    assert!(state.choose(Answer::Yes));
    assert!(!state.carousel_active());
    assert_eq!(state.answer, Some(Answer::Yes));

    // Nothing un-answers.
    assert!(!state.choose(Answer::No));
    state.mark_opened();
    state.apply_playback(&PlaybackOutcome::Started);
    assert_eq!(state.answer, Some(Answer::Yes));
    assert!(!state.carousel_active());
}

#[test]
fn test_decline_flow() {
    let mut state = fresh_card();
    state.mark_opened();
    state.hide_envelope();

    assert!(state.choose(Answer::No));
    assert_eq!(state.answer, Some(Answer::No));
    assert!(!state.carousel_active());

    // The neutral response sticks across later events.
    state.photos.rotate();
    assert!(!state.choose(Answer::Yes));
    assert_eq!(state.answer, Some(Answer::No));
}

#[test]
fn test_blocked_playback_never_reports_playing() {
    let mut state = fresh_card();

    state.apply_playback(&PlaybackOutcome::Blocked("NotAllowedError".into()));
    assert_eq!(state.music, MusicStatus::Blocked);
    assert!(!state.music.is_playing());

    // A later toggle attempt can still succeed.
    state.apply_playback(&PlaybackOutcome::Started);
    assert!(state.music.is_playing());

    state.mark_paused();
    assert_eq!(state.music, MusicStatus::Paused);
}

#[test]
fn test_layout_follows_resize_events() {
    let mut state = fresh_card();
    assert_eq!(state.layout, LayoutMode::Desktop);

    for (width, expected) in [
        (767.0, LayoutMode::Mobile),
        (768.0, LayoutMode::Desktop),
        (320.0, LayoutMode::Mobile),
        (1920.0, LayoutMode::Desktop),
    ] {
        state.layout = LayoutMode::from_width(width);
        assert_eq!(state.layout, expected, "width {width}");
    }
}

#[test]
fn test_carousel_only_runs_between_open_and_answer() {
    let mut state = fresh_card();

    // Before the envelope opens.
    assert!(!state.carousel_active());

    // Between open and answer.
    state.mark_opened();
    assert!(state.carousel_active());
    state.hide_envelope();
    assert!(state.carousel_active(), "overlay exit does not stop the deck");

    // After either answer.
    state.choose(Answer::Yes);
    assert!(!state.carousel_active());
}
