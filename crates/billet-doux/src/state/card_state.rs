//! Card state: the one state machine in the application.
//!
//! Everything here is pure so the whole flow can be exercised in tests
//! without a display surface. Components own the timers; this module owns
//! the transitions they drive.

use std::collections::VecDeque;

use crate::audio::PlaybackOutcome;
use crate::viewport::LayoutMode;

/// Number of photo slots in the deck.
pub const PHOTO_SLOTS: usize = 4;

/// The recorded response to the proposal prompt. Set once, never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Best-effort mirror of the audio element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicStatus {
    /// No attempt made yet.
    #[default]
    Idle,
    /// The last attempt reported playback underway.
    Playing,
    /// Paused by the user.
    Paused,
    /// The last attempt was refused by the runtime.
    Blocked,
}

impl MusicStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, MusicStatus::Playing)
    }
}

/// One photo in the deck. `key` is the stable identity used as the
/// rendering key; `src` is whatever the webview can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub key: String,
    pub src: String,
}

/// Ordered photo deck rotated head-to-tail by the carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDeck {
    photos: VecDeque<Photo>,
}

impl PhotoDeck {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos: photos.into(),
        }
    }

    /// Moves the head photo to the tail. Every reference survives.
    pub fn rotate(&mut self) {
        if self.photos.len() > 1 {
            self.photos.rotate_left(1);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Snapshot of the current order, front first.
    pub fn to_vec(&self) -> Vec<Photo> {
        self.photos.iter().cloned().collect()
    }
}

/// Main application state.
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    /// The user's answer, once chosen.
    pub answer: Option<Answer>,

    /// Whether the envelope overlay is still in the tree.
    pub envelope_visible: bool,

    /// Whether the envelope has reported its open sequence complete.
    pub envelope_opened: bool,

    /// Mirror of the audio element.
    pub music: MusicStatus,

    /// The rotating photo deck.
    pub photos: PhotoDeck,

    /// Presentation hint derived from viewport width.
    pub layout: LayoutMode,
}

impl CardState {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            answer: None,
            envelope_visible: true,
            envelope_opened: false,
            music: MusicStatus::Idle,
            photos: PhotoDeck::new(photos),
            layout: LayoutMode::default(),
        }
    }

    /// The carousel runs exactly while this holds.
    pub fn carousel_active(&self) -> bool {
        self.envelope_opened && self.answer.is_none()
    }

    /// Records the answer. First write wins; returns whether it landed.
    pub fn choose(&mut self, answer: Answer) -> bool {
        if self.answer.is_some() {
            return false;
        }
        self.answer = Some(answer);
        true
    }

    /// The envelope finished its open sequence. One-way.
    pub fn mark_opened(&mut self) {
        self.envelope_opened = true;
    }

    /// Removes the envelope overlay from the tree. One-way.
    pub fn hide_envelope(&mut self) {
        self.envelope_visible = false;
    }

    /// Mirrors the resolved outcome of a playback attempt.
    pub fn apply_playback(&mut self, outcome: &PlaybackOutcome) {
        self.music = match outcome {
            PlaybackOutcome::Started => MusicStatus::Playing,
            PlaybackOutcome::Blocked(_) => MusicStatus::Blocked,
        };
    }

    /// The user paused the music.
    pub fn mark_paused(&mut self) {
        self.music = MusicStatus::Paused;
    }
}
