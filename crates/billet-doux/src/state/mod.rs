//! State management for the greeting card.

pub mod card_state;

pub use card_state::*;
