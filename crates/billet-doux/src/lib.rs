//! Billet-Doux: an animated proposal greeting card.
//!
//! A Dioxus desktop application that walks through a scripted sequence: a
//! sealed envelope, looping background music, a rotating polaroid stack, and
//! a two-button proposal prompt whose answer swaps in a response message.

pub mod audio;
pub mod components;
pub mod state;
pub mod viewport;
