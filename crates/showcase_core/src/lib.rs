//! Showcase Core - Backend logic for Works Showcase
//!
//! This crate contains all showcase logic with zero UI dependencies:
//! the works-feed client, shuffling, card planning, the featured-work
//! picker, and the member carousel state machine. It can be used by the
//! desktop shell or a CLI tool.

pub mod carousel;
pub mod cards;
pub mod config;
pub mod embed;
pub mod featured;
pub mod feed;
pub mod logging;
pub mod models;
pub mod showcase;
pub mod shuffle;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
