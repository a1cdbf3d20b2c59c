//! Command line host for the conversation metrics table
//!
//! Loads rows, replays sort and page requests against a
//! [`TableSession`](convo_core::TableSession), and renders the result.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod render;
pub mod replay;

pub use render::{OutputFormat, render, render_json, render_text};
pub use replay::{ViewRequest, build_session};
