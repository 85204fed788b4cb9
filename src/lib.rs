#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
mod board;
mod common;
mod config;
pub mod cross;
mod dictionary;
mod game;
pub mod geometry;
#[cfg(feature = "std")]
pub mod loader;
#[cfg(feature = "std")]
mod logging;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod rack;
pub mod scoring;
mod tiles;
#[cfg(feature = "std")]
pub mod ui;
pub mod validator;

pub use board::*;
pub use common::*;
pub use config::*;
pub use cross::CrossWords;
pub use dictionary::*;
pub use game::*;
pub use geometry::{Move, Orientation};
#[cfg(feature = "std")]
pub use loader::{load_dictionary, load_letter_table};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use rack::{LetterCounts, Rack};
pub use scoring::Score;
pub use tiles::*;
pub use validator::validate;
