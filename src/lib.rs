#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod board;
mod combat;
mod common;
mod config;
mod dispatch;
mod engine;
mod fleet;
mod game;
mod placement;
mod ship;
pub mod view;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use ai::*;
pub use board::*;
pub use combat::*;
pub use common::*;
pub use config::*;
pub use dispatch::*;
pub use engine::*;
pub use fleet::*;
pub use game::*;
pub use placement::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_coord, run_session, Command, ParseError};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
