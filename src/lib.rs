#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod ship;
mod shot;
#[cfg(feature = "std")]
pub mod terminal;
mod win;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::*;
pub use ship::*;
pub use shot::*;
pub use win::*;
