#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod controller;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placer;
mod ship;
#[cfg(feature = "std")]
mod view;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use controller::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placer::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use view::*;
