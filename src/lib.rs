#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ability;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use ability::*;
pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
