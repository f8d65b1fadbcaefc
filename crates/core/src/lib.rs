//! Core puzzle and run logic. Keep this crate free of IO and platform concerns.

pub mod color;
pub mod events;
pub mod grid;
pub mod ledger;
pub mod overlay;
pub mod puzzle;
pub mod rng;
pub mod run;
pub mod solver;

pub use color::*;
pub use events::*;
pub use grid::*;
pub use ledger::*;
pub use overlay::*;
pub use puzzle::*;
pub use rng::*;
pub use run::*;
pub use solver::*;
