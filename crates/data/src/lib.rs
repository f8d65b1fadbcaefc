//! Loading and validation of pre-authored puzzle banks.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
