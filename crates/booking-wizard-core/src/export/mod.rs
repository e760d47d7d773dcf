//! Confirmation export.

mod confirmation;

pub use confirmation::*;
