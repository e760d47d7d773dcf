//! Domain models for the booking wizard.

mod booking;
mod patient;
mod practice;
mod schedule;
mod service;

pub use booking::*;
pub use patient::*;
pub use practice::*;
pub use schedule::*;
pub use service::*;
