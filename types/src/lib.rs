//! Core domain types for FLAMES.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod name;
mod result;
pub mod ui;

pub use name::{InvalidInput, Name, NameSlot, is_allowed_char};
pub use result::{Accent, ResultCode, ResultDetails, ResultIcon, Rgb};
