//! Livraria Application Library
//!
//! This library provides the book registry module and application wiring.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
