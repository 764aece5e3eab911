//! Core values, persistent collections, and errors for Quasi.
//!
//! This crate provides:
//! - [`Value`] - The dynamic substitution value and its text conversion
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`LtVec`], [`LtMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod value;

pub use collections::{LtMap, LtVec};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use value::Value;
