//! Core traits and types for Tesla valve response modeling.
//!
//! This crate defines the shared abstractions the valve model and the
//! spectral analysis build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`constraint`]: numeric invariants enforced at construction time, such
//!   as the strictly positive effective areas of a valve

pub mod constraint;
mod model;

pub use model::Model;
