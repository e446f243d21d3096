//! Utility functions and helpers.
//!
//! This module contains small path helpers shared by the resolver, the
//! configuration layer and the descriptor loader.

pub mod path;

pub use path::{anchor, is_blank, non_blank};
