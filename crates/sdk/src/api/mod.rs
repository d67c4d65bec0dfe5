//! API endpoint groups.

pub mod products;

pub use products::*;
