//! Path generation module
//!
//! Turns a classification into a collision-free destination path.

mod destination;

pub use destination::{DestinationResolver, Placement, numbered_name};
