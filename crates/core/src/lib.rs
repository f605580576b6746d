//! Domain logic for the video idea planner.
//!
//! Everything here is pure and HTTP-agnostic: the compiled-in option
//! catalog, the outline builder, and the idea composer that ties them
//! together.

pub mod catalog;
pub mod composer;
pub mod error;
pub mod outline;
pub mod types;
pub mod wrap;
