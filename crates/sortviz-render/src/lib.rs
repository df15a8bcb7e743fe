#![forbid(unsafe_code)]

//! Render kernel for sortviz: cell grid, buffer diffing, and state-tracked
//! ANSI presentation.
//!
//! The layering mirrors the rest of the workspace: this crate depends only
//! on `sortviz-core` and knows nothing about the runtime or the model.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod diff;
pub mod frame;
pub mod presenter;
