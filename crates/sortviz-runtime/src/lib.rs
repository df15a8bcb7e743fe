#![forbid(unsafe_code)]

//! Elm-style runtime for sortviz.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use simulator::ProgramSimulator;
