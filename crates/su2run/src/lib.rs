//! SU2Run library: application logic of the `su2run` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
