//! Side-effecting filesystem operations for the editing engine.

pub mod actions;
pub mod backup;
pub mod config;
pub mod document;
pub mod paths;
pub mod replace;
pub mod scanner;
