//! Pure, deterministic logic shared by the editing engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! text and tree values and return deterministic outputs suitable for tests.

pub mod diff;
pub mod intent;
pub mod patch;
pub mod replace;
pub mod types;
