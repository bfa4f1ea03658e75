//! tui-recall: a repeat-the-sequence memory game for the terminal.
//!
//! `core` holds the deterministic state machine and is free of I/O;
//! `term`, `input`, and `store` are the concrete collaborators the
//! binary wires into it.

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
