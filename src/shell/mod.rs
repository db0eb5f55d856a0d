// Command-line shell around the layout engine.
//
// Responsibilities
// - Parse a schedule snapshot and resolve its viewport.
// - The binary entry point (main.rs) reads config and input, renders, prints JSON.

pub mod snapshot;
