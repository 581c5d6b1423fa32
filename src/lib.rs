//! TUI Shapi (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_shapi::{core,input,term,types}` so
//! the binary, integration tests and benches share one import surface.

pub use shapi_core as core;
pub use shapi_input as input;
pub use shapi_term as term;
pub use shapi_types as types;
