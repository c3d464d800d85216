//! z048 (workspace facade crate).
//!
//! This package keeps a stable `z048::{core,history,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use z048_core as core;
pub use z048_history as history;
pub use z048_types as types;
