//! Lumen Embedding Host
//!
//! Owns the lifecycle of one embedded Lua interpreter: creation with the
//! baseline standard libraries installed, native module registration against
//! the instance handle, entry script execution, and teardown on drop.

#![warn(missing_docs)]

mod error;
mod runtime;

pub use error::RuntimeError;
pub use runtime::{Runtime, RuntimeOptions};

// Re-export the binding crate so module factories written downstream
// compile against the same interpreter version as the host.
pub use mlua;
