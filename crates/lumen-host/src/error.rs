//! Runtime error types.

/// Errors that can occur while creating the runtime, registering modules,
/// or executing scripts.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Interpreter environment could not be allocated or its standard
    /// libraries could not be installed
    #[error("failed to initialize runtime: {0}")]
    Init(#[source] mlua::Error),

    /// Module registration against the preload namespace failed
    #[error("failed to register module '{name}': {source}")]
    Register {
        /// The module name being registered
        name: String,
        /// The underlying interpreter error
        source: mlua::Error,
    },

    /// Entry script could not be read
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Script load or execution raised an uncaught error. The display form
    /// is the interpreter's message text, unaltered.
    #[error("{0}")]
    Script(#[source] mlua::Error),
}
