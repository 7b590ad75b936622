//! Runtime creation, module registration, and script execution.
//!
//! The [`Runtime`] is a single exclusively-owned interpreter instance. Its
//! life is a straight line: created, prepared (standard libraries plus any
//! registered native modules), executed, destroyed. Teardown happens in
//! `Drop`, so every exit path out of the prepared state releases the
//! interpreter exactly once.

use std::path::Path;

use mlua::{Lua, LuaOptions, StdLib, Table, Value, Variadic};

use crate::error::RuntimeError;

/// Construction-time knobs for a [`Runtime`].
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// Interpreter heap limit in bytes. 0 means unlimited.
    pub memory_limit: usize,
}

/// One embedded Lua interpreter, exclusively owned by its creator.
///
/// Dropping the `Runtime` releases everything the interpreter allocated,
/// including state captured by registered module factories.
pub struct Runtime {
    lua: Lua,
}

impl Runtime {
    /// Create a runtime with default options.
    pub fn new() -> Result<Self, RuntimeError> {
        Self::with_options(RuntimeOptions::default())
    }

    /// Create a runtime with the given options.
    ///
    /// The safe Lua standard libraries are installed before this returns,
    /// so scripts may assume they are available. On failure nothing was
    /// allocated and there is nothing to tear down.
    pub fn with_options(options: RuntimeOptions) -> Result<Self, RuntimeError> {
        let lua = Lua::new_with(StdLib::ALL_SAFE, LuaOptions::default())
            .map_err(RuntimeError::Init)?;

        if options.memory_limit > 0 {
            lua.set_memory_limit(options.memory_limit)
                .map_err(RuntimeError::Init)?;
        }

        Ok(Self { lua })
    }

    /// Register a native module under `name`.
    ///
    /// The factory runs on the first in-script `require(name)` and its
    /// result is cached by the interpreter for the lifetime of this runtime.
    /// Must be called before [`run_file`](Self::run_file) for the entry
    /// script to see the module. Registering the same name twice replaces
    /// the earlier factory (last write wins).
    pub fn register_module<F>(&self, name: &str, factory: F) -> Result<(), RuntimeError>
    where
        F: Fn(&Lua) -> mlua::Result<Table> + Send + 'static,
    {
        // require() calls the loader with (modname, extra); the factory
        // only needs the interpreter handle.
        let loader = self
            .lua
            .create_function(move |lua, _modname: String| factory(lua))
            .map_err(|source| RuntimeError::Register {
                name: name.to_string(),
                source,
            })?;

        self.preload()
            .and_then(|preload| preload.set(name, loader))
            .map_err(|source| RuntimeError::Register {
                name: name.to_string(),
                source,
            })
    }

    /// Load and execute the file at `path` as a top-level chunk.
    ///
    /// Succeeds silently. Fails with [`RuntimeError::Io`] when the file
    /// cannot be read and [`RuntimeError::Script`] when parsing or
    /// execution raises an uncaught error.
    pub fn run_file(&self, path: &Path) -> Result<(), RuntimeError> {
        let source = std::fs::read_to_string(path)?;
        self.lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .exec()
            .map_err(RuntimeError::Script)
    }

    /// Execute an inline chunk and return its first result value.
    pub fn eval(&self, source: &str) -> Result<Value, RuntimeError> {
        let results = self
            .lua
            .load(source)
            .set_name("=eval")
            .eval::<Variadic<Value>>()
            .map_err(RuntimeError::Script)?;
        Ok(results.into_iter().next().unwrap_or(Value::Nil))
    }

    fn preload(&self) -> mlua::Result<Table> {
        let package: Table = self.lua.globals().get("package")?;
        package.get("preload")
    }
}
