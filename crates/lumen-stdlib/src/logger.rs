//! Logger native module
//!
//! Script-visible logging with level-tagged output. Each function accepts
//! any number of string arguments, joins them with spaces, and writes one
//! line to stdout or stderr.

use mlua::{Lua, Table, Variadic};

/// Log a debug message to stdout
pub fn debug(message: &str) {
    println!("[DEBUG] {}", message);
}

/// Log an info message to stdout
pub fn info(message: &str) {
    println!("{}", message);
}

/// Log a warning message to stderr
pub fn warn(message: &str) {
    eprintln!("[WARN] {}", message);
}

/// Log an error message to stderr
pub fn error(message: &str) {
    eprintln!("[ERROR] {}", message);
}

/// Build the `logger` module exports.
pub fn module(lua: &Lua) -> mlua::Result<Table> {
    let exports = lua.create_table()?;

    exports.set(
        "debug",
        lua.create_function(|_, parts: Variadic<String>| {
            debug(&parts.join(" "));
            Ok(())
        })?,
    )?;

    exports.set(
        "info",
        lua.create_function(|_, parts: Variadic<String>| {
            info(&parts.join(" "));
            Ok(())
        })?,
    )?;

    exports.set(
        "warn",
        lua.create_function(|_, parts: Variadic<String>| {
            warn(&parts.join(" "));
            Ok(())
        })?,
    )?;

    exports.set(
        "error",
        lua.create_function(|_, parts: Variadic<String>| {
            error(&parts.join(" "));
            Ok(())
        })?,
    )?;

    Ok(exports)
}
