//! Lumen Standard Library
//!
//! Natively-implemented modules for scripts running under the Lumen host.
//! Each module is a factory that builds its export table on first
//! `require`; [`register_stdlib`] installs all of them into a runtime.

#![warn(missing_docs)]

pub mod fs;
pub mod logger;
pub mod path;
pub mod time;

use lumen_host::{Runtime, RuntimeError};

/// Register every builtin module into the given runtime.
///
/// After calling this, scripts can `require` any of `logger`, `path`,
/// `time`, and `fs`.
pub fn register_stdlib(rt: &Runtime) -> Result<(), RuntimeError> {
    rt.register_module("logger", logger::module)?;
    rt.register_module("path", path::module)?;
    rt.register_module("time", time::module)?;
    rt.register_module("fs", fs::module)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_modules_resolve() {
        let rt = Runtime::new().unwrap();
        register_stdlib(&rt).unwrap();
        rt.eval(
            "for _, name in ipairs({'logger', 'path', 'time', 'fs'}) do\n\
             assert(type(require(name)) == 'table', name)\n\
             end",
        )
        .unwrap();
    }

    #[test]
    fn test_modules_usable_from_script() {
        let rt = Runtime::new().unwrap();
        register_stdlib(&rt).unwrap();
        let value = rt
            .eval("local path = require('path')\nreturn path.join('a', 'b')")
            .unwrap();
        match value {
            mlua::Value::String(s) => assert_eq!(s.to_string_lossy(), "a/b"),
            other => panic!("expected string, got {:?}", other),
        }
    }
}
