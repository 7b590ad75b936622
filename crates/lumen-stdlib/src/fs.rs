//! Filesystem native module
//!
//! UTF-8 file operations for scripts: `read`, `write`, `append`, `exists`,
//! `remove`. Failures surface as script-level errors carrying the
//! operation name, never as host failures.

use mlua::{Lua, Table};
use std::fs;
use std::io::Write;

/// Build the `fs` module exports.
pub fn module(lua: &Lua) -> mlua::Result<Table> {
    let exports = lua.create_table()?;

    exports.set(
        "read",
        lua.create_function(|_, path: String| {
            fs::read_to_string(&path)
                .map_err(|e| mlua::Error::RuntimeError(format!("fs.read: {}", e)))
        })?,
    )?;

    exports.set(
        "write",
        lua.create_function(|_, (path, data): (String, String)| {
            fs::write(&path, data.as_bytes())
                .map_err(|e| mlua::Error::RuntimeError(format!("fs.write: {}", e)))
        })?,
    )?;

    exports.set(
        "append",
        lua.create_function(|_, (path, data): (String, String)| {
            fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .and_then(|mut file| file.write_all(data.as_bytes()))
                .map_err(|e| mlua::Error::RuntimeError(format!("fs.append: {}", e)))
        })?,
    )?;

    exports.set(
        "exists",
        lua.create_function(|_, path: String| Ok(fs::metadata(&path).is_ok()))?,
    )?;

    exports.set(
        "remove",
        lua.create_function(|_, path: String| {
            fs::remove_file(&path)
                .map_err(|e| mlua::Error::RuntimeError(format!("fs.remove: {}", e)))
        })?,
    )?;

    Ok(exports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlua::Function;

    #[test]
    fn test_write_read_append_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.txt");
        let file = file.to_string_lossy().into_owned();

        let lua = Lua::new();
        let exports = module(&lua).unwrap();
        let write: Function = exports.get("write").unwrap();
        let append: Function = exports.get("append").unwrap();
        let read: Function = exports.get("read").unwrap();

        write.call::<()>((file.clone(), "hello")).unwrap();
        append.call::<()>((file.clone(), " world")).unwrap();
        let content: String = read.call(file).unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_exists_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("gone.txt");
        let file = file.to_string_lossy().into_owned();

        let lua = Lua::new();
        let exports = module(&lua).unwrap();
        let write: Function = exports.get("write").unwrap();
        let exists: Function = exports.get("exists").unwrap();
        let remove: Function = exports.get("remove").unwrap();

        assert!(!exists.call::<bool>(file.clone()).unwrap());
        write.call::<()>((file.clone(), "x")).unwrap();
        assert!(exists.call::<bool>(file.clone()).unwrap());
        remove.call::<()>(file.clone()).unwrap();
        assert!(!exists.call::<bool>(file).unwrap());
    }

    #[test]
    fn test_read_missing_reports_operation() {
        let lua = Lua::new();
        let exports = module(&lua).unwrap();
        let read: Function = exports.get("read").unwrap();
        let err = read.call::<String>("no/such/file.txt").unwrap_err();
        assert!(err.to_string().contains("fs.read"), "got {}", err);
    }
}
