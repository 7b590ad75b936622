//! Path native module
//!
//! Path manipulation and resolution for scripts: `join`, `normalize`,
//! `dirname`, `basename`, `extname`, `isAbsolute`, `cwd`, plus the OS
//! separator as `sep`.

use mlua::{Lua, Table};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR_STR};

/// Join two path segments.
pub fn join(a: &str, b: &str) -> String {
    PathBuf::from(a).join(b).to_string_lossy().into_owned()
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn normalize(path: &str) -> String {
    let mut prefix = String::new();
    let mut parts: Vec<String> = Vec::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => prefix.push_str(MAIN_SEPARATOR_STR),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(parts.last(), Some(last) if last != "..") {
                    parts.pop();
                } else if prefix.is_empty() {
                    parts.push("..".to_string());
                }
                // rooted paths cannot climb above the root
            }
            Component::Normal(p) => parts.push(p.to_string_lossy().into_owned()),
        }
    }

    let joined = parts.join(MAIN_SEPARATOR_STR);
    if prefix.is_empty() && joined.is_empty() {
        ".".to_string()
    } else {
        format!("{}{}", prefix, joined)
    }
}

/// The directory portion of a path.
pub fn dirname(path: &str) -> String {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().into_owned()
        }
        Some(_) => ".".to_string(),
        None => path.to_string(),
    }
}

/// The final component of a path.
pub fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The extension including its dot, or an empty string.
pub fn extname(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Build the `path` module exports.
pub fn module(lua: &Lua) -> mlua::Result<Table> {
    let exports = lua.create_table()?;

    exports.set(
        "join",
        lua.create_function(|_, (a, b): (String, String)| Ok(join(&a, &b)))?,
    )?;
    exports.set(
        "normalize",
        lua.create_function(|_, p: String| Ok(normalize(&p)))?,
    )?;
    exports.set(
        "dirname",
        lua.create_function(|_, p: String| Ok(dirname(&p)))?,
    )?;
    exports.set(
        "basename",
        lua.create_function(|_, p: String| Ok(basename(&p)))?,
    )?;
    exports.set(
        "extname",
        lua.create_function(|_, p: String| Ok(extname(&p)))?,
    )?;
    exports.set(
        "isAbsolute",
        lua.create_function(|_, p: String| Ok(Path::new(&p).is_absolute()))?,
    )?;
    exports.set(
        "cwd",
        lua.create_function(|_, ()| {
            std::env::current_dir()
                .map(|dir| dir.to_string_lossy().into_owned())
                .map_err(|e| mlua::Error::RuntimeError(format!("path.cwd: {}", e)))
        })?,
    )?;
    exports.set("sep", MAIN_SEPARATOR_STR)?;

    Ok(exports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("a", "b"), "a/b");
        assert_eq!(join("a/b", "c.txt"), "a/b/c.txt");
    }

    #[test]
    fn test_normalize_collapses_dots() {
        assert_eq!(normalize("a/./b/../c"), "a/c");
        assert_eq!(normalize("./a"), "a");
        assert_eq!(normalize("a/b/.."), "a");
    }

    #[test]
    fn test_normalize_keeps_leading_parents() {
        assert_eq!(normalize("../a"), "../a");
        assert_eq!(normalize(".."), "..");
    }

    #[test]
    fn test_normalize_rooted_cannot_escape() {
        assert_eq!(normalize("/a/../.."), "/");
    }

    #[test]
    fn test_normalize_empty_is_dot() {
        assert_eq!(normalize(""), ".");
        assert_eq!(normalize("."), ".");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("a/b/c"), "a/b");
        assert_eq!(dirname("c.txt"), ".");
        assert_eq!(dirname("/"), "/");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("a/b/c.txt"), "c.txt");
        assert_eq!(basename("a/b/"), "b");
    }

    #[test]
    fn test_extname() {
        assert_eq!(extname("a/b/c.txt"), ".txt");
        assert_eq!(extname("a/b/c"), "");
        assert_eq!(extname("archive.tar.gz"), ".gz");
    }
}
