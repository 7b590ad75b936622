//! Time native module
//!
//! Wall-clock and monotonic time in milliseconds, plus a blocking sleep.

use mlua::{Lua, Table};
use std::sync::LazyLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Build the `time` module exports.
pub fn module(lua: &Lua) -> mlua::Result<Table> {
    let exports = lua.create_table()?;

    exports.set(
        "now",
        lua.create_function(|_, ()| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            Ok(now.as_millis() as f64)
        })?,
    )?;

    exports.set(
        "monotonic",
        lua.create_function(|_, ()| Ok(EPOCH.elapsed().as_millis() as f64))?,
    )?;

    exports.set(
        "sleep",
        lua.create_function(|_, ms: f64| {
            if ms > 0.0 {
                std::thread::sleep(Duration::from_millis(ms as u64));
            }
            Ok(())
        })?,
    )?;

    Ok(exports)
}
