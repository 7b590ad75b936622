//! `lumen eval` — evaluate an inline chunk.

use lumen_host::mlua::Value;
use lumen_host::Runtime;

pub fn execute(code: &str) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    lumen_stdlib::register_stdlib(&rt)?;
    let value = rt.eval(code)?;
    if !matches!(value, Value::Nil) {
        println!("{}", format_value(&value));
    }
    Ok(())
}

/// Format a result value to a human-readable display string.
fn format_value(value: &Value) -> String {
    match value {
        Value::Nil => "nil".to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Number(n) => {
            if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Value::String(s) => format!("\"{}\"", s.to_string_lossy()),
        Value::Table(_) => "[table]".to_string(),
        Value::Function(_) => "[function]".to_string(),
        other => format!("[{}]", other.type_name()),
    }
}
