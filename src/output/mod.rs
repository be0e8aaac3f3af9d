pub mod human;

use serde::Serialize;
use serde_json::{Value, json};

/// Standard JSON envelope for every command.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Serialize `data` into a success envelope and print it on one line.
pub fn print_success<T: Serialize>(command: &str, data: &T) -> anyhow::Result<()> {
    let out = success(command, serde_json::to_value(data)?);
    println!("{}", serde_json::to_string(&out)?);
    Ok(())
}
