use crate::error::{Result, VifloError};
use crate::io::{self, WriteOutcome};
use crate::paths;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Permissions viflo asks for in `.claude/settings.json`.
pub const DEFAULT_ALLOW: &[&str] = &[
    "Bash", "Read", "Write", "Edit", "Glob", "Grep", "WebFetch", "mcp__*",
];

pub fn default_settings() -> Map<String, Value> {
    let mut permissions = Map::new();
    permissions.insert("allow".to_string(), json!(DEFAULT_ALLOW));
    let mut settings = Map::new();
    settings.insert("permissions".to_string(), Value::Object(permissions));
    settings
}

/// Deep-merge `incoming` over `existing` without mutating either.
///
/// - arrays on both sides: deduplicated union, existing elements first
/// - objects on both sides: recurse
/// - anything else: incoming wins
pub fn deep_merge(existing: &Map<String, Value>, incoming: &Map<String, Value>) -> Map<String, Value> {
    let mut result = existing.clone();

    for (key, incoming_val) in incoming {
        let merged = match (existing.get(key), incoming_val) {
            (Some(Value::Array(a)), Value::Array(b)) => Value::Array(union(a, b)),
            (Some(Value::Object(a)), Value::Object(b)) => Value::Object(deep_merge(a, b)),
            _ => incoming_val.clone(),
        };
        result.insert(key.clone(), merged);
    }

    result
}

fn union(existing: &[Value], incoming: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(existing.len() + incoming.len());
    for v in existing.iter().chain(incoming) {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

/// Parse a settings document; the top level must be an object.
///
/// Takes raw bytes so that invalid UTF-8 is reported as malformed settings
/// rather than as an I/O failure.
pub fn parse_settings(path: &Path, bytes: &[u8]) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| VifloError::MalformedSettings {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(VifloError::MalformedSettings {
            path: path.to_path_buf(),
            reason: format!("expected a JSON object, found {}", type_name(&other)),
        }),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// 2-space indented JSON with a single trailing newline.
pub fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

/// Merge `incoming` into `<root>/.claude/settings.json`.
///
/// A missing file counts as `{}`. An unparseable file is an error and is left
/// untouched.
pub fn write_settings(root: &Path, incoming: &Map<String, Value>) -> Result<WriteOutcome> {
    let path = paths::settings_path(root)?;
    let existing = match io::read_optional_bytes(&path)? {
        Some(bytes) => parse_settings(&path, &bytes)?,
        None => Map::new(),
    };
    let merged = deep_merge(&existing, incoming);
    io::write_if_changed(&path, &to_pretty_json(&merged)?)
}
