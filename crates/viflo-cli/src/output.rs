use serde::Serialize;
use std::path::Path;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// `  <label padded to width> <path>`
pub fn status_line(label: &str, width: usize, path: &Path) -> String {
    format!("  {:width$} {}", label, path.display(), width = width)
}

/// `1 file`, `2 files`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
