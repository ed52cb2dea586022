use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

pub fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(value)
}

// インデント 2，非 ASCII 文字はエスケープしない
pub fn write_json_pretty(path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
