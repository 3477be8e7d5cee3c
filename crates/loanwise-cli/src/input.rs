//! Building a `RawInput` from an applicant file and `--field` pairs.

use std::path::Path;

use anyhow::{bail, Context, Result};
use loanwise_core::models::{RawInput, RawValue};

use crate::cli::InputArgs;

/// Parse `NAME=VALUE`. The value is typed as integer, float, or text.
pub fn parse_field(s: &str) -> Result<(String, RawValue), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((name.to_string(), RawValue::parse(value)))
}

/// Read an applicant file: JSON for `.json`, TOML otherwise.
pub fn read_input_file(path: &Path) -> Result<RawInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))
    } else {
        toml::from_str(&content).with_context(|| format!("invalid TOML in {}", path.display()))
    }
}

/// Merge the input file (if any) with `--field` values; fields win.
pub fn collect_input(args: &InputArgs) -> Result<RawInput> {
    let mut raw = match args.input {
        Some(ref path) => read_input_file(path)?,
        None => RawInput::new(),
    };
    for (name, value) in &args.fields {
        raw.insert(name.clone(), value.clone());
    }
    if raw.is_empty() {
        bail!("no applicant details given; use --input FILE or --field NAME=VALUE");
    }
    Ok(raw)
}
