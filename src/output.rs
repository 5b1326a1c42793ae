//! Result presentation for the CLI
//!
//! The store returns plain values (`Option`, `Vec`); this module turns them
//! into the lines the CLI prints, including the 404 messages for empty
//! results, or into JSON envelopes.

use crate::snippet::Snippet;
use serde_json::{json, Value};

pub const SNIPPET_NOT_FOUND: &str = "404: Snippet Not Found";
pub const NAME_NOT_FOUND: &str = "404: Name Not Found";
pub const SEARCH_EMPTY: &str = "404: Search returned 0 messages";
pub const CATALOG_EMPTY: &str = "404: No Keywords Found";
pub const CATALOG_HEADER: &str = "Catalog of all keywords:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(self) -> bool {
        self == OutputMode::Human
    }
}

pub fn success_envelope(command: &str, data: Value) -> Value {
    json!({ "ok": true, "command": command, "data": data })
}

pub fn error_envelope(message: &str) -> Value {
    json!({ "ok": false, "error": message })
}

pub fn emit_success(command: &str, data: Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&success_envelope(command, data))?);
    Ok(())
}

pub fn emit_error(message: &str) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&error_envelope(message))?);
    Ok(())
}

/// Quote a value the way the CLI echoes user text.
///
/// Single quotes, switching to double quotes when the text contains a `'`
/// but no `"`. Otherwise embedded `'` and `\\` are backslash-escaped.
fn quoted(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\");
    if text.contains('\'') && !text.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

pub fn put_line(snippet: &Snippet) -> String {
    format!("Stored {} as {}", quoted(&snippet.content), quoted(&snippet.name))
}

pub fn get_line(content: Option<&str>) -> String {
    format!("Retrieved snippet: {}", quoted(content.unwrap_or(SNIPPET_NOT_FOUND)))
}

pub fn get_name_line(name: Option<&str>) -> String {
    format!("Retrieved name: {}", quoted(name.unwrap_or(NAME_NOT_FOUND)))
}

/// Summary printed after the matching names
pub fn search_summary(names: &[String]) -> String {
    if names.is_empty() {
        SEARCH_EMPTY.to_string()
    } else {
        format!("Snippets found: {}", names.len())
    }
}

/// Header plus one name per line, or the empty message
pub fn catalog_lines(names: &[String]) -> Vec<String> {
    let mut lines = vec![CATALOG_HEADER.to_string()];
    if names.is_empty() {
        lines.push(CATALOG_EMPTY.to_string());
    } else {
        lines.extend(names.iter().cloned());
    }
    lines
}
