//! Command handlers - one per CLI subcommand
//!
//! Each handler calls the store once and prints the result in the
//! requested output mode.

use crate::config::{self, SnippetsConfig};
use crate::output::{self, emit_success, OutputMode};
use crate::storage::SnippetStore;
use crate::ui::{self, Icons};
use serde_json::json;
use std::path::Path;

pub fn run_put(
    store: &mut SnippetStore,
    output_mode: OutputMode,
    name: &str,
    snippet: &str,
) -> anyhow::Result<()> {
    let stored = store.put(name, snippet)?;
    if output_mode.is_human() {
        ui::line(&output::put_line(&stored));
    } else {
        emit_success("put", json!(stored))?;
    }
    Ok(())
}

pub fn run_get(store: &mut SnippetStore, output_mode: OutputMode, name: &str) -> anyhow::Result<()> {
    let content = store.get(name)?;
    if output_mode.is_human() {
        ui::line(&output::get_line(content.as_deref()));
    } else {
        emit_success("get", json!({ "name": name, "content": content }))?;
    }
    Ok(())
}

pub fn run_get_name(
    store: &mut SnippetStore,
    output_mode: OutputMode,
    snippet: &str,
) -> anyhow::Result<()> {
    let name = store.get_name(snippet)?;
    if output_mode.is_human() {
        ui::line(&output::get_name_line(name.as_deref()));
    } else {
        emit_success("get_name", json!({ "content": snippet, "name": name }))?;
    }
    Ok(())
}

pub fn run_search(store: &mut SnippetStore, output_mode: OutputMode, term: &str) -> anyhow::Result<()> {
    let names = store.search(term)?;
    if output_mode.is_human() {
        for name in &names {
            ui::name(name);
        }
        ui::line(&output::search_summary(&names));
    } else {
        emit_success("search", json!({ "pattern": term, "names": names }))?;
    }
    Ok(())
}

pub fn run_catalog(store: &mut SnippetStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let names = store.catalog()?;
    if output_mode.is_human() {
        let mut lines = output::catalog_lines(&names).into_iter();
        if let Some(title) = lines.next() {
            ui::header(&title);
        }
        if names.is_empty() {
            lines.for_each(|l| ui::line(&l));
        } else {
            lines.for_each(|l| ui::name(&l));
        }
    } else {
        emit_success("catalog", json!({ "names": names }))?;
    }
    Ok(())
}

pub fn run_init(output_mode: OutputMode, path: &Path, force: bool) -> anyhow::Result<()> {
    let config = SnippetsConfig::starter();
    config::ensure_parent_dir(path)?;
    config::write_config(path, &config, force)?;
    tracing::info!("Wrote config to {}", path.display());

    if output_mode.is_human() {
        ui::line(&format!("{} Wrote {}", Icons::CHECK, path.display()));
    } else {
        emit_success("init", json!({ "path": path.display().to_string(), "config": config }))?;
    }
    Ok(())
}
