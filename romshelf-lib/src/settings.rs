//! Shared application settings (library path, scan workers).
//!
//! The settings file is `<config dir>/romshelf/settings.toml`:
//!
//! ```toml
//! [library]
//! current_root = "/path/to/roms"
//!
//! [scan]
//! workers = 4
//! ```

use std::path::{Path, PathBuf};

use crate::ScanError;

/// Canonical path to the shared settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("romshelf").join("settings.toml")
}

/// Resolve the library root path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.current_root` in `settings.toml`
/// 3. Current working directory
pub fn resolve_library_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_library_path() {
        return p;
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Read `library.current_root` from `settings.toml`, if set.
pub fn load_library_path() -> Option<PathBuf> {
    let doc = load_settings_doc()?;
    library_path_from(&doc)
}

/// Number of concurrent scan workers: `scan.workers` if set to a positive
/// value, otherwise the available parallelism.
pub fn scan_workers() -> usize {
    load_settings_doc()
        .as_ref()
        .and_then(workers_from)
        .unwrap_or_else(default_workers)
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn load_settings_doc() -> Option<toml::Value> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    contents.parse().ok()
}

fn library_path_from(doc: &toml::Value) -> Option<PathBuf> {
    let root = doc.get("library")?.get("current_root")?.as_str()?;
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

fn workers_from(doc: &toml::Value) -> Option<usize> {
    let workers = doc.get("scan")?.get("workers")?.as_integer()?;
    usize::try_from(workers).ok().filter(|&n| n > 0)
}

/// Set or remove `[library].current_root`, leaving every other key alone.
fn update_library_path(doc: &mut toml::Value, path: Option<&Path>) -> Result<(), ScanError> {
    let table = doc
        .as_table_mut()
        .ok_or_else(|| ScanError::settings("settings.toml root is not a table"))?;
    let library = table
        .entry("library")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let lib_table = library
        .as_table_mut()
        .ok_or_else(|| ScanError::settings("[library] is not a table"))?;

    match path {
        Some(p) => {
            lib_table.insert(
                "current_root".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            lib_table.remove("current_root");
        }
    }
    Ok(())
}

/// Save (or clear) the library path in `settings.toml`.
pub fn save_library_path(path: Option<&Path>) -> Result<(), ScanError> {
    save_library_path_to(&settings_path(), path)
}

fn save_library_path_to(settings: &Path, path: Option<&Path>) -> Result<(), ScanError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default())),
        Err(_) => toml::Value::Table(Default::default()),
    };

    update_library_path(&mut doc, path)?;

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(|e| ScanError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let doc = load_settings_doc()?;
    toml::to_string_pretty(&doc).ok()
}
