//! Library scanning: one [`SystemCatalog`] per system folder under a root.
//!
//! Every immediate subfolder of the root is one system, named after the
//! folder. Each folder is scanned independently, so a broken folder only
//! loses its own games.

use std::path::{Path, PathBuf};

use romshelf_core::{GameRecord, MetadataFormat, SystemCatalog};
use romshelf_frontend::MetadataSource;

use crate::ScanError;
use crate::detect::{detect_format, metadata_source};
use crate::scanner::scan_rom_files;
use crate::worker_pool::WorkerPool;

/// Scan every system folder under `root`.
///
/// A missing or unreadable root yields an empty catalog. Systems come back
/// sorted by folder name; folders without games are left out.
pub fn scan_library(root: &Path) -> Vec<SystemCatalog> {
    scan_library_strict(root).unwrap_or_else(|e| {
        log::warn!("{}", e);
        Vec::new()
    })
}

/// Like [`scan_library`], but reports a root that exists and cannot be listed.
pub fn scan_library_strict(root: &Path) -> Result<Vec<SystemCatalog>, ScanError> {
    let dirs = system_dirs(root)?;
    let catalog: Vec<SystemCatalog> = dirs.iter().filter_map(|d| scan_system(d)).collect();
    log::debug!(
        "Scanned {} folder(s) under {}, {} with games",
        dirs.len(),
        root.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Scan system folders on `workers` concurrent blocking tasks.
///
/// Results arrive in completion order; sort by `system` if a stable order
/// matters.
pub async fn scan_library_concurrent(
    root: &Path,
    workers: usize,
) -> Result<Vec<SystemCatalog>, ScanError> {
    let dirs = system_dirs(root)?;
    let pool = WorkerPool::start(workers, dirs, |dir: PathBuf| async move {
        tokio::task::spawn_blocking(move || scan_system(&dir))
            .await
            .map_err(|e| ScanError::task(e.to_string()))
    });

    let mut catalog = Vec::new();
    for result in pool.collect().await {
        match result {
            Ok(Some(system)) => catalog.push(system),
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }
    }
    Ok(catalog)
}

/// Immediate subfolders of `root`, as absolute paths sorted by name.
///
/// A root that does not exist has no system folders.
pub fn system_dirs(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        log::debug!("Library root {} does not exist", root.display());
        return Ok(Vec::new());
    }
    let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let entries = std::fs::read_dir(&root).map_err(|e| ScanError::root_unreadable(&root, e))?;
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// The system identifier for a folder: its name, verbatim.
pub fn system_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Scan one system folder. Returns `None` when it yields no games.
pub fn scan_system(dir: &Path) -> Option<SystemCatalog> {
    let system = system_name(dir);
    let (format, games) = read_system_games(dir, &system);
    if games.is_empty() {
        log::debug!("{}: no games, skipping", system);
        return None;
    }

    log::info!("{}: {} game(s) from {}", system, games.len(), format);
    Some(SystemCatalog {
        system,
        path: dir.to_path_buf(),
        format,
        games,
    })
}

/// Read the games in `dir` with its detected metadata convention, falling
/// back to ROM filenames when the metadata is unreadable or declares no
/// games. Returns the convention that actually produced the games.
pub fn read_system_games(dir: &Path, system: &str) -> (MetadataFormat, Vec<GameRecord>) {
    let format = detect_format(dir);
    read_games_with(dir, system, format, metadata_source(format))
}

/// [`read_system_games`] with the metadata reader supplied by the caller.
/// `None` goes straight to the filename scan.
pub fn read_games_with(
    dir: &Path,
    system: &str,
    format: MetadataFormat,
    source: Option<&dyn MetadataSource>,
) -> (MetadataFormat, Vec<GameRecord>) {
    if let Some(source) = source {
        match read_metadata(dir, system, source) {
            Ok(games) if !games.is_empty() => return (format, games),
            Ok(_) => log::debug!("{}: {} metadata has no games", system, source.name()),
            Err(e) => log::warn!("{}: {}; using filenames instead", system, e),
        }
    }

    let games = scan_rom_files(dir, system).unwrap_or_else(|e| {
        log::warn!("{}: cannot list {}: {}", system, dir.display(), e);
        Vec::new()
    });
    (MetadataFormat::FilenameOnly, games)
}

/// Read `dir` through one metadata reader.
pub fn read_metadata(
    dir: &Path,
    system: &str,
    source: &dyn MetadataSource,
) -> Result<Vec<GameRecord>, ScanError> {
    Ok(source.read_games(dir, system)?)
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
