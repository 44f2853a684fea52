//! Filename-only scanner for system folders without usable metadata.

use std::path::{Path, PathBuf};

use romshelf_core::{GameRecord, has_rom_extension};

/// List the ROM files directly inside `folder` and build a minimal record
/// for each one.
///
/// Records come back sorted by filename. Subfolders are not descended into.
/// Filenames that are not valid UTF-8 are kept, with the invalid bytes
/// replaced.
pub fn scan_rom_files(folder: &Path, system: &str) -> std::io::Result<Vec<GameRecord>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_file() && has_rom_extension(p))
        .collect();
    files.sort();

    Ok(files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|name| GameRecord::from_filename(name.to_string_lossy(), folder, system))
        .collect())
}
