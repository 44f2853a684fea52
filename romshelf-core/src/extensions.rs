//! Recognized ROM file extensions.
//!
//! Only consulted when a system folder has no usable metadata file and the
//! catalog has to be built from filenames alone.

use std::path::Path;

/// Lowercase extensions, without the leading dot.
pub const ROM_EXTENSIONS: &[&str] = &[
    "nes", "sfc", "smc", "gba", "gb", "gbc", "n64", "z64", "v64", "iso", "bin", "cue", "img",
    "zip", "7z", "rar", "md", "gen", "smd", "gg", "sms", "pce", "ngp", "ngc", "ws", "wsc", "a26",
    "a52", "a78", "lnx", "nds", "3ds", "cia", "psx", "pbp", "chd",
];

/// Case-insensitive membership test. A leading dot is tolerated.
pub fn is_rom_extension(ext: &str) -> bool {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    ROM_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

/// Check whether a path ends in a recognized ROM extension.
pub fn has_rom_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(is_rom_extension)
        .unwrap_or(false)
}
