//! Convention-based asset discovery in `media/<game name>/`.
//!
//! Files are matched on their lowercased stem (`boxfront.png`, `Video.mp4`,
//! ...). A discovered file only fills a slot the metadata left empty.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use romshelf_core::{AssetSlot, GameRecord};

/// Name of the per-folder media directory.
pub const MEDIA_DIR_NAME: &str = "media";

/// Accepted filename stems (lowercase) and the slot each one fills.
pub const MEDIA_STEM_ALIASES: &[(&str, AssetSlot)] = &[
    ("boxfront", AssetSlot::BoxFront),
    ("box_front", AssetSlot::BoxFront),
    ("boxart", AssetSlot::BoxFront),
    ("cover", AssetSlot::BoxFront),
    ("boxback", AssetSlot::BoxBack),
    ("box_back", AssetSlot::BoxBack),
    ("boxspine", AssetSlot::BoxSpine),
    ("box_spine", AssetSlot::BoxSpine),
    ("boxfull", AssetSlot::BoxFull),
    ("box_full", AssetSlot::BoxFull),
    ("cartridge", AssetSlot::Cartridge),
    ("cart", AssetSlot::Cartridge),
    ("disc", AssetSlot::Cartridge),
    ("logo", AssetSlot::Logo),
    ("wheel", AssetSlot::Logo),
    ("marquee", AssetSlot::Marquee),
    ("banner", AssetSlot::Marquee),
    ("bezel", AssetSlot::Bezel),
    ("screenmarquee", AssetSlot::Bezel),
    ("gridicon", AssetSlot::GridIcon),
    ("steam", AssetSlot::GridIcon),
    ("poster", AssetSlot::GridIcon),
    ("flyer", AssetSlot::Flyer),
    ("flyers", AssetSlot::Flyer),
    ("background", AssetSlot::Background),
    ("fanart", AssetSlot::Background),
    ("music", AssetSlot::Music),
    ("bgm", AssetSlot::Music),
    ("screenshot", AssetSlot::Screenshot),
    ("screenshots", AssetSlot::Screenshot),
    ("screen", AssetSlot::Screenshot),
    ("titlescreen", AssetSlot::TitleScreen),
    ("title_screen", AssetSlot::TitleScreen),
    ("title", AssetSlot::TitleScreen),
    ("video", AssetSlot::Video),
    ("videos", AssetSlot::Video),
];

static STEM_TABLE: LazyLock<HashMap<&'static str, AssetSlot>> =
    LazyLock::new(|| MEDIA_STEM_ALIASES.iter().copied().collect());

/// Slot for a media filename stem (case-insensitive).
pub fn asset_for_stem(stem: &str) -> Option<AssetSlot> {
    STEM_TABLE.get(stem.to_lowercase().as_str()).copied()
}

/// `<dir>/media/<name>`, with the game name used verbatim.
///
/// Returns `None` for a name that would leave the media folder: an absolute
/// path, a drive prefix, or a `..` component.
pub fn media_dir_for(dir: &Path, name: &str) -> Option<PathBuf> {
    let escapes = Path::new(name).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return None;
    }
    Some(dir.join(MEDIA_DIR_NAME).join(name))
}

/// Fill empty asset slots from `media/<record.name>/` under `dir`.
///
/// Returns the number of slots filled. A missing or unreadable media folder
/// is not an error.
pub fn fill_from_media_dir(record: &mut GameRecord, dir: &Path) -> usize {
    if record.name.is_empty() {
        return 0;
    }

    let Some(media_dir) = media_dir_for(dir, &record.name) else {
        log::debug!("Not a usable media folder name: {:?}", record.name);
        return 0;
    };
    if !media_dir.is_dir() {
        return 0;
    }

    let mut entries: Vec<PathBuf> = match std::fs::read_dir(&media_dir) {
        Ok(entries) => entries.flatten().map(|e| e.path()).collect(),
        Err(e) => {
            log::debug!("Skipping unreadable {}: {}", media_dir.display(), e);
            return 0;
        }
    };
    // First match per slot wins, so keep the order stable.
    entries.sort();

    let mut filled = 0;
    for path in entries {
        if !path.is_file() {
            continue;
        }
        let Some(slot) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(asset_for_stem)
        else {
            continue;
        };
        if record.assets.fill_gap(slot, path) {
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
#[path = "tests/media_dir_tests.rs"]
mod tests;
