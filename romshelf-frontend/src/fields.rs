//! Mapping from parsed Pegasus fields onto [`GameRecord`] fields.
//!
//! Metadata files in the wild use several historical spellings for the same
//! field. Every accepted spelling lives in [`FIELD_ALIASES`]; keys that are
//! not listed there are dropped.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use romshelf_core::{AssetSlot, GameRecord};

use crate::pegasus::ParsedGame;

/// Where a metadata key's value ends up on the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    File,
    Files,
    Developer,
    Publisher,
    Genre,
    Players,
    Summary,
    Description,
    Release,
    Rating,
    SortTitle,
    /// Asset fields take only the first whitespace-delimited token.
    Asset(AssetSlot),
}

/// Accepted metadata keys (lowercase) and their targets.
pub const FIELD_ALIASES: &[(&str, FieldTarget)] = &[
    ("file", FieldTarget::File),
    ("files", FieldTarget::Files),
    ("developer", FieldTarget::Developer),
    ("developers", FieldTarget::Developer),
    ("publisher", FieldTarget::Publisher),
    ("publishers", FieldTarget::Publisher),
    ("genre", FieldTarget::Genre),
    ("genres", FieldTarget::Genre),
    ("players", FieldTarget::Players),
    ("summary", FieldTarget::Summary),
    ("description", FieldTarget::Description),
    ("release", FieldTarget::Release),
    ("rating", FieldTarget::Rating),
    ("sort_title", FieldTarget::SortTitle),
    ("sort_name", FieldTarget::SortTitle),
    ("sort-by", FieldTarget::SortTitle),
    ("assets.boxfront", FieldTarget::Asset(AssetSlot::BoxFront)),
    ("assets.box_front", FieldTarget::Asset(AssetSlot::BoxFront)),
    ("assets.boxart2d", FieldTarget::Asset(AssetSlot::BoxFront)),
    ("boxart", FieldTarget::Asset(AssetSlot::BoxFront)),
    ("cover", FieldTarget::Asset(AssetSlot::BoxFront)),
    ("assets.boxback", FieldTarget::Asset(AssetSlot::BoxBack)),
    ("assets.box_back", FieldTarget::Asset(AssetSlot::BoxBack)),
    ("assets.boxspine", FieldTarget::Asset(AssetSlot::BoxSpine)),
    ("assets.box_spine", FieldTarget::Asset(AssetSlot::BoxSpine)),
    ("assets.boxfull", FieldTarget::Asset(AssetSlot::BoxFull)),
    ("assets.box_full", FieldTarget::Asset(AssetSlot::BoxFull)),
    ("assets.cartridge", FieldTarget::Asset(AssetSlot::Cartridge)),
    ("assets.disc", FieldTarget::Asset(AssetSlot::Cartridge)),
    ("assets.cart", FieldTarget::Asset(AssetSlot::Cartridge)),
    ("assets.logo", FieldTarget::Asset(AssetSlot::Logo)),
    ("assets.wheel", FieldTarget::Asset(AssetSlot::Logo)),
    ("assets.marquee", FieldTarget::Asset(AssetSlot::Marquee)),
    ("assets.banner", FieldTarget::Asset(AssetSlot::Marquee)),
    ("assets.bezel", FieldTarget::Asset(AssetSlot::Bezel)),
    ("assets.screenmarquee", FieldTarget::Asset(AssetSlot::Bezel)),
    ("assets.gridicon", FieldTarget::Asset(AssetSlot::GridIcon)),
    ("assets.steam", FieldTarget::Asset(AssetSlot::GridIcon)),
    ("assets.poster", FieldTarget::Asset(AssetSlot::GridIcon)),
    ("assets.flyer", FieldTarget::Asset(AssetSlot::Flyer)),
    ("assets.background", FieldTarget::Asset(AssetSlot::Background)),
    ("assets.fanart", FieldTarget::Asset(AssetSlot::Background)),
    ("assets.music", FieldTarget::Asset(AssetSlot::Music)),
    ("assets.screenshot", FieldTarget::Asset(AssetSlot::Screenshot)),
    ("assets.screenshots", FieldTarget::Asset(AssetSlot::Screenshot)),
    ("assets.titlescreen", FieldTarget::Asset(AssetSlot::TitleScreen)),
    ("assets.title_screen", FieldTarget::Asset(AssetSlot::TitleScreen)),
    ("assets.video", FieldTarget::Asset(AssetSlot::Video)),
    ("assets.videos", FieldTarget::Asset(AssetSlot::Video)),
];

static FIELD_TABLE: LazyLock<HashMap<&'static str, FieldTarget>> =
    LazyLock::new(|| FIELD_ALIASES.iter().copied().collect());

/// Look up the target for a (lowercase) metadata key.
pub fn field_target(key: &str) -> Option<FieldTarget> {
    FIELD_TABLE.get(key).copied()
}

/// Resolve an asset reference against the folder that declared it.
/// Absolute paths are kept as they are.
pub fn resolve_asset_path(dir: &Path, value: &str) -> PathBuf {
    #[cfg(windows)]
    let value = value.replace('/', "\\");
    #[cfg(windows)]
    let value = value.as_str();

    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

/// Build a record from one parsed game block.
///
/// `file` only sets the primary filename when the block has no `files`
/// list. Keys starting with `x-` are kept in [`GameRecord::extra`]; any
/// other unknown key is ignored.
pub fn map_game(parsed: &ParsedGame, dir: &Path, system: &str) -> GameRecord {
    let mut record = GameRecord::new(parsed.name.trim(), dir, system);
    let has_files = parsed.contains("files");

    for field in &parsed.fields {
        let value = field.value.trim();
        let Some(target) = field_target(&field.key) else {
            if field.key.starts_with("x-") {
                record.extra.insert(field.key.clone(), value.to_string());
            }
            continue;
        };

        match target {
            FieldTarget::File => {
                if !has_files {
                    record.file = value.to_string();
                }
            }
            FieldTarget::Files => {
                record.files = value.split_whitespace().map(str::to_string).collect();
            }
            FieldTarget::Developer => record.developer = Some(value.to_string()),
            FieldTarget::Publisher => record.publisher = Some(value.to_string()),
            FieldTarget::Genre => record.genre = Some(value.to_string()),
            FieldTarget::Players => record.players = Some(value.to_string()),
            FieldTarget::Summary => record.summary = Some(value.to_string()),
            FieldTarget::Description => record.description = Some(value.to_string()),
            FieldTarget::Release => record.release = Some(value.to_string()),
            FieldTarget::Rating => record.rating = Some(value.to_string()),
            FieldTarget::SortTitle => record.sort_title = Some(value.to_string()),
            FieldTarget::Asset(slot) => {
                if let Some(token) = value.split_whitespace().next() {
                    record.assets.set(slot, resolve_asset_path(dir, token));
                }
            }
        }
    }

    record
}

#[cfg(test)]
#[path = "tests/fields_tests.rs"]
mod tests;
