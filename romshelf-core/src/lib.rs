use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub mod asset;
pub mod extensions;

pub use asset::{AssetSlot, GameAssets};
pub use extensions::{ROM_EXTENSIONS, has_rom_extension, is_rom_extension};

/// One game entry in a system folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Primary ROM filename, relative to `directory`. Empty when the
    /// metadata declares a game without a file.
    pub file: String,

    /// Whitespace-split `files:` list, kept as declared.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    /// Display name
    pub name: String,

    /// Alternate title used for sorting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Player count descriptor (e.g., "1", "1-4")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<String>,

    /// Release date as written by the metadata author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// Rating as written by the metadata author (format varies by source)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    /// Folder the record was read from
    pub directory: PathBuf,

    /// System identifier (the folder name, verbatim)
    pub system: String,

    #[serde(flatten)]
    pub assets: GameAssets,

    /// Vendor-specific `x-` keys
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl GameRecord {
    pub fn new(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        system: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            system: system.into(),
            ..Default::default()
        }
    }

    /// A record derived from a bare ROM filename: the display name is the
    /// filename with its extension stripped.
    pub fn from_filename(
        file: impl Into<String>,
        directory: impl Into<PathBuf>,
        system: impl Into<String>,
    ) -> Self {
        let file = file.into();
        let name = Path::new(&file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&file)
            .to_string();
        Self {
            file,
            ..Self::new(name, directory, system)
        }
    }

    /// Full path to the primary ROM file, if one is declared.
    pub fn rom_path(&self) -> Option<PathBuf> {
        if self.file.is_empty() {
            None
        } else {
            Some(self.directory.join(&self.file))
        }
    }

    /// Whether the primary ROM file is on disk. A record that declares no
    /// file counts as present.
    pub fn rom_exists(&self) -> bool {
        self.rom_path().is_none_or(|p| p.exists())
    }
}

/// Which metadata convention a system folder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFormat {
    /// `metadata.pegasus.txt` or `metadata.txt`
    PegasusMetadata,
    /// `gamelist.xml` (EmulationStation / ES-DE)
    EmulationStationMetadata,
    /// No metadata file; records come from ROM filenames
    FilenameOnly,
}

impl MetadataFormat {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PegasusMetadata => "Pegasus",
            Self::EmulationStationMetadata => "EmulationStation",
            Self::FilenameOnly => "filenames",
        }
    }
}

impl std::fmt::Display for MetadataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// All games found in one system folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemCatalog {
    /// System identifier (the folder name)
    pub system: String,
    /// Absolute path of the system folder
    pub path: PathBuf,
    /// The convention that actually produced `games`
    pub format: MetadataFormat,
    /// Games in parse order
    pub games: Vec<GameRecord>,
}

impl SystemCatalog {
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
