use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Named media slots a game record can carry.
///
/// This enum centralizes slot identity (serialized key, display label) so
/// metadata readers and the media directory scanner agree on one set of
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetSlot {
    /// Front box art (2D)
    BoxFront,
    /// Back of the box
    BoxBack,
    /// Box spine
    BoxSpine,
    /// Full unfolded box
    BoxFull,
    /// Physical media image (cartridge/disc)
    Cartridge,
    /// Logo / wheel art
    Logo,
    /// Arcade-style marquee or banner
    Marquee,
    /// Screen bezel overlay
    Bezel,
    /// Grid icon / poster
    GridIcon,
    /// Promotional flyer
    Flyer,
    /// Background or fan art
    Background,
    /// Background music track
    Music,
    /// In-game screenshot
    Screenshot,
    /// Title screen capture
    TitleScreen,
    /// Gameplay or promotional video
    Video,
}

/// All slots in record field order.
const ALL_SLOTS: &[AssetSlot] = &[
    AssetSlot::BoxFront,
    AssetSlot::BoxBack,
    AssetSlot::BoxSpine,
    AssetSlot::BoxFull,
    AssetSlot::Cartridge,
    AssetSlot::Logo,
    AssetSlot::Marquee,
    AssetSlot::Bezel,
    AssetSlot::GridIcon,
    AssetSlot::Flyer,
    AssetSlot::Background,
    AssetSlot::Music,
    AssetSlot::Screenshot,
    AssetSlot::TitleScreen,
    AssetSlot::Video,
];

impl AssetSlot {
    pub fn all() -> &'static [AssetSlot] {
        ALL_SLOTS
    }

    /// Field name used in serialized records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BoxFront => "box_front",
            Self::BoxBack => "box_back",
            Self::BoxSpine => "box_spine",
            Self::BoxFull => "box_full",
            Self::Cartridge => "cartridge",
            Self::Logo => "logo",
            Self::Marquee => "marquee",
            Self::Bezel => "bezel",
            Self::GridIcon => "gridicon",
            Self::Flyer => "flyer",
            Self::Background => "background",
            Self::Music => "music",
            Self::Screenshot => "screenshot",
            Self::TitleScreen => "titlescreen",
            Self::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BoxFront => "Box front",
            Self::BoxBack => "Box back",
            Self::BoxSpine => "Box spine",
            Self::BoxFull => "Full box",
            Self::Cartridge => "Cartridge",
            Self::Logo => "Logo",
            Self::Marquee => "Marquee",
            Self::Bezel => "Bezel",
            Self::GridIcon => "Grid icon",
            Self::Flyer => "Flyer",
            Self::Background => "Background",
            Self::Music => "Music",
            Self::Screenshot => "Screenshot",
            Self::TitleScreen => "Title screen",
            Self::Video => "Video",
        }
    }
}

impl std::fmt::Display for AssetSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolved media paths for one game, one optional path per [`AssetSlot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_front: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_back: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_spine: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_full: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartridge: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bezel: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridicon: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flyer: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titlescreen: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,
}

impl GameAssets {
    pub fn get(&self, slot: AssetSlot) -> Option<&Path> {
        let value = match slot {
            AssetSlot::BoxFront => &self.box_front,
            AssetSlot::BoxBack => &self.box_back,
            AssetSlot::BoxSpine => &self.box_spine,
            AssetSlot::BoxFull => &self.box_full,
            AssetSlot::Cartridge => &self.cartridge,
            AssetSlot::Logo => &self.logo,
            AssetSlot::Marquee => &self.marquee,
            AssetSlot::Bezel => &self.bezel,
            AssetSlot::GridIcon => &self.gridicon,
            AssetSlot::Flyer => &self.flyer,
            AssetSlot::Background => &self.background,
            AssetSlot::Music => &self.music,
            AssetSlot::Screenshot => &self.screenshot,
            AssetSlot::TitleScreen => &self.titlescreen,
            AssetSlot::Video => &self.video,
        };
        value.as_deref()
    }

    fn slot_mut(&mut self, slot: AssetSlot) -> &mut Option<PathBuf> {
        match slot {
            AssetSlot::BoxFront => &mut self.box_front,
            AssetSlot::BoxBack => &mut self.box_back,
            AssetSlot::BoxSpine => &mut self.box_spine,
            AssetSlot::BoxFull => &mut self.box_full,
            AssetSlot::Cartridge => &mut self.cartridge,
            AssetSlot::Logo => &mut self.logo,
            AssetSlot::Marquee => &mut self.marquee,
            AssetSlot::Bezel => &mut self.bezel,
            AssetSlot::GridIcon => &mut self.gridicon,
            AssetSlot::Flyer => &mut self.flyer,
            AssetSlot::Background => &mut self.background,
            AssetSlot::Music => &mut self.music,
            AssetSlot::Screenshot => &mut self.screenshot,
            AssetSlot::TitleScreen => &mut self.titlescreen,
            AssetSlot::Video => &mut self.video,
        }
    }

    /// Set a slot unconditionally (explicit metadata).
    pub fn set(&mut self, slot: AssetSlot, path: impl Into<PathBuf>) {
        *self.slot_mut(slot) = Some(path.into());
    }

    /// Set a slot only if it is still empty. Returns `true` if the path was stored.
    pub fn fill_gap(&mut self, slot: AssetSlot, path: impl Into<PathBuf>) -> bool {
        let value = self.slot_mut(slot);
        if value.is_some() {
            return false;
        }
        *value = Some(path.into());
        true
    }

    /// Populated slots in [`AssetSlot::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetSlot, &Path)> + '_ {
        AssetSlot::all()
            .iter()
            .filter_map(|&slot| self.get(slot).map(|p| (slot, p)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
