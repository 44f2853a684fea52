use std::io::BufRead;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use romshelf_core::{AssetSlot, GameRecord};

use crate::fields::resolve_asset_path;
use crate::{FrontendError, MetadataSource, keep_if_rom_present, media_dir, read_metadata_text};

/// EmulationStation / ES-DE metadata filename.
pub const GAMELIST_FILENAME: &str = "gamelist.xml";

/// ES-DE (EmulationStation Desktop Edition) `gamelist.xml` reader.
pub struct EsDeSource;

impl EsDeSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsDeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for EsDeSource {
    fn name(&self) -> &'static str {
        "ES-DE"
    }

    fn metadata_file(&self, dir: &Path) -> Option<PathBuf> {
        let path = dir.join(GAMELIST_FILENAME);
        path.is_file().then_some(path)
    }

    fn read_games(&self, dir: &Path, system: &str) -> Result<Vec<GameRecord>, FrontendError> {
        let path = self
            .metadata_file(dir)
            .ok_or_else(|| FrontendError::missing_metadata(dir))?;
        let content = read_metadata_text(&path)?;
        let games = parse_gamelist(content.as_bytes(), dir, system)?;
        Ok(games
            .into_iter()
            .filter(|game| keep_if_rom_present(game, system))
            .map(|mut game| {
                media_dir::fill_from_media_dir(&mut game, dir);
                game
            })
            .collect())
    }
}

/// Text fields of one `<game>` element.
#[derive(Debug, Default)]
struct GamelistEntry {
    path: String,
    name: String,
    desc: String,
    developer: String,
    publisher: String,
    genre: String,
    players: String,
    releasedate: String,
    rating: String,
    /// (tag rank, slot, value)
    media: Vec<(usize, AssetSlot, String)>,
}

impl GamelistEntry {
    fn push_text(&mut self, tag: &str, text: &str) {
        let target = match tag {
            "path" => &mut self.path,
            "name" => &mut self.name,
            "desc" => &mut self.desc,
            "developer" => &mut self.developer,
            "publisher" => &mut self.publisher,
            "genre" => &mut self.genre,
            "players" => &mut self.players,
            "releasedate" => &mut self.releasedate,
            "rating" => &mut self.rating,
            _ => {
                if let Some((rank, slot)) = media_slot(tag) {
                    self.media.push((rank, slot, text.to_string()));
                }
                return;
            }
        };
        target.push_str(text);
    }

    fn into_record(self, dir: &Path, system: &str) -> Option<GameRecord> {
        let file = self.path.trim();
        let file = file.strip_prefix("./").unwrap_or(file);
        if file.is_empty() {
            return None;
        }

        let mut record = GameRecord::from_filename(file, dir, system);
        if !self.name.trim().is_empty() {
            record.name = self.name.trim().to_string();
        }
        record.description = non_empty(self.desc);
        record.developer = non_empty(self.developer);
        record.publisher = non_empty(self.publisher);
        record.genre = non_empty(self.genre);
        record.players = non_empty(self.players);
        record.release = non_empty(self.releasedate);
        record.rating = non_empty(self.rating).map(|r| format_rating(&r));

        // `<image>` is the generic art tag; a dedicated `<cover>` beats it.
        let mut media = self.media;
        media.sort_by_key(|(rank, _, _)| *rank);
        for (_, slot, value) in media {
            let value = value.trim();
            let value = value.strip_prefix("./").unwrap_or(value);
            if value.is_empty() {
                continue;
            }
            record.assets.fill_gap(slot, resolve_asset_path(dir, value));
        }

        Some(record)
    }
}

/// Gamelist media tags. `cover` is listed before `image` so it takes the
/// front-box slot when both are present.
const MEDIA_TAGS: &[(&str, AssetSlot)] = &[
    ("cover", AssetSlot::BoxFront),
    ("image", AssetSlot::BoxFront),
    ("backcover", AssetSlot::BoxBack),
    ("thumbnail", AssetSlot::GridIcon),
    ("marquee", AssetSlot::Marquee),
    ("fanart", AssetSlot::Background),
    ("screenshot", AssetSlot::Screenshot),
    ("titlescreen", AssetSlot::TitleScreen),
    ("video", AssetSlot::Video),
];

fn media_slot(tag: &str) -> Option<(usize, AssetSlot)> {
    MEDIA_TAGS
        .iter()
        .position(|(name, _)| *name == tag)
        .map(|rank| (rank, MEDIA_TAGS[rank].1))
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// ES-DE stores ratings as a 0.0–1.0 float; show them as a percentage.
/// Anything that doesn't parse is kept as written.
fn format_rating(raw: &str) -> String {
    match raw.parse::<f32>() {
        Ok(value) if (0.0..=1.0).contains(&value) => {
            format!("{}%", (value * 100.0).round() as i32)
        }
        _ => raw.to_string(),
    }
}

/// Parse a `gamelist.xml` document into records for `dir`.
///
/// `<game>` elements without a `<path>` are skipped; `<folder>` elements
/// are ignored.
pub fn parse_gamelist<R: BufRead>(
    reader: R,
    dir: &Path,
    system: &str,
) -> Result<Vec<GameRecord>, FrontendError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut games = Vec::new();
    let mut seen_root = false;
    let mut current_tag = String::new();
    let mut current_game: Option<GamelistEntry> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "gameList" => seen_root = true,
                    "game" => current_game = Some(GamelistEntry::default()),
                    _ => current_tag = tag_name,
                }
            }
            Event::Text(ref e) => {
                if let Some(ref mut game) = current_game {
                    let text = e.unescape()?.to_string();
                    game.push_text(&current_tag, &text);
                }
            }
            Event::CData(e) => {
                if let Some(ref mut game) = current_game {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    game.push_text(&current_tag, &text);
                }
            }
            Event::End(ref e) => {
                let tag_name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                match tag_name.as_str() {
                    "game" => {
                        if let Some(record) = current_game
                            .take()
                            .and_then(|game| game.into_record(dir, system))
                        {
                            games.push(record);
                        }
                    }
                    _ => current_tag.clear(),
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(FrontendError::invalid_metadata(
            "gamelist.xml has no <gameList> element",
        ));
    }

    Ok(games)
}

#[cfg(test)]
#[path = "tests/esde_tests.rs"]
mod tests;
