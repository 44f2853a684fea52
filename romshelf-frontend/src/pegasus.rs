//! Pegasus frontend metadata (`metadata.pegasus.txt` / `metadata.txt`).
//!
//! The format is line oriented:
//! - `key: value` lines open a field
//! - lines indented with a space or tab continue the open field; a lone `.`
//!   inserts a paragraph break
//! - `#` comments and blank lines are skipped
//! - `game:` starts a new game, `collection:` starts a collection block
//!   whose properties are not represented in the output

use std::path::{Path, PathBuf};

use romshelf_core::GameRecord;

use crate::{
    FrontendError, MetadataSource, fields, keep_if_rom_present, media_dir, read_metadata_text,
};

/// Metadata filenames in priority order.
pub const PEGASUS_FILENAMES: &[&str] = &["metadata.pegasus.txt", "metadata.txt"];

/// One `key: value` pair as read from the file. Keys are trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedField {
    pub key: String,
    pub value: String,
}

/// Raw fields for one `game:` block, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGame {
    /// Value of the `game:` line
    pub name: String,
    pub fields: Vec<ParsedField>,
}

impl ParsedGame {
    /// Value of `key`. When a key repeats, the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|f| f.key == key)
    }
}

#[derive(Debug)]
enum ParserState {
    /// Before the first `game:` line, or inside a collection block.
    NoGameOpen,
    GameOpen {
        game: ParsedGame,
        pending: Option<ParsedField>,
    },
}

struct PegasusParser {
    state: ParserState,
    games: Vec<ParsedGame>,
}

impl PegasusParser {
    fn new() -> Self {
        Self {
            state: ParserState::NoGameOpen,
            games: Vec::new(),
        }
    }

    fn feed_line(&mut self, line: &str) {
        if line.starts_with('#') || line.trim().is_empty() {
            return;
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            self.continue_field(line.trim());
            return;
        }

        // Any other line ends the open field, even one we can't parse.
        self.flush_field();

        let Some((key, value)) = line.split_once(':') else {
            return;
        };
        let key = key.trim().to_lowercase();
        let value = value.trim();

        match key.as_str() {
            "game" => {
                self.close_game();
                self.state = ParserState::GameOpen {
                    game: ParsedGame {
                        name: value.to_string(),
                        fields: Vec::new(),
                    },
                    pending: None,
                };
            }
            "collection" => self.close_game(),
            _ => {
                if let ParserState::GameOpen { pending, .. } = &mut self.state {
                    *pending = Some(ParsedField {
                        key,
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    fn continue_field(&mut self, trimmed: &str) {
        let ParserState::GameOpen {
            pending: Some(field),
            ..
        } = &mut self.state
        else {
            return;
        };

        if trimmed == "." {
            field.value.push_str("\n\n");
        } else {
            if !field.value.is_empty() {
                field.value.push(' ');
            }
            field.value.push_str(trimmed);
        }
    }

    fn flush_field(&mut self) {
        if let ParserState::GameOpen { game, pending } = &mut self.state {
            if let Some(field) = pending.take() {
                game.fields.push(field);
            }
        }
    }

    fn close_game(&mut self) {
        self.flush_field();
        if let ParserState::GameOpen { game, .. } =
            std::mem::replace(&mut self.state, ParserState::NoGameOpen)
        {
            self.games.push(game);
        }
    }

    fn finish(mut self) -> Vec<ParsedGame> {
        self.close_game();
        self.games
    }
}

/// Parse Pegasus metadata text into per-game field lists, in source order.
///
/// Never fails: malformed lines are skipped.
pub fn parse_pegasus_content(content: &str) -> Vec<ParsedGame> {
    let mut parser = PegasusParser::new();
    for line in content.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Reader for Pegasus metadata folders.
pub struct PegasusSource;

impl PegasusSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PegasusSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for PegasusSource {
    fn name(&self) -> &'static str {
        "Pegasus"
    }

    fn metadata_file(&self, dir: &Path) -> Option<PathBuf> {
        PEGASUS_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    fn read_games(&self, dir: &Path, system: &str) -> Result<Vec<GameRecord>, FrontendError> {
        let path = self
            .metadata_file(dir)
            .ok_or_else(|| FrontendError::missing_metadata(dir))?;
        let content = read_metadata_text(&path)?;

        let parsed = parse_pegasus_content(&content);
        log::debug!(
            "{}: {} game block(s) in {}",
            system,
            parsed.len(),
            path.display()
        );

        Ok(parsed
            .iter()
            .map(|game| fields::map_game(game, dir, system))
            .filter(|record| keep_if_rom_present(record, system))
            .map(|mut record| {
                media_dir::fill_from_media_dir(&mut record, dir);
                record
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "tests/pegasus_tests.rs"]
mod tests;
