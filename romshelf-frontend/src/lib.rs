pub mod error;
pub mod esde;
pub mod fields;
pub mod media_dir;
pub mod pegasus;

pub use error::FrontendError;
pub use esde::EsDeSource;
pub use pegasus::PegasusSource;

use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::GBK;

use romshelf_core::GameRecord;

/// Trait for frontend metadata conventions that can be read into game records.
pub trait MetadataSource {
    fn name(&self) -> &'static str;

    /// The metadata file this source would read from `dir`, if one exists.
    fn metadata_file(&self, dir: &Path) -> Option<PathBuf>;

    /// Read every game declared in `dir`, with asset paths resolved against `dir`.
    fn read_games(&self, dir: &Path, system: &str) -> Result<Vec<GameRecord>, FrontendError>;
}

/// Records whose declared ROM file is missing from the folder are dropped.
/// A record without a `file` is kept.
pub(crate) fn keep_if_rom_present(record: &GameRecord, system: &str) -> bool {
    let present = record.rom_exists();
    if !present {
        log::debug!(
            "{}: skipping \"{}\", {} not found",
            system,
            record.name,
            record.file
        );
    }
    present
}

/// Read a metadata file as text.
///
/// Files are often saved by hand in a local code page rather than UTF-8,
/// so the encoding is detected instead of assumed. See [`decode_text`].
pub fn read_metadata_text(path: &Path) -> Result<String, FrontendError> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Decode metadata bytes.
///
/// A UTF-8 byte order mark is dropped. Valid UTF-8 is used as is; anything
/// else goes through `chardetng` detection, and if the guessed encoding
/// still reports malformed sequences the text is read as GBK.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (decoded, _, had_errors) = encoding.decode(bytes);
    if !had_errors {
        log::debug!("Decoded metadata as {}", encoding.name());
        return decoded.into_owned();
    }

    log::debug!("{} did not fit, decoding metadata as GBK", encoding.name());
    let (decoded, _, _) = GBK.decode(bytes);
    decoded.into_owned()
}
