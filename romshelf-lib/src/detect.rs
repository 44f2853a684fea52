//! Metadata convention detection for a single system folder.

use std::path::Path;

use romshelf_core::MetadataFormat;
use romshelf_frontend::{EsDeSource, MetadataSource, PegasusSource};

static PEGASUS: PegasusSource = PegasusSource;
static ESDE: EsDeSource = EsDeSource;

/// Decide which metadata convention `dir` uses.
///
/// Only checks which files exist; nothing is read. Pegasus metadata wins
/// over `gamelist.xml` when both are present.
pub fn detect_format(dir: &Path) -> MetadataFormat {
    if PEGASUS.metadata_file(dir).is_some() {
        MetadataFormat::PegasusMetadata
    } else if ESDE.metadata_file(dir).is_some() {
        MetadataFormat::EmulationStationMetadata
    } else {
        MetadataFormat::FilenameOnly
    }
}

/// The reader for a detected format. `FilenameOnly` has no metadata reader.
pub fn metadata_source(format: MetadataFormat) -> Option<&'static dyn MetadataSource> {
    match format {
        MetadataFormat::PegasusMetadata => Some(&PEGASUS),
        MetadataFormat::EmulationStationMetadata => Some(&ESDE),
        MetadataFormat::FilenameOnly => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_empty_dir_is_filename_only() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_format(dir.path()), MetadataFormat::FilenameOnly);
    }

    #[test]
    fn test_pegasus_filenames() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("metadata.txt"), "").unwrap();
        assert_eq!(detect_format(dir.path()), MetadataFormat::PegasusMetadata);

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("metadata.pegasus.txt"), "").unwrap();
        assert_eq!(detect_format(dir.path()), MetadataFormat::PegasusMetadata);
    }

    #[test]
    fn test_gamelist_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gamelist.xml"), "").unwrap();
        assert_eq!(
            detect_format(dir.path()),
            MetadataFormat::EmulationStationMetadata
        );
    }

    #[test]
    fn test_pegasus_beats_gamelist() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gamelist.xml"), "").unwrap();
        fs::write(dir.path().join("metadata.txt"), "").unwrap();
        assert_eq!(detect_format(dir.path()), MetadataFormat::PegasusMetadata);
    }

    #[test]
    fn test_directory_named_like_metadata_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("metadata.txt")).unwrap();
        assert_eq!(detect_format(dir.path()), MetadataFormat::FilenameOnly);
    }

    #[test]
    fn test_missing_dir_is_filename_only() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            detect_format(&dir.path().join("nope")),
            MetadataFormat::FilenameOnly
        );
    }

    #[test]
    fn test_metadata_source_names() {
        assert_eq!(
            metadata_source(MetadataFormat::PegasusMetadata).map(|s| s.name()),
            Some("Pegasus")
        );
        assert_eq!(
            metadata_source(MetadataFormat::EmulationStationMetadata).map(|s| s.name()),
            Some("ES-DE")
        );
        assert!(metadata_source(MetadataFormat::FilenameOnly).is_none());
    }
}
