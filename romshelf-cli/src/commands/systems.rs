use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romshelf_lib::detect::metadata_source;
use romshelf_lib::{MetadataFormat, detect_format, system_dirs, system_name};

use crate::error::CliError;

/// List each system folder with the metadata convention it would be read
/// with. Nothing is parsed.
pub(crate) fn run_systems(root: &Path) -> Result<(), CliError> {
    let dirs = system_dirs(root)?;
    if dirs.is_empty() {
        log::warn!("No system folders under {}", root.display());
        return Ok(());
    }

    log::info!(
        "{} {}",
        "System folders in".if_supports_color(Stdout, |t| t.bold()),
        root.display(),
    );
    for dir in &dirs {
        let format = detect_format(dir);
        let file = metadata_source(format)
            .and_then(|s| s.metadata_file(dir))
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));

        let label = match format {
            MetadataFormat::FilenameOnly => format
                .to_string()
                .if_supports_color(Stdout, |t| t.dimmed())
                .to_string(),
            _ => format.to_string().if_supports_color(Stdout, |t| t.cyan()).to_string(),
        };
        match file {
            Some(file) => log::info!("  {:<20} {} ({})", system_name(dir), label, file),
            None => log::info!("  {:<20} {}", system_name(dir), label),
        }
    }
    Ok(())
}
