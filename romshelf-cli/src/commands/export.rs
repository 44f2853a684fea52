use std::io::Write;
use std::path::Path;

use romshelf_lib::SystemCatalog;

use super::{ScanMode, load_catalog};
use crate::error::CliError;

/// Scan the library and write it as JSON to `output`, or stdout.
pub(crate) fn run_export(
    root: &Path,
    mode: ScanMode,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), CliError> {
    let catalog = load_catalog(root, mode)?;
    let json = catalog_json(&catalog, compact)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, json)?;
            let games: usize = catalog.iter().map(|s| s.len()).sum();
            log::info!(
                "Wrote {} game(s) in {} system(s) to {}",
                games,
                catalog.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Serialize the catalog, newline-terminated.
pub(crate) fn catalog_json(catalog: &[SystemCatalog], compact: bool) -> Result<String, CliError> {
    let mut json = if compact {
        serde_json::to_string(catalog)?
    } else {
        serde_json::to_string_pretty(catalog)?
    };
    json.push('\n');
    Ok(json)
}
