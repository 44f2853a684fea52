pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod scan;
pub(crate) mod systems;

use std::path::Path;

use romshelf_lib::{SystemCatalog, scan_library_concurrent, scan_library_strict};

use crate::error::CliError;
use crate::spinner;

/// How a command should walk the library.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanMode {
    pub sequential: bool,
    pub workers: Option<usize>,
    pub quiet: bool,
}

/// Scan `root` and return systems sorted by folder name, whichever way the
/// scan ran.
pub(crate) fn load_catalog(root: &Path, mode: ScanMode) -> Result<Vec<SystemCatalog>, CliError> {
    let pb = spinner::start(format!("Scanning {}", root.display()), mode.quiet);

    let result = if mode.sequential {
        scan_library_strict(root).map_err(CliError::from)
    } else {
        let workers = mode
            .workers
            .filter(|&n| n > 0)
            .unwrap_or_else(romshelf_lib::settings::scan_workers);
        log::debug!("Scanning with {} worker(s)", workers);

        tokio::runtime::Runtime::new()
            .map_err(|e| CliError::runtime(e.to_string()))
            .and_then(|rt| {
                rt.block_on(scan_library_concurrent(root, workers))
                    .map_err(CliError::from)
            })
    };

    pb.finish_and_clear();

    let mut catalog = result?;
    catalog.sort_by(|a, b| a.system.cmp(&b.system));
    Ok(catalog)
}
