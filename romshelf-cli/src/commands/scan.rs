use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romshelf_lib::{AssetSlot, SystemCatalog};

use super::{ScanMode, load_catalog};
use crate::error::CliError;

/// Scan the library and print per-system game and media counts.
pub(crate) fn run_scan(root: &Path, mode: ScanMode) -> Result<(), CliError> {
    let catalog = load_catalog(root, mode)?;

    log::info!(
        "{} {}",
        "Library:".if_supports_color(Stdout, |t| t.bold()),
        root.display(),
    );
    log::info!("");

    if catalog.is_empty() {
        log::warn!("No games found under {}", root.display());
        return Ok(());
    }

    for system in &catalog {
        print_system(system);
    }

    let total: usize = catalog.iter().map(|s| s.len()).sum();
    log::info!("");
    log::info!(
        "{} game(s) in {} system(s)",
        total.if_supports_color(Stdout, |t| t.bold()),
        catalog.len().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

fn print_system(system: &SystemCatalog) {
    log::info!(
        "  {} {} game(s) [{}]",
        system.system.if_supports_color(Stdout, |t| t.bold()),
        system.len(),
        system.format.if_supports_color(Stdout, |t| t.cyan()),
    );

    let counts = slot_counts(system);
    if !counts.is_empty() {
        let summary: Vec<String> = counts
            .iter()
            .map(|(slot, n)| format!("{} {}", n, slot.key()))
            .collect();
        log::info!(
            "    {}",
            summary.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    for game in &system.games {
        log::debug!("    {} ({} asset(s))", game.name, game.assets.len());
    }
}

/// How many games in `system` have each asset slot filled, in slot order.
/// Slots nobody fills are left out.
pub(crate) fn slot_counts(system: &SystemCatalog) -> Vec<(AssetSlot, usize)> {
    AssetSlot::all()
        .iter()
        .map(|&slot| {
            let n = system
                .games
                .iter()
                .filter(|g| g.assets.get(slot).is_some())
                .count();
            (slot, n)
        })
        .filter(|&(_, n)| n > 0)
        .collect()
}
