use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use romshelf_lib::settings;

use crate::error::CliError;

/// Show the settings file and the values it holds.
pub(crate) fn run_config_show() {
    let path = settings::settings_path();
    let state = if path.exists() { "(exists)" } else { "(not found)" };

    log::info!(
        "{}",
        "romshelf settings".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("");
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        state.if_supports_color(Stdout, |t| t.dimmed()),
    );

    match settings::load_library_path() {
        Some(root) => log::info!("  Library root:  {}", root.display()),
        None => log::info!(
            "  Library root:  {}",
            "(not set, using current directory)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
    log::info!("  Scan workers:  {}", settings::scan_workers());

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("    {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Remember `path` as the default library root.
pub(crate) fn run_config_set_root(path: &Path) -> Result<(), CliError> {
    if !path.is_dir() {
        return Err(CliError::config(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    let path = std::path::absolute(path)?;
    settings::save_library_path(Some(&path))?;
    log::info!(
        "Library root set to {}",
        path.display().if_supports_color(Stdout, |t| t.green())
    );
    Ok(())
}

/// Forget the saved library root.
pub(crate) fn run_config_clear_root() -> Result<(), CliError> {
    settings::save_library_path(None)?;
    log::info!("Library root cleared");
    Ok(())
}
