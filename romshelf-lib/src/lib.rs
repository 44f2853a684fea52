//! ROM library ingestion: walks a root folder of per-system subfolders and
//! builds a catalog of games from whatever metadata each folder carries.

pub mod catalog;
pub mod detect;
pub mod error;
pub mod scanner;
pub mod settings;
pub mod worker_pool;

pub use catalog::{
    read_games_with, read_system_games, scan_library, scan_library_concurrent,
    scan_library_strict, scan_system, system_dirs, system_name,
};
pub use detect::detect_format;
pub use error::ScanError;
pub use scanner::scan_rom_files;
pub use worker_pool::WorkerPool;

pub use romshelf_core::{AssetSlot, GameAssets, GameRecord, MetadataFormat, SystemCatalog};
