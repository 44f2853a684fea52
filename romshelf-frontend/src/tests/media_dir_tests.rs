use super::*;
use std::fs;

fn setup_media(dir: &Path, game: &str, files: &[&str]) -> PathBuf {
    let media = dir.join("media").join(game);
    fs::create_dir_all(&media).unwrap();
    for f in files {
        fs::write(media.join(f), b"x").unwrap();
    }
    media
}

#[test]
fn test_every_slot_has_a_stem_alias() {
    for &slot in AssetSlot::all() {
        let count = MEDIA_STEM_ALIASES
            .iter()
            .filter(|(_, s)| *s == slot)
            .count();
        assert!(
            (2..=4).contains(&count),
            "{:?} has {} stem aliases",
            slot,
            count
        );
    }
}

#[test]
fn test_asset_for_stem_is_case_insensitive() {
    assert_eq!(asset_for_stem("BoxFront"), Some(AssetSlot::BoxFront));
    assert_eq!(asset_for_stem("cart"), Some(AssetSlot::Cartridge));
    assert_eq!(asset_for_stem("DISC"), Some(AssetSlot::Cartridge));
    assert_eq!(asset_for_stem("Title_Screen"), Some(AssetSlot::TitleScreen));
    assert_eq!(asset_for_stem("title"), Some(AssetSlot::TitleScreen));
    assert_eq!(asset_for_stem("readme"), None);
}

#[test]
fn test_fills_empty_slots() {
    let dir = tempfile::tempdir().unwrap();
    let media = setup_media(
        dir.path(),
        "Super Game",
        &["screenshot.png", "Video.mp4", "notes.txt"],
    );

    let mut rec = GameRecord::new("Super Game", dir.path(), "snes");
    let filled = fill_from_media_dir(&mut rec, dir.path());

    assert_eq!(filled, 2);
    assert_eq!(
        rec.assets.get(AssetSlot::Screenshot),
        Some(media.join("screenshot.png").as_path())
    );
    assert_eq!(
        rec.assets.get(AssetSlot::Video),
        Some(media.join("Video.mp4").as_path())
    );
    assert_eq!(rec.assets.len(), 2);
}

#[test]
fn test_explicit_metadata_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    setup_media(dir.path(), "Game", &["boxfront.png", "logo.png"]);

    let mut rec = GameRecord::new("Game", dir.path(), "snes");
    rec.assets.set(AssetSlot::BoxFront, "/explicit/front.png");

    fill_from_media_dir(&mut rec, dir.path());

    assert_eq!(
        rec.assets.get(AssetSlot::BoxFront),
        Some(Path::new("/explicit/front.png"))
    );
    assert!(rec.assets.get(AssetSlot::Logo).is_some());
}

#[test]
fn test_first_file_per_slot_wins() {
    let dir = tempfile::tempdir().unwrap();
    let media = setup_media(dir.path(), "Game", &["cover.jpg", "boxart.png"]);

    let mut rec = GameRecord::new("Game", dir.path(), "snes");
    assert_eq!(fill_from_media_dir(&mut rec, dir.path()), 1);
    assert_eq!(
        rec.assets.get(AssetSlot::BoxFront),
        Some(media.join("boxart.png").as_path())
    );
}

#[test]
fn test_missing_media_dir_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut rec = GameRecord::new("Nothing Here", dir.path(), "snes");
    assert_eq!(fill_from_media_dir(&mut rec, dir.path()), 0);
    assert!(rec.assets.is_empty());
}

#[test]
fn test_game_name_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    setup_media(dir.path(), "super game", &["logo.png"]);

    let mut rec = GameRecord::new("Super Game", dir.path(), "snes");
    fill_from_media_dir(&mut rec, dir.path());

    // Case-insensitive filesystems resolve the folder anyway.
    let folder_exists = dir.path().join("media").join("Super Game").is_dir();
    assert_eq!(rec.assets.is_empty(), !folder_exists);
}

#[test]
fn test_subdirectories_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let media = setup_media(dir.path(), "Game", &[]);
    fs::create_dir_all(media.join("video")).unwrap();

    let mut rec = GameRecord::new("Game", dir.path(), "snes");
    assert_eq!(fill_from_media_dir(&mut rec, dir.path()), 0);
}

#[test]
fn test_media_dir_for_keeps_name_verbatim() {
    let dir = Path::new("/roms/snes");
    assert_eq!(
        media_dir_for(dir, "Super Mario World (USA)"),
        Some(PathBuf::from("/roms/snes/media/Super Mario World (USA)"))
    );
    assert_eq!(
        media_dir_for(dir, "AC/DC"),
        Some(PathBuf::from("/roms/snes/media/AC/DC"))
    );
}

#[test]
fn test_names_leaving_the_media_folder_are_rejected() {
    let dir = Path::new("/roms/snes");
    assert_eq!(media_dir_for(dir, "/"), None);
    assert_eq!(media_dir_for(dir, "/etc"), None);
    assert_eq!(media_dir_for(dir, "../../other"), None);
}

#[test]
fn test_absolute_game_name_reads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    fs::write(outside.path().join("logo.png"), b"x").unwrap();

    let name = outside.path().to_string_lossy().into_owned();
    let mut rec = GameRecord::new(name, dir.path(), "snes");
    assert_eq!(fill_from_media_dir(&mut rec, dir.path()), 0);
    assert!(rec.assets.is_empty());
}
