use super::*;
use crate::pegasus::parse_pegasus_content;

fn map_one(text: &str) -> GameRecord {
    let games = parse_pegasus_content(text);
    assert_eq!(games.len(), 1, "expected exactly one game in fixture");
    map_game(&games[0], Path::new("/roms/snes"), "snes")
}

#[test]
fn test_alias_keys_are_lowercase_and_unique() {
    let mut keys: Vec<&str> = FIELD_ALIASES.iter().map(|(k, _)| *k).collect();
    for key in &keys {
        assert_eq!(*key, key.to_lowercase());
    }
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), FIELD_ALIASES.len());
}

#[test]
fn test_every_asset_slot_has_an_alias() {
    for &slot in AssetSlot::all() {
        assert!(
            FIELD_ALIASES
                .iter()
                .any(|(_, t)| *t == FieldTarget::Asset(slot)),
            "no metadata alias for {:?}",
            slot
        );
    }
}

#[test]
fn test_field_target_lookup() {
    assert_eq!(field_target("developers"), Some(FieldTarget::Developer));
    assert_eq!(field_target("sort-by"), Some(FieldTarget::SortTitle));
    assert_eq!(
        field_target("cover"),
        Some(FieldTarget::Asset(AssetSlot::BoxFront))
    );
    assert_eq!(
        field_target("assets.wheel"),
        Some(FieldTarget::Asset(AssetSlot::Logo))
    );
    assert_eq!(field_target("launch"), None);
}

#[test]
fn test_chrono_trigger_scenario() {
    let rec = map_one(
        "game: Chrono Trigger\n\
         file: chrono trigger.sfc\n\
         developer: Square\n\
         assets.boxfront: boxart/ct.png extra.png\n",
    );
    assert_eq!(rec.name, "Chrono Trigger");
    assert_eq!(rec.file, "chrono trigger.sfc");
    assert_eq!(rec.developer.as_deref(), Some("Square"));
    assert_eq!(
        rec.assets.get(AssetSlot::BoxFront),
        Some(Path::new("/roms/snes/boxart/ct.png"))
    );
    assert_eq!(rec.assets.len(), 1);
    assert_eq!(rec.system, "snes");
    assert_eq!(rec.directory, Path::new("/roms/snes"));
}

#[test]
fn test_pass_through_fields() {
    let rec = map_one(
        "game: Full\n\
         publishers: Pub\n\
         genres: RPG\n\
         players: 1-2\n\
         summary: Short\n\
         description: Long text\n\
         release: 1995-03-11\n\
         rating: 95%\n\
         sort_name: Full, The\n",
    );
    assert_eq!(rec.publisher.as_deref(), Some("Pub"));
    assert_eq!(rec.genre.as_deref(), Some("RPG"));
    assert_eq!(rec.players.as_deref(), Some("1-2"));
    assert_eq!(rec.summary.as_deref(), Some("Short"));
    assert_eq!(rec.description.as_deref(), Some("Long text"));
    assert_eq!(rec.release.as_deref(), Some("1995-03-11"));
    assert_eq!(rec.rating.as_deref(), Some("95%"));
    assert_eq!(rec.sort_title.as_deref(), Some("Full, The"));
}

#[test]
fn test_summary_and_description_stay_separate() {
    let rec = map_one("game: A\nsummary: S\ndescription: D\n");
    assert_eq!(rec.summary.as_deref(), Some("S"));
    assert_eq!(rec.description.as_deref(), Some("D"));
}

#[test]
fn test_files_list_is_split_and_suppresses_file() {
    let rec = map_one("game: Multi\nfile: single.cue\nfiles: disc1.cue  disc2.cue\n");
    assert_eq!(rec.files, ["disc1.cue", "disc2.cue"]);
    assert_eq!(rec.file, "");
}

#[test]
fn test_file_without_files() {
    let rec = map_one("game: One\nfile: one.cue\n");
    assert_eq!(rec.file, "one.cue");
    assert!(rec.files.is_empty());
}

#[test]
fn test_asset_takes_first_token_only() {
    let rec = map_one("game: A\nassets.screenshot: shots/a.png shots/b.png shots/c.png\n");
    assert_eq!(
        rec.assets.get(AssetSlot::Screenshot),
        Some(Path::new("/roms/snes/shots/a.png"))
    );
}

#[test]
fn test_absolute_asset_path_kept() {
    let abs = if cfg!(windows) { "C:\\art\\logo.png" } else { "/art/logo.png" };
    let rec = map_one(&format!("game: A\nassets.logo: {abs}\n"));
    assert_eq!(rec.assets.get(AssetSlot::Logo), Some(Path::new(abs)));
}

#[test]
fn test_historical_aliases_map_to_same_slot() {
    for key in ["assets.boxfront", "assets.box_front", "assets.boxart2d", "boxart", "cover"] {
        let rec = map_one(&format!("game: A\n{key}: front.png\n"));
        assert_eq!(
            rec.assets.get(AssetSlot::BoxFront),
            Some(Path::new("/roms/snes/front.png")),
            "alias {key}"
        );
    }
    for key in ["assets.cartridge", "assets.disc", "assets.cart"] {
        let rec = map_one(&format!("game: A\n{key}: media.png\n"));
        assert!(rec.assets.get(AssetSlot::Cartridge).is_some(), "alias {key}");
    }
}

#[test]
fn test_empty_asset_value_leaves_slot_empty() {
    let rec = map_one("game: A\nassets.video:\n");
    assert!(rec.assets.is_empty());
}

#[test]
fn test_unknown_keys_ignored_and_x_keys_kept() {
    let rec = map_one("game: A\nlaunch: {file.path}\nx-english-name: Alpha\nx-id: 42\n");
    assert_eq!(rec.extra.len(), 2);
    assert_eq!(rec.extra.get("x-english-name").map(String::as_str), Some("Alpha"));
    assert_eq!(rec.extra.get("x-id").map(String::as_str), Some("42"));
}

#[test]
fn test_name_comes_from_game_line() {
    let rec = map_one("game: Real Name\nname: Not Used\n");
    assert_eq!(rec.name, "Real Name");
}

#[test]
fn test_multi_paragraph_description_is_preserved() {
    let rec = map_one("game: A\ndescription: One.\n  .\n  Two.\n");
    assert_eq!(rec.description.as_deref(), Some("One.\n\n Two."));
}
