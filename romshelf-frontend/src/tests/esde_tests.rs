use super::*;

const SAMPLE_GAMELIST: &str = r#"<?xml version="1.0"?>
<gameList>
    <folder>
        <path>./subdir</path>
        <name>Ignored Folder</name>
    </folder>
    <game>
        <path>./Sonic the Hedgehog (USA).md</path>
        <name>Sonic the Hedgehog</name>
        <desc>Fast &amp; blue.</desc>
        <developer>Sonic Team</developer>
        <publisher>Sega</publisher>
        <genre>Platform</genre>
        <players>1</players>
        <rating>0.85</rating>
        <releasedate>19910623T000000</releasedate>
        <image>./images/sonic-image.png</image>
        <marquee>./images/sonic-marquee.png</marquee>
        <video>/videos/sonic.mp4</video>
    </game>
    <game>
        <path>./Streets of Rage 2 (USA).md</path>
    </game>
    <game>
        <name>No Path</name>
    </game>
</gameList>"#;

fn parse_sample() -> Vec<GameRecord> {
    parse_gamelist(SAMPLE_GAMELIST.as_bytes(), Path::new("/roms/genesis"), "genesis").unwrap()
}

#[test]
fn test_parse_gamelist_games() {
    let games = parse_sample();
    assert_eq!(games.len(), 2);

    let sonic = &games[0];
    assert_eq!(sonic.file, "Sonic the Hedgehog (USA).md");
    assert_eq!(sonic.name, "Sonic the Hedgehog");
    assert_eq!(sonic.description.as_deref(), Some("Fast & blue."));
    assert_eq!(sonic.developer.as_deref(), Some("Sonic Team"));
    assert_eq!(sonic.publisher.as_deref(), Some("Sega"));
    assert_eq!(sonic.genre.as_deref(), Some("Platform"));
    assert_eq!(sonic.players.as_deref(), Some("1"));
    assert_eq!(sonic.release.as_deref(), Some("19910623T000000"));
    assert_eq!(sonic.rating.as_deref(), Some("85%"));
    assert_eq!(sonic.system, "genesis");
}

#[test]
fn test_media_paths_resolved() {
    let games = parse_sample();
    let sonic = &games[0];
    assert_eq!(
        sonic.assets.get(AssetSlot::BoxFront),
        Some(Path::new("/roms/genesis/images/sonic-image.png"))
    );
    assert_eq!(
        sonic.assets.get(AssetSlot::Marquee),
        Some(Path::new("/roms/genesis/images/sonic-marquee.png"))
    );
    assert_eq!(
        sonic.assets.get(AssetSlot::Video),
        Some(Path::new("/videos/sonic.mp4"))
    );
}

#[test]
fn test_name_falls_back_to_file_stem() {
    let games = parse_sample();
    assert_eq!(games[1].name, "Streets of Rage 2 (USA)");
    assert!(games[1].assets.is_empty());
    assert!(games[1].rating.is_none());
}

#[test]
fn test_cover_beats_image() {
    let xml = r#"<gameList><game>
        <path>./a.md</path>
        <image>./shot.png</image>
        <cover>./box.png</cover>
    </game></gameList>"#;
    let games = parse_gamelist(xml.as_bytes(), Path::new("/r"), "md").unwrap();
    assert_eq!(
        games[0].assets.get(AssetSlot::BoxFront),
        Some(Path::new("/r/box.png"))
    );
}

#[test]
fn test_format_rating() {
    assert_eq!(format_rating("0.85"), "85%");
    assert_eq!(format_rating("1"), "100%");
    assert_eq!(format_rating("0"), "0%");
    assert_eq!(format_rating("4.5"), "4.5");
    assert_eq!(format_rating("great"), "great");
}

#[test]
fn test_missing_root_element_is_error() {
    let result = parse_gamelist("<datafile></datafile>".as_bytes(), Path::new("/r"), "x");
    assert!(matches!(result, Err(FrontendError::InvalidMetadata(_))));
}

#[test]
fn test_malformed_xml_is_error() {
    let result = parse_gamelist(
        "<gameList><game><path>a.md</game></gameList>".as_bytes(),
        Path::new("/r"),
        "x",
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_gamelist() {
    let games = parse_gamelist("<gameList></gameList>".as_bytes(), Path::new("/r"), "x").unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_read_games_fills_from_media_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(GAMELIST_FILENAME),
        "<gameList><game><path>./sonic.md</path><name>Sonic</name>\
         <image>./img/sonic.png</image></game></gameList>",
    )
    .unwrap();
    std::fs::write(dir.path().join("sonic.md"), b"rom").unwrap();
    let media = dir.path().join("media").join("Sonic");
    std::fs::create_dir_all(&media).unwrap();
    std::fs::write(media.join("boxfront.png"), b"x").unwrap();
    std::fs::write(media.join("wheel.png"), b"x").unwrap();

    let source = EsDeSource::new();
    assert!(source.metadata_file(dir.path()).is_some());
    let games = source.read_games(dir.path(), "genesis").unwrap();

    assert_eq!(games.len(), 1);
    assert_eq!(
        games[0].assets.get(AssetSlot::BoxFront),
        Some(dir.path().join("img/sonic.png").as_path())
    );
    assert_eq!(
        games[0].assets.get(AssetSlot::Logo),
        Some(media.join("wheel.png").as_path())
    );
}

#[test]
fn test_read_games_drops_missing_roms() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(GAMELIST_FILENAME),
        "<gameList>\
         <game><path>./here.md</path></game>\
         <game><path>./gone.md</path></game>\
         </gameList>",
    )
    .unwrap();
    std::fs::write(dir.path().join("here.md"), b"rom").unwrap();

    let games = EsDeSource::new().read_games(dir.path(), "genesis").unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].file, "here.md");
}
