use std::fs;

use starving_content::{ContentFactory, GameContent};
use starving_core::{ArtPath, CatalogOracle, GameConfig, Stage, Stat};

#[test]
fn bundled_data_matches_builtin_content() {
    let loaded = ContentFactory::bundled().load_all().unwrap();
    let builtin = GameContent::builtin();

    assert_eq!(loaded.config, builtin.config);
    assert_eq!(loaded.catalog, builtin.catalog);
    assert_eq!(loaded.decks, builtin.decks);
}

#[test]
fn missing_files_fall_back_to_builtin() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[global]\nmax_turns = 12\n",
    )
    .unwrap();

    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(content.config.global.max_turns, 12);
    assert_eq!(content.config.pro, GameConfig::default().pro);
    assert_eq!(content.catalog.minor_works(ArtPath::Filmmaker).len(), 3);
    assert_eq!(content.decks, starving_content::sample_decks());
}

#[test]
fn malformed_decks_report_the_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("decks.ron"), "(home: [(id: 7)])").unwrap();

    let error = ContentFactory::new(dir.path()).load_all().unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("loading decks"), "{message}");
    assert!(message.contains("decks.ron"), "{message}");
}

#[test]
fn loaded_content_starts_a_playable_game() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("decks.ron"),
        r#"(home: [(id: "home_rich_aunt", effects: [{"type": "stat", "stat": "money", "delta": 5}])])"#,
    )
    .unwrap();
    let content = ContentFactory::new(dir.path()).load_all().unwrap();

    let state = starving_core::GameState::new(
        content.config.clone(),
        vec![starving_core::PlayerSetup::new("Ada", "painter")],
        content.decks.clone(),
        content.job_ids(),
        3,
    )
    .unwrap();

    assert_eq!(state.players[0].art_path, ArtPath::VisualArtist);
    assert_eq!(state.players[0].stage, Stage::Home);
    assert_eq!(state.job_deck.len(), 6);
    let top = state.home_deck.cards().next().unwrap();
    assert_eq!(top.effects[0], starving_core::Effect::stat(Stat::Money, 5));
}
