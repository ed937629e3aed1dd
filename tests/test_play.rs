use rand::{SeedableRng, rngs::StdRng};
use serde_json::Value;
use word_scramble::config::Config;
use word_scramble::games::scramble::{Game, WordListDictionary};
use word_scramble::models::WordPool;
use word_scramble::presenter::{JsonPresenter, TextPresenter};
use word_scramble::{build_game, play};

fn create_test_game() -> Game {
    Game::with_rng(
        WordPool::fallback(),
        Box::new(WordListDictionary::embedded()),
        StdRng::seed_from_u64(3),
    )
}

#[test]
fn test_text_session() {
    let mut game = create_test_game();
    let mut presenter = TextPresenter::new(Vec::new());
    let input = "silk\n\nsilk\nsilkx\n:new\nsilk\n:quit\nworm\n";

    play(&mut game, input.as_bytes(), &mut presenter).unwrap();

    let output = String::from_utf8(presenter.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        [
            "== silkworm ==",
            "+ silk",
            "Word used already: Be more original!",
            "Word not possible: You can't spell that word from 'silkworm'!",
            "== silkworm ==",
            "+ silk",
        ]
    );

    // Input after :quit is ignored
    assert_eq!(game.round().unwrap().answers(), ["silk"]);
}

#[test]
fn test_json_session() {
    let mut game = create_test_game();
    let mut presenter = JsonPresenter::new(Vec::new());

    play(&mut game, "silk\nsilkworms\n".as_bytes(), &mut presenter).unwrap();

    let output = String::from_utf8(presenter.into_inner()).unwrap();
    let messages: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0]["type"], "round");
    assert_eq!(messages[0]["baseWord"], "silkworm");
    assert_eq!(messages[1]["type"], "accepted");
    assert_eq!(messages[1]["word"], "silk");
    assert_eq!(messages[2]["type"], "rejected");
    assert_eq!(messages[2]["outcome"], "rejectedNotPossible");
    assert_eq!(messages[2]["title"], "Word not possible");
}

#[test]
fn test_build_game_from_default_config() {
    let mut game = build_game(&Config::default()).unwrap();
    game.start_round();

    let base_word = game.round().unwrap().base_word().to_string();
    assert!(!base_word.is_empty());
    assert!(game.submit(&base_word).is_ok());
}

#[test]
fn test_build_game_from_files() {
    let dir = std::env::temp_dir().join(format!("word_scramble_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let start_path = dir.join("start.txt");
    let dictionary_path = dir.join("words.json");
    std::fs::write(&start_path, "notebook\n").unwrap();
    std::fs::write(&dictionary_path, r#"["note", "book"]"#).unwrap();

    let config = Config {
        start_words_path: Some(start_path),
        dictionary_path: Some(dictionary_path),
        ..Config::default()
    };
    let mut game = build_game(&config).unwrap();

    assert_eq!(game.start_round().base_word(), "notebook");
    assert!(game.submit("book").unwrap().is_accepted());
    assert!(!game.submit("bone").unwrap().is_accepted());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_build_game_missing_start_words_uses_fallback() {
    let config = Config {
        start_words_path: Some("/nonexistent/start.txt".into()),
        ..Config::default()
    };
    let mut game = build_game(&config).unwrap();

    assert_eq!(game.start_round().base_word(), "silkworm");
}

#[test]
fn test_build_game_blank_json_start_words_uses_fallback() {
    let dir = std::env::temp_dir().join(format!("word_scramble_blank_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let start_path = dir.join("start.json");
    std::fs::write(&start_path, r#"["  ", ""]"#).unwrap();

    let config = Config {
        start_words_path: Some(start_path),
        ..Config::default()
    };
    let mut game = build_game(&config).unwrap();

    assert_eq!(game.start_round().base_word(), "silkworm");

    std::fs::remove_dir_all(&dir).unwrap();
}
