pub mod config;
pub mod errors;
pub mod games;
pub mod models;
pub mod presenter;
pub mod state;

use std::io::{self, BufRead};

use config::{Config, OutputFormat};
use errors::AppError;
use games::scramble::{Game, SpellChecker, WordListDictionary};
use models::word_loader::{EmbeddedWordSource, FileWordSource, WordPool};
use presenter::{JsonPresenter, Presenter, TextPresenter};

const NEW_ROUND_COMMAND: &str = ":new";
const QUIT_COMMAND: &str = ":quit";

pub fn build_game(config: &Config) -> Result<Game, AppError> {
    let pool = match &config.start_words_path {
        Some(path) => WordPool::load_or_fallback(&FileWordSource::new(path)),
        None => WordPool::load_or_fallback(&EmbeddedWordSource),
    };

    let dictionary: Box<dyn SpellChecker> = match &config.dictionary_path {
        Some(path) => Box::new(WordListDictionary::from_source(
            &FileWordSource::new(path),
            "en",
        )?),
        None => Box::new(WordListDictionary::embedded()),
    };

    Ok(Game::new(pool, dictionary).with_policy(config.policy))
}

/// Runs the game loop until `:quit` or end of input. Each other non-blank
/// line is a candidate answer.
pub fn play<R: BufRead>(
    game: &mut Game,
    input: R,
    presenter: &mut dyn Presenter,
) -> Result<(), AppError> {
    presenter.show_round(game.start_round())?;

    for line in input.lines() {
        let line = line?;
        let candidate = line.trim();

        match candidate {
            "" => continue,
            QUIT_COMMAND => break,
            NEW_ROUND_COMMAND => {
                presenter.show_round(game.start_round())?;
            }
            _ => {
                let outcome = game.submit(candidate)?;
                let round = game.round().ok_or(AppError::NoActiveRound)?;

                match outcome.feedback(round.base_word(), game.policy().min_word_length) {
                    None => presenter.show_accepted(candidate)?,
                    Some(feedback) => presenter.show_rejection(outcome, &feedback)?,
                }
            }
        }
    }

    Ok(())
}

pub fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let mut game = build_game(&config)?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match config.output {
        OutputFormat::Text => play(&mut game, stdin, &mut TextPresenter::new(stdout)),
        OutputFormat::Json => play(&mut game, stdin, &mut JsonPresenter::new(stdout)),
    }
}
