use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{scramble::ScrambleServerMessage, word_loader::WordPool};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Idle,
    InRound,
}

/// One round: the base word and the answers accepted so far, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundState {
    pub id: Uuid,
    base_word: String,
    answers: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl RoundState {
    pub fn start(pool: &mut WordPool) -> Self {
        Self::start_with_rng(pool, &mut rand::rng())
    }

    /// Shuffles `pool` in place and takes its first word as the base word.
    pub fn start_with_rng<R: Rng + ?Sized>(pool: &mut WordPool, rng: &mut R) -> Self {
        pool.shuffle(rng);
        let round = Self {
            id: Uuid::new_v4(),
            base_word: pool.first().to_string(),
            answers: Vec::new(),
            started_at: Utc::now(),
        };

        tracing::info!("Round {} started with base word '{}'", round.id, round.base_word);
        round
    }

    /// Stores `answer` at the front of the list. Callers classify first.
    pub fn accept(&mut self, answer: &str) {
        self.answers.insert(0, answer.to_string());
    }

    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn to_message(&self) -> ScrambleServerMessage {
        ScrambleServerMessage::Round {
            round_id: self.id,
            base_word: self.base_word.clone(),
            answers: self.answers.clone(),
            started_at: self.started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn start_picks_from_pool_and_clears_answers() {
        let words = vec!["silkworm".to_string(), "notebook".to_string()];
        let mut pool = WordPool::new(words.clone()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut round = RoundState::start_with_rng(&mut pool, &mut rng);
        assert!(words.contains(&round.base_word().to_string()));
        assert!(round.answers().is_empty());

        round.accept("silk");
        let restarted = RoundState::start_with_rng(&mut pool, &mut rng);
        assert!(restarted.answers().is_empty());
        assert_ne!(restarted.id, round.id);
    }

    #[test]
    fn accept_keeps_newest_first_and_original_casing() {
        let mut pool = WordPool::fallback();
        let mut round = RoundState::start(&mut pool);

        round.accept("Silk");
        round.accept("worm");
        round.accept("MILK");

        assert_eq!(round.answers(), ["MILK", "worm", "Silk"]);
    }
}
