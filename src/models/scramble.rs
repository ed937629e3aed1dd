use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of classifying a candidate against the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Accepted,
    RejectedNotPossible,
    RejectedNotOriginal,
    RejectedNotReal,
    RejectedBaseWord,
    RejectedTooShort,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    /// Title and message shown to the player, or `None` for an accepted word.
    pub fn feedback(&self, base_word: &str, min_word_length: usize) -> Option<Feedback> {
        let (title, message) = match self {
            Outcome::Accepted => return None,
            Outcome::RejectedNotPossible => (
                "Word not possible",
                format!(
                    "You can't spell that word from '{}'!",
                    base_word.to_lowercase()
                ),
            ),
            Outcome::RejectedNotOriginal => ("Word used already", "Be more original!".to_string()),
            Outcome::RejectedNotReal => (
                "Word not recognised",
                "You can't just make them up, you know!".to_string(),
            ),
            Outcome::RejectedBaseWord => (
                "Word is the base word",
                format!("Try something other than '{}'!", base_word.to_lowercase()),
            ),
            Outcome::RejectedTooShort => (
                "Word too short",
                format!("Words must be at least {} letters long!", min_word_length),
            ),
        };

        Some(Feedback {
            title: title.to_string(),
            message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScrambleServerMessage {
    #[serde(rename_all = "camelCase")]
    Round {
        round_id: Uuid,
        base_word: String,
        answers: Vec<String>,
        started_at: DateTime<Utc>,
    },
    Accepted {
        word: String,
    },
    Rejected {
        outcome: Outcome,
        title: String,
        message: String,
    },
}
