use std::io::Write;

use crate::{
    errors::AppError,
    models::scramble::{Feedback, Outcome, ScrambleServerMessage},
    state::RoundState,
};

/// Renders round state and submission results.
pub trait Presenter {
    fn show_round(&mut self, round: &RoundState) -> Result<(), AppError>;
    fn show_accepted(&mut self, word: &str) -> Result<(), AppError>;
    fn show_rejection(&mut self, outcome: Outcome, feedback: &Feedback) -> Result<(), AppError>;
}

pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn show_round(&mut self, round: &RoundState) -> Result<(), AppError> {
        writeln!(self.out, "== {} ==", round.base_word())?;
        for answer in round.answers() {
            writeln!(self.out, "  {answer}")?;
        }
        Ok(())
    }

    fn show_accepted(&mut self, word: &str) -> Result<(), AppError> {
        writeln!(self.out, "+ {word}")?;
        Ok(())
    }

    fn show_rejection(&mut self, _outcome: Outcome, feedback: &Feedback) -> Result<(), AppError> {
        writeln!(self.out, "{}: {}", feedback.title, feedback.message)?;
        Ok(())
    }
}

/// Writes one `ScrambleServerMessage` JSON object per line.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn send(&mut self, message: &ScrambleServerMessage) -> Result<(), AppError> {
        let line = serde_json::to_string(message)
            .map_err(|e| AppError::Deserialization(format!("Failed to encode message: {}", e)))?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn show_round(&mut self, round: &RoundState) -> Result<(), AppError> {
        self.send(&round.to_message())
    }

    fn show_accepted(&mut self, word: &str) -> Result<(), AppError> {
        self.send(&ScrambleServerMessage::Accepted {
            word: word.to_string(),
        })
    }

    fn show_rejection(&mut self, outcome: Outcome, feedback: &Feedback) -> Result<(), AppError> {
        self.send(&ScrambleServerMessage::Rejected {
            outcome,
            title: feedback.title.clone(),
            message: feedback.message.clone(),
        })
    }
}
