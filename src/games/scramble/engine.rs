use rand::{SeedableRng, rngs::StdRng};

use crate::{
    errors::AppError,
    games::scramble::{
        dictionary::SpellChecker,
        rules::{SubmissionPolicy, classify},
    },
    models::{scramble::Outcome, word_loader::WordPool},
    state::{GamePhase, RoundState},
};

/// Owns the word pool, the current round and the dictionary.
pub struct Game {
    pool: WordPool,
    round: Option<RoundState>,
    dictionary: Box<dyn SpellChecker>,
    policy: SubmissionPolicy,
    rng: StdRng,
}

impl Game {
    pub fn new(pool: WordPool, dictionary: Box<dyn SpellChecker>) -> Self {
        Self::with_rng(pool, dictionary, StdRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(pool: WordPool, dictionary: Box<dyn SpellChecker>, rng: StdRng) -> Self {
        Self {
            pool,
            round: None,
            dictionary,
            policy: SubmissionPolicy::default(),
            rng,
        }
    }

    pub fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    pub fn phase(&self) -> GamePhase {
        match self.round {
            Some(_) => GamePhase::InRound,
            None => GamePhase::Idle,
        }
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Starts a fresh round, replacing any round in progress.
    pub fn start_round(&mut self) -> &RoundState {
        let round = RoundState::start_with_rng(&mut self.pool, &mut self.rng);
        self.round.insert(round)
    }

    pub fn classify(&self, candidate: &str) -> Result<Outcome, AppError> {
        let round = self.round.as_ref().ok_or(AppError::NoActiveRound)?;
        Ok(classify(candidate, round, &*self.dictionary, self.policy))
    }

    /// Classifies `candidate` and records it when accepted.
    pub fn submit(&mut self, candidate: &str) -> Result<Outcome, AppError> {
        let outcome = self.classify(candidate)?;

        if outcome.is_accepted() {
            let round = self.round.as_mut().ok_or(AppError::NoActiveRound)?;
            round.accept(candidate);
            tracing::info!(
                "Accepted '{}' ({} answers this round)",
                candidate,
                round.answers().len()
            );
        }

        Ok(outcome)
    }
}
