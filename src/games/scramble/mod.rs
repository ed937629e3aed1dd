pub mod dictionary;
pub mod engine;
pub mod rules;

pub use dictionary::{SpellChecker, WordListDictionary};
pub use engine::Game;
pub use rules::{SubmissionPolicy, classify};
