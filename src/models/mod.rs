pub mod scramble;
pub mod word_loader;

pub use scramble::{Feedback, Outcome, ScrambleServerMessage};
pub use word_loader::{WordPool, WordSource};
