// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod logging;
pub mod round;
pub mod session;
pub mod wordbank;

// Re-export the core types for easier use
pub use round::{GuessOutcome, MAX_INCORRECT_GUESSES, Round, RoundStatus, WordEntry};
pub use session::{GameInterface, RoundResult, Session, SessionTally};
pub use wordbank::{
    EMBEDDED_WORDBANK, EmptyWordBank, WordBank, WordSource, load_wordbank_from_file,
    load_wordbank_from_str,
};
