use std::collections::HashSet;

/// Number of wrong guesses before the round is lost.
pub const MAX_INCORRECT_GUESSES: usize = 6;

/// A secret word together with the category it was drawn from.
///
/// The word is always non-empty lowercase ASCII; the word bank enforces
/// this at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    category: String,
    word: String,
}

impl WordEntry {
    pub fn new(category: impl Into<String>, word: impl Into<String>) -> Self {
        let word = word.into();
        debug_assert!(!word.is_empty());
        debug_assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        Self {
            category: category.into(),
            word,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

/// State machine for a single round.
///
/// Starts `InProgress` and moves to `Won` once every letter of the word has
/// been guessed, or to `Lost` once `MAX_INCORRECT_GUESSES` distinct misses
/// have accumulated. Terminal states are never left.
#[derive(Debug)]
pub struct Round {
    entry: WordEntry,
    guessed: HashSet<char>,
    incorrect: Vec<char>,
    total_guesses: usize,
    status: RoundStatus,
}

impl Round {
    pub fn new(entry: WordEntry) -> Self {
        Self {
            entry,
            guessed: HashSet::new(),
            incorrect: Vec::new(),
            total_guesses: 0,
            status: RoundStatus::InProgress,
        }
    }

    /// Apply one guessed letter and report whether it hit.
    ///
    /// Callers must pass a single lowercase ASCII letter that has not been
    /// guessed before; the input loop in `cli` guarantees this. A repeated
    /// letter, or any guess once the round is terminal, is treated as a
    /// no-op: the letter's outcome is returned and nothing changes,
    /// including the total-guess count.
    pub fn submit_guess(&mut self, letter: char) -> GuessOutcome {
        debug_assert!(letter.is_ascii_lowercase());

        let outcome = if self.entry.word().contains(letter) {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        };

        if self.is_terminal() || !self.guessed.insert(letter) {
            return outcome;
        }
        self.total_guesses += 1;
        if outcome == GuessOutcome::Miss {
            self.incorrect.push(letter);
        }

        self.status = if self.is_word_covered() {
            RoundStatus::Won
        } else if self.incorrect.len() == MAX_INCORRECT_GUESSES {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        outcome
    }

    fn is_word_covered(&self) -> bool {
        self.entry.word().chars().all(|c| self.guessed.contains(&c))
    }

    pub fn lives_remaining(&self) -> usize {
        MAX_INCORRECT_GUESSES - self.incorrect.len()
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.status, RoundStatus::Won | RoundStatus::Lost)
    }

    /// Per-position view of the word: `Some(uppercase letter)` where the
    /// letter has been guessed, `None` where it is still hidden.
    pub fn progress(&self) -> Vec<Option<char>> {
        self.entry
            .word()
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    Some(c.to_ascii_uppercase())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Letters of a-z not yet guessed, in ascending order.
    pub fn remaining_letters(&self) -> Vec<char> {
        ('a'..='z').filter(|c| !self.guessed.contains(c)).collect()
    }

    pub fn entry(&self) -> &WordEntry {
        &self.entry
    }

    pub fn guessed(&self) -> &HashSet<char> {
        &self.guessed
    }

    pub fn incorrect(&self) -> &[char] {
        &self.incorrect
    }

    pub fn total_guesses(&self) -> usize {
        self.total_guesses
    }
}
