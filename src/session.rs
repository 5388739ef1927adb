use crate::round::{GuessOutcome, Round, RoundStatus, WordEntry, MAX_INCORRECT_GUESSES};
use crate::wordbank::WordSource;
use rand::Rng;
use std::collections::HashSet;

/// Everything the session needs from the outside world.
///
/// The console implementation lives in `cli`; tests drive the session with
/// scripted implementations instead.
pub trait GameInterface {
    fn show_welcome(&mut self, categories: &[&str], max_lives: usize);
    fn show_round(&mut self, round: &Round);
    /// Collect one guess: a single lowercase ASCII letter not in `guessed`.
    fn read_guess(&mut self, guessed: &HashSet<char>) -> char;
    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, lives_remaining: usize);
    fn wait_for_next_turn(&mut self);
    fn show_round_result(&mut self, result: &RoundResult);
    fn show_tally(&mut self, tally: &SessionTally);
    fn read_play_again(&mut self) -> bool;
    fn show_farewell(&mut self, tally: &SessionTally);
}

/// Summary of one finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub entry: WordEntry,
    pub total_guesses: usize,
    pub incorrect_count: usize,
}

impl RoundResult {
    /// Share of guesses that hit, as a percentage. Zero for an empty round.
    pub fn accuracy(&self) -> f64 {
        if self.total_guesses == 0 {
            return 0.0;
        }
        (self.total_guesses - self.incorrect_count) as f64 / self.total_guesses as f64 * 100.0
    }
}

/// Running win/loss score; lives for the process only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub wins: usize,
    pub losses: usize,
}

impl SessionTally {
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn rounds(&self) -> usize {
        self.wins + self.losses
    }

    /// Percentage of rounds won, or `None` before the first round finishes.
    pub fn win_rate(&self) -> Option<f64> {
        if self.rounds() == 0 {
            return None;
        }
        Some(self.wins as f64 / self.rounds() as f64 * 100.0)
    }
}

/// Drives rounds against a `GameInterface` and keeps the running tally.
pub struct Session<R: Rng> {
    source: WordSource<R>,
    tally: SessionTally,
}

impl<R: Rng> Session<R> {
    pub fn new(source: WordSource<R>) -> Self {
        Self {
            source,
            tally: SessionTally::default(),
        }
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Play a single round to completion and return its summary.
    ///
    /// The tally is untouched; `run` owns score-keeping.
    pub fn play_round(&mut self, ui: &mut impl GameInterface) -> RoundResult {
        let entry = self.source.next_word();
        log::info!(
            "starting round: category '{}', {} letters",
            entry.category(),
            entry.len()
        );
        let mut round = Round::new(entry);

        while !round.is_terminal() {
            ui.show_round(&round);
            let letter = ui.read_guess(round.guessed());
            let outcome = round.submit_guess(letter);
            log::debug!(
                "guess '{letter}': {outcome:?}, {} lives left",
                round.lives_remaining()
            );
            ui.show_guess_outcome(letter, outcome, round.lives_remaining());
            if !round.is_terminal() {
                ui.wait_for_next_turn();
            }
        }

        ui.show_round(&round);
        let won = round.status() == RoundStatus::Won;
        log::info!(
            "round over: {} '{}' in {} guesses",
            if won { "won" } else { "lost" },
            round.entry().word(),
            round.total_guesses()
        );
        RoundResult {
            won,
            entry: round.entry().clone(),
            total_guesses: round.total_guesses(),
            incorrect_count: round.incorrect().len(),
        }
    }

    /// Run rounds until the player declines to continue.
    pub fn run(&mut self, ui: &mut impl GameInterface) {
        let categories = self.source.bank().category_names();
        ui.show_welcome(&categories, MAX_INCORRECT_GUESSES);

        loop {
            let result = self.play_round(ui);
            self.tally.record(result.won);
            ui.show_round_result(&result);
            ui.show_tally(&self.tally);

            if !ui.read_play_again() {
                ui.show_farewell(&self.tally);
                break;
            }
        }
        log::info!(
            "session over: {} wins, {} losses",
            self.tally.wins,
            self.tally.losses
        );
    }
}
