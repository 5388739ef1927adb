use crate::round::{GuessOutcome, Round, MAX_INCORRECT_GUESSES};
use crate::session::{GameInterface, RoundResult, SessionTally};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::collections::HashSet;
use std::io::{self, BufRead, IsTerminal, Write};

/// Gallows figure, one stage per accumulated wrong guess.
const GALLOWS_STAGES: [&str; MAX_INCORRECT_GUESSES + 1] = [
    r"
      +------+
      |      |
      |
      |
      |
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |
      |
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |      |
      |
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |     /|
      |
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |     /|\
      |
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |     /|\
      |     /
      |
    ===========''
",
    r"
      +------+
      |      |
      |      O
      |     /|\
      |     / \
      |
    ===========''
",
];

/// Why a raw guess line was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessError {
    NotOneChar,
    NotALetter,
    AlreadyGuessed(char),
}

impl std::fmt::Display for GuessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOneChar => write!(f, "Please enter exactly one letter."),
            Self::NotALetter => write!(f, "Please enter a valid letter (a-z)."),
            Self::AlreadyGuessed(c) => write!(
                f,
                "You already guessed '{}'. Try a different letter.",
                c.to_ascii_uppercase()
            ),
        }
    }
}

/// Turn one raw input line into a usable guess, or say what was wrong.
pub fn validate_guess(raw: &str, guessed: &HashSet<char>) -> Result<char, GuessError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(GuessError::NotOneChar),
    };
    if !letter.is_ascii_alphabetic() {
        return Err(GuessError::NotALetter);
    }
    let letter = letter.to_ascii_lowercase();
    if guessed.contains(&letter) {
        return Err(GuessError::AlreadyGuessed(letter));
    }
    Ok(letter)
}

fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).unwrap();
    if bytes == 0 {
        return None;
    }
    Some(input.trim().to_string())
}

/// Prompt until a valid, unguessed letter comes in.
///
/// Panics if the input stream closes mid-round; the session has no way to
/// continue without a guess.
pub fn read_guess<R: BufRead>(reader: &mut R, guessed: &HashSet<char>) -> char {
    loop {
        print!("  Enter your guess (a single letter): ");
        let _ = io::stdout().flush();
        let Some(line) = read_trimmed_line(reader) else {
            panic!("input stream closed while awaiting a guess");
        };
        match validate_guess(&line, guessed) {
            Ok(letter) => return letter,
            Err(e) => println!("  {e}"),
        }
    }
}

/// Prompt until a yes/no answer comes in. A closed stream counts as "no".
pub fn read_yes_no<R: BufRead>(reader: &mut R, prompt: &str) -> bool {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let Some(line) = read_trimmed_line(reader) else {
            return false;
        };
        match line.to_lowercase().as_str() {
            "yes" | "y" => return true,
            "no" | "n" => return false,
            _ => println!("  Please enter 'yes' or 'no'."),
        }
    }
}

fn clear_screen() {
    if io::stdout().is_terminal() {
        let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
}

pub fn display_title() {
    println!("{}", "=".repeat(52));
    println!("                H A N G M A N");
    println!("{}", "=".repeat(52));
    println!();
}

/// Format the per-position progress as ` C  _  T `.
pub fn format_progress(progress: &[Option<char>]) -> String {
    progress
        .iter()
        .map(|slot| match slot {
            Some(c) => format!(" {c} "),
            None => " _ ".to_string(),
        })
        .collect()
}

pub fn display_round(round: &Round) {
    clear_screen();
    display_title();

    println!("  Category: {}", round.entry().category());
    println!(
        "  Lives remaining: {} / {}",
        round.lives_remaining(),
        MAX_INCORRECT_GUESSES
    );
    println!("{}", GALLOWS_STAGES[round.incorrect().len()]);
    println!("  Word: {}", format_progress(&round.progress()));
    println!("  ({} letters)", round.entry().len());
    println!();

    if round.incorrect().is_empty() {
        println!("  Wrong guesses: none");
    } else {
        let wrong: Vec<String> = round
            .incorrect()
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect();
        println!("  Wrong guesses: {}", wrong.join(", "));
    }

    let available: Vec<String> = round
        .remaining_letters()
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    println!("  Available letters: {}", available.join(" "));
    println!();
}

pub fn display_guess_outcome(letter: char, outcome: GuessOutcome, lives_remaining: usize) {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Hit => println!("\n  Nice! '{letter}' is in the word."),
        GuessOutcome::Miss => println!(
            "\n  Sorry, '{letter}' is not in the word. ({lives_remaining} lives left)"
        ),
    }
}

pub fn display_round_result(result: &RoundResult) {
    println!("{}", "-".repeat(52));
    if result.won {
        println!("\n  CONGRATULATIONS, YOU WON!\n");
        println!("  The word was: {}", result.entry.word().to_uppercase());
        println!("  Total guesses: {}", result.total_guesses);
        println!("  Wrong guesses: {}", result.incorrect_count);
        println!("  Accuracy: {:.1}%", result.accuracy());
    } else {
        println!("\n  GAME OVER, YOU LOST!");
        println!("{}", GALLOWS_STAGES[MAX_INCORRECT_GUESSES]);
        println!("  The word was: {}", result.entry.word().to_uppercase());
        println!("  Better luck next time!");
    }
    println!();
    println!("{}", "-".repeat(52));
}

pub fn display_tally(tally: &SessionTally) {
    println!(
        "\n  Score - Wins: {} | Losses: {}\n",
        tally.wins, tally.losses
    );
}

pub fn display_farewell(tally: &SessionTally) {
    clear_screen();
    display_title();
    println!("  Thanks for playing Hangman!");
    println!(
        "\n  Final score - Wins: {} | Losses: {}",
        tally.wins, tally.losses
    );
    if let Some(rate) = tally.win_rate() {
        println!("  Win rate: {rate:.1}%");
    }
    println!("\n  Goodbye!\n");
}

/// Line-oriented console implementation of `GameInterface`.
///
/// Generic over `BufRead` so tests can feed it a `Cursor` instead of stdin.
pub struct ConsoleInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn pause(&mut self, prompt: &str) {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let _ = read_trimmed_line(&mut self.reader);
    }
}

impl<R: BufRead> GameInterface for ConsoleInterface<R> {
    fn show_welcome(&mut self, categories: &[&str], max_lives: usize) {
        clear_screen();
        display_title();
        println!("  Welcome to Hangman!");
        println!("  Try to guess the hidden word one letter at a time.");
        println!("  You have {max_lives} lives (incorrect guesses).");
        println!();
        println!("  Word categories: {}", categories.join(", "));
        println!();
        self.pause("  Press Enter to start playing...");
    }

    fn show_round(&mut self, round: &Round) {
        display_round(round);
    }

    fn read_guess(&mut self, guessed: &HashSet<char>) -> char {
        read_guess(&mut self.reader, guessed)
    }

    fn show_guess_outcome(&mut self, letter: char, outcome: GuessOutcome, lives_remaining: usize) {
        display_guess_outcome(letter, outcome, lives_remaining);
    }

    fn wait_for_next_turn(&mut self) {
        self.pause("\n  Press Enter to continue...");
    }

    fn show_round_result(&mut self, result: &RoundResult) {
        display_round_result(result);
    }

    fn show_tally(&mut self, tally: &SessionTally) {
        display_tally(tally);
    }

    fn read_play_again(&mut self) -> bool {
        read_yes_no(&mut self.reader, "  Would you like to play again? (yes/no): ")
    }

    fn show_farewell(&mut self, tally: &SessionTally) {
        display_farewell(tally);
    }
}
