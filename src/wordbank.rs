use crate::round::WordEntry;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Ordered mapping of category name to candidate words.
///
/// Built from a line-oriented format: `[Category]` opens a category, every
/// following non-blank line is a candidate word, `#` starts a comment.
/// Words are lowercased and dropped unless they are pure ASCII letters;
/// categories that end up empty are dropped as well.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordBank {
    categories: Vec<(String, Vec<String>)>,
}

impl WordBank {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn word_count(&self) -> usize {
        self.categories.iter().map(|(_, words)| words.len()).sum()
    }

    pub fn words_in(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, words)| words.as_slice())
    }

    fn push_word(&mut self, word: String) {
        // Words before the first [Category] header have nowhere to go.
        if let Some((_, words)) = self.categories.last_mut() {
            words.push(word);
        }
    }
}

pub fn load_wordbank_from_str(data: &str) -> WordBank {
    let mut bank = WordBank::default();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            bank.categories.push((name.trim().to_string(), Vec::new()));
            continue;
        }
        let word = line.to_lowercase();
        if word.chars().all(|c| c.is_ascii_alphabetic()) {
            bank.push_word(word);
        }
    }
    bank.categories.retain(|(_, words)| !words.is_empty());
    bank
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let data = fs::read_to_string(path)?;
    Ok(load_wordbank_from_str(&data))
}

/// The word bank held no usable words; the game cannot start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyWordBank;

impl fmt::Display for EmptyWordBank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word bank contains no categories with valid words")
    }
}

impl Error for EmptyWordBank {}

/// Draws secret words from a `WordBank` using an injected RNG.
///
/// Construction fails on an empty bank, so `next_word` itself cannot fail.
/// Nothing prevents the same word from coming up in successive rounds.
pub struct WordSource<R: Rng> {
    bank: WordBank,
    rng: R,
}

impl<R: Rng> WordSource<R> {
    pub fn new(bank: WordBank, rng: R) -> Result<Self, EmptyWordBank> {
        if bank.is_empty() {
            return Err(EmptyWordBank);
        }
        Ok(Self { bank, rng })
    }

    /// Pick a category uniformly at random, then a word uniformly within it.
    pub fn next_word(&mut self) -> WordEntry {
        let (category, words) = self
            .bank
            .categories
            .choose(&mut self.rng)
            .expect("bank verified non-empty at construction");
        let word = words
            .choose(&mut self.rng)
            .expect("empty categories dropped at load");
        WordEntry::new(category.clone(), word.clone())
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_load_wordbank_basic_format() {
        let data = "[Animals]\ncat\ndog\n\n[Fruits]\nmango\n";
        let bank = load_wordbank_from_str(data);

        assert_eq!(bank.category_names(), vec!["Animals", "Fruits"]);
        assert_eq!(bank.words_in("Animals").unwrap(), &["cat", "dog"]);
        assert_eq!(bank.words_in("Fruits").unwrap(), &["mango"]);
        assert_eq!(bank.word_count(), 3);
    }

    #[test]
    fn test_load_wordbank_skips_comments_and_blanks() {
        let data = "# word bank\n\n[Animals]\n# a comment\ncat\n\n";
        let bank = load_wordbank_from_str(data);

        assert_eq!(bank.words_in("Animals").unwrap(), &["cat"]);
    }

    #[test]
    fn test_load_wordbank_normalizes_and_filters_words() {
        let data = "[Mixed]\n  Cat  \nDOG\nnot a word\nhyphen-ated\nabc123\n";
        let bank = load_wordbank_from_str(data);

        assert_eq!(bank.words_in("Mixed").unwrap(), &["cat", "dog"]);
    }

    #[test]
    fn test_load_wordbank_drops_empty_categories() {
        let data = "[Empty]\n[Animals]\ncat\n";
        let bank = load_wordbank_from_str(data);

        assert_eq!(bank.category_names(), vec!["Animals"]);
    }

    #[test]
    fn test_load_wordbank_ignores_words_before_first_category() {
        let data = "stray\n[Animals]\ncat\n";
        let bank = load_wordbank_from_str(data);

        assert_eq!(bank.word_count(), 1);
    }

    #[test]
    fn test_load_wordbank_from_file_roundtrip() {
        use std::fs::File;
        use std::io::Write;

        let path = std::env::temp_dir().join("hangman_test_wordbank.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "[Fruits]").unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "grape").unwrap();
        }

        let bank = load_wordbank_from_file(&path).unwrap();
        assert_eq!(bank.words_in("Fruits").unwrap(), &["apple", "grape"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_wordbank_missing_file_is_an_error() {
        let result = load_wordbank_from_file("/nonexistent/hangman_wordbank.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_embedded_wordbank_is_well_formed() {
        let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);

        assert_eq!(
            bank.category_names(),
            vec!["Animals", "Fruits", "Countries", "Programming", "Sports"]
        );
        for name in bank.category_names() {
            assert_eq!(bank.words_in(name).unwrap().len(), 10);
        }
    }

    #[test]
    fn test_word_source_rejects_empty_bank() {
        let bank = load_wordbank_from_str("");
        let result = WordSource::new(bank, StdRng::seed_from_u64(0));
        assert_eq!(result.err(), Some(EmptyWordBank));
    }

    #[test]
    fn test_word_source_draws_from_the_bank() {
        let bank = load_wordbank_from_str("[Animals]\ncat\ndog\n[Fruits]\nmango\n");
        let mut source = WordSource::new(bank, StdRng::seed_from_u64(7)).unwrap();

        for _ in 0..50 {
            let entry = source.next_word();
            let words = source.bank().words_in(entry.category()).unwrap();
            assert!(words.contains(&entry.word().to_string()));
        }
    }

    #[test]
    fn test_word_source_is_deterministic_under_a_seed() {
        let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);

        let mut a = WordSource::new(bank.clone(), StdRng::seed_from_u64(42)).unwrap();
        let mut b = WordSource::new(bank, StdRng::seed_from_u64(42)).unwrap();

        for _ in 0..20 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn test_word_source_single_word_bank() {
        let bank = load_wordbank_from_str("[Animals]\ncat\n");
        let mut source = WordSource::new(bank, StdRng::seed_from_u64(1)).unwrap();

        let entry = source.next_word();
        assert_eq!(entry.category(), "Animals");
        assert_eq!(entry.word(), "cat");
    }
}
