use hangman::cli::ConsoleInterface;
use hangman::session::Session;
use hangman::wordbank::{EMBEDDED_WORDBANK, WordSource, load_wordbank_from_str};
use std::io;

fn main() {
    hangman::logging::init();

    let bank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let source = match WordSource::new(bank, rand::rng()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Cannot start: {e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut ui = ConsoleInterface::new(stdin.lock());
    Session::new(source).run(&mut ui);
}
