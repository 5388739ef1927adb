use env_logger::Env;

/// Set up the `log` backend.
///
/// Quiet by default so log lines do not mix into game output; turn up with
/// `RUST_LOG` (e.g. `RUST_LOG=hangman=debug`). Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
