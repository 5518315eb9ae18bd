use std::time::Duration;

/// Maximum number of history entries kept per session (oldest evicted first)
pub(crate) const MAX_HISTORY: usize = 100;

/// Utterances made only of these characters are treated as empty input
pub(crate) const IGNORED_PUNCTUATION: &str = ".,/#!$%^&*;:{}=-_`~";

/// Default pause before typing into a freshly launched application
pub(crate) const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Default pause before a hotkey is sent to the foreground window
pub(crate) const DEFAULT_KEY_DELAY: Duration = Duration::from_millis(500);

/// Read timeout for the instant-answer lookup
pub(crate) const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(5);

/// Sentences kept from encyclopedia and instant-answer text
pub(crate) const ANSWER_SENTENCES: usize = 2;

pub(crate) const DEFAULT_ASSISTANT_NAME: &str = "AURA";
pub(crate) const DEFAULT_BROWSER: &str = "comet";

pub(crate) const NOT_UNDERSTOOD: &str = "Sorry, I don't understand that command.";
pub(crate) const CALCULATION_HELP: &str =
    "Sorry, I couldn't calculate that. Try something like '2 + 2' or 'sqrt(16)'.";
pub(crate) const SYSTEM_INFO_FAILED: &str = "Sorry, I couldn't get the system information.";
