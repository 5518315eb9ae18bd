//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "aura")]
#[command(about = "Rule-based desktop assistant: type a command, get a response", version)]
pub(crate) struct Cli {
    /// Utterance to process once; omit to read commands line by line from stdin
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub(crate) utterance: Vec<String>,

    /// Print each response as a JSON object
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Enable debug logging (matched rules, swallowed service errors)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Timezone for time and date answers (e.g., "UTC", "Europe/Berlin")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Browser app name opened for new tabs and browser searches
    #[arg(long, value_name = "APP")]
    pub(crate) browser: Option<String>,

    /// Milliseconds to wait after launching an app before typing into it
    #[arg(long, value_name = "MS")]
    pub(crate) settle_delay_ms: Option<u64>,

    /// Skip keystroke automation (typing into apps, tab hotkeys)
    #[arg(long)]
    pub(crate) no_automation: bool,

    /// Disable colored output
    #[arg(long)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.browser.is_none() {
            self.browser = config.default_browser.clone();
        }
        if self.settle_delay_ms.is_none() {
            self.settle_delay_ms = config.settle_delay_ms;
        }
        self
    }

    /// The one-shot utterance, if any words were given
    pub(crate) fn one_shot(&self) -> Option<String> {
        if self.utterance.is_empty() {
            None
        } else {
            Some(self.utterance.join(" "))
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_words_form_one_utterance() {
        let cli = Cli::parse_from(["aura", "calculate", "2", "+", "2"]);
        assert_eq!(cli.one_shot().as_deref(), Some("calculate 2 + 2"));
        assert!(Cli::parse_from(["aura"]).one_shot().is_none());
    }

    #[test]
    fn flags_before_utterance() {
        let cli = Cli::parse_from(["aura", "--json", "--timezone", "UTC", "what", "time"]);
        assert!(cli.json);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.one_shot().as_deref(), Some("what time"));
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            debug: true,
            timezone: Some("UTC".to_string()),
            default_browser: Some("firefox".to_string()),
            settle_delay_ms: Some(900),
            ..Config::default()
        };
        let cli = Cli::parse_from(["aura", "--browser", "chrome"]).with_config(&config);
        assert!(cli.debug);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.browser.as_deref(), Some("chrome"));
        assert_eq!(cli.settle_delay_ms, Some(900));
    }
}
