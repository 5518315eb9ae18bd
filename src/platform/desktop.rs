use std::path::PathBuf;
use std::process::{Command, Stdio};

use enigo::{Direction, Enigo, Key, Keyboard as _, Settings};

use super::{Browser, Keyboard, Launcher};
use crate::core::KeyCombo;
use crate::error::ServiceError;

/// Expand a leading `~` so config and built-in paths can be home-relative
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\"))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Spawns programs detached from our stdio; the child is never awaited
pub(crate) struct CommandLauncher;

impl Launcher for CommandLauncher {
    fn spawn(&mut self, path: &str) -> Result<(), ServiceError> {
        Command::new(expand_home(path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_child| ())
            .map_err(|source| ServiceError::Launch {
                path: path.to_string(),
                source,
            })
    }
}

pub(crate) struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<(), ServiceError> {
        open::that(url).map_err(|source| ServiceError::Open {
            target: url.to_string(),
            source,
        })
    }

    fn open_new_tab(&mut self, browser: Option<&str>, url: &str) -> Result<(), ServiceError> {
        if let Some(app) = browser {
            let app = expand_home(app).to_string_lossy().into_owned();
            match open::with(url, app.clone()) {
                Ok(()) => return Ok(()),
                Err(e) => log::debug!("{app} unavailable ({e}), using default browser"),
            }
        }
        self.open(url)
    }
}

/// Keystroke injection through enigo. The input connection is opened on
/// first use so headless sessions never touch the display server.
#[derive(Default)]
pub(crate) struct EnigoKeyboard {
    enigo: Option<Enigo>,
}

fn automation_error(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Automation(e.to_string())
}

impl EnigoKeyboard {
    fn connection(&mut self) -> Result<&mut Enigo, ServiceError> {
        if self.enigo.is_none() {
            self.enigo = Some(Enigo::new(&Settings::default()).map_err(automation_error)?);
        }
        self.enigo
            .as_mut()
            .ok_or_else(|| automation_error("no input connection"))
    }

    fn chord(&mut self, modifiers: &[Key], key: Key) -> Result<(), ServiceError> {
        let enigo = self.connection()?;
        for modifier in modifiers {
            enigo
                .key(*modifier, Direction::Press)
                .map_err(automation_error)?;
        }
        let result = enigo.key(key, Direction::Click);
        // Release even when the click failed so no modifier stays stuck
        for modifier in modifiers.iter().rev() {
            let _ = enigo.key(*modifier, Direction::Release);
        }
        result.map_err(automation_error)
    }
}

impl Keyboard for EnigoKeyboard {
    fn type_text(&mut self, text: &str) -> Result<(), ServiceError> {
        self.connection()?.text(text).map_err(automation_error)
    }

    fn press(&mut self, combo: KeyCombo) -> Result<(), ServiceError> {
        match combo {
            KeyCombo::Enter => self.chord(&[], Key::Return),
            KeyCombo::CloseWindow => self.chord(&[Key::Alt], Key::F4),
            KeyCombo::CloseTab => self.chord(&[Key::Control], Key::Unicode('w')),
            KeyCombo::NextTab => self.chord(&[Key::Control], Key::Tab),
            KeyCombo::PreviousTab => self.chord(&[Key::Control, Key::Shift], Key::Tab),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("notepad.exe"), PathBuf::from("notepad.exe"));
        assert_eq!(expand_home("/usr/bin/gedit"), PathBuf::from("/usr/bin/gedit"));
    }

    #[test]
    fn expand_home_joins_home_dir() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/bin/tool"), home.join("bin/tool"));
        }
    }
}
