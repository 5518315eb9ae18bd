//! Static lookup tables: launch paths, process names, browsers, web services
//!
//! Built-ins are layered under whatever the config file supplies.

use std::collections::BTreeMap;

#[cfg(windows)]
const BUILTIN_APPS: &[(&str, &str)] = &[
    ("chrome", r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
    ("comet", r"~\AppData\Local\Programs\CometBrowser\comet.exe"),
    ("notepad", "notepad.exe"),
    ("calculator", "calc.exe"),
    ("powerpoint", r"C:\Program Files\Microsoft Office\root\Office16\POWERPNT.EXE"),
    ("spotify", r"~\AppData\Roaming\Spotify\Spotify.exe"),
    ("word", r"C:\Program Files\Microsoft Office\root\Office16\WINWORD.EXE"),
    ("excel", r"C:\Program Files\Microsoft Office\root\Office16\EXCEL.EXE"),
];

#[cfg(not(windows))]
const BUILTIN_APPS: &[(&str, &str)] = &[
    ("chrome", "google-chrome"),
    ("comet", "comet"),
    ("notepad", "gedit"),
    ("calculator", "gnome-calculator"),
    ("powerpoint", "libreoffice"),
    ("spotify", "spotify"),
    ("word", "libreoffice"),
    ("excel", "libreoffice"),
];

#[cfg(windows)]
const BUILTIN_PROCESSES: &[(&str, &str)] = &[
    ("notepad", "notepad.exe"),
    ("calculator", "Calculator.exe"),
    ("calc", "Calculator.exe"),
    ("chrome", "chrome.exe"),
    ("comet", "comet.exe"),
    ("spotify", "Spotify.exe"),
    ("word", "WINWORD.EXE"),
    ("excel", "EXCEL.EXE"),
    ("powerpoint", "POWERPNT.EXE"),
];

#[cfg(not(windows))]
const BUILTIN_PROCESSES: &[(&str, &str)] = &[
    ("notepad", "gedit"),
    ("calculator", "gnome-calculator"),
    ("calc", "gnome-calculator"),
    ("chrome", "chrome"),
    ("comet", "comet"),
    ("spotify", "spotify"),
    ("word", "soffice.bin"),
    ("excel", "soffice.bin"),
    ("powerpoint", "soffice.bin"),
];

/// Apps closed with a window-close hotkey instead of a process scan
const BUILTIN_BROWSER_APPS: &[&str] = &["chrome", "comet"];

const BUILTIN_WEB_SERVICES: &[(&str, &str)] = &[
    ("linkedin", "https://www.linkedin.com"),
    ("youtube", "https://www.youtube.com"),
    ("github", "https://github.com"),
    ("gmail", "https://mail.google.com"),
    ("maps", "https://www.google.com/maps"),
    ("twitter", "https://twitter.com"),
    ("facebook", "https://facebook.com"),
    ("instagram", "https://instagram.com"),
    ("amazon", "https://amazon.com"),
    ("netflix", "https://netflix.com"),
    ("weather", "https://weather.com"),
    ("news", "https://news.google.com"),
    ("translate", "https://translate.google.com"),
    ("drive", "https://drive.google.com"),
    ("calendar", "https://calendar.google.com"),
];

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct AppCatalog {
    pub(crate) apps: BTreeMap<String, String>,
    pub(crate) processes: BTreeMap<String, String>,
    pub(crate) browser_apps: Vec<String>,
    pub(crate) web_services: BTreeMap<String, String>,
}

impl Default for AppCatalog {
    fn default() -> Self {
        Self {
            apps: table(BUILTIN_APPS),
            processes: table(BUILTIN_PROCESSES),
            browser_apps: BUILTIN_BROWSER_APPS.iter().map(|s| s.to_string()).collect(),
            web_services: table(BUILTIN_WEB_SERVICES),
        }
    }
}

impl AppCatalog {
    /// Layer config-supplied entries over the built-ins. Keys are lowercased
    /// because utterances are matched in lowercase.
    pub(crate) fn with_overrides(
        mut self,
        apps: &BTreeMap<String, String>,
        processes: &BTreeMap<String, String>,
        web_services: &BTreeMap<String, String>,
        browser_apps: Option<&[String]>,
    ) -> Self {
        for (name, path) in apps {
            self.apps.insert(name.to_lowercase(), path.clone());
        }
        for (name, exe) in processes {
            self.processes.insert(name.to_lowercase(), exe.clone());
        }
        for (name, url) in web_services {
            self.web_services
                .insert(name.to_lowercase(), url.trim_end_matches('/').to_string());
        }
        if let Some(browsers) = browser_apps {
            self.browser_apps = browsers.iter().map(|b| b.to_lowercase()).collect();
        }
        self
    }

    pub(crate) fn process_name(&self, app: &str) -> Option<&str> {
        self.processes.get(&app.to_lowercase()).map(String::as_str)
    }

    pub(crate) fn is_browser(&self, app: &str) -> bool {
        self.browser_apps.iter().any(|b| b.eq_ignore_ascii_case(app))
    }

    pub(crate) fn web_service(&self, name: &str) -> Option<&str> {
        self.web_services.get(name).map(String::as_str)
    }
}
