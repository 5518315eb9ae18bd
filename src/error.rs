use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid config {}: {message}", path.display())]
    Config {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("I/O error on {context}: {source}")]
    Io {
        context: &'static str,
        source: std::io::Error,
    },
}

/// Handler failures whose message is spoken back to the user verbatim
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("App {app} not found in my database.")]
    AppNotFound { app: String },

    #[error("Invalid task number.")]
    TaskIndexOutOfRange { index: usize },

    #[error("I don't know the web service {name}.")]
    UnknownWebService { name: String },

    #[error("{}", crate::consts::CALCULATION_HELP)]
    Calculation(#[from] ExprError),
}

/// Failures of external collaborators (network, OS, UI automation)
#[derive(Debug, Error)]
pub(crate) enum ServiceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("no result for \"{0}\"")]
    NotFound(String),

    #[error("\"{0}\" matches several pages")]
    Ambiguous(String),

    #[error("failed to launch {path}: {source}")]
    Launch {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to open {target}: {source}")]
    Open {
        target: String,
        source: std::io::Error,
    },

    #[error("keyboard automation failed: {0}")]
    Automation(String),

    #[error("system metrics unavailable: {0}")]
    Metrics(&'static str),

    #[error("process {pid} could not be signalled")]
    Terminate { pid: u32 },
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum ExprError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("name '{0}' is not allowed")]
    UnknownName(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unexpected token after expression")]
    Trailing,

    #[error("division by zero")]
    DivisionByZero,

    #[error("math domain error")]
    Domain,

    #[error("expression nested too deeply")]
    TooDeep,
}
