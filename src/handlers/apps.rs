//! Opening, closing and undoing applications

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Context, capture};
use crate::core::{FollowUp, KeyCombo, Reply};
use crate::handlers::web::google_search_url;

/// What an undoable history entry looks like
static OPEN_COMMAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"open (\w+)").expect("open pattern must compile"));

/// "open <app> [and type|search [for] <text>]"
pub(crate) fn open_app(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let app = &caps[1];
    let text = capture(caps, 2);

    if app == ctx.config.default_browser {
        return open_default_browser(ctx, app, text);
    }

    let path = match ctx.state.resolve_app_path(app) {
        Ok(path) => path.to_string(),
        Err(e) => return Reply::text(e.to_string()),
    };

    let launched = if path.starts_with("http") {
        ctx.platform.browser.open(&path)
    } else {
        ctx.platform.launcher.spawn(&path)
    };
    if let Err(e) = launched {
        log::debug!("Error opening {app}: {e}");
        return Reply::text(format!("Failed to open {app}."));
    }

    ctx.remember_opened(app);

    match text {
        Some(text) => Reply::text(format!("Opening {app} and typing '{text}'")).with_follow_up(
            FollowUp::TypeText {
                text: text.to_string(),
                settle: ctx.config.settle_delay,
            },
        ),
        None => Reply::text(format!("Opening {app}.")),
    }
}

/// The default browser gets a fresh tab rather than a second process
fn open_default_browser(ctx: &mut Context<'_>, app: &str, text: Option<&str>) -> Reply {
    let target = ctx.default_browser_target();
    let url = text.map_or_else(|| "about:blank".to_string(), google_search_url);
    if let Err(e) = ctx.platform.browser.open_new_tab(Some(&target), &url) {
        log::debug!("Error opening {app}: {e}");
        return Reply::text(format!("Failed to open {app}."));
    }

    ctx.remember_opened(app);

    match text {
        Some(text) => Reply::text(format!("Opening {app} and searching for '{text}'")),
        None => Reply::text(format!("Opening {app} browser.")),
    }
}

/// Close LastOpenedApp if set, else the app named in the utterance
pub(crate) fn close(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    if let Some(app) = ctx.state.clear_last_opened() {
        let reply = close_application(ctx, &app);
        return Reply {
            text: format!("Closing {app}. {}", reply.text),
            ..reply
        };
    }
    match capture(caps, 1) {
        Some(app) => close_application(ctx, app),
        None => Reply::text("No recent application to close."),
    }
}

/// Undo the immediately preceding "open" by closing that app again
pub(crate) fn undo(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let Some(last) = ctx.state.last_history() else {
        return Reply::text("No previous commands to undo.");
    };
    let Some(app) = OPEN_COMMAND
        .captures(&last.command)
        .map(|caps| caps[1].to_string())
    else {
        return Reply::text("Cannot undo the last command automatically.");
    };

    let reply = close_application(ctx, &app);
    ctx.state.pop_history();
    if ctx.state.last_opened() == Some(app.as_str()) {
        ctx.state.clear_last_opened();
    }

    Reply {
        text: format!("Undoing last command: {}", reply.text),
        ..reply
    }
}

/// Browsers get a close-window hotkey aimed at whatever window has focus;
/// everything else is terminated by executable name.
fn close_application(ctx: &mut Context<'_>, app: &str) -> Reply {
    if ctx.config.catalog.is_browser(app) {
        return Reply::text(format!("Closing {app} browser.")).with_follow_up(FollowUp::Hotkey {
            combo: KeyCombo::CloseWindow,
            settle: ctx.config.key_delay,
        });
    }

    let Some(exe) = ctx.config.catalog.process_name(app) else {
        return Reply::text(format!("Cannot close {app} automatically."));
    };

    let mut found = false;
    for process in ctx.platform.processes.list_processes() {
        if !process.name.eq_ignore_ascii_case(exe) {
            continue;
        }
        match ctx.platform.processes.terminate(process.pid) {
            Ok(()) => found = true,
            Err(e) => log::debug!("Failed to terminate {}: {e}", process.name),
        }
    }

    if found {
        Reply::text(format!("Closed {app}."))
    } else {
        Reply::text(format!("No running process found for {app}."))
    }
}
