//! Clock, browser, web-service and lookup intents

use regex::Captures;

use super::{Context, capture};
use crate::consts::ANSWER_SENTENCES;
use crate::core::{FollowUp, KeyCombo, Reply};
use crate::error::CommandError;
use crate::output::shorten;

const GOOGLE_SEARCH: &str = "https://www.google.com/search?q=";
const YOUTUBE: &str = "https://www.youtube.com";

pub(crate) fn google_search_url(query: &str) -> String {
    format!("{GOOGLE_SEARCH}{}", urlencoding::encode(query))
}

/// Search page of a web service rooted at `base`
fn service_search_url(service: &str, base: &str, query: &str) -> String {
    let query = urlencoding::encode(query);
    match service {
        "youtube" => format!("{base}/results?search_query={query}"),
        "maps" => format!("{base}/search/{query}"),
        _ => format!("{base}/search?q={query}"),
    }
}

pub(crate) fn time(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let now = ctx.platform.clock.now();
    Reply::text(ctx.config.timezone.format(now, "The time is %I:%M %p."))
}

pub(crate) fn date(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let now = ctx.platform.clock.now();
    Reply::text(ctx.config.timezone.format(now, "Today is %A, %B %d, %Y."))
}

pub(crate) fn play_video(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let query = &caps[1];
    let base = ctx.config.catalog.web_service("youtube").unwrap_or(YOUTUBE);
    let url = service_search_url("youtube", base, query);
    ctx.open_url(&url);
    Reply::text(format!("Opening YouTube and searching for {query}."))
}

pub(crate) fn new_tab(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    let target = ctx.default_browser_target();
    if let Err(e) = ctx.platform.browser.open_new_tab(Some(&target), "about:blank") {
        log::debug!("New tab failed: {e}");
    }
    Reply::text("Opening new tab.")
}

fn hotkey(ctx: &Context<'_>, text: &str, combo: KeyCombo) -> Reply {
    Reply::text(text).with_follow_up(FollowUp::Hotkey {
        combo,
        settle: ctx.config.key_delay,
    })
}

pub(crate) fn close_tab(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    hotkey(ctx, "Closing current tab.", KeyCombo::CloseTab)
}

pub(crate) fn close_all_tabs(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    hotkey(ctx, "Closing all tabs.", KeyCombo::CloseWindow)
}

pub(crate) fn next_tab(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    hotkey(ctx, "Switching to next tab.", KeyCombo::NextTab)
}

pub(crate) fn previous_tab(ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    hotkey(ctx, "Switching to previous tab.", KeyCombo::PreviousTab)
}

/// "open [web] [service] <name> [and search|type <query>]"
pub(crate) fn web_service(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let service = &caps[1];
    let query = capture(caps, 2);
    let Some(base) = ctx.config.catalog.web_service(service) else {
        return Reply::text(
            CommandError::UnknownWebService {
                name: service.to_string(),
            }
            .to_string(),
        );
    };

    let url = match query {
        Some(query) => service_search_url(service, base, query),
        None => base.to_string(),
    };
    ctx.open_url(&url);

    match query {
        Some(query) => Reply::text(format!("Opening {service} and searching for {query}")),
        None => Reply::text(format!("Opening {service}")),
    }
}

pub(crate) fn wikipedia(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let topic = caps[1].trim();
    match ctx.platform.encyclopedia.summary(topic, ANSWER_SENTENCES) {
        Ok(summary) => Reply::text(summary),
        Err(e) => {
            log::debug!("Wikipedia error: {e}");
            Reply::text(format!(
                "I couldn't find information about {topic} on Wikipedia."
            ))
        }
    }
}

/// Instant answer first, encyclopedia second, apology last
pub(crate) fn question(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let query = caps[2].trim();
    log::debug!("Question detected ({}): {query}", &caps[1]);

    match ctx.platform.instant_answers.lookup(query) {
        Ok(answer) => {
            if let Some(text) = answer.best_text() {
                return Reply::text(shorten(text, ANSWER_SENTENCES));
            }
        }
        Err(e) => log::debug!("Instant answer error: {e}"),
    }

    match ctx.platform.encyclopedia.summary(query, ANSWER_SENTENCES) {
        Ok(summary) => Reply::text(summary),
        Err(e) => {
            log::debug!("Fallback encyclopedia error: {e}");
            Reply::text(format!(
                "I couldn't find a concise answer for {query}. I can search the web if you'd like."
            ))
        }
    }
}

pub(crate) fn search(ctx: &mut Context<'_>, caps: &Captures<'_>) -> Reply {
    let query = &caps[1];
    ctx.open_url(&google_search_url(query));
    Reply::text(format!("Searching for {query}."))
}

pub(crate) fn goodbye(_ctx: &mut Context<'_>, _caps: &Captures<'_>) -> Reply {
    Reply::text("Goodbye! Have a great day!").ending_session()
}
