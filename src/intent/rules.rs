use std::sync::LazyLock;

use regex::Captures;

use super::{Intent, Rule};
use crate::config::AssistantConfig;
use crate::core::StateStore;
use crate::handlers::{apps, calc, chat, memo, system, web};

/// The dispatch table, highest priority first
pub(crate) static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Notes, tasks and the custom app registry
        Rule::new(Intent::AddNote, r"remind me to", memo::add_note),
        Rule::new(
            Intent::ShowNotes,
            r"read notes|show notes|show reminders",
            memo::show_notes,
        ),
        Rule::new(Intent::ClearNotes, r"clear notes|clear reminders", memo::clear_notes),
        Rule::new(Intent::AddTask, r"add task", memo::add_task),
        Rule::new(Intent::ShowTasks, r"show tasks|list tasks", memo::show_tasks),
        Rule::new(Intent::CompleteTask, r"complete task", memo::complete_task),
        Rule::new(Intent::ClearTasks, r"clear tasks", memo::clear_tasks),
        Rule::new(
            Intent::RegisterApp,
            r"add app path(?:\s+(.+?)\s+as\s+(.+))?",
            memo::register_app,
        ),
        // Conversation
        Rule::new(
            Intent::HowAreYou,
            r"\b(how are you|how's it going|how do you feel)\b",
            chat::how_are_you,
        ),
        Rule::new(
            Intent::MoodGood,
            r"i(?:\s+am|'m)\s+(good|great|happy|amazing|excellent)",
            chat::mood_good,
        ),
        Rule::new(
            Intent::MoodBad,
            r"i(?:\s+am|'m)\s+(bad|sad|depressed|unhappy|terrible)",
            chat::mood_bad,
        ),
        Rule::new(
            Intent::MoodOkay,
            r"i(?:\s+am|'m)\s+(okay|fine|alright|not bad)",
            chat::mood_okay,
        ),
        Rule::new(
            Intent::Joke,
            r"\b(tell\s+(?:me\s+)?a\s+joke|make\s+me\s+laugh|joke)\b",
            chat::joke,
        ),
        Rule::new(
            Intent::FunFact,
            r"\b(tell\s+(?:me\s+)?a\s+fact|fun\s+fact|interesting\s+fact)\b",
            chat::fun_fact,
        ),
        Rule::new(
            Intent::Hobbies,
            r"\b(what\s+do\s+you\s+like|your\s+hobbies|what\s+interests\s+you)\b",
            chat::hobbies,
        ),
        Rule::new(
            Intent::Capabilities,
            r"\b(tell\s+me\s+about\s+yourself|what\s+do\s+you\s+think\s+about|what\s+can\s+you\s+do)\b",
            chat::capabilities,
        ),
        Rule::new(Intent::Favorite, r"what's\s+your\s+favorite\b", chat::favorite),
        Rule::new(Intent::Thanks, r"\b(thank you|thanks)\b", chat::thanks),
        Rule::new(Intent::Greeting, r"\b(hello|hi|hey)\b", chat::greeting),
        // Browser tabs; exact phrases so "close tab" never reaches the close rule
        Rule::new(Intent::NewTab, r"^new tab$", web::new_tab),
        Rule::new(Intent::CloseTab, r"^close tab$", web::close_tab),
        Rule::new(Intent::CloseAllTabs, r"^close all tabs$", web::close_all_tabs),
        Rule::new(Intent::NextTab, r"^next tab$", web::next_tab),
        Rule::new(Intent::PreviousTab, r"^previous tab$", web::previous_tab),
        // Application control
        Rule::new(
            Intent::OpenApp,
            r"open (\w+)(?: and (?:type|search)(?: for)? (.+))?",
            apps::open_app,
        )
        .guarded(names_an_app),
        Rule::new(Intent::Undo, r"\bundo\b", apps::undo),
        Rule::new(Intent::Close, r"close(?: (\w+))?", apps::close),
        // Information and the web
        Rule::new(
            Intent::Time,
            r"\b(what\s+time|current\s+time|time\s+now)\b",
            web::time,
        ),
        Rule::new(
            Intent::Date,
            r"\b(what\s+date|today's\s+date|current\s+date)\b",
            web::date,
        ),
        Rule::new(
            Intent::PlayVideo,
            r"play (.+?)(?:\s+on\s+youtube|\s*$)",
            web::play_video,
        ),
        Rule::new(
            Intent::WebService,
            r"open\s+(?:web\s+)?(?:service\s+)?(\w+)(?:\s+and\s+(?:search|type)\s+(.+))?",
            web::web_service,
        ),
        Rule::new(Intent::Wikipedia, r"wikipedia (.+)", web::wikipedia),
        Rule::new(Intent::Question, r"^(what|how|who|explain)\s+(.+)", web::question),
        Rule::new(Intent::Search, r"search (.+)", web::search),
        Rule::new(Intent::Goodbye, r"\b(goodbye|exit)\b", web::goodbye),
        Rule::new(Intent::Calculate, r"calculate\s+(.*)", calc::calculate),
        Rule::new(Intent::SystemInfo, r"system\s+info", system::system_info),
    ]
});

/// Leave "open <service>" to the web-service rule unless an app by that name
/// is registered
fn names_an_app(caps: &Captures<'_>, state: &StateStore, config: &AssistantConfig) -> bool {
    let word = &caps[1];
    if state.resolve_app_path(word).is_ok() {
        return true;
    }
    !(word == "web" || word == "service" || config.catalog.web_service(word).is_some())
}
