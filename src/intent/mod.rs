//! Intent matching
//!
//! An ordered list of rules, each a pattern bound to a handler. The list is
//! scanned top to bottom against the normalized utterance and the first rule
//! that matches wins; later rules are never consulted. Position in the list
//! is the priority.

mod rules;

use regex::{Captures, Regex};

use crate::config::AssistantConfig;
use crate::core::{Reply, StateStore};
use crate::handlers::Context;

pub(crate) use rules::RULES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Intent {
    AddNote,
    ShowNotes,
    ClearNotes,
    AddTask,
    ShowTasks,
    CompleteTask,
    ClearTasks,
    RegisterApp,
    HowAreYou,
    MoodGood,
    MoodBad,
    MoodOkay,
    Joke,
    FunFact,
    Hobbies,
    Capabilities,
    Favorite,
    Thanks,
    Greeting,
    NewTab,
    CloseTab,
    CloseAllTabs,
    NextTab,
    PreviousTab,
    OpenApp,
    Undo,
    Close,
    Time,
    Date,
    PlayVideo,
    WebService,
    Wikipedia,
    Question,
    Search,
    Goodbye,
    Calculate,
    SystemInfo,
}

pub(crate) type Handler = fn(&mut Context<'_>, &Captures<'_>) -> Reply;

/// Extra veto evaluated after the pattern matched
pub(crate) type Guard = fn(&Captures<'_>, &StateStore, &AssistantConfig) -> bool;

pub(crate) struct Rule {
    pub(crate) intent: Intent,
    pattern: Regex,
    guard: Option<Guard>,
    pub(crate) handler: Handler,
}

impl Rule {
    /// Patterns are compile-time constants; a bad one is a programming error
    fn new(intent: Intent, pattern: &str, handler: Handler) -> Self {
        Self {
            intent,
            pattern: Regex::new(pattern).expect("intent pattern must compile"),
            guard: None,
            handler,
        }
    }

    fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub(crate) fn matches<'t>(
        &self,
        cmd: &'t str,
        state: &StateStore,
        config: &AssistantConfig,
    ) -> Option<Captures<'t>> {
        let caps = self.pattern.captures(cmd)?;
        match self.guard {
            Some(guard) if !guard(&caps, state, config) => None,
            _ => Some(caps),
        }
    }
}

/// First rule matching `cmd`, with its captures
pub(crate) fn find_rule<'t>(
    cmd: &'t str,
    state: &StateStore,
    config: &AssistantConfig,
) -> Option<(&'static Rule, Captures<'t>)> {
    RULES
        .iter()
        .find_map(|rule| rule.matches(cmd, state, config).map(|caps| (rule, caps)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(cmd: &str) -> Option<Intent> {
        let config = AssistantConfig::default();
        let state = StateStore::new(config.catalog.apps.clone());
        find_rule(cmd, &state, &config).map(|(rule, _)| rule.intent)
    }

    fn position(intent: Intent) -> usize {
        RULES
            .iter()
            .position(|r| r.intent == intent)
            .unwrap_or_else(|| panic!("{intent:?} has no rule"))
    }

    #[test]
    fn every_intent_has_exactly_one_rule() {
        let mut seen: Vec<Intent> = Vec::new();
        for rule in RULES.iter() {
            assert!(!seen.contains(&rule.intent), "{:?} listed twice", rule.intent);
            seen.push(rule.intent);
        }
        assert_eq!(seen.len(), 37);
    }

    #[test]
    fn stateful_rules_come_before_conversation() {
        assert!(position(Intent::RegisterApp) < position(Intent::HowAreYou));
        assert!(position(Intent::Greeting) < position(Intent::OpenApp));
    }

    #[test]
    fn generic_search_is_ordered_after_specific_lookups() {
        assert!(position(Intent::WebService) < position(Intent::Search));
        assert!(position(Intent::Wikipedia) < position(Intent::Search));
        assert!(position(Intent::Question) < position(Intent::Search));
    }

    #[test]
    fn wikipedia_is_not_shadowed_by_search() {
        assert_eq!(intent_of("wikipedia cats"), Some(Intent::Wikipedia));
        assert_eq!(intent_of("search wikipedia cats"), Some(Intent::Wikipedia));
        assert_eq!(intent_of("search cats"), Some(Intent::Search));
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // "add task" is checked before the greeting rule would see "hi"
        assert_eq!(intent_of("add task say hi to sam"), Some(Intent::AddTask));
        assert_eq!(intent_of("remind me to add task"), Some(Intent::AddNote));
        assert_eq!(intent_of("what time is it"), Some(Intent::Time));
        assert_eq!(intent_of("what can you do"), Some(Intent::Capabilities));
    }

    #[test]
    fn notes_and_tasks_phrases() {
        assert_eq!(intent_of("remind me to call mom"), Some(Intent::AddNote));
        assert_eq!(intent_of("show reminders"), Some(Intent::ShowNotes));
        assert_eq!(intent_of("read notes"), Some(Intent::ShowNotes));
        assert_eq!(intent_of("clear reminders"), Some(Intent::ClearNotes));
        assert_eq!(intent_of("list tasks"), Some(Intent::ShowTasks));
        assert_eq!(intent_of("complete task 2"), Some(Intent::CompleteTask));
        assert_eq!(intent_of("clear tasks"), Some(Intent::ClearTasks));
        assert_eq!(intent_of("add app path c:\\x.exe as x"), Some(Intent::RegisterApp));
    }

    #[test]
    fn conversation_phrases() {
        assert_eq!(intent_of("how are you"), Some(Intent::HowAreYou));
        assert_eq!(intent_of("i'm great"), Some(Intent::MoodGood));
        assert_eq!(intent_of("i am sad"), Some(Intent::MoodBad));
        assert_eq!(intent_of("i am not bad"), Some(Intent::MoodOkay));
        assert_eq!(intent_of("tell me a joke"), Some(Intent::Joke));
        assert_eq!(intent_of("fun fact please"), Some(Intent::FunFact));
        assert_eq!(intent_of("what are your hobbies"), Some(Intent::Hobbies));
        assert_eq!(intent_of("what's your favorite color"), Some(Intent::Favorite));
        assert_eq!(intent_of("thanks a lot"), Some(Intent::Thanks));
        assert_eq!(intent_of("hey there"), Some(Intent::Greeting));
        // Word boundaries keep "this" from reading as "hi"
        assert_eq!(intent_of("this is odd"), None);
    }

    #[test]
    fn tab_commands_match_exactly() {
        assert_eq!(intent_of("new tab"), Some(Intent::NewTab));
        assert_eq!(intent_of("close tab"), Some(Intent::CloseTab));
        assert_eq!(intent_of("close all tabs"), Some(Intent::CloseAllTabs));
        assert_eq!(intent_of("next tab"), Some(Intent::NextTab));
        assert_eq!(intent_of("previous tab"), Some(Intent::PreviousTab));
        assert_eq!(intent_of("close the tab"), Some(Intent::Close));
    }

    #[test]
    fn open_defers_to_web_services() {
        assert_eq!(intent_of("open notepad"), Some(Intent::OpenApp));
        assert_eq!(intent_of("open spotify and search for jazz"), Some(Intent::OpenApp));
        assert_eq!(intent_of("open paint"), Some(Intent::OpenApp));
        assert_eq!(intent_of("open youtube"), Some(Intent::WebService));
        assert_eq!(intent_of("open web service github"), Some(Intent::WebService));
        assert_eq!(intent_of("open maps and search paris"), Some(Intent::WebService));
    }

    #[test]
    fn open_prefers_registered_app_over_service() {
        let config = AssistantConfig::default();
        let mut state = StateStore::new(config.catalog.apps.clone());
        state.register_custom_app("youtube", "yt-desktop");
        let (rule, _) = find_rule("open youtube", &state, &config).unwrap();
        assert_eq!(rule.intent, Intent::OpenApp);
    }

    #[test]
    fn app_control_and_information_phrases() {
        assert_eq!(intent_of("undo"), Some(Intent::Undo));
        assert_eq!(intent_of("close"), Some(Intent::Close));
        assert_eq!(intent_of("close notepad"), Some(Intent::Close));
        assert_eq!(intent_of("what's today's date"), Some(Intent::Date));
        assert_eq!(intent_of("play lofi beats on youtube"), Some(Intent::PlayVideo));
        assert_eq!(intent_of("who is ada lovelace"), Some(Intent::Question));
        assert_eq!(intent_of("explain photosynthesis"), Some(Intent::Question));
        assert_eq!(intent_of("goodbye"), Some(Intent::Goodbye));
        assert_eq!(intent_of("calculate 2 + 2"), Some(Intent::Calculate));
        assert_eq!(intent_of("show system info"), Some(Intent::SystemInfo));
    }

    #[test]
    fn unmatched_input_has_no_rule() {
        assert_eq!(intent_of("blorp the flux"), None);
        assert_eq!(intent_of("calculate"), None);
    }
}
