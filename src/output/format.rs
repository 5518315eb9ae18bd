use crate::core::Task;

/// Render reminders as a numbered list
pub(crate) fn format_notes(notes: &[String]) -> String {
    if notes.is_empty() {
        return "You don't have any reminders yet.".to_string();
    }
    let items: Vec<String> = notes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect();
    format!("Your reminders:\n{}", items.join("\n"))
}

/// Render tasks as a numbered checklist
pub(crate) fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "You don't have any tasks yet.".to_string();
    }
    let items: Vec<String> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let status = if task.done { "✓" } else { "○" };
            format!("{}. [{}] {}", i + 1, status, task.text)
        })
        .collect();
    format!("Your tasks:\n{}", items.join("\n"))
}

pub(crate) fn format_capabilities(name: &str) -> String {
    [
        format!("Hello! I'm {name}, your digital assistant. Here's what I can do for you:"),
        " App Control: I can open and close applications like Chrome, Comet browser, Notepad, Calculator, and more".to_string(),
        " Web Services: I can help you with YouTube, Google Maps, Gmail, LinkedIn, and other web services".to_string(),
        " Task Management: I can maintain your to-do list and set reminders".to_string(),
        " Web Search: I can search the web and find information on Wikipedia".to_string(),
        " Calculator: I can perform basic calculations".to_string(),
        " Browser Control: I can manage tabs (new, close, switch) in your browser".to_string(),
        " Conversation: I can chat, tell jokes, share fun facts, and respond to your mood".to_string(),
        " System Info: I can monitor your system's CPU, memory, and disk usage".to_string(),
        "Feel free to ask me to help with any of these tasks!".to_string(),
    ]
    .join("\n")
}

/// Keep the first `max_sentences` sentences of `text`.
///
/// A sentence ends at `.`, `?` or `!` followed by whitespace; the kept
/// sentences are rejoined with single spaces.
pub(crate) fn shorten(text: &str, max_sentences: usize) -> String {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (i, c) in text.char_indices() {
        if after_terminal && c.is_whitespace() {
            sentences.push(&text[start..i]);
            start = i;
        }
        after_terminal = matches!(c, '.' | '?' | '!');
    }
    sentences.push(&text[start..]);

    sentences
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_numbered_in_order() {
        let notes = vec!["call mom".to_string(), "water plants".to_string()];
        assert_eq!(
            format_notes(&notes),
            "Your reminders:\n1. call mom\n2. water plants"
        );
        assert_eq!(format_notes(&[]), "You don't have any reminders yet.");
    }

    #[test]
    fn tasks_show_status_marks() {
        let tasks = vec![
            Task {
                text: "buy milk".to_string(),
                done: false,
            },
            Task {
                text: "walk dog".to_string(),
                done: true,
            },
        ];
        assert_eq!(
            format_tasks(&tasks),
            "Your tasks:\n1. [○] buy milk\n2. [✓] walk dog"
        );
        assert_eq!(format_tasks(&[]), "You don't have any tasks yet.");
    }

    #[test]
    fn capabilities_use_assistant_name() {
        let text = format_capabilities("Nova");
        assert!(text.starts_with("Hello! I'm Nova, your digital assistant."));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn shorten_keeps_leading_sentences() {
        let text = "Cats are small. They purr!  Are they cute? Yes.";
        assert_eq!(shorten(text, 2), "Cats are small. They purr!");
        assert_eq!(shorten(text, 10), "Cats are small. They purr! Are they cute? Yes.");
    }

    #[test]
    fn shorten_ignores_punctuation_inside_words() {
        assert_eq!(
            shorten("Version 1.5 shipped in 2020. It was fast. Really.", 1),
            "Version 1.5 shipped in 2020."
        );
    }

    #[test]
    fn shorten_handles_unterminated_and_empty_text() {
        assert_eq!(shorten("no terminal punctuation", 2), "no terminal punctuation");
        assert_eq!(shorten("   ", 2), "");
    }
}
