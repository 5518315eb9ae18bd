use crate::consts::IGNORED_PUNCTUATION;

/// Lowercase and trim an utterance.
///
/// Returns `None` when nothing meaningful is left: empty input, whitespace,
/// or a string made only of ignorable punctuation.
pub(crate) fn normalize(raw: &str) -> Option<String> {
    let cmd = raw.trim().to_lowercase();
    if cmd.is_empty() || cmd.chars().all(|c| IGNORED_PUNCTUATION.contains(c)) {
        return None;
    }
    Some(cmd)
}
