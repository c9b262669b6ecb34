//! Greeting detection for the chat short-circuit path.

/// Fixed greeting lexicon checked by [`is_greeting`].
const GREETINGS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

/// Returns true when the text contains a lexicon entry as a whole word or
/// whole phrase, case-insensitively.
///
/// Boundary enforcement matters here: "history" and "hinder" contain "hi"
/// but are not greetings, so raw substring containment is not enough. An
/// entry matches only when both sides of the occurrence are a string edge
/// or a non-alphanumeric character.
pub fn is_greeting(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    GREETINGS
        .iter()
        .any(|entry| contains_delimited(&normalized, entry))
}

/// Canned reply for the greeting short-circuit. No upstream call is made
/// for greetings.
pub fn greeting_reply() -> &'static str {
    "Hello! I am the Bhujal groundwater assistant. Ask me about groundwater \
     status or water quality, or upload a report (PDF)."
}

/// Reply for an empty or whitespace-only message, returned before any
/// network call.
pub fn empty_message_reply() -> &'static str {
    "Please type a question."
}

fn contains_delimited(haystack: &str, needle: &str) -> bool {
    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(needle) {
        let at = search_from + offset;
        let end = at + needle.len();
        let open = at == 0
            || haystack[..at]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_alphanumeric());
        let close = end == haystack.len()
            || haystack[end..]
                .chars()
                .next()
                .is_some_and(|c| !c.is_alphanumeric());
        if open && close {
            return true;
        }
        // Lexicon entries are ASCII, so the next byte is a char boundary.
        search_from = at + 1;
    }
    false
}
