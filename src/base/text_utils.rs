//! Text manipulation utilities for working with source lines.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Find the boundaries of a word at the given position.
///
/// Returns `Some((start, end))` where `start` is the character index of the word start
/// and `end` is the character index after the last word character.
/// Returns `None` if there is no word at the position.
pub fn find_word_boundaries(chars: &[char], position: usize) -> Option<(usize, usize)> {
    if position >= chars.len() {
        return None;
    }

    // Check if we're on a word character
    if !is_word_character(chars[position]) {
        return None;
    }

    // Find start of word
    let mut start = position;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    // Find end of word
    let mut end = position;
    while end < chars.len() && is_word_character(chars[end]) {
        end += 1;
    }

    Some((start, end))
}

/// Like [`find_word_boundaries`], but a cursor sitting just past the last
/// character of a word still selects that word.
pub fn find_word_boundaries_near(chars: &[char], position: usize) -> Option<(usize, usize)> {
    find_word_boundaries(chars, position)
        .or_else(|| position.checked_sub(1).and_then(|p| find_word_boundaries(chars, p)))
}

/// Extract the word (identifier) at the cursor position in a line of text.
///
/// Returns the word as a `String`, or `None` if there is no word at the position.
///
/// # Example
/// ```
/// use cimpl::base::text_utils::extract_word_at_cursor;
///
/// let line = "Based on: Entity";
/// assert_eq!(extract_word_at_cursor(line, 11), Some("Entity".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 16), Some("Entity".to_string()));
/// assert_eq!(extract_word_at_cursor(line, 9), None); // after the colon
/// ```
pub fn extract_word_at_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let (start, end) = find_word_boundaries_near(&chars, position)?;
    Some(chars[start..end].iter().collect())
}

/// Extract the word that ends right before the cursor, skipping one member
/// access dot (`Person.|` yields `Person`).
///
/// # Example
/// ```
/// use cimpl::base::text_utils::extract_word_before_cursor;
///
/// assert_eq!(extract_word_before_cursor("0..1 Person.", 12), Some("Person".to_string()));
/// assert_eq!(extract_word_before_cursor("0..1 Person", 11), Some("Person".to_string()));
/// assert_eq!(extract_word_before_cursor("0..1 ", 5), None);
/// ```
pub fn extract_word_before_cursor(line: &str, position: usize) -> Option<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut end = position.min(chars.len());

    if end > 0 && chars[end - 1] == '.' {
        end -= 1;
    }

    let mut start = end;
    while start > 0 && is_word_character(chars[start - 1]) {
        start -= 1;
    }

    (start < end).then(|| chars[start..end].iter().collect())
}
