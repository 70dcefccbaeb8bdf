//! Whole-token shorthand substitution
//!
//! Replaces every whole-token occurrence of a shorthand with its markup in a
//! single left-to-right pass. At each position the table is tried longest
//! shorthand first, so `int` wins over a hypothetical `in`. Emitted markup is
//! never rescanned, which means one substitution can never create a match for
//! another rule.
//!
//! # Token boundaries
//!
//! A shorthand end made of an alphanumeric character only matches when the
//! neighbouring input character is not alphanumeric. Punctuation ends (as in
//! `->`) carry no requirement, so both `a->b` and `a -> b` substitute while
//! `int` inside `print` does not.
//!
//! LaTeX control sequences already present in the input (`\pi`, `\\`) are
//! copied through untouched. When emitted markup ends in a control word and
//! the next input character is a letter, a space is inserted so `a->b`
//! becomes `a\to b` rather than the undefined `\tob`.

use crate::core::table::{SymbolEntry, SymbolTable};

/// First pipeline stage: shorthand → markup
#[derive(Debug, Clone, Copy)]
pub struct SymbolSubstitutor<'a> {
    table: &'a SymbolTable,
}

impl<'a> SymbolSubstitutor<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    /// Substitute every shorthand token in `input`. Never fails; unknown
    /// tokens pass through unchanged.
    pub fn substitute(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() * 2);
        let mut prev: Option<char> = None;
        // Emitted markup ended in a control word that a letter would extend
        let mut open_word = false;
        let mut pos = 0;

        while pos < input.len() {
            let rest = &input[pos..];

            if let Some(len) = control_sequence_len(rest) {
                open_word = false;
                output.push_str(&rest[..len]);
                prev = rest[..len].chars().next_back();
                pos += len;
                continue;
            }

            if let Some(entry) = self.match_at(rest, prev) {
                log::trace!("substituting '{}' -> '{}'", entry.shorthand, entry.markup);
                if open_word && starts_with_letter(&entry.markup) {
                    output.push(' ');
                }
                output.push_str(&entry.markup);
                open_word = ends_with_control_word(&entry.markup);
                prev = entry.shorthand.chars().next_back();
                pos += entry.shorthand.len();
                continue;
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            if open_word && ch.is_ascii_alphabetic() {
                output.push(' ');
            }
            open_word = false;
            output.push(ch);
            prev = Some(ch);
            pos += ch.len_utf8();
        }

        output
    }

    /// Longest table entry that matches as a whole token at the start of `rest`
    fn match_at(&self, rest: &str, prev: Option<char>) -> Option<&'a SymbolEntry> {
        self.table.longest_first().find(|entry| {
            let token = entry.shorthand.as_str();
            rest.starts_with(token)
                && left_boundary_ok(token, prev)
                && right_boundary_ok(token, rest[token.len()..].chars().next())
        })
    }
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

fn left_boundary_ok(token: &str, prev: Option<char>) -> bool {
    match token.chars().next() {
        Some(first) if is_word_char(first) => !prev.is_some_and(is_word_char),
        _ => true,
    }
}

fn right_boundary_ok(token: &str, next: Option<char>) -> bool {
    match token.chars().next_back() {
        Some(last) if is_word_char(last) => !next.is_some_and(is_word_char),
        _ => true,
    }
}

#[inline]
fn starts_with_letter(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_alphabetic())
}

/// `s` ends in `\` followed by ASCII letters, so a following letter would
/// become part of the command name
fn ends_with_control_word(s: &str) -> bool {
    let word = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    word.len() < s.len() && word.ends_with('\\')
}

/// Byte length of a control sequence at the start of `s`: a backslash plus
/// either a run of ASCII letters or a single other character.
fn control_sequence_len(s: &str) -> Option<usize> {
    let after = s.strip_prefix('\\')?;
    let letters = after
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if letters > 0 {
        return Some(1 + letters);
    }
    Some(1 + after.chars().next().map_or(0, char::len_utf8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sub(input: &str) -> String {
        let table = SymbolTable::standard();
        SymbolSubstitutor::new(&table).substitute(input)
    }

    #[test]
    fn test_single_tokens() {
        assert_eq!(sub("pi"), r"\pi");
        assert_eq!(sub("alpha"), r"\alpha");
        assert_eq!(sub("inf"), r"\infty");
        assert_eq!(sub("prime"), "'");
        assert_eq!(sub("sqrt"), r"\sqrt");
    }

    #[test]
    fn test_arrows_with_and_without_spaces() {
        assert_eq!(sub("a -> b"), r"a \to b");
        assert_eq!(sub("a->b"), r"a\to b");
        assert_eq!(sub("x <- y"), r"x \leftarrow y");
    }

    #[test]
    fn test_control_word_not_extended_by_letter() {
        assert_eq!(sub("x->y<-z"), r"x\to y\leftarrow z");
        assert_eq!(sub("n->inf"), r"n\to\infty");
        assert_eq!(sub("a->2"), r"a\to2");
        assert_eq!(sub("a->(b)"), r"a\to(b)");
    }

    #[test]
    fn test_separator_only_after_control_words() {
        let table = SymbolTable::from_pairs(&[("->", "=>")]).unwrap();
        assert_eq!(SymbolSubstitutor::new(&table).substitute("a->b"), "a=>b");
    }

    #[test]
    fn test_embedded_tokens_untouched() {
        assert_eq!(sub("print"), "print");
        assert_eq!(sub("spin"), "spin");
        assert_eq!(sub("pipe"), "pipe");
        assert_eq!(sub("2pi"), "2pi");
        assert_eq!(sub("infinity"), "infinity");
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(sub("f(pi)"), r"f(\pi)");
        assert_eq!(sub("x_pi"), r"x_\pi");
        assert_eq!(sub("a+beta^2"), r"a+\beta^2");
    }

    #[test]
    fn test_existing_markup_copied() {
        assert_eq!(sub(r"\pi"), r"\pi");
        assert_eq!(sub(r"\int_0^1"), r"\int_0^1");
        assert_eq!(sub(r"\sqrt{x}"), r"\sqrt{x}");
        assert_eq!(sub(r"a \\ pi"), r"a \\ \pi");
    }

    #[test]
    fn test_longest_match_wins() {
        let table = SymbolTable::from_pairs(&[("in", "IN"), ("int", "INT")]).unwrap();
        let substitutor = SymbolSubstitutor::new(&table);
        assert_eq!(substitutor.substitute("int"), "INT");
        assert_eq!(substitutor.substitute("in int"), "IN INT");
    }

    #[test]
    fn test_output_is_not_rescanned() {
        let table = SymbolTable::from_pairs(&[("ab", "c d"), ("c", "X")]).unwrap();
        assert_eq!(SymbolSubstitutor::new(&table).substitute("ab"), "c d");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        assert_eq!(sub("α + pi"), r"α + \pi");
        assert_eq!(sub("πpi"), "πpi");
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(sub(r"pi \"), r"\pi \");
    }
}
