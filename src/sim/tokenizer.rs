//! Splits a line of text into words and the spacing in front of each.
//!
//! The iterator borrows the line and holds its own cursor, so it can be
//! cloned or rebuilt to restart from the beginning.

/// A word and the number of spaces between it and the previous word
/// (or the start of the line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub gap: usize,
}

/// Lazy word iterator over a single line
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let trimmed = self.rest.trim_start_matches(' ');
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let gap = self.rest.len() - trimmed.len();
        let end = trimmed.find(' ').unwrap_or(trimmed.len());
        let (text, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(Token { text, gap })
    }
}

/// Convenience constructor mirroring `str::split_whitespace`
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens::new(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_spaced_line() {
        let toks: Vec<_> = tokens("the quick fox").collect();
        assert_eq!(
            toks,
            vec![
                Token { text: "the", gap: 0 },
                Token { text: "quick", gap: 1 },
                Token { text: "fox", gap: 1 },
            ]
        );
    }

    #[test]
    fn test_leading_and_repeated_spaces() {
        let toks: Vec<_> = tokens("  a   bc ").collect();
        assert_eq!(
            toks,
            vec![Token { text: "a", gap: 2 }, Token { text: "bc", gap: 3 }]
        );
    }

    #[test]
    fn test_empty_and_blank_lines_have_no_words() {
        assert_eq!(tokens("").count(), 0);
        assert_eq!(tokens("    ").count(), 0);
    }

    #[test]
    fn test_restartable() {
        let it = tokens("one two");
        let first: Vec<_> = it.clone().collect();
        let second: Vec<_> = it.collect();
        assert_eq!(first, second);
    }
}
