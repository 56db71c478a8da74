//! Whitespace tokenizer with byte offsets.
//!
//! Scans the source in place (no copies, no mutation) and yields each
//! token together with its byte offset, so parse errors can point at
//! the exact spot in the input.

/// One whitespace-delimited token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token start within the source.
    pub offset: usize,
}

/// Iterator over whitespace-separated tokens.
///
/// Delimiters are space, tab, CR and LF, matching what the exporters
/// emit. Multibyte UTF-8 never matches the ASCII delimiter set, so
/// slice boundaries always land on char boundaries.
#[derive(Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }
}

fn is_delim(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();
        while self.pos < bytes.len() && is_delim(bytes[self.pos]) {
            self.pos += 1;
        }
        if self.pos >= bytes.len() {
            return None;
        }
        let start = self.pos;
        while self.pos < bytes.len() && !is_delim(bytes[self.pos]) {
            self.pos += 1;
        }
        Some(Token {
            text: &self.src[start..self.pos],
            offset: start,
        })
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens: Vec<_> = Tokens::new("? 2.0 name").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["?", "2.0", "name"]);
    }

    #[test]
    fn test_offsets() {
        let mut tokens = Tokens::new("ab  cd\nef");
        assert_eq!(tokens.next(), Some(Token { text: "ab", offset: 0 }));
        assert_eq!(tokens.next(), Some(Token { text: "cd", offset: 4 }));
        assert_eq!(tokens.next(), Some(Token { text: "ef", offset: 7 }));
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn test_crlf_and_tabs() {
        let tokens: Vec<_> = Tokens::new("1.0\r\n\t2.0\r\n").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["1.0", "2.0"]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(Tokens::new("").count(), 0);
        assert_eq!(Tokens::new("  \n\n \t ").count(), 0);
    }

    #[test]
    fn test_no_trailing_newline() {
        let tokens: Vec<_> = Tokens::new("0.5").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["0.5"]);
    }
}
