//! Tokenization: splitting a statement into word, number and punctuation
//! tokens.
//!
//! Whitespace separates chunks. Leading and trailing punctuation is peeled
//! off each chunk into its own token, while interior punctuation stays put,
//! so `alice/myrepo`, `3.5` and `https://example.com/x` survive as single
//! tokens. A trailing clitic such as `'d` or `'s` becomes its own word.

/// A single token extracted from a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's text value, lowercased for lookup.
    pub value: String,
    /// The text exactly as it appeared in the statement.
    pub original: String,
    /// Zero-based position in the token sequence.
    pub position: usize,
    /// What kind of token this is.
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Anything containing a letter, including mixed forms like `x10y`.
    Word,
    /// Digits with optional interior `.` or `,` separators.
    Number,
    /// A single punctuation character.
    Punctuation,
}

const CLITICS: [&str; 6] = ["'d", "'s", "'m", "'ll", "'re", "'ve"];

/// Tokenize a statement into a sequence of tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut pieces: Vec<(String, TokenKind)> = Vec::new();

    for chunk in text.split_whitespace() {
        let mut body = chunk;
        let mut trailing = Vec::new();

        while let Some(first) = body.chars().next() {
            if !is_punctuation(first) {
                break;
            }
            pieces.push((first.to_string(), TokenKind::Punctuation));
            body = &body[first.len_utf8()..];
        }

        while let Some(last) = body.chars().next_back() {
            if !is_punctuation(last) {
                break;
            }
            trailing.push(last.to_string());
            body = &body[..body.len() - last.len_utf8()];
        }

        if !body.is_empty() {
            let lower = body.to_lowercase();
            let clitic = CLITICS
                .iter()
                .find(|clitic| lower.len() > clitic.len() && lower.ends_with(*clitic));

            match clitic {
                Some(clitic) => {
                    let split = body.len() - clitic.len();
                    pieces.push((body[..split].to_string(), classify(&body[..split])));
                    pieces.push((body[split..].to_string(), TokenKind::Word));
                }
                None => pieces.push((body.to_string(), classify(body))),
            }
        }

        pieces.extend(
            trailing
                .into_iter()
                .rev()
                .map(|mark| (mark, TokenKind::Punctuation)),
        );
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(position, (original, kind))| Token {
            value: original.to_lowercase(),
            original,
            position,
            kind,
        })
        .collect()
}

/// Find `needle` in `haystack` where neither neighbour is alphanumeric.
///
/// Returns the byte offset of the first such occurrence.
pub fn find_bounded(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();

        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        let bounded = |c: Option<char>| c.is_none_or(|c| !c.is_alphanumeric());

        if bounded(before) && bounded(after) {
            return Some(start);
        }

        from = start + needle.chars().next().map_or(1, char::len_utf8);
    }

    None
}

fn classify(body: &str) -> TokenKind {
    let mut digits = 0;
    for c in body.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c != '.' && c != ',' {
            return TokenKind::Word;
        }
    }

    let edges_are_digits = body.starts_with(|c: char| c.is_ascii_digit())
        && body.ends_with(|c: char| c.is_ascii_digit());

    if digits > 0 && edges_are_digits {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}
