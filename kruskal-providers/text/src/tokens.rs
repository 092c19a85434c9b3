use std::io::{self, BufRead};
use std::str::FromStr;

use crate::errors::{Field, TextProviderError};

/// A whitespace-delimited token and the one-based line it came from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    text: String,
    line: usize,
}

impl Token {
    /// Returns the raw token text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the one-based line number the token was read from.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Parses the token as the value expected for `field`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::InvalidNumber`] when the text does not
    /// parse as `T`.
    pub fn parse<T: FromStr>(self, field: Field) -> Result<T, TextProviderError> {
        self.text
            .parse()
            .map_err(|_| TextProviderError::InvalidNumber {
                field,
                token: self.text,
                line: self.line,
            })
    }
}

/// Splits a buffered reader into whitespace-delimited tokens.
///
/// Line breaks carry no meaning beyond line numbering for diagnostics. The
/// reader holds one line at a time.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use kruskal_providers_text::TokenReader;
///
/// let mut tokens = TokenReader::new(Cursor::new("4 2\n 1  2 7\n"));
/// let texts: Vec<String> = std::iter::from_fn(|| tokens.next_token().transpose())
///     .map(|token| token.map(|t| t.text().to_owned()))
///     .collect::<Result<_, _>>()?;
/// assert_eq!(texts, ["4", "2", "1", "2", "7"]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    buffer: String,
    cursor: usize,
    line: usize,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            cursor: 0,
            line: 0,
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    ///
    /// # Errors
    /// Propagates read failures, including invalid UTF-8.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            let rest = &self.buffer[self.cursor..];
            if let Some(start) = rest.find(|c: char| !c.is_whitespace()) {
                let tail = &rest[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                let text = tail[..len].to_owned();
                self.cursor += start + len;
                return Ok(Some(Token {
                    text,
                    line: self.line,
                }));
            }

            self.buffer.clear();
            self.cursor = 0;
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
        }
    }

    /// Reads and parses the next token as the value for `field`.
    ///
    /// # Errors
    /// Returns [`TextProviderError::UnexpectedEof`] when no token remains,
    /// [`TextProviderError::InvalidNumber`] when it does not parse, and
    /// [`TextProviderError::Io`] on read failure.
    pub fn next_value<T: FromStr>(&mut self, field: Field) -> Result<T, TextProviderError> {
        self.next_token()?
            .ok_or(TextProviderError::UnexpectedEof { expected: field })?
            .parse(field)
    }

    /// Returns the number of lines consumed so far.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.line
    }
}
