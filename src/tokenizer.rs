use thiserror::Error;

use crate::platform::PlatformProfile;

/// Characters that delimit tokens and become operator tokens themselves.
/// Identical adjacent characters glue into one token (`||`, `>>`).
const OPERATOR_CHARS: [char; 8] = ['&', '>', '<', '|', '[', ']', '(', ')'];

/// Which quote character was left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
    Single,
    Double,
}

impl QuoteKind {
    fn of(c: char) -> QuoteKind {
        if c == '\'' {
            QuoteKind::Single
        } else {
            QuoteKind::Double
        }
    }
}

impl std::fmt::Display for QuoteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteKind::Single => write!(f, "single"),
            QuoteKind::Double => write!(f, "double"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A quote was opened and never closed. `position` is the byte offset
    /// of the opening quote in the original input.
    #[error("unmatched {kind} quote at byte {position}")]
    UnmatchedQuote { kind: QuoteKind, position: usize },
}

/// A command line split into a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token of the input; empty when the input had no tokens.
    pub program: String,
    /// Remaining tokens, in order.
    pub args: Vec<String>,
    /// True when the command uses shell syntax and cannot be run as a
    /// direct process invocation.
    pub requires_shell: bool,
    /// The input text, untouched, for handing to a shell verbatim.
    pub raw: String,
}

impl ParsedCommand {
    /// True when the input contained no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.program.is_empty() && self.args.is_empty()
    }
}

/// Splits a command-line string into a program plus arguments and decides
/// whether it needs a shell to run.
///
/// The scan handles:
/// - Single quotes (`'...'`): contents are literal, including escape chars.
/// - Double quotes (`"..."`): contents are literal except the escape char.
/// - Escapes: the profile's escape char makes the next char literal; an
///   escaped newline is a line continuation.
/// - Comments: the profile's comment char discards the rest of the line,
///   but only at a token boundary.
/// - Operators (`& > < | [ ] ( )`): end the current token and become their
///   own token; identical runs glue together (`||`, `>>`).
///
/// The only error is an unmatched quote, reported at the opening quote.
///
/// # Example
/// ```
/// use cmdsplit::{parse, PlatformProfile};
///
/// let cmd = parse("echo 'hello world'", &PlatformProfile::POSIX).unwrap();
/// assert_eq!(cmd.program, "echo");
/// assert_eq!(cmd.args, vec!["hello world"]);
/// assert!(!cmd.requires_shell);
/// ```
pub fn parse(text: &str, profile: &PlatformProfile) -> Result<ParsedCommand, ParseError> {
    // Leading whitespace is insignificant; trailing whitespace is not
    // stripped, since a trailing escaped space belongs to its token.
    let offset = text.len() - text.trim_start().len();

    let mut scanner = Scanner::new(profile);
    for (i, c) in text[offset..].char_indices() {
        scanner.step(offset + i, c);
    }
    let (mut tokens, requires_shell) = scanner.finish()?;

    let program = if tokens.is_empty() {
        String::new()
    } else {
        tokens.remove(0)
    };
    Ok(ParsedCommand {
        program,
        args: tokens,
        requires_shell,
        raw: text.to_string(),
    })
}

/// An open quoted region.
#[derive(Clone, Copy)]
struct OpenQuote {
    kind: QuoteKind,
    /// Opened mid-token (`--opt="v"`), so the quote chars stay in the token.
    inner: bool,
    /// Byte offset of the opening quote, for error reporting.
    position: usize,
}

/// Per-call scan state. Each character goes through one `step`, down a
/// fixed priority chain: escape, quote body, comment, quote delimiter,
/// operator, whitespace, force-shell char, literal. Escapes and quotes must
/// outrank the rest, since they suppress every other syntactic role.
struct Scanner<'p> {
    profile: &'p PlatformProfile,
    tokens: Vec<String>,
    buf: String,
    /// A token has started at the current position, even if `buf` is empty
    /// (an empty quoted string is still a token).
    has_token: bool,
    escaped: bool,
    quote: Option<OpenQuote>,
    /// Operator char currently being glued into a run, if any.
    op_run: Option<char>,
    in_comment: bool,
    requires_shell: bool,
    prev: Option<char>,
}

impl<'p> Scanner<'p> {
    fn new(profile: &'p PlatformProfile) -> Scanner<'p> {
        Scanner {
            profile,
            tokens: Vec::new(),
            buf: String::new(),
            has_token: false,
            escaped: false,
            quote: None,
            op_run: None,
            in_comment: false,
            requires_shell: false,
            prev: None,
        }
    }

    fn flush_token(&mut self) {
        if self.has_token {
            self.tokens.push(std::mem::take(&mut self.buf));
            self.has_token = false;
        }
    }

    fn flush_op_run(&mut self) {
        self.tokens.push(std::mem::take(&mut self.buf));
        self.op_run = None;
    }

    fn step(&mut self, position: usize, c: char) {
        let prev = self.prev;
        self.prev = Some(c);

        if let Some(op) = self.op_run {
            if c == op {
                self.buf.push(c);
                return;
            }
            self.flush_op_run();
        }

        if self.in_comment {
            if c != '\n' {
                return;
            }
            // The newline itself is not part of the comment.
            self.in_comment = false;
        }

        if self.escaped {
            self.escaped = false;
            if c != '\n' {
                self.buf.push(c);
                self.has_token = true;
            }
            // An escaped newline is a line continuation: both vanish.
            return;
        }

        if c == self.profile.escape_char
            && self.quote.map(|q| q.kind) != Some(QuoteKind::Single)
        {
            self.escaped = true;
            return;
        }

        if let Some(open) = self.quote {
            if c != '\'' && c != '"' {
                self.buf.push(c);
                return;
            }
            if QuoteKind::of(c) == open.kind {
                if open.inner {
                    self.buf.push(c);
                }
                self.quote = None;
            } else {
                // The opposite quote kind is just a character in here.
                self.buf.push(c);
            }
            return;
        }

        if self.profile.comment_char == Some(c) {
            if self.has_token {
                // A comment must begin a word, not interrupt one.
                self.buf.push(c);
            } else {
                self.in_comment = true;
            }
            return;
        }

        if c == '\'' || c == '"' {
            let inner = self.has_token;
            if inner {
                self.buf.push(c);
            }
            self.quote = Some(OpenQuote {
                kind: QuoteKind::of(c),
                inner,
                position,
            });
            self.has_token = true;
            return;
        }

        if OPERATOR_CHARS.contains(&c) {
            // `$(...)` and `@(...)` are call/expansion syntax, not grouping.
            if (c == '(' || c == ')') && matches!(prev, Some('@') | Some('$')) {
                self.buf.push(c);
                self.has_token = true;
                return;
            }
            self.flush_token();
            self.requires_shell = true;
            self.buf.push(c);
            self.op_run = Some(c);
            return;
        }

        if c == ' ' || c == '\t' || c == '\n' {
            if self.has_token {
                self.flush_token();
            } else if c == '\n' {
                // A newline between commands implies multi-statement syntax.
                self.requires_shell = true;
            }
            return;
        }

        if self.profile.force_shell_chars.contains(&c) {
            self.requires_shell = true;
        }
        self.buf.push(c);
        self.has_token = true;
    }

    fn finish(mut self) -> Result<(Vec<String>, bool), ParseError> {
        if self.op_run.is_some() {
            self.flush_op_run();
        }
        if let Some(open) = self.quote {
            return Err(ParseError::UnmatchedQuote {
                kind: open.kind,
                position: open.position,
            });
        }
        // A dangling escape char at end of input is dropped, not an error.
        self.flush_token();

        // An empty command never needs a shell.
        let requires_shell = !self.tokens.is_empty() && self.requires_shell;
        Ok((self.tokens, requires_shell))
    }
}
