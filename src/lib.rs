//! Command-line tokenization with shell detection.
//!
//! [`parse`] splits a raw command string into a program plus arguments and
//! decides whether the command needs a shell (operators, multi-statement
//! newlines, platform-special characters) or can be spawned directly. The
//! same scanner serves POSIX shells and `cmd.exe`; everything that differs
//! between them is injected as a [`PlatformProfile`].
//!
//! Around the tokenizer sit three thin collaborators: [`escape`] rebuilds a
//! display string from tokens, [`exec`] runs a parsed command, and
//! [`which`] resolves bare program names against `PATH`.

pub mod escape;
pub mod exec;
pub mod platform;
pub mod tokenizer;
pub mod which;

pub use platform::PlatformProfile;
pub use tokenizer::{parse, ParseError, ParsedCommand, QuoteKind};
