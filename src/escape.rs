use crate::platform::PlatformProfile;

/// Escapes a single token so that it survives re-tokenization as one word.
///
/// Tokens without spaces or tabs pass through untouched. Otherwise every
/// literal escape char is doubled first, then each space and tab gets the
/// profile's escape char in front of it.
pub fn escape_token(token: &str, profile: &PlatformProfile) -> String {
    if !token.contains([' ', '\t']) {
        return token.to_string();
    }

    let esc = profile.escape_char;
    let mut out = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        if c == esc {
            out.push(esc);
        } else if c == ' ' || c == '\t' {
            out.push(esc);
        }
        out.push(c);
    }
    out
}

/// Rebuilds a single display string from a program and its arguments.
///
/// This is the inverse of [`crate::parse`] for commands without quotes,
/// operators, or platform-special characters: re-parsing the result yields
/// the same token list.
pub fn display_string(program: &str, args: &[String], profile: &PlatformProfile) -> String {
    let mut out = escape_token(program, profile);
    for arg in args {
        out.push(' ');
        out.push_str(&escape_token(arg, profile));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::parse;

    #[test]
    fn plain_tokens_pass_through() {
        assert_eq!(escape_token("abc", &PlatformProfile::POSIX), "abc");
        // Escape chars are only doubled in tokens that need escaping.
        assert_eq!(escape_token("a\\b", &PlatformProfile::POSIX), "a\\b");
    }

    #[test]
    fn spaces_and_tabs_are_escaped() {
        assert_eq!(escape_token("a b", &PlatformProfile::POSIX), "a\\ b");
        assert_eq!(escape_token("a\tb", &PlatformProfile::POSIX), "a\\\tb");
        assert_eq!(escape_token("a b", &PlatformProfile::WINDOWS), "a^ b");
    }

    #[test]
    fn escape_chars_are_doubled_before_escaping() {
        assert_eq!(escape_token("a\\ b", &PlatformProfile::POSIX), "a\\\\\\ b");
    }

    #[test]
    fn display_string_joins_with_spaces() {
        let args = vec!["-n".to_string(), "a b".to_string()];
        assert_eq!(
            display_string("echo", &args, &PlatformProfile::POSIX),
            "echo -n a\\ b"
        );
    }

    #[test]
    fn display_string_round_trips_through_parse() {
        let profile = PlatformProfile::POSIX;
        let cases: &[(&str, &[&str])] = &[
            ("echo", &["plain", "args"]),
            ("cp", &["a file", "a\tdir/"]),
            ("prog", &["a\\ b", "sp ace"]),
        ];
        for (program, args) in cases {
            let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            let text = display_string(program, &args, &profile);
            let cmd = parse(&text, &profile).expect("round trip");
            assert_eq!(cmd.program, *program);
            assert_eq!(cmd.args, args);
            assert!(!cmd.requires_shell);
        }
    }
}
