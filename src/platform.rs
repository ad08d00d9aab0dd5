/// Platform-variant constants consumed by the tokenizer.
///
/// The scanner itself is platform-agnostic; everything that differs between
/// a POSIX shell and the Windows command interpreter is carried here as
/// data, so tests can inject synthetic profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Character that escapes the next character (`\` or `^`).
    pub escape_char: char,
    /// Character that starts a comment at a token boundary, if the
    /// platform has one (`cmd.exe` does not).
    pub comment_char: Option<char>,
    /// Characters that force shell execution but are otherwise literal.
    pub force_shell_chars: &'static [char],
    /// Whether this profile follows POSIX conventions.
    pub posix_like: bool,
}

impl PlatformProfile {
    /// Bourne-style shells: `sh`, `bash`, `zsh`, ...
    pub const POSIX: PlatformProfile = PlatformProfile {
        escape_char: '\\',
        comment_char: Some('#'),
        force_shell_chars: &['!', '`', '$', '{', '}', ';'],
        posix_like: true,
    };

    /// The Windows command interpreter (`cmd.exe`).
    pub const WINDOWS: PlatformProfile = PlatformProfile {
        escape_char: '^',
        comment_char: None,
        force_shell_chars: &['!', '%', '+'],
        posix_like: false,
    };

    /// Picks the profile for a host, given whether it is non-POSIX.
    pub fn select(non_posix_host: bool) -> PlatformProfile {
        if non_posix_host {
            PlatformProfile::WINDOWS
        } else {
            PlatformProfile::POSIX
        }
    }

    /// The profile matching the compile-time target.
    pub fn native() -> PlatformProfile {
        PlatformProfile::select(cfg!(windows))
    }
}

#[cfg(test)]
mod tests {
    use super::PlatformProfile;

    #[test]
    fn select_is_driven_by_the_host_flag() {
        assert_eq!(PlatformProfile::select(false), PlatformProfile::POSIX);
        assert_eq!(PlatformProfile::select(true), PlatformProfile::WINDOWS);
    }

    #[test]
    fn windows_profile_has_no_comment_char() {
        assert_eq!(PlatformProfile::WINDOWS.comment_char, None);
        assert_eq!(PlatformProfile::POSIX.comment_char, Some('#'));
    }
}
