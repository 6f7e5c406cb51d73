//! Recovery of the raw argument text from the full process command line.
//!
//! The OS hands a process its arguments already split, which loses the
//! original quoting and spacing. The unsplit command line still has them, so
//! the argument text is cut out of it directly: the leading executable token
//! is dropped and everything after it is kept verbatim.

use crate::error::DispatchError;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMAND_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^
        (?P<exe>
            "[^"]+"     # quoted path, no embedded quote
            |
            \S+         # bare token
        )
        \s*
        (?P<args>.*)    # stops at a line break
        \n?
        $
        "#,
    )
    .expect("command line pattern is valid")
});

/// Split a raw command line into its executable token and argument text.
///
/// The executable token is either a double-quoted run (quotes included) or a
/// run of non-whitespace characters, whichever matches first. Whitespace
/// between the token and the arguments is discarded; the arguments are
/// returned untouched.
///
/// # Examples
///
/// ```
/// use handler::cmdline::split_command_line;
///
/// let (exe, args) = split_command_line(r#""C:\Program Files\hoo.exe"  "a b"  c"#).unwrap();
/// assert_eq!(exe, r#""C:\Program Files\hoo.exe""#);
/// assert_eq!(args, r#""a b"  c"#);
/// ```
pub fn split_command_line(raw: &str) -> Result<(&str, &str), DispatchError> {
    let captures = COMMAND_LINE
        .captures(raw)
        .ok_or_else(|| DispatchError::extraction("command line has no executable token"))?;

    // Both groups are mandatory in the pattern.
    let exe = captures.name("exe").map_or("", |m| m.as_str());
    let args = captures.name("args").map_or("", |m| m.as_str());
    Ok((exe, args))
}

/// Return only the argument text of a raw command line.
///
/// Yields an empty string when nothing follows the executable token.
pub fn argument_text(raw: &str) -> Result<&str, DispatchError> {
    split_command_line(raw).map(|(_, args)| args)
}
