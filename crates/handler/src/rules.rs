//! Extension to application rules.
//!
//! Rules come from a plain text file with one rule per line:
//!
//! ```text
//! .pdf C:\Program Files\Viewer\view.exe
//! .TXT C:\Windows\notepad.exe
//! ```
//!
//! The extension is the first token and keeps its leading dot. Everything
//! after the first whitespace run is the application path, unquoted.

use crate::error::DispatchError;
use crate::types::RuleEntry;
use std::collections::HashMap;
use std::path::Path;

/// Name of the rule file looked up next to the running executable.
pub const RULE_FILE: &str = "Rules.txt";

/// Extension to application mapping for a single run.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    /// Keyed by lower-cased extension
    rules: HashMap<String, RuleEntry>,
}

impl RuleTable {
    /// Build a table from rule file lines.
    ///
    /// Blank lines are skipped. A line without whitespace maps its extension
    /// to an empty application path instead of being rejected. When the same
    /// extension appears more than once, the last line wins.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut rules = HashMap::new();
        for line in lines {
            let Some(entry) = parse_rule(line) else {
                continue;
            };
            rules.insert(entry.extension.to_lowercase(), entry);
        }
        Self { rules }
    }

    /// Build a table from the full text of a rule file.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Look up the rule for an extension, ignoring case.
    pub fn resolve(&self, extension: &str) -> Result<&RuleEntry, DispatchError> {
        self.rules
            .get(&extension.to_lowercase())
            .ok_or_else(|| DispatchError::UnresolvedExtension(extension.to_string()))
    }

    /// Number of distinct extensions.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule was loaded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Split one rule line into extension and application path.
///
/// Leading and trailing whitespace on the line is ignored, so an indented
/// rule keeps its extension. Returns `None` for blank lines.
pub fn parse_rule(line: &str) -> Option<RuleEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (extension, application_path) = match line.find(char::is_whitespace) {
        Some(split) => (&line[..split], line[split..].trim_start()),
        None => (line, ""),
    };

    Some(RuleEntry {
        extension: extension.to_string(),
        application_path: application_path.to_string(),
    })
}

/// Extension of the final component of `path`, leading dot included.
///
/// Both `/` and `\` separate components regardless of platform, so Windows
/// paths behave the same everywhere. A name without a dot, or ending in one,
/// has an empty extension. A dot-file such as `.bashrc` is all extension.
///
/// # Examples
///
/// ```
/// use handler::rules::extension_of;
/// use std::path::Path;
///
/// assert_eq!(extension_of(Path::new(r"C:\files\report.PDF")), ".PDF");
/// assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
/// assert_eq!(extension_of(Path::new("README")), "");
/// ```
pub fn extension_of(path: &Path) -> String {
    let text = path.to_string_lossy();
    let name = match text.rfind(&['/', '\\', ':'][..]) {
        Some(sep) => &text[sep + 1..],
        None => &text[..],
    };

    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => name[dot..].to_string(),
        _ => String::new(),
    }
}
