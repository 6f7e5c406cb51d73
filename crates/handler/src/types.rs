//! Type definitions shared across the dispatch pipeline.

/// One line of the rule file: an extension and the application that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Extension as written in the rule file, leading dot included (e.g. ".pdf")
    pub extension: String,

    /// Full path of the application, unquoted; may contain spaces
    pub application_path: String,
}

/// A fully formed spawn request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInvocation {
    /// Application to start
    pub application_path: String,

    /// Raw argument text handed to the application exactly as received
    pub argument_text: String,
}
