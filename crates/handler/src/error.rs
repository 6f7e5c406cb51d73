//! Error types for file-open dispatch.

use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a handler run can fail.
///
/// Each variant is terminal for the run: nothing is retried and nothing is
/// rolled back. In particular an [`DispatchError::AttributeUpdate`] means the
/// target application has already been started.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The handler was started with the wrong number of arguments.
    #[error("An unexpected number of start arguments were supplied. Expected: {expected}, Actual: {actual}")]
    Usage {
        /// Number of arguments the handler accepts
        expected: usize,
        /// Number of arguments actually supplied
        actual: usize,
    },

    /// The raw invocation string could not be queried or split.
    #[error("Failed to extract command line: {reason}")]
    CommandLineExtraction {
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    /// The rule file is missing or unreadable.
    #[error("Failed to read rules from {}", path.display())]
    ConfigurationRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No rule maps the file's extension to an application.
    #[error("Missing extension: {0}")]
    UnresolvedExtension(String),

    /// The target application could not be started.
    #[error("Failed to launch {application}")]
    Launch {
        application: String,
        #[source]
        source: io::Error,
    },

    /// The hidden attribute could not be applied after a successful launch.
    #[error("Failed to hide {}", path.display())]
    AttributeUpdate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DispatchError {
    /// Stable category name shown to the user alongside the message.
    pub fn category(&self) -> &'static str {
        match self {
            DispatchError::Usage { .. } => "UsageError",
            DispatchError::CommandLineExtraction { .. } => "CommandLineExtractionError",
            DispatchError::ConfigurationRead { .. } => "ConfigurationReadError",
            DispatchError::UnresolvedExtension(_) => "UnresolvedExtensionError",
            DispatchError::Launch { .. } => "LaunchError",
            DispatchError::AttributeUpdate { .. } => "AttributeUpdateError",
        }
    }

    /// The chain of underlying causes, one per line, outermost first.
    ///
    /// Empty when the error has no source.
    pub fn trace(&self) -> String {
        let mut lines = Vec::new();
        let mut cause = self.source();
        while let Some(err) = cause {
            lines.push(format!("Caused by: {}", err));
            cause = err.source();
        }
        lines.join("\r\n")
    }

    /// Full text for the failure dialog: category, message and trace.
    pub fn report_text(&self) -> String {
        let trace = self.trace();
        if trace.is_empty() {
            format!("{}: {}", self.category(), self)
        } else {
            format!("{}: {}\r\n\r\n{}", self.category(), self, trace)
        }
    }

    pub(crate) fn extraction(reason: impl Into<String>) -> Self {
        DispatchError::CommandLineExtraction {
            reason: reason.into(),
            source: None,
        }
    }
}
