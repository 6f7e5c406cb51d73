//! The dispatch sequence: recover arguments, resolve the rule, launch, hide.

use crate::cloak::cloak;
use crate::cmdline::argument_text;
use crate::error::DispatchError;
use crate::host::Host;
use crate::rules::{extension_of, RuleTable, RULE_FILE};
use crate::types::TargetInvocation;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Number of arguments the handler accepts: the file being opened.
pub const EXPECTED_ARGS: usize = 1;

/// Orchestrates a single handler run against a [`Host`].
#[derive(Debug, Clone)]
pub struct Dispatcher<H> {
    host: H,
}

impl<H: Host> Dispatcher<H> {
    /// Create a dispatcher that performs all OS access through `host`.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Validate the argument list, then run for its single file.
    ///
    /// `args` excludes the program name. Nothing is read or started unless
    /// exactly one argument is present.
    pub fn run_with_args<I>(&self, args: I) -> Result<(), DispatchError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != EXPECTED_ARGS {
            return Err(DispatchError::Usage {
                expected: EXPECTED_ARGS,
                actual: args.len(),
            });
        }

        let file = PathBuf::from(args.remove(0));
        self.run(&file)
    }

    /// Open `file` with the application its extension is mapped to, then
    /// hide it.
    ///
    /// The file is only hidden once the application has started. If hiding
    /// fails the application keeps running.
    pub fn run(&self, file: &Path) -> Result<(), DispatchError> {
        let raw = self
            .host
            .raw_command_line()
            .map_err(|source| DispatchError::CommandLineExtraction {
                reason: "command line query failed".to_string(),
                source: Some(source),
            })?;
        let arguments = argument_text(&raw)?;
        tracing::debug!(raw = %raw, arguments = %arguments, "recovered argument text");

        let rules = self.load_rules()?;

        let extension = extension_of(file);
        let rule = rules.resolve(&extension)?;
        tracing::debug!(
            extension = %extension,
            application = %rule.application_path,
            "resolved rule"
        );

        let target = TargetInvocation {
            application_path: rule.application_path.clone(),
            argument_text: arguments.to_string(),
        };
        self.launch(&target)?;

        cloak(&self.host, file)?;
        tracing::debug!(file = %file.display(), "file hidden");
        Ok(())
    }

    /// Read and parse the rule file next to the executable.
    pub fn load_rules(&self) -> Result<RuleTable, DispatchError> {
        let dir = self
            .host
            .executable_dir()
            .map_err(|source| DispatchError::ConfigurationRead {
                path: PathBuf::from(RULE_FILE),
                source,
            })?;
        let path = dir.join(RULE_FILE);

        let text = self
            .host
            .read_rules(&path)
            .map_err(|source| DispatchError::ConfigurationRead {
                path: path.clone(),
                source,
            })?;

        let rules = RuleTable::parse(&text);
        tracing::debug!(path = %path.display(), count = rules.len(), "loaded rules");
        Ok(rules)
    }

    fn launch(&self, target: &TargetInvocation) -> Result<(), DispatchError> {
        tracing::info!(
            application = %target.application_path,
            arguments = %target.argument_text,
            "launching application"
        );
        self.host
            .spawn(target)
            .map_err(|source| DispatchError::Launch {
                application: target.application_path.clone(),
                source,
            })
    }
}
