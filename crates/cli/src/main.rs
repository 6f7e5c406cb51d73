//! File-open handler entry point.
//!
//! Registered as the default program for one or more extensions. The shell
//! starts it with the path of the file being opened; it launches the
//! application configured for that extension in `Rules.txt` and hides the
//! file. Failures are shown in a dialog.

// No console window when started from Explorer.
#![cfg_attr(windows, windows_subsystem = "windows")]

mod report;

use handler::{Dispatcher, NativeHost};
use std::env;
use std::ffi::OsString;
use std::process;

/// Arguments after the program name, exactly as the OS delivered them.
///
/// Nothing is interpreted as an option: `--` or `-x` count as paths, so the
/// argument count seen by the dispatcher is the real one.
fn start_arguments<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter().skip(1).collect()
}

fn main() {
    // Initialize tracing; quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = start_arguments(env::args_os());
    tracing::debug!(count = args.len(), "start arguments");

    if let Err(e) = Dispatcher::new(NativeHost::new()).run_with_args(args) {
        report::failure(&e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handler::{DispatchError, Host, TargetInvocation};
    use std::io;
    use std::path::{Path, PathBuf};

    /// Host that fails the test if the run gets past the argument check.
    struct UntouchedHost;

    impl Host for UntouchedHost {
        fn raw_command_line(&self) -> io::Result<String> {
            panic!("command line queried");
        }

        fn executable_dir(&self) -> io::Result<PathBuf> {
            panic!("rule directory looked up");
        }

        fn spawn(&self, _target: &TargetInvocation) -> io::Result<()> {
            panic!("application spawned");
        }

        fn file_attributes(&self, _path: &Path) -> io::Result<u32> {
            panic!("attributes read");
        }

        fn set_file_attributes(&self, _path: &Path, _attributes: u32) -> io::Result<()> {
            panic!("attributes written");
        }
    }

    fn argv(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_double_dash_counts_as_argument() {
        let args = start_arguments(argv(&["hide-on-open", "--", "a.pdf"]));
        assert_eq!(args, argv(&["--", "a.pdf"]));

        let err = Dispatcher::new(UntouchedHost).run_with_args(args).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Usage {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_lone_double_dash_is_one_argument() {
        let args = start_arguments(argv(&["hide-on-open", "--"]));
        assert_eq!(args, argv(&["--"]));
    }

    #[test]
    fn test_hyphen_values_kept() {
        let args = start_arguments(argv(&["hide-on-open", "-h", "--version"]));
        assert_eq!(args, argv(&["-h", "--version"]));
    }

    #[test]
    fn test_no_arguments() {
        let err = Dispatcher::new(UntouchedHost)
            .run_with_args(start_arguments(argv(&["hide-on-open"])))
            .unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Usage {
                expected: 1,
                actual: 0
            }
        ));
    }
}
