//! # Handler
//!
//! Core of a file-open handler that forwards a file to the application
//! configured for its extension and then hides the file.
//!
//! A run goes through four steps:
//!
//! 1. Recover the raw argument text from the unsplit process command line
//!    ([`cmdline`]), so quoting and spacing reach the target untouched.
//! 2. Load `Rules.txt` from the executable's directory ([`rules`]).
//! 3. Launch the application mapped to the file's extension with that text.
//! 4. Set the hidden attribute on the file ([`cloak`]).
//!
//! Every OS interaction goes through the [`Host`] trait; [`NativeHost`] is
//! the real implementation.
//!
//! ## Example
//!
//! ```rust,no_run
//! use handler::{Dispatcher, NativeHost};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(NativeHost::new());
//! dispatcher.run_with_args(std::env::args_os().skip(1))?;
//! # Ok(())
//! # }
//! ```

pub mod cloak;
pub mod cmdline;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod native;
pub mod rules;
pub mod types;

// Re-export main types
pub use dispatch::{Dispatcher, EXPECTED_ARGS};
pub use error::DispatchError;
pub use host::Host;
pub use native::NativeHost;
pub use rules::{RuleTable, RULE_FILE};
pub use types::{RuleEntry, TargetInvocation};
