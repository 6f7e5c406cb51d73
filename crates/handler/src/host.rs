//! OS capabilities used by the dispatcher.
//!
//! Everything that touches the running process or the filesystem goes through
//! [`Host`], so a run can be driven against a fixed command line and recorded
//! spawns in tests.

use crate::types::TargetInvocation;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Process and filesystem operations a handler run depends on.
pub trait Host {
    /// The full, unsplit command line this process was started with.
    fn raw_command_line(&self) -> io::Result<String>;

    /// Directory containing the running executable.
    fn executable_dir(&self) -> io::Result<PathBuf>;

    /// Read the rule file at `path`.
    fn read_rules(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    /// Start the target application without waiting for it.
    fn spawn(&self, target: &TargetInvocation) -> io::Result<()>;

    /// Current attribute bitset of `path`.
    fn file_attributes(&self, path: &Path) -> io::Result<u32>;

    /// Replace the attribute bitset of `path`.
    fn set_file_attributes(&self, path: &Path, attributes: u32) -> io::Result<()>;
}

impl<H: Host + ?Sized> Host for &H {
    fn raw_command_line(&self) -> io::Result<String> {
        (**self).raw_command_line()
    }

    fn executable_dir(&self) -> io::Result<PathBuf> {
        (**self).executable_dir()
    }

    fn read_rules(&self, path: &Path) -> io::Result<String> {
        (**self).read_rules(path)
    }

    fn spawn(&self, target: &TargetInvocation) -> io::Result<()> {
        (**self).spawn(target)
    }

    fn file_attributes(&self, path: &Path) -> io::Result<u32> {
        (**self).file_attributes(path)
    }

    fn set_file_attributes(&self, path: &Path, attributes: u32) -> io::Result<()> {
        (**self).set_file_attributes(path, attributes)
    }
}
