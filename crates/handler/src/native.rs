//! The real [`Host`], backed by the operating system.
//!
//! On Windows the raw command line comes straight from `GetCommandLineW` and
//! the argument text is appended verbatim to the child's command line. Other
//! platforms have no unsplit command line, so one is synthesised from the
//! argument vector and split back when spawning.

use crate::host::Host;
use crate::types::TargetInvocation;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// [`Host`] for the current process and the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeHost;

impl NativeHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for NativeHost {
    fn raw_command_line(&self) -> io::Result<String> {
        platform::raw_command_line()
    }

    fn executable_dir(&self) -> io::Result<PathBuf> {
        let exe = env::current_exe()?;
        exe.parent().map(PathBuf::from).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable {} has no parent directory", exe.display()),
            )
        })
    }

    fn spawn(&self, target: &TargetInvocation) -> io::Result<()> {
        let mut command = Command::new(&target.application_path);
        platform::append_arguments(&mut command, &target.argument_text)?;

        // The child is left running; dropping the handle neither waits nor kills.
        let child = command.spawn()?;
        tracing::debug!(pid = child.id(), "application started");
        Ok(())
    }

    fn file_attributes(&self, path: &Path) -> io::Result<u32> {
        platform::file_attributes(path)
    }

    fn set_file_attributes(&self, path: &Path, attributes: u32) -> io::Result<()> {
        platform::set_file_attributes(path, attributes)
    }
}

#[cfg(windows)]
mod platform {
    use std::io;
    use std::os::windows::fs::MetadataExt;
    use std::os::windows::process::CommandExt;
    use std::path::Path;
    use std::process::Command;
    use windows::core::HSTRING;
    use windows::Win32::Storage::FileSystem::{SetFileAttributesW, FILE_FLAGS_AND_ATTRIBUTES};
    use windows::Win32::System::Environment::GetCommandLineW;

    pub fn raw_command_line() -> io::Result<String> {
        // SAFETY: GetCommandLineW returns a pointer into process-owned memory
        // that stays valid and NUL-terminated for the life of the process.
        let line = unsafe { GetCommandLineW() };
        if line.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "GetCommandLineW returned null",
            ));
        }
        // SAFETY: `line` was checked non-null and points at the NUL-terminated
        // command line owned by the process.
        unsafe { line.to_string() }.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn append_arguments(command: &mut Command, argument_text: &str) -> io::Result<()> {
        if !argument_text.is_empty() {
            command.raw_arg(argument_text);
        }
        Ok(())
    }

    pub fn file_attributes(path: &Path) -> io::Result<u32> {
        Ok(std::fs::metadata(path)?.file_attributes())
    }

    pub fn set_file_attributes(path: &Path, attributes: u32) -> io::Result<()> {
        let wide = HSTRING::from(path);
        // SAFETY: `wide` is a valid NUL-terminated UTF-16 string for the call.
        unsafe { SetFileAttributesW(&wide, FILE_FLAGS_AND_ATTRIBUTES(attributes)) }
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
    }
}

#[cfg(not(windows))]
mod platform {
    use std::env;
    use std::io;
    use std::path::Path;
    use std::process::Command;

    pub fn raw_command_line() -> io::Result<String> {
        let mut args = env::args_os().map(|arg| {
            arg.into_string().map_err(|arg| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("argument is not valid UTF-8: {}", arg.to_string_lossy()),
                )
            })
        });

        let program = args.next().transpose()?.unwrap_or_default();
        if program.contains('"') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("program path contains a double quote: {program}"),
            ));
        }
        let rest = args.collect::<io::Result<Vec<String>>>()?;

        Ok(format!("\"{}\" {}", program, shell_words::join(rest)))
    }

    pub fn append_arguments(command: &mut Command, argument_text: &str) -> io::Result<()> {
        let args = shell_words::split(argument_text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        command.args(args);
        Ok(())
    }

    pub fn file_attributes(_path: &Path) -> io::Result<u32> {
        Err(unsupported())
    }

    pub fn set_file_attributes(_path: &Path, _attributes: u32) -> io::Result<()> {
        Err(unsupported())
    }

    fn unsupported() -> io::Error {
        io::Error::new(
            io::ErrorKind::Unsupported,
            "file attributes are only available on Windows",
        )
    }

}
