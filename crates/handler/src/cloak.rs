//! Hiding an opened file.

use crate::error::DispatchError;
use crate::host::Host;
use std::path::Path;

/// Hidden bit of the Windows file attribute set.
pub const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

/// Attribute set with the hidden bit added and every other bit kept.
pub fn with_hidden(attributes: u32) -> u32 {
    attributes | FILE_ATTRIBUTE_HIDDEN
}

/// Mark `path` hidden: read its attributes, OR in the hidden bit, write back.
pub fn cloak<H: Host>(host: &H, path: &Path) -> Result<(), DispatchError> {
    let to_error = |source| DispatchError::AttributeUpdate {
        path: path.to_path_buf(),
        source,
    };

    let current = host.file_attributes(path).map_err(to_error)?;
    let updated = with_hidden(current);
    tracing::debug!(path = %path.display(), current, updated, "setting hidden attribute");
    host.set_file_attributes(path, updated).map_err(to_error)
}
