//! CLI command implementations.

pub(crate) mod outline;
pub(crate) mod render;

pub(crate) use outline::OutlineArgs;
pub(crate) use render::RenderArgs;

use std::path::Path;

use crate::error::CliError;

/// Read an HTML page, decoding invalid UTF-8 lossily.
pub(crate) fn read_page(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::Validation(format!(
            "Input page not found: {}",
            path.display()
        )));
    }
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
