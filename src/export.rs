//! Saving the canvas as a PNG file.

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::draw::CanvasError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode canvas: {0}")]
    Encode(#[from] CanvasError),

    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Where exported images go and how they are named.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// Directory to save images to.
    pub directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Sketchpad"),
            filename_template: "paint".to_string(),
        }
    }
}

/// Generates a `.png` filename from the template and the current time.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Saves PNG bytes into the configured directory under a generated name.
pub fn save_png(image_data: &[u8], config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&config.directory)?;
    let path = directory.join(generate_filename(&config.filename_template));
    write_png(image_data, &path)?;
    Ok(path)
}

/// Writes PNG bytes to an explicit path, creating parent directories.
pub fn write_png(image_data: &[u8], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving canvas to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(path, image_data)?;

    // Set permissions to user read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    log::debug!("File written: {} bytes", fs::metadata(path)?.len());
    Ok(())
}
