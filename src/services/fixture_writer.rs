use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use crate::errors::FixtureError;

/// Writes rendered fixtures below a base output directory
#[derive(Clone, Debug)]
pub struct FixtureWriter {
    base_dir: PathBuf,
}

impl FixtureWriter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn target_path(&self, relative_path: &Path) -> PathBuf {
        self.base_dir.join(relative_path)
    }

    /// Encode a raster as PNG in memory. `path` is only used for error context.
    pub fn encode_png(raster: &RgbImage, path: &Path) -> Result<Vec<u8>, FixtureError> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        raster
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|source| FixtureError::ImageEncodeFailure {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(buffer)
    }

    /// Write `raster` as a PNG at `relative_path` below the base directory,
    /// creating parent directories and overwriting any existing file.
    pub async fn write_png(&self, raster: &RgbImage, relative_path: &Path) -> Result<PathBuf, FixtureError> {
        let target = self.target_path(relative_path);

        if let Some(parent) = target.parent() {
            if let Err(source) = fs::create_dir_all(parent).await {
                error!("Failed to create directory {:?}: {}", parent, source);
                return Err(FixtureError::DirectoryCreationFailure {
                    path: parent.to_path_buf(),
                    source,
                });
            }
        }

        let data = Self::encode_png(raster, &target)?;
        if let Err(source) = fs::write(&target, &data).await {
            error!("Failed to write fixture {:?}: {}", target, source);
            return Err(FixtureError::ImageWriteFailure { path: target, source });
        }

        debug!("Wrote {} bytes to {:?}", data.len(), target);
        Ok(target)
    }
}
