use std::path::{Path, PathBuf};

use crate::foundation::error::{PaperError, PaperResult};
use crate::render::canvas::Canvas;

/// Destination for rendered screens.
///
/// `write_image` is called once per screen, in screen order. An error aborts the run; images
/// already written stay where they are.
pub trait ImageSink {
    /// Store `canvas` under `file_name` and return where it went.
    fn write_image(&mut self, file_name: &str, canvas: &Canvas) -> PaperResult<PathBuf>;
}

/// Writes each screen as a PNG into a directory, overwriting existing files.
#[derive(Debug, Clone)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Sink into `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ImageSink for PngDirSink {
    fn write_image(&mut self, file_name: &str, canvas: &Canvas) -> PaperResult<PathBuf> {
        if !self.dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                PaperError::encode(format!(
                    "create output dir '{}': {e}",
                    self.dir.display()
                ))
            })?;
        }
        let path = self.dir.join(file_name);
        image::save_buffer_with_format(
            &path,
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(|e| PaperError::encode(format!("write png '{}': {e}", path.display())))?;
        Ok(path)
    }
}

/// Keeps rendered canvases in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    images: Vec<(String, Canvas)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured `(file_name, canvas)` pairs in write order.
    pub fn images(&self) -> &[(String, Canvas)] {
        &self.images
    }

    /// Canvas captured under `file_name`.
    pub fn get(&self, file_name: &str) -> Option<&Canvas> {
        self.images
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, c)| c)
    }
}

impl ImageSink for InMemorySink {
    fn write_image(&mut self, file_name: &str, canvas: &Canvas) -> PaperResult<PathBuf> {
        self.images.push((file_name.to_string(), canvas.clone()));
        Ok(PathBuf::from(file_name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
