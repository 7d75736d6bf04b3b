use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, RgbaImage};

use super::PixelGrid;
use crate::error::Error;

/// Replaces a PNG file with an encoded grid.
///
/// The grid is encoded into a sibling temporary file first, which is renamed
/// over the target only once encoding succeeded.
pub struct PngGridWriter<'a> {
    target: &'a Path,
}

impl<'a> PngGridWriter<'a> {
    pub fn new(target: &'a Path) -> Self {
        PngGridWriter { target }
    }

    pub fn write_grid(&self, grid: &PixelGrid) -> crate::Result<()> {
        let temporary = temporary_path(self.target);
        let result = self.write_temporary(grid, &temporary).and_then(|_| {
            fs::rename(&temporary, self.target)
                .map_err(|e| Error::UnableToReplaceFile(self.target_name(), e))
        });
        if result.is_err() {
            let _ = fs::remove_file(&temporary);
        }
        result
    }

    fn write_temporary(&self, grid: &PixelGrid, temporary: &Path) -> crate::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temporary)
            .map_err(|e| {
                Error::UnableToOpenOutputFileForWriting(temporary.display().to_string(), e)
            })?;
        let mut writer = BufWriter::new(file);
        encode_png(grid, &mut writer, &self.target_name())?;
        writer
            .flush()
            .map_err(|e| Error::UnableToEncodeImage(self.target_name(), ImageError::IoError(e)))
    }

    fn target_name(&self) -> String {
        self.target.display().to_string()
    }
}

pub fn encode_png<W: Write + Seek>(
    grid: &PixelGrid,
    writer: &mut W,
    target_name: &str,
) -> crate::Result<()> {
    RgbaImage::from(grid)
        .write_to(writer, ImageFormat::Png)
        .map_err(|e| Error::UnableToEncodeImage(target_name.to_owned(), e))
}

fn temporary_path(target: &Path) -> PathBuf {
    let mut file_name = OsString::from(".");
    file_name.push(target.file_name().unwrap_or_default());
    file_name.push(".tmp");
    target.with_file_name(file_name)
}
