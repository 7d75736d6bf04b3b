use std::fs;
use std::path::{Path, PathBuf};

use crate::background::PixelPredicate;
use crate::error::Error;
use crate::grid::reader::{GridReader, ImageGridReader};
use crate::grid::writer::PngGridWriter;
use crate::grid::PixelGrid;
use crate::logger::log_processed_image;
use crate::{flood_fill, transparency};

#[derive(Debug, PartialEq, Eq)]
pub struct ProcessedImage {
    pub path: PathBuf,
    pub cleared: usize,
}

/// Outcome of a directory run. Every entry is listed in exactly one of the
/// three collections, in file name order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<ProcessedImage>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn cleared_total(&self) -> usize {
        self.processed.iter().map(|image| image.cleared).sum()
    }
}

pub fn is_png_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("png"))
}

/// Flood fills the background of a decoded grid and clears it in place.
pub fn remove_background<P: PixelPredicate>(grid: &mut PixelGrid, predicate: &P) -> usize {
    let reachable = flood_fill::compute_reachable(grid, predicate);
    transparency::apply_transparency(grid, &reachable)
}

pub fn remove_background_from_file<P: PixelPredicate>(
    path: &Path,
    predicate: &P,
) -> crate::Result<usize> {
    let mut grid = ImageGridReader::open(path)?.read_grid()?;
    let cleared = remove_background(&mut grid, predicate);
    if cleared == 0 {
        log::warn!(
            "No corner of {} matched the background, image left opaque",
            path.display()
        );
    }
    PngGridWriter::new(path).write_grid(&grid)?;
    log_processed_image(path, grid.width(), grid.height(), cleared);
    Ok(cleared)
}

fn list_directory(directory: &Path) -> crate::Result<Vec<PathBuf>> {
    let directory_name = || directory.display().to_string();
    let entries =
        fs::read_dir(directory).map_err(|e| Error::UnableToReadDirectory(directory_name(), e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::UnableToReadDirectory(directory_name(), e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

/// Processes every PNG directly inside `directory`. Failing images are
/// recorded and do not stop the run; only a missing directory is fatal.
pub fn remove_background_in_directory<P: PixelPredicate>(
    directory: &Path,
    predicate: &P,
) -> crate::Result<BatchReport> {
    if !directory.is_dir() {
        return Err(Error::DirectoryNotFound(directory.display().to_string()));
    }
    let mut report = BatchReport::default();
    for path in list_directory(directory)? {
        if !path.is_file() || !is_png_file(&path) {
            log::debug!("Skipping {}", path.display());
            report.skipped.push(path);
            continue;
        }
        match remove_background_from_file(&path, predicate) {
            Ok(cleared) => report.processed.push(ProcessedImage { path, cleared }),
            Err(e) => {
                log::error!("Error processing {}: {}", path.display(), e);
                report.failed.push((path, e));
            }
        }
    }
    log::info!(
        "Processed {} image(s), skipped {}, failed {}",
        report.processed.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}
