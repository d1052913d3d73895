//! Directory conversion with sequential numbering.
//!
//! Every directory gets a four-digit sequence number and every image inside
//! it a four-digit file number, so a tree of photos flattens into
//! `0001_0001.bmp`, `0001_0002.bmp`, `0002_0001.bmp`, ... in one output
//! directory. Subdirectories are visited before the files of their parent,
//! which means the deepest directories receive the lowest numbers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use epaper_dither::ConversionConfig;

use super::converter::convert_file;
use crate::error::ConvertError;

/// File extensions picked up in batch mode (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Whether `path` has an extension the batch converter picks up
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

pub struct BatchConverter {
    config: ConversionConfig,
    max_depth: usize,
    dir_numbers: HashMap<PathBuf, usize>,
    next_dir_number: usize,
}

impl BatchConverter {
    pub fn new(config: ConversionConfig, max_depth: usize) -> Self {
        Self {
            config,
            max_depth,
            dir_numbers: HashMap::new(),
            next_dir_number: 1,
        }
    }

    /// Convert every supported image below `input_dir` into `output_dir`.
    ///
    /// Per-file failures are logged and counted. Failing to read a
    /// directory aborts the run.
    pub fn run(
        &mut self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<BatchSummary, ConvertError> {
        if !input_dir.exists() {
            return Err(ConvertError::NotFound(input_dir.to_path_buf()));
        }
        if !input_dir.is_dir() {
            return Err(ConvertError::NotADirectory(input_dir.to_path_buf()));
        }
        fs::create_dir_all(output_dir).map_err(|source| ConvertError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        tracing::info!(
            input = %input_dir.display(),
            output = %output_dir.display(),
            max_depth = self.max_depth,
            "Starting batch conversion"
        );

        let mut summary = BatchSummary::default();
        self.process_directory(input_dir, output_dir, 0, &mut summary)?;
        Ok(summary)
    }

    fn process_directory(
        &mut self,
        dir: &Path,
        output_dir: &Path,
        depth: usize,
        summary: &mut BatchSummary,
    ) -> Result<(), ConvertError> {
        if depth > self.max_depth {
            tracing::debug!(dir = %dir.display(), depth, "Maximum depth reached, skipping");
            return Ok(());
        }

        let mut subdirs = Vec::new();
        let mut images = Vec::new();
        let read_error = |source| ConvertError::Read {
            path: dir.to_path_buf(),
            source,
        };
        for entry in fs::read_dir(dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            let path = entry.path();
            if entry.file_type().map_err(read_error)?.is_dir() {
                subdirs.push(path);
            } else if is_supported_image(&path) {
                images.push(path);
            }
        }
        subdirs.sort();
        images.sort();

        for subdir in &subdirs {
            self.process_directory(subdir, output_dir, depth + 1, summary)?;
        }

        let dir_number = self.dir_number(dir);
        let mut processed = 0;
        let mut failed = 0;
        for (index, image) in images.iter().enumerate() {
            let output = output_dir.join(format!("{dir_number:04}_{:04}.bmp", index + 1));
            match convert_file(image, &output, &self.config) {
                Ok(()) => processed += 1,
                Err(e) => {
                    tracing::warn!(file = %image.display(), error = %e, "Conversion failed");
                    failed += 1;
                }
            }
        }

        tracing::debug!(
            dir = %dir.display(),
            dir_number,
            processed,
            failed,
            "Directory done"
        );
        summary.processed += processed;
        summary.failed += failed;
        Ok(())
    }

    fn dir_number(&mut self, dir: &Path) -> usize {
        if let Some(&number) = self.dir_numbers.get(dir) {
            return number;
        }
        let number = self.next_dir_number;
        self.next_dir_number += 1;
        self.dir_numbers.insert(dir.to_path_buf(), number);
        number
    }
}
