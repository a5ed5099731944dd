use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::raster::writer::{Container, EncodedImage};

/// Output path for `input_file` when none was given on the command line.
pub fn derive_output_file(input_file: &Path, container: Container) -> PathBuf {
    input_file.with_extension(container.extension())
}

fn path_name(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn open_output_file(file_path: &Path) -> crate::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_name(file_path), e))
}

/// Writes header and payload to `file_path`.
///
/// A failed write removes whatever was already written, so callers never
/// observe a truncated container.
pub fn write_output_file(file_path: &Path, image: &EncodedImage) -> crate::Result<()> {
    let output_file = open_output_file(file_path)?;
    let result = {
        let mut output_file_writer = BufWriter::new(&output_file);
        image
            .write_to(&mut output_file_writer)
            .and_then(|_| output_file.sync_all())
    };
    drop(output_file);
    if let Err(e) = result {
        log::warn!("Removing incomplete output file '{}'", file_path.display());
        if let Err(remove_error) = fs::remove_file(file_path) {
            log::error!(
                "Unable to remove incomplete output file '{}': {}",
                file_path.display(),
                remove_error
            );
        }
        return Err(Error::FailedToWriteOutputFile(path_name(file_path), e));
    }
    log::info!(
        "Wrote {} bytes to '{}'",
        image.len(),
        file_path.display()
    );
    Ok(())
}
