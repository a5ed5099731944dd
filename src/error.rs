use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeInputImage(String, image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToWriteOutputFile(String, std::io::Error),
    InvalidImageDimensions(u16, u16),
    MismatchOfSizeBetweenDimensionsAndPixels(usize, usize),
    PayloadTooLarge(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeInputImage(path, error) => {
                write!(f, "Unable to decode input image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToWriteOutputFile(path, error) => {
                write!(f, "Failed to write output file '{}': {}", path, error)
            }
            Self::InvalidImageDimensions(width, height) => {
                write!(f, "Invalid image dimensions {}x{}", width, height)
            }
            Self::MismatchOfSizeBetweenDimensionsAndPixels(expected, actual) => {
                write!(
                    f,
                    "Number of pixels does not match the dimensions. Expected {}, but got {}.",
                    expected, actual
                )
            }
            Self::PayloadTooLarge(length) => {
                write!(
                    f,
                    "Pixel data of {} bytes does not fit into the container header",
                    length
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::FailedToWriteOutputFile(_, error) => Some(error),
            Self::UnableToDecodeInputImage(_, error) => Some(error),
            _ => None,
        }
    }
}
