use std::path::{Path, PathBuf};

use clap::builder::PossibleValue;
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

use super::super::Image;
use super::ImageReader;
use crate::color::RGBColorFormat;
use crate::error::Error;

/// Resampling filter used to bring the decoded photo to the target size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl ValueEnum for ResizeFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Nearest,
            Self::Triangle,
            Self::CatmullRom,
            Self::Gaussian,
            Self::Lanczos3,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Nearest => Some(PossibleValue::new("Nearest")),
            Self::Triangle => Some(PossibleValue::new("Triangle")),
            Self::CatmullRom => Some(PossibleValue::new("CatmullRom")),
            Self::Gaussian => Some(PossibleValue::new("Gaussian")),
            Self::Lanczos3 => Some(PossibleValue::new("Lanczos3")),
        }
    }
}

impl From<ResizeFilter> for FilterType {
    fn from(value: ResizeFilter) -> Self {
        match value {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Decodes any raster format known to the `image` crate and resamples it
/// to exactly `width` x `height` truecolor pixels.
pub struct PhotoImageReader {
    path: PathBuf,
    width: u16,
    height: u16,
    filter: ResizeFilter,
}

impl PhotoImageReader {
    pub fn new(path: &Path, width: u16, height: u16, filter: ResizeFilter) -> Self {
        Self {
            path: path.to_owned(),
            width,
            height,
            filter,
        }
    }

    fn path_name(&self) -> String {
        self.path.display().to_string()
    }

    fn decode(&self) -> crate::Result<DynamicImage> {
        if !self.path.exists() {
            return Err(Error::InputFileNotFound(self.path_name()));
        }
        image::ImageReader::open(&self.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| Error::UnableToOpenInputFileForReading(self.path_name(), e))?
            .decode()
            .map_err(|e| Error::UnableToDecodeInputImage(self.path_name(), e))
    }

    fn resize(&self, image: &RgbImage) -> RgbImage {
        if image.width() == self.width as u32 && image.height() == self.height as u32 {
            return image.clone();
        }
        imageops::resize(
            image,
            self.width as u32,
            self.height as u32,
            self.filter.into(),
        )
    }
}

impl ImageReader for PhotoImageReader {
    fn read_image(&mut self) -> crate::Result<Image> {
        let decoded = self.decode()?.to_rgb8();
        log::info!(
            "Decoded '{}' with {}x{} pixels",
            self.path_name(),
            decoded.width(),
            decoded.height()
        );
        let resized = self.resize(&decoded);
        log::debug!(
            "Resized to {}x{} using {:?}",
            self.width,
            self.height,
            self.filter
        );
        let dots = resized
            .pixels()
            .map(|pixel| RGBColorFormat::from(*pixel))
            .collect();
        Image::new(self.width, self.height, dots)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::{env, fs};

    use image::{Rgb, RgbImage};

    use super::{ImageReader, PhotoImageReader, ResizeFilter};
    use crate::color::RGBColorFormat;
    use crate::error::Error;
    use crate::raster::RowOrder;

    fn temporary_path(file_name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("rgb565-convert-{}-{}", std::process::id(), file_name));
        path
    }

    fn cleanup(path: &Path) {
        if path.exists() {
            fs::remove_file(path).expect("Deletion of fixture failed");
        }
    }

    #[test]
    fn missing_input_is_reported() {
        let path = temporary_path("does-not-exist.jpg");
        let mut reader = PhotoImageReader::new(&path, 8, 8, ResizeFilter::default());
        match reader.read_image() {
            Err(Error::InputFileNotFound(name)) => assert!(name.contains("does-not-exist.jpg")),
            other => panic!("Expected missing input error, got {:?}", other),
        }
    }

    #[test]
    fn undecodable_input_is_reported() {
        let path = temporary_path("garbage.png");
        fs::write(&path, b"definitely not a png").expect("Writing fixture failed");
        let mut reader = PhotoImageReader::new(&path, 8, 8, ResizeFilter::default());
        let result = reader.read_image();
        cleanup(&path);
        assert!(matches!(result, Err(Error::UnableToDecodeInputImage(_, _))));
    }

    #[test]
    fn resamples_to_target_size() {
        let path = temporary_path("resample.png");
        RgbImage::from_pixel(40, 20, Rgb([10, 200, 30]))
            .save(&path)
            .expect("Writing fixture failed");
        let mut reader = PhotoImageReader::new(&path, 16, 12, ResizeFilter::Nearest);
        let image = reader.read_image();
        cleanup(&path);
        let image = image.expect("Reading fixture failed");
        assert_eq!(image.width(), 16);
        assert_eq!(image.height(), 12);
        assert_eq!(image.number_of_dots(), 16 * 12);
        assert!(image
            .rows(RowOrder::TopDown)
            .flatten()
            .all(|dot| *dot == RGBColorFormat::new(10, 200, 30)));
    }

    #[test]
    fn keeps_row_orientation_of_source() {
        let path = temporary_path("orientation.png");
        let source = RgbImage::from_fn(4, 4, |_, y| {
            if y == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        });
        source.save(&path).expect("Writing fixture failed");
        let mut reader = PhotoImageReader::new(&path, 4, 4, ResizeFilter::Lanczos3);
        let image = reader.read_image();
        cleanup(&path);
        let image = image.expect("Reading fixture failed");
        let top_row = image.rows(RowOrder::TopDown).next().expect("Image has rows");
        assert!(top_row.iter().all(|dot| dot.red == 255));
    }
}
