use super::Image;

mod photo;

pub use photo::{PhotoImageReader, ResizeFilter};

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}
