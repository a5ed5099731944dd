use std::slice::ChunksExact;

use crate::color::RGBColorFormat;
use crate::error::Error;

pub mod reader;
pub mod writer;

/// Truecolor pixels, row-major, top row first.
#[derive(Debug)]
pub struct Image {
    width: u16,
    height: u16,
    dots: Vec<RGBColorFormat<u8>>,
}

impl Image {
    pub fn new(width: u16, height: u16, dots: Vec<RGBColorFormat<u8>>) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImageDimensions(width, height));
        }
        let expected_number_of_dots = width as usize * height as usize;
        if dots.len() != expected_number_of_dots {
            return Err(Error::MismatchOfSizeBetweenDimensionsAndPixels(
                expected_number_of_dots,
                dots.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            dots,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn number_of_dots(&self) -> usize {
        self.dots.len()
    }

    pub fn rows(&self, order: RowOrder) -> Rows<'_> {
        Rows {
            chunks: self.dots.chunks_exact(self.width as usize),
            order,
        }
    }
}

/// Order in which a container stores the rows of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    TopDown,
    BottomUp,
}

pub struct Rows<'a> {
    chunks: ChunksExact<'a, RGBColorFormat<u8>>,
    order: RowOrder,
}

impl<'a> Iterator for Rows<'a> {
    type Item = &'a [RGBColorFormat<u8>];

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            RowOrder::TopDown => self.chunks.next(),
            RowOrder::BottomUp => self.chunks.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Rows<'_> {}
