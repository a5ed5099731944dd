use std::fmt::Display;
use std::io::{self, Write};

use clap::builder::PossibleValue;
use clap::ValueEnum;

use super::{Image, RowOrder};
use crate::color::RGB565ColorFormat;
use crate::logger;

pub mod bmp;
pub mod tga;

use bmp::BmpEncoder;
use tga::TgaEncoder;

const BYTES_PER_DOT: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Container {
    #[default]
    Bmp,
    Tga,
}

impl ValueEnum for Container {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Bmp, Self::Tga]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Bmp => Some(PossibleValue::new("bmp")),
            Self::Tga => Some(PossibleValue::new("tga")),
        }
    }
}

impl Container {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Tga => "tga",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bmp => "16 bit RGB565 bitmap (BI_BITFIELDS, bottom-up rows)",
            Self::Tga => "16 bit RGB565 targa (uncompressed truecolor, rows top to bottom)",
        }
    }

    /// How firmware embeds the written file.
    pub fn usage_hint(&self) -> &'static str {
        match self {
            Self::Bmp => {
                "Embed with include_bytes! and parse with tinybmp::Bmp::<Rgb565>::from_slice"
            }
            Self::Tga => {
                "Embed with include_bytes! and parse with tinytga::Tga::<Rgb565>::from_slice"
            }
        }
    }

    pub fn encoder(&self) -> Box<dyn ContainerEncoder> {
        match self {
            Self::Bmp => Box::new(BmpEncoder),
            Self::Tga => Box::new(TgaEncoder),
        }
    }
}

impl Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bmp => write!(f, "BMP"),
            Self::Tga => write!(f, "TGA"),
        }
    }
}

/// A container format that stores RGB565 pixel data behind a fixed header.
pub trait ContainerEncoder {
    fn container(&self) -> Container;

    fn row_order(&self) -> RowOrder;

    /// Every stored row is zero padded to a multiple of this many bytes.
    fn row_alignment(&self) -> usize {
        1
    }

    fn encode_header(&self, image: &Image, payload_length: usize) -> crate::Result<Vec<u8>>;

    fn encode(&self, image: &Image) -> crate::Result<EncodedImage> {
        let payload = encode_payload(image, self.row_order(), self.row_alignment());
        let header = self.encode_header(image, payload.len())?;
        logger::log_header(&self.container().to_string(), &header);
        Ok(EncodedImage { header, payload })
    }
}

/// Number of bytes a row of `width` dots occupies when padded to `alignment`.
pub fn row_stride(width: u16, alignment: usize) -> usize {
    (width as usize * BYTES_PER_DOT).next_multiple_of(alignment)
}

/// Reduces every dot to RGB565 and packs it little-endian, rows in `order`,
/// each row zero padded to `alignment` bytes.
pub fn encode_payload(image: &Image, order: RowOrder, alignment: usize) -> Vec<u8> {
    let stride = row_stride(image.width(), alignment);
    let padding = stride - image.width() as usize * BYTES_PER_DOT;
    let mut payload = Vec::with_capacity(stride * image.height() as usize);
    for row in image.rows(order) {
        for dot in row {
            payload.extend_from_slice(&RGB565ColorFormat::from(dot).to_le_bytes());
        }
        payload.resize(payload.len() + padding, 0);
    }
    payload
}

pub struct EncodedImage {
    header: Vec<u8>,
    payload: Vec<u8>,
}

impl EncodedImage {
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> usize {
        self.header.len() + self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn write_to<T: Write>(&self, writer: &mut T) -> io::Result<()> {
        writer.write_all(&self.header)?;
        writer.write_all(&self.payload)?;
        writer.flush()
    }
}
