use super::{Container, ContainerEncoder};
use crate::raster::{Image, RowOrder};

pub const HEADER_LENGTH: usize = 18;

const IMAGE_TYPE_TRUECOLOR: u8 = 2;
const BITS_PER_PIXEL: u8 = 16;
// bit 5: rows stored top to bottom, no alpha bits, no interleaving
const IMAGE_DESCRIPTOR: u8 = 0x20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
}

impl TgaHeader {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LENGTH] {
        let mut bytes = [0; HEADER_LENGTH];
        // id length, color map type and color map specification stay zero
        bytes[2] = IMAGE_TYPE_TRUECOLOR;
        // x and y origin stay zero
        bytes[12..14].copy_from_slice(&self.width.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.height.to_le_bytes());
        bytes[16] = BITS_PER_PIXEL;
        bytes[17] = IMAGE_DESCRIPTOR;
        bytes
    }
}

pub struct TgaEncoder;

impl ContainerEncoder for TgaEncoder {
    fn container(&self) -> Container {
        Container::Tga
    }

    fn row_order(&self) -> RowOrder {
        RowOrder::TopDown
    }

    fn encode_header(&self, image: &Image, _payload_length: usize) -> crate::Result<Vec<u8>> {
        Ok(TgaHeader::new(image.width(), image.height())
            .to_bytes()
            .to_vec())
    }
}
