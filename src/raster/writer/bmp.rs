use super::{Container, ContainerEncoder};
use crate::error::Error;
use crate::raster::{Image, RowOrder};

pub const HEADER_LENGTH: usize = 70;
pub const ROW_ALIGNMENT: usize = 4;

const SIGNATURE: [u8; 2] = *b"BM";
const INFO_HEADER_LENGTH: u32 = 56;
const PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 16;
const BI_BITFIELDS: u32 = 3;
const RED_MASK: u32 = 0x0000_F800;
const GREEN_MASK: u32 = 0x0000_07E0;
const BLUE_MASK: u32 = 0x0000_001F;

const SIGNATURE_OFFSET: usize = 0;
const FILE_SIZE_OFFSET: usize = 2;
const DATA_OFFSET_OFFSET: usize = 10;
const INFO_HEADER_LENGTH_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const PLANES_OFFSET: usize = 26;
const BITS_PER_PIXEL_OFFSET: usize = 28;
const COMPRESSION_OFFSET: usize = 30;
const DATA_SIZE_OFFSET: usize = 34;
const RED_MASK_OFFSET: usize = 54;
const GREEN_MASK_OFFSET: usize = 58;
const BLUE_MASK_OFFSET: usize = 62;

/// File header plus a 56 byte info header carrying explicit RGB565 masks.
///
/// Resolution, palette and the trailing reserved field are always zero.
/// A positive height declares bottom-up row storage. `data_size` counts the
/// row padding to four bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitfieldsBmpHeader {
    pub width: i32,
    pub height: i32,
    pub data_size: u32,
}

impl BitfieldsBmpHeader {
    pub fn new(width: u16, height: u16, payload_length: usize) -> crate::Result<Self> {
        let data_size = u32::try_from(payload_length)
            .ok()
            .filter(|size| size.checked_add(HEADER_LENGTH as u32).is_some())
            .ok_or(Error::PayloadTooLarge(payload_length))?;
        Ok(Self {
            width: width as i32,
            height: height as i32,
            data_size,
        })
    }

    pub fn file_size(&self) -> u32 {
        HEADER_LENGTH as u32 + self.data_size
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LENGTH] {
        let mut bytes = [0; HEADER_LENGTH];
        put(&mut bytes, SIGNATURE_OFFSET, &SIGNATURE);
        put(&mut bytes, FILE_SIZE_OFFSET, &self.file_size().to_le_bytes());
        put(&mut bytes, DATA_OFFSET_OFFSET, &(HEADER_LENGTH as u32).to_le_bytes());
        put(&mut bytes, INFO_HEADER_LENGTH_OFFSET, &INFO_HEADER_LENGTH.to_le_bytes());
        put(&mut bytes, WIDTH_OFFSET, &self.width.to_le_bytes());
        put(&mut bytes, HEIGHT_OFFSET, &self.height.to_le_bytes());
        put(&mut bytes, PLANES_OFFSET, &PLANES.to_le_bytes());
        put(&mut bytes, BITS_PER_PIXEL_OFFSET, &BITS_PER_PIXEL.to_le_bytes());
        put(&mut bytes, COMPRESSION_OFFSET, &BI_BITFIELDS.to_le_bytes());
        put(&mut bytes, DATA_SIZE_OFFSET, &self.data_size.to_le_bytes());
        put(&mut bytes, RED_MASK_OFFSET, &RED_MASK.to_le_bytes());
        put(&mut bytes, GREEN_MASK_OFFSET, &GREEN_MASK.to_le_bytes());
        put(&mut bytes, BLUE_MASK_OFFSET, &BLUE_MASK.to_le_bytes());
        bytes
    }
}

fn put(bytes: &mut [u8], offset: usize, field: &[u8]) {
    bytes[offset..offset + field.len()].copy_from_slice(field);
}

pub struct BmpEncoder;

impl ContainerEncoder for BmpEncoder {
    fn container(&self) -> Container {
        Container::Bmp
    }

    fn row_order(&self) -> RowOrder {
        RowOrder::BottomUp
    }

    fn row_alignment(&self) -> usize {
        ROW_ALIGNMENT
    }

    fn encode_header(&self, image: &Image, payload_length: usize) -> crate::Result<Vec<u8>> {
        let header = BitfieldsBmpHeader::new(image.width(), image.height(), payload_length)?;
        Ok(header.to_bytes().to_vec())
    }
}
