const RED_MASK: u16 = 0xF800;
const GREEN_MASK: u16 = 0x07E0;
const BLUE_MASK: u16 = 0x001F;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGBColorFormat<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T> RGBColorFormat<T> {
    pub fn new(red: T, green: T, blue: T) -> Self {
        RGBColorFormat { red, green, blue }
    }
}

impl From<image::Rgb<u8>> for RGBColorFormat<u8> {
    fn from(value: image::Rgb<u8>) -> Self {
        let [red, green, blue] = value.0;
        RGBColorFormat { red, green, blue }
    }
}

/// A pixel packed as `RRRRRGGG GGGBBBBB`.
///
/// The reduction from truecolor truncates the low bits of every channel.
/// There is no rounding and no dithering, so a decoder reading the channels
/// back gets exactly `r >> 3`, `g >> 2` and `b >> 3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RGB565ColorFormat(u16);

impl RGB565ColorFormat {
    pub fn new(packed: u16) -> Self {
        RGB565ColorFormat(packed)
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    pub fn red5(&self) -> u8 {
        ((self.0 & RED_MASK) >> 11) as u8
    }

    pub fn green6(&self) -> u8 {
        ((self.0 & GREEN_MASK) >> 5) as u8
    }

    pub fn blue5(&self) -> u8 {
        (self.0 & BLUE_MASK) as u8
    }

    pub fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<&RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: &RGBColorFormat<u8>) -> Self {
        let red = ((value.red >> 3) & 0x1F) as u16;
        let green = ((value.green >> 2) & 0x3F) as u16;
        let blue = ((value.blue >> 3) & 0x1F) as u16;
        RGB565ColorFormat((red << 11) | (green << 5) | blue)
    }
}

impl From<RGBColorFormat<u8>> for RGB565ColorFormat {
    fn from(value: RGBColorFormat<u8>) -> Self {
        RGB565ColorFormat::from(&value)
    }
}
