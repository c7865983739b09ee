/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

/// Packs an 8-bit-per-channel color into RGB565, red in the high bits.
pub const fn quantize(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;

    (r5 << 11) | (g6 << 5) | b5
}

#[repr(transparent)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(quantize(r, g, b))
    }

    /// Byte order LVGL reads the color plane in.
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8 & 0x1F
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 5) as u8 & 0x3F
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8 & 0x1F
    }
}
