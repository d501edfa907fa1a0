/// A 32-bit color with alpha, red, green and blue channels.
///
/// Channels are stored as `[a, r, g, b]`, matching the packed ARGB layout that
/// 32bpp pixel surfaces use.
///
/// ```
/// use clipframe::Color;
///
/// let red = Color::rgb(255, 0, 0);
/// assert_eq!(red.to_argb(), 0xFFFF_0000);
/// assert_eq!(Color::from_argb(0x80_00_00_FF), Color::argb(128, 0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// All channels zero.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
    pub const BLACK: Self = Self([255, 0, 0, 0]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    /// Opaque color from red, green and blue.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([255, r, g, b])
    }

    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self([a, r, g, b])
    }

    pub fn from_argb(value: u32) -> Self {
        Self(value.to_be_bytes())
    }

    pub fn to_argb(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn alpha(&self) -> u8 {
        self.0[0]
    }

    /// True when the color would leave the target unchanged.
    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }
}
