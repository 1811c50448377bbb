//! RGBA pixel type
//!
//! Straight (non-premultiplied) 8-bit RGBA, the layout produced by image
//! decoders after alpha promotion and consumed by PNG encoders.

use super::tolerance::Tolerance;

/// A single 8-bit RGBA pixel.
///
/// Channel order matches the raw byte layout `[R, G, B, A]`, so a row-major
/// buffer of `Rgba` can be converted to and from encoder bytes without
/// reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the value written to every background pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel from RGB, as when promoting an image without
    /// an alpha channel.
    ///
    /// # Example
    /// ```
    /// use flood_matte::Rgba;
    /// assert_eq!(Rgba::opaque(10, 20, 30).a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether this pixel counts as near-black under `tolerance`.
    ///
    /// All three colour channels must be strictly below the threshold.
    /// Alpha is ignored.
    ///
    /// # Example
    /// ```
    /// use flood_matte::{Rgba, Tolerance};
    /// let tol = Tolerance::new(30);
    /// assert!(Rgba::opaque(29, 0, 12).is_near_black(tol));
    /// assert!(!Rgba::opaque(30, 0, 0).is_near_black(tol));
    /// ```
    #[inline]
    pub fn is_near_black(&self, tolerance: Tolerance) -> bool {
        let t = tolerance.value();
        self.r < t && self.g < t && self.b < t
    }

    /// Raw channel bytes in `[R, G, B, A]` order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from `[R, G, B, A]` bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    #[inline]
    fn from(px: Rgba) -> Self {
        px.to_bytes()
    }
}
