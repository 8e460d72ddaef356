//! External texture descriptors.
//!
//! A [`TextureDescriptor`] describes a texture that already lives in VRAM;
//! the header only copies its encoded form into the TSP size fields and the
//! texture control word. Allocation and the meaning of the backing address
//! are the caller's business.

use bitflags::bitflags;

use crate::words::tcw;

/// Pixel format of a VRAM texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb565,
    Argb1555,
    Argb4444,
    Palette4Bpp,
    Palette8Bpp,
}

impl PixelFormat {
    /// Whether this format indexes a hardware palette.
    pub fn is_paletted(self) -> bool {
        matches!(self, PixelFormat::Palette4Bpp | PixelFormat::Palette8Bpp)
    }

    /// The pixel format field value for the texture control word.
    pub(crate) fn tcw_bits(self) -> u32 {
        match self {
            PixelFormat::Rgb565 => tcw::PIXEL_FORMAT_RGB565,
            PixelFormat::Argb1555 => tcw::PIXEL_FORMAT_ARGB1555,
            PixelFormat::Argb4444 => tcw::PIXEL_FORMAT_ARGB4444,
            PixelFormat::Palette4Bpp => tcw::PIXEL_FORMAT_PAL_4BPP,
            PixelFormat::Palette8Bpp => tcw::PIXEL_FORMAT_PAL_8BPP,
        }
    }
}

bitflags! {
    /// Storage attributes of a VRAM texture.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextureFlags: u32 {
        const MIPMAPPED = 1 << 0;
        const COMPRESSED = 1 << 1;
        const TWIDDLED = 1 << 2;
    }
}

/// Read-only description of a texture in VRAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Width in texels, a power of two in 8..=1024.
    pub width: u32,
    /// Height in texels, a power of two in 8..=1024.
    pub height: u32,
    pub format: PixelFormat,
    pub flags: TextureFlags,
    /// Byte address of the texture data in VRAM, 8-byte aligned.
    pub address: u32,
}

/// Map a texture dimension to its 3-bit TSP size code.
///
/// Returns `None` for anything but {8, 16, 32, 64, 128, 256, 512, 1024}.
pub(crate) fn size_code(dimension: u32) -> Option<u32> {
    match dimension {
        8 => Some(0),
        16 => Some(1),
        32 => Some(2),
        64 => Some(3),
        128 => Some(4),
        256 => Some(5),
        512 => Some(6),
        1024 => Some(7),
        _ => None,
    }
}
