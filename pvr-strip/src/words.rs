//! Hardware word bit layout.
//!
//! A strip header carries six 32-bit words. The first two (parameter control
//! word and ISP/TSP instruction word) plus the primary TSP/TCW pair are
//! emitted for every header; the secondary TSP/TCW pair is only emitted for
//! two-parameter polygon types.
//!
//! Several bit ranges are reinterpreted depending on the header type: the
//! depth-compare field doubles as the modifier volume instruction, bit 6 of
//! the control word is "modifier type" for polygons but "last triangle in
//! volume" for modifier headers, and the TCW twiddle/stride bits alias the
//! palette index for paletted formats.

/// Index of the parameter control word in [`StripHeader::words`](crate::StripHeader).
pub const PCW: usize = 0;
/// Index of the ISP/TSP instruction word.
pub const ISP_TSP: usize = 1;
/// Index of the primary TSP instruction word.
pub const TSP0: usize = 2;
/// Index of the primary texture control word.
pub const TCW0: usize = 3;
/// Index of the secondary TSP instruction word (two-parameter types only).
pub const TSP1: usize = 4;
/// Index of the secondary texture control word (two-parameter types only).
pub const TCW1: usize = 5;

/// Parameter control word fields.
pub mod pcw {
    // Primitive type, bits 31-29
    pub const TYPE_SHIFT: u32 = 29;
    pub const TYPE_POLYGON: u32 = 4 << TYPE_SHIFT;
    pub const TYPE_MODIFIER: u32 = 4 << TYPE_SHIFT;
    pub const TYPE_SPRITE: u32 = 5 << TYPE_SHIFT;
    pub const TYPE_MASK: u32 = 7 << TYPE_SHIFT;

    // Submission list, bits 26-24
    pub const LIST_SHIFT: u32 = 24;
    pub const LIST_MASK: u32 = 7 << LIST_SHIFT;

    // Update strip length & user clip, bit 23
    pub const UPDATE_GROUP_SHIFT: u32 = 23;
    pub const UPDATE_GROUP_ON: u32 = 1 << UPDATE_GROUP_SHIFT;
    pub const UPDATE_GROUP_MASK: u32 = 1 << UPDATE_GROUP_SHIFT;

    // Strip length, bits 19-18
    pub const STRIP_LENGTH_SHIFT: u32 = 18;
    pub const STRIP_LENGTH_2: u32 = 1 << STRIP_LENGTH_SHIFT;
    pub const STRIP_LENGTH_MASK: u32 = 3 << STRIP_LENGTH_SHIFT;

    // User clip, bits 17-16
    pub const USER_CLIP_SHIFT: u32 = 16;
    pub const USER_CLIP_MASK: u32 = 3 << USER_CLIP_SHIFT;

    // Modifier enable (polygons), bit 7
    pub const MODIFIER_SHIFT: u32 = 7;
    pub const MODIFIER_DISABLE: u32 = 0 << MODIFIER_SHIFT;
    pub const MODIFIER_ENABLE: u32 = 1 << MODIFIER_SHIFT;
    pub const MODIFIER_MASK: u32 = 1 << MODIFIER_SHIFT;

    // Modifier type (polygons), bit 6
    pub const MODIFIER_TYPE_SHIFT: u32 = 6;
    pub const MODIFIER_TYPE_SHADOW: u32 = 0 << MODIFIER_TYPE_SHIFT;
    pub const MODIFIER_TYPE_NORMAL: u32 = 1 << MODIFIER_TYPE_SHIFT;
    pub const MODIFIER_TYPE_MASK: u32 = 1 << MODIFIER_TYPE_SHIFT;

    // Last triangle in volume (modifiers), bit 6 - aliases MODIFIER_TYPE
    pub const MODIFIER_TRIANGLE_SHIFT: u32 = 6;
    pub const MODIFIER_TRIANGLE: u32 = 0 << MODIFIER_TRIANGLE_SHIFT;
    pub const MODIFIER_TRIANGLE_LAST: u32 = 1 << MODIFIER_TRIANGLE_SHIFT;
    pub const MODIFIER_TRIANGLE_MASK: u32 = 1 << MODIFIER_TRIANGLE_SHIFT;

    // Color type, bits 5-4
    pub const COLOR_TYPE_SHIFT: u32 = 4;
    pub const COLOR_TYPE_PACKED: u32 = 0 << COLOR_TYPE_SHIFT;
    pub const COLOR_TYPE_FLOAT: u32 = 1 << COLOR_TYPE_SHIFT;
    pub const COLOR_TYPE_INTENSITY: u32 = 2 << COLOR_TYPE_SHIFT;
    pub const COLOR_TYPE_PREV_INTENSITY: u32 = 3 << COLOR_TYPE_SHIFT;
    pub const COLOR_TYPE_MASK: u32 = 3 << COLOR_TYPE_SHIFT;

    // Texture enable, bit 3
    pub const TEXTURE_SHIFT: u32 = 3;
    pub const TEXTURE_DISABLE: u32 = 0 << TEXTURE_SHIFT;
    pub const TEXTURE_ENABLE: u32 = 1 << TEXTURE_SHIFT;
    pub const TEXTURE_MASK: u32 = 1 << TEXTURE_SHIFT;

    // Offset color enable, bit 2
    pub const OFFSET_COLOR_SHIFT: u32 = 2;
    pub const OFFSET_COLOR_DISABLE: u32 = 0 << OFFSET_COLOR_SHIFT;
    pub const OFFSET_COLOR_ENABLE: u32 = 1 << OFFSET_COLOR_SHIFT;
    pub const OFFSET_COLOR_MASK: u32 = 1 << OFFSET_COLOR_SHIFT;

    // Shading, bit 1
    pub const SHADING_SHIFT: u32 = 1;
    pub const SHADING_FLAT: u32 = 0 << SHADING_SHIFT;
    pub const SHADING_GOURAUD: u32 = 1 << SHADING_SHIFT;
    pub const SHADING_MASK: u32 = 1 << SHADING_SHIFT;

    // UV format, bit 0
    pub const UV_SHIFT: u32 = 0;
    pub const UV_32BIT: u32 = 0 << UV_SHIFT;
    pub const UV_16BIT: u32 = 1 << UV_SHIFT;
    pub const UV_MASK: u32 = 1 << UV_SHIFT;
}

/// ISP/TSP instruction word fields.
pub mod isp_tsp {
    // Depth compare (polygons), bits 31-29
    pub const DEPTH_COMPARE_SHIFT: u32 = 29;
    pub const DEPTH_COMPARE_GREATER_OR_EQUAL: u32 = 6 << DEPTH_COMPARE_SHIFT;
    pub const DEPTH_COMPARE_MASK: u32 = 7 << DEPTH_COMPARE_SHIFT;

    // Volume instruction (modifiers), bits 31-29 - aliases DEPTH_COMPARE
    pub const VOLUME_INSTRUCTION_SHIFT: u32 = 29;
    pub const VOLUME_INSTRUCTION_NORMAL: u32 = 0 << VOLUME_INSTRUCTION_SHIFT;
    pub const VOLUME_INSTRUCTION_MASK: u32 = 7 << VOLUME_INSTRUCTION_SHIFT;

    // Cull mode, bits 28-27
    pub const CULL_MODE_SHIFT: u32 = 27;
    pub const CULL_MODE_NONE: u32 = 0 << CULL_MODE_SHIFT;
    pub const CULL_MODE_MASK: u32 = 3 << CULL_MODE_SHIFT;

    // Z write disable, bit 26
    pub const Z_WRITE_SHIFT: u32 = 26;
    pub const Z_WRITE_ENABLE: u32 = 0 << Z_WRITE_SHIFT;
    pub const Z_WRITE_DISABLE: u32 = 1 << Z_WRITE_SHIFT;
    pub const Z_WRITE_MASK: u32 = 1 << Z_WRITE_SHIFT;

    // D-calc control, bit 20
    pub const DCALC_SHIFT: u32 = 20;
    pub const DCALC_DISABLE: u32 = 0 << DCALC_SHIFT;
    pub const DCALC_ENABLE: u32 = 1 << DCALC_SHIFT;
    pub const DCALC_MASK: u32 = 1 << DCALC_SHIFT;
}

/// TSP instruction word fields.
pub mod tsp {
    // Source alpha instruction, bits 31-29
    pub const SRC_ALPHA_INSTR_SHIFT: u32 = 29;
    pub const SRC_ALPHA_INSTR_ONE: u32 = 1 << SRC_ALPHA_INSTR_SHIFT;
    pub const SRC_ALPHA_INSTR_SRC_ALPHA: u32 = 4 << SRC_ALPHA_INSTR_SHIFT;
    pub const SRC_ALPHA_INSTR_MASK: u32 = 7 << SRC_ALPHA_INSTR_SHIFT;

    // Destination alpha instruction, bits 28-26
    pub const DST_ALPHA_INSTR_SHIFT: u32 = 26;
    pub const DST_ALPHA_INSTR_ZERO: u32 = 0 << DST_ALPHA_INSTR_SHIFT;
    pub const DST_ALPHA_INSTR_INVERSE_SRC_ALPHA: u32 = 5 << DST_ALPHA_INSTR_SHIFT;
    pub const DST_ALPHA_INSTR_MASK: u32 = 7 << DST_ALPHA_INSTR_SHIFT;

    // Source accumulation buffer select, bit 25
    pub const SRC_SELECT_SHIFT: u32 = 25;
    pub const SRC_SELECT_DISABLE: u32 = 0 << SRC_SELECT_SHIFT;
    pub const SRC_SELECT_ENABLE: u32 = 1 << SRC_SELECT_SHIFT;
    pub const SRC_SELECT_MASK: u32 = 1 << SRC_SELECT_SHIFT;

    // Destination accumulation buffer select, bit 24
    pub const DST_SELECT_SHIFT: u32 = 24;
    pub const DST_SELECT_DISABLE: u32 = 0 << DST_SELECT_SHIFT;
    pub const DST_SELECT_ENABLE: u32 = 1 << DST_SELECT_SHIFT;
    pub const DST_SELECT_MASK: u32 = 1 << DST_SELECT_SHIFT;

    // Fog mode, bits 23-22
    pub const FOG_MODE_SHIFT: u32 = 22;
    pub const FOG_MODE_DISABLE: u32 = 2 << FOG_MODE_SHIFT;
    pub const FOG_MODE_MASK: u32 = 3 << FOG_MODE_SHIFT;

    // Color clamp, bit 21
    pub const COLOR_CLAMP_SHIFT: u32 = 21;
    pub const COLOR_CLAMP_DISABLE: u32 = 0 << COLOR_CLAMP_SHIFT;
    pub const COLOR_CLAMP_MASK: u32 = 1 << COLOR_CLAMP_SHIFT;

    // Alpha enable, bit 20
    pub const ALPHA_SHIFT: u32 = 20;
    pub const ALPHA_DISABLE: u32 = 0 << ALPHA_SHIFT;
    pub const ALPHA_ENABLE: u32 = 1 << ALPHA_SHIFT;
    pub const ALPHA_MASK: u32 = 1 << ALPHA_SHIFT;

    // Texture alpha enable, bit 19 - inverted polarity
    pub const TEXTURE_ALPHA_SHIFT: u32 = 19;
    pub const TEXTURE_ALPHA_DISABLE: u32 = 1 << TEXTURE_ALPHA_SHIFT;
    pub const TEXTURE_ALPHA_ENABLE: u32 = 0 << TEXTURE_ALPHA_SHIFT;
    pub const TEXTURE_ALPHA_MASK: u32 = 1 << TEXTURE_ALPHA_SHIFT;

    // UV flip, bits 18-17
    pub const UV_FLIP_SHIFT: u32 = 17;
    pub const UV_FLIP_NONE: u32 = 0 << UV_FLIP_SHIFT;
    pub const UV_FLIP_MASK: u32 = 3 << UV_FLIP_SHIFT;

    // UV clamp, bits 16-15
    pub const UV_CLAMP_SHIFT: u32 = 15;
    pub const UV_CLAMP_NONE: u32 = 0 << UV_CLAMP_SHIFT;
    pub const UV_CLAMP_MASK: u32 = 3 << UV_CLAMP_SHIFT;

    // Texture filter, bits 14-13
    pub const TEXTURE_FILTER_SHIFT: u32 = 13;
    pub const TEXTURE_FILTER_POINT: u32 = 0 << TEXTURE_FILTER_SHIFT;
    pub const TEXTURE_FILTER_MASK: u32 = 3 << TEXTURE_FILTER_SHIFT;

    // Texture super-sampling, bit 12
    pub const SUPER_SAMPLING_SHIFT: u32 = 12;
    pub const SUPER_SAMPLING_DISABLE: u32 = 0 << SUPER_SAMPLING_SHIFT;
    pub const SUPER_SAMPLING_ENABLE: u32 = 1 << SUPER_SAMPLING_SHIFT;
    pub const SUPER_SAMPLING_MASK: u32 = 1 << SUPER_SAMPLING_SHIFT;

    // Mipmap D-adjust, bits 11-8
    pub const MIPMAP_ADJUST_SHIFT: u32 = 8;
    pub const MIPMAP_ADJUST_1_00: u32 = 4 << MIPMAP_ADJUST_SHIFT;
    pub const MIPMAP_ADJUST_MASK: u32 = 15 << MIPMAP_ADJUST_SHIFT;

    // Texture shading instruction, bits 7-6
    pub const TEXTURE_INSTRUCTION_SHIFT: u32 = 6;
    pub const TEXTURE_INSTRUCTION_MODULATE: u32 = 1 << TEXTURE_INSTRUCTION_SHIFT;
    pub const TEXTURE_INSTRUCTION_MODULATE_ALPHA: u32 = 3 << TEXTURE_INSTRUCTION_SHIFT;
    pub const TEXTURE_INSTRUCTION_MASK: u32 = 3 << TEXTURE_INSTRUCTION_SHIFT;

    // Texture U size, bits 5-3 (3-bit size code)
    pub const TEXTURE_U_SIZE_SHIFT: u32 = 3;
    pub const TEXTURE_U_SIZE_MASK: u32 = 7 << TEXTURE_U_SIZE_SHIFT;

    // Texture V size, bits 2-0 (3-bit size code)
    pub const TEXTURE_V_SIZE_SHIFT: u32 = 0;
    pub const TEXTURE_V_SIZE_MASK: u32 = 7 << TEXTURE_V_SIZE_SHIFT;
}

/// Texture control word fields.
pub mod tcw {
    // Mipmapped, bit 31
    pub const MIPMAP_SHIFT: u32 = 31;
    pub const MIPMAP_DISABLED: u32 = 0 << MIPMAP_SHIFT;
    pub const MIPMAP_ENABLED: u32 = 1 << MIPMAP_SHIFT;
    pub const MIPMAP_MASK: u32 = 1 << MIPMAP_SHIFT;

    // VQ compressed, bit 30
    pub const VQ_COMPRESSED_SHIFT: u32 = 30;
    pub const VQ_COMPRESSED_DISABLED: u32 = 0 << VQ_COMPRESSED_SHIFT;
    pub const VQ_COMPRESSED_ENABLED: u32 = 1 << VQ_COMPRESSED_SHIFT;
    pub const VQ_COMPRESSED_MASK: u32 = 1 << VQ_COMPRESSED_SHIFT;

    // Pixel format, bits 29-27
    pub const PIXEL_FORMAT_SHIFT: u32 = 27;
    pub const PIXEL_FORMAT_ARGB1555: u32 = 0 << PIXEL_FORMAT_SHIFT;
    pub const PIXEL_FORMAT_RGB565: u32 = 1 << PIXEL_FORMAT_SHIFT;
    pub const PIXEL_FORMAT_ARGB4444: u32 = 2 << PIXEL_FORMAT_SHIFT;
    pub const PIXEL_FORMAT_PAL_4BPP: u32 = 5 << PIXEL_FORMAT_SHIFT;
    pub const PIXEL_FORMAT_PAL_8BPP: u32 = 6 << PIXEL_FORMAT_SHIFT;
    pub const PIXEL_FORMAT_MASK: u32 = 7 << PIXEL_FORMAT_SHIFT;

    // Twiddled (non-paletted textures), bit 26 - inverted polarity
    pub const TWIDDLED_SHIFT: u32 = 26;
    pub const TWIDDLED_DISABLED: u32 = 1 << TWIDDLED_SHIFT;
    pub const TWIDDLED_ENABLED: u32 = 0 << TWIDDLED_SHIFT;
    pub const TWIDDLED_MASK: u32 = 1 << TWIDDLED_SHIFT;

    // Stride enable (non-paletted textures), bit 25
    pub const STRIDE_SHIFT: u32 = 25;
    pub const STRIDE_DISABLED: u32 = 0 << STRIDE_SHIFT;
    pub const STRIDE_MASK: u32 = 1 << STRIDE_SHIFT;

    // Palette index (paletted textures) - aliases the twiddle/stride bits.
    // 4bpp: 64 palettes of 16 entries, bits 26-21.
    // 8bpp: 4 palettes of 256 entries, bits 26-25.
    pub const PALETTE_INDEX_4BPP_SHIFT: u32 = 21;
    pub const PALETTE_INDEX_4BPP_MASK: u32 = 63 << PALETTE_INDEX_4BPP_SHIFT;
    pub const PALETTE_INDEX_8BPP_SHIFT: u32 = 25;
    pub const PALETTE_INDEX_8BPP_MASK: u32 = 3 << PALETTE_INDEX_8BPP_SHIFT;

    // Texture address, bits 20-0, in 8-byte units within the 8 MB VRAM
    // window. The window limits the stored value to 20 significant bits,
    // so the full 21-bit field mask and the 20-bit maximum agree.
    pub const ADDRESS_MASK: u32 = 0x001F_FFFF;
    pub const VRAM_WINDOW_MASK: u32 = 0x007F_FFFF;
    pub const ADDRESS_UNIT_SHIFT: u32 = 3;

    /// Encode a VRAM byte address into the TCW address field.
    #[inline]
    pub const fn address_bits(address: u32) -> u32 {
        ((address & VRAM_WINDOW_MASK) >> ADDRESS_UNIT_SHIFT) & ADDRESS_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_indices() {
        assert_eq!(PCW, 0);
        assert_eq!(ISP_TSP, 1);
        assert_eq!(TSP0, 2);
        assert_eq!(TCW0, 3);
        assert_eq!(TSP1, 4);
        assert_eq!(TCW1, 5);
    }

    #[test]
    fn test_aliased_fields_share_bits() {
        // Depth compare and volume instruction occupy the same range
        assert_eq!(isp_tsp::DEPTH_COMPARE_MASK, isp_tsp::VOLUME_INSTRUCTION_MASK);
        // Modifier type and last-triangle flag occupy the same bit
        assert_eq!(pcw::MODIFIER_TYPE_MASK, pcw::MODIFIER_TRIANGLE_MASK);
        // 4bpp palette index covers the twiddle and stride bits
        assert_eq!(
            tcw::PALETTE_INDEX_4BPP_MASK & (tcw::TWIDDLED_MASK | tcw::STRIDE_MASK),
            tcw::TWIDDLED_MASK | tcw::STRIDE_MASK
        );
    }

    #[test]
    fn test_address_encoding() {
        // 8-byte aligned address inside the VRAM window
        assert_eq!(tcw::address_bits(0x0025_8000), 0x0004_B000);
        // Bits above the window are dropped before the shift
        assert_eq!(tcw::address_bits(0xA025_8000), 0x0004_B000);
        assert_eq!(tcw::address_bits(0), 0);
        // Maximum window address fits in 20 bits, under the 21-bit field
        assert_eq!(tcw::address_bits(0x007F_FFF8), 0x000F_FFFF);
    }

    #[test]
    fn test_inverted_polarity_fields() {
        assert_eq!(tsp::TEXTURE_ALPHA_ENABLE, 0);
        assert_eq!(tsp::TEXTURE_ALPHA_DISABLE, 1 << 19);
        assert_eq!(tcw::TWIDDLED_ENABLED, 0);
        assert_eq!(tcw::TWIDDLED_DISABLED, 1 << 26);
    }
}
