//! Strip header state and mutation.
//!
//! A [`StripHeader`] is created once for a (type, list) pair, mutated in
//! place through validated setters, and serialized by
//! [`commit`](StripHeader::commit). The type is fixed for the lifetime of
//! the header; every setter checks it against the operation's allowed
//! group before touching a word.

use bytemuck::{Pod, Zeroable};

use crate::capability::Capability;
use crate::error::{StripError, report};
use crate::groups::{MAX_TYPE, TypeGroup, header_type};
use crate::modes::{
    BlendFunc, CullMode, FogMode, List, MipmapAdjust, ModifierInstruction, TextureFilter,
};
use crate::texture::{TextureDescriptor, TextureFlags, size_code};
use crate::words::{ISP_TSP, PCW, TCW0, TCW1, TSP0, TSP1, isp_tsp, pcw, tcw, tsp};

// Default parameter control words, indexed by header type. OR in the list
// bits and the word is complete.
const PCW_POLY: u32 =
    pcw::TYPE_POLYGON | pcw::UPDATE_GROUP_ON | pcw::STRIP_LENGTH_2 | pcw::SHADING_GOURAUD;
const PCW_SPRITE: u32 =
    pcw::TYPE_SPRITE | pcw::UPDATE_GROUP_ON | pcw::STRIP_LENGTH_2 | pcw::SHADING_FLAT;
const PCW_SHADOW: u32 = pcw::MODIFIER_DISABLE | pcw::MODIFIER_TYPE_SHADOW;
const PCW_TWO_PARAM: u32 = pcw::MODIFIER_ENABLE | pcw::MODIFIER_TYPE_NORMAL;

#[rustfmt::skip]
const DEFAULT_PCW: [u32; 18] = [
    /* 00 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_DISABLE,
    /* 01 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_FLOAT | pcw::TEXTURE_DISABLE,
    /* 02 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_DISABLE,
    /* 03 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_ENABLE | pcw::UV_32BIT,
    /* 04 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 05 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_FLOAT | pcw::TEXTURE_ENABLE | pcw::UV_32BIT,
    /* 06 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_FLOAT | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 07 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_ENABLE | pcw::UV_32BIT,
    /* 08 */ PCW_POLY | PCW_SHADOW | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 09 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_DISABLE,
    /* 10 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_DISABLE,
    /* 11 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_ENABLE | pcw::UV_32BIT,
    /* 12 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 13 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_ENABLE | pcw::UV_32BIT,
    /* 14 */ PCW_POLY | PCW_TWO_PARAM | pcw::COLOR_TYPE_INTENSITY | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 15 */ PCW_SPRITE | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_DISABLE,
    /* 16 */ PCW_SPRITE | pcw::COLOR_TYPE_PACKED | pcw::TEXTURE_ENABLE | pcw::UV_16BIT,
    /* 17 */ pcw::TYPE_MODIFIER | pcw::MODIFIER_TRIANGLE,
];

// Default ISP/TSP words
const DEFAULT_ISP_TSP: u32 = isp_tsp::DEPTH_COMPARE_GREATER_OR_EQUAL
    | isp_tsp::CULL_MODE_NONE
    | isp_tsp::Z_WRITE_ENABLE
    | isp_tsp::DCALC_DISABLE;
const DEFAULT_ISP_TSP_MODIFIER: u32 =
    isp_tsp::VOLUME_INSTRUCTION_NORMAL | isp_tsp::CULL_MODE_NONE;

// Default TSP words
const TSP_COMMON: u32 = tsp::SRC_SELECT_DISABLE
    | tsp::DST_SELECT_DISABLE
    | tsp::FOG_MODE_DISABLE
    | tsp::COLOR_CLAMP_DISABLE
    | tsp::UV_FLIP_NONE
    | tsp::UV_CLAMP_NONE
    | tsp::TEXTURE_FILTER_POINT
    | tsp::SUPER_SAMPLING_DISABLE
    | tsp::MIPMAP_ADJUST_1_00;
const DEFAULT_TSP_ALPHA: u32 = TSP_COMMON
    | tsp::ALPHA_ENABLE
    | tsp::TEXTURE_ALPHA_ENABLE
    | tsp::SRC_ALPHA_INSTR_SRC_ALPHA
    | tsp::DST_ALPHA_INSTR_INVERSE_SRC_ALPHA
    | tsp::TEXTURE_INSTRUCTION_MODULATE_ALPHA;
const DEFAULT_TSP_OPAQUE: u32 = TSP_COMMON
    | tsp::ALPHA_DISABLE
    | tsp::TEXTURE_ALPHA_DISABLE
    | tsp::SRC_ALPHA_INSTR_ONE
    | tsp::DST_ALPHA_INSTR_ZERO
    | tsp::TEXTURE_INSTRUCTION_MODULATE;

/// A strip header for one of the 18 documented header types.
///
/// The six hardware words, the two float color records, and the packed
/// sprite color together describe everything the serializer emits. Which
/// pieces end up in the output stream depends on the type and the active
/// flags; see [`commit`](Self::commit).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StripHeader {
    pub(crate) kind: u32,
    pub(crate) words: [u32; 6],
    pub(crate) reserved: u32,
    /// Base color, [a, r, g, b].
    pub(crate) color0: [f32; 4],
    /// Offset color, or the secondary base color for two-parameter types.
    pub(crate) color1: [f32; 4],
    /// Sprite color in packed ARGB byte order.
    pub(crate) sprite_color: [u8; 4],
}

const _: () = assert!(core::mem::size_of::<StripHeader>() == 68);
const _: () = assert!(core::mem::align_of::<StripHeader>() == 4);

impl StripHeader {
    /// Build a header of the given type for the given submission list.
    ///
    /// Textured types may take their texture(s) here, or later through
    /// [`set_texture`](Self::set_texture); the secondary texture is only
    /// consulted for two-parameter types. Both color records start out
    /// opaque white.
    ///
    /// Fails with `InvalidType` for a type above 17, `InvalidList` when a
    /// modifier header is paired with a polygon list or vice versa, and
    /// `InvalidTextureSize` when a given texture has an unsupported
    /// dimension.
    pub fn new(
        kind: u32,
        list: List,
        tex0: Option<&TextureDescriptor>,
        tex1: Option<&TextureDescriptor>,
    ) -> Result<Self, StripError> {
        const OP: &str = "new";

        if kind > MAX_TYPE {
            return Err(report(StripError::InvalidType { op: OP }));
        }

        // Modifier volumes only need the control and instruction words.
        if kind == header_type::MODIFIER_VOLUME {
            if !list.is_modifier() {
                return Err(report(StripError::InvalidList { op: OP }));
            }

            let mut hdr = Self::zeroed();
            hdr.kind = kind;
            hdr.words[PCW] = DEFAULT_PCW[kind as usize] | list.pcw_bits();
            hdr.words[ISP_TSP] = DEFAULT_ISP_TSP_MODIFIER;
            log::debug!("created modifier volume header on {list:?}");
            return Ok(hdr);
        }

        // Polygons and sprites need a non-modifier list.
        if list.is_modifier() {
            return Err(report(StripError::InvalidList { op: OP }));
        }

        let mut hdr = Self::zeroed();
        hdr.kind = kind;
        hdr.words[PCW] = DEFAULT_PCW[kind as usize] | list.pcw_bits();
        hdr.words[ISP_TSP] = DEFAULT_ISP_TSP;

        let two_param =
            hdr.words[PCW] & pcw::MODIFIER_TYPE_MASK == pcw::MODIFIER_TYPE_NORMAL;
        let textured = hdr.words[PCW] & pcw::TEXTURE_MASK == pcw::TEXTURE_ENABLE;

        hdr.words[TSP0] = if list.has_translucency() {
            DEFAULT_TSP_ALPHA
        } else {
            DEFAULT_TSP_OPAQUE
        };
        hdr.words[TSP1] = if two_param { hdr.words[TSP0] } else { 0 };

        if textured {
            hdr.set_texture(tex0)?;
            if two_param {
                hdr.set_texture_secondary(tex1)?;
            } else {
                hdr.words[TCW1] = 0;
            }
        } else {
            hdr.words[TCW0] = 0;
            hdr.words[TCW1] = 0;
        }

        hdr.reserved = 0;
        hdr.color0 = [1.0; 4];
        hdr.color1 = [1.0; 4];

        log::debug!("created type {kind} header on {list:?}");
        Ok(hdr)
    }

    /// The header type, fixed at creation.
    pub fn kind(&self) -> u32 {
        self.kind
    }

    /// Read-only view of the six hardware words.
    pub fn words(&self) -> [u32; 6] {
        self.words
    }

    /// Set a boolean field: clear `mask` in `word`, then OR in `on` or
    /// `off`. The whole operation is refused before any mutation if the
    /// header type is out of range or outside `allowed`.
    fn set_flag(
        &mut self,
        op: &'static str,
        enabled: bool,
        word: usize,
        allowed: TypeGroup,
        mask: u32,
        on: u32,
        off: u32,
    ) -> Result<(), StripError> {
        if self.kind > MAX_TYPE {
            return Err(report(StripError::InvalidType { op }));
        }
        if !allowed.allows(self.kind) {
            return Err(report(StripError::NotAllowed { op }));
        }

        self.words[word] &= !mask;
        self.words[word] |= if enabled { on } else { off };
        Ok(())
    }

    /// Set a generic field: clear `mask` in `word`, then OR in
    /// `(value << shift) & mask`. Values wider than the field are
    /// truncated by the mask. Same validation as [`set_flag`].
    fn set_field(
        &mut self,
        op: &'static str,
        word: usize,
        allowed: TypeGroup,
        mask: u32,
        shift: u32,
        value: u32,
    ) -> Result<(), StripError> {
        if self.kind > MAX_TYPE {
            return Err(report(StripError::InvalidType { op }));
        }
        if !allowed.allows(self.kind) {
            return Err(report(StripError::NotAllowed { op }));
        }

        self.words[word] &= !mask;
        self.words[word] |= (value << shift) & mask;
        Ok(())
    }

    fn set_capability(
        &mut self,
        op: &'static str,
        cap: Capability,
        enabled: bool,
    ) -> Result<(), StripError> {
        let spec = cap.spec();
        self.set_flag(
            op,
            enabled,
            spec.word,
            spec.allowed,
            spec.mask,
            spec.enabled,
            spec.disabled,
        )
    }

    /// Enable a capability. Works like `glEnable`.
    pub fn enable(&mut self, cap: Capability) -> Result<(), StripError> {
        self.set_capability("enable", cap, true)
    }

    /// Disable a capability. Works like `glDisable`.
    pub fn disable(&mut self, cap: Capability) -> Result<(), StripError> {
        self.set_capability("disable", cap, false)
    }

    /// Set the face culling mode. Valid for all types.
    pub fn set_cull_mode(&mut self, mode: CullMode) -> Result<(), StripError> {
        self.set_field(
            "set_cull_mode",
            ISP_TSP,
            TypeGroup::ALL,
            isp_tsp::CULL_MODE_MASK,
            isp_tsp::CULL_MODE_SHIFT,
            mode as u32,
        )
    }

    /// Set the fog mode. Valid for polygon and sprite types.
    pub fn set_fog_mode(&mut self, mode: FogMode) -> Result<(), StripError> {
        self.set_field(
            "set_fog_mode",
            TSP0,
            TypeGroup::POLY_SPRITE,
            tsp::FOG_MODE_MASK,
            tsp::FOG_MODE_SHIFT,
            mode as u32,
        )
    }

    /// Secondary-area fog mode for two-parameter types.
    pub fn set_fog_mode_secondary(&mut self, mode: FogMode) -> Result<(), StripError> {
        self.set_field(
            "set_fog_mode_secondary",
            TSP1,
            TypeGroup::TWO_PARAM,
            tsp::FOG_MODE_MASK,
            tsp::FOG_MODE_SHIFT,
            mode as u32,
        )
    }

    /// Set the mipmap D-adjust. Valid for textured types.
    pub fn set_mipmap_adjust(&mut self, adjust: MipmapAdjust) -> Result<(), StripError> {
        self.set_field(
            "set_mipmap_adjust",
            TSP0,
            TypeGroup::TEXTURED,
            tsp::MIPMAP_ADJUST_MASK,
            tsp::MIPMAP_ADJUST_SHIFT,
            adjust as u32,
        )
    }

    /// Secondary-area mipmap D-adjust for textured two-parameter types.
    pub fn set_mipmap_adjust_secondary(
        &mut self,
        adjust: MipmapAdjust,
    ) -> Result<(), StripError> {
        self.set_field(
            "set_mipmap_adjust_secondary",
            TSP1,
            TypeGroup::TEXTURED_TWO_PARAM,
            tsp::MIPMAP_ADJUST_MASK,
            tsp::MIPMAP_ADJUST_SHIFT,
            adjust as u32,
        )
    }

    /// Set the source and destination blend functions. Valid for polygon
    /// and sprite types.
    pub fn set_blend_func(
        &mut self,
        src: BlendFunc,
        dst: BlendFunc,
    ) -> Result<(), StripError> {
        const OP: &str = "set_blend_func";
        self.set_field(
            OP,
            TSP0,
            TypeGroup::POLY_SPRITE,
            tsp::SRC_ALPHA_INSTR_MASK,
            tsp::SRC_ALPHA_INSTR_SHIFT,
            src as u32,
        )?;
        self.set_field(
            OP,
            TSP0,
            TypeGroup::POLY_SPRITE,
            tsp::DST_ALPHA_INSTR_MASK,
            tsp::DST_ALPHA_INSTR_SHIFT,
            dst as u32,
        )
    }

    /// Secondary-area blend functions for two-parameter types.
    pub fn set_blend_func_secondary(
        &mut self,
        src: BlendFunc,
        dst: BlendFunc,
    ) -> Result<(), StripError> {
        const OP: &str = "set_blend_func_secondary";
        self.set_field(
            OP,
            TSP1,
            TypeGroup::TWO_PARAM,
            tsp::SRC_ALPHA_INSTR_MASK,
            tsp::SRC_ALPHA_INSTR_SHIFT,
            src as u32,
        )?;
        self.set_field(
            OP,
            TSP1,
            TypeGroup::TWO_PARAM,
            tsp::DST_ALPHA_INSTR_MASK,
            tsp::DST_ALPHA_INSTR_SHIFT,
            dst as u32,
        )
    }

    /// Set the texture filter. Valid for textured types.
    pub fn set_texture_filter(&mut self, filter: TextureFilter) -> Result<(), StripError> {
        self.set_field(
            "set_texture_filter",
            TSP0,
            TypeGroup::TEXTURED,
            tsp::TEXTURE_FILTER_MASK,
            tsp::TEXTURE_FILTER_SHIFT,
            filter as u32,
        )
    }

    /// Secondary-area texture filter for textured two-parameter types.
    pub fn set_texture_filter_secondary(
        &mut self,
        filter: TextureFilter,
    ) -> Result<(), StripError> {
        self.set_field(
            "set_texture_filter_secondary",
            TSP1,
            TypeGroup::TEXTURED_TWO_PARAM,
            tsp::TEXTURE_FILTER_MASK,
            tsp::TEXTURE_FILTER_SHIFT,
            filter as u32,
        )
    }

    /// Set the modifier volume instruction. Only valid for type 17.
    ///
    /// Writes both the volume instruction field and the last-triangle
    /// flag in the control word.
    pub fn set_modifier_instruction(
        &mut self,
        instr: ModifierInstruction,
    ) -> Result<(), StripError> {
        const OP: &str = "set_modifier_instruction";
        self.set_flag(
            OP,
            instr != ModifierInstruction::Normal,
            PCW,
            TypeGroup::MODIFIER,
            pcw::MODIFIER_TRIANGLE_MASK,
            pcw::MODIFIER_TRIANGLE_LAST,
            pcw::MODIFIER_TRIANGLE,
        )?;
        self.set_field(
            OP,
            ISP_TSP,
            TypeGroup::MODIFIER,
            isp_tsp::VOLUME_INSTRUCTION_MASK,
            isp_tsp::VOLUME_INSTRUCTION_SHIFT,
            instr as u32,
        )
    }

    /// Select the hardware palette for the primary texture.
    ///
    /// Only valid while the bound texture is paletted: indices 0..=63 for
    /// 4bpp, 0..=3 for 8bpp.
    pub fn set_palette(&mut self, index: u32) -> Result<(), StripError> {
        self.palette_impl("set_palette", TCW0, TypeGroup::TEXTURED, index)
    }

    /// Select the hardware palette for the secondary texture of a
    /// two-parameter header.
    pub fn set_palette_secondary(&mut self, index: u32) -> Result<(), StripError> {
        self.palette_impl(
            "set_palette_secondary",
            TCW1,
            TypeGroup::TEXTURED_TWO_PARAM,
            index,
        )
    }

    fn palette_impl(
        &mut self,
        op: &'static str,
        tcw_word: usize,
        allowed: TypeGroup,
        index: u32,
    ) -> Result<(), StripError> {
        // The palette layout follows the primary texture's pixel format.
        match self.words[TCW0] & tcw::PIXEL_FORMAT_MASK {
            tcw::PIXEL_FORMAT_PAL_4BPP => {
                if index >= 64 {
                    return Err(report(StripError::PaletteOutOfBounds { op }));
                }
                self.set_field(
                    op,
                    tcw_word,
                    allowed,
                    tcw::PALETTE_INDEX_4BPP_MASK,
                    tcw::PALETTE_INDEX_4BPP_SHIFT,
                    index,
                )
            }
            tcw::PIXEL_FORMAT_PAL_8BPP => {
                if index >= 4 {
                    return Err(report(StripError::PaletteOutOfBounds { op }));
                }
                self.set_field(
                    op,
                    tcw_word,
                    allowed,
                    tcw::PALETTE_INDEX_8BPP_MASK,
                    tcw::PALETTE_INDEX_8BPP_SHIFT,
                    index,
                )
            }
            _ => Err(report(StripError::NotPaletted { op })),
        }
    }

    /// Bind or unbind the primary texture. Valid for textured types.
    ///
    /// `None` clears the texture state. On an `InvalidTextureSize` error
    /// the size and control bits have already been cleared; rebind a
    /// valid texture before using the header.
    pub fn set_texture(&mut self, tex: Option<&TextureDescriptor>) -> Result<(), StripError> {
        self.bind_texture("set_texture", TSP0, TCW0, TypeGroup::TEXTURED, tex)
    }

    /// Bind or unbind the secondary texture of a two-parameter header.
    pub fn set_texture_secondary(
        &mut self,
        tex: Option<&TextureDescriptor>,
    ) -> Result<(), StripError> {
        self.bind_texture(
            "set_texture_secondary",
            TSP1,
            TCW1,
            TypeGroup::TEXTURED_TWO_PARAM,
            tex,
        )
    }

    fn bind_texture(
        &mut self,
        op: &'static str,
        tsp_word: usize,
        tcw_word: usize,
        allowed: TypeGroup,
        tex: Option<&TextureDescriptor>,
    ) -> Result<(), StripError> {
        if !allowed.allows(self.kind) {
            return Err(report(StripError::NotAllowed { op }));
        }

        // Unconditional clear; a size rejection below leaves this state.
        self.words[tsp_word] &= !(tsp::TEXTURE_U_SIZE_MASK | tsp::TEXTURE_V_SIZE_MASK);
        self.words[tcw_word] = 0;

        let Some(tex) = tex else {
            return Ok(());
        };

        let u_code = size_code(tex.width)
            .ok_or_else(|| report(StripError::InvalidTextureSize { op }))?;
        let v_code = size_code(tex.height)
            .ok_or_else(|| report(StripError::InvalidTextureSize { op }))?;
        self.words[tsp_word] |=
            (u_code << tsp::TEXTURE_U_SIZE_SHIFT) | (v_code << tsp::TEXTURE_V_SIZE_SHIFT);

        let mut control = 0u32;
        control |= if tex.flags.contains(TextureFlags::MIPMAPPED) {
            tcw::MIPMAP_ENABLED
        } else {
            tcw::MIPMAP_DISABLED
        };
        control |= if tex.flags.contains(TextureFlags::COMPRESSED) {
            tcw::VQ_COMPRESSED_ENABLED
        } else {
            tcw::VQ_COMPRESSED_DISABLED
        };
        control |= tex.format.tcw_bits();

        if !tex.format.is_paletted() {
            // Paletted textures are always twiddled and never strided:
            // those bits hold the palette index instead.
            control |= if tex.flags.contains(TextureFlags::TWIDDLED) {
                tcw::TWIDDLED_ENABLED
            } else {
                tcw::TWIDDLED_DISABLED
            };
            control |= tcw::STRIDE_DISABLED;
        }

        control |= tcw::address_bits(tex.address);
        self.words[tcw_word] |= control;
        Ok(())
    }

    /// Set the base color. Valid for intensity color polygons and
    /// sprites. Channel order is a, r, g, b.
    pub fn set_base_color(&mut self, a: f32, r: f32, g: f32, b: f32) -> Result<(), StripError> {
        if TypeGroup::INTENSITY.union(TypeGroup::SPRITE).allows(self.kind) {
            self.color0 = [a, r, g, b];
            return Ok(());
        }
        Err(report(StripError::NotAllowed { op: "set_base_color" }))
    }

    /// Set the secondary base color of a two-parameter intensity header.
    pub fn set_base_color_secondary(
        &mut self,
        a: f32,
        r: f32,
        g: f32,
        b: f32,
    ) -> Result<(), StripError> {
        if TypeGroup::INTENSITY
            .intersection(TypeGroup::TWO_PARAM)
            .allows(self.kind)
        {
            self.color1 = [a, r, g, b];
            return Ok(());
        }
        Err(report(StripError::NotAllowed {
            op: "set_base_color_secondary",
        }))
    }

    /// Set the offset color. Valid for textured intensity polygons and
    /// textured sprites, but not for two-parameter types, where the
    /// second color record holds the secondary base color instead.
    pub fn set_offset_color(
        &mut self,
        a: f32,
        r: f32,
        g: f32,
        b: f32,
    ) -> Result<(), StripError> {
        let allowed = TypeGroup::INTENSITY
            .union(TypeGroup::SPRITE)
            .intersection(TypeGroup::TEXTURED);
        if allowed.allows(self.kind) && !TypeGroup::TWO_PARAM.allows(self.kind) {
            self.color1 = [a, r, g, b];
            return Ok(());
        }
        Err(report(StripError::NotAllowed {
            op: "set_offset_color",
        }))
    }

    /// Store the sprite color, given in RGBA byte order.
    ///
    /// The color is stored unconditionally and only serialized for the
    /// sprite types.
    pub fn set_sprite_color(&mut self, rgba: [u8; 4]) {
        self.sprite_color = [rgba[3], rgba[0], rgba[1], rgba[2]];
    }
}
