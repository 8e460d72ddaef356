//! Toggleable header capabilities.
//!
//! Each capability maps to exactly one flag-setter call: a target word, the
//! group of types that may touch it, a bit mask, and the enabled/disabled
//! field values. [`StripHeader::enable`](crate::StripHeader::enable) and
//! [`disable`](crate::StripHeader::disable) share this table.

use crate::error::{StripError, report};
use crate::groups::TypeGroup;
use crate::words::{ISP_TSP, PCW, TSP0, TSP1, isp_tsp, pcw, tsp};

/// A capability that can be enabled or disabled on a header.
///
/// `*Secondary` variants target the secondary TSP word and are only valid
/// for two-parameter polygon types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Capability {
    /// Polygon is affected by modifier volumes. Changeable for shadow
    /// types 0-8; mandatory (and untouchable) for two-parameter types.
    AffectedByModifier = 0,
    /// Gouraud shading. Polygon types.
    SmoothShading = 1,
    /// Offset color is valid and added to the base color. Textured types.
    OffsetColor = 2,
    /// Reuse the intensity color of a previous header. Intensity types.
    UsePreviousColor = 3,
    /// More precise mipmap D calculation. Textured types.
    DcalcControl = 4,
    /// Alpha processing. Polygon and sprite types.
    Alpha = 5,
    AlphaSecondary = 6,
    /// Blend reads from the secondary accumulation buffer.
    SrcSelect = 7,
    SrcSelectSecondary = 8,
    /// Blend writes to the secondary accumulation buffer.
    DstSelect = 9,
    DstSelectSecondary = 10,
    /// Texture alpha processing. Textured types.
    TextureAlpha = 11,
    TextureAlphaSecondary = 12,
    /// Texture super-sampling. Textured types.
    TextureSuperSampling = 13,
    TextureSuperSamplingSecondary = 14,
}

/// One row of the capability dispatch table.
pub(crate) struct CapabilitySpec {
    pub word: usize,
    pub allowed: TypeGroup,
    pub mask: u32,
    pub enabled: u32,
    pub disabled: u32,
}

impl Capability {
    /// Resolve a raw selector, for callers holding untyped capability ids.
    pub fn from_u32(value: u32) -> Result<Self, StripError> {
        const OP: &str = "capability_from_u32";
        match value {
            0 => Ok(Capability::AffectedByModifier),
            1 => Ok(Capability::SmoothShading),
            2 => Ok(Capability::OffsetColor),
            3 => Ok(Capability::UsePreviousColor),
            4 => Ok(Capability::DcalcControl),
            5 => Ok(Capability::Alpha),
            6 => Ok(Capability::AlphaSecondary),
            7 => Ok(Capability::SrcSelect),
            8 => Ok(Capability::SrcSelectSecondary),
            9 => Ok(Capability::DstSelect),
            10 => Ok(Capability::DstSelectSecondary),
            11 => Ok(Capability::TextureAlpha),
            12 => Ok(Capability::TextureAlphaSecondary),
            13 => Ok(Capability::TextureSuperSampling),
            14 => Ok(Capability::TextureSuperSamplingSecondary),
            _ => Err(report(StripError::InvalidCapability { op: OP })),
        }
    }

    pub(crate) fn spec(self) -> CapabilitySpec {
        match self {
            Capability::AffectedByModifier => CapabilitySpec {
                word: PCW,
                allowed: TypeGroup::SHADOW,
                mask: pcw::MODIFIER_MASK,
                enabled: pcw::MODIFIER_ENABLE,
                disabled: pcw::MODIFIER_DISABLE,
            },
            Capability::SmoothShading => CapabilitySpec {
                word: PCW,
                allowed: TypeGroup::POLYGON,
                mask: pcw::SHADING_MASK,
                enabled: pcw::SHADING_GOURAUD,
                disabled: pcw::SHADING_FLAT,
            },
            Capability::OffsetColor => CapabilitySpec {
                word: PCW,
                allowed: TypeGroup::TEXTURED,
                mask: pcw::OFFSET_COLOR_MASK,
                enabled: pcw::OFFSET_COLOR_ENABLE,
                disabled: pcw::OFFSET_COLOR_DISABLE,
            },
            Capability::UsePreviousColor => CapabilitySpec {
                word: PCW,
                allowed: TypeGroup::INTENSITY,
                mask: pcw::COLOR_TYPE_MASK,
                enabled: pcw::COLOR_TYPE_PREV_INTENSITY,
                disabled: pcw::COLOR_TYPE_INTENSITY,
            },
            Capability::DcalcControl => CapabilitySpec {
                word: ISP_TSP,
                allowed: TypeGroup::TEXTURED,
                mask: isp_tsp::DCALC_MASK,
                enabled: isp_tsp::DCALC_ENABLE,
                disabled: isp_tsp::DCALC_DISABLE,
            },
            Capability::Alpha => CapabilitySpec {
                word: TSP0,
                allowed: TypeGroup::POLY_SPRITE,
                mask: tsp::ALPHA_MASK,
                enabled: tsp::ALPHA_ENABLE,
                disabled: tsp::ALPHA_DISABLE,
            },
            Capability::AlphaSecondary => CapabilitySpec {
                word: TSP1,
                allowed: TypeGroup::TWO_PARAM,
                mask: tsp::ALPHA_MASK,
                enabled: tsp::ALPHA_ENABLE,
                disabled: tsp::ALPHA_DISABLE,
            },
            Capability::SrcSelect => CapabilitySpec {
                word: TSP0,
                allowed: TypeGroup::POLY_SPRITE,
                mask: tsp::SRC_SELECT_MASK,
                enabled: tsp::SRC_SELECT_ENABLE,
                disabled: tsp::SRC_SELECT_DISABLE,
            },
            Capability::SrcSelectSecondary => CapabilitySpec {
                word: TSP1,
                allowed: TypeGroup::TWO_PARAM,
                mask: tsp::SRC_SELECT_MASK,
                enabled: tsp::SRC_SELECT_ENABLE,
                disabled: tsp::SRC_SELECT_DISABLE,
            },
            Capability::DstSelect => CapabilitySpec {
                word: TSP0,
                allowed: TypeGroup::POLY_SPRITE,
                mask: tsp::DST_SELECT_MASK,
                enabled: tsp::DST_SELECT_ENABLE,
                disabled: tsp::DST_SELECT_DISABLE,
            },
            Capability::DstSelectSecondary => CapabilitySpec {
                word: TSP1,
                allowed: TypeGroup::TWO_PARAM,
                mask: tsp::DST_SELECT_MASK,
                enabled: tsp::DST_SELECT_ENABLE,
                disabled: tsp::DST_SELECT_DISABLE,
            },
            Capability::TextureAlpha => CapabilitySpec {
                word: TSP0,
                allowed: TypeGroup::TEXTURED,
                mask: tsp::TEXTURE_ALPHA_MASK,
                enabled: tsp::TEXTURE_ALPHA_ENABLE,
                disabled: tsp::TEXTURE_ALPHA_DISABLE,
            },
            Capability::TextureAlphaSecondary => CapabilitySpec {
                word: TSP1,
                allowed: TypeGroup::TEXTURED_TWO_PARAM,
                mask: tsp::TEXTURE_ALPHA_MASK,
                enabled: tsp::TEXTURE_ALPHA_ENABLE,
                disabled: tsp::TEXTURE_ALPHA_DISABLE,
            },
            Capability::TextureSuperSampling => CapabilitySpec {
                word: TSP0,
                allowed: TypeGroup::TEXTURED,
                mask: tsp::SUPER_SAMPLING_MASK,
                enabled: tsp::SUPER_SAMPLING_ENABLE,
                disabled: tsp::SUPER_SAMPLING_DISABLE,
            },
            Capability::TextureSuperSamplingSecondary => CapabilitySpec {
                word: TSP1,
                allowed: TypeGroup::TEXTURED_TWO_PARAM,
                mask: tsp::SUPER_SAMPLING_MASK,
                enabled: tsp::SUPER_SAMPLING_ENABLE,
                disabled: tsp::SUPER_SAMPLING_DISABLE,
            },
        }
    }
}
