//! Value enums for the mode setters.
//!
//! Discriminants are the raw hardware field values and are shifted into
//! place by the generic setter.

/// Submission list a header is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum List {
    OpaquePolygon = 0,
    OpaqueModifier = 1,
    TranslucentPolygon = 2,
    TranslucentModifier = 3,
    PunchThroughPolygon = 4,
}

impl List {
    /// Whether this is one of the two modifier lists.
    pub fn is_modifier(self) -> bool {
        matches!(self, List::OpaqueModifier | List::TranslucentModifier)
    }

    /// Whether geometry on this list goes through alpha processing.
    /// Punch-through counts: it blends against texture alpha.
    pub fn has_translucency(self) -> bool {
        self as u32 > List::OpaqueModifier as u32
    }

    /// The list bits for the parameter control word.
    pub(crate) fn pcw_bits(self) -> u32 {
        (self as u32) << crate::words::pcw::LIST_SHIFT
    }
}

/// Face culling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum CullMode {
    #[default]
    None = 0,
    Small = 1,
    CounterClockwise = 2,
    Clockwise = 3,
}

/// Fog mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum FogMode {
    LookupTable = 0,
    PerVertex = 1,
    #[default]
    Disable = 2,
    LookupTable2 = 3,
}

/// Mipmap D-adjust factor, in steps of 0.25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum MipmapAdjust {
    Adjust0_25 = 1,
    Adjust0_50 = 2,
    Adjust0_75 = 3,
    #[default]
    Adjust1_00 = 4,
    Adjust1_25 = 5,
    Adjust1_50 = 6,
    Adjust1_75 = 7,
    Adjust2_00 = 8,
    Adjust2_25 = 9,
    Adjust2_50 = 10,
    Adjust2_75 = 11,
    Adjust3_00 = 12,
    Adjust3_25 = 13,
    Adjust3_50 = 14,
    Adjust3_75 = 15,
}

/// Blend function for the source or destination alpha instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum BlendFunc {
    Zero = 0,
    One = 1,
    DstColor = 2,
    InverseDstColor = 3,
    SrcAlpha = 4,
    InverseSrcAlpha = 5,
    DstAlpha = 6,
    InverseDstAlpha = 7,
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum TextureFilter {
    #[default]
    Point = 0,
    Bilinear = 1,
    TrilinearPassA = 2,
    TrilinearPassB = 3,
}

/// Modifier volume instruction (type 17 only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum ModifierInstruction {
    #[default]
    Normal = 0,
    InsideLast = 1,
    OutsideLast = 2,
}
