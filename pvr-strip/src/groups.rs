//! Header type classification.
//!
//! The 18 header types are grouped into overlapping capability sets. Every
//! mutating operation names the set of types it is valid for, and the
//! setter primitives gate on membership before touching any word.

use bitflags::bitflags;

/// Largest valid header type value.
pub const MAX_TYPE: u32 = 17;

/// Named constants for the 18 header types.
///
/// | Type | Primitive | Color     | Modifier kind | Textured | 32-bit UV |
/// |------|-----------|-----------|---------------|----------|-----------|
/// | 0    | Polygon   | Packed    | Shadow        | No       | -         |
/// | 1    | Polygon   | Float     | Shadow        | No       | -         |
/// | 2    | Polygon   | Intensity | Shadow        | No       | -         |
/// | 3    | Polygon   | Packed    | Shadow        | Yes      | Yes       |
/// | 4    | Polygon   | Packed    | Shadow        | Yes      | No        |
/// | 5    | Polygon   | Float     | Shadow        | Yes      | Yes       |
/// | 6    | Polygon   | Float     | Shadow        | Yes      | No        |
/// | 7    | Polygon   | Intensity | Shadow        | Yes      | Yes       |
/// | 8    | Polygon   | Intensity | Shadow        | Yes      | No        |
/// | 9    | Polygon   | Packed    | Two-parameter | No       | -         |
/// | 10   | Polygon   | Intensity | Two-parameter | No       | -         |
/// | 11   | Polygon   | Packed    | Two-parameter | Yes      | Yes       |
/// | 12   | Polygon   | Packed    | Two-parameter | Yes      | No        |
/// | 13   | Polygon   | Intensity | Two-parameter | Yes      | Yes       |
/// | 14   | Polygon   | Intensity | Two-parameter | Yes      | No        |
/// | 15   | Sprite    | Packed    | -             | No       | -         |
/// | 16   | Sprite    | Packed    | -             | Yes      | No        |
/// | 17   | Modifier  | -         | -             | -        | -         |
pub mod header_type {
    pub const POLY_PACKED: u32 = 0;
    pub const POLY_FLOAT: u32 = 1;
    pub const POLY_INTENSITY: u32 = 2;
    pub const POLY_PACKED_TEX: u32 = 3;
    pub const POLY_PACKED_TEX_UV16: u32 = 4;
    pub const POLY_FLOAT_TEX: u32 = 5;
    pub const POLY_FLOAT_TEX_UV16: u32 = 6;
    pub const POLY_INTENSITY_TEX: u32 = 7;
    pub const POLY_INTENSITY_TEX_UV16: u32 = 8;
    pub const POLY_PACKED_2P: u32 = 9;
    pub const POLY_INTENSITY_2P: u32 = 10;
    pub const POLY_PACKED_TEX_2P: u32 = 11;
    pub const POLY_PACKED_TEX_UV16_2P: u32 = 12;
    pub const POLY_INTENSITY_TEX_2P: u32 = 13;
    pub const POLY_INTENSITY_TEX_UV16_2P: u32 = 14;
    pub const SPRITE: u32 = 15;
    pub const SPRITE_TEX: u32 = 16;
    pub const MODIFIER_VOLUME: u32 = 17;
}

bitflags! {
    /// A set of header types, one bit per type value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeGroup: u32 {
        /// All polygon types (0-14).
        const POLYGON = 0x7FFF;
        /// Sprite types (15-16).
        const SPRITE = (1 << 15) | (1 << 16);
        /// The modifier volume type (17).
        const MODIFIER = 1 << 17;
        /// Polygons and sprites.
        const POLY_SPRITE = Self::POLYGON.bits() | Self::SPRITE.bits();
        /// Every header type.
        const ALL = Self::POLY_SPRITE.bits() | Self::MODIFIER.bits();
        /// Textured types.
        const TEXTURED = (1 << 3) | (1 << 4) | (1 << 5) | (1 << 6) | (1 << 7) | (1 << 8)
            | (1 << 11) | (1 << 12) | (1 << 13) | (1 << 14) | (1 << 16);
        /// Types affected by cheap shadow modifiers (0-8).
        const SHADOW = 0x01FF;
        /// Types carrying two-parameter modifier state (9-14).
        const TWO_PARAM = (1 << 9) | (1 << 10) | (1 << 11) | (1 << 12) | (1 << 13) | (1 << 14);
        /// Textured two-parameter types.
        const TEXTURED_TWO_PARAM = Self::TWO_PARAM.bits() & Self::TEXTURED.bits();
        /// Intensity color types.
        const INTENSITY = (1 << 2) | (1 << 7) | (1 << 8) | (1 << 10) | (1 << 13) | (1 << 14);
    }
}

impl TypeGroup {
    /// Whether `header_type` belongs to this group.
    ///
    /// Values above [`MAX_TYPE`] are never members.
    #[inline]
    pub const fn allows(self, header_type: u32) -> bool {
        header_type <= MAX_TYPE && self.bits() & (1 << header_type) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(group: TypeGroup) -> Vec<u32> {
        (0..=MAX_TYPE).filter(|&t| group.allows(t)).collect()
    }

    #[test]
    fn test_group_membership() {
        assert_eq!(members(TypeGroup::POLYGON), (0..=14).collect::<Vec<_>>());
        assert_eq!(members(TypeGroup::SPRITE), vec![15, 16]);
        assert_eq!(members(TypeGroup::MODIFIER), vec![17]);
        assert_eq!(members(TypeGroup::SHADOW), (0..=8).collect::<Vec<_>>());
        assert_eq!(members(TypeGroup::TWO_PARAM), (9..=14).collect::<Vec<_>>());
        assert_eq!(
            members(TypeGroup::TEXTURED),
            vec![3, 4, 5, 6, 7, 8, 11, 12, 13, 14, 16]
        );
        assert_eq!(members(TypeGroup::TEXTURED_TWO_PARAM), vec![11, 12, 13, 14]);
        assert_eq!(members(TypeGroup::INTENSITY), vec![2, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn test_all_covers_every_type() {
        for t in 0..=MAX_TYPE {
            assert!(TypeGroup::ALL.allows(t));
        }
    }

    #[test]
    fn test_out_of_range_is_never_member() {
        assert!(!TypeGroup::ALL.allows(18));
        assert!(!TypeGroup::ALL.allows(31));
        assert!(!TypeGroup::ALL.allows(u32::MAX));
    }

    #[test]
    fn test_derived_group_composition() {
        assert_eq!(
            TypeGroup::POLY_SPRITE,
            TypeGroup::POLYGON.union(TypeGroup::SPRITE)
        );
        assert_eq!(
            TypeGroup::TEXTURED_TWO_PARAM,
            TypeGroup::TWO_PARAM.intersection(TypeGroup::TEXTURED)
        );
    }
}
