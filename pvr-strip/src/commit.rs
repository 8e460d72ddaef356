//! Serialization of a header into a command stream.
//!
//! Every header serializes to 8 or 16 words and is written against the
//! *end* of the destination slice, so a caller maintaining a downward
//! cursor into a command buffer can pass the unwritten prefix and shrink
//! it by the returned count.

use crate::groups::{MAX_TYPE, header_type};
use crate::header::StripHeader;
use crate::words::{ISP_TSP, PCW, TCW0, TCW1, TSP0, TSP1, pcw};

impl StripHeader {
    /// Number of words [`commit`](Self::commit) will write.
    ///
    /// 16 for the intensity color layouts that carry inline color records
    /// after a two-parameter or offset-enabled control block, 8 for
    /// everything else. Reusing a previous intensity color drops the
    /// records and the count back to 8.
    pub fn serialized_len(&self) -> usize {
        let intensity =
            self.words[PCW] & pcw::COLOR_TYPE_MASK == pcw::COLOR_TYPE_INTENSITY;
        match self.kind {
            header_type::POLY_INTENSITY_TEX | header_type::POLY_INTENSITY_TEX_UV16 => {
                let offset =
                    self.words[PCW] & pcw::OFFSET_COLOR_MASK == pcw::OFFSET_COLOR_ENABLE;
                if intensity && offset { 16 } else { 8 }
            }
            header_type::POLY_INTENSITY_2P
            | header_type::POLY_INTENSITY_TEX_2P
            | header_type::POLY_INTENSITY_TEX_UV16_2P => {
                if intensity { 16 } else { 8 }
            }
            _ => 8,
        }
    }

    /// Serialize the header into the tail of `out` and return the number
    /// of words written.
    ///
    /// The words land in `out[out.len() - n..]` in stream order, control
    /// quartet first. Returns 0 without writing for a corrupted header
    /// type.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`serialized_len`](Self::serialized_len).
    pub fn commit(&self, out: &mut [u32]) -> usize {
        if self.kind > MAX_TYPE {
            log::warn!("commit: refusing corrupted header type {}", self.kind);
            return 0;
        }

        let count = self.serialized_len();
        assert!(
            out.len() >= count,
            "commit: need {count} words, have {}",
            out.len()
        );

        let base = out.len() - count;
        let out = &mut out[base..];
        out[0] = self.words[PCW];
        out[1] = self.words[ISP_TSP];
        out[2] = self.words[TSP0];
        out[3] = self.words[TCW0];

        match self.kind {
            // Untextured intensity: the face color rides in the header block
            header_type::POLY_INTENSITY => {
                write_color(&mut out[4..8], self.color0);
            }

            // Textured intensity shadow polygons: face color, plus the
            // offset color when the 16-word layout is active
            header_type::POLY_INTENSITY_TEX | header_type::POLY_INTENSITY_TEX_UV16 => {
                if count == 16 {
                    out[4..8].fill(0);
                    write_color(&mut out[8..12], self.color0);
                    write_color(&mut out[12..16], self.color1);
                } else {
                    write_color(&mut out[4..8], self.color0);
                }
            }

            // Two-parameter types carry the secondary TSP/TCW pair;
            // intensity variants append both area colors
            header_type::POLY_PACKED_2P
            | header_type::POLY_PACKED_TEX_2P
            | header_type::POLY_PACKED_TEX_UV16_2P => {
                out[4] = self.words[TSP1];
                out[5] = self.words[TCW1];
                out[6] = 0;
                out[7] = 0;
            }
            header_type::POLY_INTENSITY_2P
            | header_type::POLY_INTENSITY_TEX_2P
            | header_type::POLY_INTENSITY_TEX_UV16_2P => {
                out[4] = self.words[TSP1];
                out[5] = self.words[TCW1];
                out[6] = 0;
                out[7] = 0;
                if count == 16 {
                    write_color(&mut out[8..12], self.color0);
                    write_color(&mut out[12..16], self.color1);
                }
            }

            // Sprites carry the packed base color; the textured variant
            // repeats it in the offset color slot
            header_type::SPRITE => {
                out[4] = self.packed_sprite_color();
                out[5..8].fill(0);
            }
            header_type::SPRITE_TEX => {
                let packed = self.packed_sprite_color();
                out[4] = packed;
                out[5] = packed;
                out[6] = 0;
                out[7] = 0;
            }

            // Everything else pads the block with zeros
            _ => out[4..8].fill(0),
        }

        count
    }

    fn packed_sprite_color(&self) -> u32 {
        let [a, r, g, b] = self.sprite_color;
        (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }
}

fn write_color(out: &mut [u32], color: [f32; 4]) {
    for (slot, channel) in out.iter_mut().zip(color) {
        *slot = channel.to_bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::modes::List;
    use crate::texture::{PixelFormat, TextureDescriptor, TextureFlags};

    fn commit_all(hdr: &StripHeader) -> (Vec<u32>, usize) {
        let mut buf = vec![0xDEAD_BEEF; 32];
        let n = hdr.commit(&mut buf);
        (buf, n)
    }

    fn list_for(kind: u32) -> List {
        if kind == 17 { List::OpaqueModifier } else { List::OpaquePolygon }
    }

    #[test]
    fn test_word_counts_for_all_types() {
        for kind in 0..=17 {
            let hdr = StripHeader::new(kind, list_for(kind), None, None).unwrap();
            let expected = match kind {
                10 | 13 | 14 => 16,
                _ => 8,
            };
            assert_eq!(hdr.serialized_len(), expected, "type {kind}");
            let (_, n) = commit_all(&hdr);
            assert_eq!(n, expected, "type {kind}");
        }
    }

    #[test]
    fn test_writes_against_slice_tail() {
        let hdr = StripHeader::new(0, List::OpaquePolygon, None, None).unwrap();
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        // Everything before the tail is untouched
        assert!(buf[..24].iter().all(|&w| w == 0xDEAD_BEEF));
        // Control quartet at the start of the written block
        assert_eq!(buf[24], hdr.words()[0]);
        assert_eq!(buf[25], hdr.words()[1]);
        assert_eq!(buf[26], hdr.words()[2]);
        assert_eq!(buf[27], hdr.words()[3]);
        assert_eq!(&buf[28..32], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_exact_fit_buffer() {
        let hdr = StripHeader::new(0, List::OpaquePolygon, None, None).unwrap();
        let mut buf = [0u32; 8];
        assert_eq!(hdr.commit(&mut buf), 8);
        assert_eq!(buf[0], hdr.words()[0]);
    }

    #[test]
    #[should_panic(expected = "need 8 words")]
    fn test_short_buffer_panics() {
        let hdr = StripHeader::new(0, List::OpaquePolygon, None, None).unwrap();
        let mut buf = [0u32; 7];
        hdr.commit(&mut buf);
    }

    #[test]
    fn test_textured_packed_polygon_stream() {
        let tex = TextureDescriptor {
            width: 64,
            height: 128,
            format: PixelFormat::Rgb565,
            flags: TextureFlags::TWIDDLED,
            address: 0x0025_8000,
        };
        let hdr = StripHeader::new(3, List::OpaquePolygon, Some(&tex), None).unwrap();
        let mut buf = [0u32; 8];
        assert_eq!(hdr.commit(&mut buf), 8);
        assert_eq!(buf[0], 0x8084_000A);
        assert_eq!(buf[1], 0xC000_0000);
        assert_eq!(buf[2], 0x2088_045C);
        assert_eq!(buf[3], 0x0804_B000);
        assert_eq!(&buf[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_float_color_stream() {
        let mut hdr = StripHeader::new(1, List::OpaquePolygon, None, None).unwrap();
        // Type 1 is float colored and not intensity; the color record is
        // part of the vertex data, not the header
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        assert_eq!(&buf[28..32], &[0, 0, 0, 0]);

        // Type 2 embeds the face color as floats
        hdr = StripHeader::new(2, List::OpaquePolygon, None, None).unwrap();
        hdr.set_base_color(1.0, 0.5, 0.25, 0.0).unwrap();
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        assert_eq!(buf[28], 1.0f32.to_bits());
        assert_eq!(buf[29], 0.5f32.to_bits());
        assert_eq!(buf[30], 0.25f32.to_bits());
        assert_eq!(buf[31], 0.0f32.to_bits());
    }

    #[test]
    fn test_intensity_offset_layout() {
        let mut hdr = StripHeader::new(7, List::OpaquePolygon, None, None).unwrap();
        assert_eq!(hdr.serialized_len(), 8);

        hdr.enable(Capability::OffsetColor).unwrap();
        hdr.set_base_color(1.0, 0.5, 0.5, 0.5).unwrap();
        hdr.set_offset_color(0.0, 0.1, 0.2, 0.3).unwrap();
        assert_eq!(hdr.serialized_len(), 16);

        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 16);
        let block = &buf[16..32];
        assert_eq!(block[0], hdr.words()[0]);
        assert_eq!(&block[4..8], &[0, 0, 0, 0]);
        assert_eq!(block[8], 1.0f32.to_bits());
        assert_eq!(block[9], 0.5f32.to_bits());
        assert_eq!(block[12], 0.0f32.to_bits());
        assert_eq!(block[15], 0.3f32.to_bits());

        hdr.disable(Capability::OffsetColor).unwrap();
        assert_eq!(hdr.serialized_len(), 8);
    }

    #[test]
    fn test_two_param_packed_layout() {
        let hdr = StripHeader::new(9, List::OpaquePolygon, None, None).unwrap();
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        let block = &buf[24..32];
        assert_eq!(block[4], hdr.words()[4]);
        assert_eq!(block[5], hdr.words()[5]);
        assert_eq!(&block[6..8], &[0, 0]);
    }

    #[test]
    fn test_two_param_intensity_layout() {
        let mut hdr = StripHeader::new(10, List::OpaquePolygon, None, None).unwrap();
        hdr.set_base_color(1.0, 1.0, 0.0, 0.0).unwrap();
        hdr.set_base_color_secondary(1.0, 0.0, 1.0, 0.0).unwrap();

        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 16);
        let block = &buf[16..32];
        assert_eq!(block[4], hdr.words()[4]);
        assert_eq!(block[5], hdr.words()[5]);
        assert_eq!(block[9], 1.0f32.to_bits());
        assert_eq!(block[10], 0.0f32.to_bits());
        assert_eq!(block[14], 1.0f32.to_bits());
    }

    #[test]
    fn test_previous_color_shrinks_intensity_layout() {
        let mut hdr = StripHeader::new(10, List::OpaquePolygon, None, None).unwrap();
        assert_eq!(hdr.serialized_len(), 16);

        hdr.enable(Capability::UsePreviousColor).unwrap();
        assert_eq!(hdr.serialized_len(), 8);
        let (_, n) = commit_all(&hdr);
        assert_eq!(n, 8);

        hdr.disable(Capability::UsePreviousColor).unwrap();
        assert_eq!(hdr.serialized_len(), 16);
    }

    #[test]
    fn test_sprite_packed_color() {
        let mut hdr = StripHeader::new(15, List::OpaquePolygon, None, None).unwrap();
        hdr.set_sprite_color([0x11, 0x22, 0x33, 0x44]);
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        let block = &buf[24..32];
        // RGBA input packs as ARGB
        assert_eq!(block[4], 0x4411_2233);
        assert_eq!(&block[5..8], &[0, 0, 0]);
    }

    #[test]
    fn test_textured_sprite_repeats_packed_color() {
        let mut hdr = StripHeader::new(16, List::OpaquePolygon, None, None).unwrap();
        hdr.set_sprite_color([0xFF, 0x80, 0x40, 0xC0]);
        let (buf, _) = commit_all(&hdr);
        let block = &buf[24..32];
        assert_eq!(block[4], 0xC0FF_8040);
        assert_eq!(block[5], block[4]);
        assert_eq!(&block[6..8], &[0, 0]);
    }

    #[test]
    fn test_modifier_volume_stream() {
        let hdr = StripHeader::new(17, List::OpaqueModifier, None, None).unwrap();
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 8);
        let block = &buf[24..32];
        assert_eq!(block[0], 0x8100_0000);
        assert_eq!(&block[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_corrupted_type_writes_nothing() {
        let mut hdr = StripHeader::new(0, List::OpaquePolygon, None, None).unwrap();
        hdr.kind = 99;
        let (buf, n) = commit_all(&hdr);
        assert_eq!(n, 0);
        assert!(buf.iter().all(|&w| w == 0xDEAD_BEEF));
    }
}
