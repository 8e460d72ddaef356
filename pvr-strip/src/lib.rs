//! Strip header generation for the Dreamcast PVR rendering pipeline.
//!
//! The tile accelerator consumes geometry as triangle strips, each strip
//! prefixed by a fixed-layout header block that selects the primitive
//! kind, submission list, blending, texturing, and modifier volume
//! behavior. This crate builds those blocks: create a [`StripHeader`] for
//! one of the 18 header types, configure it through validated setters,
//! and [`commit`](StripHeader::commit) it into a command stream.
//!
//! Headers fall into three primitive families:
//!
//! - **Polygons** (types 0-14), combining a color mode (packed, float,
//!   intensity) with optional texturing, 16/32-bit UVs, and either cheap
//!   shadow modifier behavior or full two-parameter modifier state.
//! - **Sprites** (types 15-16), flat-shaded packed-color quads.
//! - **Modifier volumes** (type 17), which carry no shading state at all.
//!
//! Every setter validates the header type against the group of types the
//! operation makes sense for and returns [`StripError`] on a mismatch, so
//! a header can never encode a word combination the hardware would
//! misparse. Headers are plain old data ([`bytemuck::Pod`]) and safe to
//! copy, pool, and reuse across frames.
//!
//! ```
//! use pvr_strip::{Capability, List, StripHeader};
//!
//! let mut hdr = StripHeader::new(0, List::TranslucentPolygon, None, None)?;
//! hdr.enable(Capability::SmoothShading)?;
//!
//! let mut stream = [0u32; 8];
//! let written = hdr.commit(&mut stream);
//! assert_eq!(written, 8);
//! # Ok::<(), pvr_strip::StripError>(())
//! ```

mod capability;
mod commit;
mod error;
mod groups;
mod header;
mod modes;
mod texture;
mod words;

pub use capability::Capability;
pub use error::{ErrorKind, StripError};
pub use groups::{MAX_TYPE, TypeGroup, header_type};
pub use header::StripHeader;
pub use modes::{
    BlendFunc, CullMode, FogMode, List, MipmapAdjust, ModifierInstruction, TextureFilter,
};
pub use texture::{PixelFormat, TextureDescriptor, TextureFlags};
pub use words::{ISP_TSP, PCW, TCW0, TCW1, TSP0, TSP1, isp_tsp, pcw, tcw, tsp};
