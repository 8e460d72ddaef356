//! Error types for header operations.
//!
//! Every mutating operation returns a [`Result`]; a failed operation leaves
//! the header untouched unless its documentation says otherwise (texture
//! binding clears before size validation). Each error carries the name of
//! the public operation that rejected the request.

/// Error returned by a rejected header operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    #[error("{op}: header type is not in 0..=17")]
    InvalidType { op: &'static str },

    #[error("{op}: submission list is invalid for this header type")]
    InvalidList { op: &'static str },

    #[error("{op}: unrecognized capability selector")]
    InvalidCapability { op: &'static str },

    #[error("{op}: current texture is not paletted")]
    NotPaletted { op: &'static str },

    #[error("{op}: palette index is out of bounds")]
    PaletteOutOfBounds { op: &'static str },

    #[error("{op}: texture dimension is not a power of two in 8..=1024")]
    InvalidTextureSize { op: &'static str },

    #[error("{op}: operation is not allowed for this header type")]
    NotAllowed { op: &'static str },
}

/// Discriminant-only view of [`StripError`], for matching without the
/// operation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidType,
    InvalidList,
    InvalidCapability,
    NotPaletted,
    PaletteOutOfBounds,
    InvalidTextureSize,
    NotAllowed,
}

impl StripError {
    /// The operation that produced this error.
    pub fn op(&self) -> &'static str {
        match *self {
            StripError::InvalidType { op }
            | StripError::InvalidList { op }
            | StripError::InvalidCapability { op }
            | StripError::NotPaletted { op }
            | StripError::PaletteOutOfBounds { op }
            | StripError::InvalidTextureSize { op }
            | StripError::NotAllowed { op } => op,
        }
    }

    /// The error kind, independent of the failing operation.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StripError::InvalidType { .. } => ErrorKind::InvalidType,
            StripError::InvalidList { .. } => ErrorKind::InvalidList,
            StripError::InvalidCapability { .. } => ErrorKind::InvalidCapability,
            StripError::NotPaletted { .. } => ErrorKind::NotPaletted,
            StripError::PaletteOutOfBounds { .. } => ErrorKind::PaletteOutOfBounds,
            StripError::InvalidTextureSize { .. } => ErrorKind::InvalidTextureSize,
            StripError::NotAllowed { .. } => ErrorKind::NotAllowed,
        }
    }
}

/// Log a rejection and hand the error back for propagation.
pub(crate) fn report(err: StripError) -> StripError {
    log::warn!("{err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_operation_name() {
        let err = StripError::NotAllowed { op: "set_texture" };
        assert_eq!(err.op(), "set_texture");
        assert_eq!(err.kind(), ErrorKind::NotAllowed);
        assert_eq!(
            err.to_string(),
            "set_texture: operation is not allowed for this header type"
        );
    }

    #[test]
    fn test_kind_discriminates() {
        let a = StripError::InvalidList { op: "new" };
        let b = StripError::InvalidType { op: "new" };
        assert_ne!(a.kind(), b.kind());
    }
}
