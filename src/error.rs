use thiserror::Error;

/// Top-level error type for glyph path construction.
#[derive(Debug, Error)]
pub enum GlyphPathError {
    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`GlyphPathError`].
pub type Result<T> = std::result::Result<T, GlyphPathError>;
