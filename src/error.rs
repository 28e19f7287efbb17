use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantizeError {
    #[error("image dimensions cannot be zero")]
    ZeroDimension,

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("iterations must be at most {max}, got {0}", max = crate::MAX_ITERATIONS)]
    InvalidIterations(u32),

    #[error("operation requires at least one color")]
    EmptyInput,

    #[error("cannot quantize against an empty palette")]
    EmptyPalette,

    #[error("{pixels} pixels but {alphas} alpha values")]
    LengthMismatch { pixels: usize, alphas: usize },

    #[error("palette holds at most 256 colors, got {0}")]
    TooManyColors(usize),
}
