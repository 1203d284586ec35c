//! FX.25 outer framing over AX.25: correlation tag + RS(255,223) codeword
//! (C7), and whole-stream block decoding (C9).

pub mod pipeline;
pub mod wrapper;

pub use pipeline::{decode_stream, BlockOutcome, PipelineStats};
pub use wrapper::{split, wrap, CORRELATION_TAG};
