//! Block-by-block FX.25 payload decoding across a whole byte stream (C9).

use crate::rs::{RsCodec, K, N};

/// Outcome of decoding one `N`-byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOutcome {
    Clean,
    Corrected(usize),
    Failed,
}

/// Summary counters for a whole-stream decode run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub processed: usize,
    pub corrected: usize,
    pub failed: usize,
}

/// Decode `data` as a sequence of `N`-byte RS codewords, returning the
/// recovered information bytes and per-block stats.
///
/// The final block is zero-padded up to `N` bytes if short, matching the
/// encoder's padding; trailing zero bytes are trimmed from *its* `K`-byte
/// output only, so a payload that happens to end in real zero bytes on a
/// non-final block is preserved exactly. This mirrors the reference
/// decoder's behavior and the same limitation it has: a final block whose
/// genuine payload ends in 0x00 bytes will have them stripped too.
pub fn decode_stream(data: &[u8]) -> (Vec<u8>, PipelineStats) {
    let codec = RsCodec::new();
    let total_blocks = data.len().div_ceil(N);
    let mut output = Vec::with_capacity(total_blocks * K);
    let mut stats = PipelineStats::default();

    for (block_index, chunk) in data.chunks(N).enumerate() {
        let mut received = [0u8; N];
        received[..chunk.len()].copy_from_slice(chunk);

        let (corrected, outcome) = match codec.decode(&received) {
            Ok((corrected, 0)) => (corrected, BlockOutcome::Clean),
            Ok((corrected, errors)) => (corrected, BlockOutcome::Corrected(errors)),
            Err(_) => (received, BlockOutcome::Failed),
        };

        match outcome {
            BlockOutcome::Clean => {}
            BlockOutcome::Corrected(_) => stats.corrected += 1,
            BlockOutcome::Failed => stats.failed += 1,
        }
        stats.processed += 1;

        let mut write_len = K;
        if block_index + 1 == total_blocks {
            while write_len > 0 && corrected[write_len - 1] == 0 {
                write_len -= 1;
            }
        }
        output.extend_from_slice(&corrected[..write_len]);
    }

    (output, stats)
}
