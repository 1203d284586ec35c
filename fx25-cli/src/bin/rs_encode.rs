//! Encode a raw byte stream into a concatenated RS(255,223) codeword stream.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fx25_core::rs::{RsCodec, K, N};

/// Reed-Solomon(255,223) file encoder.
#[derive(Parser)]
#[command(name = "rs-encode", version, about = "Encode a file as a stream of RS(255,223) codewords")]
struct Cli {
    /// Input file (raw bytes, chunked into 223-byte blocks)
    input: PathBuf,
    /// Output file (255-byte codewords, concatenated)
    output: PathBuf,
}

/// Encode `input` to `output`, returning `(blocks, input_bytes)`.
fn encode_file(input: &Path, output: &Path) -> std::io::Result<(usize, usize)> {
    let data = fs::read(input)?;
    let codec = RsCodec::new();
    let mut out = Vec::with_capacity((data.len() / K + 1) * N);

    let mut blocks = 0usize;
    for chunk in data.chunks(K) {
        let mut block = [0u8; K];
        block[..chunk.len()].copy_from_slice(chunk);
        out.extend_from_slice(&codec.encode(&block));
        blocks += 1;
    }

    fs::write(output, &out)?;
    Ok((blocks, data.len()))
}

fn main() -> ExitCode {
    let cli = match fx25_cli::parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match encode_file(&cli.input, &cli.output) {
        Ok((blocks, input_len)) => {
            eprintln!("encoded {blocks} block(s): {input_len} input bytes -> {} output bytes", blocks * N);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error encoding {}: {e}", cli.input.display());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_is_a_multiple_of_the_codeword_length() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, vec![0x42u8; K + 10]).unwrap();

        let (blocks, input_len) = encode_file(&input, &output).unwrap();
        assert_eq!(blocks, 2);
        assert_eq!(input_len, K + 10);

        let encoded = fs::read(&output).unwrap();
        assert_eq!(encoded.len(), 2 * N);
    }

    #[test]
    fn short_final_block_is_zero_padded_not_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, b"hi").unwrap();

        encode_file(&input, &output).unwrap();
        let encoded = fs::read(&output).unwrap();
        assert_eq!(encoded.len(), N);
        assert_eq!(&encoded[..2], b"hi");
    }
}
