//! Flip a single bit in a file, for exercising the RS/FX.25 error-correction
//! path.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fx25_core::bitflip::flip_bit;

#[derive(Parser)]
#[command(name = "bitflip", version, about = "Flip the low bit of one byte in a file")]
struct Cli {
    /// Input file
    input: PathBuf,
    /// Output file (a copy of the input with one bit flipped)
    output: PathBuf,
    /// Byte offset to flip
    byte_offset: usize,
}

fn flip_file(input: &Path, output: &Path, byte_offset: usize) -> std::io::Result<()> {
    let mut data = fs::read(input)?;
    flip_bit(&mut data, byte_offset);
    fs::write(output, &data)
}

fn main() -> ExitCode {
    let cli = match fx25_cli::parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match flip_file(&cli.input, &cli.output, cli.byte_offset) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error flipping bit in {}: {e}", cli.input.display());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_differs_from_input_at_the_flipped_byte_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, [0x00u8, 0xFF, 0x00]).unwrap();

        flip_file(&input, &output, 1).unwrap();

        let result = fs::read(&output).unwrap();
        assert_eq!(result, vec![0x00, 0xFE, 0x00]);
    }

    #[test]
    fn out_of_range_offset_leaves_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, [1u8, 2, 3]).unwrap();

        flip_file(&input, &output, 999).unwrap();

        assert_eq!(fs::read(&output).unwrap(), vec![1, 2, 3]);
    }
}
