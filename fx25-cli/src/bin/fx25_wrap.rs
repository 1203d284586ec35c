//! Wrap AX.25 frames (hex-dump text) in the FX.25 outer layer and write the
//! FX.25 hex-dump variant.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fx25_cli::hexdump::{parse_packets, write_fx25_packet_hex};
use fx25_core::fx25::wrap;

#[derive(Parser)]
#[command(name = "fx25-wrap", version, about = "Wrap AX.25 frames in FX.25 correlation tag + RS codeword")]
struct Cli {
    /// Input file (AX.25 hex-dump text, as produced by ax25-packetize)
    input: PathBuf,
    /// Output file (FX.25 hex-dump text)
    output: PathBuf,
}

/// Returns `(wrapped, total)` packet counts.
fn wrap_file(input: &Path, output: &Path) -> std::io::Result<(usize, usize)> {
    let text = fs::read_to_string(input)?;
    let packets = parse_packets(&text);

    let mut out = String::new();
    let mut wrapped = 0usize;
    for (i, packet) in packets.iter().enumerate() {
        match wrap(packet) {
            Ok(frame) => {
                let (tag, codeword) = frame.split_at(8);
                write_fx25_packet_hex(&mut out, i + 1, tag, codeword);
                wrapped += 1;
            }
            Err(e) => eprintln!("Error wrapping packet {}: {e}", i + 1),
        }
    }

    fs::write(output, out)?;
    Ok((wrapped, packets.len()))
}

fn main() -> ExitCode {
    let cli = match fx25_cli::parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match wrap_file(&cli.input, &cli.output) {
        Ok((wrapped, total)) => {
            eprintln!("wrapped {wrapped} of {total} AX.25 frame(s)");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.input.display());
            ExitCode::FAILURE
        }
    }
}
