//! Split a raw byte file into AX.25 UI frames and write them as hex-dump text.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use fx25_cli::hexdump::write_packet_hex;
use fx25_core::ax25::{packetize, StationConfig};
use fx25_core::error::Result;

#[derive(Parser)]
#[command(name = "ax25-packetize", version, about = "Packetize a file into AX.25 UI frames")]
struct Cli {
    /// Input file (raw bytes)
    input: PathBuf,
    /// Output file (hex-dump text, one `Packet N (L bytes):` block per frame)
    output: PathBuf,

    /// Source station callsign
    #[arg(long, env = "FX25_SOURCE_CALL", default_value = "N0CALL")]
    source_call: String,
    /// Source station SSID
    #[arg(long, env = "FX25_SOURCE_SSID", default_value_t = 0)]
    source_ssid: u8,
    /// Destination callsign
    #[arg(long, env = "FX25_DEST_CALL", default_value = "CQ")]
    dest_call: String,
    /// Destination SSID
    #[arg(long, env = "FX25_DEST_SSID", default_value_t = 0)]
    dest_ssid: u8,
}

fn packetize_file(config: &StationConfig, input: &Path, output: &Path) -> Result<usize> {
    let data = fs::read(input)?;
    let frames = packetize(config, &data)?;

    let mut text = String::new();
    for (i, frame) in frames.iter().enumerate() {
        write_packet_hex(&mut text, i + 1, frame);
    }
    fs::write(output, text)?;

    Ok(frames.len())
}

fn main() -> ExitCode {
    let cli = match fx25_cli::parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };
    let config = StationConfig::new(cli.source_call, cli.source_ssid, cli.dest_call, cli.dest_ssid);

    match packetize_file(&config, &cli.input, &cli.output) {
        Ok(count) => {
            eprintln!("wrote {count} AX.25 frame(s)");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error packetizing {}: {e}", cli.input.display());
            ExitCode::FAILURE
        }
    }
}
