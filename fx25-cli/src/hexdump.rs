//! Human-readable hex-dump text format shared by the CLI binaries.
//!
//! Every tool here reads and writes the same "N bytes per packet, 16 hex
//! pairs per line" layout used across the original encoder/decoder pair, so
//! their outputs can be piped into one another or inspected by hand.

use std::fmt::Write as _;

/// Append one `"Packet N (L bytes):\n"` block of plain hex to `out`.
pub fn write_packet_hex(out: &mut String, index: usize, frame: &[u8]) {
    let _ = writeln!(out, "Packet {} ({} bytes):", index, frame.len());
    write_hex_rows(out, frame);
    out.push('\n');
}

/// Append one `"FX.25 Packet N (L bytes):\n"` block: correlation tag on its
/// own line, then the RS codeword in the same 16-per-row hex layout.
pub fn write_fx25_packet_hex(out: &mut String, index: usize, tag: &[u8], codeword: &[u8]) {
    let total_len = tag.len() + codeword.len();
    let _ = writeln!(out, "FX.25 Packet {} ({} bytes):", index, total_len);
    let _ = write!(out, "Correlation Tag: ");
    for b in tag {
        let _ = write!(out, "{b:02X} ");
    }
    out.push('\n');
    out.push_str("RS Codeword:\n");
    write_hex_rows(out, codeword);
    out.push('\n');
}

fn write_hex_rows(out: &mut String, bytes: &[u8]) {
    for (i, b) in bytes.iter().enumerate() {
        let _ = write!(out, "{b:02X} ");
        if (i + 1) % 16 == 0 {
            out.push('\n');
        }
    }
    if bytes.len() % 16 != 0 {
        out.push('\n');
    }
}

/// Parse hex bytes out of one line, tolerant of whitespace and any
/// non-hex-digit characters mixed in (e.g. a leading `"Correlation Tag: "`
/// label).
pub fn parse_hex_line(line: &str, out: &mut Vec<u8>) {
    let mut chars = line.chars().filter(|c| c.is_ascii_hexdigit());
    while let Some(hi) = chars.next() {
        let byte_str: String = match chars.next() {
            Some(lo) => [hi, lo].iter().collect(),
            None => hi.to_string(),
        };
        if let Ok(byte) = u8::from_str_radix(&byte_str, 16) {
            out.push(byte);
        }
    }
}

/// Parse a whole hex-dump text file back into its packets.
///
/// A new packet starts at any line containing both `"Packet"` and
/// `"bytes"` (matching both the plain and FX.25 header forms); a blank
/// line ends the current packet early, matching the original reader's
/// tolerance for files that don't end in a trailing blank line. A line
/// carrying a label before its hex data (`"Correlation Tag: CC 8F .."`,
/// `"RS Codeword:"`) has everything up to and including its first `:`
/// stripped before hex-filtering, so letters in the label itself (`C`,
/// `e`, `a`, `d`, ...) are never mistaken for nibbles.
pub fn parse_packets(text: &str) -> Vec<Vec<u8>> {
    let mut packets = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut in_packet = false;

    for line in text.lines() {
        if line.contains("Packet") && line.contains("bytes") {
            if in_packet && !current.is_empty() {
                packets.push(std::mem::take(&mut current));
            }
            in_packet = true;
            continue;
        }

        if !in_packet {
            continue;
        }

        if line.trim().is_empty() {
            if !current.is_empty() {
                packets.push(std::mem::take(&mut current));
                in_packet = false;
            }
            continue;
        }

        let hex_part = match line.split_once(':') {
            Some((_, after)) => after,
            None => line,
        };
        parse_hex_line(hex_part, &mut current);
    }

    if in_packet && !current.is_empty() {
        packets.push(current);
    }

    packets
}
