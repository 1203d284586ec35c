//! Splits an arbitrary byte stream into a sequence of AX.25 UI frames (C6).

use crate::ax25::frame::{build_frame, FrameType, StationConfig, MAX_PAYLOAD};
use crate::error::Result;

/// Chunk `data` into `MAX_PAYLOAD`-byte pieces and wrap each in a typed AX.25
/// frame. A single-chunk input is tagged `DataHeader`; the first and last of
/// a multi-chunk run are tagged `DataFirst`/`DataEnd`, everything between is
/// plain `Data`.
pub fn packetize(config: &StationConfig, data: &[u8]) -> Result<Vec<Vec<u8>>> {
    let total_packets = data.len().div_ceil(MAX_PAYLOAD);
    let mut frames = Vec::with_capacity(total_packets);

    for (p, chunk) in data.chunks(MAX_PAYLOAD).enumerate() {
        let frame_type = if total_packets == 1 {
            FrameType::DataHeader
        } else if p == 0 {
            FrameType::DataFirst
        } else if p == total_packets - 1 {
            FrameType::DataEnd
        } else {
            FrameType::Data
        };
        frames.push(build_frame(config, frame_type, p as u16, total_packets as u16, chunk)?);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ax25::frame::FLAG;

    fn config() -> StationConfig {
        StationConfig::new("N0CALL", 1, "APRS", 0)
    }

    #[test]
    fn empty_input_produces_no_frames() {
        assert!(packetize(&config(), &[]).unwrap().is_empty());
    }

    #[test]
    fn single_short_chunk_is_data_header() {
        let frames = packetize(&config(), b"hi").unwrap();
        assert_eq!(frames.len(), 1);
        let header_start = 1 + 7 + 7 + 2;
        assert_eq!(frames[0][header_start], FrameType::DataHeader.tag());
    }

    #[test]
    fn multi_chunk_tags_first_middle_and_last() {
        let data = vec![0xABu8; MAX_PAYLOAD * 3 + 10];
        let frames = packetize(&config(), &data).unwrap();
        assert_eq!(frames.len(), 4);

        let header_start = 1 + 7 + 7 + 2;
        assert_eq!(frames[0][header_start], FrameType::DataFirst.tag());
        assert_eq!(frames[1][header_start], FrameType::Data.tag());
        assert_eq!(frames[2][header_start], FrameType::Data.tag());
        assert_eq!(frames[3][header_start], FrameType::DataEnd.tag());

        for f in &frames {
            assert_eq!(f[0], FLAG);
            assert_eq!(*f.last().unwrap(), FLAG);
        }
    }

    #[test]
    fn exact_multiple_of_chunk_size_has_no_trailing_empty_chunk() {
        let data = vec![0x11u8; MAX_PAYLOAD * 2];
        let frames = packetize(&config(), &data).unwrap();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn total_field_matches_frame_count() {
        let data = vec![0x22u8; MAX_PAYLOAD * 3];
        let frames = packetize(&config(), &data).unwrap();
        let header_start = 1 + 7 + 7 + 2;
        for f in &frames {
            let total = ((f[header_start + 3] as u16) << 8) | f[header_start + 4] as u16;
            assert_eq!(total, 3);
        }
    }
}
