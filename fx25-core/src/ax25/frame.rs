//! AX.25 UI-frame assembly (C5).

use crate::ax25::address::encode_address;
use crate::ax25::crc::crc_ccitt;
use crate::error::{FxError, Result};

pub const FLAG: u8 = 0x7E;
pub const CONTROL_UI: u8 = 0x03;
pub const PID_NO_L3: u8 = 0xF0;
/// Maximum payload carried by a single AX.25 UI frame.
pub const MAX_PAYLOAD: usize = 256;

/// The typed-header tag carried by every frame except [`FrameType::Message`].
///
/// Numeric values follow the reference encoder's `frame_type_t` ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Beacon = 0,
    DataHeader = 1,
    DataFirst = 2,
    Data = 3,
    DataEnd = 4,
    Message = 5,
}

impl FrameType {
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// `Message` frames omit the typed header entirely.
    pub fn has_typed_header(self) -> bool {
        !matches!(self, FrameType::Message)
    }
}

/// Source/destination identity for one run of frame production.
#[derive(Debug, Clone)]
pub struct StationConfig {
    pub source_call: String,
    pub source_ssid: u8,
    pub dest_call: String,
    pub dest_ssid: u8,
}

impl StationConfig {
    pub fn new(source_call: impl Into<String>, source_ssid: u8, dest_call: impl Into<String>, dest_ssid: u8) -> Self {
        StationConfig {
            source_call: source_call.into(),
            source_ssid,
            dest_call: dest_call.into(),
            dest_ssid,
        }
    }
}

fn typed_header(frame_type: FrameType, seq: u16, total: u16) -> [u8; 5] {
    [
        frame_type.tag(),
        (seq >> 8) as u8,
        seq as u8,
        (total >> 8) as u8,
        total as u8,
    ]
}

/// Build one AX.25 UI frame between opening and closing flags.
///
/// `payload` must fit within [`MAX_PAYLOAD`] bytes or this fails with
/// [`FxError::PayloadTooLarge`].
pub fn build_frame(
    config: &StationConfig,
    frame_type: FrameType,
    seq: u16,
    total: u16,
    payload: &[u8],
) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD {
        return Err(FxError::PayloadTooLarge {
            len: payload.len(),
            max: MAX_PAYLOAD,
        });
    }

    let mut frame = Vec::with_capacity(1 + 7 + 7 + 2 + 5 + payload.len() + 2 + 1);
    frame.push(FLAG);

    let covered_start = frame.len();
    frame.extend_from_slice(&encode_address(&config.dest_call, config.dest_ssid, false));
    frame.extend_from_slice(&encode_address(&config.source_call, config.source_ssid, true));
    frame.push(CONTROL_UI);
    frame.push(PID_NO_L3);
    if frame_type.has_typed_header() {
        frame.extend_from_slice(&typed_header(frame_type, seq, total));
    }
    frame.extend_from_slice(payload);

    let fcs = crc_ccitt(&frame[covered_start..]);
    frame.push(fcs as u8);
    frame.push((fcs >> 8) as u8);
    frame.push(FLAG);

    Ok(frame)
}

/// Build a beacon frame (`seq=0, total=1`).
pub fn build_beacon_frame(config: &StationConfig, message: &[u8]) -> Result<Vec<u8>> {
    build_frame(config, FrameType::Beacon, 0, 1, message)
}

/// Build a message frame (`seq=0, total=1`, no typed header).
pub fn build_message_frame(config: &StationConfig, message: &[u8]) -> Result<Vec<u8>> {
    build_frame(config, FrameType::Message, 0, 1, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beacon_config() -> StationConfig {
        StationConfig::new("N0CALL", 0, "CQ", 0)
    }

    #[test]
    fn s5_beacon_frame_layout() {
        let config = beacon_config();
        let frame = build_beacon_frame(&config, b"HELLO").unwrap();
        let want_prefix = [
            0x7E, 0xA6, 0xA0, 0x40, 0x40, 0x40, 0x40, 0x60, 0x9C, 0x9E, 0x60, 0x82, 0x86, 0x98,
            0x61, 0x03, 0xF0, 0x48, 0x45, 0x4C, 0x4C, 0x4F,
        ];
        assert_eq!(&frame[..want_prefix.len()], &want_prefix[..]);
        assert_eq!(*frame.last().unwrap(), FLAG);
        assert_eq!(frame[0], FLAG);
    }

    #[test]
    fn fcs_recomputation_matches_emitted_value() {
        let config = beacon_config();
        let frame = build_beacon_frame(&config, b"HELLO").unwrap();
        let covered = &frame[1..frame.len() - 3];
        let recomputed = crc_ccitt(covered);
        let emitted = frame[frame.len() - 3] as u16 | ((frame[frame.len() - 2] as u16) << 8);
        assert_eq!(recomputed, emitted);
    }

    #[test]
    fn message_frame_omits_typed_header() {
        let config = beacon_config();
        let frame = build_message_frame(&config, b"HI").unwrap();
        // flag(1) + dest(7) + src(7) + control(1) + pid(1) + "HI"(2) + fcs(2) + flag(1)
        assert_eq!(frame.len(), 1 + 7 + 7 + 1 + 1 + 2 + 2 + 1);
    }

    #[test]
    fn data_frame_carries_typed_header() {
        let config = beacon_config();
        let frame = build_frame(&config, FrameType::DataFirst, 3, 7, b"x").unwrap();
        let header_start = 1 + 7 + 7 + 2;
        assert_eq!(frame[header_start], FrameType::DataFirst.tag());
        assert_eq!(frame[header_start + 1], 0);
        assert_eq!(frame[header_start + 2], 3);
        assert_eq!(frame[header_start + 3], 0);
        assert_eq!(frame[header_start + 4], 7);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let config = beacon_config();
        let payload = vec![0u8; MAX_PAYLOAD + 1];
        assert!(matches!(
            build_frame(&config, FrameType::Data, 0, 1, &payload),
            Err(FxError::PayloadTooLarge { .. })
        ));
    }
}
