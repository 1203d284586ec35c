//! AX.25 UI-frame construction: addressing, FCS, typed headers and
//! multi-frame packetization (C5, C6).

pub mod address;
pub mod crc;
pub mod frame;
pub mod packetizer;

pub use frame::{build_beacon_frame, build_frame, build_message_frame, FrameType, StationConfig};
pub use packetizer::packetize;
