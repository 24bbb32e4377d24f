//! Raw sector layout: the fixed byte regions that each sector mode overlays on a 2352-byte frame

use crate::cdtime::CdTime;
use std::fmt::{Display, Formatter};
use std::ops::Range;

// Data: 16 header bytes + 2048 data bytes + 288 error detection/correction bytes
// Audio: 1176 signed 16-bit PCM samples, half for the left channel and half for the right channel
pub const BYTES_PER_SECTOR: usize = 2352;

pub type RawSector = [u8; BYTES_PER_SECTOR];

pub const SYNC_PATTERN: [u8; 12] =
    [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

// 12 sync bytes, 3 BCD address bytes (minutes/seconds/frames), 1 mode byte
pub const HEADER_LEN: usize = 16;
pub const ADDRESS_OFFSET: usize = 12;
pub const MODE_OFFSET: usize = 15;

pub const SUB_HEADER_LEN: usize = 8;
pub const EDC_LEN: usize = 4;
pub const ECC_LEN: usize = 276;

// Modes 1 and 2/Form1 both place the ECC block in the last 276 bytes of the sector
pub const ECC_OFFSET: usize = BYTES_PER_SECTOR - ECC_LEN;

// Sub-header byte 2 (submode), bit 5
pub const FORM_2_SUBMODE_BIT: u8 = 0x20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectorMode {
    #[default]
    Invalid,
    Mode0,
    Mode1,
    Mode2,
    Mode2Form1,
    Mode2Form2,
}

impl SectorMode {
    pub const ALL: [Self; 6] =
        [Self::Invalid, Self::Mode0, Self::Mode1, Self::Mode2, Self::Mode2Form1, Self::Mode2Form2];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "Invalid mode",
            Self::Mode0 => "Mode 0",
            Self::Mode1 => "Mode 1",
            Self::Mode2 => "Mode 2",
            Self::Mode2Form1 => "Mode 2 Form 1",
            Self::Mode2Form2 => "Mode 2 Form 2",
        }
    }

    /// Whether sectors in this mode carry a 4-byte EDC field.
    #[must_use]
    pub fn has_edc(self) -> bool {
        matches!(self, Self::Mode1 | Self::Mode2Form1 | Self::Mode2Form2)
    }

    /// Whether sectors in this mode carry a 276-byte P/Q parity block.
    #[must_use]
    pub fn has_ecc(self) -> bool {
        matches!(self, Self::Mode1 | Self::Mode2Form1)
    }

    /// Whether this mode carries a 2048-byte user data payload, i.e. it is the kind of sector an
    /// ISO 9660 image is made of.
    #[must_use]
    pub fn is_data(self) -> bool {
        matches!(self, Self::Mode1 | Self::Mode2Form1)
    }

    #[must_use]
    pub fn layout(self) -> Option<SectorLayout> {
        let layout = match self {
            Self::Invalid => return None,
            Self::Mode0 | Self::Mode2 => SectorLayout {
                sub_header: None,
                payload: HEADER_LEN..BYTES_PER_SECTOR,
                edc: None,
                zero: None,
                ecc: None,
            },
            Self::Mode1 => SectorLayout {
                sub_header: None,
                payload: HEADER_LEN..2064,
                edc: Some(2064..2068),
                zero: Some(2068..ECC_OFFSET),
                ecc: Some(ECC_OFFSET..BYTES_PER_SECTOR),
            },
            Self::Mode2Form1 => SectorLayout {
                sub_header: Some(HEADER_LEN..HEADER_LEN + SUB_HEADER_LEN),
                payload: HEADER_LEN + SUB_HEADER_LEN..2072,
                edc: Some(2072..ECC_OFFSET),
                zero: None,
                ecc: Some(ECC_OFFSET..BYTES_PER_SECTOR),
            },
            Self::Mode2Form2 => SectorLayout {
                sub_header: Some(HEADER_LEN..HEADER_LEN + SUB_HEADER_LEN),
                payload: HEADER_LEN + SUB_HEADER_LEN..BYTES_PER_SECTOR - EDC_LEN,
                edc: Some(BYTES_PER_SECTOR - EDC_LEN..BYTES_PER_SECTOR),
                zero: None,
                ecc: None,
            },
        };

        Some(layout)
    }

    /// Length of the user data payload in bytes, or 0 for [`SectorMode::Invalid`].
    #[must_use]
    pub fn payload_len(self) -> usize {
        self.layout().map_or(0, |layout| layout.payload.len())
    }
}

impl Display for SectorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte regions of a sector in a given mode. Every range is an offset into the full 2352-byte
/// sector; together with the 16-byte header they cover the sector exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorLayout {
    pub sub_header: Option<Range<usize>>,
    pub payload: Range<usize>,
    pub edc: Option<Range<usize>>,
    /// Reserved bytes that must read as zero (Mode 1 only)
    pub zero: Option<Range<usize>>,
    pub ecc: Option<Range<usize>>,
}

impl SectorLayout {
    /// All regions in sector order, header included.
    #[must_use]
    pub fn regions(&self) -> Vec<Range<usize>> {
        [
            Some(0..HEADER_LEN),
            self.sub_header.clone(),
            Some(self.payload.clone()),
            self.edc.clone(),
            self.zero.clone(),
            self.ecc.clone(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Read the little-endian EDC value stored in the sector, if the mode has one.
#[must_use]
pub fn stored_edc(sector: &RawSector, mode: SectorMode) -> Option<u32> {
    let edc_range = mode.layout()?.edc?;
    let edc_bytes: [u8; EDC_LEN] = sector[edc_range].try_into().ok()?;
    Some(u32::from_le_bytes(edc_bytes))
}

/// Decode the BCD minutes/seconds/frames address from the sector header.
///
/// Returns `None` if any of the three bytes is not valid BCD or is out of range.
#[must_use]
pub fn sector_address(sector: &RawSector) -> Option<CdTime> {
    let [minutes, seconds, frames] = [
        sector[ADDRESS_OFFSET],
        sector[ADDRESS_OFFSET + 1],
        sector[ADDRESS_OFFSET + 2],
    ];
    CdTime::from_bcd(minutes, seconds, frames)
}
