//! Sector mode detection
//!
//! Sync and mode byte validation are unambiguous. Mode 2 is not: an XA sub-header is stored twice,
//! but a plain Mode 2 sector whose first 8 payload bytes happen to repeat looks identical to an
//! XA sector. The EDC is the only other evidence, so a Mode 2 sector with a duplicated sub-header
//! and a mismatching EDC is reported as a best guess with an ambiguous status.


use crate::edc::compute_edc;
use crate::sector::{
    FORM_2_SUBMODE_BIT, HEADER_LEN, MODE_OFFSET, RawSector, SUB_HEADER_LEN, SYNC_PATTERN,
    SectorMode, stored_edc,
};
use std::fmt::{Display, Formatter};
use thiserror::Error;

const MODE_VALUE_MASK: u8 = 0x03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SectorError {
    #[error("Invalid sector synchronization data")]
    InvalidSync,
    #[error("Invalid sector mode value: {0:#04X}")]
    InvalidMode(u8),
}

/// Non-fatal outcome of [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisStatus {
    #[default]
    Clean,
    /// Either plain Mode 2, or Mode 2 Form 1 with a corrupt EDC
    Form1Ambiguous,
    /// Either plain Mode 2, or Mode 2 Form 2 with a corrupt EDC
    Form2Ambiguous,
}

impl AnalysisStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clean => "No error",
            Self::Form1Ambiguous => "Sector is either Mode 2 or Mode 2 Form 1 with corrupt EDC",
            Self::Form2Ambiguous => "Sector is either Mode 2 or Mode 2 Form 2 with corrupt EDC",
        }
    }
}

impl Display for AnalysisStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorAnalysis {
    pub mode: SectorMode,
    /// Offset of the first payload byte within the sector
    pub payload_offset: usize,
    pub status: AnalysisStatus,
}

impl SectorAnalysis {
    fn clean(mode: SectorMode) -> Self {
        Self::new(mode, AnalysisStatus::Clean)
    }

    fn new(mode: SectorMode, status: AnalysisStatus) -> Self {
        let payload_offset = mode.layout().map_or(HEADER_LEN, |layout| layout.payload.start);
        Self { mode, payload_offset, status }
    }

    #[must_use]
    pub fn payload_len(&self) -> usize {
        self.mode.payload_len()
    }

    /// Payload bytes of `sector` under the resolved mode.
    #[must_use]
    pub fn payload<'sector>(&self, sector: &'sector RawSector) -> &'sector [u8] {
        &sector[self.payload_offset..self.payload_offset + self.payload_len()]
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.status != AnalysisStatus::Clean
    }
}

/// Determine the mode of a raw sector and locate its payload.
///
/// # Errors
///
/// Returns [`SectorError::InvalidSync`] if the 12-byte sync field is wrong, and
/// [`SectorError::InvalidMode`] if the header mode byte is 3 or has any of its upper 6 bits set.
/// Ambiguous Mode 2 sectors are not errors; they are reported through
/// [`SectorAnalysis::status`].
pub fn analyze(sector: &RawSector) -> Result<SectorAnalysis, SectorError> {
    if sector[..SYNC_PATTERN.len()] != SYNC_PATTERN {
        return Err(SectorError::InvalidSync);
    }

    let mode_byte = sector[MODE_OFFSET];
    let mode_value = mode_byte & MODE_VALUE_MASK;
    if mode_byte & !MODE_VALUE_MASK != 0 || mode_value == 3 {
        return Err(SectorError::InvalidMode(mode_byte));
    }

    match mode_value {
        0 => Ok(SectorAnalysis::clean(SectorMode::Mode0)),
        1 => Ok(SectorAnalysis::clean(SectorMode::Mode1)),
        _ => Ok(analyze_mode_2(sector)),
    }
}

fn analyze_mode_2(sector: &RawSector) -> SectorAnalysis {
    let sub_header = &sector[HEADER_LEN..HEADER_LEN + SUB_HEADER_LEN];

    // XA sectors always repeat the 4-byte sub-header
    let (first_copy, second_copy) = sub_header.split_at(SUB_HEADER_LEN / 2);
    if first_copy != second_copy {
        return SectorAnalysis::clean(SectorMode::Mode2);
    }

    let (candidate, ambiguous_status) = if sub_header[2] & FORM_2_SUBMODE_BIT == 0 {
        (SectorMode::Mode2Form1, AnalysisStatus::Form1Ambiguous)
    } else {
        (SectorMode::Mode2Form2, AnalysisStatus::Form2Ambiguous)
    };

    let computed = compute_edc(sector, candidate);
    let stored = stored_edc(sector, candidate);
    if stored == Some(computed) {
        return SectorAnalysis::clean(candidate);
    }

    log::trace!("{candidate} EDC mismatch: stored={stored:X?}, computed={computed:08X}");

    SectorAnalysis::new(candidate, ambiguous_status)
}
