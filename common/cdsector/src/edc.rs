//! EDC (error detection code) computation

use crate::sector::{HEADER_LEN, RawSector, SUB_HEADER_LEN, SectorMode};
use crate::tables::SectorTables;
use std::ops::Range;

/// Bytes covered by the EDC in each mode that has one.
fn edc_coverage(mode: SectorMode) -> Option<Range<usize>> {
    match mode {
        // Sync + header + 2048 data bytes
        SectorMode::Mode1 => Some(0..HEADER_LEN + 2048),
        // XA sub-header + 2048 data bytes
        SectorMode::Mode2Form1 => Some(HEADER_LEN..HEADER_LEN + SUB_HEADER_LEN + 2048),
        // XA sub-header + 2324 data bytes
        SectorMode::Mode2Form2 => Some(HEADER_LEN..HEADER_LEN + SUB_HEADER_LEN + 2324),
        SectorMode::Invalid | SectorMode::Mode0 | SectorMode::Mode2 => None,
    }
}

/// Compute the EDC of `sector` interpreted as `mode`.
///
/// Returns 0 for modes that do not define an EDC.
#[must_use]
pub fn compute_edc(sector: &RawSector, mode: SectorMode) -> u32 {
    edc_coverage(mode).map_or(0, |range| SectorTables::get().edc(&sector[range]))
}
