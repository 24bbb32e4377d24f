//! Integrity checks of a sector's stored EDC and ECC fields against recomputed values

use crate::ecc::compute_ecc;
use crate::edc::compute_edc;
use crate::sector::{ECC_OFFSET, RawSector, SectorMode, stored_edc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("{mode} error detection check failed; expected={expected:08X}, actual={actual:08X}")]
    EdcMismatch { mode: SectorMode, expected: u32, actual: u32 },
    #[error("{mode} error correction check failed; first mismatch at sector offset {offset}")]
    EccMismatch { mode: SectorMode, offset: usize },
}

/// Recompute the EDC and ECC that `mode` defines and compare them to the values stored in
/// `sector`. Modes without redundancy fields always verify successfully.
///
/// # Errors
///
/// Returns [`VerifyError::EdcMismatch`] if the stored EDC is wrong, otherwise
/// [`VerifyError::EccMismatch`] if any stored ECC byte is wrong.
pub fn verify_sector(sector: &RawSector, mode: SectorMode) -> Result<(), VerifyError> {
    if let Some(expected) = stored_edc(sector, mode) {
        let actual = compute_edc(sector, mode);
        if actual != expected {
            return Err(VerifyError::EdcMismatch { mode, expected, actual });
        }
    }

    if let Some(ecc) = compute_ecc(sector, mode) {
        let stored = &sector[ECC_OFFSET..];
        if let Some(i) = stored.iter().zip(ecc).position(|(&byte, computed)| byte != computed) {
            return Err(VerifyError::EccMismatch { mode, offset: ECC_OFFSET + i });
        }
    }

    Ok(())
}
