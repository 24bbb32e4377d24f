//! Decoding and validation of raw 2352-byte CD-ROM sectors: mode detection, payload location,
//! and the EDC/ECC redundancy fields defined for data sectors.

pub mod analyze;
pub mod cdtime;
pub mod ecc;
pub mod edc;
pub mod sector;
pub mod tables;
pub mod verify;

#[cfg(test)]
mod testutil;

pub use analyze::{AnalysisStatus, SectorAnalysis, SectorError, analyze};
pub use cdtime::CdTime;
pub use ecc::compute_ecc;
pub use edc::compute_edc;
pub use sector::{
    BYTES_PER_SECTOR, ECC_LEN, RawSector, SectorLayout, SectorMode, sector_address, stored_edc,
};
pub use tables::SectorTables;
pub use verify::{VerifyError, verify_sector};
