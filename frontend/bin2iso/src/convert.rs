//! Extraction of sector payloads from a raw 2352-byte-per-sector image


use cdsector::{
    AnalysisStatus, BYTES_PER_SECTOR, RawSector, SectorError, SectorMode, VerifyError, analyze,
    sector_address, verify_sector,
};
use std::io::{self, Read, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Treat Mode 2 / Mode 2 Form 1/2 ambiguity as fatal instead of warning
    pub strict: bool,
    /// Check the stored EDC/ECC of every extracted sector
    pub verify: bool,
    /// Accept Mode 2 Form 2 sectors and extract their 2324-byte payloads
    pub allow_form_2: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertSummary {
    pub sectors: u64,
    pub bytes_written: u64,
    pub ambiguous_sectors: u64,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file size {size} is not divisible by {}", BYTES_PER_SECTOR)]
    UnalignedInput { size: u64 },
    #[error("Input ends in the middle of sector {sector_number}")]
    TruncatedSector { sector_number: u64 },
    #[error("Sector {sector_number} ({address}): {source}")]
    InvalidSector {
        sector_number: u64,
        address: String,
        #[source]
        source: SectorError,
    },
    #[error("Sector {sector_number} ({address}): {status}")]
    AmbiguousSector { sector_number: u64, address: String, status: AnalysisStatus },
    #[error("Sector {sector_number} ({address}): Non-data sector: {mode}")]
    NonDataSector { sector_number: u64, address: String, mode: SectorMode },
    #[error("Sector {sector_number} ({address}): {source}")]
    VerifyFailed {
        sector_number: u64,
        address: String,
        #[source]
        source: VerifyError,
    },
    #[error("Error reading input file: {0}")]
    Read(#[source] io::Error),
    #[error("Error writing output file: {0}")]
    Write(#[source] io::Error),
}

/// Number of sectors in an input of `size` bytes.
///
/// # Errors
///
/// Returns [`ConvertError::UnalignedInput`] if `size` is not a whole number of sectors.
pub fn sector_count(size: u64) -> Result<u64, ConvertError> {
    let sector_len = BYTES_PER_SECTOR as u64;
    if size % sector_len != 0 {
        return Err(ConvertError::UnalignedInput { size });
    }

    Ok(size / sector_len)
}

fn describe_address(sector: &RawSector) -> String {
    sector_address(sector).map_or_else(|| "invalid address".into(), |time| time.to_string())
}

// Returns Ok(false) on a clean end of input
fn read_sector<R: Read>(
    reader: &mut R,
    sector: &mut RawSector,
    sector_number: u64,
) -> Result<bool, ConvertError> {
    let mut filled = 0;
    while filled < BYTES_PER_SECTOR {
        match reader.read(&mut sector[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(ConvertError::Read(err)),
        }
    }

    match filled {
        0 => Ok(false),
        BYTES_PER_SECTOR => Ok(true),
        _ => Err(ConvertError::TruncatedSector { sector_number }),
    }
}

/// Copy the payload of every sector in `reader` to `writer`.
///
/// Only Mode 1 and Mode 2 Form 1 sectors (plus Mode 2 Form 2 if enabled in `options`) are
/// accepted; any other sector aborts the conversion.
///
/// # Errors
///
/// Returns an error on the first sector that cannot be converted under `options`, and propagates
/// any I/O errors.
pub fn convert<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    options: ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    let mut summary = ConvertSummary::default();
    let mut sector: RawSector = [0; BYTES_PER_SECTOR];

    while read_sector(&mut reader, &mut sector, summary.sectors)? {
        let sector_number = summary.sectors;

        let analysis = analyze(&sector).map_err(|source| ConvertError::InvalidSector {
            sector_number,
            address: describe_address(&sector),
            source,
        })?;

        if analysis.is_ambiguous() {
            if options.strict {
                return Err(ConvertError::AmbiguousSector {
                    sector_number,
                    address: describe_address(&sector),
                    status: analysis.status,
                });
            }

            log::warn!(
                "Sector {sector_number} ({}): {}",
                describe_address(&sector),
                analysis.status
            );
            summary.ambiguous_sectors += 1;
        }

        let accepted = analysis.mode.is_data()
            || (options.allow_form_2 && analysis.mode == SectorMode::Mode2Form2);
        if !accepted {
            return Err(ConvertError::NonDataSector {
                sector_number,
                address: describe_address(&sector),
                mode: analysis.mode,
            });
        }

        if options.verify {
            verify_sector(&sector, analysis.mode).map_err(|source| ConvertError::VerifyFailed {
                sector_number,
                address: describe_address(&sector),
                source,
            })?;
        }

        let payload = analysis.payload(&sector);
        writer.write_all(payload).map_err(ConvertError::Write)?;

        summary.sectors += 1;
        summary.bytes_written += payload.len() as u64;
    }

    writer.flush().map_err(ConvertError::Write)?;

    Ok(summary)
}
