//! Reference sectors with known-good EDC/ECC fields

use crate::ecc::compute_ecc;
use crate::edc::compute_edc;
use crate::sector::{BYTES_PER_SECTOR, ECC_LEN, RawSector, SYNC_PATTERN, SectorMode};

pub const MODE_1_EDC: u32 = 0x1C86F04C;
pub const MODE_2_FORM_1_EDC: u32 = 0x3504CE88;
pub const MODE_2_FORM_2_EDC: u32 = 0x30A1D511;

// Address 00:02:16, data byte i = 7i + 3
pub const MODE_1_ECC: [u8; ECC_LEN] = [
    0x29, 0x63, 0x01, 0x53, 0x0D, 0x6D, 0x07, 0x4A, 0xF7, 0xA4, 0x62, 0xB0,
    0x7C, 0x64, 0xFA, 0x6D, 0x2A, 0x67, 0xE5, 0x4B, 0xDA, 0x45, 0x54, 0x43,
    0x50, 0x18, 0xBA, 0x19, 0xE4, 0x22, 0x5F, 0x3D, 0x20, 0x3A, 0x43, 0xF9,
    0x95, 0xBC, 0x5A, 0x6E, 0x1F, 0x7E, 0x56, 0xBD, 0xC4, 0xE0, 0xC5, 0x39,
    0xD2, 0x7D, 0x8C, 0x3C, 0x99, 0x87, 0x6B, 0x00, 0x81, 0xD8, 0xAF, 0xB0,
    0xCC, 0xF7, 0xEB, 0x4D, 0x05, 0xE7, 0x11, 0x42, 0xC5, 0x0D, 0xCC, 0xA8,
    0xC6, 0xC0, 0x3B, 0x08, 0x40, 0x52, 0xC3, 0x3E, 0xCE, 0xF8, 0xF5, 0xF7,
    0x58, 0xDF, 0x1E, 0x1F, 0xE2, 0xCE, 0xDD, 0x9D, 0xA7, 0xEA, 0x87, 0xF4,
    0x82, 0xB0, 0xEC, 0x34, 0xDA, 0xCD, 0xDA, 0x97, 0x65, 0x2B, 0xEA, 0xD5,
    0xB4, 0x63, 0xC0, 0x68, 0x1A, 0x99, 0xD4, 0x12, 0x3F, 0x5D, 0xF0, 0xAA,
    0x43, 0x59, 0xC5, 0x8C, 0xBA, 0x8E, 0x2F, 0x2E, 0xF6, 0xBD, 0x54, 0x30,
    0xA5, 0x59, 0xE2, 0x4D, 0x0C, 0x9C, 0xE9, 0x17, 0x4B, 0xE0, 0x11, 0xE8,
    0xCF, 0x30, 0x3C, 0x07, 0x4B, 0x6D, 0x55, 0x77, 0x11, 0xA2, 0x95, 0x7D,
    0x6C, 0x08, 0x36, 0x10, 0x14, 0xF2, 0x47, 0x86, 0xFC, 0xB8, 0x93, 0xBC,
    0x4E, 0x55, 0x21, 0x1F, 0xDA, 0xA8, 0x55, 0x33, 0x46, 0x2A, 0x66, 0xBC,
    0xF1, 0x35, 0x6C, 0xA2, 0xC4, 0x55, 0x8C, 0x4E, 0x2D, 0x48, 0x18, 0x3B,
    0x87, 0x58, 0x78, 0xDB, 0xFA, 0x1B, 0x7D, 0x8E, 0xAC, 0x34, 0x3E, 0x2C,
    0x44, 0x9F, 0x3C, 0xA0, 0x3F, 0x5D, 0xA5, 0x4C, 0x20, 0xDD, 0x8A, 0x3E,
    0x84, 0x19, 0xD9, 0x89, 0x8D, 0xF9, 0x3D, 0x58, 0xB0, 0xBF, 0x83, 0x5F,
    0x30, 0xED, 0x91, 0x0D, 0x63, 0xF4, 0x00, 0x22, 0x14, 0x41, 0x9E, 0x4F,
    0xAD, 0x76, 0x67, 0x00, 0x68, 0xFE, 0x9C, 0x62, 0xEC, 0xFC, 0x64, 0x93,
    0xC3, 0xDA, 0x3E, 0x96, 0x55, 0xE8, 0x21, 0x65, 0x76, 0x13, 0x88, 0xB6,
    0x2D, 0xD5, 0x58, 0xFF, 0x43, 0x7C, 0xBA, 0x43, 0x13, 0xFD, 0x25, 0xD1,
];

// Address 00:02:17, data byte i = 13i + 5
pub const MODE_2_FORM_1_ECC: [u8; ECC_LEN] = [
    0x6F, 0xD9, 0x6C, 0xBC, 0x16, 0x3E, 0x83, 0xDD, 0x23, 0x05, 0xD8, 0xED,
    0xFF, 0x9F, 0xD1, 0xEB, 0x62, 0x0D, 0x8B, 0x8F, 0xD8, 0x60, 0xAA, 0xF2,
    0x7C, 0x4F, 0x09, 0xDC, 0xC0, 0xF9, 0xF6, 0xF2, 0xF8, 0xAB, 0xC1, 0x18,
    0x9B, 0x91, 0x99, 0x7F, 0xA1, 0xD1, 0x66, 0x71, 0x36, 0x71, 0xB0, 0xE1,
    0xA4, 0xFF, 0x04, 0x9A, 0x9F, 0x77, 0x2D, 0x0F, 0xF0, 0xC0, 0xA2, 0x72,
    0x7A, 0x36, 0x23, 0xAD, 0x9B, 0xF1, 0x3E, 0x1B, 0xE8, 0xC2, 0xD7, 0xAC,
    0xFD, 0x82, 0xA4, 0x31, 0x0F, 0xD8, 0xC7, 0x8B, 0x17, 0xF9, 0xB4, 0x56,
    0x67, 0x71, 0x56, 0x2F, 0x6F, 0xDC, 0xBA, 0x96, 0xBC, 0x49, 0x83, 0xD9,
    0x3B, 0xA5, 0x2F, 0x5F, 0xD1, 0xBB, 0xD2, 0x0D, 0xCB, 0xDF, 0x08, 0xA0,
    0xAA, 0x42, 0xAC, 0x4F, 0x49, 0x8C, 0x70, 0xF9, 0xF6, 0x02, 0x28, 0x2B,
    0xC1, 0x28, 0xEB, 0x11, 0x19, 0xAF, 0x91, 0xD1, 0xE6, 0x01, 0x66, 0xB1,
    0xB0, 0xB1, 0x54, 0xFF, 0x44, 0x4A, 0x4F, 0x37, 0x2D, 0xFF, 0xA0, 0xC0,
    0x62, 0x22, 0x0A, 0xB6, 0x23, 0x9D, 0x4B, 0x71, 0xBE, 0x6B, 0xD8, 0xC2,
    0x57, 0x7C, 0x0D, 0x82, 0xA4, 0x81, 0x5F, 0x98, 0xC7, 0x5B, 0xA7, 0xF9,
    0xF9, 0x5A, 0x2C, 0x28, 0x1B, 0x24, 0x35, 0x0F, 0xFF, 0xB1, 0x4C, 0x6F,
    0x7C, 0x3F, 0xAC, 0x41, 0x4D, 0x57, 0xDE, 0x32, 0x66, 0x18, 0x54, 0x82,
    0xA1, 0xE9, 0x14, 0x01, 0x03, 0x1E, 0xC8, 0xAC, 0x8D, 0xD9, 0x8F, 0x9F,
    0x73, 0x08, 0x34, 0x6D, 0x1C, 0x6B, 0x66, 0xB8, 0x43, 0x2C, 0x64, 0x16,
    0x3F, 0xBD, 0xD8, 0x76, 0x4E, 0xF2, 0x23, 0xDD, 0x1F, 0xBD, 0x86, 0xB5,
    0x60, 0x27, 0xCF, 0x3F, 0x3E, 0x5D, 0x0B, 0x53, 0xBE, 0xA7, 0x54, 0x6A,
    0xB5, 0xB6, 0x6D, 0x29, 0xEC, 0x53, 0xE6, 0x6E, 0x7F, 0x90, 0x62, 0xDC,
    0x2B, 0x22, 0xB5, 0xEE, 0xFC, 0x42, 0x7E, 0x6E, 0xD2, 0xC7, 0xA2, 0x7E,
    0xF3, 0x59, 0xA8, 0xBA, 0xEA, 0xFE, 0x2F, 0xF7, 0xA9, 0x81, 0x7D, 0x0F,
];

pub fn header(address: [u8; 3], mode_byte: u8) -> RawSector {
    let mut sector = [0; BYTES_PER_SECTOR];
    sector[..12].copy_from_slice(&SYNC_PATTERN);
    sector[12..15].copy_from_slice(&address);
    sector[15] = mode_byte;
    sector
}

pub fn fill(bytes: &mut [u8], multiplier: usize, addend: usize) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i * multiplier + addend) as u8;
    }
}

pub fn mode_1_sector() -> RawSector {
    let mut sector = header([0x00, 0x02, 0x16], 1);
    fill(&mut sector[16..2064], 7, 3);
    sector[2064..2068].copy_from_slice(&MODE_1_EDC.to_le_bytes());
    sector[2076..].copy_from_slice(&MODE_1_ECC);
    sector
}

pub fn mode_2_form_1_sector() -> RawSector {
    let mut sector = header([0x00, 0x02, 0x17], 2);
    sector[16..24].copy_from_slice(&[0x01, 0x02, 0x08, 0x00, 0x01, 0x02, 0x08, 0x00]);
    fill(&mut sector[24..2072], 13, 5);
    sector[2072..2076].copy_from_slice(&MODE_2_FORM_1_EDC.to_le_bytes());
    sector[2076..].copy_from_slice(&MODE_2_FORM_1_ECC);
    sector
}

pub fn mode_2_form_2_sector() -> RawSector {
    let mut sector = header([0x00, 0x02, 0x18], 2);
    sector[16..24].copy_from_slice(&[0x01, 0x02, 0x28, 0x00, 0x01, 0x02, 0x28, 0x00]);
    fill(&mut sector[24..2348], 5, 1);
    sector[2348..].copy_from_slice(&MODE_2_FORM_2_EDC.to_le_bytes());
    sector
}

/// Overwrite the EDC and ECC fields of `sector` with freshly computed values for `mode`.
pub fn seal(sector: &mut RawSector, mode: SectorMode) {
    let layout = mode.layout().unwrap();
    if let Some(edc_range) = layout.edc {
        let edc = compute_edc(sector, mode);
        sector[edc_range].copy_from_slice(&edc.to_le_bytes());
    }
    if let (Some(ecc_range), Some(ecc)) = (layout.ecc, compute_ecc(sector, mode)) {
        sector[ecc_range].copy_from_slice(&ecc);
    }
}
