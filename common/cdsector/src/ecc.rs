//! ECC (error correction code) computation: the P and Q parity bytes of the cross-interleaved
//! Reed-Solomon code that protects Mode 1 and Mode 2 Form 1 sectors
//!
//! Parity is computed over the sector from the address field onward, viewed as 1118 16-bit words
//! split into an LSB plane and an MSB plane. P codewords are the 43 columns of a 24x43 word
//! matrix, Q codewords are its 26 diagonals (which also cover the P parity bytes).

use crate::sector::{ADDRESS_OFFSET, ECC_LEN, ECC_OFFSET, HEADER_LEN, RawSector, SectorMode};
use crate::tables::{COEFFICIENT_ROWS, SectorTables};
use std::ops::Range;

const P_PARITY_OFFSET: usize = ECC_OFFSET;
const P_PARITY_LEN: usize = 172;
const Q_PARITY_OFFSET: usize = P_PARITY_OFFSET + P_PARITY_LEN;

const P_CODEWORDS: usize = 43;
// P codewords only use the last 24 coefficient rows
const P_FIRST_ROW: usize = 19;
const P_STRIDE: usize = 2 * P_CODEWORDS;

const Q_CODEWORDS: usize = 26;
const Q_STRIDE: usize = 88;
// Q diagonals wrap around within the 2148-byte region that starts at the address field
const Q_WRAP_THRESHOLD: usize = 2160;
const Q_WRAP_DISTANCE: usize = 2148;

// Bytes that must be treated as zero while computing parity
const MODE_1_ZERO_RANGE: Range<usize> = 2068..ECC_OFFSET;
const MODE_2_ADDRESS_RANGE: Range<usize> = ADDRESS_OFFSET..HEADER_LEN;

fn write_p_parity(sector: &mut RawSector, coefficients: &[[u16; 256]; COEFFICIENT_ROWS]) {
    for i in 0..P_CODEWORDS {
        let column = ADDRESS_OFFSET + 2 * i;

        let mut lsb = 0_u16;
        let mut msb = 0_u16;
        for (j, row) in coefficients[P_FIRST_ROW..].iter().enumerate() {
            let offset = column + j * P_STRIDE;
            lsb ^= row[sector[offset] as usize];
            msb ^= row[sector[offset + 1] as usize];
        }

        let out = P_PARITY_OFFSET + 2 * i;
        sector[out] = (lsb >> 8) as u8;
        sector[out + 1] = (msb >> 8) as u8;
        sector[out + P_STRIDE] = lsb as u8;
        sector[out + P_STRIDE + 1] = msb as u8;
    }
}

fn write_q_parity(sector: &mut RawSector, coefficients: &[[u16; 256]; COEFFICIENT_ROWS]) {
    for i in 0..Q_CODEWORDS {
        let mut offset = ADDRESS_OFFSET + i * P_STRIDE;

        let mut lsb = 0_u16;
        let mut msb = 0_u16;
        for row in coefficients {
            lsb ^= row[sector[offset] as usize];
            msb ^= row[sector[offset + 1] as usize];

            offset = if offset >= Q_WRAP_THRESHOLD {
                offset - Q_WRAP_DISTANCE
            } else {
                offset + Q_STRIDE
            };
        }

        let out = Q_PARITY_OFFSET + 2 * i;
        sector[out] = (lsb >> 8) as u8;
        sector[out + 1] = (msb >> 8) as u8;
        sector[out + 2 * Q_CODEWORDS] = lsb as u8;
        sector[out + 2 * Q_CODEWORDS + 1] = msb as u8;
    }
}

/// Compute the 276-byte ECC block (172 P parity bytes followed by 104 Q parity bytes) of `sector`
/// interpreted as `mode`.
///
/// Returns `None` for modes other than Mode 1 and Mode 2 Form 1. `sector` itself is never
/// modified; its current ECC bytes do not affect the result.
#[must_use]
pub fn compute_ecc(sector: &RawSector, mode: SectorMode) -> Option<[u8; ECC_LEN]> {
    let mut working = *sector;
    match mode {
        SectorMode::Mode1 => working[MODE_1_ZERO_RANGE].fill(0),
        SectorMode::Mode2Form1 => working[MODE_2_ADDRESS_RANGE].fill(0),
        SectorMode::Invalid | SectorMode::Mode0 | SectorMode::Mode2 | SectorMode::Mode2Form2 => {
            return None;
        }
    }

    let coefficients = SectorTables::get().coefficients();
    write_p_parity(&mut working, coefficients);
    write_q_parity(&mut working, coefficients);

    let mut ecc = [0; ECC_LEN];
    ecc.copy_from_slice(&working[ECC_OFFSET..]);
    Some(ecc)
}
