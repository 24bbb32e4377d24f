//! Lookup tables for the EDC checksum and the P/Q parity computation
//!
//! Both tables are a pure function of two fixed polynomials. [`SectorTables::get`] builds them the
//! first time they are needed and shares the result for the rest of the process.

use std::sync::LazyLock;

// x^8 + x^4 + x^3 + x^2 + 1
const GF8_PRIMITIVE_POLYNOMIAL: u16 = 0x11D;

// (x^16 + x^15 + x^2 + 1) * (x^16 + x^2 + x + 1)
const EDC_POLYNOMIAL: u32 = 0x8001801B;

/// Number of parity equations in the coefficient table.
pub const COEFFICIENT_ROWS: usize = 43;

// Q-parity vectors are 43 data bytes + 2 parity bytes long
const PARITY_VECTOR_LEN: usize = 45;

static TABLES: LazyLock<SectorTables> = LazyLock::new(|| {
    log::debug!("Building CD-ROM EDC/ECC lookup tables");
    SectorTables::build()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorTables {
    crc: [u32; 256],
    coefficients: [[u16; 256]; COEFFICIENT_ROWS],
}

impl SectorTables {
    /// Build both tables from scratch.
    ///
    /// Prefer [`SectorTables::get`], which only builds them once per process.
    #[must_use]
    pub fn build() -> Self {
        let field = Gf8::new();
        Self { crc: build_crc_table(), coefficients: build_coefficient_table(&field) }
    }

    /// Process-wide tables, built on first use.
    #[must_use]
    pub fn get() -> &'static Self {
        &TABLES
    }

    #[must_use]
    pub fn crc_table(&self) -> &[u32; 256] {
        &self.crc
    }

    /// Coefficient table indexed by `[equation][byte]`. Each entry packs the product of the byte
    /// with the P coefficient in the low 8 bits and with the Q coefficient in the high 8 bits.
    #[must_use]
    pub fn coefficients(&self) -> &[[u16; 256]; COEFFICIENT_ROWS] {
        &self.coefficients
    }

    /// Table-driven reflected CRC-32 over `bytes` with initial value 0 and no final XOR.
    #[must_use]
    pub fn edc(&self, bytes: &[u8]) -> u32 {
        bytes.iter().fold(0, |crc, &byte| {
            self.crc[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8)
        })
    }
}

fn reflect(value: u32, width: u32) -> u32 {
    value.reverse_bits() >> (32 - width)
}

fn build_crc_table() -> [u32; 256] {
    let mut table = [0; 256];

    for (i, entry) in table.iter_mut().enumerate() {
        let mut register = reflect(i as u32, 8) << 24;

        for _ in 0..8 {
            register = if register & 0x80000000 != 0 {
                (register << 1) ^ EDC_POLYNOMIAL
            } else {
                register << 1
            };
        }

        *entry = reflect(register, 32);
    }

    table
}

/// Log/antilog tables for GF(2^8).
struct Gf8 {
    log: [u8; 256],
    antilog: [u8; 256],
}

impl Gf8 {
    fn new() -> Self {
        // antilog[255] is never written and stays 0; zero has no discrete log so log[0] stays 0
        let mut log = [0; 256];
        let mut antilog = [0; 256];

        let mut b: u16 = 1;
        for i in 0..255 {
            log[b as usize] = i as u8;
            antilog[i] = b as u8;

            b <<= 1;
            if b & 0x100 != 0 {
                b ^= GF8_PRIMITIVE_POLYNOMIAL;
            }
        }

        Self { log, antilog }
    }

    fn div(&self, a: u8, b: u8) -> u8 {
        if a == 0 {
            return 0;
        }

        let mut exponent = i16::from(self.log[a as usize]) - i16::from(self.log[b as usize]);
        if exponent < 0 {
            exponent += 255;
        }

        self.antilog[exponent as usize]
    }

    fn mul_nonzero(&self, a: u8, b: u8) -> u8 {
        let mut exponent = u16::from(self.log[a as usize]) + u16::from(self.log[b as usize]);
        if exponent >= 255 {
            exponent -= 255;
        }

        self.antilog[exponent as usize]
    }
}

fn build_coefficient_table(field: &Gf8) -> [[u16; 256]; COEFFICIENT_ROWS] {
    let mut p_coefficients = [0_u8; PARITY_VECTOR_LEN];
    let mut q_coefficients = [0_u8; PARITY_VECTOR_LEN];

    for i in 0..PARITY_VECTOR_LEN {
        let element = field.antilog[PARITY_VECTOR_LEN - 1 - i];
        p_coefficients[i] = field.div(element, field.antilog[1]) ^ 1;
        q_coefficients[i] = element ^ 1;
    }

    let p_normalizer = p_coefficients[44];
    let q_normalizer = q_coefficients[43];
    for i in 0..PARITY_VECTOR_LEN {
        p_coefficients[i] = field.div(p_coefficients[i], p_normalizer);
        q_coefficients[i] = field.div(q_coefficients[i], q_normalizer);
    }

    // P parity coefficients are a subset of the Q parity coefficients, so one packed table of 43
    // rows serves both
    let mut table = [[0; 256]; COEFFICIENT_ROWS];
    for (row, products) in table.iter_mut().enumerate() {
        for byte in 1..=255_u8 {
            let p_product = field.mul_nonzero(byte, p_coefficients[row]);
            let q_product = field.mul_nonzero(byte, q_coefficients[row]);
            products[byte as usize] = u16::from(p_product) | (u16::from(q_product) << 8);
        }
    }

    table
}
