mod convert;

use crate::convert::ConvertOptions;
use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Convert a raw CD-ROM image (2352 bytes per sector) to an ISO image (2048 bytes per sector)
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input .bin file path
    input_path: String,

    /// Output .iso file path
    output_path: String,

    /// Fail on sectors that could be either Mode 2 or Mode 2 Form 1/2 with a corrupt EDC
    #[arg(long, default_value_t)]
    strict: bool,

    /// Verify the stored EDC/ECC of every extracted sector
    #[arg(long, default_value_t)]
    verify: bool,

    /// Extract Mode 2 Form 2 sectors (2324-byte payloads) instead of rejecting them
    #[arg(long, default_value_t)]
    allow_form2: bool,
}

impl Args {
    fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            strict: self.strict,
            verify: self.verify,
            allow_form_2: self.allow_form2,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let input = File::open(&args.input_path)
        .with_context(|| format!("Error opening input file '{}'", args.input_path))?;
    let input_len = input
        .metadata()
        .with_context(|| format!("Error determining size of input file '{}'", args.input_path))?
        .len();
    let sector_count = convert::sector_count(input_len)?;

    log::info!("Converting {sector_count} sectors from '{}'", args.input_path);

    let output = File::create(&args.output_path)
        .with_context(|| format!("Error opening output file '{}'", args.output_path))?;

    let summary =
        convert::convert(BufReader::new(input), BufWriter::new(output), args.convert_options())?;

    log::info!(
        "Wrote {} bytes from {} sectors to '{}'",
        summary.bytes_written,
        summary.sectors,
        args.output_path
    );
    if summary.ambiguous_sectors != 0 {
        log::warn!(
            "{} sectors were ambiguous between Mode 2 and Mode 2 Form 1/2",
            summary.ambiguous_sectors
        );
    }

    Ok(())
}
