use anyhow::{Context, Result};
use checksum_fw::{Checksum, Input};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "checksum_fw", version)]
#[command(about = "Reference checksum for hex-encoded input, as computed by the firmware")]
struct Args {
    /// Input bytes as hex, e.g. `de010203` or `0xDE 01 02 03`
    hex: Vec<String>,

    /// Checksum only the first N bytes of the input
    #[arg(long, value_name = "N")]
    length: Option<u32>,

    /// Print only the checksum value
    #[arg(long, short)]
    quiet: bool,
}

pub fn run() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let data = decode_hex(&args.hex)?;
    debug!("decoded {} input bytes", data.len());

    let result = checksum(&data, args.length)?;
    info!("{} branch selected", result.branch);

    if args.quiet {
        println!("0x{:02X}", result.value);
    } else {
        println!("0x{:02X} {}", result.value, result.branch);
    }

    Ok(())
}

fn checksum(data: &[u8], length: Option<u32>) -> Result<Checksum> {
    let input = match length {
        Some(length) => Input::with_length(data, length)
            .with_context(|| format!("cannot checksum {length} bytes of input"))?,
        None => Input::from(data),
    };

    Ok(input.checksum_with_branch())
}

fn decode_hex(parts: &[String]) -> Result<Vec<u8>> {
    let digits: String = parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect();

    hex::decode(&digits).with_context(|| format!("invalid hex input {digits:?}"))
}
