//! Host-side checker for the board variant registry.
//!
//! Run before flashing to confirm every board description is consistent and
//! to inspect the pin map a build will use.

mod checks;
mod report;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use mesh_board_variants::{BoardVariant, HardwareModel, REGISTRY};

use checks::{print_results, run_all_checks};

#[derive(Parser)]
#[command(name = "variant-check")]
#[command(about = "Validate and inspect mesh board variants")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered board
    List,
    /// Validate every registered board
    Validate,
    /// Print the full description of one board
    Show {
        /// Hardware model name (e.g. HELTEC_V3) or board name
        board: String,
    },
    /// Resolve a single named setting (e.g. LORA_CS, GPS_BAUDRATE)
    Get {
        /// Hardware model name (e.g. HELTEC_V3) or board name
        board: String,
        /// Setting name
        name: String,
    },
}

/// Resolve a board by hardware model name or by its human name
fn find_board(query: &str) -> Result<&'static BoardVariant> {
    if let Some(hardware) = HardwareModel::from_name(query) {
        return REGISTRY.find(hardware).map_err(|e| anyhow!("{}", e));
    }
    REGISTRY
        .variants()
        .iter()
        .copied()
        .find(|variant| variant.name.eq_ignore_ascii_case(query))
        .ok_or_else(|| anyhow!("unknown board: {}", query))
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::List => {
            println!("{}", "Registered boards".bold());
            for variant in REGISTRY.variants() {
                println!("  {}", report::summary_line(variant));
            }
        }
        Command::Validate => {
            println!("{}", "Board Variant Checks".bold());
            println!();

            let results = run_all_checks(&REGISTRY);
            print_results(&results);

            // Exit with error code if any check failed
            let failed = results.iter().filter(|r| !r.passed).count();
            if failed > 0 {
                std::process::exit(1);
            }
        }
        Command::Show { board } => {
            let variant = find_board(&board)?;
            print!("{}", report::describe(variant));
        }
        Command::Get { board, name } => {
            let variant = find_board(&board)?;
            let value = variant
                .value(&name)
                .map_err(|e| anyhow!("{}: {}", variant.name, e))?;
            println!("{}", value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_board_by_model_name() {
        let variant = find_board("heltec_v3").unwrap();
        assert_eq!(variant.hardware, HardwareModel::HeltecV3);
    }

    #[test]
    fn test_find_board_by_board_name() {
        let variant = find_board("LilyGO T-Echo").unwrap();
        assert_eq!(variant.hardware, HardwareModel::TEcho);
    }

    #[test]
    fn test_find_board_unknown() {
        assert!(find_board("TLORA_V1").is_err());
    }

    #[test]
    fn test_gps_settings_of_t22() {
        let variant = find_board("TBEAM").unwrap();
        assert_eq!(variant.value("GPS_RX_PIN").unwrap(), 12);
        assert_eq!(variant.value("GPS_TX_PIN").unwrap(), 15);
        assert_eq!(variant.value("GPS_BAUDRATE").unwrap(), 9600);
        assert_eq!(variant.value("GPS_SERIAL_NUM").unwrap(), 1);
    }
}
