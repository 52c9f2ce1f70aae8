use abdm_core::config::{validate_anchor_date, ANCHOR_DATE_FORMAT};
use abdm_core::{CoreConfig, Identifier, RecordGenerator};
use api_shared::SuccessEnvelope;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "abdm")]
#[command(about = "ABDM mock health-record CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check an identifier and print its kind
    Validate {
        /// Aadhaar (12 digits) or ABHA (ABHA followed by 10 digits)
        identifier: String,
    },
    /// Print the health-records response for an identifier
    Generate {
        /// Aadhaar (12 digits) or ABHA (ABHA followed by 10 digits)
        identifier: String,
        /// Anchor date (YYYY-MM-DD) used instead of today
        #[arg(long, value_parser = parse_anchor_date)]
        anchor_date: Option<NaiveDate>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn parse_anchor_date(value: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(value, ANCHOR_DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))?;
    validate_anchor_date(date).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { identifier } => {
            let identifier = Identifier::parse(&identifier)?;
            println!("{}: {}", identifier, identifier.kind());
        }
        Commands::Generate {
            identifier,
            anchor_date,
            compact,
        } => {
            let generator = RecordGenerator::from_config(&CoreConfig::new(anchor_date));
            let record = generator.generate_from_str(&identifier)?;
            let envelope = SuccessEnvelope::records(record);
            let json = if compact {
                serde_json::to_string(&envelope)?
            } else {
                serde_json::to_string_pretty(&envelope)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
