use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabbox::{init_logging, render, BoxConfig, GcodeSettings, OutputFormat};

#[derive(Parser)]
#[command(
    name = "tabbox",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about = "Generate laser-cut finger-jointed box panels"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate all panels of a box
    Generate {
        /// JSON box configuration; defaults are used when omitted
        #[arg(long, short)]
        config: Option<PathBuf>,
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,
        /// Output file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 1)]
        passes: u32,
        #[arg(long, default_value_t = 1000)]
        power: u32,
        #[arg(long, default_value_t = 500.0)]
        feed: f64,
    },
    /// Print the default configuration as JSON
    Defaults,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            format,
            output,
            passes,
            power,
            feed,
        } => {
            let config = match config {
                Some(path) => BoxConfig::load(&path)
                    .with_context(|| format!("loading configuration {}", path.display()))?,
                None => BoxConfig::default(),
            };
            let gcode = GcodeSettings {
                laser_passes: passes,
                laser_power: power,
                feed_rate: feed,
                ..GcodeSettings::default()
            };

            let (artifact, summary) =
                render(&config, format, &gcode).context("generating box")?;

            match output {
                Some(path) => {
                    std::fs::write(&path, artifact)
                        .with_context(|| format!("writing {}", path.display()))?;
                    tracing::info!(
                        "Wrote {} panels ({} cutouts) to {}",
                        summary.panels,
                        summary.cutouts,
                        path.display()
                    );
                }
                None => print!("{}", artifact),
            }
        }
        Commands::Defaults => {
            println!("{}", BoxConfig::default().to_json_pretty()?);
        }
    }

    Ok(())
}
