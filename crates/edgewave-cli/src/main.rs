//! edgewave command-line interface.
//!
//! Run diffraction sweeps from TOML configuration files:
//! ```sh
//! edgewave run bench.toml
//! edgewave validate bench.toml
//! edgewave compare bench.toml
//! edgewave script bench.toml -o finite_screen_diffraction.py
//! ```

mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use edgewave_core::script::SCRIPT_FILE_NAME;

#[derive(Parser)]
#[command(name = "edgewave")]
#[command(about = "Slit diffraction in a finite screen, with screen-edge waves")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a sweep from a TOML configuration file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file without running the sweep.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Compare bare and shielded screen edges for the configured bench.
    Compare {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Export a standalone Python script of the configured sweep.
    Script {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Script path (default: <output dir>/finite_screen_diffraction.py).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output } => {
            println!("edgewave finite-screen sweep");
            println!("============================");
            let job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            let result = runner::run_sweep(&job)?;
            runner::print_summary(&result);

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_csv {
                runner::write_pattern_csv(&result, &out_dir.join("pattern.csv"))?;
            }
            if job.output.save_json {
                runner::write_pattern_json(&result.pattern, &out_dir.join("pattern.json"))?;
            }
            if job.output.save_script {
                runner::write_script(&result.params, &result.sweep, &out_dir.join(SCRIPT_FILE_NAME))?;
            }

            println!("Sweep complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            job.setup.params().validate()?;
            let angles = job.sweep.angle_sweep()?.angles()?;
            println!(
                "Configuration is valid: {} ({} angles)",
                config.display(),
                angles.len()
            );
            Ok(())
        }
        Commands::Compare { config } => {
            println!("edgewave edge-shielding comparison");
            println!("==================================");
            let job = config::load_config(&config)?;
            runner::run_comparison(&job)?;
            Ok(())
        }
        Commands::Script { config, output } => {
            let job = config::load_config(&config)?;
            let path = output
                .unwrap_or_else(|| PathBuf::from(&job.output.directory).join(SCRIPT_FILE_NAME));
            runner::write_script(&job.setup.params(), &job.sweep.angle_sweep()?, &path)
        }
    }
}
