//! dcdc - DC-DC Converter Designer
//!
//! Sizes Buck, Boost and Buck-Boost converters and exports their waveforms.
//!
//! # Usage
//!
//! ```bash
//! dcdc design --topology boost --vin 12 --vout 24 --fsw 500 --save boost.json
//! dcdc open boost.json --waveforms boost.csv --mode current
//! RUST_LOG=debug dcdc defaults --topology buck-boost
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dcdc_designer::{
    error::{DesignerError, Result},
    report::{write_waveforms_csv, Report},
    size, synthesize_with_config,
    units::{parse_frequency_khz, parse_value},
    ConverterSpec, DesignRecord, DesignResult, DisplayMode, OperatingPoint, SynthesisConfig,
    Topology, DEFAULT_NUM_SAMPLES, DEFAULT_PERIODS,
};
use tracing_subscriber::EnvFilter;

/// DC-DC converter component sizing and waveform synthesis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Size a converter from its operating parameters
    Design {
        #[command(flatten)]
        params: DesignArgs,

        /// Save the design as JSON
        #[arg(long, value_name = "DESIGN_FILE")]
        save: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Open a saved design, size it again and print the report
    Open {
        /// Path to a design file (.json)
        #[arg(value_name = "DESIGN_FILE")]
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the default design for a topology
    Defaults {
        /// Converter topology (buck, boost, buck-boost)
        #[arg(short, long, default_value = "buck")]
        topology: Topology,
    },
}

/// Operating parameters; omitted values fall back to the topology defaults.
#[derive(clap::Args, Debug)]
struct DesignArgs {
    /// Converter topology (buck, boost, buck-boost)
    #[arg(short, long, default_value = "buck")]
    topology: Topology,

    /// Input voltage in V
    #[arg(long, value_parser = parse_value, allow_hyphen_values = true)]
    vin: Option<f64>,

    /// Output voltage in V (negative for an inverting Buck-Boost)
    #[arg(long, value_parser = parse_value, allow_hyphen_values = true)]
    vout: Option<f64>,

    /// Output current in A
    #[arg(long, value_parser = parse_value, allow_hyphen_values = true)]
    iout: Option<f64>,

    /// Switching frequency in kHz, or with a suffix (e.g. 1.2M)
    #[arg(long, value_parser = parse_frequency_khz)]
    fsw: Option<f64>,

    /// Efficiency as a fraction (0, 1]
    #[arg(long, value_parser = parse_value)]
    efficiency: Option<f64>,

    /// Target output voltage ripple in percent
    #[arg(long, value_parser = parse_value, allow_hyphen_values = true)]
    voltage_ripple: Option<f64>,

    /// Target inductor current ripple in percent
    #[arg(long, value_parser = parse_value, allow_hyphen_values = true)]
    current_ripple: Option<f64>,
}

impl DesignArgs {
    fn to_spec(&self) -> Result<ConverterSpec> {
        let defaults = OperatingPoint::defaults(self.topology);
        let point = OperatingPoint {
            vin: self.vin.unwrap_or(defaults.vin),
            vout: self.vout.unwrap_or(defaults.vout),
            iout: self.iout.unwrap_or(defaults.iout),
            fsw: self.fsw.unwrap_or(defaults.fsw),
            efficiency: self.efficiency.unwrap_or(defaults.efficiency),
            voltage_ripple: self
                .voltage_ripple
                .map_or(defaults.voltage_ripple, |pct| pct / 100.0),
            current_ripple: self
                .current_ripple
                .map_or(defaults.current_ripple, |pct| pct / 100.0),
        };
        ConverterSpec::new(self.topology, point)
    }
}

/// Waveform export options.
#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Write synthesized waveforms to a CSV file
    #[arg(long, value_name = "CSV_FILE")]
    waveforms: Option<PathBuf>,

    /// Channels to export (all, duty, current, voltage)
    #[arg(long, default_value = "all")]
    mode: DisplayMode,

    /// Number of samples across the window
    #[arg(long, default_value_t = DEFAULT_NUM_SAMPLES)]
    samples: usize,

    /// Window length in switching periods
    #[arg(long, default_value_t = DEFAULT_PERIODS)]
    periods: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Design {
            params,
            save,
            output,
        } => {
            let spec = params.to_spec()?;
            let result = size(&spec)?;
            if let Some(path) = save {
                DesignRecord::from_design(&result).save(&path)?;
            }
            present(&result, &output)
        }

        Command::Open { path, output } => {
            let result = DesignRecord::load(&path)?.to_design()?;
            present(&result, &output)
        }

        Command::Defaults { topology } => {
            let result = size(&ConverterSpec::defaults(topology))?;
            println!("{}", Report::new(&result));
            Ok(())
        }
    }
}

/// Print the report and export waveforms if requested.
fn present(result: &DesignResult, output: &OutputArgs) -> Result<()> {
    println!("{}", Report::new(result));

    if let Some(path) = &output.waveforms {
        let config = SynthesisConfig::new()
            .with_num_samples(output.samples)
            .with_periods(output.periods);
        let waves = synthesize_with_config(result, output.mode.channels(), &config)?;
        let file = File::create(path).map_err(|e| write_error(path, e))?;
        let mut writer = BufWriter::new(file);
        write_waveforms_csv(&waves, &mut writer)?;
        writer.flush().map_err(|e| write_error(path, e))?;
        tracing::info!(path = %path.display(), samples = waves.len(), "exported waveforms");
    }

    Ok(())
}

fn write_error(path: &Path, source: std::io::Error) -> DesignerError {
    DesignerError::FileWriteError {
        path: path.display().to_string(),
        source,
    }
}
