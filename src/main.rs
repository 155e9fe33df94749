use clap::{Parser, ValueEnum};

use voltage_divider::{Ohm, RSeries, VoltageDivider, E12, E24, E3, E6};

/// Calculate the missing quantity of a voltage divider, or pick the best
/// resistor pair for it from available parts.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Input voltage in volts
    #[arg(long)]
    v1: Option<f64>,
    /// Top resistor in ohms
    #[arg(long)]
    r1: Option<f64>,
    /// Bottom resistor in ohms
    #[arg(long)]
    r2: Option<f64>,
    /// Output voltage in volts
    #[arg(long)]
    v2: Option<f64>,
    /// Available resistor values in ohms, comma separated
    #[arg(long, value_delimiter = ',', conflicts_with = "series")]
    resistors: Vec<f64>,
    /// Draw the resistor catalog from a standard E-series instead
    #[arg(long, value_enum)]
    series: Option<Series>,
    /// Restrict the E-series catalog to one decade, e.g. 3 for 1k up to 10k
    #[arg(long, requires = "series")]
    decade: Option<i32>,
    /// Also draw the resolved divider as a schematic
    #[cfg(feature = "schematic")]
    #[arg(long)]
    schematic: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Series {
    E3,
    E6,
    E12,
    E24,
}

impl Series {
    fn catalog(self, decade: Option<i32>) -> Vec<Ohm> {
        let series: &RSeries = match self {
            Series::E3 => &E3,
            Series::E6 => &E6,
            Series::E12 => &E12,
            Series::E24 => &E24,
        };
        match decade {
            Some(exp) => series.decade(exp),
            None => series.ohms(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut builder = VoltageDivider::builder();
    if let Some(v1) = args.v1 {
        builder = builder.v1(v1);
    }
    if let Some(r1) = args.r1 {
        builder = builder.r1(r1);
    }
    if let Some(r2) = args.r2 {
        builder = builder.r2(r2);
    }
    if let Some(v2) = args.v2 {
        builder = builder.v2(v2);
    }
    if let Some(series) = args.series {
        builder = builder.resistors(series.catalog(args.decade));
    } else if !args.resistors.is_empty() {
        builder = builder.resistors(args.resistors.iter().copied());
    }

    let divider = builder.build()?;
    println!("{divider}");

    #[cfg(feature = "schematic")]
    if args.schematic {
        print!("{}", voltage_divider::schematic::render(&divider));
    }
    Ok(())
}
