use crate::core::classifier::Criteria;
use crate::export::{ExportFormat, ReportKind};
use clap::{Args, Parser, Subcommand};
use std::str::FromStr;

/// Command-line interface definition for prodmetrics
#[derive(Parser)]
#[command(
    name = "prodmetrics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Worker productivity, idle time and anomalous jobs from a completed-ticket export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Job-records CSV (overrides `data_file` from the configuration)
    #[arg(global = true, long = "input", short = 'i')]
    pub input: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters applied to the dataset before any metric is computed.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Date range: YYYY, YYYY-MM, YYYY-MM-DD or start:end in the same form
    #[arg(global = true, long, short = 'p')]
    pub period: Option<String>,

    /// Team name (exact match)
    #[arg(global = true, long)]
    pub team: Option<String>,

    /// Shift (exact match)
    #[arg(global = true, long)]
    pub shift: Option<String>,

    /// Employee type: Artist or QC
    #[arg(global = true, long = "employee-type")]
    pub employee_type: Option<String>,

    /// Product label, e.g. "Floorplan Queue"
    #[arg(global = true, long)]
    pub product: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,
    },

    /// Headline averages and the ranked team summary
    Summary,

    /// Ranked worker summary with worked days and idle time
    Workers {
        #[arg(long, help = "Show only the first N workers")]
        top: Option<usize>,
    },

    /// One worker's product breakdown and job detail (defaults to the top performer)
    Worker {
        #[arg(long)]
        name: Option<String>,
    },

    /// Flag short, slow and oversized-time jobs
    Track {
        /// all, sip, smt or hts (flag labels such as "Short IP" also work)
        #[arg(long, default_value = "all", value_parser = Criteria::from_str)]
        criteria: Criteria,
    },

    /// Export a report to CSV or JSON
    Export {
        #[arg(long, value_enum)]
        report: ReportKind,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Absolute output path
        #[arg(long)]
        file: String,

        /// Criteria for the tracking report: all, sip, smt or hts
        #[arg(long, default_value = "all", value_parser = Criteria::from_str)]
        criteria: Criteria,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
