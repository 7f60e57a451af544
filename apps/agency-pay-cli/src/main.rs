use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use commands::filter_pay_chart::FilterArgs;
use config::AgencyConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "agency-pay")]
#[command(about = "Agency Pay - Beans, Diamonds and PK reward calculator")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override engine.max_exact_budget from the configuration
    #[arg(long, global = true)]
    max_exact_budget: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Beans to Diamonds (greedy, most expensive package first)
    BeansToDiamonds {
        /// Bean balance
        #[arg(allow_negative_numbers = true)]
        beans: i64,

        /// Restrict to these packages, e.g. "999→275" (repeatable)
        #[arg(short, long = "package")]
        packages: Vec<String>,

        /// Also compute the exact optimum and report the gap
        #[arg(long)]
        compare_exact: bool,

        /// Write the breakdown CSV here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Convert Diamonds to the maximum number of Beans
    DiamondsToBeans {
        /// Diamond balance
        #[arg(allow_negative_numbers = true)]
        diamonds: i64,

        /// Restrict to these packages, e.g. "275→999" (repeatable)
        #[arg(short, long = "package")]
        packages: Vec<String>,

        /// Write the breakdown CSV here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Pick the PK event that wins the most Beans for a Diamond balance
    OptimizePk {
        /// Diamond balance (1 Diamond = 10 PK points)
        #[arg(allow_negative_numbers = true)]
        diamonds: i64,

        /// Write the breakdown CSV here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Filter the agency pay chart
    FilterPayChart {
        /// Pay chart CSV
        chart: PathBuf,

        /// Keep only these rankings (repeatable)
        #[arg(short, long = "rank")]
        ranks: Vec<String>,

        #[arg(long)]
        min_salary: Option<u64>,

        #[arg(long)]
        max_salary: Option<u64>,

        #[arg(long)]
        min_diamonds: Option<u64>,

        #[arg(long)]
        max_diamonds: Option<u64>,

        /// Write the filtered chart CSV here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Summarize the PK rules and rewards sheet
    PkRules {
        /// Rules and rewards CSV
        rules: PathBuf,

        /// Write the summary CSV here
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the active catalogs as CSVs with a matching config file
    WriteCatalogs {
        /// Output directory
        #[arg(short, long, default_value = "catalogs")]
        output_dir: PathBuf,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config =
        AgencyConfig::load(cli.config.as_deref())?.with_max_exact_budget(cli.max_exact_budget)?;

    match cli.command {
        Commands::BeansToDiamonds {
            beans,
            packages,
            compare_exact,
            out,
        } => commands::beans_to_diamonds::execute(
            beans,
            packages,
            compare_exact,
            out,
            cli.json,
            &config,
        ),

        Commands::DiamondsToBeans {
            diamonds,
            packages,
            out,
        } => commands::diamonds_to_beans::execute(diamonds, packages, out, cli.json, &config),

        Commands::OptimizePk { diamonds, out } => {
            commands::optimize_pk::execute(diamonds, out, cli.json, &config)
        }

        Commands::FilterPayChart {
            chart,
            ranks,
            min_salary,
            max_salary,
            min_diamonds,
            max_diamonds,
            out,
        } => commands::filter_pay_chart::execute(
            chart,
            FilterArgs {
                ranks,
                min_salary,
                max_salary,
                min_diamonds,
                max_diamonds,
            },
            out,
            cli.json,
        ),

        Commands::PkRules { rules, out } => commands::pk_rules::execute(rules, out, cli.json),

        Commands::WriteCatalogs { output_dir } => {
            commands::write_catalogs::execute(output_dir, &config)
        }
    }
}
