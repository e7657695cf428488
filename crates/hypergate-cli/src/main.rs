use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hypergate_cli::commands::gates::{handle_gate_command, handle_gates_command};
use hypergate_cli::commands::routes::{handle_routes_command, RoutesCommandArgs};
use hypergate_cli::output::{print_logo, OutputFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hyperspace gate routing utilities")]
struct Cli {
    /// Override the gate dataset file path.
    #[arg(long)]
    gates_file: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Suppress the startup banner.
    #[arg(long)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest routes from a starting gate.
    Routes {
        /// Starting gate code.
        #[arg(long = "from")]
        from: String,
        /// Destination gate code; omit or pass "anywhere" to rank every
        /// reachable gate.
        #[arg(long = "to")]
        to: Option<String>,
    },
    /// List every gate in the dataset.
    Gates,
    /// Show one gate's details and outbound links.
    Gate {
        /// Gate code to inspect.
        code: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // The banner never goes out in JSON mode so output stays parseable.
    if !cli.no_logo && cli.format == OutputFormat::Text {
        print_logo();
    }

    let gates_file = cli.gates_file.as_deref();
    match cli.command {
        Command::Routes { from, to } => {
            handle_routes_command(gates_file, cli.format, &RoutesCommandArgs { from, to })
        }
        Command::Gates => handle_gates_command(gates_file, cli.format),
        Command::Gate { code } => handle_gate_command(gates_file, cli.format, &code),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
