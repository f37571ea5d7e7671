use anyhow::{Context, Result};
use clap::Parser;
use hypotest::cli::{Cli, OutputFormat};
use hypotest::csv_output::CsvOutput;
use hypotest::hypothesis::{run_test, NumericMatrix};
use hypotest::input;
use hypotest::json_output::JsonOutput;
use hypotest::summary::Summary;
use std::fs::File;
use std::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Read the table from --data, a file, or stdin
fn load_matrix(args: &Cli) -> Result<NumericMatrix> {
    match (&args.data, &args.input) {
        (Some(data), None) => Ok(input::parse_inline(data)?),
        (None, Some(path)) => {
            let options = args.input_options()?;
            if path.as_os_str() == "-" {
                Ok(input::parse_reader(std::io::stdin().lock(), &options)?)
            } else {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                input::parse_reader(BufReader::new(file), &options)
                    .with_context(|| format!("Failed to read table from {}", path.display()))
            }
        }
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot specify both FILE and --data. Choose one.");
        }
        (None, None) => {
            anyhow::bail!("Must specify either FILE or --data. Usage: hypotest FILE or hypotest --data \"10,20;30,40\"");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = args.resolve_config()?;
    let matrix = load_matrix(&args)?;
    tracing::debug!(?config, rows = matrix.n_rows(), "loaded input");

    let result = run_test(args.test, &matrix, &config)
        .with_context(|| format!("{} could not be computed", args.test))?;

    let summary = Summary::from_result(&result);
    match args.format {
        OutputFormat::Text => print!("{}", summary.to_text()),
        OutputFormat::Json => println!("{}", JsonOutput::new(&result).to_json()?),
        OutputFormat::Csv => print!("{}", CsvOutput::new(&summary).to_csv()),
    }

    Ok(())
}
