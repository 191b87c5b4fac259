//! Cellgrid - A spreadsheet cell engine driven by SET/GET commands

use std::io;
use std::process::ExitCode;

use cellgrid::shell::{Reply, Shell};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellgrid")]
#[command(version)]
#[command(about = "Spreadsheet cell engine with arithmetic and range formulas")]
#[command(long_about = r#"
Spreadsheet cell engine with arithmetic and range formulas.

Commands (one per line):
  SET <cellId> <value>    Store a number, text or formula
  GET <cellId>            Print the value a cell displays
  QUIT                    Leave the shell

Formulas:
  =B1+C1*2                Left-to-right arithmetic over cells and integers
  =SUM(B1:B3)             SUM, MUL, AVG, MAX or MIN over one column

Example usage:
  cellgrid
  cellgrid -c "SET B1 2" -c "SET A1 =B1*3" -c "GET A1"
"#)]
struct Args {
    /// Execute a command non-interactively (can be repeated)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Do not print the welcome banner
    #[arg(short, long)]
    quiet: bool,

    /// Log filter, e.g. "debug" or "cellgrid_core=trace"
    #[arg(long, value_name = "FILTER", env = "CELLGRID_LOG", default_value = "warn")]
    log: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new();

    if !args.commands.is_empty() {
        let mut failed = false;
        for line in &args.commands {
            let reply = shell.execute(line);
            println!("{}", reply);
            failed |= reply.is_failure();
            if reply == Reply::Quit {
                break;
            }
        }
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    shell.run(io::stdin().lock(), &mut io::stdout().lock(), !args.quiet)?;
    Ok(ExitCode::SUCCESS)
}
