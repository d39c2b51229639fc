use clap::{Parser, Subcommand};

mod cmd;
mod history;
mod i18n;
mod input;
mod tax;

#[derive(Parser, Debug)]
#[command(
    name = "taxng",
    version,
    about = "Nigeria Tax Calculator for PAYE, VAT, Withholding and Capital Gains"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a single tax assessment
    Compute(cmd::compute::ComputeCommand),
    /// Assess a file of inputs and show the session history
    Batch(cmd::batch::BatchCommand),
    /// Show the personal income tax band schedule
    Bands(cmd::bands::BandsCommand),
    /// Render the most recent assessment as an HTML summary
    Report(cmd::report::ReportCommand),
    /// Print expected input formats
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Compute(cmd) => cmd.exec(),
        Command::Batch(cmd) => cmd.exec(),
        Command::Bands(cmd) => cmd.exec(),
        Command::Report(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
