pub mod report;
pub mod scan;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a source tree and print coverage totals
    Scan(scan::ScanArgs),
    /// Scan a source tree and render a markdown coverage report
    Report(report::ReportArgs),
}

pub fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Scan(args) => scan::run(args),
        Command::Report(args) => report::run(args),
    }
}
