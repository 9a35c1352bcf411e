use crate::report::{run_donor_search, run_inventory_report, DonorSearchArgs, InventoryReportArgs};
use crate::server;
use bloodlink::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "BloodLink",
    about = "Search blood donors and review hospital blood inventory from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the donor registry
    Donors {
        #[command(subcommand)]
        command: DonorsCommand,
    },
    /// Review stock tiers and incoming requests
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DonorsCommand {
    /// Filter donors by blood group and location
    Search(DonorSearchArgs),
}

#[derive(Subcommand, Debug)]
enum InventoryCommand {
    /// Print the stock, request and availability boards
    Report(InventoryReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Donors {
            command: DonorsCommand::Search(args),
        } => run_donor_search(args),
        Command::Inventory {
            command: InventoryCommand::Report(args),
        } => run_inventory_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["bloodlink-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_donor_search_flags() {
        let cli = Cli::try_parse_from([
            "bloodlink-api",
            "donors",
            "search",
            "--blood-group",
            "B+",
            "--location",
            "bos",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Donors {
                command: DonorsCommand::Search(args),
            }) => {
                assert_eq!(args.blood_group.as_deref(), Some("B+"));
                assert_eq!(args.location.as_deref(), Some("bos"));
                assert!(args.registry.is_none());
            }
            other => panic!("expected donors search, got {other:?}"),
        }
    }

    #[test]
    fn parses_inventory_threshold_overrides() {
        let cli = Cli::try_parse_from([
            "bloodlink-api",
            "inventory",
            "report",
            "--critical-max",
            "2",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Inventory {
                command: InventoryCommand::Report(args),
            }) => {
                assert_eq!(args.critical_max, Some(2));
                assert_eq!(args.low_max, None);
            }
            other => panic!("expected inventory report, got {other:?}"),
        }
    }
}
