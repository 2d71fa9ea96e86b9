use crate::server;
use crate::validate::{run_closure_validation, run_hold_validation, ClosureFileArgs, HoldFileArgs};
use clap::{Args, Parser, Subcommand};
use pay_admin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Payments Admin",
    about = "Run the payments admin service or check upload files from the command line",
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
    /// Work with bulk closure files
    Closures {
        #[command(subcommand)]
        command: ClosureCommand,
    },
    /// Work with bulk hold files
    Holds {
        #[command(subcommand)]
        command: HoldCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ClosureCommand {
    /// Parse and validate a closure file without storing it
    Validate(ClosureFileArgs),
}

#[derive(Subcommand, Debug)]
enum HoldCommand {
    /// Parse and validate a bulk hold file without storing it
    Validate(HoldFileArgs),
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
        Command::Closures {
            command: ClosureCommand::Validate(args),
        } => run_closure_validation(args),
        Command::Holds {
            command: HoldCommand::Validate(args),
        } => run_hold_validation(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["pay-admin-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn hold_validation_takes_a_category() {
        let cli = Cli::try_parse_from([
            "pay-admin-api",
            "holds",
            "validate",
            "holds.csv",
            "--category",
            "4",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Holds {
                command: HoldCommand::Validate(args),
            }) => {
                assert_eq!(args.category, 4);
                assert_eq!(args.path.to_str(), Some("holds.csv"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
