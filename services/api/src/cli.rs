use crate::demo::{run_demo, run_roster_check, DemoArgs, RosterCheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use wedding_rsvp::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wedding RSVP Service",
    about = "Run and exercise the wedding RSVP service from the command line",
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
    /// Inspect the static guest roster
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
    /// Walk the RSVP flow end-to-end against an in-memory mail transport
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Match a name against the roster the way the RSVP endpoint would
    Check(RosterCheckArgs),
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
        Command::Roster {
            command: RosterCommand::Check(args),
        } => run_roster_check(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
