mod api;
mod commands;
mod consts;
mod controller;
mod error_classifier;
mod events;
mod logging;
mod models;
mod presenter;
mod pretty;
mod report;
mod session;
mod storage;
mod ui;

use crate::api::error::ApiError;
use crate::commands::lots::LotFields;
use crate::pretty::print_cmd_error;
use crate::session::{console_controller, run_headless_mode, run_tui_mode, setup_session};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line client for the parking reservation dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and store the session
    Login {
        #[arg(long, short)]
        username: Option<String>,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create a new user account
    Register {
        #[arg(long, short)]
        username: Option<String>,

        #[arg(long, short)]
        email: Option<String>,

        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in user
    Whoami {
        /// Re-read the profile from the backend first
        #[arg(long)]
        refresh: bool,
    },
    /// Open the dashboard for the logged-in user
    Dashboard {
        /// Print the dashboard once instead of opening the interactive screen
        #[arg(long, default_value = "false")]
        headless: bool,

        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Manage parking lots (admin)
    #[command(subcommand)]
    Lots(LotsCommand),
    /// Book a spot in a parking lot
    Book {
        #[arg(long, value_name = "LOT_ID")]
        lot_id: u64,
    },
    /// Release a reservation
    Release {
        #[arg(value_name = "RESERVATION_ID")]
        reservation_id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the active reservation
    Active,
    /// Download your reservation history as CSV
    Export,
}

#[derive(Subcommand)]
enum LotsCommand {
    /// List parking lots with dashboard totals
    List,
    /// Create a parking lot
    Create {
        #[command(flatten)]
        fields: LotArgs,
    },
    /// Update a parking lot; omitted fields keep their value
    Update {
        #[arg(value_name = "LOT_ID")]
        lot_id: u64,

        #[command(flatten)]
        fields: LotArgs,
    },
    /// Delete a parking lot
    Delete {
        #[arg(value_name = "LOT_ID")]
        lot_id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// List the spots of a parking lot
    Spots {
        #[arg(value_name = "LOT_ID")]
        lot_id: u64,
    },
    /// Show occupancy, booking and revenue series
    Charts,
}

#[derive(ClapArgs)]
struct LotArgs {
    /// Prime location name
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    price: Option<f64>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    pin_code: Option<String>,

    /// Number of spots
    #[arg(long)]
    spots: Option<u32>,
}

impl From<LotArgs> for LotFields {
    fn from(args: LotArgs) -> Self {
        Self {
            name: args.name,
            price_per_hour: args.price,
            address: args.address,
            pin_code: args.pin_code,
            number_of_spots: args.spots,
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // The full-screen dashboard shows messages in its own activity log
    let interactive = matches!(args.command, Command::Dashboard { headless: false, .. });
    if !interactive {
        logging::init_console();
    }

    if let Err(e) = run(args.command).await {
        // Backend failures were already shown by the presenter
        if !e.is::<ApiError>() {
            print_cmd_error!("Command failed.", "{}", e);
        }
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Login { username, password } => commands::auth::login(username, password).await,
        Command::Register {
            username,
            email,
            password,
        } => commands::auth::register(username, email, password).await,
        Command::Logout => commands::auth::logout(),
        Command::Whoami { refresh } => commands::auth::whoami(refresh).await,
        Command::Dashboard {
            headless,
            with_background,
        } => {
            if headless {
                run_headless_mode(console_controller(false)?).await
            } else {
                let session = setup_session().await?;
                run_tui_mode(session, with_background).await
            }
        }
        Command::Lots(lots) => match lots {
            LotsCommand::List => commands::lots::list().await,
            LotsCommand::Create { fields } => commands::lots::create(fields.into()).await,
            LotsCommand::Update { lot_id, fields } => {
                commands::lots::update(lot_id, fields.into()).await
            }
            LotsCommand::Delete { lot_id, yes } => commands::lots::delete(lot_id, yes).await,
            LotsCommand::Spots { lot_id } => commands::lots::spots(lot_id).await,
            LotsCommand::Charts => commands::lots::charts().await,
        },
        Command::Book { lot_id } => commands::reservations::book(lot_id).await,
        Command::Release {
            reservation_id,
            yes,
        } => commands::reservations::release(reservation_id, yes).await,
        Command::Active => commands::reservations::active().await,
        Command::Export => commands::reservations::export(),
    }
}
