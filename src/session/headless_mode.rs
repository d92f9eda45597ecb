//! Headless mode execution

use super::messages::{print_session_exit_success, print_session_starting};
use crate::controller::{DashboardController, View};
use crate::pretty::print_cmd_section;
use crate::report;
use std::error::Error;

/// Loads the dashboard once and prints it as text.
///
/// # Returns
/// * `Ok(())` - Dashboard printed
/// * `Err` - No stored session
pub async fn run_headless_mode(mut controller: DashboardController) -> Result<(), Box<dyn Error>> {
    if !controller.check_auth().await {
        return Err("Not logged in. Run `parkctl login` first.".into());
    }

    let state = controller.state();
    let username = state
        .current_user()
        .map(|user| user.display_name())
        .unwrap_or_default();

    match state.view() {
        View::Admin => {
            print_session_starting("admin", &username);
            print_cmd_section!("Overview");
            if let Some(stats) = &state.admin_stats {
                report::admin_stats_lines(stats)
                    .iter()
                    .for_each(|line| println!("{}", line));
            }
            print_cmd_section!("Parking lots");
            state
                .parking_lots
                .iter()
                .for_each(|lot| println!("{}", report::format_lot(lot)));
            print_cmd_section!("Users");
            state
                .users
                .iter()
                .for_each(|user| println!("{}", report::format_user(user)));
            print_cmd_section!("Reservations");
            state
                .reservations
                .iter()
                .for_each(|r| println!("{}", report::format_reservation(r)));
        }
        View::User => {
            print_session_starting("user", &username);
            print_cmd_section!("Overview");
            if let Some(stats) = &state.user_stats {
                report::user_stats_lines(stats)
                    .iter()
                    .for_each(|line| println!("{}", line));
            }
            print_cmd_section!("Available lots");
            state
                .available_lots
                .iter()
                .for_each(|lot| println!("{}", report::format_lot(lot)));
            print_cmd_section!("My reservations");
            state
                .my_reservations
                .iter()
                .for_each(|r| println!("{}", report::format_reservation(r)));
        }
        View::Unauthenticated(_) => {}
    }

    print_session_exit_success();
    Ok(())
}
