//! Login, registration and session inspection.

use super::{prompt_password, prompt_text, require_session};
use crate::pretty::print_cmd_info;
use crate::report::format_timestamp;
use crate::session::console_controller;
use std::error::Error;

pub async fn login(
    username: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(false)?;
    if let Some(user) = controller.state().current_user() {
        log::info!("Replacing the session of {}", user.display_name());
    }

    let username = prompt_text(username, "Username")?;
    let password = prompt_password(password, false)?;
    let form = controller.login_form_mut();
    form.username = username;
    form.password = password;

    controller.login().await?;

    let user = require_session(&controller)?;
    print_cmd_info!(
        "✅ Logged in",
        "{} ({}). Run `parkctl dashboard` to open the dashboard.",
        user.display_name(),
        user.role
    );
    Ok(())
}

pub async fn register(
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(false)?;
    controller.show_register(true);

    let username = prompt_text(username, "Username")?;
    let email = prompt_text(email, "Email")?;
    let password = prompt_password(password, true)?;
    let form = controller.register_form_mut();
    form.username = username;
    form.email = email;
    form.password = password;

    controller.register().await?;
    println!("Next step - log in: parkctl login");
    Ok(())
}

pub fn logout() -> Result<(), Box<dyn Error>> {
    println!("Logging out and clearing the stored session...");
    let mut controller = console_controller(false)?;
    controller.logout();
    Ok(())
}

/// Prints the logged-in user, optionally refreshed from the backend first.
pub async fn whoami(refresh: bool) -> Result<(), Box<dyn Error>> {
    let mut controller = console_controller(false)?;
    if controller.state().is_logged_in() && refresh {
        controller.refresh_profile().await?;
    }
    let user = require_session(&controller)?;
    print_cmd_info!(
        "Logged in",
        "#{} {} <{}>\nRole: {}\nMember since: {}\nLast login: {}",
        user.id,
        user.display_name(),
        user.email,
        user.role,
        format_timestamp(user.created_at),
        format_timestamp(user.last_login)
    );
    Ok(())
}
