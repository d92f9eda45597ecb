//! Handlers behind the one-shot CLI commands.
//!
//! Each handler builds a console controller, runs one controller operation and
//! prints the outcome. Backend failures have already been shown by the
//! presenter when a handler returns them.

pub mod auth;
pub mod lots;
pub mod reservations;

use crate::controller::DashboardController;
use crate::models::User;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use std::error::Error;

fn require_session(controller: &DashboardController) -> Result<User, Box<dyn Error>> {
    controller
        .state()
        .current_user()
        .cloned()
        .ok_or_else(|| "Not logged in. Run `parkctl login` first.".into())
}

fn require_admin(controller: &DashboardController) -> Result<User, Box<dyn Error>> {
    let user = require_session(controller)?;
    if !user.is_admin() {
        return Err("Admin access required".into());
    }
    Ok(user)
}

/// Returns `value`, or asks for it when it was not given on the command line.
fn prompt_text(value: Option<String>, prompt: &str) -> Result<String, Box<dyn Error>> {
    if let Some(value) = value {
        return Ok(value);
    }
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| format!("Input error: {}", e))?;
    Ok(input)
}

fn prompt_password(value: Option<String>, confirm: bool) -> Result<String, Box<dyn Error>> {
    if let Some(value) = value {
        return Ok(value);
    }
    let theme = ColorfulTheme::default();
    let mut password = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        password = password.with_confirmation("Repeat password", "Passwords do not match");
    }
    let password = password
        .interact()
        .map_err(|e| format!("Password error: {}", e))?;
    Ok(password)
}
