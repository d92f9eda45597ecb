//! Presentation-layer capabilities the controller depends on.
//!
//! The controller never prints or prompts on its own; it asks a [`Presenter`]
//! to alert, notify, confirm or open a resource locator.

use crate::events::Event;
use crate::pretty::{print_cmd_error, print_cmd_info};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use std::process::Command;
use tokio::sync::mpsc;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait Presenter: Send + Sync {
    /// Shows a failure message to the user.
    fn alert(&self, message: &str);

    /// Shows a success or informational message to the user.
    fn notify(&self, message: &str);

    /// Asks the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;

    /// Opens a resource locator outside the client, e.g. a download in the browser.
    fn open_url(&self, url: &str);
}

/// Interactive terminal presenter used by one-shot commands.
#[derive(Debug, Clone, Default)]
pub struct ConsolePresenter {
    /// Answer every confirmation with yes (`--yes`).
    assume_yes: bool,
}

impl ConsolePresenter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Presenter for ConsolePresenter {
    fn alert(&self, message: &str) {
        print_cmd_error!(message);
    }

    fn notify(&self, message: &str) {
        print_cmd_info!("OK", "{}", message);
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }

    fn open_url(&self, url: &str) {
        println!("Opening {}", url);
        if let Err(e) = open_in_browser(url) {
            log::warn!("Could not launch a browser for {}: {}", url, e);
            println!("Open the link above in your browser to download the file.");
        }
    }
}

fn open_in_browser(url: &str) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };
    command.arg(url).spawn().map(|_| ())
}

/// Presenter for the full-screen dashboard: messages become activity-log events.
///
/// Confirmations are always declined, since destructive actions are not offered there.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    sender: mpsc::Sender<Event>,
}

impl ChannelPresenter {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    fn send(&self, event: Event) {
        if self.sender.try_send(event).is_err() {
            log::debug!("Activity log channel full or closed; dropping event");
        }
    }
}

impl Presenter for ChannelPresenter {
    fn alert(&self, message: &str) {
        self.send(Event::alert(message));
    }

    fn notify(&self, message: &str) {
        self.send(Event::success(message));
    }

    fn confirm(&self, _prompt: &str) -> bool {
        false
    }

    fn open_url(&self, url: &str) {
        match open_in_browser(url) {
            Ok(()) => self.send(Event::success(format!("Opened {}", url))),
            Err(e) => self.send(Event::alert(format!("Could not open {}: {}", url, e))),
        }
    }
}
