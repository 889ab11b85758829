use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use tokio::time::Duration;

use crate::consts::TICK_STRING;

/// Spinner for long-running steps. Outside a terminal the message is printed
/// once instead and no spinner is returned.
pub fn create_spinner(message: &str) -> Option<ProgressBar> {
    if !std::io::stdout().is_terminal() {
        println!("{message}...");
        return None;
    }

    let style = ProgressStyle::default_spinner()
        .tick_chars(TICK_STRING)
        .template("{spinner:.green} {msg:.cyan.bold}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());

    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

pub fn clear_spinner(spinner: Option<ProgressBar>) {
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
}
