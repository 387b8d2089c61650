// External crates
use clap::Parser;
use tracing::{debug, info_span};
use uuid::Uuid;

// Internal imports
use wsmgr_core::{ws_error, ws_error_hint, WsError};
use wsmgr_logging::{init_subscriber, LogSettings};
use wsmgr_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod commands;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    let _log_guard = init_subscriber(&LogSettings::from_env(args.debug));

    // Every log line of this run carries the same invocation id.
    let span = info_span!(
        "invocation",
        id = %Uuid::new_v4(),
        command = ?args.command
    );
    let _enter = span.enter();
    debug!("starting");

    if let Err(e) = execute_command(args) {
        ws_error!("{}", msg!(MESSAGES.error_generic, error = format!("{e:#}")));
        match e.downcast_ref::<WsError>() {
            Some(WsError::Inconsistent { .. }) => {
                ws_error_hint!("{}", MESSAGES.error_inconsistent_hint);
            }
            Some(WsError::ExternalUnavailable(_)) => {
                ws_error_hint!("{}", MESSAGES.error_unavailable_hint);
            }
            _ => {}
        }
        std::process::exit(1);
    }
}
