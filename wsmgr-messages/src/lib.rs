//! wsmgr-messages
//!
//! User-facing message templates for the wsmgr CLI, plus the `msg!` macro
//! that fills `{placeholders}` in them.

pub mod builder;
pub mod macros;
pub mod messages;

pub use messages::{Messages, MESSAGES};
