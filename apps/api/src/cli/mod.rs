// CLI navigation mode — the site's command-line interface, evaluated
// server-side. Parsing and dispatch are pure; the handler is a thin wrapper.

pub mod commands;
pub mod handlers;

pub use commands::{parse, respond, CliReply, Command, Effect, Section, Theme};
