// NOTE: todoview layering
//
// - todoview-types: plain domain data, validated at construction
// - todoview-engine: pure view computation and the state reducer
// - this crate: everything with side effects (files, terminal, logging)
//
// Nothing is persisted between runs. Each `todo run` replays its script
// from an empty collection, so output depends only on the script, the
// config file and the flags.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod script;
pub mod types;

pub use args::{Cli, Commands, TodoCommand, UserSourceArgs, UsersCommand, ViewArgs};
pub use commands::run;
