//! Command handlers.

pub mod config_cmd;
pub mod edit;
pub mod heroes;
pub mod util;

use std::sync::Arc;

use heroes_core::HeroService;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route a service-backed command to its handler.
pub async fn dispatch(
    cmd: Command,
    service: &Arc<HeroService>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List => heroes::list(service, global).await,
        Command::Get { id } => heroes::get(service, id.into(), global).await,
        Command::Search { term } => heroes::search(service, &term, global).await,
        Command::Add { name } => heroes::add(service, name, global).await,
        Command::Update { id, name } => heroes::update(service, id.into(), name, global).await,
        Command::Delete { id } => heroes::delete(service, id.into(), global).await,
        Command::Edit { id, name } => edit::handle(service, id.into(), name, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not use the hero service".into(),
        )),
    }
}
