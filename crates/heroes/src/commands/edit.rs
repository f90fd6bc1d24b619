//! `heroes edit`: drives the hero detail view from the command line.
//!
//! Simulates the navigation a UI would do: list → detail, activate the
//! detail view from the route, rename, save, and land back on the list.
//! Ctrl-C tears the view down; a late response is then ignored.

use std::sync::Arc;

use tracing::debug;

use heroes_core::{HeroDetail, HeroId, HeroService, History, LoadState, Navigator, ParamMap};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

const LIST_ROUTE: &str = "/heroes";
const DETAIL_ROUTE: &str = "/detail/:id";

pub async fn handle(
    service: &Arc<HeroService>,
    id: HeroId,
    name: String,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let location = format!("/detail/{id}");
    let params =
        ParamMap::from_route(DETAIL_ROUTE, &location).ok_or_else(|| CliError::Internal(format!(
            "location {location} does not match {DETAIL_ROUTE}"
        )))?;
    let mut history = History::new();
    history.navigate(LIST_ROUTE);
    history.navigate(location);

    let mut detail = HeroDetail::new(Arc::clone(service), history);

    let teardown = detail.cancellation();
    let ctrl_c = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            teardown.cancel();
        }
    });

    let result = run(&mut detail, &params, id, name).await;
    ctrl_c.abort();
    result?;

    if let Some(hero) = detail.hero() {
        let out = output::render_single(global.output_format(), hero, util::hero_detail, |h| {
            h.id.to_string()
        });
        output::print_output(&out, global.quiet);
    }
    if !global.quiet {
        eprintln!(
            "Navigated back to {}",
            detail.navigator().current().unwrap_or(LIST_ROUTE)
        );
    }
    Ok(())
}

async fn run(
    detail: &mut HeroDetail<History>,
    params: &ParamMap,
    id: HeroId,
    name: String,
) -> Result<(), CliError> {
    match detail.activate(params).await? {
        LoadState::Present => {}
        LoadState::Absent => {
            return Err(CliError::NotFound {
                identifier: id.to_string(),
            });
        }
        LoadState::Uninitialized | LoadState::Fetching => {
            return Err(CliError::Internal("detail view closed before loading".into()));
        }
    }

    detail.rename(name);
    let navigated = detail.save().await?;
    debug!(navigated, phase = ?detail.edit_phase(), "detail view saved");
    if !navigated {
        return Err(CliError::Internal("detail view closed before saving".into()));
    }
    Ok(())
}
