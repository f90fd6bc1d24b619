// ── Hero detail view controller ──
//
// Holds the hero being viewed/edited. Activation resolves the `id` route
// parameter and fetches the hero; `save()` persists the working copy
// and then navigates back. In-flight requests are tied to a
// `CancellationToken` so results arriving after teardown are dropped.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{Hero, HeroId};
use crate::navigation::{Navigator, RouteParams};
use crate::service::HeroService;

/// Route parameter carrying the hero id.
pub const ID_PARAM: &str = "id";

/// Where the controller is in loading its hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Uninitialized,
    Fetching,
    Present,
    Absent,
}

/// Where the controller is in editing its hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Clean,
    Editing,
    Saving,
    NavigatedAway,
}

/// Detail view over a single hero.
pub struct HeroDetail<N: Navigator> {
    service: Arc<HeroService>,
    navigator: N,
    hero: Option<Hero>,
    load: LoadState,
    phase: EditPhase,
    cancel: CancellationToken,
}

impl<N: Navigator> HeroDetail<N> {
    pub fn new(service: Arc<HeroService>, navigator: N) -> Self {
        Self {
            service,
            navigator,
            hero: None,
            load: LoadState::Uninitialized,
            phase: EditPhase::Clean,
            cancel: CancellationToken::new(),
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn hero(&self) -> Option<&Hero> {
        self.hero.as_ref()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn edit_phase(&self) -> EditPhase {
        self.phase
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Token that tears this view down when cancelled.
    ///
    /// Hand a clone to whatever owns the view's lifetime so it can
    /// cancel while a fetch or save is awaiting.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Read the `id` route parameter and fetch that hero.
    ///
    /// A missing or non-integer id is an error. Whether the hero is then
    /// present or absent is reported through the returned [`LoadState`].
    pub async fn activate(&mut self, route: &impl RouteParams) -> Result<LoadState, CoreError> {
        let id = parse_id(route)?;
        if self.is_torn_down() {
            return Ok(self.load);
        }

        let previous = self.load;
        self.load = LoadState::Fetching;
        let cancel = self.cancel.clone();
        let result = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!(%id, "detail view torn down before hero arrived");
                self.load = previous;
                return Ok(self.load);
            }
            result = self.service.get_hero(id) => result,
        };

        // A failed fetch settles as absent, same as a missing hero.
        let fetched = match result {
            Ok(fetched) => fetched,
            Err(e) => {
                self.hero = None;
                self.load = LoadState::Absent;
                return Err(e);
            }
        };

        self.load = if fetched.is_some() {
            LoadState::Present
        } else {
            LoadState::Absent
        };
        self.hero = fetched;
        Ok(self.load)
    }

    /// Cancel anything in flight. Later results are ignored.
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            info!("hero detail view torn down");
        }
        self.cancel.cancel();
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Change the working copy's name. Returns `false` if no hero is loaded.
    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        match self.hero.as_mut() {
            Some(hero) => {
                hero.name = name.into();
                self.phase = EditPhase::Editing;
                true
            }
            None => false,
        }
    }

    /// Return to the previous location. Edits are kept as-is.
    pub fn go_back(&mut self) {
        self.navigator.back();
        self.phase = EditPhase::NavigatedAway;
    }

    /// Persist the working copy, then navigate back.
    ///
    /// With [`FailurePolicy::LogAndDefault`](crate::FailurePolicy) a failed
    /// update still resolves, so this navigates back either way. With
    /// `Propagate` the error is returned and the view stays put.
    ///
    /// Returns `true` if it navigated; `false` when there is nothing to
    /// save or the view was torn down.
    pub async fn save(&mut self) -> Result<bool, CoreError> {
        let Some(hero) = self.hero.clone() else {
            return Ok(false);
        };
        if self.is_torn_down() {
            return Ok(false);
        }

        let previous = self.phase;
        self.phase = EditPhase::Saving;
        let cancel = self.cancel.clone();
        let saved = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!(id = %hero.id, "detail view torn down during save");
                self.phase = previous;
                return Ok(false);
            }
            result = self.service.update_hero(&hero) => result,
        };

        match saved {
            Ok(stored) => {
                if let Some(stored) = stored {
                    self.hero = Some(stored);
                }
                self.go_back();
                Ok(true)
            }
            Err(e) => {
                self.phase = previous;
                Err(e)
            }
        }
    }
}

fn parse_id(route: &impl RouteParams) -> Result<HeroId, CoreError> {
    let raw = route
        .get(ID_PARAM)
        .ok_or_else(|| CoreError::InvalidRouteParam {
            name: ID_PARAM.into(),
            reason: "missing".into(),
        })?;

    raw.parse().map_err(|e| CoreError::InvalidRouteParam {
        name: ID_PARAM.into(),
        reason: format!("'{raw}' is not a hero id: {e}"),
    })
}
