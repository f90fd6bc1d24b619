// ── Hero service ──
//
// CRUD over the hero collection. Every operation appends one outcome
// message to the shared `MessageLog`. Failures go through a single
// handler that logs them and then applies the configured
// `FailurePolicy`.

use tracing::{debug, error};

use heroes_api::{HeroClient, TlsMode, TransportConfig};

use crate::config::{FailurePolicy, ServiceConfig, TlsVerification};
use crate::error::CoreError;
use crate::message::MessageLog;
use crate::model::{Hero, HeroId, NewHero};

/// Source name attached to every message this service logs.
pub const MESSAGE_SOURCE: &str = "HeroService";

/// Data access layer for heroes.
pub struct HeroService {
    client: HeroClient,
    messages: MessageLog,
    policy: FailurePolicy,
}

impl HeroService {
    /// Build the HTTP client from `config` and log into `messages`.
    pub fn new(config: &ServiceConfig, messages: MessageLog) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = HeroClient::new(config.server.as_str(), &config.collection, &transport)?;
        debug!(collection = %client.collection_url(), policy = %config.failure_policy, "hero service ready");
        Ok(Self::with_client(client, messages, config.failure_policy))
    }

    /// Wrap an already-built client.
    pub fn with_client(client: HeroClient, messages: MessageLog, policy: FailurePolicy) -> Self {
        Self {
            client,
            messages,
            policy,
        }
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Fetch every hero. Fallback: empty list.
    pub async fn list_heroes(&self) -> Result<Vec<Hero>, CoreError> {
        match self.client.list_heroes().await {
            Ok(heroes) => {
                self.log("fetch heroes");
                Ok(heroes.into_iter().map(Hero::from).collect())
            }
            Err(e) => self.handle_error("getHeroes", e, Vec::new()),
        }
    }

    /// Fetch one hero by id. Fallback: `None`.
    pub async fn get_hero(&self, id: HeroId) -> Result<Option<Hero>, CoreError> {
        match self.client.get_hero(id.get()).await {
            Ok(hero) => {
                self.log(format!("fetched hero id={id}"));
                Ok(Some(hero.into()))
            }
            Err(e) => self.handle_error(&format!("getHero id={id}"), e, None),
        }
    }

    /// Heroes whose name matches `term`.
    ///
    /// A blank term short-circuits to an empty list: no request, no message.
    pub async fn search_heroes(&self, term: &str) -> Result<Vec<Hero>, CoreError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        match self.client.search_heroes(term).await {
            Ok(heroes) => {
                if heroes.is_empty() {
                    self.log(format!("no heroes matching \"{term}\""));
                } else {
                    self.log(format!("found heroes matching \"{term}\""));
                }
                Ok(heroes.into_iter().map(Hero::from).collect())
            }
            Err(e) => self.handle_error("searchHeroes", e, Vec::new()),
        }
    }

    // ── Writes ───────────────────────────────────────────────────────

    /// Create a hero; the store assigns its id. Fallback: `None`.
    pub async fn add_hero(&self, hero: &NewHero) -> Result<Option<Hero>, CoreError> {
        match self.client.create_hero(&hero.into()).await {
            Ok(created) => {
                let created = Hero::from(created);
                self.log(format!("add hero w/ id={}", created.id));
                Ok(Some(created))
            }
            Err(e) => self.handle_error("addHero", e, None),
        }
    }

    /// Replace a hero. Returns the stored hero (the server's echo, or the
    /// submitted one when the response is empty). Fallback: `None`.
    pub async fn update_hero(&self, hero: &Hero) -> Result<Option<Hero>, CoreError> {
        match self.client.update_hero(&hero.into()).await {
            Ok(echoed) => {
                self.log(format!("updated hero id={}", hero.id));
                Ok(Some(echoed.map_or_else(|| hero.clone(), Hero::from)))
            }
            Err(e) => self.handle_error("updateHero", e, None),
        }
    }

    /// Delete a hero by id. Returns the deleted id. Fallback: `None`.
    pub async fn delete_hero(&self, id: HeroId) -> Result<Option<HeroId>, CoreError> {
        match self.client.delete_hero(id.get()).await {
            Ok(()) => {
                self.log(format!("deleted hero id={id}"));
                Ok(Some(id))
            }
            Err(e) => self.handle_error("deleteHero", e, None),
        }
    }

    /// Delete the given hero. Same request as [`delete_hero`](Self::delete_hero).
    pub async fn delete_hero_entity(&self, hero: &Hero) -> Result<Option<HeroId>, CoreError> {
        self.delete_hero(hero.id).await
    }

    // ── Internals ────────────────────────────────────────────────────

    fn log(&self, text: impl Into<String>) {
        self.messages.add(MESSAGE_SOURCE, text);
    }

    /// Shared failure path: diagnostic log, user message, then policy.
    fn handle_error<T>(
        &self,
        operation: &str,
        err: heroes_api::Error,
        fallback: T,
    ) -> Result<T, CoreError> {
        error!(operation, error = ?err, "hero operation failed");
        self.log(format!("{operation} failed: {err}"));

        match self.policy {
            FailurePolicy::LogAndDefault => Ok(fallback),
            FailurePolicy::Propagate => Err(err.into()),
        }
    }
}

fn build_transport(config: &ServiceConfig) -> TransportConfig {
    let tls = match &config.tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    };
    TransportConfig {
        tls,
        timeout: config.timeout,
    }
}
