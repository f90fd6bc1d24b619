//! Hero CRUD command handlers.

use std::sync::Arc;

use tabled::Tabled;

use heroes_core::{Hero, HeroId, HeroService, NewHero};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct HeroRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Hero> for HeroRow {
    fn from(h: &Hero) -> Self {
        Self {
            id: h.id.to_string(),
            name: h.name.clone(),
        }
    }
}

fn print_list(heroes: &[Hero], global: &GlobalOpts) {
    let out = output::render_list(global.output_format(), heroes, |h| HeroRow::from(h), |h| {
        h.id.to_string()
    });
    output::print_output(&out, global.quiet);
}

fn print_single(hero: &Hero, global: &GlobalOpts) {
    let out = output::render_single(global.output_format(), hero, util::hero_detail, |h| {
        h.id.to_string()
    });
    output::print_output(&out, global.quiet);
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(service: &Arc<HeroService>, global: &GlobalOpts) -> Result<(), CliError> {
    let heroes = service.list_heroes().await?;
    print_list(&heroes, global);
    Ok(())
}

pub async fn get(
    service: &Arc<HeroService>,
    id: HeroId,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let hero = service
        .get_hero(id)
        .await?
        .ok_or_else(|| CliError::NotFound {
            identifier: id.to_string(),
        })?;
    print_single(&hero, global);
    Ok(())
}

pub async fn search(
    service: &Arc<HeroService>,
    term: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let heroes = service.search_heroes(term).await?;
    print_list(&heroes, global);
    Ok(())
}

pub async fn add(
    service: &Arc<HeroService>,
    name: String,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "hero name cannot be empty".into(),
        });
    }

    if let Some(created) = service.add_hero(&NewHero::new(name)).await? {
        print_single(&created, global);
    }
    Ok(())
}

pub async fn update(
    service: &Arc<HeroService>,
    id: HeroId,
    name: String,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if let Some(stored) = service.update_hero(&Hero::new(id, name)).await? {
        print_single(&stored, global);
    }
    Ok(())
}

pub async fn delete(
    service: &Arc<HeroService>,
    id: HeroId,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if !util::confirm(&format!("Delete hero {id}?"), global.yes)? {
        return Ok(());
    }
    service.delete_hero(id).await?;
    Ok(())
}
