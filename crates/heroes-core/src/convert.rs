// ── Wire <-> domain conversions ──

use heroes_api::{HeroCreate, HeroResponse, HeroUpdate};

use crate::model::{Hero, HeroId, NewHero};

impl From<HeroResponse> for Hero {
    fn from(r: HeroResponse) -> Self {
        Self {
            id: HeroId::new(r.id),
            name: r.name,
        }
    }
}

impl From<&NewHero> for HeroCreate {
    fn from(h: &NewHero) -> Self {
        Self {
            name: h.name.clone(),
        }
    }
}

impl From<&Hero> for HeroUpdate {
    fn from(h: &Hero) -> Self {
        Self {
            id: h.id.get(),
            name: h.name.clone(),
        }
    }
}
