use arcadia::catalog::RawGame;
use indexmap::IndexMap;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub(super) struct GamesResponse {
    pub data: Vec<GameSummary>,
}

/// The simplified, client-facing shape of one game.
#[derive(Serialize)]
pub(super) struct GameSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub release_date: Option<String>,
    pub review_score: i32,
    pub platforms: IndexMap<String, bool>,
    pub player_count: u32,
    pub cover_url: Option<String>,
}

impl GameSummary {
    /// Maps one raw catalog record into the served shape.
    pub fn from_raw(raw: RawGame) -> GameSummary {
        GameSummary {
            // Minted per response; the upstream identifier is not carried
            // over, so the same game gets a different id on every request.
            id: Uuid::new_v4(),
            title: raw.name,
            description: raw.slug.unwrap_or_default(),
            release_date: raw.released,
            review_score: raw.metacritic.unwrap_or(0),
            platforms: raw
                .platforms
                .into_iter()
                .map(|p| (normalize_platform_name(&p.platform.name), true))
                .collect(),
            player_count: 1,
            cover_url: raw.background_image,
        }
    }
}

// "PlayStation 5" -> "playstation_5"
fn normalize_platform_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}
