use serde::Deserialize;

/// One record as returned by the catalog service, before field mapping.
///
/// Upstream payloads are not validated: any field may be missing and the
/// record still deserializes. Fields the service does not map are ignored.
#[derive(Deserialize, Debug)]
pub struct RawGame {
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub released: Option<String>,
    pub metacritic: Option<i32>,
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
    pub background_image: Option<String>,
}

/// Wrapper object in the catalog's platform list.
#[derive(Deserialize, Debug)]
pub struct PlatformEntry {
    pub platform: Platform,
}

#[derive(Deserialize, Debug)]
pub struct Platform {
    #[serde(default)]
    pub name: String,
}
