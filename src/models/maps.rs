//! External map embeds.
//!
//! Each entry is a fixed, externally hosted interactive map shown inside the
//! page via an iframe. The list is defined at build time; the dashboard never
//! validates the remote URLs (they are opaque collaborators).

use serde::Serialize;

use crate::constants::MAP_EMBED_HEIGHT;

/// One embedded external map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapEntry {
    /// URL-safe identifier used for tab anchors.
    pub id: &'static str,
    /// Tab label shown to the user.
    pub label: &'static str,
    /// Fixed URL of the externally hosted map.
    pub url: &'static str,
    /// Display height of the embedded frame in pixels.
    pub height: u32,
}

impl MapEntry {
    const fn new(id: &'static str, label: &'static str, url: &'static str) -> Self {
        Self {
            id,
            label,
            url,
            height: MAP_EMBED_HEIGHT,
        }
    }

    /// All map embeds, in tab order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &MAP_ENTRIES
    }
}

static MAP_ENTRIES: [MapEntry; 5] = [
    MapEntry::new(
        "vlastnicke-vztahy",
        "Mapa vlastníckych vzťahov",
        "https://mapky.github.io/mapa_vl_vztahy/#10/49.3599/18.6529",
    ),
    MapEntry::new(
        "efp",
        "Mapa ekologicko-funkčné plochy",
        "https://mapky.github.io/mapa-efp/#10/49.3682/18.6386",
    ),
    MapEntry::new(
        "menezment",
        "Mapa menežmentové opatrenia",
        "https://mapky.github.io/mapa-menezment/#10/49.3682/18.6386",
    ),
    MapEntry::new(
        "biotopy",
        "Mapa biotopov",
        "https://mapky.github.io/mapa-biotopy/#10/49.3682/18.6386",
    ),
    MapEntry::new(
        "vyskyt-druhov",
        "Mapa výskytu druhov",
        "https://mapky.github.io/mapa-vyskyt-druhov/#10/49.3682/18.6386",
    ),
];
