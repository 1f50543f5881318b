//! Category color mapping for the ownership charts.
//!
//! The six known ownership categories keep their fixed colors from the
//! original analysis. Labels outside the fixed map fall back to a color
//! picked deterministically from a small palette, so an unexpected category
//! still renders with a stable color instead of being dropped.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Fixed category → hex color assignments.
const FIXED_COLORS: [(&str, &str); 6] = [
    ("súkromné a bez LV", "#626BFF"),
    ("obecné a mestské", "#F4E129"),
    ("štátne", "#00CE94"),
    ("cirkevné", "#88BCE1"),
    ("spoločenstvá", "#FEA062"),
    ("zmiešané", "#F1553C"),
];

/// Fallback palette for categories absent from the fixed map.
const FALLBACK_PALETTE: [&str; 8] = [
    "#8D99AE", "#BC6C25", "#606C38", "#9D4EDD", "#2A9D8F", "#E76F51", "#457B9D", "#6D6875",
];

/// Maps ownership category labels to chart colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryColorMap;

impl CategoryColorMap {
    /// Creates the color map.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the chart color for a category label.
    ///
    /// Known categories get their fixed color; anything else gets a fallback
    /// palette entry selected by a hash of the label, so the same label always
    /// maps to the same color within a build.
    #[must_use]
    pub fn color_for(&self, category: &str) -> &'static str {
        for (label, color) in FIXED_COLORS {
            if label == category {
                return color;
            }
        }

        let mut hasher = DefaultHasher::new();
        category.hash(&mut hasher);
        let index = (hasher.finish() % FALLBACK_PALETTE.len() as u64) as usize;
        FALLBACK_PALETTE[index]
    }

    /// Returns colors for a list of category labels, in order.
    #[must_use]
    pub fn colors_for<'a, I>(&self, categories: I) -> Vec<&'static str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        categories
            .into_iter()
            .map(|category| self.color_for(category))
            .collect()
    }
}
