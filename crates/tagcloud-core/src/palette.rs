use rand::prelude::*;

/// Colors handed out to tags at creation time.
pub const TAG_COLORS: [&str; 20] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#52B788", "#FF7F50", "#6A5ACD", "#FF69B4", "#20B2AA", "#FFD700", "#9B59B6",
    "#3498DB", "#E74C3C", "#1ABC9C", "#F39C12",
];

/// Random color source for tags.
///
/// Seeded construction makes color assignment reproducible; the front-end
/// uses `from_entropy` for a fresh look on every page load.
pub struct Palette {
    colors: Vec<String>,
    rng: StdRng,
}

impl Palette {
    pub fn seeded(seed: u64) -> Self {
        Self::with_colors(Vec::new(), seed)
    }

    pub fn from_entropy() -> Self {
        Self {
            colors: default_colors(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Palette over custom CSS colors. An empty list uses [`TAG_COLORS`].
    pub fn with_colors(colors: Vec<String>, seed: u64) -> Self {
        let colors = if colors.is_empty() {
            default_colors()
        } else {
            colors
        };
        Self {
            colors,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Draw the next color.
    pub fn pick(&mut self) -> String {
        // `colors` is never empty, see constructors
        self.colors
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| TAG_COLORS[0].to_string())
    }
}

fn default_colors() -> Vec<String> {
    TAG_COLORS.iter().map(|c| c.to_string()).collect()
}
