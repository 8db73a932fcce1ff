/// Distance from the top of the viewport to the point that decides the active section.
pub const ANCHOR_OFFSET: f64 = 100.0;

/// Sections the navbar highlights, in page order.
pub const DEFAULT_SECTIONS: &[&str] = &["about", "services", "projects", "contact"];

/// A labelled vertical span of the page, `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl Region {
    pub fn new(label: impl Into<String>, start: f64, height: f64) -> Self {
        Self {
            label: label.into(),
            start,
            end: start + height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        self.start <= y && y < self.end
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    regions: Vec<Region>,
}

impl ScrollSpy {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// First region containing the viewport anchor for this scroll position.
    pub fn active_at(&self, scroll_y: f64) -> Option<&str> {
        let anchor = scroll_y + ANCHOR_OFFSET;
        self.regions
            .iter()
            .find(|r| r.contains(anchor))
            .map(|r| r.label.as_str())
    }
}
