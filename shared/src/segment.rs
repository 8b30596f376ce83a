use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::SEGMENT_ID_PREFIX;

/// Palette a segment can be painted with.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SegmentColor {
    Red,
    Green,
    Yellow,
    Gray,
}

impl SegmentColor {
    pub const ALL: [SegmentColor; 4] = [Self::Red, Self::Green, Self::Yellow, Self::Gray];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Gray => "Gray",
        }
    }

    /// Fill used by the canvas renderer.
    pub fn fill(&self) -> &'static str {
        match self {
            Self::Red => "#dc2626",
            Self::Green => "#16a34a",
            Self::Yellow => "#eab308",
            Self::Gray => "#6b7280",
        }
    }
}

impl fmt::Display for SegmentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown segment color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for SegmentColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// One wedge of the wheel and the prize it pays out.
///
/// Field names on the wire follow the stored record layout
/// (`text`, `probability`, `isBigWin`).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct Segment {
    pub id: String,
    /// At most [`MAX_LABEL_LENGTH`](crate::constants::MAX_LABEL_LENGTH) characters.
    #[serde(rename = "text", alias = "label")]
    #[validate(length(max = 64))]
    pub label: String,
    pub color: SegmentColor,
    /// Relative win chance in percentage points.
    #[serde(rename = "probability")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub weight: f64,
    #[serde(rename = "isBigWin")]
    pub is_major_prize: bool,
}

impl Segment {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        color: SegmentColor,
        weight: f64,
        is_major_prize: bool,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color,
            weight,
            is_major_prize,
        }
    }
}

/// Ordered list of segments. Order drives both the wheel layout and the
/// rotation mapping, so it must never be shuffled behind the wheel's back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Configuration {
    segments: Vec<Segment>,
}

impl Configuration {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.segments.iter().position(|segment| segment.id == id)
    }

    pub fn total_weight(&self) -> f64 {
        self.segments.iter().map(|segment| segment.weight).sum()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        DEFAULT_CONFIGURATION.clone()
    }
}

impl From<Vec<Segment>> for Configuration {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Built-in wheel used until an operator saves their own.
pub static DEFAULT_CONFIGURATION: Lazy<Configuration> = Lazy::new(|| {
    Configuration::new(vec![
        Segment::new("1", "100 lv.", SegmentColor::Green, 15.0, true),
        Segment::new("2", "Try again", SegmentColor::Gray, 20.0, false),
        Segment::new("3", "50 lv.", SegmentColor::Yellow, 15.0, false),
        Segment::new("4", "Try again", SegmentColor::Gray, 20.0, false),
        Segment::new("5", "200 lv.", SegmentColor::Red, 10.0, true),
        Segment::new("6", "Try again", SegmentColor::Gray, 5.0, false),
        Segment::new("7", "25 lv.", SegmentColor::Yellow, 10.0, false),
        Segment::new("8", "Try again", SegmentColor::Gray, 5.0, false),
    ])
});

static ALLOCATED_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^sector-(\d+)$").expect("segment id pattern is valid"));

/// Hands out `sector-<n>` ids. The counter only moves forward, so an id is
/// never issued twice in a session, even after its segment is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentIdAllocator {
    next: u64,
}

impl Default for SegmentIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl SegmentIdAllocator {
    /// Starts past every allocator-style id already present in `configuration`.
    pub fn for_configuration(configuration: &Configuration) -> Self {
        let mut allocator = Self::default();
        for segment in configuration {
            allocator.observe(&segment.id);
        }
        allocator
    }

    /// Moves the counter past `id` if it looks like one of ours. Ids at the
    /// very top of the range are ignored; they can never be issued anyway.
    pub fn observe(&mut self, id: &str) {
        let seen = ALLOCATED_ID
            .captures(id)
            .and_then(|caps| caps.get(1))
            .and_then(|n| n.as_str().parse::<u64>().ok())
            .and_then(|n| n.checked_add(1));
        if let Some(after) = seen {
            self.next = self.next.max(after);
        }
    }

    /// Next unused id, or `None` once the counter is exhausted.
    pub fn allocate(&mut self) -> Option<String> {
        let n = self.next;
        self.next = n.checked_add(1)?;
        Some(format!("{}{}", SEGMENT_ID_PREFIX, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration_shape() {
        let config = Configuration::default();
        assert_eq!(config.len(), 8);
        assert_eq!(config.total_weight(), 100.0);
        assert_eq!(config.get(0).map(|s| s.id.as_str()), Some("1"));
        assert_eq!(config.iter().filter(|s| s.is_major_prize).count(), 2);
        assert!(crate::validation::validate(config).is_ok());
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("yellow".parse::<SegmentColor>(), Ok(SegmentColor::Yellow));
        assert!("purple".parse::<SegmentColor>().is_err());
        assert_eq!(SegmentColor::Gray.to_string(), "gray");
    }

    #[test]
    fn test_allocator_skips_loaded_ids() {
        let config = Configuration::new(vec![
            Segment::new("1", "a", SegmentColor::Red, 50.0, false),
            Segment::new("sector-7", "b", SegmentColor::Red, 25.0, false),
            Segment::new("sector-x", "c", SegmentColor::Red, 25.0, false),
        ]);
        let mut allocator = SegmentIdAllocator::for_configuration(&config);
        assert_eq!(allocator.allocate().as_deref(), Some("sector-8"));
        assert_eq!(allocator.allocate().as_deref(), Some("sector-9"));
    }

    #[test]
    fn test_allocator_never_reuses() {
        let mut allocator = SegmentIdAllocator::default();
        let first = allocator.allocate();
        allocator.observe("sector-1");
        let second = allocator.allocate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_allocator_survives_huge_stored_ids() {
        let config = Configuration::new(vec![
            Segment::new("sector-18446744073709551615", "a", SegmentColor::Red, 50.0, false),
            Segment::new("sector-3", "b", SegmentColor::Red, 50.0, false),
        ]);
        let mut allocator = SegmentIdAllocator::for_configuration(&config);
        assert_eq!(allocator.allocate().as_deref(), Some("sector-4"));

        let mut full = SegmentIdAllocator::default();
        full.observe("sector-18446744073709551614");
        assert_eq!(full.allocate(), None);
        assert_eq!(full.allocate(), None);
    }
}
