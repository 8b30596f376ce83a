use std::collections::BTreeSet;
use std::fmt;

use crate::constants::{MIN_SEGMENTS, NEW_SEGMENT_LABEL, NEW_SEGMENT_WEIGHT};
use crate::segment::{Configuration, Segment, SegmentColor, SegmentIdAllocator};
use crate::storage::{self, ConfigStore, SaveError};
use crate::validation::weights_balanced;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    UnknownSegment(String),
    TooFewSegments,
    IdsExhausted,
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSegment(id) => write!(f, "No segment with id {}", id),
            Self::TooFewSegments => {
                write!(f, "The wheel needs at least {} segments", MIN_SEGMENTS)
            }
            Self::IdsExhausted => write!(f, "No segment ids left to hand out"),
        }
    }
}

impl std::error::Error for EditorError {}

/// Partial update coming from one admin form control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPatch {
    pub label: Option<String>,
    pub color: Option<SegmentColor>,
    pub weight: Option<f64>,
    pub is_major_prize: Option<bool>,
}

impl SegmentPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), ..Self::default() }
    }

    pub fn color(color: SegmentColor) -> Self {
        Self { color: Some(color), ..Self::default() }
    }

    pub fn weight(weight: f64) -> Self {
        Self { weight: Some(weight), ..Self::default() }
    }

    /// Raw text from a number input; anything unparseable counts as 0.
    pub fn weight_input(raw: &str) -> Self {
        let weight = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .unwrap_or(0.0);
        Self::weight(weight)
    }

    pub fn major_prize(is_major_prize: bool) -> Self {
        Self { is_major_prize: Some(is_major_prize), ..Self::default() }
    }

    fn apply_to(self, segment: &mut Segment) {
        if let Some(label) = self.label {
            segment.label = label;
        }
        if let Some(color) = self.color {
            segment.color = color;
        }
        if let Some(weight) = self.weight {
            segment.weight = weight;
        }
        if let Some(flag) = self.is_major_prize {
            segment.is_major_prize = flag;
        }
    }
}

/// Admin working copy. Edits stay here until [`SegmentEditor::save`]
/// succeeds; the live configuration is never touched piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentEditor {
    segments: Vec<Segment>,
    ids: SegmentIdAllocator,
    /// Ids removed during this session. They are never handed out again.
    retired: BTreeSet<String>,
}

impl SegmentEditor {
    pub fn new(configuration: &Configuration) -> Self {
        Self {
            segments: configuration.segments().to_vec(),
            ids: SegmentIdAllocator::for_configuration(configuration),
            retired: BTreeSet::new(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn total_weight(&self) -> f64 {
        self.segments.iter().map(|s| s.weight).sum()
    }

    pub fn weights_balanced(&self) -> bool {
        weights_balanced(self.total_weight())
    }

    pub fn can_remove(&self) -> bool {
        self.segments.len() > MIN_SEGMENTS
    }

    pub fn can_save(&self) -> bool {
        self.segments.len() >= MIN_SEGMENTS && self.weights_balanced()
    }

    pub fn add_segment(&mut self) -> Result<&Segment, EditorError> {
        let id = self.fresh_id()?;
        let index = self.segments.len();
        self.segments.push(Segment::new(
            id,
            NEW_SEGMENT_LABEL,
            SegmentColor::Gray,
            NEW_SEGMENT_WEIGHT,
            false,
        ));
        Ok(&self.segments[index])
    }

    pub fn remove_segment(&mut self, id: &str) -> Result<Segment, EditorError> {
        let index = self.index_of(id)?;
        if !self.can_remove() {
            return Err(EditorError::TooFewSegments);
        }
        let removed = self.segments.remove(index);
        self.retired.insert(removed.id.clone());
        Ok(removed)
    }

    pub fn update_segment(&mut self, id: &str, patch: SegmentPatch) -> Result<(), EditorError> {
        let index = self.index_of(id)?;
        patch.apply_to(&mut self.segments[index]);
        Ok(())
    }

    /// Replaces the working copy with the built-in wheel. Built-in segments
    /// whose id was deleted earlier in the session come back under a fresh
    /// id; every other id is kept.
    pub fn reset_to_defaults(&mut self) -> Result<(), EditorError> {
        let mut segments = Configuration::default().into_segments();
        for segment in &segments {
            self.ids.observe(&segment.id);
        }
        for segment in &mut segments {
            if self.retired.contains(&segment.id) {
                segment.id = self.fresh_id()?;
            }
        }
        for segment in &self.segments {
            if !segments.iter().any(|s| s.id == segment.id) {
                self.retired.insert(segment.id.clone());
            }
        }
        self.segments = segments;
        Ok(())
    }

    pub fn to_configuration(&self) -> Configuration {
        Configuration::new(self.segments.clone())
    }

    /// Validates the working copy and persists it as the live configuration.
    pub fn save<S: ConfigStore + ?Sized>(&self, store: &S) -> Result<Configuration, SaveError> {
        storage::save(store, self.to_configuration())
    }

    fn fresh_id(&mut self) -> Result<String, EditorError> {
        self.ids.allocate().ok_or(EditorError::IdsExhausted)
    }

    fn index_of(&self, id: &str) -> Result<usize, EditorError> {
        self.segments
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EditorError::UnknownSegment(id.to_string()))
    }
}
