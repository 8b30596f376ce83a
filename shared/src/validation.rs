use std::collections::HashSet;
use std::fmt;

use validator::{Validate, ValidationErrors};

use crate::constants::{
    INSUFFICIENT_SEGMENTS_ERROR, MIN_SEGMENTS, PROBABILITY_MISMATCH_ERROR, TOTAL_WEIGHT,
    WEIGHT_TOLERANCE,
};
use crate::segment::Configuration;

/// Reasons a candidate configuration is refused at save time.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InsufficientSegments { count: usize },
    DuplicateId { id: String },
    InvalidSegment { id: String, field: String },
    ProbabilityMismatch { total: f64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSegments { count } => {
                write!(f, "{} (found {})", INSUFFICIENT_SEGMENTS_ERROR, count)
            }
            Self::DuplicateId { id } => write!(f, "Segment id {} is used more than once", id),
            Self::InvalidSegment { id, field } => {
                write!(f, "Segment {} has an invalid {}", id, field)
            }
            Self::ProbabilityMismatch { total } => {
                write!(f, "{} (currently {:.1}%)", PROBABILITY_MISMATCH_ERROR, total)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn weights_balanced(total: f64) -> bool {
    (total - TOTAL_WEIGHT).abs() <= WEIGHT_TOLERANCE
}

/// Gates a candidate configuration. The weights are never rescaled: a valid
/// candidate comes back exactly as it went in.
pub fn validate(candidate: Configuration) -> Result<Configuration, ValidationError> {
    if candidate.len() < MIN_SEGMENTS {
        return Err(ValidationError::InsufficientSegments {
            count: candidate.len(),
        });
    }

    let mut seen = HashSet::with_capacity(candidate.len());
    for segment in &candidate {
        if !seen.insert(segment.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: segment.id.clone(),
            });
        }

        // range() lets NaN through
        if !segment.weight.is_finite() {
            return Err(ValidationError::InvalidSegment {
                id: segment.id.clone(),
                field: "probability".to_string(),
            });
        }

        if let Err(errors) = segment.validate() {
            return Err(ValidationError::InvalidSegment {
                id: segment.id.clone(),
                field: first_invalid_field(&errors),
            });
        }
    }

    let total = candidate.total_weight();
    if !weights_balanced(total) {
        return Err(ValidationError::ProbabilityMismatch { total });
    }

    Ok(candidate)
}

fn first_invalid_field(errors: &ValidationErrors) -> String {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();
    match fields.first() {
        Some(&"label") => "text".to_string(),
        Some(&"weight") => "probability".to_string(),
        Some(field) => field.to_string(),
        None => "field".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_LABEL_LENGTH;
    use crate::segment::{Segment, SegmentColor};

    fn config_with_weights(weights: &[f64]) -> Configuration {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Segment::new(format!("s{}", i), "prize", SegmentColor::Gray, w, false))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_rejects_two_segments() {
        let result = validate(config_with_weights(&[50.0, 50.0]));
        assert_eq!(result, Err(ValidationError::InsufficientSegments { count: 2 }));
    }

    #[test]
    fn test_rejects_over_tolerance() {
        match validate(config_with_weights(&[50.0, 50.0, 5.0])) {
            Err(ValidationError::ProbabilityMismatch { total }) => assert_eq!(total, 105.0),
            other => panic!("expected ProbabilityMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_accepts_rounded_thirds() {
        let candidate = config_with_weights(&[33.34, 33.33, 33.33]);
        assert_eq!(validate(candidate.clone()), Ok(candidate));

        assert!(validate(config_with_weights(&[33.33, 33.33, 33.33])).is_ok());
    }

    #[test]
    fn test_returns_candidate_unchanged() {
        let candidate = config_with_weights(&[10.0, 20.0, 70.05]);
        let validated = validate(candidate.clone()).unwrap();
        assert_eq!(validated, candidate);
    }

    #[test]
    fn test_default_configuration_is_valid() {
        assert!(validate(Configuration::default()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let candidate: Configuration = vec![
            Segment::new("a", "x", SegmentColor::Red, 40.0, false),
            Segment::new("b", "y", SegmentColor::Red, 30.0, false),
            Segment::new("a", "z", SegmentColor::Red, 30.0, false),
        ]
        .into();
        assert_eq!(
            validate(candidate),
            Err(ValidationError::DuplicateId { id: "a".to_string() })
        );
    }

    #[test]
    fn test_rejects_negative_weight_even_when_sum_matches() {
        let result = validate(config_with_weights(&[60.0, 50.0, -10.0]));
        assert_eq!(
            result,
            Err(ValidationError::InvalidSegment {
                id: "s2".to_string(),
                field: "probability".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_nan_weight() {
        let result = validate(config_with_weights(&[50.0, 50.0, f64::NAN]));
        assert!(matches!(result, Err(ValidationError::InvalidSegment { .. })));
    }

    #[test]
    fn test_rejects_long_label() {
        let mut segments = config_with_weights(&[50.0, 25.0, 25.0]).into_segments();
        segments[0].label = "x".repeat(MAX_LABEL_LENGTH);
        assert!(validate(segments.clone().into()).is_ok());

        segments[1].label = "x".repeat(MAX_LABEL_LENGTH + 1);
        let result = validate(segments.into());
        assert_eq!(
            result,
            Err(ValidationError::InvalidSegment {
                id: "s1".to_string(),
                field: "text".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_weight_segment_is_legal() {
        assert!(validate(config_with_weights(&[0.0, 50.0, 50.0])).is_ok());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::ProbabilityMismatch { total: 105.0 };
        assert_eq!(err.to_string(), "Total probability must be 100% (currently 105.0%)");
    }
}
