//! Persisted configuration record.
//!
//! The wheel keeps a single JSON array under [`STORAGE_KEY`]. Loading never
//! fails: a missing, corrupt or invalid record yields the built-in wheel.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::constants::{STORAGE_KEY, STORAGE_UNAVAILABLE_ERROR};
use crate::segment::Configuration;
use crate::validation::{validate, ValidationError};

#[derive(Debug)]
pub enum StoreError {
    Unavailable,
    Write(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str(STORAGE_UNAVAILABLE_ERROR),
            Self::Write(e) => write!(f, "Failed to write configuration: {}", e),
            Self::Serialize(e) => write!(f, "Failed to serialize configuration: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

/// Why a save did not happen. Nothing is written in either case.
#[derive(Debug)]
pub enum SaveError {
    Invalid(ValidationError),
    Store(StoreError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{}", e),
            Self::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}

impl From<ValidationError> for SaveError {
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

impl From<StoreError> for SaveError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Synchronous key-value backend holding the serialized wheel.
pub trait ConfigStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a map. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode(configuration: &Configuration) -> Result<String, StoreError> {
    Ok(serde_json::to_string(configuration)?)
}

pub fn decode(raw: &str) -> Result<Configuration, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Stored configuration, or the built-in one when there is nothing usable.
pub fn load_or_default<S: ConfigStore + ?Sized>(store: &S) -> Configuration {
    let Some(raw) = store.read(STORAGE_KEY) else {
        log::info!("No stored wheel configuration, using defaults");
        return Configuration::default();
    };

    let parsed = match decode(&raw) {
        Ok(configuration) => configuration,
        Err(e) => {
            log::warn!("Error loading sectors: {}", e);
            return Configuration::default();
        }
    };

    match validate(parsed) {
        Ok(configuration) => configuration,
        Err(e) => {
            log::warn!("Stored wheel configuration rejected: {}", e);
            Configuration::default()
        }
    }
}

/// Validates and persists `candidate` in one step.
pub fn save<S: ConfigStore + ?Sized>(
    store: &S,
    candidate: Configuration,
) -> Result<Configuration, SaveError> {
    let configuration = validate(candidate)?;
    let raw = encode(&configuration)?;
    if let Err(e) = store.write(STORAGE_KEY, &raw) {
        log::error!("Failed to persist wheel configuration: {}", e);
        return Err(e.into());
    }
    log::info!("Saved wheel configuration with {} segments", configuration.len());
    Ok(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_WEIGHT;
    use crate::segment::{Segment, SegmentColor};
    use crate::selector::{select, DrawSource, RngDraws};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct ReadOnlyStore;

    impl ConfigStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("quota exceeded".to_string()))
        }
    }

    fn three_way() -> Configuration {
        vec![
            Segment::new("sector-1", "Jackpot", SegmentColor::Red, 10.0, true),
            Segment::new("sector-2", "Small", SegmentColor::Yellow, 40.0, false),
            Segment::new("sector-3", "Nothing", SegmentColor::Gray, 50.0, false),
        ]
        .into()
    }

    #[test]
    fn test_wire_layout() {
        let raw = encode(&three_way()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], "sector-1");
        assert_eq!(first["text"], "Jackpot");
        assert_eq!(first["color"], "red");
        assert_eq!(first["probability"], 10.0);
        assert_eq!(first["isBigWin"], true);
    }

    #[test]
    fn test_label_alias_accepted() {
        let raw = r#"[
            {"id":"a","label":"One","color":"green","probability":50,"isBigWin":false},
            {"id":"b","text":"Two","color":"gray","probability":25,"isBigWin":false},
            {"id":"c","text":"Three","color":"yellow","probability":25,"isBigWin":true}
        ]"#;
        let config = decode(raw).unwrap();
        assert_eq!(config.get(0).map(|s| s.label.as_str()), Some("One"));
        assert_eq!(config.get(2).map(|s| s.is_major_prize), Some(true));
    }

    #[test]
    fn test_missing_record_uses_default() {
        assert_eq!(load_or_default(&MemoryStore::new()), Configuration::default());
    }

    #[test]
    fn test_corrupt_record_uses_default() {
        let store = MemoryStore::with_record(STORAGE_KEY, "{not json");
        assert_eq!(load_or_default(&store), Configuration::default());

        let store = MemoryStore::with_record(STORAGE_KEY, r#"[{"id":"a","color":"purple"}]"#);
        assert_eq!(load_or_default(&store), Configuration::default());
    }

    #[test]
    fn test_invalid_record_uses_default() {
        let store = MemoryStore::with_record(STORAGE_KEY, "[]");
        assert_eq!(load_or_default(&store), Configuration::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let saved = save(&store, three_way()).unwrap();
        let loaded = load_or_default(&store);
        assert_eq!(loaded, saved);

        let mut source = RngDraws::seeded(11);
        for _ in 0..500 {
            let draw = source.next_draw();
            assert_eq!(select(&loaded, draw), select(&saved, draw));
        }
        assert_eq!(validate(loaded.clone()), validate(saved));
    }

    #[test]
    fn test_duplicate_ids_in_record_use_default() {
        let raw = r#"[
            {"id":"a","text":"One","color":"green","probability":50,"isBigWin":false},
            {"id":"a","text":"Two","color":"gray","probability":25,"isBigWin":false},
            {"id":"c","text":"Three","color":"yellow","probability":25,"isBigWin":true}
        ]"#;
        assert!(decode(raw).is_ok());
        let store = MemoryStore::with_record(STORAGE_KEY, raw);
        assert_eq!(load_or_default(&store), Configuration::default());
    }

    #[test]
    fn test_arbitrary_weights_survive_reload() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..2000 {
            let a: f64 = rng.gen_range(0.0..50.0);
            let b: f64 = rng.gen_range(0.0..50.0);
            let candidate: Configuration = vec![
                Segment::new("a", "a", SegmentColor::Red, a, false),
                Segment::new("b", "b", SegmentColor::Green, b, false),
                Segment::new("c", "c", SegmentColor::Gray, 100.0 - a - b, false),
            ]
            .into();

            let store = MemoryStore::new();
            let saved = save(&store, candidate).unwrap();
            let loaded = load_or_default(&store);
            assert_eq!(loaded, saved);

            let edge = a / TOTAL_WEIGHT;
            for draw in [edge, edge + (b / TOTAL_WEIGHT)] {
                assert_eq!(select(&loaded, draw), select(&saved, draw));
            }
        }
    }

    #[test]
    fn test_default_round_trip() {
        let original = Configuration::default();
        let restored = decode(&encode(&original).unwrap()).unwrap();
        assert_eq!(restored, original);
        for draw in [0.0, 0.149, 0.151, 0.5, 0.999] {
            assert_eq!(select(&restored, draw), select(&original, draw));
        }
    }

    #[test]
    fn test_invalid_save_writes_nothing() {
        let store = MemoryStore::new();
        let segments = three_way().into_segments()[..2].to_vec();
        let result = save(&store, segments.into());
        assert!(matches!(
            result,
            Err(SaveError::Invalid(ValidationError::InsufficientSegments { count: 2 }))
        ));
        assert_eq!(store.read(STORAGE_KEY), None);
    }

    #[test]
    fn test_store_failure_surfaces() {
        let result = save(&ReadOnlyStore, three_way());
        assert!(matches!(result, Err(SaveError::Store(StoreError::Write(_)))));
    }
}
