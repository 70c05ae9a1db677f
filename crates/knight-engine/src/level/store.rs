use serde::{Deserialize, Serialize};
use crate::level::template::{LevelState, LevelTemplate};

const BUILTIN_LEVELS_JSON: &str = include_str!("../../data/levels.json");

/// Error type for building a level store or loading a level from it.
#[derive(Debug)]
pub enum LevelError {
    ParseError(serde_json::Error),
    /// The campaign has no levels.
    Empty,
    ValidationError { level: usize, reason: String },
    OutOfRange { index: usize, len: usize },
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::Empty => write!(f, "Campaign has no levels"),
            LevelError::ValidationError { level, reason } => {
                write!(f, "Validation error in level {}: {}", level, reason)
            }
            LevelError::OutOfRange { index, len } => {
                write!(f, "Level {} out of range (campaign has {})", index, len)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// On-disk / over-the-wire campaign shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub levels: Vec<LevelTemplate>,
}

/// Validated, read-only level templates. Hands out fresh live copies.
#[derive(Debug, Clone)]
pub struct LevelStore {
    templates: Vec<LevelTemplate>,
}

impl LevelStore {
    /// Validate every template up front so loading can never hit bad data mid-game.
    pub fn new(templates: Vec<LevelTemplate>) -> Result<Self, LevelError> {
        if templates.is_empty() {
            return Err(LevelError::Empty);
        }
        for (level, template) in templates.iter().enumerate() {
            template
                .validate()
                .map_err(|reason| LevelError::ValidationError { level, reason })?;
        }
        Ok(Self { templates })
    }

    /// Parse and validate a campaign from JSON (`{ "levels": [...] }`).
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let campaign: Campaign = serde_json::from_str(json)?;
        Self::new(campaign.levels)
    }

    /// The campaign embedded in the crate.
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_json(BUILTIN_LEVELS_JSON)
    }

    /// Fresh, independent live state for level `index`.
    pub fn load_level(&self, index: usize) -> Result<LevelState, LevelError> {
        let template = self.templates.get(index).ok_or(LevelError::OutOfRange {
            index,
            len: self.templates.len(),
        })?;
        Ok(template.instantiate(index))
    }

    /// Fresh copy of level 0. Infallible: construction rejects empty campaigns.
    pub fn first_level(&self) -> LevelState {
        self.templates[0].instantiate(0)
    }

    pub fn has_next_level(&self, index: usize) -> bool {
        index + 1 < self.templates.len()
    }

    pub fn template(&self, index: usize) -> Option<&LevelTemplate> {
        self.templates.get(index)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::template::PointDef;

    #[test]
    fn builtin_campaign_loads() {
        let store = LevelStore::builtin().unwrap();
        assert!(store.len() >= 2);
        for i in 0..store.len() {
            let level = store.load_level(i).unwrap();
            assert!(!level.coins.is_empty());
        }
    }

    #[test]
    fn has_next_level_stops_at_last() {
        let store = LevelStore::builtin().unwrap();
        let last = store.len() - 1;
        assert!(store.has_next_level(0));
        assert!(!store.has_next_level(last));
    }

    #[test]
    fn reload_is_independent_of_live_mutation() {
        let store = LevelStore::builtin().unwrap();
        let mut live = store.load_level(0).unwrap();
        let pristine = live.clone();

        live.enemies[0].kill();
        live.enemies[0].body.pos.x += 300.0;
        live.coins[0].collect();
        live.platforms.clear();

        let reloaded = store.load_level(0).unwrap();
        assert_eq!(reloaded, pristine);
        assert!(reloaded.enemies[0].alive);
        assert!(!reloaded.coins[0].collected);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let store = LevelStore::builtin().unwrap();
        match store.load_level(store.len()) {
            Err(LevelError::OutOfRange { index, len }) => {
                assert_eq!(index, store.len());
                assert_eq!(len, store.len());
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn empty_campaign_rejected() {
        assert!(matches!(LevelStore::new(Vec::new()), Err(LevelError::Empty)));
        assert!(matches!(LevelStore::from_json(r#"{ "levels": [] }"#), Err(LevelError::Empty)));
    }

    #[test]
    fn zero_coin_level_rejected_at_load_time() {
        let json = r#"{ "levels": [
            { "spawn": { "x": 0, "y": 0 }, "floor_y": 400, "coins": [{ "x": 5, "y": 5 }] },
            { "spawn": { "x": 0, "y": 0 }, "floor_y": 400, "coins": [] }
        ] }"#;
        match LevelStore::from_json(json) {
            Err(LevelError::ValidationError { level, reason }) => {
                assert_eq!(level, 1);
                assert!(reason.contains("no coins"));
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = LevelStore::from_json("{ levels: ").unwrap_err();
        assert!(matches!(err, LevelError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn template_lookup() {
        let store = LevelStore::new(vec![LevelTemplate {
            name: "only".into(),
            spawn: PointDef { x: 1.0, y: 2.0 },
            floor_y: 100.0,
            platforms: Vec::new(),
            coins: vec![PointDef { x: 10.0, y: 10.0 }],
            enemies: Vec::new(),
        }])
        .unwrap();
        assert_eq!(store.template(0).map(|t| t.name.as_str()), Some("only"));
        assert!(store.template(1).is_none());
    }
}
