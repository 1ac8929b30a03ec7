//! Territory catalogue configuration.
//!
//! Same codec shape as [`crate::subfaction_config`]: lenient decode
//! that never fails, canonical fixed-order writer, builtin document
//! plus file/env loader. The catalogue carries a global
//! `territoryDecayPerTick` scalar alongside the territory array.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use thiserror::Error;

use crate::json_writer::{
    int_field, render_array, render_object, render_string_array, string_field,
};
use crate::lenient_json::{
    array_span, extract_int, extract_string, extract_string_array, extract_string_or_default,
    extract_string_or_null, object_slices, strip_comments,
};

pub const BUILTIN_TERRITORIES: &str = include_str!("data/territories.json");

pub const DEFAULT_DECAY_PER_TICK: i32 = 2;
pub const DEFAULT_NUM_CONSTELLATIONS: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryCatalog {
    /// Global decay applied per tick; defaults when the key is absent.
    pub decay_per_tick: i32,
    pub territories: Vec<TerritoryRecord>,
}

impl Default for TerritoryCatalog {
    fn default() -> Self {
        Self {
            decay_per_tick: DEFAULT_DECAY_PER_TICK,
            territories: Vec::new(),
        }
    }
}

impl TerritoryCatalog {
    pub fn builtin() -> Arc<Self> {
        Arc::new(Self::from_json_str(BUILTIN_TERRITORIES))
    }

    /// Lenient decode; never fails. Absent or malformed input yields
    /// the default decay value and an empty territory sequence.
    pub fn from_json_str(json: &str) -> Self {
        let text = strip_comments(json);
        let decay_per_tick = extract_int(&text, "territoryDecayPerTick", DEFAULT_DECAY_PER_TICK);
        let mut territories = Vec::new();
        if let Some(span) = array_span(&text, "territories") {
            for slice in object_slices(span) {
                territories.push(TerritoryRecord::from_object_slice(slice));
            }
        }
        Self {
            decay_per_tick,
            territories,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, TerritoryConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| TerritoryConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json_str(&contents))
    }

    pub fn get(&self, territory_id: &str) -> Option<&TerritoryRecord> {
        self.territories
            .iter()
            .find(|record| record.territory_id == territory_id)
    }

    pub fn to_json_string(&self) -> String {
        let records: Vec<String> = self
            .territories
            .iter()
            .map(|record| record.render(4))
            .collect();
        let fields = vec![
            int_field("territoryDecayPerTick", self.decay_per_tick),
            format!("\"territories\": {}", render_array(&records, 2)),
        ];
        render_object(&fields, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryRecord {
    pub territory_id: String,
    pub name: String,
    pub tier: TerritoryTier,
    pub plot_hook: Option<String>,
    pub num_constellations: i32,
    pub interested_factions: Vec<String>,
}

impl Default for TerritoryRecord {
    fn default() -> Self {
        Self {
            territory_id: String::new(),
            name: String::new(),
            tier: TerritoryTier::default(),
            plot_hook: None,
            num_constellations: DEFAULT_NUM_CONSTELLATIONS,
            interested_factions: Vec::new(),
        }
    }
}

impl TerritoryRecord {
    fn from_object_slice(obj: &str) -> Self {
        Self {
            territory_id: extract_string(obj, "territoryId"),
            name: extract_string(obj, "name"),
            tier: TerritoryTier::from_tag(&extract_string_or_default(obj, "tier", "LOW")),
            plot_hook: extract_string_or_null(obj, "plotHook"),
            num_constellations: extract_int(obj, "numConstellations", DEFAULT_NUM_CONSTELLATIONS),
            interested_factions: extract_string_array(obj, "interestedFactions"),
        }
    }

    fn render(&self, indent: usize) -> String {
        let mut fields = vec![
            string_field("territoryId", &self.territory_id),
            string_field("name", &self.name),
            string_field("tier", self.tier.as_tag()),
        ];
        if let Some(hook) = &self.plot_hook {
            fields.push(string_field("plotHook", hook));
        }
        fields.push(int_field("numConstellations", self.num_constellations));
        if !self.interested_factions.is_empty() {
            fields.push(format!(
                "\"interestedFactions\": {}",
                render_string_array(&self.interested_factions)
            ));
        }
        render_object(&fields, indent)
    }
}

/// Closed territory tier; unknown tags coerce to
/// [`TerritoryTier::Low`] silently, consistent with the scanner's
/// general failure posture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerritoryTier {
    #[default]
    Low,
    Medium,
    High,
}

impl TerritoryTier {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "MEDIUM" => TerritoryTier::Medium,
            "HIGH" => TerritoryTier::High,
            _ => TerritoryTier::Low,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            TerritoryTier::Low => "LOW",
            TerritoryTier::Medium => "MEDIUM",
            TerritoryTier::High => "HIGH",
        }
    }
}

#[derive(Debug, Error)]
pub enum TerritoryConfigError {
    #[error("failed to read territory config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Metadata about the territory configuration source.
#[derive(Debug, Clone)]
pub struct TerritoryConfigMetadata {
    path: Option<PathBuf>,
}

impl TerritoryConfigMetadata {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Load the territory catalogue from environment or default path,
/// falling back to the builtin document.
pub fn load_territories_from_env() -> (Arc<TerritoryCatalog>, TerritoryConfigMetadata) {
    let override_path = env::var("TERRITORIES_CONFIG_PATH").ok().map(PathBuf::from);
    let default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/data/territories.json");

    let candidates: Vec<PathBuf> = match override_path {
        Some(ref path) => vec![path.clone()],
        None => vec![default_path.clone()],
    };

    for path in candidates {
        match TerritoryCatalog::from_file(&path) {
            Ok(catalog) => {
                if catalog.territories.is_empty() {
                    tracing::warn!(
                        target: "dominion::config",
                        path = %path.display(),
                        "territories.loaded=0"
                    );
                } else {
                    tracing::info!(
                        target: "dominion::config",
                        path = %path.display(),
                        count = catalog.territories.len(),
                        "territories.loaded=file"
                    );
                }
                return (Arc::new(catalog), TerritoryConfigMetadata::new(Some(path)));
            }
            Err(err) => {
                tracing::warn!(
                    target: "dominion::config",
                    path = %path.display(),
                    error = %err,
                    "territories.load_failed"
                );
            }
        }
    }

    let catalog = TerritoryCatalog::builtin();
    tracing::info!(
        target: "dominion::config",
        "territories.loaded=builtin"
    );
    (catalog, TerritoryConfigMetadata::new(None))
}
