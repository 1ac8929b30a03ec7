//! Subfaction roster configuration.
//!
//! Loaded from `subfactions.json` with support for an environment
//! variable override. Decoding goes through the lenient scanner in
//! [`crate::lenient_json`] and never fails: an unusable document yields
//! an empty catalogue, and missing keys degrade to the documented
//! defaults. The writer emits canonical 2-space-indented JSON with a
//! fixed field order so `from_json_str(to_json_string(c)) == c`.

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

pub const BUILTIN_SUBFACTIONS: &str = include_str!("data/subfactions.json");

pub const DEFAULT_POWER: i32 = 50;
pub const DEFAULT_GENDER: &str = "MALE";

/// Ordered subfaction roster; insertion order is array order and is
/// significant for reproducible output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubfactionCatalog {
    pub subfactions: Vec<SubfactionRecord>,
}

impl SubfactionCatalog {
    pub fn builtin() -> Arc<Self> {
        Arc::new(Self::from_json_str(BUILTIN_SUBFACTIONS))
    }

    /// Lenient decode; never fails. Absent or malformed input yields an
    /// empty catalogue.
    pub fn from_json_str(json: &str) -> Self {
        let text = strip_comments(json);
        let mut subfactions = Vec::new();
        if let Some(span) = array_span(&text, "subfactions") {
            for slice in object_slices(span) {
                subfactions.push(SubfactionRecord::from_object_slice(slice));
            }
        }
        Self { subfactions }
    }

    pub fn from_file(path: &Path) -> Result<Self, SubfactionConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| SubfactionConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json_str(&contents))
    }

    pub fn get(&self, subfaction_id: &str) -> Option<&SubfactionRecord> {
        self.subfactions
            .iter()
            .find(|record| record.subfaction_id == subfaction_id)
    }

    pub fn to_json_string(&self) -> String {
        let records: Vec<String> = self
            .subfactions
            .iter()
            .map(|record| record.render(4))
            .collect();
        let fields = vec![format!("\"subfactions\": {}", render_array(&records, 2))];
        render_object(&fields, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfactionRecord {
    pub subfaction_id: String,
    pub name: String,
    pub faction_id: String,
    pub home_market_id: Option<String>,
    pub kind: SubfactionKind,
    pub power: i32,
    pub members: Vec<MemberRecord>,
}

impl Default for SubfactionRecord {
    fn default() -> Self {
        Self {
            subfaction_id: String::new(),
            name: String::new(),
            faction_id: String::new(),
            home_market_id: None,
            kind: SubfactionKind::default(),
            power: DEFAULT_POWER,
            members: Vec::new(),
        }
    }
}

impl SubfactionRecord {
    fn from_object_slice(obj: &str) -> Self {
        let members = match array_span(obj, "members") {
            Some(span) => object_slices(span)
                .into_iter()
                .map(MemberRecord::from_object_slice)
                .collect(),
            None => Vec::new(),
        };
        Self {
            subfaction_id: extract_string(obj, "subfactionId"),
            name: extract_string(obj, "name"),
            faction_id: extract_string(obj, "factionId"),
            home_market_id: extract_string_or_null(obj, "homeMarketId"),
            kind: SubfactionKind::from_tag(&extract_string_or_default(obj, "kind", "POLITICAL")),
            power: extract_int(obj, "power", DEFAULT_POWER),
            members,
        }
    }

    fn render(&self, indent: usize) -> String {
        let mut fields = vec![
            string_field("subfactionId", &self.subfaction_id),
            string_field("name", &self.name),
            string_field("factionId", &self.faction_id),
        ];
        if let Some(home) = &self.home_market_id {
            fields.push(string_field("homeMarketId", home));
        }
        if self.kind != SubfactionKind::Political {
            fields.push(string_field("kind", self.kind.as_tag()));
        }
        fields.push(int_field("power", self.power));
        let members: Vec<String> = self
            .members
            .iter()
            .map(|member| member.render(indent + 4))
            .collect();
        fields.push(format!("\"members\": {}", render_array(&members, indent + 2)));
        render_object(&fields, indent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub portrait_id: Option<String>,
    pub rank_id: Option<String>,
    pub post_id: Option<String>,
    pub bonus: Option<String>,
    /// Order preserved, duplicates kept: the catalogue echoes the
    /// source sequence faithfully.
    pub traits: Vec<String>,
}

impl Default for MemberRecord {
    fn default() -> Self {
        Self {
            role: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            gender: DEFAULT_GENDER.to_string(),
            portrait_id: None,
            rank_id: None,
            post_id: None,
            bonus: None,
            traits: Vec::new(),
        }
    }
}

impl MemberRecord {
    fn from_object_slice(obj: &str) -> Self {
        Self {
            role: extract_string(obj, "role"),
            first_name: extract_string(obj, "firstName"),
            last_name: extract_string(obj, "lastName"),
            gender: extract_string_or_default(obj, "gender", DEFAULT_GENDER),
            portrait_id: extract_string_or_null(obj, "portraitId"),
            rank_id: extract_string_or_null(obj, "rankId"),
            post_id: extract_string_or_null(obj, "postId"),
            bonus: extract_string_or_null(obj, "bonus"),
            traits: extract_string_array(obj, "traits"),
        }
    }

    fn render(&self, indent: usize) -> String {
        let mut fields = vec![
            string_field("role", &self.role),
            string_field("firstName", &self.first_name),
            string_field("lastName", &self.last_name),
            string_field("gender", &self.gender),
        ];
        if let Some(portrait) = &self.portrait_id {
            fields.push(string_field("portraitId", portrait));
        }
        if let Some(rank) = &self.rank_id {
            fields.push(string_field("rankId", rank));
        }
        if let Some(post) = &self.post_id {
            fields.push(string_field("postId", post));
        }
        if let Some(bonus) = &self.bonus {
            fields.push(string_field("bonus", bonus));
        }
        if !self.traits.is_empty() {
            fields.push(format!("\"traits\": {}", render_string_array(&self.traits)));
        }
        render_object(&fields, indent)
    }
}

/// Closed subfaction classification; unknown tags fall back to
/// [`SubfactionKind::Political`] instead of failing the parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubfactionKind {
    #[default]
    Political,
    Criminal,
}

impl SubfactionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "CRIMINAL" => SubfactionKind::Criminal,
            _ => SubfactionKind::Political,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            SubfactionKind::Political => "POLITICAL",
            SubfactionKind::Criminal => "CRIMINAL",
        }
    }
}

#[derive(Debug, Error)]
pub enum SubfactionConfigError {
    #[error("failed to read subfaction config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Metadata about the subfaction configuration source.
#[derive(Debug, Clone)]
pub struct SubfactionConfigMetadata {
    path: Option<PathBuf>,
}

impl SubfactionConfigMetadata {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Load the subfaction roster from environment or default path, falling
/// back to the builtin document.
pub fn load_subfactions_from_env() -> (Arc<SubfactionCatalog>, SubfactionConfigMetadata) {
    let override_path = env::var("SUBFACTIONS_CONFIG_PATH").ok().map(PathBuf::from);
    let default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/data/subfactions.json");

    let candidates: Vec<PathBuf> = match override_path {
        Some(ref path) => vec![path.clone()],
        None => vec![default_path.clone()],
    };

    for path in candidates {
        match SubfactionCatalog::from_file(&path) {
            Ok(catalog) => {
                if catalog.subfactions.is_empty() {
                    tracing::warn!(
                        target: "dominion::config",
                        path = %path.display(),
                        "subfactions.loaded=0"
                    );
                } else {
                    tracing::info!(
                        target: "dominion::config",
                        path = %path.display(),
                        count = catalog.subfactions.len(),
                        "subfactions.loaded=file"
                    );
                }
                return (Arc::new(catalog), SubfactionConfigMetadata::new(Some(path)));
            }
            Err(err) => {
                tracing::warn!(
                    target: "dominion::config",
                    path = %path.display(),
                    error = %err,
                    "subfactions.load_failed"
                );
            }
        }
    }

    let catalog = SubfactionCatalog::builtin();
    tracing::info!(
        target: "dominion::config",
        "subfactions.loaded=builtin"
    );
    (catalog, SubfactionConfigMetadata::new(None))
}
