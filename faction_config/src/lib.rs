//! Lenient configuration codec for the Dominion campaign layer.
//!
//! Loads and round-trips the subfaction roster and territory catalogue
//! through a purpose-built JSON-subset scanner, so hand-edited config
//! text survives parse → mutate → serialize without a host JSON
//! library in the loop. Parsing never fails: missing or malformed keys
//! degrade to documented defaults, field by field.

mod json_writer;
pub mod lenient_json;
pub mod subfaction_config;
pub mod territory_config;

pub use subfaction_config::{
    load_subfactions_from_env, MemberRecord, SubfactionCatalog, SubfactionConfigError,
    SubfactionConfigMetadata, SubfactionKind, SubfactionRecord, BUILTIN_SUBFACTIONS,
};
pub use territory_config::{
    load_territories_from_env, TerritoryCatalog, TerritoryConfigError, TerritoryConfigMetadata,
    TerritoryRecord, TerritoryTier, BUILTIN_TERRITORIES,
};
