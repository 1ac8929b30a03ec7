use faction_config::{
    MemberRecord, SubfactionCatalog, SubfactionKind, SubfactionRecord, TerritoryCatalog,
    TerritoryRecord, TerritoryTier,
};

/// A roster exercising every optional field at least once in each
/// state (present and absent).
pub fn sample_subfactions() -> SubfactionCatalog {
    SubfactionCatalog {
        subfactions: vec![
            SubfactionRecord {
                subfaction_id: "merchant_combine".to_string(),
                name: "Merchant Combine".to_string(),
                faction_id: "independents".to_string(),
                home_market_id: Some("port_vexen".to_string()),
                kind: SubfactionKind::Political,
                power: 60,
                members: vec![
                    MemberRecord {
                        role: "leader".to_string(),
                        first_name: "Senna".to_string(),
                        last_name: "Odell".to_string(),
                        gender: "FEMALE".to_string(),
                        portrait_id: Some("portrait_odell".to_string()),
                        rank_id: Some("trade_baron".to_string()),
                        post_id: Some("administrator".to_string()),
                        bonus: Some("TRADE_INCOME".to_string()),
                        traits: vec!["SHREWD".to_string(), "CONNECTED".to_string()],
                    },
                    MemberRecord {
                        role: "enforcer".to_string(),
                        first_name: "Pavel".to_string(),
                        last_name: "Brenn".to_string(),
                        ..MemberRecord::default()
                    },
                ],
            },
            SubfactionRecord {
                subfaction_id: "red_lanterns".to_string(),
                name: "Red Lanterns".to_string(),
                faction_id: "pirates".to_string(),
                kind: SubfactionKind::Criminal,
                power: 35,
                ..SubfactionRecord::default()
            },
        ],
    }
}

pub fn sample_territories() -> TerritoryCatalog {
    TerritoryCatalog {
        decay_per_tick: 3,
        territories: vec![
            TerritoryRecord {
                territory_id: "core_worlds".to_string(),
                name: "Core Worlds".to_string(),
                tier: TerritoryTier::High,
                plot_hook: Some("Old shipping lanes still carry the bulk of trade.".to_string()),
                num_constellations: 3,
                interested_factions: vec!["hegemony".to_string(), "independents".to_string()],
            },
            TerritoryRecord {
                territory_id: "drift_verge".to_string(),
                name: "Drift Verge".to_string(),
                ..TerritoryRecord::default()
            },
        ],
    }
}
