//! Index strategy reference data for SQL data types.
//!
//! Maps a SQL data type name to the index mechanisms it supports, each with a
//! human-readable rationale and a recommended flag, plus the default choice
//! to preselect. Types where indexing is meaningless carry a `not_indexable`
//! marker instead. The table is built once and only ever read; `lookup` is
//! the sole way in.

use std::collections::HashMap;
use std::sync::LazyLock;

/// B-tree index kind.
pub const BTREE: &str = "btree";
/// Hash index kind.
pub const HASH: &str = "hash";
/// Generalized search tree index kind.
pub const GIST: &str = "gist";
/// Generalized inverted index kind.
pub const GIN: &str = "gin";

/// One supported index mechanism for a data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTypeOption {
    /// Identifier of the mechanism: `btree`, `hash`, `gist` or `gin`.
    pub kind: &'static str,
    /// Why this mechanism applies to the data type.
    pub rationale: &'static str,
    /// Whether this is the option the UI should steer users toward.
    pub is_recommended: bool,
}

impl IndexTypeOption {
    fn recommended(kind: &'static str, rationale: &'static str) -> Self {
        Self {
            kind,
            rationale,
            is_recommended: true,
        }
    }

    fn discouraged(kind: &'static str, rationale: &'static str) -> Self {
        Self {
            kind,
            rationale,
            is_recommended: false,
        }
    }
}

/// The full indexing capability of one SQL data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeIndexProfile {
    /// Canonical lower-case type name; the lookup key.
    pub data_type: &'static str,
    /// Supported mechanisms in display order. Empty when `not_indexable`.
    pub options: Vec<IndexTypeOption>,
    /// The `kind` to preselect; empty when `not_indexable`.
    pub default_option: &'static str,
    /// When true, index configuration is hidden entirely for this type.
    pub not_indexable: bool,
}

impl DataTypeIndexProfile {
    fn indexable(
        data_type: &'static str,
        default_option: &'static str,
        options: Vec<IndexTypeOption>,
    ) -> Self {
        Self {
            data_type,
            options,
            default_option,
            not_indexable: false,
        }
    }

    fn unindexable(data_type: &'static str) -> Self {
        Self {
            data_type,
            options: vec![],
            default_option: "",
            not_indexable: true,
        }
    }

    /// The recommended option, if the type is indexable.
    pub fn recommended(&self) -> Option<&IndexTypeOption> {
        self.options.iter().find(|o| o.is_recommended)
    }

    /// Returns true if `kind` is among the supported mechanisms.
    pub fn supports(&self, kind: &str) -> bool {
        self.options.iter().any(|o| o.kind == kind)
    }
}

const ORDERED_SCALAR_RATIONALE: &str =
    "Balanced tree supports equality, range scans and sorting over ordered scalar values";

/// Data types whose only sensible index is a plain btree.
const BTREE_SCALARS: &[&str] = &[
    "smallint",
    "integer",
    "bigint",
    "decimal",
    "numeric",
    "real",
    "double precision",
    "serial",
    "bigserial",
    "money",
    "date",
    "time",
    "timestamp",
    "interval",
    "uuid",
];

/// Geometric types served by a gist index.
const GEOMETRIC_TYPES: &[&str] = &["point", "line", "lseg", "box", "path", "polygon", "circle"];

/// Types where building an index is meaningless.
const UNINDEXABLE_TYPES: &[&str] = &["bytea", "boolean", "enum", "json"];

static PROFILES: LazyLock<HashMap<&'static str, DataTypeIndexProfile>> = LazyLock::new(build_table);

fn build_table() -> HashMap<&'static str, DataTypeIndexProfile> {
    let mut table = HashMap::new();

    let mut insert = |profile: DataTypeIndexProfile| {
        table.insert(profile.data_type, profile);
    };

    for &ty in BTREE_SCALARS {
        insert(DataTypeIndexProfile::indexable(
            ty,
            BTREE,
            vec![IndexTypeOption::recommended(BTREE, ORDERED_SCALAR_RATIONALE)],
        ));
    }

    for ty in ["char", "varchar", "text"] {
        insert(DataTypeIndexProfile::indexable(
            ty,
            BTREE,
            vec![
                IndexTypeOption::recommended(
                    BTREE,
                    "Handles equality, ordering and prefix pattern scans over short text",
                ),
                IndexTypeOption::discouraged(
                    HASH,
                    "Equality lookups only; no range, sort or pattern support",
                ),
            ],
        ));
    }

    for &ty in GEOMETRIC_TYPES {
        insert(DataTypeIndexProfile::indexable(
            ty,
            GIST,
            vec![IndexTypeOption::recommended(
                GIST,
                "Generalized search tree answers overlap and containment queries over spatial values",
            )],
        ));
    }

    for ty in ["cidr", "inet"] {
        insert(DataTypeIndexProfile::indexable(
            ty,
            GIST,
            vec![IndexTypeOption::recommended(
                GIST,
                "Supports containment and subnet-inclusion queries over network ranges",
            )],
        ));
    }

    insert(DataTypeIndexProfile::indexable(
        "jsonb",
        GIN,
        vec![IndexTypeOption::recommended(
            GIN,
            "Inverted index over keys and values accelerates containment and existence queries",
        )],
    ));

    for ty in ["tsquery", "tsvector"] {
        insert(DataTypeIndexProfile::indexable(
            ty,
            GIN,
            vec![
                IndexTypeOption::recommended(
                    GIN,
                    "Inverted index over lexemes; the fastest structure for full-text matching",
                ),
                IndexTypeOption::discouraged(
                    GIST,
                    "Lossy signature tree; smaller than gin but slower to query for text search",
                ),
            ],
        ));
    }

    for &ty in UNINDEXABLE_TYPES {
        insert(DataTypeIndexProfile::unindexable(ty));
    }

    table
}

/// Looks up the index profile for a SQL data type.
///
/// Matching is case-sensitive against the canonical lower-case keys; callers
/// normalize case before calling. `None` means the type is unknown to the
/// table, which is a normal result, not an error; the caller applies its own
/// fallback.
pub fn lookup(data_type: &str) -> Option<&'static DataTypeIndexProfile> {
    PROFILES.get(data_type)
}

/// All profiles, sorted by data type name. Intended for listings.
pub fn profiles() -> Vec<&'static DataTypeIndexProfile> {
    let mut all: Vec<_> = PROFILES.values().collect();
    all.sort_by_key(|p| p.data_type);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexable_profiles_are_well_formed() {
        for profile in profiles() {
            if profile.not_indexable {
                continue;
            }
            assert!(
                !profile.options.is_empty(),
                "{} has no options",
                profile.data_type
            );
            assert!(
                profile.supports(profile.default_option),
                "{} defaults to an unsupported kind",
                profile.data_type
            );
            let recommended = profile
                .options
                .iter()
                .filter(|o| o.is_recommended)
                .count();
            assert_eq!(
                recommended, 1,
                "{} should have exactly one recommended option",
                profile.data_type
            );
            for option in &profile.options {
                assert!(
                    !option.rationale.is_empty(),
                    "{} has an option without a rationale",
                    profile.data_type
                );
            }
        }
    }

    #[test]
    fn test_unindexable_profiles_are_empty() {
        for &ty in UNINDEXABLE_TYPES {
            let profile = lookup(ty).unwrap();
            assert!(profile.not_indexable);
            assert!(profile.options.is_empty());
            assert_eq!(profile.default_option, "");
        }
    }

    #[test]
    fn test_varchar_offers_btree_and_hash() {
        let profile = lookup("varchar").unwrap();
        assert_eq!(profile.default_option, BTREE);
        assert_eq!(profile.options.len(), 2);

        let btree = &profile.options[0];
        assert_eq!(btree.kind, BTREE);
        assert!(btree.is_recommended);

        let hash = &profile.options[1];
        assert_eq!(hash.kind, HASH);
        assert!(!hash.is_recommended);
    }

    #[test]
    fn test_jsonb_is_gin_only() {
        let profile = lookup("jsonb").unwrap();
        assert_eq!(profile.options.len(), 1);
        assert_eq!(profile.options[0].kind, GIN);
        assert!(profile.options[0].is_recommended);
        assert_eq!(profile.default_option, GIN);
    }

    #[test]
    fn test_tsvector_prefers_gin_over_gist() {
        let profile = lookup("tsvector").unwrap();
        assert_eq!(profile.default_option, GIN);
        assert!(profile.supports(GIST));
        assert_eq!(profile.recommended().unwrap().kind, GIN);
    }

    #[test]
    fn test_geometric_and_network_types_use_gist() {
        for ty in ["point", "polygon", "circle", "cidr", "inet"] {
            let profile = lookup(ty).unwrap();
            assert_eq!(profile.default_option, GIST, "{ty}");
            assert_eq!(profile.options.len(), 1, "{ty}");
        }
    }

    #[test]
    fn test_multiword_scalar_key() {
        let profile = lookup("double precision").unwrap();
        assert_eq!(profile.default_option, BTREE);
    }

    #[test]
    fn test_unknown_type_has_no_profile() {
        assert!(lookup("unknown_type_xyz").is_none());
        // Case-sensitive: callers normalize before lookup.
        assert!(lookup("VARCHAR").is_none());
    }
}
