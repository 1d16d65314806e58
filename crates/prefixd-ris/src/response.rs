//! Wire model for the RIS `ris-prefixes` JSON document.
//!
//! Only the `data.prefixes.{v4,v6}.originating` branches are read. Every
//! level defaults when absent, so a document missing a branch decodes to empty
//! lists instead of failing — an empty family is a lookup miss, not an error.

use serde::Deserialize;

use prefixd_core::PrefixSet;

/// Top-level RIS response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct RisDocument {
    #[serde(default)]
    data: RisData,
}

#[derive(Debug, Default, Deserialize)]
struct RisData {
    #[serde(default)]
    prefixes: RisPrefixes,
}

#[derive(Debug, Default, Deserialize)]
struct RisPrefixes {
    #[serde(default)]
    v4: FamilyPrefixes,
    #[serde(default)]
    v6: FamilyPrefixes,
}

#[derive(Debug, Default, Deserialize)]
struct FamilyPrefixes {
    #[serde(default)]
    originating: Vec<String>,
}

impl RisDocument {
    /// Extracts both originated-prefix lists.
    #[must_use]
    pub fn into_prefix_set(self) -> PrefixSet {
        PrefixSet {
            v4: self.data.prefixes.v4.originating,
            v6: self.data.prefixes.v6.originating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_document() {
        let doc: RisDocument = serde_json::from_str(
            r#"{
                "status": "ok",
                "data": {
                    "resource": "13335",
                    "prefixes": {
                        "v4": { "originating": ["1.0.0.0/24", "1.1.1.0/24"], "transiting": [] },
                        "v6": { "originating": ["2606:4700::/32"], "transiting": [] }
                    }
                }
            }"#,
        )
        .unwrap();

        let set = doc.into_prefix_set();
        assert_eq!(set.v4, ["1.0.0.0/24", "1.1.1.0/24"]);
        assert_eq!(set.v6, ["2606:4700::/32"]);
    }

    #[test]
    fn missing_branches_decode_to_empty_lists() {
        let doc: RisDocument = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        let set = doc.into_prefix_set();
        assert!(set.v4.is_empty());
        assert!(set.v6.is_empty());

        let doc: RisDocument = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        let set = doc.into_prefix_set();
        assert!(set.v4.is_empty());
        assert!(set.v6.is_empty());
    }

    #[test]
    fn missing_family_decodes_to_empty_list() {
        let doc: RisDocument = serde_json::from_str(
            r#"{"data": {"prefixes": {"v4": {"originating": ["10.0.0.0/8"]}}}}"#,
        )
        .unwrap();
        let set = doc.into_prefix_set();
        assert_eq!(set.v4, ["10.0.0.0/8"]);
        assert!(set.v6.is_empty());
    }
}
