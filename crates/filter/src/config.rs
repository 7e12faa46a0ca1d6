//! Configuration mapping → filter tree.
//!
//! Group configuration reaches this crate as an already-parsed mapping. The
//! builder is deliberately total: a configuration typo must degrade the
//! filter, never fail group setup.

use serde_json::Value;

use crate::filter::IncludeFilter;
use crate::operator::FilterOperator;

/// Configuration key holding the domain(s) to include.
pub const CONF_DOMAIN: &str = "domain";

/// Build the root filter for one group configuration.
///
/// The root is always an AND composite. A `domain` key contributes one child:
/// a single leaf for a string value, or an OR composite over the items of an
/// array value ("the entry's domain is any of these"). All other keys are
/// ignored, and the configuration may be absent or of the wrong shape
/// entirely — the result is then the empty AND root, which includes every
/// entry.
#[must_use]
pub fn create_filter(config: &Value) -> IncludeFilter {
    let mut filters = Vec::new();
    if let Some(domain_config) = config.get(CONF_DOMAIN) {
        filters.push(domain_filter(domain_config));
    }
    IncludeFilter::composite(filters, FilterOperator::And)
}

/// Turn the `domain` value into one top-level child.
///
/// Only an array counts as "multiple domains"; any other non-string shape is
/// a single malformed value and degrades to a node matching nothing.
fn domain_filter(value: &Value) -> IncludeFilter {
    match value {
        Value::String(domain) => IncludeFilter::domain(domain.clone()),
        Value::Array(domains) => {
            IncludeFilter::composite(domains.iter().map(single_domain).collect(), FilterOperator::Or)
        }
        other => {
            tracing::debug!(value = %other, "domain value is neither a string nor a list, matches nothing");
            match_nothing()
        }
    }
}

/// One leaf per array item; non-string items match nothing.
fn single_domain(value: &Value) -> IncludeFilter {
    match value.as_str() {
        Some(domain) => IncludeFilter::domain(domain),
        None => {
            tracing::debug!(value = %value, "domain list item is not a string, matches nothing");
            match_nothing()
        }
    }
}

// An empty OR is vacuously false: the closed-variant rendering of a
// comparison that can never succeed.
fn match_nothing() -> IncludeFilter {
    IncludeFilter::composite(Vec::new(), FilterOperator::Or)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entityfilter_registry::RegistryEntry;
    use serde_json::json;

    fn entry(entity_id: &str) -> RegistryEntry {
        RegistryEntry::builder()
            .entity_id(entity_id)
            .platform("demo")
            .build()
            .unwrap()
    }

    #[test]
    fn should_include_every_entry_when_config_is_empty() {
        let filter = create_filter(&json!({}));
        assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        assert!(filter.is_valid(&entry("switch.ceiling_fan")));
        assert!(filter.is_valid(&entry("light.reading_lamp")));
    }

    #[test]
    fn should_build_empty_and_root_for_empty_config() {
        let root = create_filter(&json!({}));
        assert!(matches!(
            root,
            IncludeFilter::Composite { operator: FilterOperator::And, filters } if filters.is_empty()
        ));
    }

    #[test]
    fn should_match_single_domain_string() {
        let filter = create_filter(&json!({ "domain": "sensor" }));
        assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        assert!(!filter.is_valid(&entry("switch.ceiling_fan")));
    }

    #[test]
    fn should_match_any_domain_from_list() {
        let filter = create_filter(&json!({ "domain": ["sensor", "switch"] }));
        assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        assert!(filter.is_valid(&entry("switch.ceiling_fan")));
        assert!(!filter.is_valid(&entry("light.reading_lamp")));
    }

    #[test]
    fn should_nest_or_composite_under_and_root_for_domain_list() {
        let root = create_filter(&json!({ "domain": ["sensor", "switch"] }));
        match root {
            IncludeFilter::Composite { filters, operator } => {
                assert_eq!(operator, FilterOperator::And);
                assert_eq!(filters.len(), 1);
                assert!(matches!(
                    &filters[0],
                    IncludeFilter::Composite { operator: FilterOperator::Or, filters }
                        if filters.len() == 2
                ));
            }
            IncludeFilter::Domain { .. } => panic!("root must be a composite"),
        }
    }

    #[test]
    fn should_ignore_unrecognized_keys() {
        let filter = create_filter(&json!({ "area": "kitchen", "domain": "light" }));
        assert!(filter.is_valid(&entry("light.reading_lamp")));
        assert!(!filter.is_valid(&entry("sensor.outdoor_temperature")));
    }

    #[test]
    fn should_include_every_entry_when_only_unrecognized_keys_present() {
        let filter = create_filter(&json!({ "area": "kitchen" }));
        assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        assert!(filter.is_valid(&entry("light.reading_lamp")));
    }

    #[test]
    fn should_match_nothing_when_domain_value_is_malformed() {
        for config in [json!({ "domain": 42 }), json!({ "domain": { "name": "sensor" } })] {
            let filter = create_filter(&config);
            assert!(!filter.is_valid(&entry("sensor.outdoor_temperature")));
            assert!(!filter.is_valid(&entry("switch.ceiling_fan")));
        }
    }

    #[test]
    fn should_match_nothing_when_domain_list_is_empty() {
        let filter = create_filter(&json!({ "domain": [] }));
        assert!(!filter.is_valid(&entry("sensor.outdoor_temperature")));
    }

    #[test]
    fn should_keep_string_items_when_list_has_malformed_entries() {
        let filter = create_filter(&json!({ "domain": ["sensor", 7] }));
        assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        assert!(!filter.is_valid(&entry("switch.ceiling_fan")));
    }

    #[test]
    fn should_keep_one_node_per_list_item() {
        // Malformed items stay in the tree as inert children.
        let root = create_filter(&json!({ "domain": ["sensor", 7] }));
        match root {
            IncludeFilter::Composite { filters, .. } => {
                assert!(matches!(
                    &filters[0],
                    IncludeFilter::Composite { operator: FilterOperator::Or, filters }
                        if filters.len() == 2
                ));
            }
            IncludeFilter::Domain { .. } => panic!("root must be a composite"),
        }
    }

    #[test]
    fn should_include_every_entry_when_config_is_not_a_mapping() {
        for config in [json!(null), json!("domain"), json!(["domain"]), json!(7)] {
            let filter = create_filter(&config);
            assert!(filter.is_valid(&entry("sensor.outdoor_temperature")));
        }
    }
}
