use crate::record::{LoadedRecord, SalesRecord};

/// Categories the filter control always offers, even before data arrives.
pub const DEFAULT_CATEGORIES: [&str; 2] = ["OTC", "HW"];

/// Returns the records passing both the free-text search and the category
/// constraint, in input order.
///
/// An empty search term or an empty/absent category does not constrain.
pub fn apply_filters(
    all: &[LoadedRecord],
    search_term: &str,
    category: Option<&str>,
) -> Vec<LoadedRecord> {
    let term = search_term.to_lowercase();
    let category = category.filter(|c| !c.is_empty());

    all.iter()
        .filter(|loaded| matches_search(&loaded.record, &term))
        .filter(|loaded| category.map_or(true, |c| loaded.record.category == c))
        .cloned()
        .collect()
}

/// True when any cell of `record` contains `term_lower`, case-insensitively.
/// `term_lower` must already be lowercased.
pub fn matches_search(record: &SalesRecord, term_lower: &str) -> bool {
    term_lower.is_empty()
        || record
            .field_texts()
            .iter()
            .any(|text| text.to_lowercase().contains(term_lower))
}

/// Options for the category filter: the defaults, then any other category
/// seen in the data, in encounter order.
pub fn category_options(all: &[LoadedRecord]) -> Vec<String> {
    let mut options: Vec<String> = DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for loaded in all {
        let category = &loaded.record.category;
        if !category.is_empty() && !options.contains(category) {
            options.push(category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NumericCell;

    fn record(area: &str, category: &str, value: f64) -> SalesRecord {
        SalesRecord {
            area: area.to_string(),
            category: category.to_string(),
            value: NumericCell::Number(value),
            ..Default::default()
        }
    }

    fn dataset() -> Vec<LoadedRecord> {
        LoadedRecord::from_response(vec![
            record("North", "OTC", 100.0),
            record("South", "HW", 250.0),
            record("Northeast", "HW", 75.0),
            record("West", "OTC", 10.0),
        ])
    }

    fn areas(records: &[LoadedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.record.area.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let all = dataset();
        assert_eq!(apply_filters(&all, "", None), all);
        assert_eq!(apply_filters(&all, "", Some("")), all);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = dataset();
        assert_eq!(areas(&apply_filters(&all, "north", None)), vec!["North", "Northeast"]);
        assert_eq!(areas(&apply_filters(&all, "NORTH", None)), vec!["North", "Northeast"]);
        // numeric cells are searched by their text
        assert_eq!(areas(&apply_filters(&all, "250", None)), vec!["South"]);
    }

    #[test]
    fn test_category_must_match_exactly() {
        let all = dataset();
        assert_eq!(areas(&apply_filters(&all, "", Some("HW"))), vec!["South", "Northeast"]);
        assert!(apply_filters(&all, "", Some("hw")).is_empty());
    }

    #[test]
    fn test_both_predicates_apply() {
        let all = dataset();
        let result = apply_filters(&all, "north", Some("HW"));
        assert_eq!(areas(&result), vec!["Northeast"]);

        for loaded in &all {
            let kept = result.iter().any(|r| r.id == loaded.id);
            let passes = matches_search(&loaded.record, "north") && loaded.record.category == "HW";
            assert_eq!(kept, passes);
        }
    }

    #[test]
    fn test_search_matches_exponent_form_of_tiny_values() {
        let all = LoadedRecord::from_response(vec![record("North", "OTC", 1e-7)]);
        assert_eq!(apply_filters(&all, "1e-7", None).len(), 1);
        assert!(apply_filters(&all, "0.0000001", None).is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_empty_result() {
        assert!(apply_filters(&[], "anything", Some("OTC")).is_empty());
    }

    #[test]
    fn test_category_options_extend_defaults() {
        let mut all = dataset();
        all.extend(LoadedRecord::from_response(vec![
            record("East", "SVC", 1.0),
            record("East", "", 1.0),
            record("East", "SVC", 1.0),
        ]));
        assert_eq!(category_options(&all), vec!["OTC", "HW", "SVC"]);
    }
}
