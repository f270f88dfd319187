/// Configuration constants for the application
pub mod config {
    /// Fixed endpoint serving the complete breed list
    pub const BREEDS_ENDPOINT: &str = "https://api.thedogapi.com/v1/breeds?ref=thedataschool.co.uk";

    /// Placeholder rendered for absent descriptive fields
    pub const MISSING_FIELD: &str = "N/A";
}

/// Filtering shared by live suggestions and committed searches
pub mod search {
    use crate::dogapi::Breed;

    /// Case-insensitive substring match on the breed name
    pub fn breed_matches(breed: &Breed, query: &str) -> bool {
        breed.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Keeps every breed whose name contains `query`, preserving the
    /// original relative order. An empty query matches everything.
    pub fn filter_breeds(breeds: &[Breed], query: &str) -> Vec<Breed> {
        breeds
            .iter()
            .filter(|breed| breed_matches(breed, query))
            .cloned()
            .collect()
    }

    /// Live suggestions for the current query. A blank or whitespace-only
    /// query suggests nothing.
    pub fn suggestions_for(breeds: &[Breed], query: &str) -> Vec<Breed> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        filter_breeds(breeds, query)
    }
}

/// Cell formatting for the breeds table
pub mod display {
    use crate::dogapi::MeasureRange;

    use super::config::MISSING_FIELD;

    /// Formats a measurement pair as "{imperial} / {metric}"
    pub fn measure_cell(range: &MeasureRange) -> String {
        format!("{} / {}", range.imperial, range.metric)
    }

    /// Returns the text itself, or the placeholder when it is absent or empty
    pub fn text_or_placeholder(text: Option<&str>) -> &str {
        match text {
            Some(t) if !t.is_empty() => t,
            _ => MISSING_FIELD,
        }
    }
}

pub use display::*;
pub use search::*;

#[cfg(test)]
mod tests {
    use super::display::*;
    use super::search::*;
    use crate::dogapi::{Breed, MeasureRange};

    fn breed(id: i64, name: &str) -> Breed {
        Breed {
            id,
            name: name.to_string(),
            weight: MeasureRange::default(),
            height: MeasureRange::default(),
            bred_for: None,
            breed_group: None,
            life_span: None,
            temperament: None,
        }
    }

    fn names(breeds: &[Breed]) -> Vec<&str> {
        breeds.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_substring_case_insensitively() {
        let list = vec![breed(1, "Akita"), breed(2, "Beagle"), breed(3, "Boxer")];

        assert_eq!(names(&filter_breeds(&list, "AK")), vec!["Akita"]);
        assert_eq!(names(&filter_breeds(&list, "eagl")), vec!["Beagle"]);
        assert!(filter_breeds(&list, "poodle").is_empty());
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let list = vec![
            breed(1, "Boxer"),
            breed(2, "Akita"),
            breed(3, "Bloodhound"),
            breed(4, "Poodle"),
        ];

        assert_eq!(
            names(&filter_breeds(&list, "o")),
            vec!["Boxer", "Bloodhound", "Poodle"]
        );
    }

    #[test]
    fn test_empty_query_passes_everything_through() {
        let list = vec![breed(1, "Akita"), breed(2, "Beagle")];
        assert_eq!(filter_breeds(&list, ""), list);
    }

    #[test]
    fn test_successive_searches_narrow_the_previous_result() {
        let list = vec![
            breed(1, "Beagle"),
            breed(2, "Bearded Collie"),
            breed(3, "Boxer"),
        ];

        // A second search runs over the replaced list, not the original.
        let first = filter_breeds(&list, "b");
        assert_eq!(names(&first), vec!["Beagle", "Bearded Collie", "Boxer"]);

        let second = filter_breeds(&first, "bea");
        assert_eq!(names(&second), vec!["Beagle", "Bearded Collie"]);
    }

    #[test]
    fn test_blank_query_yields_no_suggestions() {
        let list = vec![breed(1, "Akita")];

        assert!(suggestions_for(&list, "").is_empty());
        assert!(suggestions_for(&list, "   ").is_empty());
    }

    #[test]
    fn test_suggestions_match_the_filter() {
        let list = vec![breed(1, "Akita"), breed(2, "Alaskan Malamute")];

        let suggested = suggestions_for(&list, "ala");
        assert_eq!(names(&suggested), vec!["Alaskan Malamute"]);
    }

    #[test]
    fn test_measure_cell_joins_imperial_and_metric() {
        let range = MeasureRange {
            imperial: "70-110".to_string(),
            metric: "32-50".to_string(),
        };

        assert_eq!(measure_cell(&range), "70-110 / 32-50");
    }

    #[test]
    fn test_text_or_placeholder_falls_back_on_absent_or_empty() {
        assert_eq!(text_or_placeholder(Some("Working")), "Working");
        assert_eq!(text_or_placeholder(None), "N/A");
        assert_eq!(text_or_placeholder(Some("")), "N/A");
    }
}
