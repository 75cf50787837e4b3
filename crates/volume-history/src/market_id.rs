use std::collections::HashSet;

/// Derive the canonical market identifier for a venue + asset pair
///
/// The identifier keys historical volume rows and must stay stable across
/// polling cycles for aggregation to line up. It is also accepted verbatim
/// in config (`additional_market_ids`) to fold other markets into the same
/// cap. Venue names are case-normalized; asset display strings are not,
/// since venues distinguish case.
pub fn make_market_id(venue_name: &str, base_display: &str, quote_display: &str) -> String {
    format!(
        "{}:{}/{}",
        venue_name.trim().to_ascii_lowercase(),
        base_display,
        quote_display,
    )
}

/// Removes duplicate identifiers, preserving first-occurrence order
pub fn dedupe(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_across_calls() {
        let a = make_market_id("Kraken", "XLM", "USD");
        let b = make_market_id("Kraken", "XLM", "USD");
        assert_eq!(a, b);
        assert_eq!(a, "kraken:XLM/USD");
    }

    #[test]
    fn test_venue_case_normalized() {
        assert_eq!(
            make_market_id("KRAKEN", "XLM", "USD"),
            make_market_id(" kraken ", "XLM", "USD"),
        );
    }

    #[test]
    fn test_asset_case_preserved() {
        assert_ne!(
            make_market_id("kraken", "XLM", "USD"),
            make_market_id("kraken", "xlm", "usd"),
        );
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let ids = vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
            "b".to_string(),
        ];
        assert_eq!(dedupe(ids), vec!["a", "b", "c"]);
    }
}
