use crate::types::quote::Quote;
use crate::view::sort::SortConfig;

/// Filters by case-insensitive symbol substring, then stable-sorts when a
/// sort is configured. The input is left untouched.
pub fn project(all: &[Quote], search_term: &str, sort_config: Option<SortConfig>) -> Vec<Quote> {
    let needle = search_term.to_lowercase();

    let mut visible: Vec<Quote> = all
        .iter()
        .filter(|quote| quote.symbol.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if let Some(config) = sort_config {
        visible.sort_by(|a, b| config.compare(a, b));
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::price::Price;
    use crate::view::sort::{SortDirection, SortKey};

    fn quote(symbol: &str, price: f64, change_percent: f64) -> Quote {
        Quote::new(symbol, Price::new(price), change_percent)
    }

    fn symbols(quotes: &[Quote]) -> Vec<&str> {
        quotes.iter().map(|q| q.symbol.as_str()).collect()
    }

    fn sample() -> Vec<Quote> {
        vec![
            quote("B", 30.0, 0.5),
            quote("A", 10.0, -1.0),
            quote("C", 20.0, 0.0),
        ]
    }

    #[test]
    fn empty_search_without_sort_returns_input_order() {
        let all = sample();

        assert_eq!(project(&all, "", None), all);
    }

    #[test]
    fn search_is_a_case_insensitive_substring() {
        let all = vec![
            quote("AAPL", 190.0, 1.0),
            quote("MSFT", 410.0, 0.2),
            quote("AAL", 12.0, -3.0),
            quote("BAA", 1.0, 0.0),
        ];

        assert_eq!(symbols(&project(&all, "aa", None)), vec!["AAPL", "AAL", "BAA"]);
        assert_eq!(symbols(&project(&all, "Ms", None)), vec!["MSFT"]);
        assert!(project(&all, "zz", None).is_empty());
    }

    #[test]
    fn sorts_by_price_ascending() {
        let sorted = project(
            &sample(),
            "",
            Some(SortConfig::new(SortKey::Price, SortDirection::Ascending)),
        );

        assert_eq!(symbols(&sorted), vec!["A", "C", "B"]);
    }

    #[test]
    fn sorts_by_symbol_descending() {
        let sorted = project(
            &sample(),
            "",
            Some(SortConfig::new(SortKey::Symbol, SortDirection::Descending)),
        );

        assert_eq!(symbols(&sorted), vec!["C", "B", "A"]);
    }

    #[test]
    fn sorts_by_signed_change_percent() {
        let sorted = project(
            &sample(),
            "",
            Some(SortConfig::new(SortKey::ChangePercent, SortDirection::Descending)),
        );

        assert_eq!(symbols(&sorted), vec!["B", "C", "A"]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let all = vec![
            quote("X", 5.0, 0.0),
            quote("Y", 5.0, 0.0),
            quote("Z", 1.0, 0.0),
        ];

        let ascending = project(
            &all,
            "",
            Some(SortConfig::new(SortKey::Price, SortDirection::Ascending)),
        );
        let descending = project(
            &all,
            "",
            Some(SortConfig::new(SortKey::Price, SortDirection::Descending)),
        );

        assert_eq!(symbols(&ascending), vec!["Z", "X", "Y"]);
        assert_eq!(symbols(&descending), vec!["X", "Y", "Z"]);
    }

    #[test]
    fn toggling_the_same_key_reverses_the_view() {
        let all = sample();
        let first = SortConfig::toggle(None, SortKey::Price);
        let second = SortConfig::toggle(Some(first), SortKey::Price);

        assert_eq!(symbols(&project(&all, "", Some(first))), vec!["A", "C", "B"]);
        assert_eq!(symbols(&project(&all, "", Some(second))), vec!["B", "C", "A"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let all = sample();
        let before = all.clone();

        let _ = project(
            &all,
            "a",
            Some(SortConfig::new(SortKey::Symbol, SortDirection::Descending)),
        );

        assert_eq!(all, before);
    }
}
