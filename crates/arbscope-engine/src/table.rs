use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A row that can take part in table projection: it exposes the text
/// fields the search filter scans and a numeric value per sort key.
pub trait TableRow {
    type SortKey: Copy + PartialEq;

    fn search_text(&self) -> Vec<&str>;
    fn sort_value(&self, key: Self::SortKey) -> Option<f64>;
}

/// The current filter/sort selection for one table.
#[derive(Debug, Clone)]
pub struct TableQuery<K> {
    pub search: String,
    pub sort_key: K,
    pub sort_order: SortOrder,
}

impl<K: Copy + PartialEq> TableQuery<K> {
    /// Fresh query: no filter, descending on the given key.
    pub fn new(sort_key: K) -> Self {
        Self {
            search: String::new(),
            sort_key,
            sort_order: SortOrder::Desc,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Column-header click semantics: re-selecting the active key flips
    /// the order, selecting a new key resets to descending.
    pub fn toggle(&mut self, key: K) {
        if key == self.sort_key {
            self.sort_order = match self.sort_order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Desc;
        }
    }
}

/// Filter and sort one table's rows.
///
/// The filter is a case-insensitive substring match over each row's
/// searchable fields; an empty (or whitespace) term is a no-op. Sorting is
/// stable, so equal-valued rows keep their original relative order, and
/// rows with no value for the chosen key sort last in either direction.
pub fn project<R: TableRow + Clone>(rows: &[R], query: &TableQuery<R::SortKey>) -> Vec<R> {
    let term = query.search.trim().to_lowercase();

    let mut out: Vec<R> = rows
        .iter()
        .filter(|row| {
            term.is_empty()
                || row
                    .search_text()
                    .iter()
                    .any(|text| text.to_lowercase().contains(&term))
        })
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        compare_keys(
            a.sort_value(query.sort_key),
            b.sort_value(query.sort_key),
            query.sort_order,
        )
    });
    out
}

fn compare_keys(a: Option<f64>, b: Option<f64>, order: SortOrder) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        value: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct ValueKey;

    impl TableRow for Item {
        type SortKey = ValueKey;

        fn search_text(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn sort_value(&self, _key: ValueKey) -> Option<f64> {
            self.value
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "alpha", value: Some(2.0) },
            Item { name: "bravo", value: Some(5.0) },
            Item { name: "charlie", value: Some(2.0) },
            Item { name: "delta", value: None },
        ]
    }

    #[test]
    fn test_equal_values_keep_original_order() {
        let query = TableQuery::new(ValueKey);
        let sorted = project(&items(), &query);
        let names: Vec<_> = sorted.iter().map(|i| i.name).collect();
        // alpha and charlie tie at 2.0; alpha stays first. delta sorts last.
        assert_eq!(names, vec!["bravo", "alpha", "charlie", "delta"]);
    }

    #[test]
    fn test_absent_values_sort_last_in_both_directions() {
        let mut query = TableQuery::new(ValueKey);
        query.sort_order = SortOrder::Asc;
        let sorted = project(&items(), &query);
        assert_eq!(sorted.last().unwrap().name, "delta");
    }

    #[test]
    fn test_projection_is_idempotent_without_a_filter() {
        let query = TableQuery::new(ValueKey);
        let once = project(&items(), &query);
        let twice = project(&once, &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = TableQuery::new(ValueKey).with_search("ALP");
        let found = project(&items(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "alpha");

        let blank = TableQuery::new(ValueKey).with_search("   ");
        assert_eq!(project(&items(), &blank).len(), 4);
    }

    #[test]
    fn test_toggle_flips_then_resets() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Key {
            A,
            B,
        }
        let mut query = TableQuery::new(Key::A);
        assert_eq!(query.sort_order, SortOrder::Desc);

        query.toggle(Key::A);
        assert_eq!(query.sort_order, SortOrder::Asc);

        query.toggle(Key::B);
        assert_eq!(query.sort_key, Key::B);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }
}
