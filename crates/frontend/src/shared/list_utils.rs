/// List helpers shared by the table views (filtering, sorting).
use std::cmp::Ordering;

/// Trait for row types that support text filtering.
pub trait Searchable {
    /// Whether the row matches the filter text.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait for row types that support column sorting.
pub trait Sortable {
    /// Compare two rows by the named field.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the named field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by query text. Queries shorter than 3 characters match
/// everything.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().len() < 3 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Arrow shown in a sortable column header.
pub fn get_sort_indicator(sort_field: &str, field: &str, ascending: bool) -> &'static str {
    if sort_field != field {
        ""
    } else if ascending {
        " \u{25b2}"
    } else {
        " \u{25bc}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        name: String,
        id: i64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.cmp(&other.name),
                "id" => self.id.cmp(&other.id),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "reflection".to_string(),
                id: 2,
            },
            Row {
                name: "commitment".to_string(),
                id: 1,
            },
        ]
    }

    #[test]
    fn test_sort_by_field_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "id", true);
        assert_eq!(items[0].id, 1);
        sort_list(&mut items, "id", false);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_short_filter_matches_everything() {
        assert_eq!(filter_list(rows(), "re").len(), 2);
        assert_eq!(filter_list(rows(), "refl").len(), 1);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("id", "id", true), " \u{25b2}");
        assert_eq!(get_sort_indicator("id", "name", true), "");
    }
}
