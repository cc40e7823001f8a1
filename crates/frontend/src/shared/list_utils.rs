//! Search and sort helpers shared by the list pages.
use std::cmp::Ordering;

/// Row types that can be matched against the search box.
pub trait Searchable {
    /// Text the search box matches against (any case).
    fn search_text(&self) -> String;

    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty() || self.search_text().to_lowercase().contains(&needle)
    }
}

/// Row types with named sort fields.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

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

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Replaces the row with the same key, or inserts the new row first.
pub fn upsert_by<T, K: PartialEq>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> K) {
    let k = key(&item);
    match items.iter().position(|existing| key(existing) == k) {
        Some(pos) => items[pos] = item,
        None => items.insert(0, item),
    }
}

/// Case-insensitive comparison of optional text; blanks sort first.
pub fn cmp_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or("")
        .to_lowercase()
        .cmp(&b.unwrap_or("").to_lowercase())
}

pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        qty: i64,
    }

    impl Searchable for Row {
        fn search_text(&self) -> String {
            self.name.to_string()
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => cmp_text(Some(self.name), Some(other.name)),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "USB cable", qty: 4 },
            Row { name: "charger", qty: 10 },
            Row { name: "Screen", qty: 1 },
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let found = filter_list(rows(), "usb");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "USB cable");
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["charger", "Screen", "USB cable"]);

        sort_list(&mut items, "qty", false);
        let qty: Vec<_> = items.iter().map(|r| r.qty).collect();
        assert_eq!(qty, vec![10, 4, 1]);
    }

    #[test]
    fn test_upsert_by() {
        let mut items = rows();
        upsert_by(&mut items, Row { name: "charger", qty: 2 }, |r| r.name);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].qty, 2);

        upsert_by(&mut items, Row { name: "Mouse", qty: 5 }, |r| r.name);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Mouse");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("qty", "name", true), " ⇅");
    }
}
