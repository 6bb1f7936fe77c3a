/// Column-sort utilities shared by the report tables
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait for row types with sortable columns
pub trait Sortable {
    /// Compare two rows by the named field. Unknown fields compare equal.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by the named field. Stable, full re-sort.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header
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

/// Next `(field, ascending)` after clicking a column header.
///
/// Clicking the active column flips direction; clicking a new column selects
/// it descending, since every sortable column here is a metric ranked
/// biggest-first.
pub fn next_sort_state(
    current_field: &str,
    current_ascending: bool,
    clicked: &str,
) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !current_ascending)
    } else {
        (clicked.to_string(), false)
    }
}

/// One shared sort callback for all of a page's header cells.
pub fn create_sort_callback(
    sort_field: ReadSignal<String>,
    set_sort_field: WriteSignal<String>,
    sort_ascending: ReadSignal<bool>,
    set_sort_ascending: WriteSignal<bool>,
) -> Callback<String> {
    Callback::new(move |field: String| {
        let (next_field, next_ascending) =
            next_sort_state(&sort_field.get(), sort_ascending.get(), &field);
        set_sort_field.set(next_field);
        set_sort_ascending.set(next_ascending);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        amount: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn amounts(items: &[Row]) -> Vec<f64> {
        items.iter().map(|r| r.amount).collect()
    }

    #[test]
    fn test_sort_list_both_directions() {
        let mut items = vec![Row { amount: 2.0 }, Row { amount: 3.0 }, Row { amount: 1.0 }];
        sort_list(&mut items, "amount", true);
        assert_eq!(amounts(&items), vec![1.0, 2.0, 3.0]);
        sort_list(&mut items, "amount", false);
        assert_eq!(amounts(&items), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_sort_list_unknown_field_keeps_order() {
        let mut items = vec![Row { amount: 2.0 }, Row { amount: 1.0 }];
        sort_list(&mut items, "missing", true);
        assert_eq!(amounts(&items), vec![2.0, 1.0]);
    }

    #[test]
    fn test_same_field_toggles_direction() {
        assert_eq!(
            next_sort_state("total", false, "total"),
            ("total".to_string(), true)
        );
        assert_eq!(
            next_sort_state("total", true, "total"),
            ("total".to_string(), false)
        );
    }

    #[test]
    fn test_new_field_starts_descending() {
        assert_eq!(
            next_sort_state("total", true, "pax"),
            ("pax".to_string(), false)
        );
        assert_eq!(
            next_sort_state("", false, "pax"),
            ("pax".to_string(), false)
        );
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("total", "total", true), " ▲");
        assert_eq!(get_sort_indicator("total", "total", false), " ▼");
        assert_eq!(get_sort_indicator("total", "pax", true), " ⇅");
    }
}
