use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Default splitter: a run of whitespace between classes.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Options controlling how a matched class string is sorted
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// Drop every repeat of a class, keeping its first occurrence
    pub remove_duplicates: bool,
    /// Place classes missing from the sort order before the sorted block
    /// instead of after it
    pub prepend_custom_classes: bool,
    /// Prefix prepended to every sort-order entry before lookup, for
    /// configurations using a custom Tailwind prefix
    pub custom_prefix: String,
    /// Splitter overriding the default whitespace run
    pub separator: Option<Regex>,
    /// Joiner overriding the default single space
    pub replacement: Option<String>,
}

/// Sorts a string of CSS classes according to a predefined order.
///
/// The string is split on `options.separator` (default: whitespace runs),
/// optionally deduplicated, reordered so that classes present in
/// `sort_order` appear in the order the table lists them, rejoined with
/// `options.replacement` (default: a single space), and trimmed. Classes
/// absent from the sort order keep their relative input order and are
/// placed as one block before or after the sorted classes, per
/// `options.prepend_custom_classes`.
///
/// # Arguments
/// * `class_string` - The string to sort
/// * `sort_order` - The canonical order to sort known classes by
/// * `options` - Dedup/placement/prefix/separator policy
///
/// # Returns
/// The sorted string. Any input, including empty, produces a deterministic
/// result; this function does not fail.
pub fn sort_class_string(class_string: &str, sort_order: &[String], options: &SortOptions) -> String {
    let separator = options.separator.as_ref().unwrap_or(&*WHITESPACE_RUN);
    let mut classes: Vec<&str> = separator.split(class_string).collect();

    if options.remove_duplicates {
        classes = remove_duplicates(classes);
    }

    // prepend the custom prefix to all sort-order classes
    let mut sort_order = sort_order.to_vec();
    if !options.custom_prefix.is_empty() {
        for class in &mut sort_order {
            *class = format!("{}{}", options.custom_prefix, class);
        }
    }

    let classes = sort_class_list(classes, &sort_order, options.prepend_custom_classes);

    classes
        .join(options.replacement.as_deref().unwrap_or(" "))
        .trim()
        .to_string()
}

/// Reorders a class list so that classes found in `sort_order` come out in
/// table order, with the rest kept in input order and placed before the
/// sorted block (`prepend_custom_classes` true) or after it (false).
fn sort_class_list<'a>(
    classes: Vec<&'a str>,
    sort_order: &[String],
    prepend_custom_classes: bool,
) -> Vec<&'a str> {
    let rank = |class: &str| sort_order.iter().position(|entry| entry.as_str() == class);

    let custom: Vec<&str> = classes
        .iter()
        .copied()
        .filter(|&class| rank(class).is_none())
        .collect();

    let mut sorted: Vec<&str> = classes
        .iter()
        .copied()
        .filter(|&class| rank(class).is_some())
        .collect();
    // stable, so duplicate entries in the table keep their first index
    sorted.sort_by_key(|&class| rank(class));

    let mut result = Vec::with_capacity(classes.len());
    if prepend_custom_classes {
        result.extend(custom);
        result.extend(sorted);
    } else {
        result.extend(sorted);
        result.extend(custom);
    }
    result
}

/// Removes repeated classes, keeping the first occurrence of each and the
/// relative order of the survivors.
fn remove_duplicates<'a>(classes: Vec<&'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    classes
        .into_iter()
        .filter(|class| seen.insert(*class))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn test_sorts_known_classes_into_table_order() {
        let options = SortOptions {
            remove_duplicates: true,
            ..Default::default()
        };
        let sorted = sort_class_string(
            "p-2 flex m-4 custom-class",
            &order(&["flex", "p-2", "m-4"]),
            &options,
        );
        assert_eq!(sorted, "flex p-2 m-4 custom-class");
    }

    #[test]
    fn test_table_order_wins_over_input_order() {
        let table = order(&["block", "flex", "p-2"]);
        let options = SortOptions::default();
        assert_eq!(
            sort_class_string("p-2 flex block", &table, &options),
            "block flex p-2"
        );
        assert_eq!(
            sort_class_string("block p-2 flex", &table, &options),
            "block flex p-2"
        );
    }

    #[test]
    fn test_removes_duplicates_keeping_first() {
        let options = SortOptions {
            remove_duplicates: true,
            ..Default::default()
        };
        let sorted = sort_class_string("flex flex p-2", &order(&["flex", "p-2", "m-4"]), &options);
        assert_eq!(sorted, "flex p-2");
    }

    #[test]
    fn test_keeps_duplicates_when_not_deduplicating() {
        let options = SortOptions::default();
        let sorted = sort_class_string("custom custom flex", &order(&["flex"]), &options);
        assert_eq!(sorted, "flex custom custom");
    }

    #[test]
    fn test_prepends_custom_classes() {
        let options = SortOptions {
            prepend_custom_classes: true,
            ..Default::default()
        };
        let sorted = sort_class_string("custom-a flex custom-b", &order(&["flex"]), &options);
        assert_eq!(sorted, "custom-a custom-b flex");
    }

    #[test]
    fn test_appends_custom_classes_by_default() {
        let options = SortOptions::default();
        let sorted = sort_class_string("custom-a flex custom-b", &order(&["flex"]), &options);
        assert_eq!(sorted, "flex custom-a custom-b");
    }

    #[test]
    fn test_custom_prefix_applies_to_table_only() {
        let options = SortOptions {
            custom_prefix: "tw-".to_string(),
            ..Default::default()
        };
        // Prefixed classes rank; the bare "flex" is custom now.
        let sorted = sort_class_string(
            "flex tw-block tw-flex",
            &order(&["flex", "block"]),
            &options,
        );
        assert_eq!(sorted, "tw-flex tw-block flex");
    }

    #[test]
    fn test_separator_and_replacement_override() {
        let options = SortOptions {
            separator: Some(Regex::new(r",\s*").unwrap()),
            replacement: Some(", ".to_string()),
            ..Default::default()
        };
        let sorted = sort_class_string("p-2, flex", &order(&["flex", "p-2"]), &options);
        assert_eq!(sorted, "flex, p-2");
    }

    #[test]
    fn test_separator_matching_nothing_keeps_whole_input() {
        let options = SortOptions {
            separator: Some(Regex::new(r",").unwrap()),
            ..Default::default()
        };
        let sorted = sort_class_string("flex p-2", &order(&["p-2"]), &options);
        assert_eq!(sorted, "flex p-2");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let options = SortOptions::default();
        assert_eq!(sort_class_string("", &order(&["flex"]), &options), "");
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let options = SortOptions::default();
        let sorted = sort_class_string("  flex  p-2  ", &order(&["p-2", "flex"]), &options);
        assert_eq!(sorted, "p-2 flex");
    }

    #[test]
    fn test_idempotent_with_deduplication() {
        let table = order(&["flex", "p-2", "m-4"]);
        let options = SortOptions {
            remove_duplicates: true,
            ..Default::default()
        };
        let once = sort_class_string("m-4 custom p-2 flex p-2", &table, &options);
        let twice = sort_class_string(&once, &table, &options);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unranked_block_is_contiguous() {
        let table = order(&["a", "b"]);
        let options = SortOptions::default();
        let sorted = sort_class_string("x b y a z", &table, &options);
        assert_eq!(sorted, "a b x y z");
    }
}
