/// Aggregation of cleaned names: dedup and last-name ordering.
use std::cmp::Ordering;
use std::collections::HashSet;

/// Remove exact duplicates, keeping the first occurrence of each name.
#[must_use]
pub fn dedup_names(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Sort key: everything after the last space, or `""` when there is none.
///
/// Suffixes such as "Jr." and multi-word surnames therefore sort by their
/// final token only.
#[must_use]
pub fn last_name(name: &str) -> &str {
    name.rfind(' ').map_or("", |idx| &name[idx + 1..])
}

/// Compare two names by last name using byte-wise ordering.
#[must_use]
pub fn cmp_last_name(a: &str, b: &str) -> Ordering {
    last_name(a).cmp(last_name(b))
}

/// Deduplicate, then stable-sort by last name.
#[must_use]
pub fn finalize(names: Vec<String>) -> Vec<String> {
    let mut unique = dedup_names(names);
    unique.sort_by(|a, b| cmp_last_name(a, b));
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|&n| n.to_owned()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let names = owned(&["Bob Smith", "Ann Lee", "Bob Smith", "Ann Lee", "Cy Young"]);
        assert_eq!(dedup_names(names), owned(&["Bob Smith", "Ann Lee", "Cy Young"]));
    }

    #[test]
    fn test_dedup_is_exact() {
        let names = owned(&["Ann Lee", "Ann LEE"]);
        assert_eq!(dedup_names(names).len(), 2);
    }

    #[test]
    fn test_last_name() {
        assert_eq!(last_name("Alice Van Der Berg"), "Berg");
        assert_eq!(last_name("Bob Smith"), "Smith");
        assert_eq!(last_name("Martin Luther King Jr."), "Jr.");
        assert_eq!(last_name("Cher"), "");
    }

    #[test]
    fn test_sort_by_final_token() {
        let sorted = finalize(owned(&["Bob Smith", "Alice Van Der Berg"]));
        assert_eq!(sorted, owned(&["Alice Van Der Berg", "Bob Smith"]));
    }

    #[test]
    fn test_sort_is_bytewise() {
        // Uppercase sorts before lowercase, and ASCII before accented letters.
        let sorted = finalize(owned(&["Ann élan", "Bo zed", "Cy Zed", "Di Apple"]));
        assert_eq!(sorted, owned(&["Di Apple", "Cy Zed", "Bo zed", "Ann élan"]));
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let sorted = finalize(owned(&["Zed Smith", "Amy Smith", "Bob Jones"]));
        assert_eq!(sorted, owned(&["Bob Jones", "Zed Smith", "Amy Smith"]));
    }

    #[test]
    fn test_finalize_dedups_before_sorting() {
        let sorted = finalize(owned(&["Bob Smith", "Ann Lee", "Bob Smith"]));
        assert_eq!(sorted, owned(&["Ann Lee", "Bob Smith"]));
    }
}
