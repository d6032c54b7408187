//! String matching utilities.

/// Case-insensitive substring test.
///
/// `needle_lower` must already be lowercased; callers lowercase the query once
/// and match it against many candidates. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_folded() {
        assert!(contains_folded("Docker Swarm", "docker"));
        assert!(contains_folded("AWS", "aw"));
        assert!(contains_folded("anything", ""));
        assert!(!contains_folded("Grafana", "kibana"));
    }
}
