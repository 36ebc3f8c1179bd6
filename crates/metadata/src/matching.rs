use gamedex_core::MetadataCandidate;

/// Picks the candidate that best matches `title`.
///
/// Priority: case-insensitive exact name, then a case-insensitive substring
/// match in either direction, then the first candidate (the lookup returns
/// results in relevance order). `None` only for an empty slice.
#[must_use]
pub fn select_best_match<'a>(
    title: &str,
    candidates: &'a [MetadataCandidate],
) -> Option<&'a MetadataCandidate> {
    let query = title.trim().to_lowercase();

    candidates
        .iter()
        .find(|c| c.name.trim().to_lowercase() == query)
        .or_else(|| {
            candidates.iter().find(|c| {
                let name = c.name.trim().to_lowercase();
                !name.is_empty()
                    && !query.is_empty()
                    && (name.contains(&query) || query.contains(&name))
            })
        })
        .or_else(|| candidates.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<MetadataCandidate> {
        names
            .iter()
            .map(|n| MetadataCandidate { name: (*n).to_owned(), ..MetadataCandidate::default() })
            .collect()
    }

    #[test]
    fn test_empty_candidates() {
        assert!(select_best_match("Halo", &[]).is_none());
    }

    #[test]
    fn test_exact_match_wins_over_order() {
        let candidates = named(&["Halo 2", "Halo: Reach", "HALO"]);
        assert_eq!(select_best_match("halo", &candidates).unwrap().name, "HALO");
    }

    #[test]
    fn test_substring_match_either_direction() {
        let candidates = named(&["Portal", "Catan: Seafarers"]);
        assert_eq!(select_best_match("catan", &candidates).unwrap().name, "Catan: Seafarers");

        let candidates = named(&["Tetris Effect", "Zelda"]);
        assert_eq!(
            select_best_match("The Legend of Zelda: Breath of the Wild", &candidates).unwrap().name,
            "Zelda"
        );
    }

    #[test]
    fn test_falls_back_to_first() {
        let candidates = named(&["Something", "Else"]);
        assert_eq!(select_best_match("Unrelated", &candidates).unwrap().name, "Something");
    }

    #[test]
    fn test_empty_name_is_not_a_substring_match() {
        let candidates = named(&["First", "", "Halo Wars"]);
        assert_eq!(select_best_match("Halo", &candidates).unwrap().name, "Halo Wars");
    }
}
