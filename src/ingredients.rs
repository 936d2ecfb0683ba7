/// Trim `line`, split it on every comma and trim each piece.
///
/// Empty pieces (for example between consecutive commas) are kept.
pub fn split_ingredients(line: &str) -> Vec<String> {
    line.trim()
        .split(',')
        .map(|ingredient| ingredient.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_trims_each_entry() {
        assert_eq!(
            split_ingredients(" apple , Garlic ,  "),
            vec!["apple", "Garlic", ""]
        );
    }

    #[test]
    fn test_consecutive_commas_keep_empty_entries() {
        assert_eq!(split_ingredients("rice,,beans\n"), vec!["rice", "", "beans"]);
    }

    #[test]
    fn test_single_entry_without_commas() {
        assert_eq!(split_ingredients("  tomato  "), vec!["tomato"]);
    }

    #[test]
    fn test_empty_line_yields_single_empty_entry() {
        assert_eq!(split_ingredients("\n"), vec![""]);
    }
}
