// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Returns the `options` whose lower case form starts with the lower case `query`,
/// sorted in ascending order of their lower case form. Options that only differ by case
/// are ordered by their original text, so the result never depends on the input order.
///
/// An empty `query` matches everything. Duplicates are kept.
///
/// ```
/// use r3bl_inquirer::filter_options;
///
/// let options = ["Alpha", "beta", "Banana"].map(String::from);
/// assert_eq!(filter_options(&options, "b"), vec!["Banana", "beta"]);
/// assert_eq!(filter_options(&options, ""), vec!["Alpha", "Banana", "beta"]);
/// ```
#[must_use]
pub fn filter_options(options: &[String], query: &str) -> Vec<String> {
    let query = query.to_lowercase();

    let mut matches: Vec<(String, &String)> = options
        .iter()
        .map(|option| (option.to_lowercase(), option))
        .filter(|(lower_case_option, _)| lower_case_option.starts_with(&query))
        .collect();

    matches.sort();

    matches.into_iter().map(|(_, option)| option.clone()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test_case(&["Alpha", "beta", "Banana"], "b", &["Banana", "beta"]; "lower case query")]
    #[test_case(&["Alpha", "beta", "Banana"], "B", &["Banana", "beta"]; "upper case query")]
    #[test_case(&["Alpha", "beta", "Banana"], "", &["Alpha", "Banana", "beta"]; "empty query")]
    #[test_case(&["Alpha", "beta", "Banana"], "ban", &["Banana"]; "longer prefix")]
    #[test_case(&["Alpha", "beta", "Banana"], "z", &[]; "no match")]
    #[test_case(&["Alpha", "beta", "Banana"], "lpha", &[]; "substring is not a prefix")]
    #[test_case(&["b", "a", "b"], "", &["a", "b", "b"]; "duplicates are kept")]
    #[test_case(&["main", "Main", "MAIN"], "m", &["MAIN", "Main", "main"]; "case only differences")]
    #[test_case(&["fix 1", "fix2", "fixed"], "fix ", &["fix 1"]; "space in query")]
    #[test_case(&[], "a", &[]; "no options")]
    fn test_filter_options(input: &[&str], query: &str, expected: &[&str]) {
        assert_eq!(filter_options(&options(input), query), options(expected));
    }

    #[test]
    fn test_result_does_not_depend_on_input_order() {
        let forward = options(&["Main", "main", "maintain"]);
        let backward = options(&["maintain", "main", "Main"]);
        assert_eq!(filter_options(&forward, "ma"), filter_options(&backward, "ma"));
    }

    #[test]
    fn test_every_match_has_the_prefix() {
        let input = options(&["Cargo", "cat", "CARGO.toml", "dog", "c"]);
        let result = filter_options(&input, "ca");
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|it| it.to_lowercase().starts_with("ca")));
        assert!(result.windows(2).all(|w| w[0].to_lowercase() <= w[1].to_lowercase()));
    }
}
