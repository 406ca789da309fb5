/// Split a generated answer into candidate titles.
///
/// The answer is free text: split on `,`, trim, drop empty segments. No
/// de-duplication, and prose without commas stays a single candidate.
pub fn parse_candidate_titles(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}
