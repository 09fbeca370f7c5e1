use std::collections::HashSet;
use tracing::{debug, warn};
use crate::domain::models::{Article, CsvTable};

/// Keeps the first article for each distinct trimmed title, in input order.
///
/// Titles compare case-sensitively after trimming. Articles whose title is
/// missing, blank or not a string are skipped with a warning.
pub fn dedupe_articles(articles: Vec<Article>) -> Vec<Article> {
    let total = articles.len();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(total);

    for article in articles {
        let title = article
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim()
            .to_string();

        if title.is_empty() {
            warn!("Skipping article without title: {}", serde_json::Value::Object(article));
            continue;
        }

        if seen_titles.insert(title) {
            unique.push(article);
        }
    }

    debug!("Article dedup kept {} of {}", unique.len(), total);
    unique
}

/// Collapses exact duplicate rows, keeping the first occurrence of each in
/// input order. Rows are compared as whole value tuples; the header is
/// left untouched.
pub fn dedupe_rows(table: CsvTable) -> CsvTable {
    let CsvTable { headers, rows } = table;
    let total = rows.len();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for row in rows {
        if !seen.contains(&row) {
            seen.insert(row.clone());
            unique.push(row);
        }
    }

    debug!("Row dedup kept {} of {}", unique.len(), total);
    CsvTable { headers, rows: unique }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(value: serde_json::Value) -> Article {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a["title"].as_str().unwrap()).collect()
    }

    #[test]
    fn keeps_first_occurrence_of_each_title_in_order() {
        let input = vec![
            article(json!({"title": "B", "n": 1})),
            article(json!({"title": "A", "n": 2})),
            article(json!({"title": "B", "n": 3})),
            article(json!({"title": "C", "n": 4})),
            article(json!({"title": "A", "n": 5})),
        ];

        let out = dedupe_articles(input);

        assert_eq!(titles(&out), vec!["B", "A", "C"]);
        assert_eq!(out[0]["n"], json!(1));
        assert_eq!(out[1]["n"], json!(2));
    }

    #[test]
    fn titles_are_trimmed_but_case_sensitive() {
        let input = vec![
            article(json!({"title": "Breaking"})),
            article(json!({"title": "  Breaking  "})),
            article(json!({"title": "breaking"})),
        ];

        let out = dedupe_articles(input);

        assert_eq!(out.len(), 2);
        assert_eq!(titles(&out), vec!["Breaking", "breaking"]);
    }

    #[test]
    fn skips_articles_without_usable_title() {
        let input = vec![
            article(json!({"description": "no title"})),
            article(json!({"title": "   "})),
            article(json!({"title": null})),
            article(json!({"title": 42})),
            article(json!({"title": "Kept"})),
        ];

        let out = dedupe_articles(input);

        assert_eq!(titles(&out), vec!["Kept"]);
    }

    #[test]
    fn empty_and_all_duplicate_inputs() {
        assert!(dedupe_articles(Vec::new()).is_empty());

        let same = (0..4).map(|i| article(json!({"title": "Same", "i": i}))).collect();
        let out = dedupe_articles(same);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["i"], json!(0));
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn removes_only_exact_duplicate_rows() {
        let table = CsvTable {
            headers: row(&["id", "name"]),
            rows: vec![
                row(&["1", "alice"]),
                row(&["2", "bob"]),
                row(&["1", "alice"]),
                row(&["1", "bob"]),
                row(&["1", "Alice"]),
                row(&["2", "bob"]),
            ],
        };

        let out = dedupe_rows(table);

        assert_eq!(out.headers, row(&["id", "name"]));
        assert_eq!(
            out.rows,
            vec![row(&["1", "alice"]), row(&["2", "bob"]), row(&["1", "bob"]), row(&["1", "Alice"])]
        );
    }

    #[test]
    fn textual_forms_of_the_same_number_stay_distinct() {
        let table = CsvTable {
            headers: row(&["amount"]),
            rows: vec![row(&["1"]), row(&["1.0"]), row(&["1"])],
        };

        let out = dedupe_rows(table);

        assert_eq!(out.rows, vec![row(&["1"]), row(&["1.0"])]);
    }
}
