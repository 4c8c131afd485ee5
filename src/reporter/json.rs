//! JSON reporter for machine-readable output

use crate::analyzer::engine::AggregateStats;
use crate::DocumentResult;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single document as JSON
    pub fn report(&self, result: &DocumentResult) -> String {
        self.render(result, "{}")
    }

    /// Report multiple documents as a JSON array
    pub fn report_many(&self, results: &[DocumentResult]) -> String {
        self.render(results, "[]")
    }

    /// Report multiple documents with an aggregate summary
    pub fn report_with_summary(&self, results: &[DocumentResult], stats: &AggregateStats) -> String {
        self.render(
            &JsonOutput {
                results,
                summary: stats,
            },
            "{}",
        )
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [DocumentResult],
    summary: &'a AggregateStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisEngine;
    use crate::ContentDocument;
    use std::path::PathBuf;

    fn make_result(path: &str) -> DocumentResult {
        let document = ContentDocument {
            content: "<p>Fresh coffee tastes better. Grind the beans at home.</p>".to_string(),
            title: "Fresh coffee at home".to_string(),
            keyphrase: "fresh coffee".to_string(),
            slug: "fresh-coffee".to_string(),
            ..ContentDocument::default()
        };
        DocumentResult {
            file_path: PathBuf::from(path),
            report: AnalysisEngine::new().analyze(&document),
        }
    }

    #[test]
    fn test_json_single_result_has_expected_keys() {
        let json = JsonReporter::new().report(&make_result("post.json"));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["filePath"], "post.json");
        assert!(parsed.get("insights").is_some());
        assert!(parsed.get("keyphraseAnalysis").is_some());
        assert!(parsed.get("readability").is_some());

        let slug = &parsed["keyphraseAnalysis"]["criteria"]["slug"];
        assert_eq!(slug["status"], "favorable");
        assert_eq!(slug["keyphraseInSlug"], true);
    }

    #[test]
    fn test_json_pretty_output() {
        let json = JsonReporter::new().pretty().report(&make_result("post.json"));
        assert!(json.contains('\n'), "pretty JSON should have newlines");
        assert!(json.contains("  "), "pretty JSON should have indentation");
    }

    #[test]
    fn test_json_report_many() {
        let json = JsonReporter::new().report_many(&[make_result("a.json"), make_result("b.json")]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["filePath"], "a.json");
        assert_eq!(arr[1]["filePath"], "b.json");
    }

    #[test]
    fn test_json_report_with_summary() {
        let results = vec![make_result("a.json"), make_result("b.json")];
        let stats = AnalysisEngine::aggregate_stats(&results);

        let json = JsonReporter::new().report_with_summary(&results, &stats);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
        let summary = &parsed["summary"];
        assert_eq!(summary["documentsAnalyzed"], 2);
        assert_eq!(summary["favorable"], stats.favorable);
        assert!(summary.get("averageKeyphrasePercentage").is_some());
    }

    #[test]
    fn test_json_report_many_empty() {
        let json = JsonReporter::new().report_many(&[]);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.as_array().unwrap().is_empty());
    }
}
