//! Analysis engine - runs every criterion and compiles the report

use crate::config::{apply_rule_toggles, Config};
use crate::input::load_document;
use crate::lexicon::{Lexicon, WordLists};
use crate::parser::NormalizedView;
use crate::{ContentDocument, CriterionId, DocumentResult, Report, Section, SectionKind, Status};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::insights;
use super::rules::{all_rules, AnalysisContext, AnalysisRule};
use super::{ScoreCalculator, Thresholds};

/// Main analysis engine that orchestrates all rules
pub struct AnalysisEngine {
    rules: Vec<Box<dyn AnalysisRule>>,
    thresholds: Thresholds,
    lexicon: Arc<dyn Lexicon>,
    /// Site domain used to classify links; empty when unknown
    site_domain: String,
    /// Whether sections carry a summary
    summaries: bool,
    /// Criteria left out of every report
    disabled: HashSet<CriterionId>,
}

impl AnalysisEngine {
    /// Create an engine with default thresholds and English word lists
    pub fn new() -> Self {
        Self {
            rules: all_rules(),
            thresholds: Thresholds::default(),
            lexicon: Arc::new(WordLists::english()),
            site_domain: String::new(),
            summaries: true,
            disabled: HashSet::new(),
        }
    }

    /// Build an engine from a loaded config file
    pub fn from_config(config: &Config) -> Result<Self> {
        let lexicon = match &config.lexicon {
            Some(path) => WordLists::from_file(path)?,
            None => WordLists::for_language(config.language.unwrap_or_default()),
        };

        let mut disabled = HashSet::new();
        apply_rule_toggles(&config.rules, &mut disabled);

        Ok(Self::new()
            .with_thresholds(config.thresholds()?)
            .with_lexicon(Arc::new(lexicon))
            .with_site_domain(config.site_domain.as_deref().unwrap_or(""))
            .with_summaries(config.summaries.unwrap_or(true))
            .with_disabled_rules(disabled))
    }

    pub fn with_site_domain(mut self, site_domain: &str) -> Self {
        self.site_domain = site_domain.trim().to_string();
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Swap the word lists used by the readability criteria
    pub fn with_lexicon(mut self, lexicon: Arc<dyn Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_summaries(mut self, summaries: bool) -> Self {
        self.summaries = summaries;
        self
    }

    /// Leave section summaries out of reports
    pub fn without_summaries(self) -> Self {
        self.with_summaries(false)
    }

    pub fn with_disabled_rules(mut self, disabled: HashSet<CriterionId>) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Analyze one document. Never fails: missing fields degrade to the
    /// unfavorable branch of the affected criteria.
    pub fn analyze(&self, document: &ContentDocument) -> Report {
        self.analyze_with(document, &self.site_domain, &self.disabled)
    }

    fn analyze_with(
        &self,
        document: &ContentDocument,
        site_domain: &str,
        disabled: &HashSet<CriterionId>,
    ) -> Report {
        let view = NormalizedView::from_html(&document.content);
        let ctx = AnalysisContext::new(
            document,
            &view,
            &self.thresholds,
            self.lexicon.as_ref(),
            site_domain,
        );

        let mut keyphrase_analysis = Section::default();
        let mut readability = Section::default();

        for rule in self.rules.iter().filter(|r| !disabled.contains(&r.id())) {
            let id = rule.id();
            let result = rule.evaluate(&ctx);
            tracing::trace!(criterion = %id, status = %result.status, "evaluated");
            let section = match id.section() {
                SectionKind::KeyphraseAnalysis => &mut keyphrase_analysis,
                SectionKind::Readability => &mut readability,
            };
            section.criteria.insert(id, result);
        }

        if self.summaries {
            for section in [&mut keyphrase_analysis, &mut readability] {
                section.summary = Some(ScoreCalculator::summarize(
                    &section.criteria,
                    &self.thresholds,
                ));
            }
        }

        let insights = insights::compile(document, &view, &self.thresholds);

        tracing::debug!(
            keyphrase_criteria = keyphrase_analysis.criteria.len(),
            readability_criteria = readability.criteria.len(),
            score = insights.score,
            "analysis complete"
        );

        Report {
            insights,
            keyphrase_analysis,
            readability,
        }
    }

    /// Load and analyze a document file, applying per-file config overrides
    pub fn analyze_file(&self, path: &Path, config: Option<&Config>) -> Result<DocumentResult> {
        let document = load_document(path)?;

        let report = match config {
            Some(config) => {
                let effective = config.effective_for_file(path);
                let mut disabled = self.disabled.clone();
                effective.apply_toggles(&mut disabled);
                let site_domain = effective
                    .site_domain
                    .as_deref()
                    .unwrap_or(&self.site_domain);
                self.analyze_with(&document, site_domain, &disabled)
            }
            None => self.analyze(&document),
        };

        Ok(DocumentResult {
            file_path: path.to_path_buf(),
            report,
        })
    }

    /// Analyze multiple document files sequentially
    pub fn analyze_many(
        &self,
        paths: &[&Path],
        config: Option<&Config>,
    ) -> Vec<Result<DocumentResult>> {
        paths.iter().map(|p| self.analyze_file(p, config)).collect()
    }

    /// Analyze multiple document files in parallel using rayon
    pub fn analyze_parallel(
        &self,
        paths: &[PathBuf],
        config: Option<&Config>,
    ) -> Vec<Result<DocumentResult>> {
        use rayon::prelude::*;

        paths.par_iter().map(|p| self.analyze_file(p, config)).collect()
    }

    /// Get aggregate stats from multiple results
    pub fn aggregate_stats(results: &[DocumentResult]) -> AggregateStats {
        if results.is_empty() {
            return AggregateStats::default();
        }

        let section_pct = |section: &Section| {
            let success = section
                .criteria
                .values()
                .filter(|r| r.status.is_favorable())
                .count();
            ScoreCalculator::percentage(success, section.criteria.len()) as u32
        };
        let average = |total: u32| (total / results.len() as u32) as u8;

        let mut stats = AggregateStats {
            documents_analyzed: results.len(),
            average_keyphrase_percentage: average(
                results
                    .iter()
                    .map(|r| section_pct(&r.report.keyphrase_analysis))
                    .sum(),
            ),
            average_readability_percentage: average(
                results.iter().map(|r| section_pct(&r.report.readability)).sum(),
            ),
            total_words: results.iter().map(|r| r.report.insights.word_count).sum(),
            ..AggregateStats::default()
        };

        for (_, verdict) in results.iter().flat_map(|r| r.report.verdicts()) {
            match verdict.status {
                Status::Favorable => stats.favorable += 1,
                Status::Cautionary => stats.cautionary += 1,
                Status::Unfavorable => stats.unfavorable += 1,
            }
        }

        stats
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics from multiple document analyses
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    /// Number of documents analyzed
    pub documents_analyzed: usize,
    /// Mean keyphrase-section percentage
    pub average_keyphrase_percentage: u8,
    /// Mean readability-section percentage
    pub average_readability_percentage: u8,
    pub total_words: usize,
    pub favorable: usize,
    pub cautionary: usize,
    pub unfavorable: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn make_document_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample() -> ContentDocument {
        ContentDocument {
            content: "<p>Best coffee starts with fresh beans. Grind them just before brewing.</p>\
                      <h2>Best coffee gear</h2><p>Read <a href=\"https://other.org\">this guide</a>.</p>"
                .to_string(),
            title: "Best Coffee at Home".to_string(),
            keyphrase: "best coffee".to_string(),
            slug: "best-coffee-at-home".to_string(),
            meta_description: "How to brew the best coffee at home.".to_string(),
            ..ContentDocument::default()
        }
    }

    #[test]
    fn test_report_has_every_criterion() {
        let report = AnalysisEngine::new().analyze(&sample());
        assert_eq!(report.keyphrase_analysis.criteria.len(), 17);
        assert_eq!(report.readability.criteria.len(), 8);
        assert!(report.keyphrase_analysis.summary.is_some());
        assert!(report.readability.summary.is_some());
    }

    #[test]
    fn test_criteria_land_in_their_section() {
        let report = AnalysisEngine::new().analyze(&sample());
        for id in report.keyphrase_analysis.criteria.keys() {
            assert_eq!(id.section(), SectionKind::KeyphraseAnalysis);
        }
        for id in report.readability.criteria.keys() {
            assert_eq!(id.section(), SectionKind::Readability);
        }
    }

    #[test]
    fn test_disabled_rules_are_absent() {
        let engine = AnalysisEngine::new()
            .with_disabled_rules(HashSet::from([CriterionId::TitleWidth, CriterionId::PassiveVoice]));
        let report = engine.analyze(&sample());
        assert!(report.keyphrase_analysis.get(CriterionId::TitleWidth).is_none());
        assert!(report.readability.get(CriterionId::PassiveVoice).is_none());
        assert_eq!(report.readability.summary.map(|s| s.total), Some(7));
    }

    #[test]
    fn test_without_summaries() {
        let report = AnalysisEngine::new().without_summaries().analyze(&sample());
        assert!(report.keyphrase_analysis.summary.is_none());
        assert!(report.readability.summary.is_none());
    }

    #[test]
    fn test_site_domain_changes_link_classification() {
        let document = ContentDocument {
            content: r#"<p><a href="https://shop.test/beans">beans</a></p>"#.to_string(),
            ..ContentDocument::default()
        };
        let unknown = AnalysisEngine::new().analyze(&document);
        assert_eq!(
            unknown.keyphrase_analysis.get(CriterionId::InternalLinks).map(|r| r.status),
            Some(Status::Unfavorable)
        );
        let own = AnalysisEngine::new().with_site_domain("shop.test").analyze(&document);
        assert_eq!(
            own.keyphrase_analysis.get(CriterionId::InternalLinks).map(|r| r.status),
            Some(Status::Favorable)
        );
    }

    #[test]
    fn test_swapped_lexicon() {
        let lexicon = WordLists {
            transitions: vec!["coffee".to_string()],
            ..WordLists::default()
        };
        let report = AnalysisEngine::new()
            .with_lexicon(Arc::new(lexicon))
            .analyze(&sample());
        let transitions = report.readability.get(CriterionId::TransitionWords).unwrap();
        assert_eq!(transitions.status, Status::Favorable);
    }

    #[test]
    fn test_analyze_file_applies_overrides() {
        let file = make_document_file(r#"{ "content": "<p>Hi there.</p>", "title": "Hi" }"#);
        let config: Config = serde_json::from_str(
            r#"{ "overrides": [ { "files": ["**/*.json"], "rules": { "title-width": "off" } } ] }"#,
        )
        .unwrap();
        let engine = AnalysisEngine::new();

        let result = engine.analyze_file(file.path(), Some(&config)).unwrap();
        assert_eq!(result.file_path, file.path());
        assert!(result.report.keyphrase_analysis.get(CriterionId::TitleWidth).is_none());

        let result = engine.analyze_file(file.path(), None).unwrap();
        assert!(result.report.keyphrase_analysis.get(CriterionId::TitleWidth).is_some());
    }

    #[test]
    fn test_analyze_file_missing() {
        let engine = AnalysisEngine::new();
        let err = engine
            .analyze_file(Path::new("/nonexistent/doc.json"), None)
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read document"));
    }

    #[test]
    fn test_analyze_many() {
        let file1 = make_document_file(r#"{ "content": "<p>One.</p>" }"#);
        let file2 = make_document_file(r#"{ "content": "<p>Two words.</p>" }"#);

        let engine = AnalysisEngine::new();
        let paths: Vec<&Path> = vec![file1.path(), file2.path()];
        let results = engine.analyze_many(&paths, None);

        assert_eq!(results.len(), 2, "analyze_many should return two results");
        let r0 = results[0].as_ref().unwrap();
        let r1 = results[1].as_ref().unwrap();
        assert_eq!(r0.report.insights.word_count, 1);
        assert_eq!(r1.report.insights.word_count, 2);
    }

    #[test]
    fn test_analyze_parallel_matches_sequential() {
        let file1 = make_document_file(r#"{ "content": "<p>One.</p>", "keyphrase": "one" }"#);
        let file2 = make_document_file("not json");

        let engine = AnalysisEngine::new();
        let paths: Vec<PathBuf> = vec![file1.path().to_path_buf(), file2.path().to_path_buf()];
        let results = engine.analyze_parallel(&paths, None);

        assert_eq!(results.len(), 2);
        assert!(results[1].is_err(), "invalid JSON should fail");
        let sequential = engine.analyze_file(file1.path(), None).unwrap();
        assert_eq!(results[0].as_ref().unwrap(), &sequential);
    }

    #[test]
    fn test_aggregate_stats_empty() {
        let stats = AnalysisEngine::aggregate_stats(&[]);
        assert_eq!(stats, AggregateStats::default());
    }

    #[test]
    fn test_aggregate_stats_multiple() {
        let engine = AnalysisEngine::new();
        let results: Vec<DocumentResult> = [sample(), ContentDocument::default()]
            .iter()
            .enumerate()
            .map(|(i, doc)| DocumentResult {
                file_path: PathBuf::from(format!("doc{}.json", i)),
                report: engine.analyze(doc),
            })
            .collect();

        let stats = AnalysisEngine::aggregate_stats(&results);
        assert_eq!(stats.documents_analyzed, 2);
        assert_eq!(stats.favorable + stats.cautionary + stats.unfavorable, 50);
        assert_eq!(stats.total_words, results[0].report.insights.word_count);

        let expected: u32 = results
            .iter()
            .map(|r| r.report.keyphrase_analysis.summary.unwrap().percentage as u32)
            .sum();
        assert_eq!(stats.average_keyphrase_percentage, (expected / 2) as u8);
    }

    #[test]
    fn test_from_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "siteDomain": "example.com",
                "language": "id",
                "summaries": false,
                "thresholds": { "wordsPerMinute": 100 },
                "rules": { "slug": "off" }
            }"#,
        )
        .unwrap();
        let engine = AnalysisEngine::from_config(&config).unwrap();
        assert_eq!(engine.thresholds().words_per_minute, 100);

        let report = engine.analyze(&sample());
        assert!(report.keyphrase_analysis.get(CriterionId::Slug).is_none());
        assert!(report.keyphrase_analysis.summary.is_none());
    }

    #[test]
    fn test_from_config_missing_lexicon_file() {
        let config: Config =
            serde_json::from_str(r#"{ "lexicon": "/nonexistent/words.json" }"#).unwrap();
        assert!(AnalysisEngine::from_config(&config).is_err());
    }

    #[test]
    fn test_default_engine() {
        let engine = AnalysisEngine::default();
        assert_eq!(engine.thresholds(), &Thresholds::default());
    }
}
