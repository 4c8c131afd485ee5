//! Config schema and deserialization

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::analyzer::Thresholds;
use crate::lexicon::Language;
use crate::CriterionId;

/// Per-criterion switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleToggle {
    On,
    /// Drop the criterion from the report and its summary
    Off,
}

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional threshold override for matched files
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Site domain for matched files (e.g. a docs subdomain)
    #[serde(default)]
    pub site_domain: Option<String>,

    /// Optional rule toggles for matched files
    #[serde(default)]
    pub rules: HashMap<String, RuleToggle>,
}

/// Root config structure for .seoscoperc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum keyphrase-section percentage (exit 1 if below). Default: 0
    #[serde(default)]
    pub threshold: Option<u8>,

    /// The site's own domain, used to tell internal from outbound links
    #[serde(default)]
    pub site_domain: Option<String>,

    /// Built-in word lists to use (default: en)
    #[serde(default)]
    pub language: Option<Language>,

    /// Custom word-list JSON file; takes precedence over `language`.
    /// Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,

    /// Partial override of the rule threshold table, camelCase keys
    #[serde(default)]
    pub thresholds: Map<String, Value>,

    /// Per-criterion toggles. Key is the criterion name in kebab-case.
    #[serde(default)]
    pub rules: HashMap<String, RuleToggle>,

    /// Glob patterns for documents to exclude from analysis
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Include per-section summaries in reports (default: true)
    #[serde(default)]
    pub summaries: Option<bool>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_threshold: Option<u8>,
        cli_site_domain: Option<&str>,
        no_summary: bool,
    ) -> Self {
        if cli_threshold.is_some() {
            self.threshold = cli_threshold;
        }
        if let Some(domain) = cli_site_domain {
            self.site_domain = Some(domain.to_string());
        }
        if no_summary {
            self.summaries = Some(false);
        }
        self
    }

    /// Build the threshold table: defaults with this config's entries applied
    pub fn thresholds(&self) -> anyhow::Result<Thresholds> {
        serde_json::from_value(Value::Object(self.thresholds.clone()))
            .map_err(|e| anyhow::anyhow!("Invalid thresholds in config: {}", e))
    }

    /// Get effective config for a specific file path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = EffectiveConfig {
            threshold: self.threshold,
            site_domain: self.site_domain.clone(),
            rules: self.rules.clone(),
        };

        // Apply matching overrides in order
        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(threshold) = override_cfg.threshold {
                    effective.threshold = Some(threshold);
                }
                if let Some(domain) = &override_cfg.site_domain {
                    effective.site_domain = Some(domain.clone());
                }
                for (rule, toggle) in &override_cfg.rules {
                    effective.rules.insert(rule.clone(), *toggle);
                }
            }
        }

        effective
    }

    /// Check if a file path matches any of the override patterns
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        let path_str = file_path.to_string_lossy();
        for pattern in patterns {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(file_path)
                    || path_str.contains(pattern.trim_start_matches("**/"))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.site_domain.is_none() {
            self.site_domain = base.site_domain;
        }
        if self.language.is_none() {
            self.language = base.language;
        }
        if self.lexicon.is_none() {
            self.lexicon = base.lexicon;
        }
        if self.summaries.is_none() {
            self.summaries = base.summaries;
        }

        for (key, value) in base.thresholds {
            self.thresholds.entry(key).or_insert(value);
        }

        // Merge rules (this config takes precedence)
        for (rule, toggle) in base.rules {
            self.rules.entry(rule).or_insert(toggle);
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }
}

/// Effective configuration for a specific file (after applying overrides)
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub threshold: Option<u8>,
    pub site_domain: Option<String>,
    pub rules: HashMap<String, RuleToggle>,
}

impl EffectiveConfig {
    pub fn apply_toggles(&self, disabled: &mut HashSet<CriterionId>) {
        apply_rule_toggles(&self.rules, disabled);
    }
}

/// Apply rule toggles to a set of disabled criteria. Unknown names are
/// reported and skipped.
pub fn apply_rule_toggles(rules: &HashMap<String, RuleToggle>, disabled: &mut HashSet<CriterionId>) {
    for (name, toggle) in rules {
        match name.parse::<CriterionId>() {
            Ok(id) if *toggle == RuleToggle::Off => {
                disabled.insert(id);
            }
            Ok(id) => {
                disabled.remove(&id);
            }
            Err(e) => tracing::warn!("{} (ignored in config rules)", e),
        }
    }
}
