//! Seoscope: SEO and readability analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use seoscope::analyzer::{AnalysisEngine, ScoreCalculator};
use seoscope::config::{
    build_ignore_set, default_config_json, is_ignored, load_config, Config, CONFIG_FILENAME,
};
use seoscope::reporter::{ConsoleReporter, JsonReporter};
use seoscope::DocumentResult;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use walkdir::WalkDir;

/// Seoscope: SEO and readability analysis for authored content
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Document JSON file or directory of them (omit when using a subcommand)
    #[arg(required = true)]
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Minimum keyphrase-section percentage (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per document)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (criterion details, debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .seoscoperc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// The site's own domain, used to tell internal from outbound links
    #[arg(long, value_name = "DOMAIN")]
    site_domain: Option<String>,

    /// Leave section summaries out of reports
    #[arg(long)]
    no_summary: bool,

    /// Run analysis in parallel (default for directories with many documents)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .seoscoperc.json with sensible defaults
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// The site's own domain
        #[arg(long)]
        site_domain: Option<String>,

        /// Minimum keyphrase-section percentage (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("SEOSCOPE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init {
                dir,
                site_domain,
                threshold,
            } => {
                return run_init(dir.as_deref(), site_domain.as_deref(), threshold);
            }
        }
    }

    init_logging(args.verbose);

    let path = args
        .path
        .clone()
        .context("A document path is required when not using a subcommand")?;

    // Resolve work directory for config search
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        args.site_domain.as_deref(),
        args.no_summary,
    );

    // Build ignore set from config
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let documents = collect_documents(&path, ignore_set.as_ref())?;

    if documents.is_empty() {
        eprintln!("{}: No document files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    // Set up parallel processing
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let engine = AnalysisEngine::from_config(&config)?;
    tracing::debug!(documents = documents.len(), "analyzing");

    // Determine if we should use parallel analysis
    let use_parallel = args.parallel || args.jobs.is_some() || documents.len() > 10;

    let (results, had_errors) = if use_parallel {
        analyze_documents_parallel(&engine, &documents, &config, args.quiet)
    } else {
        analyze_documents_sequential(&engine, &documents, &config, args.quiet)
    };

    if results.is_empty() {
        eprintln!("{}: All documents failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = AnalysisEngine::aggregate_stats(&results);

    // Output results
    if args.json {
        let reporter = if args.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }

        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    // Check threshold per document (config overrides may change it)
    let failures = threshold_failures(&results, &config);
    if !failures.is_empty() {
        if !args.quiet && !args.json {
            for (path, percentage, threshold) in &failures {
                eprintln!(
                    "{}: {} keyphrase score {}% is below threshold {}%",
                    "Failed".red().bold(),
                    path.display(),
                    percentage,
                    threshold
                );
            }
        }
        return Ok(ExitCode::from(1));
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(
    dir: Option<&Path>,
    site_domain: Option<&str>,
    threshold: Option<u8>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(site_domain, threshold)?;
    std::fs::write(&config_path, format!("{}\n", json))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold.unwrap_or(70)
    );
    Ok(ExitCode::SUCCESS)
}

/// Collect document files: a single file, or every `.json` under a directory
fn collect_documents(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if entry.file_type().is_file() && is_document_file(file_path) {
            if let Some(set) = ignore_set {
                if is_ignored(file_path, set) {
                    continue;
                }
            }
            files.push(file_path.to_path_buf());
        }
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

/// A document is a visible `.json` file outside `node_modules`
fn is_document_file(path: &Path) -> bool {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let hidden = path
        .file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(true);
    let path_str = path.to_string_lossy();

    is_json && !hidden && !path_str.contains("node_modules")
}

/// Analyze documents one after another
fn analyze_documents_sequential(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<DocumentResult>, bool) {
    let mut results = Vec::new();
    let mut had_errors = false;

    for file in files {
        match engine.analyze_file(file, Some(config)) {
            Ok(result) => results.push(result),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!("{}: Failed to analyze {}: {}", "Error".red(), file.display(), e);
                }
            }
        }
    }

    (results, had_errors)
}

/// Analyze documents in parallel using rayon
fn analyze_documents_parallel(
    engine: &AnalysisEngine,
    files: &[PathBuf],
    config: &Config,
    quiet: bool,
) -> (Vec<DocumentResult>, bool) {
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    let had_errors = AtomicBool::new(false);

    let results: Vec<_> = files
        .par_iter()
        .filter_map(|file| match engine.analyze_file(file, Some(config)) {
            Ok(result) => Some(result),
            Err(e) => {
                had_errors.store(true, Ordering::Relaxed);
                if !quiet {
                    eprintln!("{}: Failed to analyze {}: {}", "Error".red(), file.display(), e);
                }
                None
            }
        })
        .collect();

    (results, had_errors.load(Ordering::Relaxed))
}

/// Keyphrase-section percentage of a report, whether or not summaries are on
fn keyphrase_percentage(result: &DocumentResult) -> u8 {
    let section = &result.report.keyphrase_analysis;
    match section.summary {
        Some(summary) => summary.percentage,
        None => {
            let success = section
                .criteria
                .values()
                .filter(|r| r.status.is_favorable())
                .count();
            ScoreCalculator::percentage(success, section.criteria.len())
        }
    }
}

/// Documents whose keyphrase percentage is below their effective threshold
fn threshold_failures<'a>(
    results: &'a [DocumentResult],
    config: &Config,
) -> Vec<(&'a Path, u8, u8)> {
    results
        .iter()
        .filter_map(|result| {
            let threshold = config.effective_for_file(&result.file_path).threshold?;
            let percentage = keyphrase_percentage(result);
            (percentage < threshold).then_some((result.file_path.as_path(), percentage, threshold))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoscope::{analyze_document, ContentDocument};

    fn result_for(path: &str, document: &ContentDocument) -> DocumentResult {
        DocumentResult {
            file_path: PathBuf::from(path),
            report: analyze_document(document, "example.com"),
        }
    }

    #[test]
    fn test_is_document_file() {
        assert!(is_document_file(Path::new("posts/coffee.json")));
        assert!(is_document_file(Path::new("posts/COFFEE.JSON")));
        assert!(!is_document_file(Path::new("posts/coffee.html")));
        assert!(!is_document_file(Path::new(".seoscoperc.json")));
        assert!(!is_document_file(Path::new("node_modules/pkg/package.json")));
    }

    #[test]
    fn test_keyphrase_percentage_without_summaries() {
        let document = ContentDocument {
            content: "<p>Short text.</p>".to_string(),
            ..ContentDocument::default()
        };
        let mut result = result_for("a.json", &document);
        let with_summary = keyphrase_percentage(&result);
        result.report.keyphrase_analysis.summary = None;
        assert_eq!(keyphrase_percentage(&result), with_summary);
    }

    #[test]
    fn test_threshold_failures_use_overrides() {
        let config: Config = serde_json::from_str(
            r#"{
                "threshold": 100,
                "overrides": [{ "files": ["**/legacy/**"], "threshold": 0 }]
            }"#,
        )
        .unwrap();
        let document = ContentDocument::default();
        let results = vec![
            result_for("posts/new.json", &document),
            result_for("posts/legacy/old.json", &document),
        ];

        let failures = threshold_failures(&results, &config);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, Path::new("posts/new.json"));
        assert_eq!(failures[0].2, 100);
    }

    #[test]
    fn test_no_threshold_never_fails() {
        let results = vec![result_for("a.json", &ContentDocument::default())];
        assert!(threshold_failures(&results, &Config::default()).is_empty());
    }
}
