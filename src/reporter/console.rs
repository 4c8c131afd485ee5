//! Console reporter with colored output

use crate::analyzer::engine::AggregateStats;
use crate::{CriterionId, CriterionResult, DocumentResult, Insights, Section, Status};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single document
    pub fn report(&self, result: &DocumentResult) {
        self.print_header(result);
        self.print_insights(&result.report.insights);
        self.print_section("Keyphrase Analysis", &result.report.keyphrase_analysis);
        self.print_section("Readability", &result.report.readability);
        println!();
    }

    /// Report multiple documents with summary
    pub fn report_many(&self, results: &[DocumentResult], stats: &AggregateStats) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }

        self.print_summary(stats);
    }

    /// Report in quiet mode (one line per document)
    pub fn report_quiet(&self, result: &DocumentResult) {
        println!("{}", self.quiet_line(result));
    }

    fn quiet_line(&self, result: &DocumentResult) -> String {
        let section_field = |section: &Section| match section.summary {
            Some(summary) => format!(
                "{}% ({})",
                summary.percentage,
                self.colorize_status(summary.status)
            ),
            None => format!("{} criteria", section.criteria.len()),
        };
        format!(
            "{}: keyphrase {} | readability {}",
            result.file_path.display(),
            section_field(&result.report.keyphrase_analysis),
            section_field(&result.report.readability)
        )
    }

    fn print_header(&self, result: &DocumentResult) {
        println!();
        println!(
            "{}",
            format!("🔎 SEO Analysis: {}", result.file_path.display()).bold()
        );
        println!();
    }

    fn print_insights(&self, insights: &Insights) {
        println!("   {}", "Insights:".bold());
        println!(
            "   Grade level:   {} ({})",
            insights.score.to_string().bold(),
            insights.score_label
        );
        println!("   {}", insights.score_info.dimmed());
        println!("   Reading ease:  {}", insights.reading_ease);
        println!(
            "   Words:         {} (~{} min read)",
            insights.word_count, insights.reading_time
        );
        if !insights.keyword_list.is_empty() {
            let top: Vec<String> = insights
                .keyword_list
                .iter()
                .take(5)
                .map(|k| format!("{} ×{}", k.word, k.count))
                .collect();
            println!("   Top keywords:  {}", top.join(", ").dimmed());
        }
        println!();
    }

    fn print_section(&self, title: &str, section: &Section) {
        match section.summary {
            Some(summary) => println!(
                "   {} {} {}/{} favorable",
                format!("{}:", title).bold(),
                self.create_score_bar(summary.percentage),
                summary.success,
                summary.total
            ),
            None => println!("   {}", format!("{}:", title).bold()),
        }

        // Unfavorable first, then cautionary, then favorable
        let mut ordered: Vec<(&CriterionId, &CriterionResult)> = section.criteria.iter().collect();
        ordered.sort_by_key(|(id, r)| (status_rank(r.status), **id));

        for (id, result) in ordered {
            self.print_criterion(*id, result);
        }
        println!();
    }

    fn print_criterion(&self, id: CriterionId, result: &CriterionResult) {
        let icon = match result.status {
            Status::Favorable => "✓".green(),
            Status::Cautionary => "⚠".yellow(),
            Status::Unfavorable => "✗".red(),
        };

        println!(
            "   {} {} {}",
            icon,
            format!("[{}]", id).dimmed(),
            result.message
        );

        if self.verbose {
            if let Ok(details) = serde_json::to_string(&result.details) {
                println!("       {} {}", "↳".dimmed(), details.dimmed());
            }
        }
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Documents analyzed:    {}",
            stats.documents_analyzed.to_string().bold()
        );
        println!(
            "   Avg keyphrase score:   {}",
            self.create_score_bar(stats.average_keyphrase_percentage)
        );
        println!(
            "   Avg readability score: {}",
            self.create_score_bar(stats.average_readability_percentage)
        );
        println!("   Total words:           {}", stats.total_words);
        println!(
            "   Verdicts:              {} {} {}",
            format!("{} favorable", stats.favorable).green(),
            format!("{} cautionary", stats.cautionary).yellow(),
            format!("{} unfavorable", stats.unfavorable).red()
        );
        println!();
    }

    fn colorize_status(&self, status: Status) -> colored::ColoredString {
        let s = status.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match status {
            Status::Favorable => s.green(),
            Status::Cautionary => s.yellow(),
            Status::Unfavorable => s.red(),
        }
    }

    fn create_score_bar(&self, percentage: u8) -> String {
        let filled = (percentage.min(100) as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {:>3}%",
            "█".repeat(filled),
            "░".repeat(empty),
            percentage
        );

        if self.use_colors {
            if percentage > 70 {
                bar.green().to_string()
            } else if percentage > 30 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn status_rank(status: Status) -> u8 {
    match status {
        Status::Unfavorable => 0,
        Status::Cautionary => 1,
        Status::Favorable => 2,
    }
}
