//! Section score aggregation

use std::collections::BTreeMap;

use super::Thresholds;
use crate::{CriterionId, CriterionResult, SectionSummary, Status};

/// Calculator for section summaries
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Roll a section's verdicts into a summary. Only favorable verdicts count
    /// as a success. An empty section summarizes to 0% and unfavorable.
    pub fn summarize(
        criteria: &BTreeMap<CriterionId, CriterionResult>,
        thresholds: &Thresholds,
    ) -> SectionSummary {
        let total = criteria.len();
        let success = criteria.values().filter(|r| r.status.is_favorable()).count();
        let percentage = Self::percentage(success, total);

        SectionSummary {
            total,
            success,
            percentage,
            status: Self::status_for(percentage, thresholds),
        }
    }

    /// `success / total * 100` rounded to the nearest integer; 0 when `total` is 0
    pub fn percentage(success: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        let pct = (success.min(total) as f64 / total as f64 * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Map a section percentage to a tier
    pub fn status_for(percentage: u8, thresholds: &Thresholds) -> Status {
        if percentage >= thresholds.summary_favorable_pct {
            Status::Favorable
        } else if percentage >= thresholds.summary_cautionary_pct {
            Status::Cautionary
        } else {
            Status::Unfavorable
        }
    }
}
