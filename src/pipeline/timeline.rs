use crate::model::scores::{CategoryOutcome, clamp_round};
use crate::pipeline::normalize::{NormalizedReport, TimelineClarity};

const SCHEDULE_KEYWORDS: &[&str] = &[
    "milestone",
    "start date",
    "completion",
    "schedule",
    "timeline",
    "week",
    "day",
];

pub fn score_timeline(report: &NormalizedReport) -> CategoryOutcome {
    let mut score: f64 = 40.0;
    if report.timeline_present {
        score = 70.0;
    }
    match report.timeline_clarity {
        TimelineClarity::Clear => score = 90.0,
        TimelineClarity::Basic => score = 65.0,
        TimelineClarity::Missing => {}
    }

    let keyword_hit = SCHEDULE_KEYWORDS
        .iter()
        .any(|k| report.timeline_text.contains(k));
    if keyword_hit {
        score = (score + 15.0).min(100.0);
    }

    let mut notes = Vec::new();
    match report.timeline_clarity {
        TimelineClarity::Missing => {
            notes.push("No written timeline or milestones were provided in the quote.".to_string());
        }
        TimelineClarity::Clear => {
            notes.push("Quote includes timeline or milestone information.".to_string());
        }
        TimelineClarity::Basic => {
            if keyword_hit {
                notes.push("Quote includes timeline or milestone information.".to_string());
            }
        }
    }

    CategoryOutcome {
        score: clamp_round(score),
        notes,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/timeline.rs"]
mod tests;
