//! Output formatting utilities

use crate::domain::{JournalEntry, Mood, MoodSummary, WeeklyProgress};

const SHORT_ID_LEN: usize = 8;
const PREVIEW_LEN: usize = 60;
const BAR_WIDTH: usize = 20;

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let id = entry.id.to_string();
        let date = match entry.date {
            Some(date) => date.format("%d-%m-%Y").to_string(),
            None => "no date".to_string(),
        };
        output.push_str(&format!(
            "{}  {:<10}  {:<5}  {}\n",
            &id[..SHORT_ID_LEN],
            date,
            entry.mood,
            preview(&entry.content)
        ));
    }
    output
}

/// First line of the content, shortened
fn preview(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or("");
    if first_line.chars().count() > PREVIEW_LEN {
        let cut: String = first_line.chars().take(PREVIEW_LEN - 3).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}

pub fn format_streak(streak: u32) -> String {
    match streak {
        0 => "Streak: 0 days. Write today to start a new one.".to_string(),
        1 => "Streak: 1 day".to_string(),
        n => format!("Streak: {} days", n),
    }
}

pub fn format_progress(progress: &WeeklyProgress) -> String {
    let filled = (progress.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let mut output = format!(
        "This week: {}/{} days [{}{}] {:.0}%",
        progress.progress,
        progress.goal,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.percentage
    );
    if progress.goal_met {
        output.push_str("\nWeekly goal met!");
    }
    output
}

pub fn format_trends(summary: &MoodSummary) -> String {
    if summary.total() == 0 {
        return "No moods recorded".to_string();
    }

    let mut output = String::new();
    for mood in Mood::ALL.iter().rev() {
        output.push_str(&format!("{:<5}  {}\n", mood, summary.count(*mood)));
    }
    if let Some(average) = summary.average() {
        output.push_str(&format!("average  {:.1}\n", average));
    }
    if let Some(dominant) = summary.dominant() {
        output.push_str(&format!("most often  {}\n", dominant));
    }
    output
}
