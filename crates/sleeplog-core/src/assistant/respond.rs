//! Canned replies, filled in with the user's own data where relevant.

use super::intent::{classify, Intent};
use crate::analysis::{format_minutes, generate_recommendations_with, SleepStats, Thresholds};
use crate::model::{SleepEntry, SleepGoal};

/// The data a reply may draw on.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub entries: &'a [SleepEntry],
    pub goal: &'a SleepGoal,
    pub stats: &'a SleepStats,
    pub thresholds: &'a Thresholds,
}

const GREETING: &str = "Hello! I'm your sleep assistant. How can I help you improve your sleep today?";

const LOG_PROMPT: &str = "Great! To log your sleep, run `sleeplog log` or tell me when you went to bed and woke up.";

const NO_ENTRIES: &str = "You haven't logged any sleep yet. Start tracking your sleep to see statistics and personalized recommendations.";

const HYGIENE: &str = "Good sleep hygiene practices:
• Maintain a consistent sleep schedule
• Create a restful environment (cool, dark, quiet)
• Limit exposure to screens 1 hour before bed
• Avoid caffeine and alcohol before bedtime
• Exercise regularly, but not too close to bedtime
• Establish a relaxing pre-sleep routine (reading, meditation, etc.)

Would you like more information on any of these practices?";

const FALLBACK: &str = "I'm here to help with your sleep. You can:
• Log your sleep
• View your sleep statistics
• Get personalized recommendations
• Learn about good sleep hygiene
• Set sleep goals

What would you like to do?";

/// Classify `message` and render the matching reply.
pub fn respond(message: &str, snapshot: &Snapshot<'_>) -> String {
    respond_to(classify(message), snapshot)
}

/// Render the reply for an already classified intent.
pub fn respond_to(intent: Intent, snapshot: &Snapshot<'_>) -> String {
    match intent {
        Intent::Greeting => GREETING.to_string(),
        Intent::LogPrompt => LOG_PROMPT.to_string(),
        Intent::Stats => stats_reply(snapshot),
        Intent::Recommendations => recommendations_reply(snapshot),
        Intent::Goal => goal_reply(snapshot.goal),
        Intent::Hygiene => HYGIENE.to_string(),
        Intent::Fallback => FALLBACK.to_string(),
    }
}

fn stats_reply(snapshot: &Snapshot<'_>) -> String {
    if snapshot.entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    let stats = snapshot.stats;
    let mut lines = vec![
        "Based on your sleep data:".to_string(),
        format!(
            "• Average sleep duration: {}",
            format_minutes(stats.average_sleep_duration)
        ),
        format!(
            "• Average sleep quality: {:.1}/5",
            stats.average_sleep_quality
        ),
        format!("• Sleep consistency score: {}/100", stats.consistency_score),
        String::new(),
    ];
    if let Some(best) = stats.best_sleep_day {
        lines.push(format!("Your best sleep was on {}.", best));
    }
    if let Some(worst) = stats.worst_sleep_day {
        lines.push(format!("Your worst sleep was on {}.", worst));
    }
    lines.join("\n")
}

fn recommendations_reply(snapshot: &Snapshot<'_>) -> String {
    let required = snapshot.thresholds.min_entries;
    if snapshot.entries.len() < required {
        return format!(
            "I need at least {} days of sleep data to provide personalized recommendations. Please continue logging your sleep.",
            required
        );
    }

    let bullets: Vec<String> =
        generate_recommendations_with(snapshot.entries, snapshot.stats, snapshot.thresholds)
            .iter()
            .map(|rec| format!("• {}", rec))
            .collect();

    format!(
        "Here are my recommendations for improving your sleep:\n\n{}\n\nWould you like more specific advice on any of these areas?",
        bullets.join("\n")
    )
}

fn goal_reply(goal: &SleepGoal) -> String {
    format!(
        "Your current sleep goals are:
• Target sleep duration: {}
• Target bedtime: {}
• Target wake time: {}

You can adjust these goals with `sleeplog goal set`.",
        format_minutes(f64::from(goal.target_duration_minutes)),
        goal.target_bed_time,
        goal.target_wake_time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::generate_stats;
    use crate::model::{NewSleepEntry, Quality};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn entry(day: u32, bed: &str, wake: &str, quality: u8) -> SleepEntry {
        NewSleepEntry::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            bed.parse().unwrap(),
            wake.parse().unwrap(),
            Quality::try_from(quality).unwrap(),
        )
        .into_entry(Uuid::new_v4())
    }

    fn reply(message: &str, entries: &[SleepEntry]) -> String {
        let goal = SleepGoal::default();
        let stats = generate_stats(entries);
        let thresholds = Thresholds::default();
        respond(
            message,
            &Snapshot {
                entries,
                goal: &goal,
                stats: &stats,
                thresholds: &thresholds,
            },
        )
    }

    #[test]
    fn test_stats_without_entries() {
        assert_eq!(reply("stats", &[]), NO_ENTRIES);
    }

    #[test]
    fn test_stats_reply_lists_averages() {
        let entries = vec![
            entry(1, "23:00", "06:30", 4),
            entry(2, "23:00", "06:30", 5),
        ];
        let text = reply("show statistics", &entries);
        assert!(text.contains("• Average sleep duration: 7h 30m"));
        assert!(text.contains("• Average sleep quality: 4.5/5"));
        assert!(text.contains("• Sleep consistency score: 100/100"));
        assert!(text.contains("Your best sleep was on 2024-03-02."));
        assert!(text.contains("Your worst sleep was on 2024-03-01."));
    }

    #[test]
    fn test_stats_reply_omits_missing_worst_day() {
        let entries = vec![entry(1, "23:00", "07:00", 3)];
        let goal = SleepGoal::default();
        let mut stats = generate_stats(&entries);
        stats.worst_sleep_day = None;
        let text = respond(
            "stats",
            &Snapshot {
                entries: &entries,
                goal: &goal,
                stats: &stats,
                thresholds: &Thresholds::default(),
            },
        );
        assert!(text.contains("Your best sleep was on 2024-03-01."));
        assert!(!text.contains("worst"));
    }

    #[test]
    fn test_recommendations_need_three_entries() {
        let entries = vec![entry(1, "23:00", "07:00", 3)];
        let text = reply("any advice?", &entries);
        assert!(text.starts_with("I need at least 3 days of sleep data"));
    }

    #[test]
    fn test_recommendations_are_bulleted() {
        let entries = vec![
            entry(1, "01:00", "06:00", 2),
            entry(2, "01:00", "06:00", 2),
            entry(3, "01:00", "06:00", 2),
        ];
        let text = reply("recommendations", &entries);
        assert!(text.contains("• You're averaging less than 7 hours"));
        assert!(text.contains("• Your sleep quality is below average"));
        assert!(!text.contains("inconsistent"));
    }

    #[test]
    fn test_goal_reply() {
        let text = reply("what's my goal", &[]);
        assert!(text.contains("• Target sleep duration: 8h 0m"));
        assert!(text.contains("• Target bedtime: 22:30"));
        assert!(text.contains("• Target wake time: 06:30"));
    }

    #[test]
    fn test_canned_replies() {
        assert_eq!(reply("hey", &[]), GREETING);
        assert_eq!(reply("bedtime routine", &[]), HYGIENE);
        assert_eq!(reply("weather?", &[]), FALLBACK);
    }
}
