//! Human-readable output.

use sleeplog_core::analysis::{format_minutes, Dashboard, Recommendation};
use sleeplog_core::tips::SleepTip;
use sleeplog_core::{ChatMessage, Sender, SleepEntry, SleepGoal};

use crate::ui::render::{bullets, header, kv, quality_meter, simple_table, table, Column};
use crate::ui::theme::{styled, styles};
use crate::ui::{blank_line, format_date, format_timestamp, short_id, single_line, truncate, UiContext};

/// Print a single entry.
pub fn print_entry(ui: &UiContext, entry: &SleepEntry) {
    let pretty = ui.mode.is_pretty();
    let quality = if pretty {
        format!(
            "{} {}",
            quality_meter(ui, entry.quality.value()),
            entry.quality.description()
        )
    } else {
        entry.quality.value().to_string()
    };

    println!("{}", kv(ui, "ID", &entry.id.to_string()));
    println!("{}", kv(ui, "Date", &format_date(entry.date, pretty)));
    println!("{}", kv(ui, "Bed", &entry.bed_time.to_string()));
    println!("{}", kv(ui, "Wake", &entry.wake_time.to_string()));
    println!(
        "{}",
        kv(ui, "Duration", &format_minutes(f64::from(entry.duration_minutes)))
    );
    println!("{}", kv(ui, "Quality", &quality));
    if !entry.notes.is_empty() {
        if pretty {
            blank_line(ui);
            println!("{}", entry.notes);
        } else {
            println!("{}", kv(ui, "Notes", &single_line(&entry.notes)));
        }
    }
}

/// Print entries as a table, newest date first.
pub fn print_entry_list(ui: &UiContext, entries: &[SleepEntry]) {
    let mut sorted: Vec<&SleepEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let pretty = ui.mode.is_pretty();
    let notes_width = ui.width.saturating_sub(60).max(12);

    let rows: Vec<Vec<String>> = sorted
        .iter()
        .map(|entry| {
            let mut row = vec![
                short_id(&entry.id),
                format_date(entry.date, false),
                entry.bed_time.to_string(),
                entry.wake_time.to_string(),
                format_minutes(f64::from(entry.duration_minutes)).replace(' ', ""),
                if pretty {
                    quality_meter(ui, entry.quality.value())
                } else {
                    entry.quality.value().to_string()
                },
            ];
            if pretty {
                row.push(truncate(&single_line(&entry.notes), notes_width));
            }
            row
        })
        .collect();

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Bed"),
        Column::new("Wake"),
        Column::new("Slept"),
        Column::new("Quality"),
        Column::new("Notes"),
    ];
    let columns = if pretty { &columns[..] } else { &columns[..6] };
    println!("{}", simple_table(ui, columns, &rows));
}

/// Print the stats dashboard.
pub fn print_dashboard(ui: &UiContext, dashboard: &Dashboard) {
    let stats = &dashboard.stats;
    let best = stats
        .best_sleep_day
        .map(|d| format_date(d, ui.mode.is_pretty()))
        .unwrap_or_else(|| "-".to_string());
    let worst = stats
        .worst_sleep_day
        .map(|d| format_date(d, ui.mode.is_pretty()))
        .unwrap_or_else(|| "-".to_string());

    if !ui.mode.is_pretty() {
        let lines = [
            kv(ui, "Entries", &dashboard.entry_count.to_string()),
            kv(ui, "Avg Duration", &format_minutes(stats.average_sleep_duration)),
            kv(ui, "Avg Duration Minutes", &format!("{:.1}", stats.average_sleep_duration)),
            kv(ui, "Avg Quality", &format!("{:.1}", stats.average_sleep_quality)),
            kv(ui, "Consistency", &stats.consistency_score.to_string()),
            kv(ui, "Streak", &dashboard.streak_days.to_string()),
            kv(ui, "Goal Attainment", &dashboard.goal_attainment.to_string()),
            kv(ui, "Best Day", &best),
            kv(ui, "Worst Day", &worst),
        ];
        println!("{}", lines.join("\n"));
        return;
    }

    let columns = [Column::new("Metric"), Column::new("Value"), Column::new("")];
    let rows = vec![
        vec![
            "Average sleep".to_string(),
            format_minutes(stats.average_sleep_duration),
            format!(
                "{}% of {} goal",
                dashboard.goal_attainment,
                format_minutes(f64::from(dashboard.goal.target_duration_minutes))
            ),
        ],
        vec![
            "Average quality".to_string(),
            format!("{:.1} / 5", stats.average_sleep_quality),
            dashboard.quality_label.to_string(),
        ],
        vec![
            "Consistency".to_string(),
            format!("{} / 100", stats.consistency_score),
            dashboard.consistency_label.to_string(),
        ],
        vec![
            "Streak".to_string(),
            format!("{} days", dashboard.streak_days),
            dashboard.streak_label.to_string(),
        ],
        vec!["Best night".to_string(), best, String::new()],
        vec!["Worst night".to_string(), worst, String::new()],
    ];
    println!("{}", table(ui, &columns, &rows));
}

pub fn print_recommendations(ui: &UiContext, recommendations: &[Recommendation]) {
    let items: Vec<String> = recommendations.iter().map(ToString::to_string).collect();
    println!("{}", bullets(ui, "recommendation", &items));
}

pub fn print_goal(ui: &UiContext, goal: &SleepGoal) {
    println!("{}", kv(ui, "Bed Time", &goal.target_bed_time.to_string()));
    println!("{}", kv(ui, "Wake Time", &goal.target_wake_time.to_string()));
    let duration = if ui.mode.is_pretty() {
        format_minutes(f64::from(goal.target_duration_minutes))
    } else {
        goal.target_duration_minutes.to_string()
    };
    println!("{}", kv(ui, "Duration", &duration));
}

/// Print chat messages in order.
///
/// Plain mode emits one `sender=text` line per message with newlines folded.
pub fn print_messages(ui: &UiContext, messages: &[ChatMessage]) {
    for message in messages {
        if !ui.mode.is_pretty() {
            println!("{}={}", message.sender.as_str(), single_line(&message.text));
            continue;
        }

        let (label, style) = match message.sender {
            Sender::User => ("You", styles::bold()),
            Sender::Assistant => ("Assistant", styles::assistant()),
        };
        let stamp = styled(&format_timestamp(&message.timestamp, true), styles::dim(), ui.color);
        println!("{} {}", styled(label, style, ui.color), stamp);
        println!("{}", message.text);
        blank_line(ui);
    }
}

pub fn print_tips(ui: &UiContext, tips: &[SleepTip]) {
    if !ui.mode.is_pretty() {
        for tip in tips {
            println!("tip={}: {}", tip.title, tip.description);
        }
        return;
    }

    println!("{}", header(ui, "tips", None));
    for tip in tips {
        blank_line(ui);
        println!("{}", styled(tip.title, styles::bold(), ui.color));
        println!("  {}", tip.description);
    }
}
