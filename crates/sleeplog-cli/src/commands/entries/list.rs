use chrono::Local;

use sleeplog_core::{EntryFilter, SleepStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::{parse_date, parse_output_format, parse_window, window_start};
use crate::output::{entries_json, print_entry_list, print_json};
use crate::ui::{header, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    if let Some(format) = args.format.as_deref() {
        parse_output_format(format)?;
    }
    let filter = list_filter(args)?;

    let store = ctx.open_store()?;
    let entries = store.list_entries(&filter)?;

    if args.json {
        return print_json(&entries_json(&entries));
    }

    let ui = ctx.ui_context(false, args.format.as_deref())?;
    if entries.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No entries found.");
            print(
                &ui,
                &hint(
                    &ui,
                    "Log a night with `sleeplog log --bed 23:00 --wake 07:00 --quality 4`.",
                ),
            );
        }
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        let context = args.last.as_deref().map(|w| format!("last {}", w));
        println!("{}", header(&ui, "list", context.as_deref()));
        println!();
    }
    print_entry_list(&ui, &entries);
    Ok(())
}

/// Build the store filter, newest night first. Without any window or limit
/// the latest dates are capped at the default list size.
fn list_filter(args: &ListArgs) -> anyhow::Result<EntryFilter> {
    let mut filter = EntryFilter::new().newest_first();

    if let Some(window) = args.last.as_deref() {
        let days = parse_window(window)?;
        filter = filter.since(window_start(Local::now().date_naive(), days)?);
    }
    if let Some(since) = args.since.as_deref() {
        filter = filter.since(parse_date(since)?);
    }
    if let Some(until) = args.until.as_deref() {
        filter = filter.until(parse_date(until)?);
    }

    let windowed = filter.since.is_some() || filter.until.is_some();
    match args.limit {
        Some(limit) => filter = filter.limit(limit),
        None if !windowed => filter = filter.limit(DEFAULT_LIST_LIMIT),
        None => {}
    }
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ListArgs {
        ListArgs {
            last: None,
            since: None,
            until: None,
            limit: None,
            json: false,
            format: None,
        }
    }

    #[test]
    fn test_default_limit_without_window() {
        let filter = list_filter(&args()).unwrap();
        assert_eq!(filter.limit, Some(DEFAULT_LIST_LIMIT));
        assert!(filter.since.is_none());
        assert!(filter.newest_first);
    }

    #[test]
    fn test_window_lifts_default_limit() {
        let filter = list_filter(&ListArgs {
            since: Some("2024-03-01".to_string()),
            ..args()
        })
        .unwrap();
        assert_eq!(filter.limit, None);
        assert_eq!(filter.since.unwrap().to_string(), "2024-03-01");
    }

    #[test]
    fn test_explicit_limit_wins() {
        let filter = list_filter(&ListArgs {
            last: Some("7d".to_string()),
            limit: Some(3),
            ..args()
        })
        .unwrap();
        assert_eq!(filter.limit, Some(3));
        assert!(filter.since.is_some());
    }

    #[test]
    fn test_bad_window_is_rejected() {
        let result = list_filter(&ListArgs {
            last: Some("week".to_string()),
            ..args()
        });
        assert!(result.is_err());
    }
}
