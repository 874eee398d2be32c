use sleeplog_core::SleepStore;

use crate::app::AppContext;
use crate::ui::{hint, kv, print, OutputMode, Spinner};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.store_path()?;
    let ui = ctx.ui_context(false, None)?;

    let spinner = Spinner::new(&ui, "Checking store");
    let result = ctx
        .open_store()
        .and_then(|store| store.check_integrity().map_err(anyhow::Error::from));

    match result {
        Ok(()) => {
            if ctx.quiet() {
                return Ok(());
            }
            match ui.mode {
                OutputMode::Pretty => {
                    spinner.finish("Integrity check passed");
                    println!("  {}", kv(&ui, "Path", &path.display().to_string()));
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("check=sqlite_integrity ok");
                    println!("check=format_version ok");
                    println!("check=rows ok");
                    println!("status=ok");
                }
            }
            Ok(())
        }
        Err(err) => {
            match ui.mode {
                OutputMode::Pretty => {
                    spinner.finish_err("Integrity check failed");
                    eprintln!("Error: {}", err);
                    print(
                        &ui,
                        &hint(&ui, "Restore the store from a backup or an export."),
                    );
                }
                OutputMode::Plain | OutputMode::Json => {
                    eprintln!("status=failed");
                    eprintln!("error={}", err);
                }
            }
            Err(anyhow::anyhow!("Integrity check failed for {}", path.display()))
        }
    }
}
