use std::sync::OnceLock;

use color_eyre::Result;
use color_eyre::config::HookBuilder;
use tracing::error;

static HOOKS_INSTALLED: OnceLock<()> = OnceLock::new();

/// Install color-eyre and the panic hooks. Idempotent.
///
/// The panic hook leaves raw mode and the alternate screen before printing
/// anything, logs the stripped report, then defers to human-panic in release
/// builds and better-panic in debug builds.
pub fn init() -> Result<()> {
    if HOOKS_INSTALLED.get().is_some() {
        return Ok(());
    }

    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "Please report this at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .try_into_hooks()?;
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        if cfg!(debug_assertions) {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        } else {
            #[cfg(not(debug_assertions))]
            {
                use human_panic::{handle_dump, metadata, print_msg};
                let meta = metadata!();
                let dump = handle_dump(&meta, panic_info);
                print_msg(dump, &meta)
                    .expect("human-panic: printing error message to console failed");
            }
            eprintln!("{report}");
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));

    let _ = HOOKS_INSTALLED.set(());
    Ok(())
}

fn restore_terminal() {
    if let Ok(mut tui) = crate::tui::Tui::new() {
        if let Err(err) = tui.exit() {
            error!("failed to restore the terminal: {err:?}");
        }
    }
}
