use std::path::PathBuf;

use anyhow::{Context, Result};
use pam_host::logging::{init_logging, LoggingConfig};
use pam_ui::prelude::*;

const HELLO: &str = include_str!("../ui/hello.xml");

fn main() -> Result<()> {
    // Loader warnings are printed in the summary below.
    init_logging(LoggingConfig::default().with_loader_level(log::LevelFilter::Error));

    let (name, text) = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (path.display().to_string(), text)
        }
        None => ("<bundled hello.xml>".to_string(), HELLO.to_string()),
    };

    log::info!("loading {name}");
    let factory = WidgetFactory::global();
    let report = MarkupLoader::new(&factory)
        .load_with_report(&text)
        .with_context(|| format!("failed to load {name}"))?;

    println!("{}", report.root.outer_html());

    if report.diagnostics.is_empty() {
        eprintln!("{name}: loaded without diagnostics");
    } else {
        eprintln!(
            "{name}: {} diagnostic(s), {} warning(s)",
            report.diagnostics.len(),
            report.warnings().count()
        );
        for d in &report.diagnostics {
            let level = match d.severity() {
                Severity::Notice => "notice",
                Severity::Warning => "warning",
            };
            eprintln!("  {level}: {d}");
        }
    }
    Ok(())
}
