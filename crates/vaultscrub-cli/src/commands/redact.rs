use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;
use vaultscrub_core::InputError;
use vaultscrub_redact::{RedactionInfo, RedactionKind, Redactor, summarize};

use super::effective_rules;
use crate::cli::RedactArgs;

pub fn handle(args: RedactArgs) -> Result<()> {
    let rules = effective_rules(args.config.as_deref(), args.preserve_keys);
    let redactor = Redactor::new(rules);

    // Parse fully before writing anything, so bad input produces no output
    let document = read_document(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let (redacted, report) = redactor.redact_with_report(&document);

    let rendered = if args.compact {
        serde_json::to_string(&redacted)?
    } else {
        serde_json::to_string_pretty(&redacted)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote redacted document to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if args.report {
        eprint!("{}", format_report(&report));
    }

    Ok(())
}

/// Read and parse a JSON document; `-` reads stdin
pub fn read_document(path: &Path) -> Result<Value, InputError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&content)?)
}

fn format_report(report: &[RedactionInfo]) -> String {
    let summary = summarize(report);
    let mut out = String::new();

    for info in report {
        let kind = match info.kind {
            RedactionKind::KeyRemoved => "removed",
            RedactionKind::KeyMasked => "masked key",
            RedactionKind::ValueMasked => "masked value",
        };
        out.push_str(&format!("  {} {} ({})\n", kind, info.path, info.rule));
    }

    out.push_str(&format!(
        "Redactions: {} ({} removed, {} masked keys, {} masked values)\n",
        summary.total(),
        summary.removed_keys,
        summary.masked_keys,
        summary.masked_values
    ));

    out
}
