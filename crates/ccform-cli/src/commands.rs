use crate::args::{Cli, Command, DocumentArgs, FormatArgs, IconArgs};
use crate::exit_codes;
use anyhow::Context;
use ccform_document::{Document, classify};
use ccform_formatter::{BuiltinBrandLookup, FieldFormatter, FormatterConfig, Icon};
use std::io::Write;
use tracing::{debug, info};

/// Run `cli`, writing command output to `out`. Returns the exit code.
pub fn dispatch(cli: Cli, out: &mut impl Write) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Format(args) => format(&args, out),
        Command::Classify(args) => classify_document(&args, out),
        Command::Validate(args) => validate(&args, out),
        Command::Icon(args) => icon(&args, out),
    }
}

fn format(args: &FormatArgs, out: &mut impl Write) -> anyhow::Result<i32> {
    let config = FormatterConfig::new(args.fields).grouping(args.grouping);
    let formatter = FieldFormatter::with_config(config, BuiltinBrandLookup)
        .context("invalid formatter configuration")?;

    let formatted = formatter.format_values(&args.input_values());
    let json = if args.pretty {
        serde_json::to_string_pretty(&formatted)
    } else {
        serde_json::to_string(&formatted)
    }
    .context("failed to serialize formatted values")?;

    writeln!(out, "{json}")?;
    Ok(exit_codes::SUCCESS)
}

fn classify_document(args: &DocumentArgs, out: &mut impl Write) -> anyhow::Result<i32> {
    writeln!(out, "{}", classify(&args.raw))?;
    Ok(exit_codes::SUCCESS)
}

fn validate(args: &DocumentArgs, out: &mut impl Write) -> anyhow::Result<i32> {
    match Document::parse(&args.raw) {
        Ok(document) => {
            info!("Valid {} document", document.kind());
            writeln!(out, "valid {} {}", document.kind(), document)?;
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            debug!("Document rejected: {}", e);
            writeln!(out, "invalid: {e}")?;
            Ok(exit_codes::INVALID_DOCUMENT)
        }
    }
}

fn icon(args: &IconArgs, out: &mut impl Write) -> anyhow::Result<i32> {
    writeln!(out, "{}", Icon::for_name(&args.name).asset())?;
    Ok(exit_codes::SUCCESS)
}
