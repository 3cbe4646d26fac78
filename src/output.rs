//! Command-line settings and line rendering.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::markup::{TextElement, prettify_tags};
use crate::pretty::{self, FormatOptions};
use crate::util::clock::NaiveTimezone;
use crate::util::config::AppConfig;

/// Values given on the command line. `None` means "use the config file".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_age_days: Option<u32>,
    pub naive_timezone: Option<NaiveTimezone>,
    pub keep_original: Option<bool>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub options: FormatOptions,
    pub keep_original: bool,
    pub json: bool,
}

impl Settings {
    /// Config values, with any command-line override taking precedence.
    pub fn resolve(config: &AppConfig, overrides: &Overrides, now: DateTime<Utc>) -> Self {
        let naive_timezone = overrides
            .naive_timezone
            .unwrap_or(config.format.naive_timezone);
        let options = FormatOptions::default()
            .with_max_age_days(
                overrides
                    .max_age_days
                    .unwrap_or(config.format.max_age_days),
            )
            .with_naive_offset(naive_timezone.resolve(now));

        Self {
            options,
            keep_original: overrides
                .keep_original
                .unwrap_or(config.output.keep_original),
            json: overrides.json.unwrap_or(config.output.json),
        }
    }
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    input: &'a str,
    label: Option<String>,
    skipped: Option<String>,
}

/// One timestamp per line, blank lines dropped.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Write one line per input. Inputs without a label are echoed as given.
pub fn render<W: Write>(
    out: &mut W,
    inputs: &[String],
    now: DateTime<Utc>,
    settings: &Settings,
) -> Result<()> {
    if settings.json {
        render_json(out, inputs, now, &settings.options)
    } else {
        render_plain(out, inputs, now, settings)
    }
}

fn render_plain<W: Write>(
    out: &mut W,
    inputs: &[String],
    now: DateTime<Utc>,
    settings: &Settings,
) -> Result<()> {
    let mut elements: Vec<TextElement> = inputs.iter().map(TextElement::new).collect();
    let replaced = prettify_tags(&mut elements, now, &settings.options);
    debug!(total = elements.len(), replaced, "Formatted timestamps");

    for element in &elements {
        match (&element.title, settings.keep_original) {
            (Some(original), true) => writeln!(out, "{}\t{}", element.text, original)?,
            _ => writeln!(out, "{}", element.text)?,
        }
    }
    Ok(())
}

fn render_json<W: Write>(
    out: &mut W,
    inputs: &[String],
    now: DateTime<Utc>,
    options: &FormatOptions,
) -> Result<()> {
    for input in inputs {
        let input = input.as_str();
        let record = match pretty::classify(input, now, options) {
            Ok(label) => Record {
                input,
                label: Some(label.to_string()),
                skipped: None,
            },
            Err(skip) => Record {
                input,
                label: None,
                skipped: Some(skip.to_string()),
            },
        };
        serde_json::to_writer(&mut *out, &record).context("Failed to serialize record")?;
        writeln!(out)?;
    }
    Ok(())
}
