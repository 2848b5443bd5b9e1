use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;

use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use telinput_core::{
    CountryDirectory, FocusTarget, FormatMode, NormalizerEvent, PendingCountryUpdate,
    PhoneInputNormalizer,
};

/// One command per line: `type <text>`, `select <iso2>`, `assign <value>`,
/// `assign-deferred <value>`, `settle`, `format <mode>`, `reset`, `dispose`.
/// Blank lines and `#` comments are skipped.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Script file; reads standard input when omitted
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StepReport<'a> {
    step: &'a str,
    events: &'a [NormalizerEvent],
}

pub fn run_session(ctx: &Context<'_>, args: SessionArgs) -> Result<()> {
    let lines: Vec<String> = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read script {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => io::stdin()
            .lock()
            .lines()
            .collect::<std::result::Result<_, _>>()
            .with_context(|| "read script from stdin")?,
    };

    let options = ctx.config.normalizer_options();
    let (mut normalizer, events) =
        PhoneInputNormalizer::initialize(CountryDirectory::bundled(), options, None)?;
    report(ctx, "init", &events)?;

    let mut pending: Option<PendingCountryUpdate> = None;
    for line in &lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let events = match command {
            "type" => normalizer.on_text_changed(rest),
            "select" => {
                let country = normalizer.resolve_country(rest);
                if country.is_unknown() {
                    return Err(invalid_input(format!("unknown country: {rest}")));
                }
                normalizer.select_country(&country, Some(FocusTarget(0)))
            }
            "assign" => normalizer.assign_external_value(rest),
            "assign-deferred" => {
                let (events, update) = normalizer.assign_external_value_deferred(rest);
                pending = update;
                events
            }
            "settle" => match pending.take() {
                Some(update) => normalizer.apply_pending_update(update),
                None => Vec::new(),
            },
            "format" => {
                let mode = rest
                    .parse::<FormatMode>()
                    .map_err(|err| invalid_input(err.to_string()))?;
                normalizer.set_format(mode)
            }
            "reset" => normalizer.reset(),
            "dispose" => {
                normalizer.dispose();
                Vec::new()
            }
            _ => return Err(invalid_input(format!("unknown session command: {command}"))),
        };
        report(ctx, line, &events)?;
    }
    Ok(())
}

fn report(ctx: &Context<'_>, step: &str, events: &[NormalizerEvent]) -> Result<()> {
    if ctx.json {
        print_json(&StepReport { step, events })?;
    } else {
        for event in events {
            match event {
                NormalizerEvent::ValueChanged { value } => {
                    println!("{step}: value-changed {}", value.as_deref().unwrap_or("null"))
                }
                NormalizerEvent::CountryChanged { country } => {
                    println!("{step}: country-changed {}", country.iso2)
                }
                NormalizerEvent::StateChanged => println!("{step}: state-changed"),
                NormalizerEvent::FocusRequested { target } => {
                    println!("{step}: focus-requested {}", target.0)
                }
            }
        }
    }
    Ok(())
}
