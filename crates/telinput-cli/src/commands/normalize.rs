use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use telinput_core::{normalize_iso2, CountryDirectory, FormatMode, PhoneInputNormalizer};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Raw input text, e.g. "+442079460958" or "2025551234"
    pub text: String,
    /// Country to parse national numbers under, e.g. "us"
    #[arg(long)]
    pub country: Option<String>,
    /// Display format: default, national, or international
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
struct NormalizeReport {
    input: String,
    country: String,
    canonical: Option<String>,
    valid: bool,
    display: String,
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let mut options = ctx.config.normalizer_options();
    if let Some(format) = &args.format {
        options.format = format
            .parse::<FormatMode>()
            .map_err(|err| invalid_input(err.to_string()))?;
    }

    let (mut normalizer, _) =
        PhoneInputNormalizer::initialize(CountryDirectory::bundled(), options, None)?;

    if let Some(country) = &args.country {
        let iso2 = normalize_iso2(country).map_err(|err| invalid_input(err.to_string()))?;
        let resolved = normalizer.resolve_country(&iso2);
        if resolved.is_unknown() {
            return Err(invalid_input(format!("country {iso2} is not in the directory")));
        }
        normalizer.select_country(&resolved, None);
    }

    normalizer.on_text_changed(&args.text);

    let report = NormalizeReport {
        input: args.text,
        country: normalizer.selected_country().iso2.clone(),
        canonical: normalizer.canonical_value().map(str::to_string),
        valid: normalizer
            .parsed_number()
            .map(|parsed| parsed.is_valid)
            .unwrap_or(false),
        display: normalizer.raw_text().to_string(),
    };

    if ctx.json {
        print_json(&report)?;
    } else {
        println!("country    {}", report.country);
        println!("canonical  {}", report.canonical.as_deref().unwrap_or("-"));
        println!("valid      {}", report.valid);
        println!("display    {}", report.display);
    }
    Ok(())
}
