use anyhow::Result;
use clap::{ArgAction, Args};
use serde::Serialize;

use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use telinput_core::{
    matches_search, normalize_iso2, CountryDirectory, LibPhoneNumber, PhoneNumberService,
};

#[derive(Debug, Args)]
pub struct CountriesArgs {
    /// Filter rows with the dropdown search predicate
    #[arg(long)]
    pub search: Option<String>,
    /// Include placeholder example numbers
    #[arg(long, action = ArgAction::SetTrue)]
    pub placeholders: bool,
}

#[derive(Debug, Serialize)]
struct CountryRow {
    iso2: String,
    name: String,
    dial_code: Option<String>,
    preferred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    placeholder: Option<String>,
}

pub fn list_countries(ctx: &Context<'_>, args: CountriesArgs) -> Result<()> {
    let mut directory = CountryDirectory::bundled();
    directory.retain_only(&ctx.config.only_countries);
    let service = LibPhoneNumber;

    // Preferred rows first in configured order, then the rest in table order.
    let mut ordered = Vec::with_capacity(directory.len());
    for iso2 in &ctx.config.preferred_countries {
        if let Some(country) = directory.get(iso2) {
            ordered.push((country.clone(), true));
        }
    }
    for country in directory.all() {
        let preferred = ctx
            .config
            .preferred_countries
            .iter()
            .any(|iso2| iso2.eq_ignore_ascii_case(&country.iso2));
        if !preferred {
            ordered.push((country.clone(), false));
        }
    }

    let criteria = args.search.unwrap_or_default();
    let rows: Vec<CountryRow> = ordered
        .into_iter()
        .filter(|(country, _)| matches_search(country, &criteria))
        .map(|(country, preferred)| CountryRow {
            placeholder: if args.placeholders {
                service.example_number(&country.iso2)
            } else {
                None
            },
            iso2: country.iso2,
            name: country.name,
            dial_code: country.dial_code,
            preferred,
        })
        .collect();

    if ctx.json {
        print_json(&rows)?;
    } else {
        for row in &rows {
            let marker = if row.preferred { "*" } else { " " };
            let dial = match &row.dial_code {
                Some(code) => format!("+{code}"),
                None => "-".to_string(),
            };
            match &row.placeholder {
                Some(placeholder) => {
                    println!("{} {}  {:<36} {:>6}  {}", marker, row.iso2, row.name, dial, placeholder)
                }
                None => println!("{} {}  {:<36} {:>6}", marker, row.iso2, row.name, dial),
            }
        }
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// ISO 3166-1 alpha-2 country code, e.g. "us"
    pub iso2: String,
}

#[derive(Debug, Serialize)]
struct ExampleRow {
    iso2: String,
    example: String,
}

pub fn example(ctx: &Context<'_>, args: ExampleArgs) -> Result<()> {
    let iso2 = normalize_iso2(&args.iso2).map_err(|err| invalid_input(err.to_string()))?;
    let service = LibPhoneNumber;
    let Some(example) = service.example_number(&iso2) else {
        return Err(not_found(format!("no example number for {iso2}")));
    };

    if ctx.json {
        print_json(&ExampleRow { iso2, example })?;
    } else {
        println!("{example}");
    }
    Ok(())
}
