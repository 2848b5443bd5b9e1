use crate::domain::Country;

mod data;

/// Static ordered list of countries keyed by iso2.
#[derive(Debug, Clone)]
pub struct CountryDirectory {
    countries: Vec<Country>,
}

impl CountryDirectory {
    /// Directory built from the bundled country table.
    pub fn bundled() -> Self {
        let countries = data::COUNTRIES
            .iter()
            .map(|&(name, iso2, dial_code, priority, area_codes)| Country {
                name: name.to_string(),
                iso2: iso2.to_string(),
                dial_code: if dial_code.is_empty() {
                    None
                } else {
                    Some(dial_code.to_string())
                },
                priority,
                area_codes: area_codes.iter().map(|code| code.to_string()).collect(),
                placeholder: None,
            })
            .collect();
        Self { countries }
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, iso2: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|country| country.iso2.eq_ignore_ascii_case(iso2.trim()))
    }

    /// Keeps only the countries named in `allow`, preserving table order.
    pub fn retain_only(&mut self, allow: &[String]) {
        if allow.is_empty() {
            return;
        }
        self.countries
            .retain(|country| allow.iter().any(|iso2| iso2.eq_ignore_ascii_case(&country.iso2)));
    }

    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }
}

/// Dropdown search predicate: case-insensitive containment over the
/// country name, dial code, and area codes.
pub fn matches_search(country: &Country, criteria: &str) -> bool {
    if criteria.is_empty() {
        return true;
    }
    let haystack = format!(
        "{}+{}{}",
        country.name,
        country.dial_code.as_deref().unwrap_or(""),
        country.area_codes.join(",")
    );
    haystack.to_lowercase().contains(&criteria.to_lowercase())
}
