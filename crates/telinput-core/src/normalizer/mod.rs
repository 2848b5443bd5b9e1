//! The phone-input normalization state machine.
//!
//! Owns the visible text, the selected country, and the derived canonical
//! value; reacts to text edits, country selections, and external value
//! assignments; and reports what happened through [`NormalizerEvent`]s.
//! Parse problems never escape these entry points: they degrade to "the
//! canonical value carries the raw text" so upstream validation can flag
//! the field instead.

mod events;

pub use events::{FocusTarget, NormalizerEvent, PendingCountryUpdate};

use crate::directory::CountryDirectory;
use crate::domain::{Country, FormFieldState, FormatMode, ParsedNumber};
use crate::error::CoreError;
use crate::rules::evaluate_error_state;
use crate::service::{LibPhoneNumber, PhoneNumberService};

#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    pub format: FormatMode,
    pub enable_placeholder: bool,
    /// Clear all state when the user switches to a different country.
    pub reset_on_change: bool,
    /// Treat an externally assigned empty value as a reset. Off by default
    /// to match the original behavior, where the reset path is disabled as
    /// a host-framework workaround.
    pub reset_on_empty_assign: bool,
    /// Preferred iso2 codes, surfaced at the top of the dropdown in the
    /// caller's order. Unknown codes are skipped silently.
    pub preferred_countries: Vec<String>,
    /// Allow-list of iso2 codes. Empty means the whole directory. Applied
    /// before the preferred list is populated.
    pub only_countries: Vec<String>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            format: FormatMode::Default,
            enable_placeholder: false,
            reset_on_change: false,
            reset_on_empty_assign: false,
            preferred_countries: Vec::new(),
            only_countries: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct PhoneInputNormalizer<S = LibPhoneNumber> {
    service: S,
    options: NormalizerOptions,
    /// Allow-filtered country list, in directory order.
    countries: Vec<Country>,
    /// Full directory; a value-resolved country may legitimately sit
    /// outside the allow-list.
    unfiltered: Vec<Country>,
    preferred: Vec<Country>,
    selected: Country,
    raw_text: String,
    parsed: Option<ParsedNumber>,
    canonical: Option<String>,
    /// Caret proxy: reformatting is applied only while the new text still
    /// starts with this, i.e. while the user is appending at the end.
    previous_formatted: Option<String>,
    error_state: bool,
    disposed: bool,
}

impl PhoneInputNormalizer<LibPhoneNumber> {
    /// Initialization with the default `phonenumber`-backed service.
    pub fn initialize(
        directory: CountryDirectory,
        options: NormalizerOptions,
        initial_value: Option<&str>,
    ) -> Result<(Self, Vec<NormalizerEvent>), CoreError> {
        Self::initialize_with(LibPhoneNumber, directory, options, initial_value)
    }
}

impl<S: PhoneNumberService> PhoneInputNormalizer<S> {
    pub fn initialize_with(
        service: S,
        directory: CountryDirectory,
        options: NormalizerOptions,
        initial_value: Option<&str>,
    ) -> Result<(Self, Vec<NormalizerEvent>), CoreError> {
        let unfiltered = directory.into_countries();
        let mut countries = unfiltered.clone();
        if !options.only_countries.is_empty() {
            countries.retain(|country| {
                options
                    .only_countries
                    .iter()
                    .any(|iso2| iso2.eq_ignore_ascii_case(&country.iso2))
            });
        }
        if countries.is_empty() {
            return Err(CoreError::EmptyCountryList);
        }

        if options.enable_placeholder {
            for country in countries.iter_mut() {
                country.placeholder = service.example_number(&country.iso2);
            }
        }

        let mut preferred = Vec::new();
        for iso2 in &options.preferred_countries {
            if let Some(country) = countries
                .iter()
                .find(|country| country.iso2.eq_ignore_ascii_case(iso2))
            {
                preferred.push(country.clone());
            }
        }

        let parsed = initial_value
            .filter(|value| !value.is_empty())
            .and_then(|value| service.parse(value, None).ok());

        // A country resolved from the initial value wins over the preferred
        // list, even when the allow-list excludes it.
        let selected = parsed
            .as_ref()
            .and_then(|parsed| parsed.country_iso2.as_deref())
            .map(|iso2| lookup_with_fallback(&countries, &unfiltered, iso2))
            .or_else(|| preferred.first().cloned())
            .unwrap_or_else(|| countries[0].clone());

        let mut normalizer = Self {
            service,
            options,
            countries,
            unfiltered,
            preferred,
            selected,
            raw_text: String::new(),
            parsed,
            canonical: None,
            previous_formatted: None,
            error_state: false,
            disposed: false,
        };

        if let Some(parsed) = normalizer.parsed.clone() {
            normalizer.raw_text = normalizer.display_for(&parsed);
            normalizer.canonical = if parsed.e164.is_empty() {
                Some(normalizer.raw_text.clone())
            } else {
                Some(parsed.e164.clone())
            };
        }

        let events = vec![NormalizerEvent::CountryChanged {
            country: normalizer.selected.clone(),
        }];
        Ok((normalizer, events))
    }

    /// Reacts to an edit of the visible text.
    pub fn on_text_changed(&mut self, new_text: &str) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        let mut events = Vec::new();
        self.raw_text = new_text.to_string();

        if new_text.is_empty() {
            self.parsed = None;
            self.canonical = None;
            events.push(NormalizerEvent::ValueChanged { value: None });
            return events;
        }

        match self.service.parse(new_text, Some(&self.selected.iso2)) {
            Err(_) => {
                // Pass the text through verbatim so an external validator
                // can flag it.
                self.parsed = None;
                self.canonical = Some(new_text.to_string());
            }
            Ok(parsed) if parsed.e164.is_empty() => {
                self.raw_text = self.apply_as_you_type(new_text);
                self.parsed = None;
                self.canonical = Some(self.raw_text.clone());
            }
            Ok(parsed) => {
                self.raw_text = self.apply_as_you_type(new_text);
                self.canonical = Some(parsed.e164.clone());
                if parsed.is_valid {
                    let display = self.display_for(&parsed);
                    if display != self.raw_text {
                        self.raw_text = display;
                    }
                    if let Some(iso2) = parsed.country_iso2.as_deref() {
                        if !self.selected.iso2.eq_ignore_ascii_case(iso2) {
                            self.selected = self.resolve_country(iso2);
                            events.push(NormalizerEvent::CountryChanged {
                                country: self.selected.clone(),
                            });
                        }
                    }
                }
                self.parsed = Some(parsed);
            }
        }

        events.push(NormalizerEvent::ValueChanged {
            value: self.canonical.clone(),
        });
        events
    }

    /// Reacts to an explicit country selection from the dropdown.
    ///
    /// Only the national digits survive the switch; the old country's dial
    /// prefix is stripped before re-parsing under the new country.
    pub fn select_country(
        &mut self,
        country: &Country,
        focus: Option<FocusTarget>,
    ) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        let mut events = Vec::new();

        if !self.raw_text.is_empty() {
            self.raw_text = self
                .parsed
                .as_ref()
                .map(|parsed| parsed.national_number.clone())
                .unwrap_or_default();
        }
        if self.options.reset_on_change && self.selected != *country {
            events.extend(self.reset());
        }

        self.selected = country.clone();
        events.push(NormalizerEvent::CountryChanged {
            country: self.selected.clone(),
        });

        let text = self.raw_text.clone();
        events.extend(self.on_text_changed(&text));

        if let Some(target) = focus {
            events.push(NormalizerEvent::FocusRequested { target });
        }
        events
    }

    /// Reacts to a value set programmatically by the owning form, not via
    /// user typing. The form already holds the value, so no `ValueChanged`
    /// is emitted; a terminal `StateChanged` always is.
    pub fn assign_external_value(&mut self, value: &str) -> Vec<NormalizerEvent> {
        let (events, _pending) = self.assign_value(value, false);
        events
    }

    /// Variant of [`assign_external_value`](Self::assign_external_value)
    /// that defers the country/preferred-list update until the host has
    /// settled. Apply the returned update with
    /// [`apply_pending_update`](Self::apply_pending_update) on the next
    /// tick.
    pub fn assign_external_value_deferred(
        &mut self,
        value: &str,
    ) -> (Vec<NormalizerEvent>, Option<PendingCountryUpdate>) {
        self.assign_value(value, true)
    }

    fn assign_value(
        &mut self,
        value: &str,
        deferred: bool,
    ) -> (Vec<NormalizerEvent>, Option<PendingCountryUpdate>) {
        if self.disposed {
            return (Vec::new(), None);
        }
        let mut events = Vec::new();

        if value.is_empty() {
            if self.options.reset_on_empty_assign && !self.raw_text.is_empty() {
                events.extend(self.reset());
            } else {
                events.push(NormalizerEvent::StateChanged);
            }
            return (events, None);
        }

        match self.service.parse(value, None) {
            Ok(parsed) => {
                self.raw_text = self.display_for(&parsed);
                self.canonical = if parsed.e164.is_empty() {
                    Some(value.to_string())
                } else {
                    Some(parsed.e164.clone())
                };
                let resolved = parsed.country_iso2.clone();
                self.parsed = Some(parsed);
                if let Some(iso2) = resolved {
                    if deferred {
                        events.push(NormalizerEvent::StateChanged);
                        return (events, Some(PendingCountryUpdate { iso2 }));
                    }
                    events.extend(self.adopt_assigned_country(&iso2));
                }
            }
            Err(_) => {
                // Opaque unvalidated string; upstream validation flags it.
                self.raw_text = value.to_string();
                self.canonical = Some(value.to_string());
                self.parsed = None;
            }
        }

        events.push(NormalizerEvent::StateChanged);
        (events, None)
    }

    /// Second phase of a deferred assignment.
    pub fn apply_pending_update(&mut self, update: PendingCountryUpdate) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        let mut events = self.adopt_assigned_country(&update.iso2);
        events.push(NormalizerEvent::StateChanged);
        events
    }

    fn adopt_assigned_country(&mut self, iso2: &str) -> Vec<NormalizerEvent> {
        let country = lookup_with_fallback(&self.countries, &self.unfiltered, iso2);
        self.selected = country.clone();
        let configured_preferred = self
            .options
            .preferred_countries
            .iter()
            .any(|preferred| preferred.eq_ignore_ascii_case(iso2));
        let already_listed = self
            .preferred
            .iter()
            .any(|listed| listed.iso2.eq_ignore_ascii_case(iso2));
        if country.dial_code.is_some() && !configured_preferred && !already_listed {
            self.preferred.push(country.clone());
        }
        vec![NormalizerEvent::CountryChanged { country }]
    }

    /// Lookup in the allow-filtered list; an unknown code resolves to the
    /// sentinel country rather than failing.
    pub fn resolve_country(&self, iso2: &str) -> Country {
        self.countries
            .iter()
            .find(|country| country.iso2.eq_ignore_ascii_case(iso2))
            .cloned()
            .unwrap_or_else(Country::unknown)
    }

    /// Current display rendering of the parsed number, or the raw text
    /// verbatim when nothing parsed.
    pub fn format_display(&self) -> String {
        match &self.parsed {
            None => self.raw_text.clone(),
            Some(parsed) => self.display_for(parsed),
        }
    }

    fn display_for(&self, parsed: &ParsedNumber) -> String {
        match self.options.format {
            FormatMode::National => self.service.format_national(parsed),
            FormatMode::International => self.service.format_international(parsed),
            FormatMode::Default => parsed.national_number.clone(),
        }
    }

    /// Caret-guarded as-you-type pass. No-op in `Default` mode. Otherwise
    /// the text is reformatted only when it still starts with the previous
    /// formatted string, so a user editing mid-field is left alone.
    pub fn apply_as_you_type(&mut self, text: &str) -> String {
        if self.options.format == FormatMode::Default || text.is_empty() {
            return text.to_string();
        }
        let mut formatted = text.to_string();
        if text.starts_with(self.previous_formatted.as_deref().unwrap_or("")) {
            formatted = self.service.format_as_you_type(text, &self.selected.iso2);
        }
        self.previous_formatted = Some(formatted.clone());
        formatted
    }

    /// Switches the display format and re-renders the visible text.
    pub fn set_format(&mut self, format: FormatMode) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        self.options.format = format;
        self.raw_text = self.format_display();
        vec![NormalizerEvent::StateChanged]
    }

    /// Applies the error-state rule; emits `StateChanged` on transitions.
    pub fn sync_error_state(
        &mut self,
        field: FormFieldState,
        host_error: bool,
    ) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        let next = evaluate_error_state(host_error, field, !self.is_empty());
        if next == self.error_state {
            return Vec::new();
        }
        self.error_state = next;
        vec![NormalizerEvent::StateChanged]
    }

    /// Clears the field. The emitted `ValueChanged(None)` lets downstream
    /// consumers distinguish "cleared" from "never touched".
    pub fn reset(&mut self) -> Vec<NormalizerEvent> {
        if self.disposed {
            return Vec::new();
        }
        self.raw_text.clear();
        self.parsed = None;
        self.canonical = None;
        self.previous_formatted = None;
        vec![
            NormalizerEvent::ValueChanged { value: None },
            NormalizerEvent::StateChanged,
        ]
    }

    /// Finalizes the notification stream. Every later operation is a
    /// silent no-op.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn selected_country(&self) -> &Country {
        &self.selected
    }

    pub fn canonical_value(&self) -> Option<&str> {
        self.canonical.as_deref()
    }

    pub fn parsed_number(&self) -> Option<&ParsedNumber> {
        self.parsed.as_ref()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn preferred_countries(&self) -> &[Country] {
        &self.preferred
    }

    /// Example-number placeholder for the selected country, when enabled.
    pub fn placeholder(&self) -> Option<&str> {
        self.selected.placeholder.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    pub fn error_state(&self) -> bool {
        self.error_state
    }

    pub fn format(&self) -> FormatMode {
        self.options.format
    }
}

fn lookup_with_fallback(countries: &[Country], unfiltered: &[Country], iso2: &str) -> Country {
    countries
        .iter()
        .chain(unfiltered.iter())
        .find(|country| country.iso2.eq_ignore_ascii_case(iso2))
        .cloned()
        .unwrap_or_else(Country::unknown)
}
