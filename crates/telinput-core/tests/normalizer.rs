use telinput_core::{
    CoreError, CountryDirectory, FocusTarget, FormFieldState, FormatMode, LibPhoneNumber,
    NormalizerEvent, NormalizerOptions, PhoneInputNormalizer, PhoneNumberService,
};

fn options_with_preferred(preferred: &[&str]) -> NormalizerOptions {
    NormalizerOptions {
        preferred_countries: preferred.iter().map(|iso2| iso2.to_string()).collect(),
        ..NormalizerOptions::default()
    }
}

fn init(options: NormalizerOptions) -> (PhoneInputNormalizer, Vec<NormalizerEvent>) {
    PhoneInputNormalizer::initialize(CountryDirectory::bundled(), options, None)
        .expect("initialize")
}

fn country_changes(events: &[NormalizerEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            NormalizerEvent::CountryChanged { country } => Some(country.iso2.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn initialize_selects_first_preferred_country() {
    let options = NormalizerOptions {
        only_countries: vec!["us".to_string(), "gb".to_string(), "fr".to_string()],
        preferred_countries: vec!["gb".to_string()],
        ..NormalizerOptions::default()
    };
    let (normalizer, events) = init(options);

    assert_eq!(normalizer.selected_country().iso2, "gb");
    assert_eq!(normalizer.countries().len(), 3);
    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(events.len(), 1);
}

#[test]
fn initialize_falls_back_to_first_country_without_preferences() {
    let (normalizer, events) = init(NormalizerOptions::default());
    assert_eq!(normalizer.selected_country().iso2, "af");
    assert_eq!(country_changes(&events), vec!["af"]);
}

#[test]
fn initialize_skips_unknown_preferred_codes_silently() {
    let (normalizer, _) = init(options_with_preferred(&["zz", "gb"]));
    let preferred: Vec<&str> = normalizer
        .preferred_countries()
        .iter()
        .map(|country| country.iso2.as_str())
        .collect();
    assert_eq!(preferred, vec!["gb"]);
    assert_eq!(normalizer.selected_country().iso2, "gb");
}

#[test]
fn initialize_rejects_allow_list_that_empties_the_directory() {
    let options = NormalizerOptions {
        only_countries: vec!["zz".to_string()],
        ..NormalizerOptions::default()
    };
    let err = PhoneInputNormalizer::initialize(CountryDirectory::bundled(), options, None)
        .expect_err("empty allow list");
    assert_eq!(err, CoreError::EmptyCountryList);
}

#[test]
fn initialize_prefers_country_resolved_from_initial_value() {
    let options = options_with_preferred(&["us"]);
    let (normalizer, events) = PhoneInputNormalizer::initialize(
        CountryDirectory::bundled(),
        options,
        Some("+442079460958"),
    )
    .expect("initialize");

    assert_eq!(normalizer.selected_country().iso2, "gb");
    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(normalizer.raw_text(), "2079460958");
    assert_eq!(normalizer.canonical_value(), Some("+442079460958"));
}

#[test]
fn empty_text_clears_value_and_emits_null_once() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.on_text_changed("");

    assert_eq!(events, vec![NormalizerEvent::ValueChanged { value: None }]);
    assert_eq!(normalizer.canonical_value(), None);
    assert!(normalizer.is_empty());
}

#[test]
fn national_digits_canonicalize_to_e164() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.on_text_changed("2025551234");

    assert_eq!(
        events,
        vec![NormalizerEvent::ValueChanged {
            value: Some("+12025551234".to_string()),
        }]
    );
    assert_eq!(normalizer.raw_text(), "2025551234");
    assert_eq!(normalizer.canonical_value(), Some("+12025551234"));
    assert!(normalizer.parsed_number().expect("parsed").is_valid);
}

#[test]
fn unparseable_text_passes_through_verbatim() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.on_text_changed("not a number");

    assert_eq!(
        events,
        vec![NormalizerEvent::ValueChanged {
            value: Some("not a number".to_string()),
        }]
    );
    assert_eq!(normalizer.raw_text(), "not a number");
    assert!(normalizer.parsed_number().is_none());
}

#[test]
fn typing_a_foreign_number_re_derives_the_selected_country() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.on_text_changed("+442079460958");

    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(normalizer.selected_country().iso2, "gb");
    // Terminal event is always the value change.
    assert_eq!(
        events.last(),
        Some(&NormalizerEvent::ValueChanged {
            value: Some("+442079460958".to_string()),
        })
    );
}

#[test]
fn selecting_a_country_strips_the_old_dial_prefix() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    normalizer.on_text_changed("+14155552671");

    let gb = normalizer.resolve_country("gb");
    let events = normalizer.select_country(&gb, Some(FocusTarget(7)));

    assert_eq!(normalizer.raw_text(), "4155552671");
    assert!(!normalizer.raw_text().contains("+1"));
    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(
        events.last(),
        Some(&NormalizerEvent::FocusRequested {
            target: FocusTarget(7),
        })
    );
}

#[test]
fn reset_on_change_clears_state_when_switching_countries() {
    let options = NormalizerOptions {
        reset_on_change: true,
        ..options_with_preferred(&["us"])
    };
    let (mut normalizer, _) = init(options);
    normalizer.on_text_changed("2025551234");

    let gb = normalizer.resolve_country("gb");
    let events = normalizer.select_country(&gb, None);

    assert!(normalizer.is_empty());
    assert_eq!(normalizer.canonical_value(), None);
    assert!(events.contains(&NormalizerEvent::ValueChanged { value: None }));
    assert_eq!(normalizer.selected_country().iso2, "gb");
}

#[test]
fn resolve_country_returns_sentinel_on_miss() {
    let (normalizer, _) = init(NormalizerOptions::default());
    let unknown = normalizer.resolve_country("zz");
    assert!(unknown.is_unknown());
    assert_eq!(unknown.iso2, "UN");
    assert_eq!(unknown.name, "UN");
    assert!(unknown.dial_code.is_none());
}

#[test]
fn as_you_type_is_idempotent_while_the_caret_proxy_matches() {
    let options = NormalizerOptions {
        format: FormatMode::National,
        ..options_with_preferred(&["us"])
    };
    let (mut normalizer, _) = init(options);

    let once = normalizer.apply_as_you_type("2025551234");
    assert_ne!(once, "2025551234");
    let twice = normalizer.apply_as_you_type(&once);
    assert_eq!(once, twice);
}

#[test]
fn as_you_type_leaves_mid_field_edits_alone() {
    let options = NormalizerOptions {
        format: FormatMode::National,
        ..options_with_preferred(&["us"])
    };
    let (mut normalizer, _) = init(options);

    normalizer.apply_as_you_type("2025551234");
    // The new text no longer extends the recorded formatted string, as
    // happens when the user edits in the middle of the field.
    let unchanged = normalizer.apply_as_you_type("202555");
    assert_eq!(unchanged, "202555");
}

#[test]
fn as_you_type_is_a_no_op_in_default_mode() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    assert_eq!(normalizer.apply_as_you_type("2025551234"), "2025551234");
}

#[test]
fn international_display_round_trips_to_the_same_national_number() {
    let options = NormalizerOptions {
        format: FormatMode::International,
        ..options_with_preferred(&["gb"])
    };
    let (mut normalizer, _) = init(options);
    normalizer.on_text_changed("+442079460958");

    let display = normalizer.raw_text().to_string();
    assert!(display.starts_with("+44"));

    let service = LibPhoneNumber;
    let reparsed = service.parse(&display, None).expect("reparse display");
    assert_eq!(reparsed.national_number, "2079460958");
    assert_eq!(normalizer.canonical_value(), Some("+442079460958"));
}

#[test]
fn assigning_an_external_value_adopts_its_country() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.assign_external_value("+442079460958");

    assert_eq!(normalizer.selected_country().iso2, "gb");
    assert_eq!(normalizer.raw_text(), "2079460958");
    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(events.last(), Some(&NormalizerEvent::StateChanged));

    // The resolved country joins the preferred dropdown list.
    let preferred: Vec<&str> = normalizer
        .preferred_countries()
        .iter()
        .map(|country| country.iso2.as_str())
        .collect();
    assert_eq!(preferred, vec!["us", "gb"]);

    // Assigning the same value again must not duplicate the entry.
    normalizer.assign_external_value("+442079460958");
    assert_eq!(normalizer.preferred_countries().len(), 2);
}

#[test]
fn assigning_an_unparseable_value_keeps_it_verbatim() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let events = normalizer.assign_external_value("garbage");

    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert_eq!(normalizer.raw_text(), "garbage");
    assert_eq!(normalizer.canonical_value(), Some("garbage"));
    assert_eq!(normalizer.selected_country().iso2, "us");
}

#[test]
fn assigning_an_empty_value_is_a_no_op_by_default() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    normalizer.on_text_changed("2025551234");

    let events = normalizer.assign_external_value("");
    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert_eq!(normalizer.raw_text(), "2025551234");
}

#[test]
fn assigning_an_empty_value_resets_when_configured() {
    let options = NormalizerOptions {
        reset_on_empty_assign: true,
        ..options_with_preferred(&["us"])
    };
    let (mut normalizer, _) = init(options);
    normalizer.on_text_changed("2025551234");

    let events = normalizer.assign_external_value("");
    assert!(normalizer.is_empty());
    assert_eq!(normalizer.canonical_value(), None);
    assert!(events.contains(&NormalizerEvent::ValueChanged { value: None }));
}

#[test]
fn deferred_assignment_applies_the_country_on_settle() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let (events, pending) = normalizer.assign_external_value_deferred("+442079460958");

    // Nothing country-related happens until the host settles.
    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert_eq!(normalizer.selected_country().iso2, "us");
    assert_eq!(normalizer.preferred_countries().len(), 1);
    assert_eq!(normalizer.raw_text(), "2079460958");

    let pending = pending.expect("pending update");
    assert_eq!(pending.iso2(), "gb");
    let events = normalizer.apply_pending_update(pending);

    assert_eq!(normalizer.selected_country().iso2, "gb");
    assert_eq!(country_changes(&events), vec!["gb"]);
    assert_eq!(events.last(), Some(&NormalizerEvent::StateChanged));
    assert_eq!(normalizer.preferred_countries().len(), 2);
}

#[test]
fn set_format_re_renders_the_display_text() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    normalizer.on_text_changed("2025551234");

    let events = normalizer.set_format(FormatMode::International);
    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert!(normalizer.raw_text().starts_with("+1"));

    normalizer.set_format(FormatMode::Default);
    assert_eq!(normalizer.raw_text(), "2025551234");
}

#[test]
fn placeholders_come_from_example_numbers_when_enabled() {
    let options = NormalizerOptions {
        enable_placeholder: true,
        ..options_with_preferred(&["us"])
    };
    let (normalizer, _) = init(options);

    let placeholder = normalizer.placeholder().expect("us placeholder");
    assert!(!placeholder.is_empty());
}

#[test]
fn error_state_changes_emit_state_changed_once() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    let blurred = FormFieldState {
        focused: false,
        touched: false,
    };

    let events = normalizer.sync_error_state(blurred, true);
    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert!(normalizer.error_state());

    // Same inputs, no transition, no event.
    assert!(normalizer.sync_error_state(blurred, true).is_empty());

    let events = normalizer.sync_error_state(blurred, false);
    assert_eq!(events, vec![NormalizerEvent::StateChanged]);
    assert!(!normalizer.error_state());
}

#[test]
fn reset_emits_null_value_and_state_change() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    normalizer.on_text_changed("2025551234");

    let events = normalizer.reset();
    assert_eq!(
        events,
        vec![
            NormalizerEvent::ValueChanged { value: None },
            NormalizerEvent::StateChanged,
        ]
    );
    assert!(normalizer.is_empty());
    assert_eq!(normalizer.canonical_value(), None);
}

#[test]
fn disposal_silences_every_operation() {
    let (mut normalizer, _) = init(options_with_preferred(&["us"]));
    normalizer.dispose();
    assert!(normalizer.is_disposed());

    assert!(normalizer.on_text_changed("2025551234").is_empty());
    assert!(normalizer.reset().is_empty());
    assert!(normalizer.assign_external_value("+442079460958").is_empty());
    let gb = normalizer.resolve_country("gb");
    assert!(normalizer.select_country(&gb, None).is_empty());
    assert!(normalizer.is_empty());
}

#[test]
fn value_resolved_country_may_sit_outside_the_allow_list() {
    let options = NormalizerOptions {
        only_countries: vec!["us".to_string(), "fr".to_string()],
        ..NormalizerOptions::default()
    };
    let (mut normalizer, _) = init(options);
    normalizer.assign_external_value("+442079460958");

    assert_eq!(normalizer.selected_country().iso2, "gb");
    // The allow-filtered list itself is untouched.
    assert_eq!(normalizer.countries().len(), 2);
    // Plain lookups still answer from the filtered list only.
    assert!(normalizer.resolve_country("gb").is_unknown());
}
