//! Integration tests for profile field extraction.

use unprofile::{extract_str, extract_str_with_options, ExtractOptions, SectionLabels};

#[test]
fn test_all_sections_present_all_fields_populated() {
    let record = extract_str(
        "# Jane Doe\n\
         ## About\n\
         Software engineer with ten years of experience.\n\
         ## Education\n\
         - State University (2015-2019)\n\
         - Community College (2013-2015)\n\
         ## Experience\n\
         Senior Engineer at Acme\n\
         Engineer at Widgets Inc\n\
         ## Projects\n\
         - unprofile\n",
    );

    assert!(record.name.is_some());
    assert!(record.about.is_some());
    assert!(!record.education.is_empty());
    assert!(!record.experience.is_empty());
    assert!(!record.projects.is_empty());
    assert_eq!(record.field_count(), 5);
}

#[test]
fn test_no_headings_yields_empty_record() {
    let record = extract_str("no structure here\njust prose across lines\n");
    assert!(record.name.is_none());
    assert!(record.about.is_none());
    assert!(record.education.is_empty());
    assert!(record.experience.is_empty());
    assert!(record.projects.is_empty());
}

#[test]
fn test_idempotent_extraction() {
    let text = "# Jane Doe\n## About\nEngineer.\n## Projects\n- a\n- b\n";
    assert_eq!(extract_str(text), extract_str(text));
}

#[test]
fn test_section_name_in_body_does_not_truncate() {
    // "Projects" appears as plain body text inside About; the About body must
    // keep running until the real next heading.
    let record = extract_str(
        "## About\n\
         I lead Projects\n\
         across several teams.\n\
         ## Projects\n\
         - real item\n",
    );

    assert_eq!(
        record.about.as_deref(),
        Some("I lead Projects across several teams.")
    );
    assert_eq!(record.projects, vec!["real item"]);
}

#[test]
fn test_overlong_marker_run_is_not_a_section() {
    // A line of hundreds of '#' characters is decoration, not a heading, no
    // matter how its length maps onto a narrow integer.
    let text = format!("{} About\nshould not be about\n", "#".repeat(258));
    let record = extract_str(&text);
    assert_eq!(record.about, None);
}

#[test]
fn test_heading_match_is_case_insensitive() {
    for heading in ["## about", "## About", "## ABOUT"] {
        let record = extract_str(&format!("{}\nEngineer.\n", heading));
        assert_eq!(record.about.as_deref(), Some("Engineer."), "heading {:?}", heading);
    }
}

#[test]
fn test_concrete_scenario_one() {
    let record = extract_str(
        "# Jane Doe\n## About\nSoftware engineer.\n## Education\n- State University (2015-2019)\n",
    );

    assert_eq!(record.name.as_deref(), Some("Jane Doe"));
    assert_eq!(record.about.as_deref(), Some("Software engineer."));
    assert_eq!(record.education, vec!["State University (2015-2019)"]);
    assert_eq!(record.experience, Vec::<String>::new());
    assert_eq!(record.projects, Vec::<String>::new());
}

#[test]
fn test_concrete_scenario_two_unbulleted_experience() {
    let record = extract_str(
        "## Experience\n   Senior Engineer at Acme  \nEngineer at Widgets Inc\n",
    );
    assert_eq!(
        record.experience,
        vec!["Senior Engineer at Acme", "Engineer at Widgets Inc"]
    );
}

#[test]
fn test_concrete_scenario_three_title_only() {
    let record = extract_str("# Jane Doe\n");
    assert_eq!(record.name.as_deref(), Some("Jane Doe"));
    assert!(record.about.is_none());
    assert!(record.education.is_empty());
    assert!(record.experience.is_empty());
    assert!(record.projects.is_empty());
}

#[test]
fn test_duplicate_section_first_wins() {
    let record = extract_str("## Education\n- first\n## Education\n- second\n");
    assert_eq!(record.education, vec!["first"]);
}

#[test]
fn test_malformed_bullets_are_skipped_not_fatal() {
    let record = extract_str(
        "## Projects\n\
         - good item\n\
         not an item\n\
         -nospace\n\
         - another good item\n",
    );
    assert_eq!(record.projects, vec!["good item", "another good item"]);
}

#[test]
fn test_truncated_input_never_panics() {
    for text in ["", "#", "##", "## ", "# \n##", "- ", "\u{2022}", "## About"] {
        let _ = extract_str(text);
    }
}

#[test]
fn test_custom_section_labels() {
    let options = ExtractOptions::new().with_labels(SectionLabels {
        about: "Summary".to_string(),
        education: "Schools".to_string(),
        ..SectionLabels::default()
    });

    let record = extract_str_with_options(
        "# Jane\n## Summary\nHello.\n## Schools\n- State University\n",
        &options,
    );
    assert_eq!(record.about.as_deref(), Some("Hello."));
    assert_eq!(record.education, vec!["State University"]);
}

#[test]
fn test_unicode_content_preserved() {
    let record = extract_str("# \u{674E}\u{660E}\n## About\nR\u{00E9}sum\u{00E9} of an engineer.\n");
    assert_eq!(record.name.as_deref(), Some("\u{674E}\u{660E}"));
    assert!(record.about.unwrap().contains("R\u{00E9}sum\u{00E9}"));
}
