use phpcs_sniffs::standard::{join_standards, parse_installed_standards, StandardName};

fn names(text: &str) -> Vec<String> {
    parse_installed_standards(text)
        .into_iter()
        .map(|s| s.as_str().to_string())
        .collect()
}

fn standards(list: &[&str]) -> Vec<StandardName> {
    list.iter().map(|s| StandardName::new(s).unwrap()).collect()
}

// ── discovery sentence ────────────────────────────────────────────────────────

#[test]
fn commas_and_final_and_are_both_separators() {
    assert_eq!(
        names("The installed coding standards are A, B and C"),
        ["A", "B", "C"]
    );
}

#[test]
fn single_standard() {
    assert_eq!(names("The installed coding standards are PSR12"), ["PSR12"]);
}

#[test]
fn only_installed_standard_sentence() {
    assert_eq!(
        names("The only coding standard installed is PSR12\n"),
        ["PSR12"]
    );
}

#[test]
fn only_and_separator() {
    assert_eq!(names("The installed coding standards are PEAR and PSR2"), ["PEAR", "PSR2"]);
}

#[test]
fn only_comma_separator() {
    assert_eq!(
        names("The installed coding standards are PEAR, PSR1, PSR2"),
        ["PEAR", "PSR1", "PSR2"]
    );
}

#[test]
fn real_phpcs_output_with_trailing_newline() {
    assert_eq!(
        names("The installed coding standards are MySource, PEAR, PSR1, PSR2, PSR12, Squiz and Zend\n"),
        ["MySource", "PEAR", "PSR1", "PSR2", "PSR12", "Squiz", "Zend"]
    );
}

#[test]
fn discovery_order_is_preserved() {
    assert_eq!(
        names("The installed coding standards are Zend, PSR12, Generic and PEAR"),
        ["Zend", "PSR12", "Generic", "PEAR"]
    );
}

#[test]
fn only_first_are_starts_the_list() {
    assert_eq!(
        names("Standards that are installed are X and Y"),
        ["installed are X", "Y"]
    );
}

#[test]
fn empty_tokens_are_dropped() {
    assert_eq!(names("The installed coding standards are A, , B and C, "), ["A", "B", "C"]);
}

#[test]
fn repeated_standards_are_kept_once() {
    assert_eq!(names("The installed coding standards are A, B and A"), ["A", "B"]);
}

#[test]
fn without_are_text_is_read_as_comma_list() {
    assert_eq!(names("PEAR,PSR1, PSR12"), ["PEAR", "PSR1", "PSR12"]);
}

#[test]
fn blank_output_yields_no_standards() {
    assert!(names("  \n").is_empty());
    assert!(names("The installed coding standards are ").is_empty());
}

// ── StandardName ──────────────────────────────────────────────────────────────

#[test]
fn standard_name_rejects_blank() {
    assert!(StandardName::new("").is_none());
    assert!(StandardName::new(" \t").is_none());
}

#[test]
fn standard_name_trims() {
    let name = StandardName::new("  Squiz\n").unwrap();
    assert_eq!(name.as_str(), "Squiz");
    assert_eq!(name.to_string(), "Squiz");
    assert_eq!(name.sniff_prefix(), "Squiz.");
}

#[test]
fn owns_requires_the_dot() {
    let psr1 = StandardName::new("PSR1").unwrap();
    assert!(psr1.owns("PSR1.Files.SideEffects"));
    assert!(psr1.owns("PSR1.Files.SideEffects *"));
    assert!(!psr1.owns("PSR12.Files.FileHeader"));
    assert!(!psr1.owns("PSR1"));
    assert!(!psr1.owns("psr1.Files.SideEffects"));
}

#[test]
fn join_uses_plain_commas() {
    assert_eq!(join_standards(&standards(&["PEAR", "PSR1", "PSR12"])), "PEAR,PSR1,PSR12");
    assert_eq!(join_standards(&[]), "");
}
