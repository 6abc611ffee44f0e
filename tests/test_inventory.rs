use std::cell::RefCell;
use std::path::Path;

use phpcs_sniffs::inventory::{self, Stage};
use phpcs_sniffs::tool::phpcs::Phpcs;
use phpcs_sniffs::tool::runner::CommandRunner;
use phpcs_sniffs::Error;

/// Runner that answers `-i` and `--standard=... -e` with canned text and
/// records every argument list it receives.
struct FakeRunner {
    standards: Option<&'static str>,
    listing: Option<&'static str>,
    calls: RefCell<Vec<Vec<String>>>,
}

impl FakeRunner {
    fn new(standards: Option<&'static str>, listing: Option<&'static str>) -> Self {
        FakeRunner {
            standards,
            listing,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, _program: &Path, args: &[String]) -> Option<String> {
        self.calls.borrow_mut().push(args.to_vec());
        let reply = if args.first().map(String::as_str) == Some("-i") {
            self.standards
        } else {
            self.listing
        };
        reply.map(str::to_string)
    }
}

const STANDARDS: &str = "The installed coding standards are PEAR, PSR1, PSR2 and PSR12\n";
const LISTING: &str = "\
The PEAR, PSR1, PSR2 and PSR12 standards contain 3 sniffs

PSR1 (1 sniff)
--------------
  PSR1.Files.SideEffects *

PSR2 (2 sniffs)
---------------
  PSR2.Classes.ClassDeclaration
  PSR2.Classes.ClassDeclaration

Some unrelated header
";

#[test]
fn run_builds_the_catalog() {
    let runner = FakeRunner::new(Some(STANDARDS), Some(LISTING));
    let phpcs = Phpcs::new("/opt/phpcs", &runner);

    let inventory = inventory::run(&phpcs).unwrap();

    assert_eq!(inventory.phpcs, Path::new("/opt/phpcs"));
    let standards: Vec<&str> = inventory.standards.iter().map(|s| s.as_str()).collect();
    assert_eq!(standards, ["PEAR", "PSR1", "PSR2", "PSR12"]);

    let catalog = &inventory.catalog;
    assert_eq!(catalog.get("PSR2").unwrap().active, ["PSR2.Classes.ClassDeclaration"]);
    assert_eq!(catalog.get("PSR1").unwrap().deprecated, ["PSR1.Files.SideEffects"]);
    assert!(catalog.get("PEAR").unwrap().is_empty());
    assert!(catalog.get("PSR12").unwrap().is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&inventory.generated_at).is_ok());
}

#[test]
fn run_issues_discovery_then_listing() {
    let runner = FakeRunner::new(Some(STANDARDS), Some(LISTING));
    inventory::run(&Phpcs::new("phpcs", &runner)).unwrap();

    let calls = runner.calls.borrow();
    assert_eq!(
        *calls,
        vec![
            vec!["-i".to_string()],
            vec!["--standard=PEAR,PSR1,PSR2,PSR12".to_string(), "-e".to_string()],
        ]
    );
}

#[test]
fn no_discovery_output_is_no_standards_found() {
    let runner = FakeRunner::new(None, Some(LISTING));
    let err = inventory::run(&Phpcs::new("phpcs", &runner)).unwrap_err();

    assert!(matches!(err, Error::NoStandardsFound));
    assert_eq!(err.exit_code(), 2);
    // The listing is never requested.
    assert_eq!(runner.calls.borrow().len(), 1);
}

#[test]
fn discovery_naming_nothing_is_no_standards_found() {
    let runner = FakeRunner::new(Some("The installed coding standards are \n"), Some(LISTING));
    let err = inventory::run(&Phpcs::new("phpcs", &runner)).unwrap_err();
    assert!(matches!(err, Error::NoStandardsFound));
}

#[test]
fn no_listing_output_is_listing_failed() {
    let runner = FakeRunner::new(Some(STANDARDS), None);
    let err = inventory::run(&Phpcs::new("phpcs", &runner)).unwrap_err();

    match &err {
        Error::ListingFailed { standards } => assert_eq!(standards, "PEAR,PSR1,PSR2,PSR12"),
        other => panic!("expected ListingFailed, got {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn listing_without_sniffs_gives_empty_catalog() {
    let runner = FakeRunner::new(Some(STANDARDS), Some("No sniffs here\n"));
    let inventory = inventory::run(&Phpcs::new("phpcs", &runner)).unwrap();
    assert_eq!(inventory.catalog.len(), 4);
    assert_eq!(inventory.catalog.total_sniffs(), 0);
}

#[test]
fn discover_standards_only_runs_discovery() {
    let runner = FakeRunner::new(Some(STANDARDS), None);
    let standards = inventory::discover_standards(&Phpcs::new("phpcs", &runner)).unwrap();

    assert_eq!(standards.len(), 4);
    assert_eq!(runner.calls.borrow().len(), 1);
}

#[test]
fn single_installed_standard_builds_one_entry() {
    let runner = FakeRunner::new(
        Some("The only coding standard installed is PSR1\n"),
        Some(LISTING),
    );
    let inventory = inventory::run(&Phpcs::new("phpcs", &runner)).unwrap();

    let standards: Vec<&str> = inventory.catalog.standards().map(|s| s.as_str()).collect();
    assert_eq!(standards, ["PSR1"]);
    assert_eq!(inventory.catalog.total_sniffs(), 1);
    assert_eq!(runner.calls.borrow()[1][0], "--standard=PSR1");
}

#[test]
fn stages_display_as_kebab_case() {
    assert_eq!(Stage::Start.to_string(), "start");
    assert_eq!(Stage::StandardsDiscovered.to_string(), "standards-discovered");
    assert_eq!(Stage::Done.to_string(), "done");
}
