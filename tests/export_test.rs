use std::fs;

use tempfile::NamedTempFile;

use wedding_budget_rs::export::{breakdown_to_csv, save_breakdown_csv};
use wedding_budget_rs::models::PlannerInput;
use wedding_budget_rs::planner::{derive_breakdown, CSV_FILE_NAME, CSV_MIME_TYPE};

#[test]
fn test_csv_matches_reference_breakdown() {
    let breakdown = derive_breakdown(&PlannerInput::default()).unwrap();
    let csv = breakdown_to_csv(&breakdown).unwrap();

    let expected = "\
Category,Amount
Church Fees,1000
Reception Venue,5000
Catering,17408
Bar (BYO),6750
Photography,3500
DJ / Entertainment,1300
Flowers & Decor,5000
Cake & Desserts,1020
Misc. & Extras,7000
";
    assert_eq!(csv, expected);
}

#[test]
fn test_csv_includes_videography_last() {
    let input = PlannerInput {
        add_video: true,
        video_cost: 2500,
        ..Default::default()
    };
    let breakdown = derive_breakdown(&input).unwrap();
    let csv = breakdown_to_csv(&breakdown).unwrap();
    assert_eq!(csv.lines().last(), Some("Videography,2500"));
}

#[test]
fn test_saved_file_matches_in_memory() {
    let breakdown = derive_breakdown(&PlannerInput::default()).unwrap();

    let file = NamedTempFile::new().unwrap();
    save_breakdown_csv(file.path(), &breakdown).unwrap();

    let written = fs::read_to_string(file.path()).unwrap();
    assert_eq!(written, breakdown_to_csv(&breakdown).unwrap());
}

#[test]
fn test_export_naming() {
    assert_eq!(CSV_FILE_NAME, "wedding_budget_breakdown.csv");
    assert_eq!(CSV_MIME_TYPE, "text/csv");
}
