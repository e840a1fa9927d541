// Report storage and dashboard wiring tests

use std::fs;
use std::path::PathBuf;

use prism::core::{ExplanationSet, LocalExplanation, Prediction};
use prism::dashboard;
use prism::storage::{self, Report};

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("prism-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

fn sample_report(input: &str) -> Report {
    let explanation = LocalExplanation {
        method: "occlusion".to_string(),
        text: input.to_string(),
        tokens: input.split_whitespace().map(String::from).collect(),
        scores: input.split_whitespace().map(|_| 0.25).collect(),
        target: 1,
        label: "positive".to_string(),
        confidence: 0.9,
        baseline: 0.9,
    };

    let mut explanations = ExplanationSet::new();
    explanations.insert("occlusion", vec![explanation]);

    Report::new(
        "classifier_q4f16".to_string(),
        vec!["negative".to_string(), "positive".to_string()],
        vec![input.to_string()],
        vec![Prediction::new(1, "positive", 0.9)],
        explanations,
    )
}

#[test]
fn report_round_trips_through_msgpack() {
    let dir = temp_dir("roundtrip");

    let report = sample_report("a perfectly fine film");
    let path = storage::save(&report, &dir).expect("Failed to save report");

    assert!(path.starts_with(dir.join(".prism")));

    let loaded = storage::load(&path).expect("Failed to load report");
    assert!(loaded.is_current_version());
    assert_eq!(loaded.inputs(), report.inputs());
    assert_eq!(loaded.predictions().len(), 1);
    assert_eq!(loaded.predictions()[0].label, "positive");

    let explanations = loaded.explanations().get("occlusion").unwrap();
    assert_eq!(explanations[0].tokens.len(), 4);
    assert_eq!(loaded.key().as_str(), report.key().as_str());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn same_run_overwrites_instead_of_accumulating() {
    let dir = temp_dir("overwrite");

    storage::save(&sample_report("same input"), &dir).expect("Failed to save report");
    storage::save(&sample_report("same input"), &dir).expect("Failed to save report");

    assert_eq!(storage::scan(&dir, false).len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn latest_picks_most_recent_report() {
    let dir = temp_dir("latest");

    storage::save(&sample_report("first run"), &dir).expect("Failed to save report");
    std::thread::sleep(std::time::Duration::from_millis(10));
    storage::save(&sample_report("second run"), &dir).expect("Failed to save report");

    let (_, report) = storage::latest(&dir, true).expect("Expected a latest report");
    assert_eq!(report.inputs(), &["second run".to_string()]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn scan_only_matches_reports_inside_prism_dirs() {
    let dir = temp_dir("scan");

    storage::save(&sample_report("real report"), &dir).expect("Failed to save report");

    // Stray files that must not be picked up
    fs::write(dir.join("stray.msgpack"), b"not a report").unwrap();
    fs::write(dir.join(".prism").join("notes.txt"), b"notes").unwrap();

    let found = storage::scan(&dir, false);
    assert_eq!(found.len(), 1);
    assert!(found[0].extension().and_then(|s| s.to_str()) == Some("msgpack"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn nested_reports_need_recursive_scan() {
    let dir = temp_dir("nested");
    let nested = dir.join("reviews");
    fs::create_dir_all(&nested).unwrap();

    storage::save(&sample_report("nested report"), &nested).expect("Failed to save report");

    assert!(storage::scan(&dir, false).is_empty());
    assert_eq!(storage::scan(&dir, true).len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dashboard_page_is_wired_to_the_report_api() {
    // The embedded page must fetch the same route the router serves
    assert!(dashboard::assets::INDEX_HTML.contains("/api/report"));

    let report = sample_report("dashboard input");
    let _ = dashboard::Dashboard::new(report);
}
