mod common;

use common::{first_steps_level, level_from_rows};
use kodaventyret::builtin_levels;
use kodaventyret::validator::{validate_all, validate_level, Outcome};

#[test]
fn test_correct_metadata_is_optimal() {
    let report = validate_level(&first_steps_level());
    assert_eq!(report.outcome, Outcome::Optimal { moves: 4 });
    assert_eq!(report.shortest_moves(), Some(4));
}

#[test]
fn test_recorded_too_high_is_flagged() {
    // Two moves home, five recorded
    let level = level_from_rows(&["P P H", "G G G", "G G G"], (0, 0), (2, 0), 5);
    let report = validate_level(&level);

    assert_eq!(
        report.outcome,
        Outcome::RecordedTooHigh {
            shortest: 2,
            recorded: 5
        }
    );
    assert!(report.outcome.is_metadata_mismatch());
    assert!(report.outcome.is_solvable());
}

#[test]
fn test_recorded_below_shortest_is_flagged() {
    let level = level_from_rows(&["P P H", "G G G", "G G G"], (0, 0), (2, 0), 1);
    let report = validate_level(&level);

    assert_eq!(
        report.outcome,
        Outcome::RecordedBelowShortest {
            shortest: 2,
            recorded: 1
        }
    );
    assert!(report.outcome.is_metadata_mismatch());
}

#[test]
fn test_unsolvable_does_not_stop_the_rest() {
    let broken = level_from_rows(&["P G H", "P G G", "P G G"], (0, 2), (2, 0), 4);
    let mut fine = first_steps_level();
    fine.id = 2;
    let before = vec![broken, fine];
    let levels = before.clone();

    let summary = validate_all(&levels);

    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.reports[0].outcome, Outcome::Unsolvable);
    assert_eq!(summary.reports[0].path, None);
    assert_eq!(summary.reports[1].outcome, Outcome::Optimal { moves: 4 });
    assert!(!summary.all_solvable());
    assert_eq!(summary.unsolvable().count(), 1);

    // Diagnostics only; the levels are untouched
    assert_eq!(levels, before);
}

#[test]
fn test_builtin_levels() {
    let levels = builtin_levels().unwrap();
    let summary = validate_all(&levels);

    for report in &summary.reports {
        println!("Level {} ({}): {:?}", report.level_id, report.name, report.outcome);
    }

    assert!(summary.all_solvable());

    // Level 6 records 7 moves, but the only way home takes 8
    let mismatches: Vec<_> = summary.metadata_mismatches().collect();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].level_id, 6);
    assert_eq!(
        mismatches[0].outcome,
        Outcome::RecordedBelowShortest {
            shortest: 8,
            recorded: 7
        }
    );

    let expected = [4, 4, 6, 6, 6, 8, 8, 8, 8, 8];
    let actual: Vec<usize> = summary
        .reports
        .iter()
        .map(|r| r.shortest_moves().unwrap())
        .collect();
    assert_eq!(actual, expected);
}
