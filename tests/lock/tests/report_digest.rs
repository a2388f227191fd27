//! Search report digests: stable in-process, bound to their basis.

use lock_tests::boards;
use octile_harness::policy::RunConfig;
use octile_harness::report::{RunStatus, SearchReport, REPORT_SCHEMA_VERSION};
use octile_harness::runner::{compare, run, run_stepwise};
use octile_kernel::proof::canon::canonical_json_bytes;
use octile_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use octile_search::policy::Strategy;

#[test]
fn same_input_same_digest() {
    for board in boards::ALL {
        for strategy in Strategy::ALL {
            let config = RunConfig::with_strategy(strategy);
            let a = run(board.state(), &config).unwrap();
            let b = run(board.state(), &config).unwrap();
            assert_eq!(a.digest, b.digest, "{} / {strategy}", board.name);
            assert_eq!(a.digest_basis(), b.digest_basis());
        }
    }
}

#[test]
fn digest_is_hash_of_canonical_basis() {
    let report = run(boards::THREE_MOVES.state(), &RunConfig::default()).unwrap();
    let bytes = canonical_json_bytes(&report.digest_basis()).unwrap();
    let expected = canonical_hash(HashDomain::SearchReport, &bytes);
    assert_eq!(report.digest, expected.as_str());

    let parsed = ContentHash::parse(&report.digest).unwrap();
    assert_eq!(parsed.algorithm(), "sha256");
    assert_eq!(parsed.hex_digest().len(), 64);
}

#[test]
fn basis_excludes_wall_clock() {
    let report = run(boards::SIX_MOVES.state(), &RunConfig::default()).unwrap();
    let basis = report.digest_basis();
    assert!(basis.get("execution_time_us").is_none());
    assert!(basis.get("digest").is_none());
    assert_eq!(basis["schema_version"], REPORT_SCHEMA_VERSION);
    assert_eq!(basis["strategy"], "astar");
}

#[test]
fn different_boards_give_different_digests() {
    let a = run(boards::CENTRE_BLANK.state(), &RunConfig::default()).unwrap();
    let b = run(boards::TWO_MOVES.state(), &RunConfig::default()).unwrap();
    assert_ne!(a.digest, b.digest);
}

#[test]
fn stepwise_report_without_frames_matches_counters_but_not_digest() {
    // Steps are part of the basis, so a stepped run is a different record.
    let config = RunConfig::with_strategy(Strategy::AStar);
    let direct = run(boards::SIX_MOVES.state(), &config).unwrap();
    let stepped = run_stepwise(boards::SIX_MOVES.state(), &config).unwrap();
    assert_eq!(direct.path, stepped.path);
    assert_eq!(direct.generated_nodes, stepped.generated_nodes);
    assert_eq!(direct.steps, 0);
    assert_eq!(stepped.steps, 12);
    assert_ne!(direct.digest, stepped.digest);
}

#[test]
fn frames_are_committed_through_frames_digest() {
    let config = RunConfig {
        strategy: Strategy::BreadthFirst,
        step_budget: None,
        record_frames: true,
    };
    let report = run(boards::CENTRE_BLANK.state(), &config).unwrap();
    assert_eq!(report.status, RunStatus::Solved);
    let frames = report.frames.as_ref().unwrap();
    assert_eq!(frames.len() as u64, report.open_nodes);
    assert!(report.frames_digest.as_deref().is_some_and(|d| d.starts_with("sha256:")));

    let mut tampered = report.clone();
    tampered.frames_digest = Some("sha256:00".into());
    assert!(!tampered.verify_digest());
}

#[test]
fn json_report_survives_a_round_trip() {
    let reports = compare(boards::SIX_MOVES.state()).unwrap();
    for report in reports {
        let text = serde_json::to_string(&report).unwrap();
        let back: SearchReport = serde_json::from_str(&text).unwrap();
        assert!(back.verify_digest(), "{}", report.strategy);
        assert_eq!(back, report);
    }
}
