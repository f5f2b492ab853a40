//! Integration tests for validator-rank
//!
//! Exercise the public library API end to end: parse raw JSON, score,
//! select and render.

use validator_rank::{
    RankError, ValidatorRecord, parse_records, rank_all, report, sample, score, select_best,
};

const SAMPLE_JSON: &str = r#"[
    {"address": "0xValidator1", "uptime": 95, "reputation": 85, "performance": 90},
    {"address": "0xValidator2", "uptime": 89, "reputation": 80, "performance": 92},
    {"address": "0xValidator3", "uptime": 97, "reputation": 78, "performance": 88}
]"#;

#[test]
fn test_json_input_matches_builtin_sample() {
    let parsed = parse_records(SAMPLE_JSON).unwrap();
    assert_eq!(parsed, sample::validators());
}

#[test]
fn test_end_to_end_selection() {
    let validators = parse_records(SAMPLE_JSON).unwrap();
    let best = select_best(&validators).unwrap();

    assert_eq!(best.address(), "0xValidator1");
    let line = report::selection_line(&best);
    assert!(line.contains("0xValidator1"), "line was: {}", line);
    assert!(line.contains("90.50"), "line was: {}", line);
}

#[test]
fn test_sample_scores() {
    let totals: Vec<f64> = sample::validators().iter().map(|v| score(v).total).collect();
    let expected = [90.5, 87.2, 88.6];
    for (got, want) in totals.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "got {}, want {}", got, want);
    }
}

#[test]
fn test_empty_input_is_invalid() {
    let validators = parse_records("[]").unwrap();
    let err = select_best(&validators).unwrap_err();
    assert!(matches!(err, RankError::InvalidInput(_)));
    assert!(matches!(rank_all(&validators), Err(RankError::InvalidInput(_))));
}

#[test]
fn test_malformed_record_is_invalid() {
    let json = r#"[
        {"address": "0xA", "uptime": 50, "reputation": 50, "performance": 50},
        {"address": "0xB", "uptime": "high", "reputation": 50, "performance": 50}
    ]"#;
    match parse_records(json) {
        Err(RankError::InvalidInput(msg)) => {
            assert!(msg.contains("record 1"), "message was: {}", msg);
            assert!(msg.contains("uptime"), "message was: {}", msg);
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn test_single_record_always_selected() {
    for (u, r, p) in [(0.0, 0.0, 0.0), (100.0, 100.0, 100.0), (33.3, 66.6, 99.9)] {
        let validators = vec![ValidatorRecord::new("0xSolo", u, r, p).unwrap()];
        let best = select_best(&validators).unwrap();
        assert_eq!(best.record, &validators[0]);
        assert_eq!(best.position, 0);
    }
}

#[test]
fn test_selected_score_dominates() {
    // Deterministic spread of metrics
    let validators: Vec<ValidatorRecord> = (0..50)
        .map(|i| {
            let f = i as f64;
            ValidatorRecord::new(
                format!("0x{:02}", i),
                (f * 37.0) % 101.0,
                (f * 53.0) % 101.0,
                (f * 71.0) % 101.0,
            )
            .unwrap()
        })
        .collect();

    let best = select_best(&validators).unwrap();
    for v in &validators {
        assert!(best.total() >= score(v).total);
    }

    let ranked = rank_all(&validators).unwrap();
    assert_eq!(ranked.len(), validators.len());
    assert_eq!(ranked[0], best);
    assert!(ranked.windows(2).all(|w| w[0].total() >= w[1].total()));
}

#[test]
fn test_deterministic_output() {
    let a = parse_records(SAMPLE_JSON).unwrap();
    let b = parse_records(SAMPLE_JSON).unwrap();
    let ra = report::ranking_table(&rank_all(&a).unwrap());
    let rb = report::ranking_table(&rank_all(&b).unwrap());
    assert_eq!(ra, rb);
}

#[test]
fn test_negative_zero_ties_with_zero() {
    let json = r#"[
        {"address": "0xFirst", "uptime": -0.0, "reputation": -0.0, "performance": -0.0},
        {"address": "0xSecond", "uptime": 0, "reputation": 0, "performance": 0}
    ]"#;
    let validators = parse_records(json).unwrap();
    let best = select_best(&validators).unwrap();
    let ranked = rank_all(&validators).unwrap();

    assert_eq!(best.address(), "0xFirst");
    assert_eq!(ranked[0], best);
    assert_eq!(ranked[1].address(), "0xSecond");
}
