use pretty_assertions::assert_eq;
use trace_timings::aggregator::{
    reconstruct, summarize, AggregateStat, Duration, SortBy, SummaryConfig, SummaryRow,
};
use trace_timings::parser::{Phase, RawEvent};

fn durations(items: &[(&str, f64)]) -> Vec<Duration> {
    items.iter().map(|(n, d)| Duration::new(*n, *d)).collect()
}

fn names(rows: &[SummaryRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_pairing_is_last_opened_first_closed() {
    let events = vec![
        RawEvent::begin("A", 100.0, 7),
        RawEvent::begin("A", 120.0, 7),
        RawEvent::end("A", 150.0, 7),
        RawEvent::end("A", 400.0, 7),
    ];

    assert_eq!(
        reconstruct(&events),
        vec![Duration::new("A", 30.0), Duration::new("A", 300.0)]
    );
}

#[test]
fn test_orphan_end_does_not_disturb_other_keys() {
    let events = vec![
        RawEvent::begin("B", 0.0, 1),
        RawEvent::end("A", 5.0, 1),
        RawEvent::end("B", 5.0, 2),
        RawEvent::end("B", 9.0, 1),
    ];

    assert_eq!(reconstruct(&events), vec![Duration::new("B", 9.0)]);
}

#[test]
fn test_unknown_phase_is_noop() {
    let events = vec![
        RawEvent::begin("A", 0.0, 0),
        RawEvent::new("A", Phase::Other, 3.0, 0),
        RawEvent::end("A", 10.0, 0),
        RawEvent::new("A", Phase::Other, 11.0, 0),
    ];

    assert_eq!(reconstruct(&events), vec![Duration::new("A", 10.0)]);
}

#[test]
fn test_output_follows_end_order() {
    let events = vec![
        RawEvent::begin("outer", 0.0, 0),
        RawEvent::begin("inner", 1.0, 0),
        RawEvent::end("inner", 2.0, 0),
        RawEvent::end("outer", 10.0, 0),
    ];

    assert_eq!(
        reconstruct(&events),
        vec![Duration::new("inner", 1.0), Duration::new("outer", 10.0)]
    );
}

#[test]
fn test_unclosed_begins_are_discarded() {
    let events = vec![RawEvent::begin("A", 0.0, 0), RawEvent::begin("B", 0.0, 0)];

    assert!(reconstruct(&events).is_empty());
}

#[test]
fn test_aggregation_sums_count_and_total() {
    let rows = summarize(
        &durations(&[("A", 3.0), ("B", 10.0), ("A", 4.0), ("A", 5.0)]),
        &SummaryConfig::default(),
    );

    assert_eq!(
        rows,
        vec![
            SummaryRow::new("A", AggregateStat::new(3, 12.0)),
            SummaryRow::new("B", AggregateStat::new(1, 10.0)),
        ]
    );
}

#[test]
fn test_filter_composition() {
    let input = durations(&[("parse", 5000.0), ("compile", 50.0), ("parse_extra", 200.0)]);

    let by_name = SummaryConfig {
        name_contains: "parse".to_string(),
        ..Default::default()
    };
    assert_eq!(names(&summarize(&input, &by_name)), vec!["parse", "parse_extra"]);

    let with_min = SummaryConfig {
        min_total: 1000.0,
        ..by_name
    };
    assert_eq!(names(&summarize(&input, &with_min)), vec!["parse"]);
}

#[test]
fn test_name_filter_is_literal() {
    let input = durations(&[("a.b", 1.0), ("axb", 1.0)]);
    let config = SummaryConfig {
        name_contains: "a.b".to_string(),
        ..Default::default()
    };

    assert_eq!(names(&summarize(&input, &config)), vec!["a.b"]);
}

#[test]
fn test_truncation_keeps_highest_ranked() {
    let input = durations(&[("a", 10.0), ("b", 50.0), ("c", 30.0), ("d", 40.0), ("e", 20.0)]);
    let config = SummaryConfig {
        top: 3,
        ..Default::default()
    };

    assert_eq!(names(&summarize(&input, &config)), vec!["b", "d", "c"]);
}

#[test]
fn test_top_zero_is_empty() {
    let config = SummaryConfig {
        top: 0,
        ..Default::default()
    };

    assert!(summarize(&durations(&[("a", 1.0)]), &config).is_empty());
}

#[test]
fn test_min_total_applies_before_truncation() {
    let input = durations(&[("big", 900.0), ("small", 5.0), ("mid", 500.0)]);
    let config = SummaryConfig {
        min_total: 100.0,
        top: 2,
        ..Default::default()
    };

    assert_eq!(names(&summarize(&input, &config)), vec!["big", "mid"]);
}

#[test]
fn test_sort_by_count_descending() {
    let input = durations(&[("a", 100.0), ("b", 1.0), ("b", 1.0), ("c", 1.0), ("c", 1.0), ("c", 1.0)]);
    let config = SummaryConfig {
        sort_by: SortBy::Count,
        ..Default::default()
    };

    assert_eq!(names(&summarize(&input, &config)), vec!["c", "b", "a"]);
}

#[test]
fn test_sort_by_name_ascending_case_insensitive() {
    let input = durations(&[("delta", 1.0), ("Charlie", 9.0), ("bravo", 5.0), ("Alpha", 2.0)]);
    let config = SummaryConfig {
        sort_by: SortBy::Name,
        ..Default::default()
    };

    assert_eq!(
        names(&summarize(&input, &config)),
        vec!["Alpha", "bravo", "Charlie", "delta"]
    );
}

#[test]
fn test_ties_keep_encounter_order() {
    let input = durations(&[("z", 10.0), ("a", 10.0), ("m", 10.0), ("q", 20.0)]);

    let by_total = summarize(&input, &SummaryConfig::default());
    assert_eq!(names(&by_total), vec!["q", "z", "a", "m"]);

    let by_count = SummaryConfig {
        sort_by: SortBy::Count,
        ..Default::default()
    };
    assert_eq!(names(&summarize(&input, &by_count)), vec!["z", "a", "m", "q"]);
}

#[test]
fn test_summarize_is_deterministic() {
    let events: Vec<RawEvent> = (0..50)
        .flat_map(|i| {
            let name = format!("event_{}", i % 7);
            vec![
                RawEvent::begin(name.clone(), (i * 10) as f64, i % 3),
                RawEvent::end(name, (i * 10 + (i % 4) * 5) as f64, i % 3),
            ]
        })
        .collect();
    let config = SummaryConfig {
        top: 5,
        ..Default::default()
    };

    let first = summarize(&reconstruct(&events), &config);
    for _ in 0..10 {
        assert_eq!(summarize(&reconstruct(&events), &config), first);
    }
}
