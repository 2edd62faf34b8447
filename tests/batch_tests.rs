use chrono::{NaiveDate, NaiveDateTime};
use due_date_tool::{
    AppConfig, BatchSummary, DueDateCalculator, DueDateError, DueDateOutcome, DueDateRequest,
    calculate_batch, calculate_batch_in,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn batch_keeps_request_order_and_reports_errors() {
    let calc = DueDateCalculator::new();
    let requests = vec![
        DueDateRequest::new(1, at(2023, 10, 9, 9, 0), 9),
        DueDateRequest::new(2, at(2023, 10, 14, 10, 0), 2),
        DueDateRequest {
            id: 3,
            submitted_at: Some(at(2023, 10, 9, 11, 0)),
            turnaround_hours: None,
        },
        DueDateRequest {
            id: 4,
            submitted_at: None,
            turnaround_hours: Some(3),
        },
    ];

    let outcomes = calculate_batch(&calc, &requests);
    let ids: Vec<u32> = outcomes.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    assert_eq!(outcomes[0].due_at, Some(at(2023, 10, 10, 10, 0)));
    assert!(outcomes[0].error.is_none());
    assert_eq!(outcomes[1].error_kind(), Some(DueDateError::NotWorkingDay));
    assert_eq!(outcomes[2].error.as_deref(), Some("turnaround_time_missing"));
    assert_eq!(outcomes[3].error_kind(), Some(DueDateError::SubmitDateMissing));

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(
        summary,
        BatchSummary {
            total: 4,
            resolved: 1,
            rejected: 3
        }
    );
    assert_eq!(summary.to_summary_line(), "total=4, resolved=1, rejected=3");
}

#[test]
fn large_batch_matches_sequential_results() {
    let calc = DueDateCalculator::new();
    let requests: Vec<DueDateRequest> = (0..200u32)
        .map(|i| DueDateRequest::new(i, at(2023, 10, 9, 9 + i % 8, 0), u64::from(i)))
        .collect();

    let outcomes = calculate_batch(&calc, &requests);
    for (request, outcome) in requests.iter().zip(&outcomes) {
        let result = calc.calculate(request.submitted_at, request.turnaround_hours);
        let expected = DueDateOutcome::from_result(request, result);
        assert_eq!(outcome, &expected);
    }
}

#[test]
fn configured_pool_gives_same_outcomes() {
    let calc = DueDateCalculator::new();
    let requests: Vec<DueDateRequest> = (0..40u32)
        .map(|i| DueDateRequest::new(i, at(2023, 10, 10, 9 + i % 8, 15), u64::from(i * 3)))
        .collect();

    let config = AppConfig {
        verbose: false,
        batch_threads: 2,
    };
    let pool = config.build_thread_pool().expect("thread pool");
    assert_eq!(pool.current_num_threads(), 2);

    let pooled = calculate_batch_in(&pool, &calc, &requests);
    assert_eq!(pooled, calculate_batch(&calc, &requests));
}

#[test]
fn outcome_serializes_missing_fields_as_null() {
    let request = DueDateRequest {
        id: 7,
        submitted_at: None,
        turnaround_hours: Some(4),
    };
    let outcome = DueDateOutcome::from_result(&request, Err(DueDateError::SubmitDateMissing));
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["id"], 7);
    assert!(value["submitted_at"].is_null());
    assert!(value["due_at"].is_null());
    assert_eq!(value["error"], "submit_date_missing");
}

#[test]
fn empty_batch_yields_no_outcomes() {
    let calc = DueDateCalculator::new();
    let outcomes = calculate_batch(&calc, &[]);
    assert!(outcomes.is_empty());

    let summary = BatchSummary::from_outcomes(&outcomes);
    assert_eq!(summary.to_summary_line(), "total=0, resolved=0, rejected=0");
}
