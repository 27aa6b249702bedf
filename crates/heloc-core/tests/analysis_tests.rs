use chrono::NaiveDate;
use heloc_core::analysis::{analyze_heloc, FeeSchedule, HelocAnalysisInput};
use heloc_core::cache::{ScheduleCache, ScheduleKey};
use heloc_core::export::{schedule_to_csv, short_report, ReportInput};
use heloc_core::kpi::summarize;
use heloc_core::presets::list_presets;
use heloc_core::schedule::build_schedule;
use heloc_core::types::{DrawEvent, LoanTerms};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Full-calculator pipeline: analysis, exports, cache, presets
// ===========================================================================

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn form_input() -> HelocAnalysisInput {
    HelocAnalysisInput {
        terms: LoanTerms::new(dec!(50_000), dec!(8.5), dec!(10)),
        draws: Vec::new(),
        fees: FeeSchedule {
            application: dec!(100),
            appraisal: dec!(350),
            origination: dec!(500),
            annual: dec!(75),
            closing: dec!(1_200),
        },
        home_value: dec!(400_000),
        existing_loan: dec!(200_000),
        alternative_rate_pct: Some(dec!(28.0)),
    }
}

#[test]
fn test_analysis_end_to_end() {
    let out = analyze_heloc(&form_input(), as_of()).unwrap();
    let result = &out.result;

    assert_eq!(result.kpis.monthly_payment, dec!(619.93));
    assert_eq!(result.estimated_loan, dec!(250_000));
    assert_eq!(result.loan_to_value, dec!(0.625));
    assert_eq!(result.total_fees, dec!(2_225));
    assert_eq!(result.schedule.len(), 120);

    let cmp = result.comparison.as_ref().unwrap();
    // 28% vs 8.5% on the same line: both deltas are large and positive.
    assert!(cmp.payment_delta > dec!(500));
    assert!(cmp.interest_delta > dec!(50_000));
}

#[test]
fn test_analysis_with_draws_flows_through() {
    let mut input = form_input();
    input.draws = vec![
        DrawEvent {
            period_index: 11,
            amount: dec!(5_000),
        },
        DrawEvent {
            period_index: 11,
            amount: dec!(1_000),
        },
    ];
    let out = analyze_heloc(&input, as_of()).unwrap();
    assert_eq!(out.result.schedule[11].draw, dec!(6_000));

    let baseline = analyze_heloc(&form_input(), as_of()).unwrap();
    assert!(out.result.kpis.total_interest > baseline.result.kpis.total_interest);
}

#[test]
fn test_schedule_csv_round_trip_shape() {
    let out = analyze_heloc(&form_input(), as_of()).unwrap();
    let csv_text = schedule_to_csv(&out.result.schedule).unwrap();

    let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
    assert_eq!(
        rdr.headers().unwrap(),
        &csv::StringRecord::from(vec![
            "period",
            "date",
            "draw",
            "payment",
            "principal",
            "interest",
            "balance"
        ])
    );
    assert_eq!(rdr.records().count(), 120);
}

#[test]
fn test_short_report_from_kpis() {
    let out = analyze_heloc(&form_input(), as_of()).unwrap();
    let report = short_report(&ReportInput {
        as_of: as_of(),
        principal: dec!(50_000),
        annual_rate_pct: dec!(8.5),
        monthly_payment: out.result.kpis.monthly_payment,
        total_interest: out.result.kpis.total_interest,
    });
    assert!(report.contains("as of 2025-06-01"));
    assert!(report.contains("$619.93"));
    assert!(report.contains("8.50%"));
}

#[test]
fn test_presets_drive_the_full_pipeline() {
    for preset in list_presets() {
        let input = HelocAnalysisInput {
            terms: preset.terms.clone(),
            draws: Vec::new(),
            fees: FeeSchedule::default(),
            home_value: dec!(400_000),
            existing_loan: dec!(0),
            alternative_rate_pct: preset.alternative_rate_pct,
        };
        let out = analyze_heloc(&input, as_of()).unwrap();
        assert!(
            out.result.kpis.monthly_payment > Decimal::ZERO,
            "preset '{}' produced no payment",
            preset.name
        );
        assert!(!out.result.schedule.is_empty());
    }
}

#[test]
fn test_cache_matches_direct_computation() {
    let terms = LoanTerms::new(dec!(50_000), dec!(8.5), dec!(10));
    let draws = vec![DrawEvent {
        period_index: 5,
        amount: dec!(2_500),
    }];
    let mut cache = ScheduleCache::with_capacity(8);
    let key = ScheduleKey::new(&terms, &draws, as_of());

    let cached = cache
        .get_or_compute(key.clone(), || build_schedule(&terms, &draws, as_of()))
        .unwrap();
    let direct = build_schedule(&terms, &draws, as_of()).unwrap();
    assert_eq!(cached, direct);

    // Second lookup must not recompute; its result is byte-for-byte equal.
    let hit = cache
        .get_or_compute(key, || unreachable!("schedule must be cached"))
        .unwrap();
    assert_eq!(hit, direct);
    assert_eq!(summarize(&hit.periods), summarize(&direct.periods));
}
