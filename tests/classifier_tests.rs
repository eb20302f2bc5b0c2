mod common;
use common::{artist, qc};
use prodmetrics::core::classifier::{
    AnomalyKind, AnomalyTally, Criteria, classify, is_high_time_vs_size, is_short_in_progress,
    is_spending_more_time, track,
};
use prodmetrics::models::{EmployeeType, JobRecord, Product};

#[test]
fn qc_short_threshold_is_strict() {
    assert!(!is_short_in_progress(&qc("q1", 2.0)));
    assert!(is_short_in_progress(&qc("q2", 1.99)));
}

#[test]
fn floorplan_short_threshold_is_inclusive() {
    assert!(is_short_in_progress(&artist("a1", Product::FloorplanQueue, 15.0, 100.0)));
    assert!(!is_short_in_progress(&artist("a2", Product::FloorplanQueue, 15.01, 100.0)));
}

#[test]
fn measurement_short_threshold_is_strict() {
    assert!(is_short_in_progress(&artist("m1", Product::MeasurementQueue, 4.99, 10.0)));
    assert!(!is_short_in_progress(&artist("m2", Product::MeasurementQueue, 5.0, 10.0)));
}

#[test]
fn catch_all_artist_branch_flags_zero_time() {
    let r = artist("u1", Product::UrbanAngles, 0.0, 0.0);
    assert!(is_short_in_progress(&r));
    assert_eq!(classify(&r), AnomalyKind::ShortInProgress);

    assert!(is_short_in_progress(&artist("u2", Product::AutocadQueue, 10.0, 0.0)));
    assert!(!is_short_in_progress(&artist("u3", Product::AutocadQueue, 10.01, 0.0)));
}

#[test]
fn unknown_product_uses_catch_all_branch() {
    let r = artist("x1", Product::Other("Drone Survey".into()), 8.0, 5.0);
    assert!(is_short_in_progress(&r));
}

#[test]
fn measurement_long_threshold_is_strict() {
    let at = artist("m3", Product::MeasurementQueue, 40.0, 100.0);
    let above = artist("m4", Product::MeasurementQueue, 40.01, 100.0);
    assert!(!is_spending_more_time(&at));
    assert!(is_spending_more_time(&above));
}

#[test]
fn artist_blanket_long_threshold_is_inclusive() {
    assert!(is_spending_more_time(&artist("f1", Product::FloorplanQueue, 150.0, 100.0)));
    assert!(!is_spending_more_time(&artist("f2", Product::FloorplanQueue, 149.99, 500.0)));
}

#[test]
fn qc_long_threshold_is_strict() {
    assert!(!is_spending_more_time(&qc("q3", 20.0)));
    assert!(is_spending_more_time(&qc("q4", 20.01)));
}

#[test]
fn high_time_vs_size_excludes_spending_more_time() {
    let r = artist("h1", Product::FloorplanQueue, 150.0, 100.0);
    assert!(r.time_minutes > r.area_sqm + 15.0);
    assert!(is_spending_more_time(&r));
    assert!(!is_high_time_vs_size(&r));
    assert_eq!(classify(&r), AnomalyKind::SpendingMoreTime);
}

#[test]
fn high_time_vs_size_boundary_is_strict() {
    assert!(!is_high_time_vs_size(&artist("h2", Product::AutocadQueue, 45.0, 30.0)));
    assert!(is_high_time_vs_size(&artist("h3", Product::AutocadQueue, 45.5, 30.0)));
    assert_eq!(
        classify(&artist("h4", Product::AutocadQueue, 90.0, 30.0)),
        AnomalyKind::HighTimeVsSize
    );
}

#[test]
fn qc_can_be_flagged_high_time_vs_size() {
    // 18 min on a 2 sqm job: not over the QC limit, but slow for its size.
    let r = qc("q5", 18.0).with_area(2.0);
    assert_eq!(classify(&r), AnomalyKind::HighTimeVsSize);
}

#[test]
fn other_employee_types_are_never_sip_or_smt() {
    let r = JobRecord::new("o1", "Olga")
        .with_employee_type(EmployeeType::Other("Trainee".into()))
        .with_product(Product::MeasurementQueue)
        .with_time(1.0);
    assert!(!is_short_in_progress(&r));
    assert!(!is_spending_more_time(&r));
    assert_eq!(classify(&r), AnomalyKind::Normal);

    let slow = r.clone().with_time(500.0);
    assert_eq!(classify(&slow), AnomalyKind::HighTimeVsSize);
}

#[test]
fn rules_are_disjoint_across_roles_products_and_times() {
    let roles = [
        EmployeeType::Artist,
        EmployeeType::Qc,
        EmployeeType::Other("Lead".into()),
    ];
    let mut products = Product::known().to_vec();
    products.push(Product::Other("New Queue".into()));

    for role in &roles {
        for product in &products {
            // 0..=300 minutes in quarter steps, against a few sizes.
            for step in 0..=1200 {
                let time = step as f64 * 0.25;
                for area in [0.0, 10.0, 100.0, 400.0] {
                    let r = JobRecord::new("g", "Grid")
                        .with_employee_type(role.clone())
                        .with_product(product.clone())
                        .with_time(time)
                        .with_area(area);

                    let hits = [
                        is_short_in_progress(&r),
                        is_spending_more_time(&r),
                        is_high_time_vs_size(&r),
                    ]
                    .iter()
                    .filter(|b| **b)
                    .count();
                    assert!(
                        !(is_short_in_progress(&r) && is_spending_more_time(&r)),
                        "SIP and SMT overlap for {role:?}/{product:?} at {time}"
                    );
                    assert!(
                        !(is_short_in_progress(&r) && is_high_time_vs_size(&r)),
                        "SIP and HTS overlap for {role:?}/{product:?} at {time}"
                    );
                    assert!(
                        !(is_spending_more_time(&r) && is_high_time_vs_size(&r)),
                        "SMT and HTS overlap for {role:?}/{product:?} at {time}"
                    );

                    assert!(hits <= 1);
                    let kind = classify(&r);
                    if hits == 0 {
                        assert_eq!(kind, AnomalyKind::Normal);
                    } else {
                        assert_ne!(kind, AnomalyKind::Normal);
                    }
                }
            }
        }
    }
}

fn sample() -> Vec<JobRecord> {
    vec![
        artist("s1", Product::FloorplanQueue, 12.0, 80.0),
        artist("s2", Product::FloorplanQueue, 60.0, 80.0),
        artist("s3", Product::MeasurementQueue, 45.0, 20.0),
        artist("s4", Product::AutocadQueue, 90.0, 30.0),
        qc("s5", 1.0),
        artist("s6", Product::UrbanAngles, 0.0, 10.0),
    ]
}

#[test]
fn track_returns_matching_subset_and_total() {
    let records = sample();

    let sip = track(&records, Criteria::ShortInProgress);
    let ids: Vec<&str> = sip.jobs.iter().map(|f| f.record.ticket_id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s5", "s6"]);
    assert_eq!(sip.total(), 3);

    assert_eq!(track(&records, Criteria::SpendingMoreTime).total(), 1);
    assert_eq!(track(&records, Criteria::HighTimeVsSize).total(), 1);
    assert_eq!(track(&records, Criteria::All).total(), records.len());
}

#[test]
fn track_on_empty_input_is_empty() {
    let result = track(&[], Criteria::ShortInProgress);
    assert_eq!(result.total(), 0);
    assert!(result.jobs.is_empty());
}

#[test]
fn tally_counts_every_record_once() {
    let records = sample();
    let tally = AnomalyTally::of(&records);
    assert_eq!(tally.short_in_progress, 3);
    assert_eq!(tally.spending_more_time, 1);
    assert_eq!(tally.high_time_vs_size, 1);
    assert_eq!(tally.normal, 1);
    assert_eq!(tally.flagged() + tally.normal, records.len());
}

#[test]
fn classification_is_idempotent() {
    let records = sample();
    let first: Vec<AnomalyKind> = records.iter().map(classify).collect();
    let second: Vec<AnomalyKind> = records.iter().map(classify).collect();
    assert_eq!(first, second);
    assert_eq!(
        track(&records, Criteria::HighTimeVsSize),
        track(&records, Criteria::HighTimeVsSize)
    );
}

#[test]
fn criteria_parse_from_dashboard_labels() {
    assert_eq!("Short IP".parse::<Criteria>().unwrap(), Criteria::ShortInProgress);
    assert_eq!("smt".parse::<Criteria>().unwrap(), Criteria::SpendingMoreTime);
    assert_eq!("High Time vs SQM".parse::<Criteria>().unwrap(), Criteria::HighTimeVsSize);
    assert_eq!("ALL".parse::<Criteria>().unwrap(), Criteria::All);
    assert!("fastest".parse::<Criteria>().is_err());
}
