use chrono::{TimeZone, Utc};
use hire_purchase_rs::{
    Decimal, FileStore, LoanRequest, Money, PlanBook, PlanRepository, Planner, PlannerConfig,
    Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;
use tempfile::tempdir;

fn clock() -> SafeTimeProvider {
    SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ))
}

fn file_planner(dir: &std::path::Path) -> Planner<PlanBook<FileStore>> {
    let config = PlannerConfig::default();
    let book = PlanBook::from_config(FileStore::new(dir), &config).unwrap();
    Planner::new(config, book).unwrap()
}

#[test]
fn plans_persist_across_sessions() {
    let dir = tempdir().unwrap();
    let time = clock();

    let saved = {
        let mut planner = file_planner(dir.path());
        planner
            .calculate(
                &LoanRequest::new(
                    "Refrigerator",
                    Money::from_major(45_000),
                    Money::from_major(5_000),
                    Rate::from_percent(dec!(14.5)),
                    18,
                ),
                &time,
            )
            .unwrap();
        planner.save_current(&time).unwrap().unwrap()
    };

    assert!(dir.path().join("quickEMIPlans.json").exists());

    let mut planner = file_planner(dir.path());
    let plans = planner.plans().unwrap();
    assert_eq!(plans, vec![saved.clone()]);

    let calc = &plans[0].calculation;
    assert_eq!(calc.schedule.len(), 18);
    assert_eq!(calc.schedule.last().unwrap().remaining_balance, Money::ZERO);

    assert!(planner.delete_plan(saved.id).unwrap());
    assert!(file_planner(dir.path()).plans().unwrap().is_empty());
}

#[test]
fn save_then_delete_restores_prior_document() {
    let dir = tempdir().unwrap();
    let time = clock();
    let mut planner = file_planner(dir.path());

    for (name, term) in [("Phone", 6), ("Laptop", 12)] {
        planner
            .calculate(
                &LoanRequest::new(
                    name,
                    Money::from_major(60_000),
                    Money::from_major(10_000),
                    Rate::from_percentage(18),
                    term,
                ),
                &time,
            )
            .unwrap();
        planner.save_current(&time).unwrap();
    }
    let before = planner.plans().unwrap();

    planner
        .calculate(
            &LoanRequest::new("Sofa", Money::from_major(30_000), Money::ZERO, Rate::ZERO, 10),
            &time,
        )
        .unwrap();
    let extra = planner.save_current(&time).unwrap().unwrap();
    assert_eq!(planner.plans().unwrap().len(), 3);

    planner.delete_plan(extra.id).unwrap();
    assert_eq!(planner.plans().unwrap(), before);
    assert_eq!(planner.repository().list_all().unwrap().len(), 2);
}

#[test]
fn zero_interest_plan_totals() {
    let dir = tempdir().unwrap();
    let mut planner = file_planner(dir.path());

    let result = planner
        .calculate(
            &LoanRequest::new("Desk", Money::from_major(5_000), Money::ZERO, Rate::ZERO, 5),
            &clock(),
        )
        .unwrap();

    assert_eq!(result.monthly_payment, Money::from_major(1_000));
    assert_eq!(result.total_interest, Money::ZERO);
    assert!(result.schedule.iter().all(|e| e.interest_component.as_decimal() == Decimal::ZERO));
}
