/// quick start - calculate, save and delete a hire-purchase plan
use hire_purchase_rs::{
    LoanRequest, MemoryStore, Money, PlanBook, Planner, PlannerConfig, Rate, SafeTimeProvider,
    TimeSource,
};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let config = PlannerConfig::default();
    let book = PlanBook::from_config(MemoryStore::new(), &config)?;
    let mut planner = Planner::new(config, book)?;
    let time = SafeTimeProvider::new(TimeSource::System);

    let request = LoanRequest::new(
        "Motorcycle",
        Money::from_major(120_000),
        Money::from_major(20_000),
        Rate::from_percentage(12),
        24,
    );
    planner.calculate(&request, &time)?;

    if let Some(summary) = planner.summary_view() {
        println!("{}", summary.to_json_pretty()?);
    }
    if let Some(schedule) = planner.schedule_view() {
        println!("schedule ({}):", schedule.item_count);
        for row in schedule.rows.iter().take(3) {
            println!(
                "  #{:<3} {}  payment {}  principal {}  interest {}  balance {}",
                row.period_number, row.due_date, row.payment, row.principal, row.interest, row.balance
            );
        }
    }

    let saved = planner.save_current(&time)?.ok_or("nothing to save")?;
    println!("saved plans: {}", hire_purchase_rs::views::plan_count_label(planner.plans()?.len()));

    planner.delete_plan(saved.id)?;
    println!("saved plans: {}", hire_purchase_rs::views::plan_count_label(planner.plans()?.len()));

    for event in planner.take_events() {
        println!("event: {}", event.message());
    }

    Ok(())
}
