use daily_ledger::{config::Config, init, Ledger, Record, Result};

const CASH_LIMIT: f64 = 6000.0;
const CALORIE_LIMIT: f64 = 1700.0;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;

    let mut cash = Ledger::new(CASH_LIMIT);
    cash.add_record(Record::new(145.0, "Shopping spree", Some("15.02.2021"))?);
    cash.add_record(Record::new(5600.0, "Filling the grocery basket", None)?);
    cash.add_record(Record::new(691.0, "Taxi ride", Some("16.02.2021"))?);

    println!("{}", cash.week_stats());
    println!("{}", config.cash_report().today_cash_remained(&cash, "rub")?);

    let mut calories = Ledger::new(CALORIE_LIMIT);
    calories.add_record(Record::new(1200.0, "A piece of cake. And another one.", None)?);
    calories.add_record(Record::new(84.0, "Yogurt", None)?);
    calories.add_record(Record::new(1140.0, "A jar of chips.", Some("16.02.2021"))?);

    println!("{}", calories.today_stats());
    println!("{}", config.calorie_report().calories_remained(&calories));
    Ok(())
}
