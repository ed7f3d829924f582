use std::path::PathBuf;
use std::process;

use bookkeeping_core::{
    config::{Config, ConfigManager},
    core::{Clock, FixedClock, SystemClock},
    domain::{BudgetTier, ClientScope, FlowKind, PaymentStatus, Urgency},
    init,
    ledger::seeded_store,
    report::DashboardReport,
    LedgerError,
};
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

const USAGE: &str = "\
Usage: bookkeeping_report [OPTIONS]

Prints the dashboard report for the demonstration book.

Options:
  --client <id>        Restrict record sections to one client (default: all)
  --date <YYYY-MM-DD>  Report as of this day (default: today, UTC)
  --config <path>      Read settings from this JSON file
  --json               Emit the report as JSON
  -h, --help           Show this message";

#[derive(Debug, Default)]
struct Options {
    scope: ClientScope,
    date: Option<NaiveDate>,
    config: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), LedgerError> {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            process::exit(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(options.config.as_ref())?;
    let clock: Box<dyn Clock> = match options.date {
        Some(date) => Box::new(FixedClock::on(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();
    let store = seeded_store(clock)?;
    let report = DashboardReport::build(&store, &config, &options.scope, today);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report, &config);
    }
    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "-h" | "--help" => options.help = true,
            "--client" => {
                let value = args.next().ok_or("--client needs a client id")?;
                options.scope = ClientScope::from(value);
            }
            "--date" => {
                let value = args.next().ok_or("--date needs a YYYY-MM-DD value")?;
                let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| format!("invalid date `{value}`; expected YYYY-MM-DD"))?;
                options.date = Some(date);
            }
            "--config" => {
                let value = args.next().ok_or("--config needs a file path")?;
                options.config = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(options)
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, LedgerError> {
    match path {
        Some(path) => ConfigManager::new(path).load(),
        None => match ConfigManager::default_location() {
            Ok(manager) => manager.load(),
            Err(err) => {
                tracing::warn!(%err, "falling back to default settings");
                Ok(Config::default())
            }
        },
    }
}

fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

fn money(config: &Config, amount: impl std::fmt::Display) -> String {
    format!("{} {:.2}", config.currency, amount)
}

fn print_text(report: &DashboardReport, config: &Config) {
    println!(
        "Dashboard for {} on {}",
        report.scope.to_string().bold(),
        report.date
    );

    section("Cash flow");
    println!("Inflow:  {}", money(config, report.totals.inflow).bright_green());
    println!("Outflow: {}", money(config, report.totals.outflow).bright_red());
    let net = money(config, report.totals.net);
    if report.totals.net.is_sign_negative() {
        println!("Net:     {}", net.bright_red());
    } else {
        println!("Net:     {}", net.bright_green());
    }
    for line in &report.cash_flow {
        let sign = match line.kind {
            FlowKind::Inflow => "+",
            FlowKind::Outflow => "-",
        };
        println!(
            "  {} {}{} {} [{}] ({}, {})",
            line.date,
            sign,
            money(config, line.amount),
            line.description,
            line.category,
            line.client_name,
            line.status
        );
    }

    section("Expenses");
    println!(
        "Total {}; {} paid, {} pending, {} overdue",
        money(config, report.expense_overview.total),
        report.expense_overview.paid,
        report.expense_overview.pending,
        report.expense_overview.overdue
    );
    for line in &report.expenses {
        let status = match line.status {
            PaymentStatus::Paid => line.status.to_string().bright_green(),
            PaymentStatus::Pending => line.status.to_string().bright_yellow(),
            PaymentStatus::Overdue => line.status.to_string().bright_red(),
        };
        println!(
            "  {} {} {} [{}] ({}) {}",
            line.date,
            money(config, line.amount),
            line.description,
            line.category,
            line.client_name,
            status
        );
    }

    section("Budgets");
    for row in &report.budgets {
        println!(
            "  {:<14} {} / {} {}",
            row.category,
            money(config, row.spent),
            money(config, row.limit),
            tier_label(row.tier, format!("{:.1}%", row.percent))
        );
    }

    section("Executive summary");
    let summary = &report.executive_summary;
    println!("Active clients:        {}", summary.active_client_count);
    println!(
        "Average fee (active):  {}",
        summary
            .average_revenue_per_active_client
            .value()
            .map(|value| money(config, value))
            .unwrap_or_else(|| "N/A".to_string())
    );
    println!("Profit margin:         {:.1}%", summary.profit_margin);
    println!(
        "Clients: {} total, {} active, {} pending, {} inactive ({:.1}% active)",
        report.roster.total,
        report.roster.active,
        report.roster.pending,
        report.roster.inactive,
        report.roster.active_share
    );

    section("Revenue by client");
    for share in &report.revenue_share {
        println!(
            "  {:<24} {} ({:.1}%)",
            share.name,
            money(config, share.amount),
            share.percent
        );
    }

    section("Monthly performance");
    for month in &report.monthly_performance {
        println!(
            "  {} revenue {} expenses {} profit {} margin {:.1}%",
            month.month,
            money(config, month.revenue),
            money(config, month.expenses),
            money(config, month.profit),
            month.margin
        );
    }

    section("Tax calendar");
    for profile in &report.tax_profiles {
        let due = profile
            .next_tax_due
            .map(|date| date.to_string())
            .unwrap_or_else(|| "To be defined".to_string());
        println!(
            "  {:<24} {} due {} monthly {}",
            profile.name,
            profile.regime.as_deref().unwrap_or("To be defined"),
            due,
            money(config, profile.total)
        );
    }

    section("Upcoming obligations");
    if report.upcoming_obligations.is_empty() {
        println!("  Nothing due.");
    }
    for obligation in &report.upcoming_obligations {
        println!(
            "  {} {} {} {}",
            obligation.due_date,
            urgency_label(obligation.priority),
            money(config, obligation.amount),
            obligation.description
        );
    }
    println!("Total due: {}", money(config, report.obligations_total));
    println!("Due today: {}", report.due_today.len());
}

fn tier_label(tier: BudgetTier, text: String) -> ColoredString {
    match tier {
        BudgetTier::Success => text.bright_green(),
        BudgetTier::Warning => text.bright_yellow(),
        BudgetTier::Danger => text.bright_red(),
    }
}

fn urgency_label(urgency: Urgency) -> ColoredString {
    let text = format!("{:<6}", urgency.to_string());
    match urgency {
        Urgency::High => text.bright_red(),
        Urgency::Medium => text.bright_yellow(),
        Urgency::Low => text.normal(),
    }
}
