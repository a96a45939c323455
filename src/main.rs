use colored::Colorize;
use failure::Error;
use ride_queue::config::{self, SystemConfig};
use ride_queue::park::{Ride, VisitorRecord};
use ride_queue::people::Visitor;
use std::env;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn heading(title: &str) {
    println!();
    println!("{}", title.bold().cyan());
}

fn print_queue(ride: &Ride) {
    if ride.queue().is_empty() {
        println!("{}", "Queue is empty".dimmed());
        return;
    }

    ride.queue()
        .peek_all()
        .enumerate()
        .for_each(|(position, visitor)| println!("{}. {}", position + 1, visitor));
}

fn print_history<'a, I: IntoIterator<Item = &'a Visitor>>(visitors: I) {
    visitors
        .into_iter()
        .for_each(|visitor| println!("  {} {} ({})", visitor.ticket_id().green(), visitor.display_name(), visitor.visit_date()));
}

fn run(config: SystemConfig) -> Result<(), Error> {
    config::validate_config(&config)?;

    let visitors: Vec<Visitor> = config.visitors.into_iter().map(Visitor::from).collect();
    let mut ride = Ride::from(config.ride);

    println!("{}", ride);

    heading("Queue");
    visitors.iter().cloned().for_each(|visitor| ride.add_visitor_to_queue(visitor));
    print_queue(&ride);

    match ride.remove_visitor_from_queue() {
        Ok(visitor) => println!("Removed {} from the queue", visitor.name().yellow()),
        Err(err) => println!("{}", err.to_string().red()),
    }
    print_queue(&ride);

    heading("History");
    if let Some(first) = visitors.first() {
        let added = ride.add_visitor_to_history(first.clone());
        println!("Added {} to history: {}", first.name(), added);
        println!("{} in history: {}", first.name(), ride.check_visitor_from_history(first));
    }
    println!("Visitors in history: {}", ride.number_of_visitors());

    heading("Cycles");
    let mut cycle = 0;
    loop {
        cycle += 1;

        let report = ride.run_one_cycle();
        println!("{}", format!("Cycle {}", cycle).bold());
        println!("{}", report);

        if report.remaining_in_queue == 0 {
            break;
        }
    }

    heading("History by insertion");
    print_history(ride.history());

    heading("History by name");
    print_history(ride.history().sorted_by_name());

    heading("History by date");
    print_history(ride.history().sorted_by_date());

    heading("Export");
    ride.export_history(&config.history_file)?;
    println!("Wrote {} entries to {}", ride.number_of_visitors(), config.history_file);

    heading("Import");
    let mut restored = Ride::new(ride.name(), ride.max_capacity(), ride.operator().cloned());
    let summary = restored.import_history(&config.history_file)?;
    println!(
        "Imported {} entries ({} already present, {} malformed)",
        summary.added.to_string().green(),
        summary.already_present,
        summary.malformed.to_string().red()
    );
    print_history(restored.history());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| format!("{}/config.json", env!("CARGO_MANIFEST_DIR")));

    let config = config::get_config(&path).unwrap_or_else(|err| {
        warn!(path = %path, error = %err, "cannot load config, using the sample park");

        SystemConfig::default()
    });

    info!(ride = %config.ride.name, visitors = config.visitors.len(), "starting");

    if let Err(err) = run(config) {
        eprintln!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
