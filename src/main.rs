//! Thin CLI driver for the booking simulator.
//!
//! All it does is parse arguments, run the simulation, and render the final
//! report as a table. Everything of substance lives in the library; this
//! binary maps `SimError` to a non-zero exit code and formats output.

use std::process::ExitCode;

use tracing::info;

use box_office::config::SimConfig;
use box_office::report::Report;
use box_office::sim::Simulation;
use box_office::telemetry::setup_tracing;

fn usage(program: &str) {
    eprintln!("usage: {program} <num_users> <tickets_per_show> <num_shows> [concurrent_limit]");
    eprintln!("example: {program} 10 5 3");
}

fn parse_config(args: &[String]) -> Option<SimConfig> {
    if args.len() < 3 || args.len() > 4 {
        return None;
    }
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(arg.parse::<i64>().ok()?);
    }

    let config = match SimConfig::new(values[0], values[1], values[2]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return None;
        }
    };
    if let Some(&limit) = values.get(3) {
        match config.with_concurrent_limit(limit) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("error: {e}");
                None
            }
        }
    } else {
        Some(config)
    }
}

fn render(report: &Report, users: u32) {
    println!("Show | Initial | Remaining | Booked");
    println!("-----+---------+-----------+-------");
    for status in &report.shows {
        println!(
            "{:>4} | {:>7} | {:>9} | {:>6}",
            status.id, status.initial, status.remaining, status.booked
        );
    }
    println!("-----+---------+-----------+-------");
    println!(
        " all | {:>7} | {:>9} | {:>6}",
        report.total_initial, report.total_remaining, report.total_booked
    );
    println!();
    println!("users:        {users}");
    println!("booked:       {}", report.total_booked);
    println!("success rate: {:.1}%", report.success_rate * 100.0);
    if report.total_remaining == 0 {
        println!("all shows sold out");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(config) = parse_config(&args[1..]) else {
        usage(&args[0]);
        return ExitCode::FAILURE;
    };

    let users = config.users;
    info!(users, "starting booking simulation");

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match simulation.run().await {
        Ok(report) => {
            render(&report, users);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
