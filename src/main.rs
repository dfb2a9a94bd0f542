use clap::Parser;
use std::fs;
use tracing::{debug, info};

use wedding_budget_rs::cli::{Cli, Command, PlanArgs};
use wedding_budget_rs::error::Result;
use wedding_budget_rs::export::save_breakdown_csv;
use wedding_budget_rs::interface::{
    collect_planner_input, display_breakdown, display_notes, display_presets, display_scenario,
};
use wedding_budget_rs::logging::init_logger;
use wedding_budget_rs::models::{PlannerInput, Scenario};
use wedding_budget_rs::planner::{derive_breakdown, preset_rows};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    debug!(?command, "dispatching");

    match command {
        Command::Presets { scenario } => cmd_presets(scenario),
        Command::Plan(args) => cmd_plan(&args),
        Command::Notes => {
            display_notes();
            Ok(())
        }
    }
}

/// Show the preset comparison, or a single scenario column.
fn cmd_presets(scenario: Option<Scenario>) -> Result<()> {
    match scenario {
        Some(scenario) => display_scenario(preset_rows(), scenario),
        None => display_presets(preset_rows()),
    }
    Ok(())
}

/// Build a planner input, derive its breakdown, and export it.
fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let mut input = match &args.input {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let input: PlannerInput = serde_json::from_str(&content)?;
            info!(path = %path.display(), "loaded plan");
            input
        }
        None => args.to_input(),
    };

    if args.interactive {
        input = collect_planner_input(&input)?;
    }

    let breakdown = derive_breakdown(&input)?;

    if args.json {
        let json = serde_json::json!({
            "guests": input.guests,
            "breakdown": breakdown,
            "total": breakdown.total(),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        display_breakdown(&breakdown, input.guests);
    }

    if !args.no_export {
        save_breakdown_csv(&args.out, &breakdown)?;
        if !args.json {
            println!("Breakdown saved to {}", args.out.display());
        }
    }

    Ok(())
}
