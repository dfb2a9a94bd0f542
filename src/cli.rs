use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{PlannerInput, Scenario};
use crate::planner::constants::*;

/// Wedding Budget Planner: compare preset scenarios or build a custom plan.
#[derive(Parser, Debug)]
#[command(name = "wedding_budget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Show debug diagnostics on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the Low / Mid / High preset table, totals and chart.
    Presets {
        /// Only show one scenario column (low, mid or high).
        #[arg(long)]
        scenario: Option<Scenario>,
    },

    /// Derive a custom breakdown and export it as CSV.
    Plan(PlanArgs),

    /// Show the assumptions behind the numbers.
    Notes,
}

impl Default for Command {
    fn default() -> Self {
        Command::Presets { scenario: None }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Fill in the planner form interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Read the plan from a JSON file; missing fields use the defaults.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where to write the CSV breakdown.
    #[arg(short, long, default_value = CSV_FILE_NAME)]
    pub out: PathBuf,

    /// Skip writing the CSV breakdown.
    #[arg(long)]
    pub no_export: bool,

    /// Print the breakdown as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Guest count.
    #[arg(long, default_value_t = DEFAULT_GUESTS)]
    pub guests: u32,

    /// Leave the 28% service & tax off catering.
    #[arg(long)]
    pub no_service_tax: bool,

    /// BYO bar overhead (bartenders, ice, insurance).
    #[arg(long, default_value_t = DEFAULT_BYO_OVERHEAD)]
    pub byo_overhead: u32,

    #[arg(long, default_value_t = DEFAULT_VENUE)]
    pub venue: u32,

    #[arg(long, default_value_t = DEFAULT_CHURCH)]
    pub church: u32,

    #[arg(long, default_value_t = DEFAULT_PHOTOGRAPHY)]
    pub photography: u32,

    #[arg(long, default_value_t = DEFAULT_DJ)]
    pub dj: u32,

    /// Flowers & decor total.
    #[arg(long, default_value_t = DEFAULT_FLORALS)]
    pub florals: u32,

    /// Base catering cost per guest, before service & tax.
    #[arg(long, default_value_t = DEFAULT_CATERING_PER_GUEST)]
    pub catering_per_guest: u32,

    #[arg(long, default_value_t = DEFAULT_BAR_PER_GUEST)]
    pub bar_per_guest: u32,

    #[arg(long, default_value_t = DEFAULT_CAKE_PER_GUEST)]
    pub cake_per_guest: u32,

    /// Misc. & extras total.
    #[arg(long, default_value_t = DEFAULT_MISC)]
    pub misc: u32,

    /// Add a videographer.
    #[arg(long)]
    pub add_video: bool,

    #[arg(long, default_value_t = DEFAULT_VIDEO_COST)]
    pub video_cost: u32,
}

impl PlanArgs {
    /// Planner input described by the command-line flags.
    pub fn to_input(&self) -> PlannerInput {
        PlannerInput {
            guests: self.guests,
            include_service_tax: !self.no_service_tax,
            byo_overhead: self.byo_overhead,
            venue: self.venue,
            church: self.church,
            photography: self.photography,
            dj: self.dj,
            florals: self.florals,
            catering_per_guest: self.catering_per_guest,
            bar_per_guest: self.bar_per_guest,
            cake_per_guest: self.cake_per_guest,
            misc: self.misc,
            add_video: self.add_video,
            video_cost: self.video_cost,
        }
    }
}
