//! CLI entry point for basics-playground
//!
//! Provides command-line access to every playground operation plus a
//! subcommand for launching the GTK4 interface.

use clap::{Parser, Subcommand};
use colored::*;

use basics_playground::core::boxes::{plan_boxes, HUE_RANGE};
use basics_playground::core::cart::{calculate_total, DEMO_CART};
use basics_playground::core::countdown::countdown;
use basics_playground::core::summary::summarize;
use basics_playground::core::text::to_title_case;
use basics_playground::core::types::Profile;
use basics_playground::ui::App;

#[derive(Parser)]
#[command(name = "basics-playground")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a profile summary sentence
    Profile {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Age in years
        #[arg(short, long)]
        age: i64,

        /// Favorite number
        #[arg(short, long)]
        fav: i64,
    },

    /// Total the demo cart with tax applied
    Total {
        /// Tax percentage
        #[arg(short, long, default_value_t = 8.0)]
        tax: f64,
    },

    /// Title-case arbitrary text
    Title {
        /// Text to reformat
        text: String,
    },

    /// Print a countdown line ending in blast off
    Countdown {
        /// Starting number
        #[arg(short, long, default_value_t = 5)]
        from: i64,
    },

    /// Generate a colored box plan
    Boxes {
        /// How many boxes (clamped to 1-30)
        #[arg(short, long, default_value_t = 6)]
        count: i64,
    },

    /// Show the demo price list
    Cart {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the GTK4 interface
    Gui,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { name, age, fav } => run_profile(name, age, fav),
        Commands::Total { tax } => run_total(tax),
        Commands::Title { text } => run_title(&text),
        Commands::Countdown { from } => run_countdown(from),
        Commands::Boxes { count } => run_boxes(count),
        Commands::Cart { json } => run_cart(json)?,
        Commands::Gui => {
            let status = App::new().run();
            if status != 0 {
                anyhow::bail!("GTK application exited with status {status}");
            }
        }
    }

    Ok(())
}

/// Print the profile summary sentence
fn run_profile(name: String, age: i64, fav: i64) {
    let profile = Profile {
        name,
        age,
        favorite_number: fav,
    };

    println!("{} {}", "✓".green(), summarize(&profile));
}

/// Total the demo cart at the given tax percentage
fn run_total(tax_pct: f64) {
    let rate = (tax_pct / 100.0).max(0.0);
    let total = calculate_total(&DEMO_CART, rate);

    println!("{} Cart: {:?}", "→".cyan(), DEMO_CART);
    println!(
        "{} Total with {}% tax: {}",
        "✓".green(),
        tax_pct,
        format!("${}", total).bold()
    );
}

/// Title-case the given text
fn run_title(text: &str) {
    println!("{}", to_title_case(text));
}

/// Print the countdown line
fn run_countdown(from: i64) {
    println!("{}", countdown(from).bold());
}

/// Generate and print a box plan with random hues
fn run_boxes(count: i64) {
    let plan = plan_boxes(count, || {
        glib::random_int_range(0, i32::from(HUE_RANGE)) as u16
    });

    println!("{} Planned {} boxes:", "→".cyan(), plan.len());

    for spec in plan {
        println!(
            "  {} {}",
            format!("Box #{:02}", spec.index).bold(),
            spec.css_color().dimmed()
        );
    }
}

/// Print the demo price list, optionally as JSON
fn run_cart(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&DEMO_CART)?);
        return Ok(());
    }

    for price in DEMO_CART {
        println!("  ${}", price);
    }

    let subtotal: f64 = DEMO_CART.iter().sum();
    println!("{} Subtotal: {}", "✓".green(), format!("${}", subtotal).bold());

    Ok(())
}
