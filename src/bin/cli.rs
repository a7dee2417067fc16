//! Tutorboard CLI
//!
//! Command-line interface for offline dashboard operations:
//! - Render the page to a static HTML file
//! - Print chart data and weekly summaries
//! - Validate the fixtures against their line configs
//! - Generate a default config file

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tutorboard::config::generate_default_config;
use tutorboard::dashboard::{ChartCard, DashboardPage, YAxis};
use tutorboard::render::render_page;

#[derive(Parser)]
#[command(name = "tutorboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Offline tools for the tutoring dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the dashboard to a standalone HTML document
    Render {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the chart data
    Charts {
        /// Only this chart id (e.g. students-over-time)
        id: Option<String>,
    },

    /// Print the summary cards and weekly comparison panels
    Summary,

    /// Check every chart's data against its line configs
    Validate,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { output } => {
            let page = DashboardPage::compose().context("Failed to compose dashboard")?;
            let html = render_page(&page);

            match output {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!(
                        "Rendered {} bytes to {:?} at {}",
                        html.len(),
                        path,
                        Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
                    );
                }
                None => print!("{}", html),
            }
        }

        Commands::Charts { id } => {
            let page = DashboardPage::compose().context("Failed to compose dashboard")?;
            let charts: Vec<&ChartCard> = match &id {
                Some(id) => vec![page.chart(id)?],
                None => page.charts.iter().collect(),
            };

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&charts)?),
                _ => {
                    for (i, chart) in charts.iter().enumerate() {
                        if i > 0 {
                            println!();
                        }
                        print_chart_table(chart);
                    }
                }
            }
        }

        Commands::Summary => {
            let page = DashboardPage::compose().context("Failed to compose dashboard")?;

            match cli.format.as_str() {
                "json" => {
                    let body = serde_json::json!({
                        "cards": page.cards,
                        "summaries": page.summaries,
                    });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                _ => {
                    for card in &page.cards {
                        println!("{:<20} {}", card.label, card.value);
                    }
                    for panel in &page.summaries {
                        println!();
                        println!("{}", panel.heading());
                        println!("{}", "-".repeat(32));
                        for row in &panel.rows {
                            println!("{:<20} {}", row.label, row.values);
                        }
                    }
                }
            }
        }

        Commands::Validate => match DashboardPage::compose() {
            Ok(page) => {
                for chart in &page.charts {
                    println!(
                        "ok  {:<30} {} weeks, {} lines",
                        chart.id,
                        chart.categories.len(),
                        chart.series.len()
                    );
                }
            }
            Err(e) => {
                eprintln!("Invalid dashboard data: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let config = generate_default_config();

            if let Some(path) = output {
                std::fs::write(&path, &config)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            } else {
                println!("{}", config);
            }
        }
    }

    Ok(())
}

fn print_chart_table(chart: &ChartCard) {
    println!("{} ({})", chart.title, chart.id);

    if chart.is_empty() {
        println!("No data");
        return;
    }

    print!("{:<10}", "Week");
    for series in &chart.series {
        print!(" {:>10}", series.data_key);
    }
    println!();
    println!("{}", "-".repeat(10 + 11 * chart.series.len()));

    for (i, week) in chart.categories.iter().enumerate() {
        print!("{:<10}", week);
        for series in &chart.series {
            match series.values.get(i).copied().flatten() {
                Some(v) => print!(" {:>10}", YAxis::label(v)),
                None => print!(" {:>10}", "-"),
            }
        }
        println!();
    }
}
