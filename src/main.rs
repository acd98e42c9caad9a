mod alpha_vantage;
mod dashboard;
mod fetch;
mod market;
mod scenario;
mod types;
mod universe;
mod view;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::alpha_vantage::alpha_vantage_config::AlphaVantageConfig;
use crate::dashboard::commands::{Command, HELP};
use crate::dashboard::dashboard::Dashboard;
use crate::dashboard::table::render;
use crate::scenario::output::OutputFormat;
use crate::scenario::scenario::Scenario;
use crate::universe::sectors::{SECTORS, Sector};
use crate::view::sort::{SortConfig, SortDirection, SortKey};

#[derive(Debug, Clone, Parser)]
#[command(about = "Terminal stock quote dashboard backed by Alpha Vantage")]
struct Args {
    /// Comma separated tickers; overrides --sector and --limit.
    #[arg(long, value_delimiter = ',')]
    pub symbols: Vec<String>,

    #[arg(long, value_enum)]
    pub sector: Option<Sector>,

    /// Take the first N symbols of the universe (0 = all of them).
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,

    /// Sort direction; defaults to ascending.
    #[arg(long, value_enum, requires = "sort")]
    pub direction: Option<SortDirection>,

    #[arg(long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Keep the dashboard open and read commands from stdin.
    #[arg(long, short)]
    pub interactive: bool,

    /// Print the symbol universe and exit.
    #[arg(long)]
    pub list_symbols: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("quote_dashboard=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_symbols {
        for (sector, symbols) in SECTORS {
            println!("{:<18} {}", sector.to_string(), symbols.join(" "));
        }
        return Ok(());
    }

    let config = AlphaVantageConfig::from_env()?;
    let symbols = Scenario::symbol_batch(&args.symbols, args.sector, args.limit)?;
    let mut dashboard = Dashboard::new(Scenario::quote_fetcher(&config), symbols);

    dashboard.state_mut().set_search_term(args.search.clone());
    dashboard
        .state_mut()
        .set_sort(args.sort.map(|key| {
            SortConfig::new(key, args.direction.unwrap_or(SortDirection::Ascending))
        }));

    dashboard.refresh().await;

    if args.interactive {
        run_interactive(&mut dashboard).await
    } else {
        print_dashboard(&dashboard, args.output)
    }
}

fn print_dashboard(dashboard: &Dashboard, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Table => print!("{}", render(dashboard.state())),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&dashboard.state().visible())
                .context("failed to encode quotes as JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

async fn run_interactive(dashboard: &mut Dashboard) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    print!("{}", render(dashboard.state()));
    println!("{HELP}");

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(error) => {
                warn!(%error, "ignoring command");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Show => {}
            Command::Refresh => {
                println!("Loading {} symbols...", dashboard.symbols().len());
                dashboard.refresh().await;
            }
            Command::Search(term) => dashboard.state_mut().set_search_term(term),
            Command::Sort(key) => {
                let sort = dashboard.state_mut().toggle_sort(key);
                info!(%sort, "sorting");
            }
            Command::ClearSort => dashboard.state_mut().set_sort(None),
        }

        print!("{}", render(dashboard.state()));
    }

    Ok(())
}
