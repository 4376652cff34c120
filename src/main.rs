use std::sync::Arc;

use anyhow::Result;
use crossterm::style::Stylize;
use tracing::{error, info, warn};

use strat_scanner::api_client::{AlertsClient, FetchResult};
use strat_scanner::config::filter_groups::GroupKey;
use strat_scanner::config::Config;
use strat_scanner::data::pipeline::{AlertView, ColumnFilterMap, SortDirection, SortSpec};
use strat_scanner::filters::{build_query_params, FilterSelectionStore};
use strat_scanner::layout::{ColumnLayoutManager, FileLayoutStore};
use strat_scanner::{logging, table_display};

fn print_usage() {
    eprintln!("strat-scanner - market alert grid");
    eprintln!();
    eprintln!("Usage: strat-scanner [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --toggle GROUP=OPTION   Toggle a filter option (repeatable),");
    eprintln!("                          e.g. --toggle UNIVERSE=SPY --toggle FTFC=BEARISH");
    eprintln!("  --filter COLUMN=TEXT    Column filter (repeatable); '>N' and '<N'");
    eprintln!("                          compare numerically, other text is a");
    eprintln!("                          case-insensitive substring match");
    eprintln!("  --sort COLUMN[:asc|:desc]  Sort column and direction");
    eprintln!("  --base-url URL          Override the configured alerts backend");
    eprintln!("  --reset-layout          Restore the default column layout");
    eprintln!("  --help                  Show this help");
}

struct CliArgs {
    toggles: Vec<(GroupKey, String)>,
    filters: ColumnFilterMap,
    sort: Option<SortSpec>,
    base_url: Option<String>,
    reset_layout: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs {
        toggles: Vec::new(),
        filters: ColumnFilterMap::new(),
        sort: None,
        base_url: None,
        reset_layout: false,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--toggle" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--toggle requires GROUP=OPTION"))?;
                let (group, option) = value
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("--toggle expects GROUP=OPTION, got {value:?}"))?;
                let key = GroupKey::parse(group)
                    .ok_or_else(|| anyhow::anyhow!("unknown filter group {group:?}"))?;
                parsed.toggles.push((key, option.to_string()));
            }
            "--filter" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--filter requires COLUMN=TEXT"))?;
                let (column, text) = value
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("--filter expects COLUMN=TEXT, got {value:?}"))?;
                parsed.filters.set(column, text);
            }
            "--sort" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sort requires COLUMN[:asc|:desc]"))?;
                let (column, direction) = match value.split_once(':') {
                    Some((c, "asc")) => (c, SortDirection::Ascending),
                    Some((c, "desc")) => (c, SortDirection::Descending),
                    Some((_, other)) => {
                        anyhow::bail!("sort direction must be asc or desc, got {other:?}")
                    }
                    None => (value.as_str(), SortDirection::Ascending),
                };
                parsed.sort = Some(SortSpec::new(column, direction));
            }
            "--base-url" => {
                parsed.base_url = args.next();
            }
            "--reset-layout" => {
                parsed.reset_layout = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                anyhow::bail!("unknown argument {other:?}");
            }
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    logging::init_tracing();

    let args = parse_args()?;

    let config = Config::load().unwrap_or_else(|e| {
        warn!(target: "config", "failed to load config, using defaults: {e:#}");
        Config::default()
    });

    let mut selection = FilterSelectionStore::new();
    for (group, option) in &args.toggles {
        selection.toggle(*group, option);
    }

    let sort = args.sort.unwrap_or_else(|| {
        let direction = if config.behavior.default_sort_ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        SortSpec::new(&config.behavior.default_sort_column, direction)
    });

    let mut layout = ColumnLayoutManager::load(FileLayoutStore::new()?);
    if args.reset_layout {
        layout.reset();
        info!(target: "layout", "column layout reset to defaults");
    }

    let base_url = args.base_url.unwrap_or(config.server.base_url);
    let mut client = AlertsClient::new(&base_url);

    let params = build_query_params(&selection);
    let result = match client.fetch_alerts(&params) {
        Ok(result) => result,
        Err(e) => {
            error!(target: "api", "failed to fetch alerts: {e:#}");
            FetchResult::empty()
        }
    };

    let view = AlertView::process(Arc::new(result.rows), &args.filters, &sort);
    let columns = layout.visible_ordered_columns();

    if view.row_count() == 0 {
        println!("{}", "No alerts found matching the criteria.".yellow());
    } else {
        println!("{}", table_display::render_alerts(&view, &columns));
    }
    println!(
        "{}",
        format!(
            "{} alerts | last updated {}",
            view.row_count(),
            result.fetched_at.format("%H:%M:%S")
        )
        .green()
    );

    Ok(())
}
