// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use folio::{
    verify_grouping, ConfigFile, GroupingOptions, PointerActivation, ResultsView, SearchResults,
};
use std::fs;
use std::io::Read;

mod cli;
use cli::display::{self, status_badge, themed, GRAY};
use cli::{Cli, Commands, GroupingArgs};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = folio::logging::init(cli.verbose) {
        eprintln!("warning: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    display::init_theme(config.theme);

    match cli.command {
        Commands::Group {
            file,
            json,
            grouping,
        } => run_group(&file, json, resolve_options(&config, grouping)?),
        Commands::Verify { file, grouping } => run_verify(&file, resolve_options(&config, grouping)?),
        Commands::Click { button, ctrl, meta } => {
            run_click(PointerActivation::new(button, ctrl, meta));
            Ok(())
        }
    }
}

fn resolve_options(config: &ConfigFile, args: GroupingArgs) -> Result<GroupingOptions> {
    Ok(config.resolve(args.priority_count, args.default_area)?)
}

/// Read a results file, or stdin when `file` is `-`.
fn read_results(file: &str) -> Result<SearchResults> {
    let text = if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read results from stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };
    let results: SearchResults =
        serde_json::from_str(&text).with_context(|| format!("Invalid results JSON in {}", file))?;
    tracing::debug!(
        file,
        query = %results.query,
        results = results.results.len(),
        "loaded search results"
    );
    Ok(results)
}

fn run_group(file: &str, json: bool, options: GroupingOptions) -> Result<()> {
    let results = read_results(file)?;
    let mut view = ResultsView::new(options);
    let state = view.push(&results);

    if json {
        let out = serde_json::to_string_pretty(state).context("Failed to serialize view")?;
        println!("{}", out);
    } else {
        display::print_state(state);
    }
    Ok(())
}

fn run_verify(file: &str, options: GroupingOptions) -> Result<()> {
    let results = read_results(file)?;
    let mut view = ResultsView::new(options.clone());
    view.push(&results);

    let areas = view.areas();
    let pages: usize = areas.iter().map(|a| a.count()).sum();
    match verify_grouping(&results, areas, &options) {
        Ok(()) => {
            println!(
                "{} {} pages in {} areas ({} untitled dropped)",
                status_badge(true),
                pages,
                areas.len(),
                results.results.iter().filter(|r| !r.is_displayable()).count()
            );
            Ok(())
        }
        Err(err) => {
            println!("{} {}", status_badge(false), err);
            bail!("grouping invariants violated for {}", file)
        }
    }
}

fn run_click(event: PointerActivation) {
    let decision = if event.should_select() {
        "resultSelected emitted"
    } else {
        "default browser action"
    };
    println!(
        "{} {}",
        themed(
            GRAY,
            &[],
            &format!(
                "button={} ctrl={} meta={} →",
                event.button, event.ctrl_key, event.meta_key
            )
        ),
        decision
    );
}
