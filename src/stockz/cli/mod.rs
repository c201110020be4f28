//! # CLI Layer
//!
//! One possible client for stockz. This is the only place that writes to
//! stdout/stderr or decides exit codes.
//!
//! Every subcommand that changes stock follows the same cycle: load the data
//! file, apply the change, save the whole file back. With no subcommand the
//! demonstration sequence runs.

mod logging;
mod print;
mod setup;

use clap::Parser;
use print::{format_low_items, print_activity, print_messages, print_report};
use serde_json::json;
use setup::{Cli, Commands};
use std::path::PathBuf;
use stockz::api::{CmdResult, ConfigAction, StockzApi, StockzPaths};
use stockz::config::StockzConfig;
use stockz::error::Result;
use stockz::input::RawInput;
use stockz::model::ActivityEntry;
use stockz::store::fs::FileStore;
use tracing::{debug, info, warn};

struct AppContext {
    api: StockzApi<FileStore>,
    low_threshold: i64,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Add { item, qty }) => handle_add(&mut ctx, &item, &qty),
        Some(Commands::Remove { item, qty }) => handle_remove(&mut ctx, &item, &qty),
        Some(Commands::Qty { item }) => handle_qty(&mut ctx, &item),
        Some(Commands::Low { threshold }) => handle_low(&mut ctx, threshold),
        Some(Commands::Report) => handle_report(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Demo) | None => handle_demo(&mut ctx),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = StockzConfig::load(&cwd).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        StockzConfig::default()
    });

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_file));
    debug!(data_file = %data_file.display(), "using data file");

    let paths = StockzPaths::new(cwd, data_file);
    AppContext {
        api: StockzApi::new(FileStore::new(), paths),
        low_threshold: config.low_threshold,
    }
}

fn handle_add(ctx: &mut AppContext, item: &str, qty: &str) -> Result<()> {
    print_messages(&ctx.api.load().messages);
    let result = match RawInput::from_args(item, qty) {
        Ok(input) => ctx.api.add_item(&input.item, input.qty),
        Err(invalid) => CmdResult::default().with_message(invalid.message()),
    };
    finish_change(ctx, result)
}

fn handle_remove(ctx: &mut AppContext, item: &str, qty: &str) -> Result<()> {
    print_messages(&ctx.api.load().messages);
    let result = match RawInput::from_args(item, qty) {
        Ok(input) => ctx.api.remove_item(&input.item, input.qty),
        Err(invalid) => CmdResult::default().with_message(invalid.message()),
    };
    finish_change(ctx, result)
}

fn finish_change(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    print_activity(&result.activity);
    print_messages(&result.messages);
    if result.activity.is_empty() {
        return Ok(());
    }
    ctx.api.save()?;
    Ok(())
}

fn handle_qty(ctx: &mut AppContext, item: &str) -> Result<()> {
    print_messages(&ctx.api.load().messages);
    println!("{}", ctx.api.get_qty(item));
    Ok(())
}

fn handle_low(ctx: &mut AppContext, threshold: Option<i64>) -> Result<()> {
    print_messages(&ctx.api.load().messages);
    let threshold = threshold.unwrap_or(ctx.low_threshold);
    for item in ctx.api.check_low_items(threshold) {
        println!("{}", item);
    }
    Ok(())
}

fn handle_report(ctx: &mut AppContext) -> Result<()> {
    print_messages(&ctx.api.load().messages);
    print_report(&ctx.api.report().listed_items);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            for key in StockzConfig::KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

/// Load, a few adds and removes (some deliberately invalid), queries, save,
/// reload, report. Warnings never change the exit status; a failed save does.
fn handle_demo(ctx: &mut AppContext) -> Result<()> {
    let mut log: Vec<ActivityEntry> = Vec::new();
    let threshold = ctx.low_threshold;
    let api = &mut ctx.api;

    print_messages(&api.load().messages);

    let steps = [
        api.add_item("apple", 10),
        api.add_item("banana", -2),
        api.add_raw(&json!(123), &json!("ten")),
        api.remove_item("apple", 3),
        api.remove_item("orange", 1),
    ];
    for result in steps {
        print_messages(&result.messages);
        log.extend(result.activity);
    }

    println!("Apple stock: {}", api.get_qty("apple"));
    println!(
        "Low items: {}",
        format_low_items(&api.check_low_items(threshold))
    );

    api.save()?;
    print_messages(&api.load().messages);
    print_report(&api.report().listed_items);

    for entry in &log {
        info!("{}", entry);
    }
    Ok(())
}
