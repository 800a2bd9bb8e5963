//! fieldcraft command-line tool
//!
//! Runs the currency field type and the admin row renderer from a shell:
//!
//!   fieldcraft normalize "1.234,50" -o currency_format=9.999,99
//!   fieldcraft display 1234.5 -o currency_format_sign=cad
//!   fieldcraft render-row --field price.json --catalog objects.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fieldcraft_admin::{PickObjectCatalog, RowContext, render_row};
use fieldcraft_cli::{builtin_registry, load_catalog, load_field, load_type_labels, parse_options};
use fieldcraft_currency::CurrencyConfig;
use fieldcraft_model::{FieldTypeHandler, FieldTypeRegistry};
use serde_json::Value;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "fieldcraft")]
#[command(about = "Currency field type and field-row tools")]
struct Args {
    /// Path to the currency/locale configuration file
    #[arg(short, long, default_value = "fieldcraft.toml", global = true)]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and normalize raw input to its canonical stored form
    Normalize {
        value: String,
        /// Field name, used in validation messages
        #[arg(long, default_value = "value")]
        name: String,
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Format a stored value with separators and no symbol
    Format {
        value: String,
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Format a stored value and place the currency symbol
    Display {
        value: String,
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Print the client-side validation pattern
    Pattern {
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Print the storage column definition and placeholder
    Schema {
        #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
        options: Vec<String>,
    },
    /// Render one admin field-list row as HTML
    RenderRow {
        /// Field record (JSON)
        #[arg(long)]
        field: PathBuf,
        /// Type id to label map (JSON); defaults to the built-in types
        #[arg(long)]
        types: Option<PathBuf>,
        /// Pick object catalog (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Row index
        #[arg(long, default_value = "0")]
        row: String,
    },
}

fn currency(registry: &FieldTypeRegistry) -> Result<&dyn FieldTypeHandler> {
    registry
        .get("currency")
        .context("currency field type is not registered")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = CurrencyConfig::load_or_default(&args.config);
    let registry = builtin_registry(config)?;
    debug!(types = registry.len(), "Field types registered");

    match args.command {
        Command::Normalize { value, name, options } => {
            let bag = parse_options(&options)?;
            let stored = currency(&registry)?.pre_save(&Value::String(value), &name, &bag)?;
            println!("{}", fieldcraft_model::value::to_text(&stored));
        }
        Command::Format { value, options } => {
            let bag = parse_options(&options)?;
            println!("{}", currency(&registry)?.format(&Value::String(value), &bag));
        }
        Command::Display { value, options } => {
            let bag = parse_options(&options)?;
            println!("{}", currency(&registry)?.display(&Value::String(value), &bag));
        }
        Command::Pattern { options } => {
            let bag = parse_options(&options)?;
            if let Some(pattern) = currency(&registry)?.regex(&bag) {
                println!("{pattern}");
            }
        }
        Command::Schema { options } => {
            let bag = parse_options(&options)?;
            let handler = currency(&registry)?;
            println!("{}", handler.schema(&bag));
            println!("{}", handler.prepare(&bag));
        }
        Command::RenderRow { field, types, catalog, row } => {
            let field = load_field(&field)?;
            let type_labels = match types {
                Some(path) => load_type_labels(&path)?,
                None => registry.type_labels(),
            };
            let catalog = match catalog {
                Some(path) => load_catalog(&path)?,
                None => PickObjectCatalog::new(),
            };
            let ctx = RowContext::new(&row, &type_labels, &catalog);
            println!("{}", render_row(&field, &ctx)?);
        }
    }

    Ok(())
}
