//! One-shot subcommands.

use std::io::Write;

use anyhow::Context;
use serde::Serialize;

use amazonia_core::{DomainResult, ProductId};
use amazonia_inventory::{AddProduct, Inventory, SaveStatus, UpdateProduct};
use amazonia_products::Product;

use crate::args::{Command, OutputFormat};
use crate::messages;

/// Run `command` against `inventory`, writing results to `out`.
///
/// Domain failures and failed saves become errors so the process exits
/// non-zero.
pub fn execute<W: Write>(inventory: &mut Inventory, command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Add {
            id,
            name,
            quantity,
            price,
            category,
        } => {
            let status = domain(inventory.add(AddProduct {
                id: ProductId::from(id),
                name: name.clone(),
                category,
                quantity,
                price,
            }))?;
            writeln!(out, "{}", messages::added(&name, &status))?;
            ensure_saved(status)
        }
        Command::Remove { id } => {
            let (_, status) = domain(inventory.remove(&id))?;
            writeln!(out, "{}", messages::removed(&id, &status))?;
            ensure_saved(status)
        }
        Command::Update {
            id,
            quantity,
            price,
            category,
        } => {
            let status = domain(inventory.update(UpdateProduct {
                id: ProductId::from(id.as_str()),
                quantity,
                price,
                category,
            }))?;
            writeln!(out, "{}", messages::updated(&id, &status))?;
            ensure_saved(status)
        }
        Command::Search { name, format } => {
            let found = inventory.search(&name);
            match format {
                OutputFormat::Json => write_json(out, &found),
                OutputFormat::Text if found.is_empty() => {
                    writeln!(out, "{}", messages::not_found_by_name(&name))?;
                    Ok(())
                }
                OutputFormat::Text => {
                    writeln!(out, "{}", messages::SEARCH_HEADER)?;
                    write_lines(out, found)
                }
            }
        }
        Command::List { format } => match format {
            OutputFormat::Json => write_json(out, inventory.products()),
            OutputFormat::Text if inventory.is_empty() => {
                writeln!(out, "{}", messages::EMPTY_INVENTORY)?;
                Ok(())
            }
            OutputFormat::Text => {
                writeln!(out, "{}", messages::FULL_INVENTORY_HEADER)?;
                write_lines(out, inventory.products())
            }
        },
        Command::Total => {
            writeln!(out, "{}", messages::total_value(inventory.total_value()))?;
            Ok(())
        }
    }
}

/// Attach the operator-facing message while keeping the domain error as the cause.
fn domain<T>(result: DomainResult<T>) -> anyhow::Result<T> {
    result.map_err(|err| {
        let message = messages::domain_error(&err);
        anyhow::Error::new(err).context(message)
    })
}

fn ensure_saved(status: SaveStatus) -> anyhow::Result<()> {
    match status {
        SaveStatus::Saved => Ok(()),
        SaveStatus::Unsaved(err) => Err(err.into()),
    }
}

fn write_lines<'a, W: Write>(out: &mut W, products: impl IntoIterator<Item = &'a Product>) -> anyhow::Result<()> {
    for product in products {
        writeln!(out, "{product}")?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode products as JSON")?;
    writeln!(out)?;
    Ok(())
}
