//! Output formatting for products

use anyhow::Result;
use catalog_core::{CatalogError, Product};
use std::fmt::Write as _;
use std::process::ExitCode;

use crate::cli::OutputFormat;

pub fn print_products(products: &[Product], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(products)?),
        OutputFormat::Human => {
            if products.is_empty() {
                println!("No products");
            }
            for product in products {
                println!("{}", product_line(product));
            }
        }
    }
    Ok(())
}

pub fn print_product(product: &Product, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(product)?),
        OutputFormat::Human => print!("{}", product_details(product)),
    }
    Ok(())
}

/// One-line summary: `#id code title (price, stock)`.
pub fn product_line(product: &Product) -> String {
    format!(
        "#{id:<4} {code:<12} {title} ({price}, stock {stock})",
        id = product.id,
        code = product.code,
        title = product.title,
        price = product.price,
        stock = product.stock,
    )
}

pub fn product_details(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Product #{}", product.id);
    let _ = writeln!(out, "  title:       {}", product.title);
    let _ = writeln!(out, "  description: {}", product.description);
    let _ = writeln!(out, "  price:       {}", product.price);
    let _ = writeln!(out, "  thumbnail:   {}", product.thumbnail);
    let _ = writeln!(out, "  code:        {}", product.code);
    let _ = writeln!(out, "  stock:       {}", product.stock);
    out
}

/// Exit status for a failed command: 2 when the catalog rejected the
/// request (bad input, taken code, unknown id), 1 for everything else.
#[must_use]
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CatalogError>() {
        Some(e) if e.is_rejection() => 2,
        _ => 1,
    }
}

/// Print a failed command on stderr and map it to its exit status.
#[must_use]
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    let status = exit_status(err);
    if status == 2 {
        eprintln!("Rejected: {err}");
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(status)
}
