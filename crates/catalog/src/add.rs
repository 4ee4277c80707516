//! Add command - validate a candidate and append it to the catalog

use anyhow::Result;

use crate::cli::{AddArgs, OutputFormat};
use crate::config::Session;
use crate::output::print_product;

/// Add a product and report the id the store assigned.
///
/// # Errors
///
/// Returns an error if a field is missing, the code is taken, or the
/// backing file cannot be written.
pub fn run_add(args: AddArgs, session: &Session) -> Result<()> {
    let mut store = session.open_store_for_write()?;
    let product = store.add_product(args.fields.into_draft())?;

    match session.format {
        OutputFormat::Json => print_product(product, session.format)?,
        OutputFormat::Human => println!("✓ Added product #{} ({})", product.id, product.code),
    }
    Ok(())
}
