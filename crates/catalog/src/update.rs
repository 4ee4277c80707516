//! Update command - full replacement of one product

use anyhow::Result;

use crate::cli::{OutputFormat, UpdateArgs};
use crate::config::Session;
use crate::output::print_product;

/// Replace product `args.id` with the given fields.
///
/// Fields left out on the command line are not carried over from the old
/// record; the replacement must be complete.
///
/// # Errors
///
/// Returns an error if the id is unknown, a field is missing, the code
/// belongs to another product, or the backing file cannot be written.
pub fn run_update(args: UpdateArgs, session: &Session) -> Result<()> {
    let mut store = session.open_store_for_write()?;
    let product = store.update_product(args.id, args.fields.into_draft())?;

    match session.format {
        OutputFormat::Json => print_product(product, session.format)?,
        OutputFormat::Human => println!("✓ Updated product #{}", product.id),
    }
    Ok(())
}
