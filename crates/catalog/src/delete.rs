//! Delete command

use anyhow::Result;

use crate::cli::{DeleteArgs, OutputFormat};
use crate::config::Session;
use crate::output::print_product;

pub fn run_delete(args: DeleteArgs, session: &Session) -> Result<()> {
    let mut store = session.open_store_for_write()?;
    let removed = store.delete_product(args.id)?;

    match session.format {
        OutputFormat::Json => print_product(&removed, session.format)?,
        OutputFormat::Human => println!("✓ Deleted product #{} ({})", removed.id, removed.code),
    }
    Ok(())
}
