//! List and show commands - read-only views of the catalog

use anyhow::Result;

use crate::cli::ShowArgs;
use crate::config::Session;
use crate::output::{print_product, print_products};

pub fn run_list(session: &Session) -> Result<()> {
    let store = session.open_store();
    print_products(store.get_products(), session.format)
}

pub fn run_show(args: ShowArgs, session: &Session) -> Result<()> {
    let store = session.open_store();
    let product = store.get_product_by_id(args.id)?;
    print_product(product, session.format)
}
