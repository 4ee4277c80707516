//! The catalog store: in-memory products mirrored to a JSON backing file

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io::ErrorKind;

use crate::error::{CatalogError, Result};
use crate::product::{Product, ProductDraft};

/// Ordered products plus the next id to hand out.
///
/// Every mutation rewrites the whole backing file. A mutation that fails
/// with `CatalogError::Io` has still been applied in memory; call
/// [`CatalogStore::persist`] to retry the write.
#[derive(Debug)]
pub struct CatalogStore {
    path: Utf8PathBuf,
    products: Vec<Product>,
    next_id: u64,
}

impl CatalogStore {
    /// Open the catalog at `path`, degrading to an empty catalog on any
    /// read or parse failure.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Self {
        let path = path.into();
        let loaded = Self::read_products(&path)
            .and_then(|products| Self::from_products(path.clone(), products.unwrap_or_default()));
        match loaded {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Could not load catalog, starting empty: {e}");
                Self::empty(path)
            }
        }
    }

    /// Open the catalog at `path`. A missing file is an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file exists but cannot be read.
    /// Returns `CatalogError::Parse` if the content is not a product array.
    /// Returns `CatalogError::IdsExhausted` if the largest id is `u64::MAX`.
    pub fn open_strict(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let path = path.into();
        let products = Self::read_products(&path)?.unwrap_or_default();
        Self::from_products(path, products)
    }

    fn read_products(path: &Utf8Path) -> Result<Option<Vec<Product>>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No catalog at {path}, starting empty");
                return Ok(None);
            }
            Err(source) => {
                return Err(CatalogError::Io {
                    operation: "read",
                    path: path.to_owned(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| CatalogError::Parse {
                path: path.to_owned(),
                source,
            })
    }

    fn from_products(path: Utf8PathBuf, products: Vec<Product>) -> Result<Self> {
        // Recomputed every time; the counter itself is never stored.
        let next_id = match products.iter().map(|p| p.id).max() {
            None => 1,
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(CatalogError::IdsExhausted { max_id })?,
        };
        tracing::debug!(
            "Loaded {} products from {path}, next id {next_id}",
            products.len()
        );
        Ok(Self {
            path,
            products,
            next_id,
        })
    }

    const fn empty(path: Utf8PathBuf) -> Self {
        Self {
            path,
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Overwrite the backing file with the full catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Serialize` or `CatalogError::Io`. In-memory
    /// state is left untouched either way.
    pub fn persist(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.products).map_err(|e| {
            tracing::error!("Failed to serialize catalog: {e}");
            CatalogError::Serialize(e)
        })?;

        fs::write(&self.path, data).map_err(|source| {
            tracing::error!("Failed to write catalog to {}: {source}", self.path);
            CatalogError::Io {
                operation: "write",
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Validate, assign the next id, append and persist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation`, `CatalogError::DuplicateCode` or
    /// `CatalogError::IdsExhausted` without mutating, or a persist error
    /// after mutating.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<&Product> {
        Self::reject(draft.check())?;
        Self::reject(self.ensure_code_free(&draft.code, None))?;

        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| {
            tracing::error!("Id counter exhausted at {id}");
            CatalogError::IdsExhausted { max_id: id }
        })?;
        self.products.push(Product::from_draft(id, draft));
        tracing::info!("Added product {id}");

        self.persist()?;
        Ok(&self.products[self.products.len() - 1])
    }

    /// All products in insertion order.
    #[must_use]
    pub fn get_products(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no product has this id.
    pub fn get_product_by_id(&self, id: u64) -> Result<&Product> {
        let index = Self::reject(self.position(id))?;
        Ok(&self.products[index])
    }

    /// Replace the product with `id` in place, keeping its id.
    ///
    /// The replacement goes through the same checks as an add; its code may
    /// only repeat the code of the product it replaces.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound`, `CatalogError::Validation` or
    /// `CatalogError::DuplicateCode` without mutating, or a persist error
    /// after mutating.
    pub fn update_product(&mut self, id: u64, replacement: ProductDraft) -> Result<&Product> {
        let index = Self::reject(self.position(id))?;
        Self::reject(replacement.check())?;
        Self::reject(self.ensure_code_free(&replacement.code, Some(id)))?;

        self.products[index] = Product::from_draft(id, replacement);
        tracing::info!("Updated product {id}");

        self.persist()?;
        Ok(&self.products[index])
    }

    /// Remove the product with `id`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` without mutating, or a persist error
    /// after mutating.
    pub fn delete_product(&mut self, id: u64) -> Result<Product> {
        let index = Self::reject(self.position(id))?;

        let removed = self.products.remove(index);
        tracing::info!("Deleted product {id}");

        self.persist()?;
        Ok(removed)
    }

    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound { id })
    }

    /// `owner` is the id allowed to already hold `code`.
    fn ensure_code_free(&self, code: &str, owner: Option<u64>) -> Result<()> {
        let taken = self
            .products
            .iter()
            .any(|p| p.code == code && Some(p.id) != owner);
        if taken {
            Err(CatalogError::DuplicateCode {
                code: code.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Log caller-input rejections before handing them back.
    fn reject<T>(result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            tracing::warn!("{e}");
        }
        result
    }
}
