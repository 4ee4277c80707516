//! End-to-end catalog behavior against a real backing file

use anyhow::Result;
use camino::Utf8PathBuf;
use catalog_core::{CatalogError, CatalogStore, ProductDraft};
use std::fs;
use tempfile::TempDir;

fn catalog_path(temp_dir: &TempDir) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(temp_dir.path().join("productos.json"))
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))
}

fn prueba() -> ProductDraft {
    ProductDraft {
        title: "producto prueba".to_string(),
        description: "Este es un producto prueba".to_string(),
        price: 200.0,
        thumbnail: "Sin imagen".to_string(),
        code: "abc123".to_string(),
        stock: 25.0,
    }
}

#[test]
fn test_walkthrough_add_duplicate_lookup_update_delete() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;

    let mut store = CatalogStore::open(&path);
    assert!(store.get_products().is_empty());

    let added = store.add_product(prueba())?;
    assert_eq!(added.id, 1);
    assert_eq!(store.get_products().len(), 1);

    // Same code, different everything else
    let repeated = ProductDraft {
        title: "producto repetido".to_string(),
        description: "Este producto tiene un código repetido".to_string(),
        price: 300.0,
        stock: 15.0,
        ..prueba()
    };
    let err = store.add_product(repeated).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCode { .. }));
    assert_eq!(store.get_products().len(), 1);

    assert!(matches!(
        store.get_product_by_id(99),
        Err(CatalogError::NotFound { id: 99 })
    ));
    assert_eq!(store.get_product_by_id(1)?.code, "abc123");

    store.update_product(
        1,
        ProductDraft {
            title: "Producto Actualizado".to_string(),
            description: "Este producto ha sido actualizado".to_string(),
            price: 250.0,
            thumbnail: "Nueva imagen".to_string(),
            code: "xyz789".to_string(),
            stock: 30.0,
        },
    )?;
    let updated = store.get_product_by_id(1)?;
    assert_eq!(updated.id, 1);
    assert!((updated.price - 250.0).abs() < f64::EPSILON);
    assert_eq!(updated.code, "xyz789");
    assert_eq!(updated.title, "Producto Actualizado");

    store.delete_product(1)?;
    assert!(matches!(
        store.get_product_by_id(1),
        Err(CatalogError::NotFound { id: 1 })
    ));
    assert!(store.is_empty());

    Ok(())
}

#[test]
fn test_reopen_matches_memory_after_each_mutation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;
    let mut store = CatalogStore::open(&path);

    store.add_product(prueba())?;
    assert_eq!(CatalogStore::open(&path).get_products(), store.get_products());

    store.add_product(ProductDraft {
        code: "def456".to_string(),
        ..prueba()
    })?;
    assert_eq!(CatalogStore::open(&path).get_products(), store.get_products());

    store.update_product(
        1,
        ProductDraft {
            stock: 1.0,
            ..prueba()
        },
    )?;
    assert_eq!(CatalogStore::open(&path).get_products(), store.get_products());

    store.delete_product(1)?;
    let reopened = CatalogStore::open(&path);
    assert_eq!(reopened.get_products(), store.get_products());
    assert_eq!(reopened.next_id(), 3);

    Ok(())
}

#[test]
fn test_ids_continue_after_reload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;

    {
        let mut store = CatalogStore::open(&path);
        store.add_product(prueba())?;
        store.add_product(ProductDraft {
            code: "second".to_string(),
            ..prueba()
        })?;
    }

    let mut store = CatalogStore::open(&path);
    assert_eq!(store.next_id(), 3);
    let third = store.add_product(ProductDraft {
        code: "third".to_string(),
        ..prueba()
    })?;
    assert_eq!(third.id, 3);

    Ok(())
}

#[test]
fn test_rejections_leave_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;
    let mut store = CatalogStore::open(&path);
    store.add_product(prueba())?;
    let before = fs::read_to_string(&path)?;

    assert!(store.add_product(ProductDraft::default()).is_err());
    assert!(store.add_product(prueba()).is_err());
    assert!(store.update_product(7, prueba()).is_err());
    assert!(store.delete_product(7).is_err());

    assert_eq!(fs::read_to_string(&path)?, before);
    assert_eq!(store.len(), 1);

    Ok(())
}

#[test]
fn test_file_is_indented_json_array() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;
    let mut store = CatalogStore::open(&path);
    store.add_product(prueba())?;

    let content = fs::read_to_string(&path)?;
    assert!(content.starts_with('['));
    assert!(content.contains("\n  {"));

    let value: serde_json::Value = serde_json::from_str(&content)?;
    let record = &value[0];
    assert_eq!(record["id"], 1);
    assert_eq!(record["code"], "abc123");
    assert_eq!(record["stock"], 25.0);

    Ok(())
}

#[test]
fn test_reads_file_written_with_integer_prices() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = catalog_path(&temp_dir)?;
    fs::write(
        &path,
        r#"[
  {
    "title": "producto prueba",
    "description": "Este es un producto prueba",
    "price": 200,
    "thumbnail": "Sin imagen",
    "code": "abc123",
    "stock": 25,
    "id": 1
  }
]"#,
    )?;

    let store = CatalogStore::open(&path);
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), 2);
    assert!((store.get_product_by_id(1)?.price - 200.0).abs() < f64::EPSILON);

    Ok(())
}
