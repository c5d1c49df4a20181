//! Seed the catalog from a YAML file.
//!
//! The file is a list of products:
//!
//! ```yaml
//! - name: Филадельфия
//!   image_url: https://example.com/philadelphia.png
//!   weight_grams: 250
//!   composition: Лосось, сливочный сыр, рис, нори
//!   price_rub: 590
//! ```
//!
//! `image_url` may be omitted. All rows are inserted in one transaction.

use std::path::Path;

use tracing::info;

use eblen_storefront::db::{self, ProductRepository};
use eblen_storefront::models::NewProduct;

use super::{CommandError, database_url};

/// Parse a products seed document.
fn parse_products(path: &Path, content: &str) -> Result<Vec<NewProduct>, CommandError> {
    serde_yaml::from_str(content).map_err(|source| CommandError::Yaml {
        path: path.display().to_string(),
        source,
    })
}

/// Insert the products listed in `file`.
///
/// The file is read and parsed before connecting to the database.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the insert
/// fails. Nothing is written on error.
pub async fn products(file: &Path, replace: bool) -> Result<(), CommandError> {
    let content = tokio::fs::read_to_string(file)
        .await
        .map_err(|source| CommandError::Io {
            path: file.display().to_string(),
            source,
        })?;
    let products = parse_products(file, &content)?;
    info!(path = %file.display(), count = products.len(), "Parsed seed file");

    let database_url = database_url()?;
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let inserted = ProductRepository::new(&pool)
        .insert_many(&products, replace)
        .await?;

    info!(inserted, replace, "Seeding complete!");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products() {
        let yaml = r"
- name: Филадельфия
  image_url: https://example.com/philadelphia.png
  weight_grams: 250
  composition: Лосось, сливочный сыр, рис, нори
  price_rub: 590
- name: Калифорния
  weight_grams: 230
  composition: Краб, огурец, икра масаго
  price_rub: 450
";
        let products = parse_products(Path::new("products.yaml"), yaml).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Филадельфия");
        assert!(products[1].image_url.is_none());
        assert_eq!(products[1].price_rub.amount(), 450);
    }

    #[test]
    fn test_parse_products_rejects_missing_price() {
        let yaml = "- name: Сет\n  weight_grams: 900\n  composition: Ассорти\n";
        let err = parse_products(Path::new("bad.yaml"), yaml).unwrap_err();
        assert!(matches!(err, CommandError::Yaml { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_bundled_seed_file_parses() {
        let content = include_str!("../../seed/products.yaml");
        let products = parse_products(Path::new("products.yaml"), content).unwrap();
        assert!(!products.is_empty());
    }
}
