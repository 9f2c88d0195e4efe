//! Seed the catalog with products from a YAML file.
//!
//! The file holds a `products` list in the same shape the product API
//! accepts, and every entry goes through the same validation as an API
//! create. Entries whose name matches an existing product are skipped, so
//! re-running the command is safe.

use std::collections::HashSet;
use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tracing::{error, info};

use tulsi_site::db::{self, ProductRepository};
use tulsi_site::models::ProductInput;

/// Shape of the seed file.
#[derive(Debug, Deserialize)]
struct SeedFile {
    products: Vec<ProductInput>,
}

/// Load catalog products from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file cannot be
/// read or parsed, or any product fails validation or insertion.
pub async fn products(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .map_err(|_| "DATABASE_URL not set")?;

    // Verify file exists
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading products from file");

    // Read and parse YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;

    info!(products = seed.products.len(), "Parsed seed file");

    let pool = db::create_pool(&database_url, 2).await?;
    info!("Connected to database");

    let repo = ProductRepository::new(&pool);
    let existing: HashSet<String> = repo.list().await?.into_iter().map(|p| p.name).collect();

    let mut inserted = 0_usize;
    let mut skipped = 0_usize;
    let mut failures: Vec<String> = Vec::new();

    for input in seed.products {
        let label = input.name.clone().unwrap_or_else(|| "<unnamed>".to_owned());

        let draft = match input.validate() {
            Ok(draft) => draft,
            Err(e) => {
                failures.push(format!("{label}: {e}"));
                continue;
            }
        };

        if existing.contains(&draft.name) {
            skipped += 1;
            continue;
        }

        match repo.create(&draft).await {
            Ok(product) => {
                info!(product_id = %product.id, name = %product.name, "Created product");
                inserted += 1;
            }
            Err(e) => failures.push(format!("{label}: {e}")),
        }
    }

    // Print summary
    info!("Seeding complete!");
    info!("  Products inserted: {inserted}");
    info!("  Products skipped (already exist): {skipped}");

    if !failures.is_empty() {
        error!("  Errors: {}", failures.len());
        for failure in &failures {
            error!("    - {failure}");
        }
        return Err(format!("{} products failed to seed", failures.len()).into());
    }

    Ok(())
}
