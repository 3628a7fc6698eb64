use std::collections::HashSet;
use std::fs;

const CATALOG_PATH: &str = "src/routine/default-catalog.toml";

const CATEGORIES: &[&str] = &[
    "cleanser",
    "toner",
    "serum",
    "moisturizer",
    "sunscreen",
    "treatment",
];

const PERIODS: &[&str] = &["morning", "evening", "both"];

fn main() {
    // Tell Cargo to rerun if the embedded catalog changes
    println!("cargo:rerun-if-changed={}", CATALOG_PATH);

    let contents = fs::read_to_string(CATALOG_PATH).expect("Failed to read default-catalog.toml");

    let catalog: toml::Value =
        toml::from_str(&contents).expect("Failed to parse default-catalog.toml");

    validate_catalog(&catalog);
}

/// Validate the embedded catalog structure at build time so a malformed
/// default can never ship inside the binary.
fn validate_catalog(catalog: &toml::Value) {
    let mut seen_ids = HashSet::new();
    let mut total = 0;

    for routine in ["morning", "evening"] {
        let products = catalog
            .get(routine)
            .and_then(|p| p.as_array())
            .unwrap_or_else(|| panic!("Catalog must have a [[{}]] array", routine));

        assert!(
            !products.is_empty(),
            "Routine '{}' must have at least one product",
            routine
        );

        for product in products {
            let table = product
                .as_table()
                .unwrap_or_else(|| panic!("Product in '{}' must be a table", routine));

            let id = table
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("Product in '{}' must have an 'id' field", routine));
            assert!(!id.trim().is_empty(), "Product id must not be blank");
            assert!(
                seen_ids.insert(id.to_string()),
                "Duplicate product id: {}",
                id
            );

            let name = table
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("Product '{}' must have a 'name' field", id));
            assert!(!name.trim().is_empty(), "Product '{}' has a blank name", id);

            let category = table
                .get("category")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("Product '{}' must have a 'category' field", id));
            assert!(
                CATEGORIES.contains(&category),
                "Product '{}' has unknown category '{}'",
                id,
                category
            );

            let period = table
                .get("period")
                .and_then(|v| v.as_str())
                .unwrap_or_else(|| panic!("Product '{}' must have a 'period' field", id));
            assert!(
                PERIODS.contains(&period),
                "Product '{}' has unknown period '{}'",
                id,
                period
            );
            assert!(
                period == "both" || period == routine,
                "Product '{}' is listed under '{}' but declares period '{}'",
                id,
                routine,
                period
            );

            total += 1;
        }
    }

    println!("cargo:warning=Catalog validation passed: {} products", total);
}
