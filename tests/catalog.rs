// Integration tests for catalog loading and validation

use skindash::routine::{Catalog, Period};
use std::io::Write;

const CUSTOM_CATALOG: &str = r#"
[[morning]]
id = "micellar-water"
name = "Micellar Water"
category = "cleanser"
period = "morning"

[[morning]]
id = "niacinamide"
name = "Niacinamide Serum"
category = "serum"
period = "both"

[[evening]]
id = "aha-peel"
name = "AHA Peeling Solution"
category = "treatment"
period = "evening"
"#;

#[test]
fn test_embedded_catalog_matches_shipped_routines() {
    let catalog = Catalog::embedded();

    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.products_for(Period::Morning).len(), 4);
    assert_eq!(catalog.products_for(Period::Evening).len(), 5);

    // Authored order is the application order
    let morning_names: Vec<_> = catalog
        .products_for(Period::Morning)
        .iter()
        .map(|p| p.name.clone())
        .collect();
    assert_eq!(
        morning_names,
        vec![
            "Gentle Facial Cleanser",
            "Vitamin C Serum",
            "Facial Moisturizer",
            "SPF 60 Sunscreen",
        ]
    );
}

#[test]
fn test_custom_catalog_file_roundtrip() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(CUSTOM_CATALOG.as_bytes())?;

    let catalog = Catalog::load(file.path())?;

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.products_for(Period::Morning).len(), 2);
    // The 'both' serum shows up in the evening view too
    assert_eq!(catalog.products_for(Period::Evening).len(), 2);
    assert!(catalog.contains("niacinamide"));

    Ok(())
}

#[test]
fn test_missing_catalog_file_reports_path() {
    let err = Catalog::load(std::path::Path::new("/no/such/catalog.toml"))
        .expect_err("missing file must fail");
    assert!(format!("{:#}", err).contains("/no/such/catalog.toml"));
}

#[test]
fn test_malformed_catalog_file_is_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"[[morning]]\nid = 42\n")?;

    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn test_duplicate_ids_across_routines_rejected() {
    let result = Catalog::from_toml_str(
        r#"
        [[morning]]
        id = "dup"
        name = "Morning Dup"
        category = "cleanser"
        period = "morning"

        [[evening]]
        id = "dup"
        name = "Evening Dup"
        category = "cleanser"
        period = "evening"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_unknown_category_rejected() {
    let result = Catalog::from_toml_str(
        r#"
        [[morning]]
        id = "mystery"
        name = "Mystery Cream"
        category = "snake-oil"
        period = "morning"

        [[evening]]
        id = "toner"
        name = "Toner"
        category = "toner"
        period = "evening"
        "#,
    );
    assert!(result.is_err());
}
