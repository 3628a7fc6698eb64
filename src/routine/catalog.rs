// Product catalog: the ordered routines, loaded from TOML

use crate::routine::product::{Period, Product};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog file schema: one ordered product list per routine.
#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    morning: Vec<Product>,
    #[serde(default)]
    evening: Vec<Product>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("the {0} routine has no products")]
    EmptyRoutine(Period),

    #[error("duplicate product id '{0}'")]
    DuplicateId(String),

    #[error("product with a blank id")]
    BlankId,

    #[error("product '{0}' has a blank name")]
    BlankName(String),

    #[error("product '{id}' is listed under {listed} but declares period {declared}")]
    PeriodMismatch {
        id: String,
        listed: Period,
        declared: Period,
    },

    #[error("invalid catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The full product store. Products keep their authored order; the
/// per-period views filter on the product's declared period.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Built-in catalog compiled into the binary.
    pub fn embedded() -> Self {
        // build.rs validates this document, so parsing cannot fail here
        Self::from_toml_str(include_str!("default-catalog.toml"))
            .expect("embedded catalog is validated at build time")
    }

    /// Parse and validate a catalog document.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;

        if file.morning.is_empty() {
            return Err(CatalogError::EmptyRoutine(Period::Morning));
        }
        if file.evening.is_empty() {
            return Err(CatalogError::EmptyRoutine(Period::Evening));
        }

        for (listed, products) in [
            (Period::Morning, &file.morning),
            (Period::Evening, &file.evening),
        ] {
            for product in products {
                if !product.period.applies_to(listed) {
                    return Err(CatalogError::PeriodMismatch {
                        id: product.id.clone(),
                        listed,
                        declared: product.period,
                    });
                }
            }
        }

        let mut products = file.morning;
        products.extend(file.evening);
        Self::from_products(products)
    }

    /// Build a catalog from an explicit product list. Routine emptiness is
    /// allowed here so progress over an empty checklist stays testable.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if product.id.trim().is_empty() {
                return Err(CatalogError::BlankId);
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::BlankName(product.id.clone()));
            }
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Load and validate a user catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let catalog = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

        Ok(catalog)
    }

    /// Ordered products of one checklist. `Both` products appear in either.
    pub fn products_for(&self, period: Period) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.period.applies_to(period))
            .collect()
    }

    /// Every product, in authored order (morning first).
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
