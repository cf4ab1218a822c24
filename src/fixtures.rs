//! Fixtures
//!
//! Bundled catalog data for demos and tests, parsed from an embedded YAML
//! document.

use thiserror::Error;

use crate::products::Catalog;

const DEMO_CATALOG: &str = include_str!("fixtures/catalog.yaml");

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// The bundled Pig of the Month demo catalog.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the embedded document fails to parse.
pub fn demo_catalog() -> Result<Catalog, FixtureError> {
    Ok(serde_norway::from_str(DEMO_CATALOG)?)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn demo_catalog_parses() -> TestResult {
        let catalog = demo_catalog()?;

        assert_eq!(catalog.products().len(), 8);

        Ok(())
    }

    #[test]
    fn demo_catalog_has_expected_entries() -> TestResult {
        let catalog = demo_catalog()?;

        let pulled_pork = catalog.product("5");
        assert_eq!(
            pulled_pork.map(|p| p.title.as_str()),
            Some("Premium Pulled Pork")
        );
        assert_eq!(pulled_pork.map(|p| p.price), Some(Decimal::new(45_00, 2)));

        assert!(catalog.featured().count() >= 1);
        assert!(catalog.by_category("Subscriptions").count() >= 2);

        Ok(())
    }
}
