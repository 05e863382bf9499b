use serde::{Deserialize, Serialize};

/// Where product details come from once a barcode is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarcodeStrategy {
    /// Look the code up in an Open Pet Food Facts compatible catalog.
    #[default]
    ProductDatabase,
    /// Ask the language model to describe the product.
    ModelGenerated,
}
