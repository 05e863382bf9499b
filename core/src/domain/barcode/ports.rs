use crate::domain::{
    authentication::value_objects::Identity,
    barcode::entities::{BarcodeScan, DecodedBarcode, ProductData},
    common::entities::app_errors::CoreError,
};

/// Finds the first barcode in an encoded image.
#[cfg_attr(test, mockall::automock)]
pub trait BarcodeDecoder: Send + Sync {
    /// `Ok(None)` when the image decodes but holds no readable barcode.
    fn decode(&self, image: &[u8]) -> Result<Option<DecodedBarcode>, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductCatalog: Send + Sync {
    fn find_product(
        &self,
        barcode: DecodedBarcode,
    ) -> impl Future<Output = Result<Option<ProductData>, CoreError>> + Send;
}

pub trait BarcodeService: Send + Sync {
    fn scan_barcode(
        &self,
        identity: Identity,
        image: Vec<u8>,
    ) -> impl Future<Output = Result<BarcodeScan, CoreError>> + Send;
}
