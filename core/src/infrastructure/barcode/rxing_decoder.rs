use image::{DynamicImage, GrayImage, imageops};
use tracing::{debug, info, warn};

use crate::domain::{
    barcode::{entities::DecodedBarcode, ports::BarcodeDecoder},
    common::entities::app_errors::CoreError,
};

const CONTRAST_BOOST: f32 = 40.0;

/// Multi-format 1D/2D decoder backed by `rxing`.
#[derive(Debug, Clone, Default)]
pub struct RxingBarcodeDecoder;

impl RxingBarcodeDecoder {
    pub fn new() -> Self {
        Self
    }

    fn detect(luma: GrayImage) -> Option<DecodedBarcode> {
        let (width, height) = luma.dimensions();

        match rxing::helpers::detect_in_luma(luma.into_raw(), width, height, None) {
            Ok(result) => Some(DecodedBarcode {
                text: result.getText().to_string(),
                symbology: format!("{:?}", result.getBarcodeFormat()),
            }),
            Err(e) => {
                debug!("No barcode in pass: {:?}", e);
                None
            }
        }
    }
}

fn load(image: &[u8]) -> Result<DynamicImage, CoreError> {
    image::load_from_memory(image).map_err(|e| {
        warn!("Rejected barcode image: {}", e);
        CoreError::Invalid("Invalid image format".to_string())
    })
}

impl BarcodeDecoder for RxingBarcodeDecoder {
    fn decode(&self, image: &[u8]) -> Result<Option<DecodedBarcode>, CoreError> {
        let img = load(image)?;

        let found = Self::detect(img.to_luma8()).or_else(|| {
            let boosted = imageops::contrast(&img.grayscale().to_luma8(), CONTRAST_BOOST);
            Self::detect(boosted)
        });

        if let Some(barcode) = &found {
            info!(barcode = %barcode.text, symbology = %barcode.symbology, "barcode detected");
        }

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Luma};

    use super::*;

    fn blank_png() -> Vec<u8> {
        let img = GrayImage::from_pixel(64, 64, Luma([255u8]));
        let mut bytes = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(img)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn garbage_bytes_are_an_invalid_image() {
        let result = RxingBarcodeDecoder::new().decode(b"definitely not an image");
        assert_eq!(
            result,
            Err(CoreError::Invalid("Invalid image format".to_string()))
        );
    }

    #[test]
    fn blank_image_has_no_barcode() {
        let result = RxingBarcodeDecoder::new().decode(&blank_png());
        assert_eq!(result, Ok(None));
    }
}
