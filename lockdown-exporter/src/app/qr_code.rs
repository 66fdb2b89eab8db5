/*!
 Renders URLs as QR codes that can be embedded in HTML.
*/

use std::io::Cursor;

use base64::{prelude::BASE64_STANDARD, Engine};
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

use crate::app::error::RuntimeError;

/// Error correction level for generated codes, recovers from roughly 25% damage
pub const QR_EC_LEVEL: EcLevel = EcLevel::Q;
/// Prefix for inline PNG data
const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode `text` as a PNG QR code
pub fn encode_png(text: &str) -> Result<Vec<u8>, RuntimeError> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), QR_EC_LEVEL)
        .map_err(|why| RuntimeError::QrCodeError(why.to_string()))?;
    let image = code.render::<Luma<u8>>().build();

    let mut png = Cursor::new(vec![]);
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|why| RuntimeError::QrCodeError(why.to_string()))?;
    Ok(png.into_inner())
}

/// Encode `text` as a PNG QR code inside a `data:` URI
pub fn data_uri(text: &str) -> Result<String, RuntimeError> {
    let png = encode_png(text)?;
    Ok(format!(
        "{PNG_DATA_URI_PREFIX}{}",
        BASE64_STANDARD.encode(png)
    ))
}
