use std::io::Cursor;

use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat, Luma, imageops};
use qrcode::QrCode;

/// Pixel size of one QR module.
const MODULE_PX: u32 = 10;

/// White border width in modules. The renderer's own quiet zone is fixed at
/// four, so the border is drawn here instead.
const QUIET_ZONE_MODULES: u32 = 5;

/// Encode `data` as a black-on-white QR code PNG.
pub fn render_png(data: &str) -> Result<Vec<u8>> {
    let image = render(data)?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .context("Failed to encode QR PNG")?;
    Ok(png)
}

fn render(data: &str) -> Result<GrayImage> {
    let code = QrCode::new(data.as_bytes()).context("Failed to create QR code")?;

    let symbol = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PX, MODULE_PX)
        .quiet_zone(false)
        .build();

    let pad = QUIET_ZONE_MODULES * MODULE_PX;
    let mut canvas = GrayImage::from_pixel(
        symbol.width() + 2 * pad,
        symbol.height() + 2 * pad,
        Luma([255]),
    );
    imageops::overlay(&mut canvas, &symbol, i64::from(pad), i64::from(pad));
    Ok(canvas)
}

/// The link a card's QR code points at.
pub fn view_link(public_url: &str, roll_number: &str) -> String {
    format!("{}/idcard/view_secure/{}", public_url, roll_number)
}
