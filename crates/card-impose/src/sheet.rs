//! Sheet rendering
//!
//! Builds one finished single-page PDF for one side of one sheet: card art
//! placed into its grid cells, then cut lines, registration marks, and
//! calibration bars on top.

use ::image::RgbImage;
use ::image::codecs::jpeg::JpegEncoder;
use printpdf::*;
use std::path::PathBuf;

use crate::constants::MM_PER_INCH;
use crate::layout::GridGeometry;
use crate::marks;
use crate::normalize::{decode_image, normalize, resize_to};
use crate::options::SheetSpec;
use crate::types::*;

/// Build one page for up to `grid_size²` cards.
///
/// Cards fill the grid row-major from cell 0; a short last sheet leaves the
/// remaining cells blank but still gets the full set of marks. Any card
/// that fails to decode fails the whole sheet — a partially rendered sheet
/// is unusable stock.
pub fn build_sheet(cards: &[PathBuf], side: SheetSide, spec: &SheetSpec) -> Result<Vec<u8>> {
    let geom = GridGeometry::new(spec);

    let target_width = (geom.cell_width_mm * spec.dpi / MM_PER_INCH) as u32;
    let target_height = (geom.cell_height_mm * spec.dpi / MM_PER_INCH) as u32;

    let mut doc = PdfDocument::new("card sheet");
    let mut ops = Vec::new();

    for (index, path) in cards.iter().take(geom.cells()).enumerate() {
        let raster = decode_image(path)?;
        let rgb = normalize(&raster)?;
        let resized = resize_to(&rgb, target_width, target_height);

        let encoded = encode_jpeg(&resized, spec.jpeg_quality())?;
        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(&encoded, &mut warnings)
            .map_err(ImposeError::Page)?;
        let image_id = doc.add_image(&raw);

        let (x, y) = geom.cell_origin(index, side);
        let pos = geom.position(index);
        log::debug!(
            "placing card {} at row {}, col {} ({:?})",
            index + 1,
            pos.row + 1,
            pos.col + 1,
            side
        );

        // At dpi=72 the image's natural size in points equals its pixel
        // size, so the scale factors force the exact cell dimensions.
        ops.push(Op::UseXobject {
            id: image_id.clone(),
            transform: XObjectTransform {
                translate_x: Some(Mm(x).into_pt()),
                translate_y: Some(Mm(y).into_pt()),
                rotate: None,
                scale_x: Some(Mm(geom.cell_width_mm).into_pt().0 / resized.width() as f32),
                scale_y: Some(Mm(geom.cell_height_mm).into_pt().0 / resized.height() as f32),
                dpi: Some(72.0),
            },
        });
    }

    ops.extend(marks::sheet_marks(&geom, spec));

    doc.pages.push(PdfPage::new(
        Mm(spec.page_width_mm),
        Mm(spec.page_height_mm),
        ops,
    ));

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder.encode_image(img)?;
    Ok(bytes)
}
