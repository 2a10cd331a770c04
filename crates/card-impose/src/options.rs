use crate::constants::MM_PER_INCH;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable sheet configuration.
///
/// A `SheetSpec` is built once per batch and passed by reference through the
/// whole pipeline; toggles are plain fields, never mutable state, so every
/// sheet of a batch is rendered under identical settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetSpec {
    /// Page width in millimeters
    pub page_width_mm: f32,
    /// Page height in millimeters
    pub page_height_mm: f32,
    /// Card trim width in millimeters (without bleed)
    pub card_width_mm: f32,
    /// Card trim height in millimeters (without bleed)
    pub card_height_mm: f32,
    /// Bleed around each card in millimeters
    pub bleed_mm: f32,
    /// Cards per row and per column (the grid is square)
    pub grid_size: usize,
    /// Target resolution for embedded card art
    pub dpi: f32,
    /// Draw registration crosshairs around the grid
    pub registration_marks: bool,
    /// Draw CMYK calibration bars below the grid
    pub color_bars: bool,
    /// Re-encode card art at JPEG quality 95 instead of 100
    pub optimize: bool,
}

impl Default for SheetSpec {
    fn default() -> Self {
        // A4 sheet, poker-size cards, 3x3 grid
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            card_width_mm: 63.5,
            card_height_mm: 88.0,
            bleed_mm: 2.5,
            grid_size: 3,
            dpi: 300.0,
            registration_marks: true,
            color_bars: true,
            optimize: true,
        }
    }
}

impl SheetSpec {
    /// Cell width including bleed on both sides
    pub fn cell_width_mm(&self) -> f32 {
        self.card_width_mm + 2.0 * self.bleed_mm
    }

    /// Cell height including bleed on both sides
    pub fn cell_height_mm(&self) -> f32 {
        self.card_height_mm + 2.0 * self.bleed_mm
    }

    /// Cards held by one full sheet
    pub fn cards_per_sheet(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Pixels per millimeter at the configured resolution
    pub fn px_per_mm(&self) -> f32 {
        self.dpi / MM_PER_INCH
    }

    /// JPEG quality used when embedding card art
    pub fn jpeg_quality(&self) -> u8 {
        if self.optimize { 95 } else { 100 }
    }

    /// Load a spec from a JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let spec = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse spec: {}", e)))?;
        Ok(spec)
    }

    /// Save the spec to a JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize spec: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the spec.
    ///
    /// Geometry violations are reported here, once, before any sheet is
    /// built. A grid larger than the page would otherwise surface as
    /// negative margins and silently misplaced cut lines.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ImposeError::Config(
                "Grid dimension must be at least 1".to_string(),
            ));
        }

        if self.card_width_mm <= 0.0 || self.card_height_mm <= 0.0 {
            return Err(ImposeError::Config(
                "Card dimensions must be positive".to_string(),
            ));
        }

        if self.bleed_mm < 0.0 {
            return Err(ImposeError::Config("Bleed must not be negative".to_string()));
        }

        if self.dpi <= 0.0 {
            return Err(ImposeError::Config("DPI must be positive".to_string()));
        }

        let grid_w = self.grid_size as f32 * self.cell_width_mm();
        let grid_h = self.grid_size as f32 * self.cell_height_mm();
        if grid_w > self.page_width_mm || grid_h > self.page_height_mm {
            return Err(ImposeError::Config(format!(
                "{}x{} grid of {:.1}x{:.1}mm cells ({:.1}x{:.1}mm) does not fit on a {:.1}x{:.1}mm page",
                self.grid_size,
                self.grid_size,
                self.cell_width_mm(),
                self.cell_height_mm(),
                grid_w,
                grid_h,
                self.page_width_mm,
                self.page_height_mm,
            )));
        }

        Ok(())
    }
}
