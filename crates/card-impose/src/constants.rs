//! Shared constants for card imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Pixels per millimeter at the 300 DPI reference resolution used when
/// validating source art dimensions (300 / 25.4).
///
/// The original pipeline used this fixed value regardless of the batch's
/// configured DPI; `validate_dimensions` keeps it as an explicit parameter so
/// callers can pass `SheetSpec::px_per_mm()` instead.
pub const REFERENCE_PX_PER_MM: f32 = 11.811;

// =============================================================================
// Printer's Marks
// =============================================================================

/// Line width for trim/cut lines (points)
pub const CUT_LINE_WIDTH: f32 = 0.25;

/// Line width for bleed guide lines (points)
pub const BLEED_GUIDE_WIDTH: f32 = 0.15;

/// Gray level for bleed guide lines
pub const BLEED_GUIDE_GRAY: f32 = 0.5;

/// Dash/gap length for bleed guide lines (points)
pub const BLEED_GUIDE_DASH: i64 = 2;

/// Line width for registration marks (points)
pub const REGISTRATION_MARK_WIDTH: f32 = 0.25;

/// Crosshair arm length of a registration mark (millimeters)
pub const REGISTRATION_MARK_SIZE_MM: f32 = 5.0;

/// Radius of the alignment circle inside a registration mark (millimeters)
pub const REGISTRATION_CIRCLE_RADIUS_MM: f32 = 0.5;

// =============================================================================
// Calibration Bars
// =============================================================================

/// Height of the CMYK calibration bars (millimeters)
pub const COLOR_BAR_HEIGHT_MM: f32 = 5.0;

/// Vertical distance between the grid bottom and the calibration bars
/// (millimeters)
pub const COLOR_BAR_OFFSET_MM: f32 = 10.0;

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// This magic number comes from: 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
/// Using 4 cubic Bezier curves with this factor gives a very close circle approximation.
pub const BEZIER_CIRCLE_FACTOR: f32 = 0.552284749831;
