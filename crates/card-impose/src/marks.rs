//! Printer's marks rendering for imposed sheets
//!
//! This module generates the drawing operations for cut lines, bleed
//! guides, registration marks, and CMYK calibration bars. All positions
//! derive from the grid bounding box alone, so marks are identical no
//! matter how many cells of the sheet actually hold cards.
//!
//! The layout engine stays in millimeters; the single millimeter-to-point
//! conversion for marks happens here, when operations are emitted.

use printpdf::*;

use crate::constants::{
    BEZIER_CIRCLE_FACTOR, BLEED_GUIDE_DASH, BLEED_GUIDE_GRAY, BLEED_GUIDE_WIDTH, COLOR_BAR_HEIGHT_MM,
    COLOR_BAR_OFFSET_MM, CUT_LINE_WIDTH, REGISTRATION_CIRCLE_RADIUS_MM, REGISTRATION_MARK_SIZE_MM,
    REGISTRATION_MARK_WIDTH,
};
use crate::layout::GridGeometry;
use crate::options::SheetSpec;

/// Generate all marks for one sheet.
///
/// Cut lines and bleed guides are always drawn; registration marks and
/// calibration bars follow the `SheetSpec` toggles.
pub fn sheet_marks(geom: &GridGeometry, spec: &SheetSpec) -> Vec<Op> {
    let mut ops = Vec::new();

    ops.push(Op::SaveGraphicsState);

    ops.extend(cut_lines(geom));
    ops.extend(bleed_guides(geom, spec.bleed_mm));

    if spec.registration_marks {
        ops.extend(registration_marks(geom));
    }

    if spec.color_bars {
        ops.extend(color_bars(geom));
    }

    ops.push(Op::RestoreGraphicsState);

    ops
}

/// Trim lines along every grid boundary: `grid_size + 1` vertical and
/// `grid_size + 1` horizontal solid lines spanning the grid box.
pub fn cut_lines(geom: &GridGeometry) -> Vec<Op> {
    let mut ops = vec![
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        },
        Op::SetOutlineThickness {
            pt: Pt(CUT_LINE_WIDTH),
        },
        Op::SetLineDashPattern {
            dash: LineDashPattern::default(),
        },
    ];

    let left = geom.margin_x_mm;
    let bottom = geom.margin_y_mm;
    let right = left + geom.grid_width_mm;
    let top = bottom + geom.grid_height_mm;

    for i in 0..=geom.grid_size {
        let x = left + i as f32 * geom.cell_width_mm;
        ops.push(line(x, bottom, x, top));

        let y = bottom + i as f32 * geom.cell_height_mm;
        ops.push(line(left, y, right, y));
    }

    ops
}

/// Dashed guides offset by ±bleed from each interior cut line, marking the
/// safe trim tolerance around the interior cuts. Outer grid edges get no
/// guides.
pub fn bleed_guides(geom: &GridGeometry, bleed_mm: f32) -> Vec<Op> {
    let mut ops = vec![
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(BLEED_GUIDE_GRAY, BLEED_GUIDE_GRAY, BLEED_GUIDE_GRAY, None)),
        },
        Op::SetOutlineThickness {
            pt: Pt(BLEED_GUIDE_WIDTH),
        },
        Op::SetLineDashPattern {
            dash: LineDashPattern {
                dash_1: Some(BLEED_GUIDE_DASH),
                gap_1: Some(BLEED_GUIDE_DASH),
                ..Default::default()
            },
        },
    ];

    let left = geom.margin_x_mm;
    let bottom = geom.margin_y_mm;
    let right = left + geom.grid_width_mm;
    let top = bottom + geom.grid_height_mm;

    for i in 1..geom.grid_size {
        let x = left + i as f32 * geom.cell_width_mm;
        ops.push(line(x - bleed_mm, bottom, x - bleed_mm, top));
        ops.push(line(x + bleed_mm, bottom, x + bleed_mm, top));

        let y = bottom + i as f32 * geom.cell_height_mm;
        ops.push(line(left, y - bleed_mm, right, y - bleed_mm));
        ops.push(line(left, y + bleed_mm, right, y + bleed_mm));
    }

    // Back to solid lines
    ops.push(Op::SetLineDashPattern {
        dash: LineDashPattern::default(),
    });

    ops
}

/// Registration marks at the four corners and four edge midpoints of the
/// grid bounding box: a crosshair plus a small circle for precise
/// alignment of the two print passes.
pub fn registration_marks(geom: &GridGeometry) -> Vec<Op> {
    let mut ops = vec![
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)),
        },
        Op::SetOutlineThickness {
            pt: Pt(REGISTRATION_MARK_WIDTH),
        },
        Op::SetLineDashPattern {
            dash: LineDashPattern::default(),
        },
    ];

    let left = geom.margin_x_mm;
    let bottom = geom.margin_y_mm;
    let right = left + geom.grid_width_mm;
    let top = bottom + geom.grid_height_mm;
    let center_x = left + geom.grid_width_mm / 2.0;
    let center_y = bottom + geom.grid_height_mm / 2.0;

    let positions = [
        (left, bottom),
        (right, bottom),
        (left, top),
        (right, top),
        (center_x, bottom),
        (center_x, top),
        (left, center_y),
        (right, center_y),
    ];

    for (x, y) in positions {
        ops.extend(registration_mark(x, y));
    }

    ops
}

/// One crosshair + circle mark centered at (x, y) in millimeters
fn registration_mark(x: f32, y: f32) -> Vec<Op> {
    let size = REGISTRATION_MARK_SIZE_MM;
    vec![
        line(x - size, y, x + size, y),
        line(x, y - size, x, y + size),
        circle(x, y, REGISTRATION_CIRCLE_RADIUS_MM),
    ]
}

/// Four adjacent filled rectangles directly below the grid, one per
/// process ink at full saturation, for visual verification of ink
/// registration. Content never depends on the card images.
pub fn color_bars(geom: &GridGeometry) -> Vec<Op> {
    let x = geom.margin_x_mm;
    let y = geom.margin_y_mm - COLOR_BAR_OFFSET_MM;
    let bar_width = geom.grid_width_mm / 4.0;

    let inks = [
        Cmyk::new(1.0, 0.0, 0.0, 0.0, None),
        Cmyk::new(0.0, 1.0, 0.0, 0.0, None),
        Cmyk::new(0.0, 0.0, 1.0, 0.0, None),
        Cmyk::new(0.0, 0.0, 0.0, 1.0, None),
    ];

    let mut ops = Vec::new();
    for (i, ink) in inks.into_iter().enumerate() {
        ops.push(Op::SetFillColor {
            col: Color::Cmyk(ink),
        });
        ops.push(filled_rect(
            x + i as f32 * bar_width,
            y,
            bar_width,
            COLOR_BAR_HEIGHT_MM,
        ));
    }

    ops
}

// =============================================================================
// Primitive helpers (millimeter coordinates in, device units out)
// =============================================================================

fn point(x_mm: f32, y_mm: f32) -> LinePoint {
    LinePoint {
        p: Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(y_mm).into_pt(),
        },
        bezier: false,
    }
}

fn control_point(x_mm: f32, y_mm: f32) -> LinePoint {
    LinePoint {
        p: Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(y_mm).into_pt(),
        },
        bezier: true,
    }
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Op {
    Op::DrawLine {
        line: Line {
            points: vec![point(x1, y1), point(x2, y2)],
            is_closed: false,
        },
    }
}

fn filled_rect(x: f32, y: f32, w: f32, h: f32) -> Op {
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    point(x, y),
                    point(x + w, y),
                    point(x + w, y + h),
                    point(x, y + h),
                ],
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        },
    }
}

/// Stroked circle approximated by four cubic Bezier quarters
fn circle(cx: f32, cy: f32, r: f32) -> Op {
    let k = r * BEZIER_CIRCLE_FACTOR;
    Op::DrawLine {
        line: Line {
            points: vec![
                point(cx + r, cy),
                control_point(cx + r, cy + k),
                control_point(cx + k, cy + r),
                point(cx, cy + r),
                control_point(cx - k, cy + r),
                control_point(cx - r, cy + k),
                point(cx - r, cy),
                control_point(cx - r, cy - k),
                control_point(cx - k, cy - r),
                point(cx, cy - r),
                control_point(cx + k, cy - r),
                control_point(cx + r, cy - k),
                point(cx + r, cy),
            ],
            is_closed: true,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================
