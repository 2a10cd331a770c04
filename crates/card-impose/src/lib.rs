mod batch;
mod constants;
mod layout;
mod marks;
mod merge;
mod normalize;
mod options;
mod sheet;
mod stats;
mod types;

pub use batch::{ProgressFn, process_batch};
pub use constants::{REFERENCE_PX_PER_MM, mm_to_pt, pt_to_mm};
pub use layout::{GridGeometry, GridPosition};
pub use marks::{bleed_guides, color_bars, cut_lines, registration_marks, sheet_marks};
pub use merge::{load_pdf, merge_pages, save_pdf};
pub use normalize::{
    ColorMode, DimensionCheck, RasterImage, decode_image, normalize, resize_to,
    validate_dimensions,
};
pub use options::SheetSpec;
pub use sheet::build_sheet;
pub use stats::calculate_statistics;
pub use types::*;
