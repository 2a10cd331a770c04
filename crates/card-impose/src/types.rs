use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("invalid raster data: {0}")]
    Raster(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("page write error: {0}")]
    Page(String),
    #[error("merge failed: {0}")]
    Merge(String),
    #[error("no recto cards to impose")]
    NoCards,
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet, carrying the recto (face) art
    Front,
    /// Back of the sheet, carrying the verso art; placement is mirrored
    /// left-right so that front and back line up after duplex printing
    Back,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }
}

/// Advisory progress report emitted while a batch runs.
///
/// Fractions are monotonically increasing within one batch and reach 1.0 on
/// completion. Nothing downstream depends on when these fire, only on the
/// batch's final result.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Completion fraction in `[0, 1]`
    pub fraction: f32,
    /// Human-readable phase label
    pub message: String,
}

/// Statistics about an imposition batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Number of recto cards in the batch
    pub cards: usize,
    /// Number of physical sheets
    pub sheets: usize,
    /// Output page count (front and back of each sheet)
    pub output_pages: usize,
    /// Empty cells on the last sheet
    pub blank_cells: usize,
}
