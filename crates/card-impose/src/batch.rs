//! Batch orchestration
//!
//! Splits the recto list into sheets, renders front and back pages for each
//! sheet into per-batch temporary storage, merges the ordered page list into
//! one document, and reports progress along the way.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lopdf::Document;

use crate::merge::{merge_pages, save_pdf};
use crate::options::SheetSpec;
use crate::sheet::build_sheet;
use crate::stats::calculate_statistics;
use crate::types::*;

/// Observer callback for progress reports
pub type ProgressFn = dyn Fn(Progress) + Send + Sync;

/// Impose a batch of cards into one print-ready document.
///
/// `recto` is the ordered list of card faces; `verso` is the single shared
/// back, repeated for every card. The output contains one front page and
/// one back page per sheet, interleaved front-back in sheet order.
pub async fn process_batch(
    recto: &[PathBuf],
    verso: impl AsRef<Path>,
    output: impl AsRef<Path>,
    spec: &SheetSpec,
    progress: Option<Arc<ProgressFn>>,
) -> Result<BatchStatistics> {
    spec.validate()?;
    if recto.is_empty() {
        return Err(ImposeError::NoCards);
    }

    let recto = recto.to_vec();
    let verso = verso.as_ref().to_owned();
    let spec = spec.clone();
    let callback = progress.clone();

    let (document, stats) =
        tokio::task::spawn_blocking(move || process_batch_sync(&recto, &verso, &spec, callback))
            .await??;

    save_pdf(document, output).await?;

    report(
        &progress,
        1.0,
        format!(
            "Complete! Created {} sheets ({} pages)",
            stats.sheets, stats.output_pages
        ),
    );

    Ok(stats)
}

fn process_batch_sync(
    recto: &[PathBuf],
    verso: &Path,
    spec: &SheetSpec,
    progress: Option<Arc<ProgressFn>>,
) -> Result<(Document, BatchStatistics)> {
    let stats = calculate_statistics(recto.len(), spec)?;
    log::info!(
        "processing {} cards across {} sheets",
        stats.cards,
        stats.sheets
    );

    // All intermediate pages live in a directory owned by this invocation;
    // dropping the handle removes them on every exit path.
    let temp_dir = tempfile::tempdir()?;
    let mut pages: Vec<PathBuf> = Vec::with_capacity(stats.output_pages);

    for sheet_index in 0..stats.sheets {
        report(
            &progress,
            sheet_index as f32 / stats.sheets as f32,
            format!("Processing sheet {} of {}", sheet_index + 1, stats.sheets),
        );

        let start = sheet_index * spec.cards_per_sheet();
        let end = (start + spec.cards_per_sheet()).min(recto.len());
        let fronts = &recto[start..end];
        log::info!(
            "sheet {} of {}: cards {} to {}",
            sheet_index + 1,
            stats.sheets,
            start + 1,
            end
        );

        let front_page = temp_dir
            .path()
            .join(format!("sheet_{:03}_recto.pdf", sheet_index));
        std::fs::write(&front_page, build_sheet(fronts, SheetSide::Front, spec)?)?;
        pages.push(front_page);

        let backs = vec![verso.to_owned(); fronts.len()];
        let back_page = temp_dir
            .path()
            .join(format!("sheet_{:03}_verso.pdf", sheet_index));
        std::fs::write(&back_page, build_sheet(&backs, SheetSide::Back, spec)?)?;
        pages.push(back_page);
    }

    report(&progress, 0.9, "Merging pages...");
    let document = merge_pages(&pages)?;

    // Cleanup failure never invalidates the produced document
    if let Err(e) = temp_dir.close() {
        log::warn!("could not remove temporary directory: {}", e);
    }

    Ok((document, stats))
}

fn report(progress: &Option<Arc<ProgressFn>>, fraction: f32, message: impl Into<String>) {
    if let Some(callback) = progress {
        callback(Progress {
            fraction,
            message: message.into(),
        });
    }
}
