use crate::options::SheetSpec;
use crate::types::*;

/// Calculate statistics for a batch without building anything.
pub fn calculate_statistics(card_count: usize, spec: &SheetSpec) -> Result<BatchStatistics> {
    if card_count == 0 {
        return Err(ImposeError::NoCards);
    }

    let per_sheet = spec.cards_per_sheet();
    let sheets = card_count.div_ceil(per_sheet);

    Ok(BatchStatistics {
        cards: card_count,
        sheets,
        output_pages: sheets * 2,
        blank_cells: sheets * per_sheet - card_count,
    })
}
