use serde::{Deserialize, Serialize};

use crate::catalog::BrandMapRow;

/// Counters collected while building a brand map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandMapSummary {
    pub rows_read: usize,
    /// Rows skipped for a missing brand or generic name.
    pub rows_incomplete: usize,
    /// Rows whose brand and generic columns were swapped.
    pub rows_flipped: usize,
    pub duplicates_dropped: usize,
    pub rows_written: usize,
}

/// Output rows plus the counters that produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandMap {
    pub rows: Vec<BrandMapRow>,
    pub summary: BrandMapSummary,
}
