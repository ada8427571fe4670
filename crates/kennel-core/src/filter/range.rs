//! Weight range filtering

use crate::breed::{Breed, WeightUnit};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::validate;

/// Breeds whose stored weight range for `unit` overlaps `[min, max]`.
///
/// The bounds are reordered if given backwards and `unit` goes through the
/// alias table. Breeds without data for the resolved unit are excluded.
pub fn by_weight_range<'a>(
    catalog: &'a Catalog,
    min: f64,
    max: f64,
    unit: &str,
) -> Result<Vec<&'a Breed>> {
    let min = validate::number("Minimum weight", min)?;
    let max = validate::number("Maximum weight", max)?;
    let unit = WeightUnit::resolve(unit)?;
    let (lo, hi) = validate::sorted_range(min, max);

    Ok(catalog
        .iter()
        .filter(|breed| {
            breed
                .weight
                .for_unit(unit)
                .is_some_and(|range| range.overlaps(lo, hi))
        })
        .collect())
}
