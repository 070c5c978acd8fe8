//! Sheet total in ghan-foot.

use super::{compute_detailed, to_fixed, GHAN_FOOT_FACTOR};
use crate::sheet::LogEntry;

/// Grand total of a sheet, as text with 2 decimals.
///
/// Rows with a blank length or circumference add nothing. The cubic-meter
/// volumes are summed first and the sum is scaled by [`GHAN_FOOT_FACTOR`],
/// independently of each row's own `final_volume`.
pub fn total_volume(logs: &[LogEntry]) -> String {
    if logs.is_empty() {
        return "0.00".to_string();
    }

    let cubic_meters = logs
        .iter()
        .filter(|log| log.is_complete())
        .map(|log| {
            let individual = compute_detailed(
                log.length.as_str(),
                log.circumference.as_str(),
                log.length_unit,
                log.circumference_unit,
            )
            .individual;
            if individual.is_nan() {
                0.0
            } else {
                individual
            }
        })
        .fold(0.0, |sum, volume| sum + volume);

    to_fixed(cubic_meters * GHAN_FOOT_FACTOR, 2)
}
