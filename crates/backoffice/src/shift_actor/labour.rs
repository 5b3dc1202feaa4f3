//! Labour cost of a set of shifts.

use crate::model::{Shift, StaffId};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Σ hours × hourly rate of the staff member who worked the shift.
///
/// Shifts of staff missing from `rates` are skipped and returned, so the caller can report
/// them instead of silently costing them at zero.
pub fn labour_cost<'a>(
    shifts: impl IntoIterator<Item = &'a Shift>,
    rates: &HashMap<StaffId, Decimal>,
) -> (Decimal, Vec<&'a Shift>) {
    let mut total = Decimal::ZERO;
    let mut uncosted = Vec::new();
    for shift in shifts {
        match rates.get(&shift.staff_id) {
            Some(rate) => total = total.saturating_add(shift.hours().saturating_mul(*rate)),
            None => uncosted.push(shift),
        }
    }
    (total.round_dp(2), uncosted)
}
