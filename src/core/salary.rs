use crate::domain::model::{SalaryEstimate, SalaryRange};

/// 只有上限時，取上限的 80%
pub const CEILING_ONLY_RATIO: f64 = 0.8;
/// 只有下限時，取下限的 120%
pub const FLOOR_ONLY_RATIO: f64 = 1.2;

/// Turns a stated salary range into one monthly figure in `target_currency`.
///
/// A range in another currency yields [`SalaryEstimate::Unknown`]; a missing
/// currency is assumed to be the target one. A bound stated as `0` is treated
/// the same as a missing bound, which is how the job boards encode "not given".
pub fn estimate(
    minimum: Option<f64>,
    maximum: Option<f64>,
    currency: Option<&str>,
    target_currency: &str,
) -> SalaryEstimate {
    if let Some(currency) = currency {
        if !currency.eq_ignore_ascii_case(target_currency) {
            return SalaryEstimate::Unknown;
        }
    }

    let minimum = minimum.filter(|v| *v > 0.0);
    let maximum = maximum.filter(|v| *v > 0.0);

    let value = match (minimum, maximum) {
        (None, None) => return SalaryEstimate::Unknown,
        (None, Some(max)) => max * CEILING_ONLY_RATIO,
        (Some(min), None) => min * FLOOR_ONLY_RATIO,
        (Some(min), Some(max)) => (min + max) / 2.0,
    };

    SalaryEstimate::Known(value.round() as u64)
}

pub fn estimate_range(salary: Option<&SalaryRange>, target_currency: &str) -> SalaryEstimate {
    match salary {
        Some(range) => estimate(
            range.from,
            range.to,
            range.currency.as_deref(),
            target_currency,
        ),
        None => SalaryEstimate::Unknown,
    }
}
