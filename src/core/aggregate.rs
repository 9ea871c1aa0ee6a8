use crate::domain::model::SalaryEstimate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalarySummary {
    pub processed: u64,
    pub average: u64,
}

/// Averages the known estimates; unknown ones are dropped. Empty input gives zeros.
pub fn aggregate<I>(estimates: I) -> SalarySummary
where
    I: IntoIterator<Item = SalaryEstimate>,
{
    let (processed, total) = estimates
        .into_iter()
        .filter_map(SalaryEstimate::value)
        .fold((0u64, 0u128), |(count, sum), value| {
            (count + 1, sum + u128::from(value))
        });

    if processed == 0 {
        return SalarySummary::default();
    }

    SalarySummary {
        processed,
        average: (total / u128::from(processed)) as u64,
    }
}
