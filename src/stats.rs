/// Arithmetic mean over the values yielded, or `None` when the iterator is
/// empty. Null inputs are expected to be filtered out by the caller, so an
/// all-null group becomes an explicit `None` rather than a NaN.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0u64;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
