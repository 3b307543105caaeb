//! Shared pieces of the CSV column injectors: the synthetic value tables and
//! the bucket-count allocation they distribute rows with.

/// Coupon codes and their target share of the rows. The blank bucket is last
/// on purpose: it absorbs the rounding remainder.
pub const COUPON_DISTRIBUTION: [(&str, f64); 4] = [
    ("SAVE10", 0.50),
    ("SAVE15", 0.25),
    ("SAVE20", 0.15),
    ("", 0.10),
];

/// Promotion strings assigned uniformly at random per row.
pub const PROMOTIONS: [&str; 3] = [
    "10% off on skin essentials",
    "15% off on new range",
    "5% off on new launches",
];

/// Turn a ratio table into per-bucket row counts for `n` rows. Every bucket
/// except the last is rounded; the last takes the remainder, so the counts
/// always sum to exactly `n`.
pub fn allocate_bucket_counts<'a>(
    n: usize,
    distribution: &[(&'a str, f64)],
) -> Vec<(&'a str, usize)> {
    let Some((&(last_label, _), head)) = distribution.split_last() else {
        return Vec::new();
    };

    let mut counts: Vec<(&str, usize)> = Vec::with_capacity(distribution.len());
    let mut remainder = n as i64;
    for &(label, ratio) in head {
        let count = (n as f64 * ratio).round() as usize;
        counts.push((label, count));
        remainder -= count as i64;
    }
    counts.push((last_label, remainder.max(0) as usize));
    counts
}

/// Flatten bucket counts into one value per row, in bucket order. Callers
/// shuffle the result before applying it.
pub fn bucket_values<'a>(counts: &[(&'a str, usize)]) -> Vec<&'a str> {
    let mut values = Vec::with_capacity(counts.iter().map(|(_, count)| count).sum());
    for &(label, count) in counts {
        values.extend(std::iter::repeat_n(label, count));
    }
    values
}

/// Duplicate-column guard: the injectors no-op when the target column is
/// already present in the header.
pub fn has_column(header: &[String], name: &str) -> bool {
    header.iter().any(|column| column == name)
}
