/// Descriptive statistics summarizing a column of values.
///
/// Holds the usual measures of central tendency and dispersion for a
/// dataset of `f64` values. NaN values are expected to be filtered out by the
/// caller; missing cells are represented as `None` upstream, never as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values summarized.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The population variance of the dataset.
    pub variance: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use titanic_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when the data is already sorted to skip the sorting step.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let median = if count % 2 == 0 {
            f64::midpoint(sorted_values[count / 2 - 1], sorted_values[count / 2])
        } else {
            sorted_values[count / 2]
        };
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
        })
    }
}

/// Arithmetic mean of the values, or `None` for an empty input.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
