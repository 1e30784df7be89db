use chrono::NaiveDate;

use crate::config::DATASET;
use crate::domain::{Metric, MetricPoint};

/// The series currently bound to the chart: one coin, one metric, and the
/// date-ascending points where that metric is present.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub coin: String,
    pub metric: Metric,
    points: Vec<MetricPoint>,
}

impl MetricSeries {
    pub fn new(coin: String, metric: Metric, points: Vec<MetricPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].date <= w[1].date),
            "series points must be date-ascending"
        );
        Self {
            coin,
            metric,
            points,
        }
    }

    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Min/max of the values with the chart's padding factor applied,
    /// so the line clears the plot edges.
    pub fn value_domain(&self) -> Option<(f64, f64)> {
        let mut values = self.points.iter().map(|p| p.value);
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some((min / DATASET.domain_padding, max * DATASET.domain_padding))
    }

    /// The single closest-in-time point to `target`.
    ///
    /// Bisection over the date-sorted points, then a neighbor comparison.
    /// Out-of-range targets clamp to the first/last point; ties go to the
    /// earlier record.
    pub fn nearest_point(&self, target: NaiveDate) -> Option<&MetricPoint> {
        if self.points.is_empty() {
            return None;
        }

        let i = self.points.partition_point(|p| p.date < target);
        if i == 0 {
            return self.points.first();
        }
        if i == self.points.len() {
            return self.points.last();
        }

        let before = &self.points[i - 1];
        let after = &self.points[i];
        if target - before.date > after.date - target {
            Some(after)
        } else {
            Some(before)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn series(points: &[(NaiveDate, f64)]) -> MetricSeries {
        let points = points
            .iter()
            .map(|&(date, value)| MetricPoint { date, value })
            .collect();
        MetricSeries::new("bitcoin".into(), Metric::PriceUsd, points)
    }

    #[test]
    fn empty_series_has_no_domains() {
        let s = series(&[]);
        assert!(s.is_empty());
        assert_eq!(s.date_extent(), None);
        assert_eq!(s.value_domain(), None);
        assert_eq!(s.nearest_point(date(2016, 1, 1)), None);
    }

    #[test]
    fn value_domain_pads_min_and_max() {
        let s = series(&[
            (date(2016, 1, 1), 200.0),
            (date(2016, 1, 2), 100.0),
            (date(2016, 1, 3), 400.0),
        ]);
        let (lo, hi) = s.value_domain().unwrap();
        assert!(lo < 100.0 && lo > 99.0);
        assert!(hi > 400.0 && hi < 403.0);
    }

    #[test]
    fn nearest_picks_closer_neighbor() {
        let s = series(&[
            (date(2016, 1, 1), 1.0),
            (date(2016, 1, 11), 2.0),
            (date(2016, 1, 31), 3.0),
        ]);

        // 3 days from the 1st, 7 from the 11th
        assert_eq!(s.nearest_point(date(2016, 1, 4)).unwrap().value, 1.0);
        // 8 days from the 1st, 2 from the 11th
        assert_eq!(s.nearest_point(date(2016, 1, 9)).unwrap().value, 2.0);
        // 9 days from the 11th, 11 from the 31st
        assert_eq!(s.nearest_point(date(2016, 1, 20)).unwrap().value, 2.0);
    }

    #[test]
    fn nearest_ties_go_to_earlier_record() {
        let s = series(&[(date(2016, 1, 1), 1.0), (date(2016, 1, 3), 2.0)]);
        assert_eq!(s.nearest_point(date(2016, 1, 2)).unwrap().value, 1.0);
    }

    #[test]
    fn nearest_exact_hit() {
        let s = series(&[
            (date(2016, 1, 1), 1.0),
            (date(2016, 1, 11), 2.0),
            (date(2016, 1, 31), 3.0),
        ]);
        assert_eq!(s.nearest_point(date(2016, 1, 11)).unwrap().value, 2.0);
    }

    #[test]
    fn nearest_clamps_out_of_range_targets() {
        let s = series(&[(date(2016, 1, 10), 1.0), (date(2016, 1, 20), 2.0)]);
        assert_eq!(s.nearest_point(date(2015, 6, 1)).unwrap().value, 1.0);
        assert_eq!(s.nearest_point(date(2017, 6, 1)).unwrap().value, 2.0);
    }
}
