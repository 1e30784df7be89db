use crate::models::MetricSeries;
use crate::utils::TimeUtils;

/// Snapshot of everything the chart draws for one selection:
/// both axis domains plus the line vertices in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub line: Vec<[f64; 2]>,
}

impl ChartFrame {
    /// Degenerate frame for an empty series; keeps the plot bounds well-formed.
    pub fn empty() -> Self {
        Self {
            x_domain: (0.0, 1.0),
            y_domain: (0.0, 1.0),
            line: Vec::new(),
        }
    }

    pub fn from_series(series: &MetricSeries) -> Self {
        let (Some((d0, d1)), Some((y0, y1))) = (series.date_extent(), series.value_domain())
        else {
            return Self::empty();
        };

        let line = series
            .points()
            .iter()
            .map(|p| [TimeUtils::date_to_x(p.date), p.value])
            .collect();

        Self {
            // One day / 1% fallback spans keep a single-point series drawable
            x_domain: widened(TimeUtils::date_to_x(d0), TimeUtils::date_to_x(d1), 1.0),
            y_domain: widened(y0, y1, (y0.abs() * 0.01).max(1e-6)),
            line,
        }
    }
}

/// Guarantees a non-degenerate span when the extent collapses to a point.
fn widened(lo: f64, hi: f64, fallback_pad: f64) -> (f64, f64) {
    if hi - lo < f64::EPSILON {
        (lo - fallback_pad, hi + fallback_pad)
    } else {
        (lo, hi)
    }
}

/// Eased interpolation between two chart frames over a fixed duration.
///
/// Retargeting mid-flight starts the new transition from the interpolated
/// frame, so rapid control changes never jump.
#[derive(Debug, Clone)]
pub struct ChartTransition {
    from: ChartFrame,
    to: ChartFrame,
    start: f64,
    duration: f64,
}

impl ChartTransition {
    /// A finished transition pinned at `frame`.
    pub fn settled(frame: ChartFrame) -> Self {
        Self {
            from: frame.clone(),
            to: frame,
            start: 0.0,
            duration: 0.0,
        }
    }

    pub fn retarget(&self, to: ChartFrame, now: f64, duration: f64) -> Self {
        Self {
            from: self.frame_at(now),
            to,
            start: now,
            duration,
        }
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration
    }

    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// The frame to draw at time `now`.
    pub fn frame_at(&self, now: f64) -> ChartFrame {
        let t = ease_in_out_cubic(self.progress(now));
        if t >= 1.0 {
            return self.to.clone();
        }

        ChartFrame {
            x_domain: (
                lerp(self.from.x_domain.0, self.to.x_domain.0, t),
                lerp(self.from.x_domain.1, self.to.x_domain.1, t),
            ),
            y_domain: (
                lerp(self.from.y_domain.0, self.to.y_domain.0, t),
                lerp(self.from.y_domain.1, self.to.y_domain.1, t),
            ),
            line: morph_line(&self.from.line, &self.to.line, t),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Interpolate two polylines of (possibly) different lengths by resampling
/// both onto a common parameter grid.
fn morph_line(from: &[[f64; 2]], to: &[[f64; 2]], t: f64) -> Vec<[f64; 2]> {
    if from.is_empty() || to.is_empty() {
        // Nothing to morph from/to; snap to the target shape
        return to.to_vec();
    }

    let n = from.len().max(to.len()).max(2);
    let a = resample(from, n);
    let b = resample(to, n);
    a.iter()
        .zip(&b)
        .map(|(p, q)| [lerp(p[0], q[0], t), lerp(p[1], q[1], t)])
        .collect()
}

/// Sample a polyline at `n` evenly spaced positions along its index range.
fn resample(line: &[[f64; 2]], n: usize) -> Vec<[f64; 2]> {
    debug_assert!(!line.is_empty());
    if line.len() == 1 {
        return vec![line[0]; n];
    }

    (0..n)
        .map(|i| {
            let pos = i as f64 / (n - 1) as f64 * (line.len() - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(line.len() - 1);
            let frac = pos - lo as f64;
            [
                lerp(line[lo][0], line[hi][0], frac),
                lerp(line[lo][1], line[hi][1], frac),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: (f64, f64), y: (f64, f64), line: Vec<[f64; 2]>) -> ChartFrame {
        ChartFrame {
            x_domain: x,
            y_domain: y,
            line,
        }
    }

    #[test]
    fn settled_transition_reports_its_frame() {
        let f = frame((0.0, 10.0), (1.0, 2.0), vec![[0.0, 1.0], [10.0, 2.0]]);
        let t = ChartTransition::settled(f.clone());
        assert!(t.is_finished(0.0));
        assert_eq!(t.frame_at(123.0), f);
    }

    #[test]
    fn transition_starts_at_from_and_ends_at_to() {
        let a = frame((0.0, 10.0), (0.0, 1.0), vec![[0.0, 0.0], [10.0, 1.0]]);
        let b = frame((5.0, 20.0), (2.0, 4.0), vec![[5.0, 2.0], [20.0, 4.0]]);

        let t = ChartTransition::settled(a.clone()).retarget(b.clone(), 100.0, 0.5);
        assert_eq!(t.frame_at(100.0), a);
        assert_eq!(t.frame_at(100.5), b);
        assert!(!t.is_finished(100.2));
        assert!(t.is_finished(100.5));
    }

    #[test]
    fn midpoint_domains_sit_between_endpoints() {
        let a = frame((0.0, 10.0), (0.0, 1.0), vec![[0.0, 0.0], [10.0, 1.0]]);
        let b = frame((10.0, 30.0), (2.0, 5.0), vec![[10.0, 2.0], [30.0, 5.0]]);

        let t = ChartTransition::settled(a).retarget(b, 0.0, 1.0);
        let mid = t.frame_at(0.5);
        assert!(mid.x_domain.0 > 0.0 && mid.x_domain.0 < 10.0);
        assert!(mid.x_domain.1 > 10.0 && mid.x_domain.1 < 30.0);
        assert!(mid.y_domain.0 > 0.0 && mid.y_domain.0 < 2.0);
        assert!(mid.y_domain.1 > 1.0 && mid.y_domain.1 < 5.0);
    }

    #[test]
    fn morphing_from_empty_snaps_to_target_shape() {
        let a = ChartFrame::empty();
        let b = frame((0.0, 10.0), (0.0, 1.0), vec![[0.0, 0.5], [10.0, 0.7]]);

        let t = ChartTransition::settled(a).retarget(b.clone(), 0.0, 1.0);
        assert_eq!(t.frame_at(0.5).line, b.line);
    }

    #[test]
    fn morphed_lines_share_a_common_sample_count() {
        let a = frame((0.0, 2.0), (0.0, 1.0), vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
        let b = frame(
            (0.0, 3.0),
            (0.0, 1.0),
            vec![[0.0, 1.0], [1.0, 0.0], [2.0, 1.0], [3.0, 0.0], [3.5, 0.5]],
        );

        let t = ChartTransition::settled(a).retarget(b, 0.0, 1.0);
        assert_eq!(t.frame_at(0.5).line.len(), 5);
    }

    #[test]
    fn resample_preserves_endpoints() {
        let line = vec![[0.0, 0.0], [1.0, 5.0], [4.0, 2.0]];
        let out = resample(&line, 7);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0], [0.0, 0.0]);
        assert_eq!(out[6], [4.0, 2.0]);
    }

    #[test]
    fn easing_is_monotone_within_bounds() {
        let mut last = ease_in_out_cubic(0.0);
        assert_eq!(last, 0.0);
        for i in 1..=100 {
            let e = ease_in_out_cubic(i as f64 / 100.0);
            assert!(e >= last && (0.0..=1.0).contains(&e));
            last = e;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn single_point_series_gets_a_drawable_frame() {
        use crate::domain::{Metric, MetricPoint};
        use crate::models::MetricSeries;
        use chrono::NaiveDate;

        let s = MetricSeries::new(
            "bitcoin".into(),
            Metric::PriceUsd,
            vec![MetricPoint {
                date: NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
                value: 430.0,
            }],
        );
        let f = ChartFrame::from_series(&s);
        assert!(f.x_domain.1 > f.x_domain.0);
        assert!(f.y_domain.1 > f.y_domain.0);
        assert_eq!(f.line.len(), 1);
    }
}
