//! Line chart model for the closing-price series.
//!
//! The charting widget itself is external; this builds everything it consumes:
//! the literal point sequence, which date labels to draw, the auto-fit y range,
//! and the tooltip text for each point.

use crate::domain::history::HistoryPoint;
use crate::shared::fmt::format_currency;
use rust_decimal::prelude::*;
use std::fmt;

/// Aim for at most about this many visible date labels.
pub const TARGET_LABELS: usize = 6;

/// Number of evenly spaced y-axis ticks, ends included.
pub const Y_TICKS: usize = 5;

/// Series name shown in tooltips.
pub const SERIES_NAME: &str = "Close";

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Label interval: show every Nth date label, `N = len / 6`. Zero means all.
pub fn label_interval(len: usize) -> usize {
    len / TARGET_LABELS
}

/// Whether the date label at `index` is drawn for the given interval.
pub fn label_visible(index: usize, interval: usize) -> bool {
    interval == 0 || index % interval == 0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date_label: String,
    pub close: Decimal,
    pub label_visible: bool,
}

/// Y domain fitted to the data.
#[derive(Debug, Clone, PartialEq)]
pub struct YAxis {
    pub min: Decimal,
    pub max: Decimal,
    pub ticks: Vec<String>,
}

impl YAxis {
    fn fit(points: &[HistoryPoint]) -> Option<Self> {
        let min = points.iter().map(|p| p.close).min()?;
        let max = points.iter().map(|p| p.close).max()?;

        let ticks = if min == max {
            vec![format_currency(&min)]
        } else {
            let step = (max - min) / Decimal::from(Y_TICKS - 1);
            (0..Y_TICKS)
                .map(|i| format_currency(&(min + step * Decimal::from(i))))
                .collect()
        };

        Some(Self { min, max, ticks })
    }
}

/// Hover text for a single point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub label: String,
    pub series: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub points: Vec<ChartPoint>,
    pub label_interval: usize,
    pub y_axis: Option<YAxis>,
}

impl ChartView {
    pub fn new(history: &[HistoryPoint]) -> Self {
        let interval = label_interval(history.len());
        let points = history
            .iter()
            .enumerate()
            .map(|(i, p)| ChartPoint {
                date_label: p.date_label(),
                close: p.close,
                label_visible: label_visible(i, interval),
            })
            .collect();

        Self {
            points,
            label_interval: interval,
            y_axis: YAxis::fit(history),
        }
    }

    pub fn visible_labels(&self) -> Vec<&str> {
        self.points
            .iter()
            .filter(|p| p.label_visible)
            .map(|p| p.date_label.as_str())
            .collect()
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|p| Tooltip {
            label: format!("Date: {}", p.date_label),
            series: SERIES_NAME,
            value: format_currency(&p.close),
        })
    }

    /// One block character per point, scaled between the axis bounds.
    pub fn sparkline(&self) -> String {
        let Some(axis) = &self.y_axis else {
            return String::new();
        };
        let span = axis.max - axis.min;
        let top = Decimal::from(SPARK_LEVELS.len() - 1);

        self.points
            .iter()
            .map(|p| {
                let level = if span.is_zero() {
                    0
                } else {
                    ((p.close - axis.min) / span * top)
                        .round()
                        .to_usize()
                        .unwrap_or(0)
                };
                SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
            })
            .collect()
    }
}

impl fmt::Display for ChartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.y_axis {
            Some(axis) => writeln!(
                f,
                "{} ({} .. {})",
                SERIES_NAME,
                format_currency(&axis.min),
                format_currency(&axis.max)
            )?,
            None => return writeln!(f, "{} (no data)", SERIES_NAME),
        }
        writeln!(f, "{}", self.sparkline())?;
        writeln!(f, "{}", self.visible_labels().join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(closes: &[i64]) -> Vec<HistoryPoint> {
        let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| HistoryPoint::new(start + Duration::days(i as i64), Decimal::from(*c)))
            .collect()
    }

    #[test]
    fn test_label_interval() {
        assert_eq!(label_interval(0), 0);
        assert_eq!(label_interval(5), 0);
        assert_eq!(label_interval(6), 1);
        assert_eq!(label_interval(12), 2);
        assert_eq!(label_interval(250), 41);
    }

    #[test]
    fn test_twelve_points_show_every_second_label() {
        let chart = ChartView::new(&series(&[100; 12]));
        assert_eq!(chart.label_interval, 2);
        let visible: Vec<bool> = chart.points.iter().map(|p| p.label_visible).collect();
        assert_eq!(
            visible,
            [true, false, true, false, true, false, true, false, true, false, true, false]
        );
        assert_eq!(chart.visible_labels().len(), 6);
    }

    #[test]
    fn test_short_series_shows_all_labels() {
        let chart = ChartView::new(&series(&[1, 2, 3, 4, 5]));
        assert_eq!(chart.label_interval, 0);
        assert_eq!(chart.visible_labels().len(), 5);
    }

    #[test]
    fn test_long_series_label_count_bounded() {
        for len in [6, 7, 13, 100, 251] {
            let chart = ChartView::new(&series(&vec![1; len]));
            assert!(chart.visible_labels().len() <= 2 * TARGET_LABELS, "len {len}");
        }
    }

    #[test]
    fn test_points_follow_input_order() {
        let chart = ChartView::new(&series(&[300, 100, 200]));
        let closes: Vec<Decimal> = chart.points.iter().map(|p| p.close).collect();
        assert_eq!(closes, [Decimal::from(300), Decimal::from(100), Decimal::from(200)]);
        assert_eq!(chart.points[0].date_label, "2025-02-03");
        assert_eq!(chart.points[2].date_label, "2025-02-05");
    }

    #[test]
    fn test_y_axis_fits_data() {
        let chart = ChartView::new(&series(&[28000, 24000, 32000]));
        let axis = chart.y_axis.unwrap();
        assert_eq!(axis.min, Decimal::from(24000));
        assert_eq!(axis.max, Decimal::from(32000));
        assert_eq!(
            axis.ticks,
            ["¥24,000", "¥26,000", "¥28,000", "¥30,000", "¥32,000"]
        );
    }

    #[test]
    fn test_y_axis_flat_and_empty() {
        let flat = ChartView::new(&series(&[500, 500]));
        assert_eq!(flat.y_axis.unwrap().ticks, ["¥500"]);
        assert!(ChartView::new(&[]).y_axis.is_none());
    }

    #[test]
    fn test_tooltip_uses_currency_format() {
        let mut points = series(&[0]);
        points[0].close = Decimal::new(12345, 1);
        let chart = ChartView::new(&points);
        let tip = chart.tooltip(0).unwrap();
        assert_eq!(tip.value, "¥1,235");
        assert_eq!(tip.label, "Date: 2025-02-03");
        assert_eq!(tip.series, "Close");
        assert!(chart.tooltip(1).is_none());
    }

    #[test]
    fn test_sparkline() {
        let chart = ChartView::new(&series(&[0, 2, 14]));
        assert_eq!(chart.sparkline(), "▁▂█");
        assert_eq!(ChartView::new(&series(&[3, 3])).sparkline(), "▁▁");
    }
}
