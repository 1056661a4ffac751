use crate::result::LoadTestResult;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub start_ms: f64,
    pub end_ms: f64,
    pub count: u64,
    /// Cumulative percentage up to `end_ms`
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileMarker {
    pub percentile: f64,
    pub value_ms: f64,
}

/// What the results chart draws for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub title: String,
    pub bars: Vec<ChartBar>,
    pub percentiles: Vec<PercentileMarker>,
    pub max_count: u64,
    pub summary: Vec<String>,
}

fn ms(secs: f64) -> f64 {
    secs * 1000.0
}

impl ChartSeries {
    pub fn from_result(result: &LoadTestResult) -> Self {
        if result.is_empty() {
            return Self::default();
        }

        let hist = &result.duration_histogram;
        let bars: Vec<ChartBar> = hist
            .data
            .iter()
            .map(|b| ChartBar {
                start_ms: ms(b.start),
                end_ms: ms(b.end),
                count: b.count,
                percent: b.percent,
            })
            .collect();
        let max_count = bars.iter().map(|b| b.count).max().unwrap_or(0);

        let percentiles = hist
            .percentiles
            .iter()
            .map(|p| PercentileMarker {
                percentile: p.percentile,
                value_ms: ms(p.value),
            })
            .collect();

        let title = format!(
            "Response time histogram at {:.1} qps ({} requested), {} connections for {:.1?}",
            result.actual_qps,
            if result.requested_qps.is_empty() {
                "max"
            } else {
                result.requested_qps.as_str()
            },
            result.num_threads,
            result.actual_duration(),
        );

        let mut summary = vec![
            format!("Requests: {}", hist.count),
            format!(
                "Latency avg {:.3} ms, min {:.3} ms, max {:.3} ms, stddev {:.3} ms",
                ms(hist.avg),
                ms(hist.min),
                ms(hist.max),
                ms(hist.std_dev)
            ),
        ];
        summary.extend(
            result
                .ret_codes
                .iter()
                .map(|(code, n)| format!("Code {}: {}", code, n)),
        );

        Self {
            title,
            bars,
            percentiles,
            max_count,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar height scaled so the tallest bar fills `height`
    pub fn bar_height(&self, count: u64, height: f64) -> f64 {
        if self.max_count == 0 {
            return 0.0;
        }
        count as f64 / self.max_count as f64 * height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::SAMPLE_RESULT;

    fn sample() -> ChartSeries {
        let result = LoadTestResult::parse(SAMPLE_RESULT).unwrap().unwrap();
        ChartSeries::from_result(&result)
    }

    #[test]
    fn test_empty_result_has_no_series() {
        let series = ChartSeries::from_result(&LoadTestResult::default());
        assert!(series.is_empty());
        assert_eq!(series.bar_height(10, 100.0), 0.0);
    }

    #[test]
    fn test_series_from_histogram() {
        let series = sample();
        assert_eq!(series.bars.len(), 3);
        assert_eq!(series.max_count, 2692);
        assert!((series.bars[0].end_ms - 2.0).abs() < 1e-9);
        assert!((series.percentiles[1].value_ms - 6.1).abs() < 1e-9);
        assert_eq!(series.percentiles[1].percentile, 99.0);
    }

    #[test]
    fn test_title_and_summary() {
        let series = sample();
        assert!(series
            .title
            .starts_with("Response time histogram at 99.7 qps (100 requested), 8 connections"));
        assert_eq!(series.summary[0], "Requests: 5982");
        assert!(series.summary.contains(&"Code 503: 12".to_string()));
    }

    #[test]
    fn test_bar_height_scales_to_tallest() {
        let series = sample();
        assert_eq!(series.bar_height(2692, 200.0), 200.0);
        assert!((series.bar_height(897, 200.0) - 66.64).abs() < 0.01);
    }
}
