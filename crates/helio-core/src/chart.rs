//! Geometry for the inline SVG charts.

/// Plot area inside an SVG viewBox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl PlotArea {
    /// Area of `width` × `height` inset by `padding` on every side.
    #[must_use]
    pub fn inset(width: f64, height: f64, padding: f64) -> Self {
        Self {
            x: padding,
            y: padding,
            width: (width - 2.0 * padding).max(0.0),
            height: (height - 2.0 * padding).max(0.0),
        }
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// One rectangle of a grouped bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// Category index.
    pub category: usize,
    /// Series index.
    pub series: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

/// Round `max` up to 1, 2, 2.5 or 5 times a power of ten; `1` for empty or non-positive input.
#[must_use]
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(exponent(max));
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Largest finite value across all series.
#[must_use]
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> f64 {
    series
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .filter(|value| value.is_finite())
        .fold(0.0, f64::max)
}

/// Lay out grouped bars: one group per category, one bar per series in each group.
#[must_use]
pub fn bar_layout(series: &[&[f64]], area: PlotArea, gap_ratio: f64) -> Vec<Bar> {
    let categories = series.iter().map(|values| values.len()).max().unwrap_or(0);
    if categories == 0 || area.width <= 0.0 || area.height <= 0.0 {
        return Vec::new();
    }
    let ceiling = nice_ceiling(series_max(series.iter().copied()));
    let group_width = area.width / count_f64(categories);
    let inner_width = group_width * (1.0 - gap_ratio.clamp(0.0, 0.9));
    let bar_width = inner_width / count_f64(series.len());
    let group_offset = (group_width - inner_width) / 2.0;

    let mut bars = Vec::with_capacity(categories * series.len());
    for (series_idx, values) in series.iter().enumerate() {
        for (category, value) in values.iter().copied().enumerate() {
            let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let height = area.height * (value / ceiling);
            bars.push(Bar {
                category,
                series: series_idx,
                x: area.x + group_width * count_f64(category) + group_offset + bar_width * count_f64(series_idx),
                y: area.bottom() - height,
                width: bar_width,
                height,
            });
        }
    }
    bars
}

/// SVG `points` attribute for a polyline through `values`.
#[must_use]
pub fn line_points(values: &[f64], area: PlotArea, ceiling: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let ceiling = if ceiling.is_finite() && ceiling > 0.0 { ceiling } else { 1.0 };
    let step = if values.len() > 1 {
        area.width / count_f64(values.len() - 1)
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let value = if value.is_finite() { value.clamp(0.0, ceiling) } else { 0.0 };
            let x = area.x + step * count_f64(idx);
            let y = area.bottom() - area.height * (value / ceiling);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(clippy::cast_possible_truncation)]
fn exponent(value: f64) -> i32 {
    value.log10().floor() as i32
}

#[allow(clippy::cast_precision_loss)]
const fn count_f64(count: usize) -> f64 {
    count as f64
}
