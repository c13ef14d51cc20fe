//! Small numeric routines behind the dashboard's trend line, correlation
//! card and distribution plots.

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearTrend {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Pearson product-moment correlation with its two-tailed p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub coefficient: f64,
    pub p_value: f64,
    pub sample_size: usize,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Centered sums of squares and cross products: (sxx, syy, sxy).
fn moments(xs: &[f64], ys: &[f64]) -> (f64, f64, f64) {
    let mx = mean(xs);
    let my = mean(ys);
    xs.iter().zip(ys).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&x, &y)| {
        let dx = x - mx;
        let dy = y - my;
        (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
    })
}

/// All values equal. Checked directly since centered sums of a constant
/// series need not come out as exactly zero.
fn constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

fn usable(xs: &[f64], ys: &[f64]) -> bool {
    xs.len() == ys.len() && xs.len() >= 2 && xs.iter().chain(ys).all(|v| v.is_finite())
}

/// Degree-1 least-squares fit of `ys` against `xs`.
///
/// `None` when the series differ in length, have fewer than two points, or
/// `xs` has no spread.
pub fn linear_trend(xs: &[f64], ys: &[f64]) -> Option<LinearTrend> {
    if !usable(xs, ys) || constant(xs) {
        return None;
    }
    let (sxx, _, sxy) = moments(xs, ys);
    if sxx == 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    let intercept = mean(ys) - slope * mean(xs);
    Some(LinearTrend { slope, intercept })
}

/// Pearson correlation between two series.
///
/// `None` when the series differ in length, have fewer than two points, or
/// either has zero variance.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<Correlation> {
    if !usable(xs, ys) || constant(xs) || constant(ys) {
        return None;
    }
    let (sxx, syy, sxy) = moments(xs, ys);
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    let n = xs.len();
    Some(Correlation {
        coefficient: r,
        p_value: correlation_p_value(r, n),
        sample_size: n,
    })
}

/// Two-tailed p-value of `r` under the null hypothesis of no correlation,
/// using Student's t with `n - 2` degrees of freedom.
fn correlation_p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    let one_minus_r2 = 1.0 - r * r;
    if one_minus_r2 <= 0.0 {
        return 0.0;
    }
    // P(|T| > t) = I_{df / (df + t^2)}(df / 2, 1 / 2) and
    // df / (df + t^2) simplifies to 1 - r^2.
    regularized_incomplete_beta(df / 2.0, 0.5, one_minus_r2).clamp(0.0, 1.0)
}

/// Lanczos approximation of ln Γ(x) for x > 0.
fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.001_208_650_973_866_179,
        -0.000_005_395_239_384_953,
    ];
    let tmp = x + 5.5;
    let tmp = tmp - (x + 0.5) * tmp.ln();
    let mut ser = 1.000_000_000_190_015;
    let mut y = x;
    for c in COEFFS {
        y += 1.0;
        ser += c / y;
    }
    -tmp + (2.506_628_274_631_000_5 * ser / x).ln()
}

/// Regularized incomplete beta function I_x(a, b).
pub fn regularized_incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();
    // The continued fraction converges quickly for x < (a + 1) / (a + b + 2).
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Lentz evaluation of the incomplete beta continued fraction.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITERATIONS: usize = 300;
    const EPSILON: f64 = 3.0e-14;
    const TINY: f64 = 1.0e-300;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;
    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < TINY {
        d = TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITERATIONS {
        let m = m as f64;
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPSILON {
            break;
        }
    }
    h
}

// ---------------------------------------------------------------------------
// Distribution summaries
// ---------------------------------------------------------------------------

/// Tukey box-plot summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
}

/// Quantile of an ascending slice with linear interpolation between ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Quartiles plus whiskers at the most extreme values within 1.5 IQR.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted.iter().copied().find(|&v| v >= low_fence).unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|&v| v <= high_fence)
        .unwrap_or(q3);

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
    })
}

/// Gaussian kernel density sampled at `points` evenly spaced positions
/// spanning the data range padded by two bandwidths. Bandwidth follows
/// Silverman's rule of thumb. Returns `(position, density)` pairs.
pub fn kernel_density(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    let data: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if data.len() < 2 || points < 2 {
        return Vec::new();
    }
    let n = data.len() as f64;
    let m = mean(&data);
    let std_dev = (data.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
    if std_dev == 0.0 {
        return Vec::new();
    }
    let bandwidth = 1.06 * std_dev * n.powf(-0.2);

    let min = data.iter().copied().fold(f64::INFINITY, f64::min) - 2.0 * bandwidth;
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 2.0 * bandwidth;
    let step = (max - min) / (points - 1) as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..points)
        .map(|i| {
            let x = min + step * i as f64;
            let density: f64 = data
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum();
            (x, density * norm)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn trend_through_two_points() {
        let t = linear_trend(&[1.0, 2.0], &[2.0, 4.0]).unwrap();
        assert!(close(t.slope, 2.0, 1e-12));
        assert!(close(t.intercept, 0.0, 1e-12));
        assert!(close(t.at(3.0), 6.0, 1e-12));
    }

    #[test]
    fn trend_on_degenerate_input_is_undefined() {
        assert_eq!(linear_trend(&[1.0], &[2.0]), None);
        assert_eq!(linear_trend(&[], &[]), None);
        assert_eq!(linear_trend(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(linear_trend(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn perfect_correlation() {
        let c = pearson_correlation(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!(close(c.coefficient, 1.0, 1e-12));
        assert!(close(c.p_value, 0.0, 1e-12));
        assert_eq!(c.sample_size, 4);
    }

    #[test]
    fn correlation_p_value_matches_reference() {
        // Reference values from scipy.stats.pearsonr.
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
        let c = pearson_correlation(&xs, &ys).unwrap();
        assert!(close(c.coefficient, 0.8, 1e-12));
        assert!(close(c.p_value, 0.104_088_039_053_106_2, 1e-6));
    }

    #[test]
    fn two_points_are_never_significant() {
        let c = pearson_correlation(&[1.0, 2.0], &[5.0, 3.0]).unwrap();
        assert!(close(c.coefficient, -1.0, 1e-12));
        assert_eq!(c.p_value, 1.0);
    }

    #[test]
    fn correlation_on_degenerate_input_is_undefined() {
        assert_eq!(pearson_correlation(&[1.0], &[1.0]), None);
        assert_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]), None);
        assert_eq!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), None);
        assert_eq!(pearson_correlation(&[1.0, f64::NAN], &[1.0, 2.0]), None);
    }

    #[test]
    fn constant_fractional_series_has_no_trend_or_correlation() {
        // The mean of 0.1, 0.1, 0.1 is not exactly 0.1.
        let flat = [0.1, 0.1, 0.1];
        let ramp = [1.0, 2.0, 3.0];
        assert_eq!(linear_trend(&flat, &ramp), None);
        assert_eq!(pearson_correlation(&ramp, &flat), None);
        assert_eq!(pearson_correlation(&flat, &ramp), None);
        assert!(linear_trend(&ramp, &flat).is_some());
    }

    #[test]
    fn incomplete_beta_known_values() {
        // I_x(1, 1) = x and I_x(a, b) = 1 - I_{1-x}(b, a).
        assert!(close(regularized_incomplete_beta(1.0, 1.0, 0.3), 0.3, 1e-10));
        let lhs = regularized_incomplete_beta(2.5, 0.5, 0.4);
        let rhs = 1.0 - regularized_incomplete_beta(0.5, 2.5, 0.6);
        assert!(close(lhs, rhs, 1e-10));
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 0.0), 0.0);
        assert_eq!(regularized_incomplete_beta(2.0, 3.0, 1.0), 1.0);
    }

    #[test]
    fn quartiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile(&sorted, 0.25), Some(1.75));
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn whiskers_exclude_outliers() {
        let b = box_summary(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]).unwrap();
        assert_eq!(b.median, 3.5);
        assert_eq!(b.lower_whisker, 1.0);
        assert_eq!(b.upper_whisker, 5.0);
        assert_eq!(box_summary(&[]), None);
    }

    #[test]
    fn density_integrates_to_about_one() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i % 10)).collect();
        let curve = kernel_density(&values, 200);
        assert_eq!(curve.len(), 200);
        let step = curve[1].0 - curve[0].0;
        let area: f64 = curve.iter().map(|(_, d)| d * step).sum();
        assert!(close(area, 1.0, 0.02), "area {area}");
        assert!(kernel_density(&[4.0, 4.0], 10).is_empty());
    }
}
