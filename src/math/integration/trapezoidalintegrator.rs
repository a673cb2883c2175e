use serde::Serialize;
use tracing::trace;

use crate::math::function::realfunction::RealFunction;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::interval::Interval;
use crate::math::point2d::Point2D;

// ─────────────────────────────────────────────────────────────────────────────
// TrapezoidalIntegrator
// ─────────────────────────────────────────────────────────────────────────────
//
// 三個運算共用同一個 h = (b - a) / n 與同一個增量規則：
//
//   increment_i = f(a + i·h) · h
//
// 增量不是有限值（±inf、NaN）時直接略過，部分和不受影響。
//
// 注意這是「左端點」加權（Riemann 左和），而不是 (f(x_i) + f(x_{i+1})) / 2 的
// 梯形平均公式；名稱沿用 trapezoidal。
//
// 取樣範圍：
//   integrate        i = 0 .. n-1   （n 個 panel）
//   sample_function  i = 0 ..= n    （含兩端點，n+1 個點）
//   sample_integral  i = 0 ..= n    （第 i 點的值 = integrate(a, a + (i+1)·h, i+1)）
//
// 因此對處處有限的 f，sample_integral 的第 n-1 點等於 integrate(a, b, n)，
// 最後一點另外多加了 x = b 的那一個增量。

/// 積分結果與被略過的非有限增量個數。
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Integral {
    value: f64,
    skipped: usize
}

impl Integral {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

pub struct TrapezoidalIntegrator<F: RealFunction> {
    f: F
}

impl<F: RealFunction> TrapezoidalIntegrator<F> {
    pub fn new(f: F) -> TrapezoidalIntegrator<F> {
        TrapezoidalIntegrator { f }
    }

    pub fn function(&self) -> &F {
        &self.f
    }

    /// ∫ₐᵇ f(x) dx 的左端點近似。n == 0 時回傳 `InvalidArgument`。
    pub fn integrate(&self, a: f64, b: f64, n: usize) -> Result<f64, IntegrationError> {
        self.integrate_detailed(a, b, n).map(|integral| integral.value)
    }

    /// 同 `integrate`，另外回報被略過的增量個數。
    pub fn integrate_detailed(&self, a: f64, b: f64, n: usize) -> Result<Integral, IntegrationError> {
        let interval = Interval::new(a, b, n)?;
        let h = interval.step();
        let mut sum = 0.0;
        let mut skipped = 0;
        for i in 0..interval.n() {
            let x = interval.x_at(i);
            let increment = self.f.value(x) * h;
            if increment.is_finite() {
                sum += increment;
            } else {
                trace!(x, "skipping non-finite increment");
                skipped += 1;
            }
        }
        Ok(Integral { value: sum, skipped })
    }

    /// (x, f(x))，i = 0 ..= n；f(x) 非有限的點整個省略。
    pub fn sample_function(&self, a: f64, b: f64, n: usize) -> Result<Vec<Point2D>, IntegrationError> {
        let interval = Interval::new(a, b, n)?;
        let points = (0..=interval.n())
            .map(|i| interval.x_at(i))
            .filter_map(|x| {
                let y = self.f.value(x);
                y.is_finite().then(|| Point2D::new(x, y))
            })
            .collect();
        Ok(points)
    }

    /// (x, 部分和)，i = 0 ..= n；增量非有限的點不輸出，部分和不變。
    pub fn sample_integral(&self, a: f64, b: f64, n: usize) -> Result<Vec<Point2D>, IntegrationError> {
        let interval = Interval::new(a, b, n)?;
        let h = interval.step();
        let mut sum = 0.0;
        let mut points = Vec::new();
        for i in 0..=interval.n() {
            let x = interval.x_at(i);
            let increment = self.f.value(x) * h;
            if increment.is_finite() {
                sum += increment;
                trace!(x, sum, "running integral");
                points.push(Point2D::new(x, sum));
            }
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reciprocal(x: f64) -> f64 {
        1.0 / x
    }

    #[test]
    fn test_zero_function() {
        let integrator = TrapezoidalIntegrator::new(|_x: f64| 0.0);
        assert_eq!(integrator.integrate(-3.0, 7.0, 17).unwrap(), 0.0);
        assert_eq!(integrator.integrate(0.0, 1.0, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_constant_is_exact_for_any_n() {
        let integrator = TrapezoidalIntegrator::new(|_x: f64| 2.5);
        for n in [1, 3, 10, 1000] {
            assert_relative_eq!(
                integrator.integrate(1.0, 5.0, n).unwrap(),
                10.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_identity_converges_to_fifty() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| x);
        let coarse = integrator.integrate(0.0, 10.0, 10).unwrap();
        let fine = integrator.integrate(0.0, 10.0, 1000).unwrap();

        // 左和：50 · (n - 1) / n
        assert_relative_eq!(coarse, 45.0, epsilon = 1e-9);
        assert_relative_eq!(fine, 49.95, epsilon = 1e-9);
        assert!((fine - 50.0).abs() < (coarse - 50.0).abs());
    }

    #[test]
    fn test_left_endpoint_weighting() {
        // f(x) = x², [0, 2], n = 2：h = 1，左和 = f(0) + f(1) = 1
        let integrator = TrapezoidalIntegrator::new(|x: f64| x * x);
        assert_relative_eq!(integrator.integrate(0.0, 2.0, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_reversed_interval_flips_sign() {
        let integrator = TrapezoidalIntegrator::new(|_x: f64| 1.0);
        assert_relative_eq!(integrator.integrate(2.0, 0.0, 4).unwrap(), -2.0);
    }

    #[test]
    fn test_single_singularity_is_skipped() {
        let integrator = TrapezoidalIntegrator::new(reciprocal);
        let integral = integrator.integrate_detailed(-1.0, 1.0, 2).unwrap();
        // x = -1 貢獻 -1，x = 0 為 inf 被略過
        assert_relative_eq!(integral.value(), -1.0);
        assert_eq!(integral.skipped(), 1);
    }

    #[test]
    fn test_sample_function_omits_singularity() {
        let integrator = TrapezoidalIntegrator::new(reciprocal);
        let points = integrator.sample_function(-1.0, 1.0, 4).unwrap();
        let xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
        assert_eq!(xs, vec![-1.0, -0.5, 0.5, 1.0]);
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_sample_function_single_panel_has_both_endpoints() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| 3.0 * x);
        let points = integrator.sample_function(1.0, 2.0, 1).unwrap();
        assert_eq!(points, vec![Point2D::new(1.0, 3.0), Point2D::new(2.0, 6.0)]);
    }

    #[test]
    fn test_sample_function_skips_nan() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| x.sqrt());
        let points = integrator.sample_function(-1.0, 1.0, 2).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x(), 0.0);
    }

    #[test]
    fn test_sample_integral_consistent_with_integrate() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| x.sin() + 0.5);
        let (a, b, n) = (0.0, 10.0, 250);
        let points = integrator.sample_integral(a, b, n).unwrap();
        assert_eq!(points.len(), n + 1);

        let total = integrator.integrate(a, b, n).unwrap();
        assert_eq!(points[n - 1].y(), total);

        let h = (b - a) / n as f64;
        let extended = integrator.integrate(a, b + h, n + 1).unwrap();
        assert_relative_eq!(points[n].y(), extended, max_relative = 1e-12);
    }

    #[test]
    fn test_sample_integral_skips_singularity_without_reset() {
        let integrator = TrapezoidalIntegrator::new(reciprocal);
        let points = integrator.sample_integral(-1.0, 1.0, 2).unwrap();
        // x = -1: -1；x = 0 略過；x = 1: -1 + 1 = 0
        assert_eq!(points, vec![Point2D::new(-1.0, -1.0), Point2D::new(1.0, 0.0)]);
    }

    #[test]
    fn test_sample_integral_decreases_where_negative() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| -x);
        let points = integrator.sample_integral(0.0, 4.0, 4).unwrap();
        let ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
        assert_eq!(ys, vec![0.0, -1.0, -3.0, -6.0, -10.0]);
    }

    #[test]
    fn test_sample_integral_of_undefined_function_is_empty() {
        let integrator = TrapezoidalIntegrator::new(|_x: f64| f64::NAN);
        let points = integrator.sample_integral(0.0, 1.0, 1 << 24).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| (x * 3.0).cos() / x);
        assert_eq!(
            integrator.integrate(-2.0, 3.0, 101).unwrap(),
            integrator.integrate(-2.0, 3.0, 101).unwrap()
        );
        assert_eq!(
            integrator.sample_function(-2.0, 3.0, 101).unwrap(),
            integrator.sample_function(-2.0, 3.0, 101).unwrap()
        );
        assert_eq!(
            integrator.sample_integral(-2.0, 3.0, 101).unwrap(),
            integrator.sample_integral(-2.0, 3.0, 101).unwrap()
        );
    }

    #[test]
    fn test_zero_panels_rejected_by_all_operations() {
        let integrator = TrapezoidalIntegrator::new(|x: f64| x);
        assert!(matches!(
            integrator.integrate(0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
        assert!(matches!(
            integrator.sample_function(0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
        assert!(matches!(
            integrator.sample_integral(0.0, 1.0, 0),
            Err(IntegrationError::InvalidArgument(_))
        ));
    }
}
