use crate::math::integration::integrationerror::IntegrationError;

/// 積分區間 [a, b] 與 panel 數 n。
///
/// `a > b` 是允許的：此時 h 為負，積分結果依方向變號。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
    n: usize
}

impl Interval {
    pub fn new(a: f64, b: f64, n: usize) -> Result<Interval, IntegrationError> {
        if n == 0 {
            return Err(IntegrationError::InvalidArgument(
                "panel count n must be positive".to_owned()
            ));
        }
        if !a.is_finite() || !b.is_finite() {
            return Err(IntegrationError::InvalidArgument(format!(
                "interval bounds must be finite, got [{}, {}]", a, b
            )));
        }
        Ok(Interval { a, b, n })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// h = (b - a) / n
    pub fn step(&self) -> f64 {
        (self.b - self.a) / self.n as f64
    }

    /// 第 i 個取樣點 x_i = a + i·h（每次直接由 a 計算，不累加 h）。
    pub fn x_at(&self, i: usize) -> f64 {
        self.a + i as f64 * self.step()
    }
}
