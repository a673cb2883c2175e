use crate::math::curve::curve::Curve;
use crate::math::point2d::Point2D;
use crate::math::round::{
    decimals_for_step,
    round
};

/// 每個要求的刻度最多容許的實際刻度數。
const MAX_TICKS_PER_COUNT: f64 = 10.0;

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────
//
// 仿射映射 domain → range：
//
//   value(x) = r0 + (x - d0) · (r1 - r0) / (d1 - d0)
//
// 用來把資料座標轉成畫面座標（y 軸的 range 通常是反向的）。

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64)
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> LinearScale {
        LinearScale { domain, range }
    }

    /// 約 `count` 個「好看」的刻度，間距為 1、2、5 乘上 10 的次方。
    ///
    /// 刻度依 domain 的方向排列。domain 窄到或寬到間距無法以 f64 表示時回傳空集合。
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return Vec::new();
        }
        if d0 == d1 {
            return vec![d0];
        }
        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };

        let raw_step = (hi - lo) / count as f64;
        if !raw_step.is_finite() || raw_step == 0.0 {
            return Vec::new();
        }
        let power = raw_step.log10().floor();
        let error = raw_step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };

        // 小於 1 的間距改用倒數計算，避免 0.1 之類無法精確表示的乘法誤差
        let (start, stop, to_tick): (f64, f64, Box<dyn Fn(i64) -> f64>) = if power < 0.0 {
            let inverse = 10f64.powf(-power) / factor;
            let decimals = decimals_for_step(1.0 / inverse);
            (
                (lo * inverse).ceil(),
                (hi * inverse).floor(),
                Box::new(move |i: i64| round(i as f64 / inverse, decimals)) as Box<dyn Fn(i64) -> f64>
            )
        } else {
            let step = factor * 10f64.powf(power);
            if !step.is_finite() {
                return Vec::new();
            }
            (
                (lo / step).ceil(),
                (hi / step).floor(),
                Box::new(move |i: i64| i as f64 * step) as Box<dyn Fn(i64) -> f64>
            )
        };
        if !start.is_finite() || !stop.is_finite() || stop - start > MAX_TICKS_PER_COUNT * count as f64 {
            return Vec::new();
        }

        let ticks = (start as i64..=stop as i64).map(to_tick);
        if d0 > d1 {
            ticks.rev().collect()
        } else {
            ticks.collect()
        }
    }
}

impl Curve for LinearScale {
    /// domain 退化（d0 == d1）時回傳 range 的中點。
    fn value(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (x - d0) * self.derivative(x)
    }

    /// 整條直線斜率為常數。
    fn derivative(&self, _x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        Point2D::slope(&Point2D::new(d0, r0), &Point2D::new(d1, r1))
    }
}
