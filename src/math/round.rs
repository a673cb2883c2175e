/// 四捨五入到小數點後 `digits` 位，恰好落在 .5 時取偶數（banker's rounding）。
///
/// `digits` 可為負數，例如 -2 代表取到百位。
pub fn round(x: f64, digits: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(digits.abs());
    let y = if digits >= 0 { x * scale } else { x / scale };
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    if digits >= 0 { z / scale } else { z * scale }
}

/// 顯示間距為 `step` 的數列所需的小數位數。
pub fn decimals_for_step(step: f64) -> i32 {
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    (-step.abs().log10().floor()).max(0.0) as i32
}
