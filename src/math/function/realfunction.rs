// ─────────────────────────────────────────────────────────────────────────────
// RealFunction
// ─────────────────────────────────────────────────────────────────────────────

/// 單變數實函數 f: ℝ → ℝ。
///
/// 在未定義區間（除以零、超出定義域、溢位）回傳 `inf` 或 `NaN`，
/// 積分器會把這些點視為缺口而不是錯誤。
///
/// 任何 `Fn(f64) -> f64` 都自動實作此 trait，因此積分器不需要知道
/// 函數是從閉包、運算式解析器或其他來源產生的。
pub trait RealFunction {
    fn value(&self, x: f64) -> f64;
}

impl<F> RealFunction for F
where
    F: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FallibleFunction
// ─────────────────────────────────────────────────────────────────────────────

/// 每次求值都可能失敗的函數。
///
/// 積分器本身不處理失敗；需透過 `GuardedFunction` 轉成 `RealFunction`。
pub trait FallibleFunction {
    type Error: std::error::Error;

    fn try_value(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F, E> FallibleFunction for F
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error,
{
    type Error = E;

    fn try_value(&self, x: f64) -> Result<f64, E> {
        self(x)
    }
}
