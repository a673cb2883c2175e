use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    /// 運算式無法解析或無法綁定變數 `x`。
    #[error("invalid expression '{text}': {reason}")]
    Expression {
        text: String,
        reason: String
    },

    /// 第一個取樣點就求值失敗，視為函數定義本身有誤。
    #[error("function failed on its first evaluation at x = {x}: {reason}")]
    Definition {
        x: f64,
        reason: String
    }
}
