use std::cell::RefCell;

use serde::Serialize;
use tracing::warn;

use crate::math::function::evaluationerror::EvaluationError;
use crate::math::function::realfunction::{
    FallibleFunction,
    RealFunction
};

/// 第一次求值之後發生的單點失敗。
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointwiseFailure {
    x: f64,
    message: String
}

impl PointwiseFailure {
    pub fn new(x: f64, message: String) -> PointwiseFailure {
        PointwiseFailure { x, message }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GuardedFunction
// ─────────────────────────────────────────────────────────────────────────────
//
// 把 FallibleFunction 包成 RealFunction：
//
//   - 第一個點（probe）失敗：多半是定義錯誤，直接回傳 EvaluationError::Definition
//   - 之後的點失敗：記錄 (x, 訊息)，回傳 NaN，讓積分器略過該點
//
// 失敗紀錄放在 RefCell 中，因此 GuardedFunction 不是 Sync。

pub struct GuardedFunction<F: FallibleFunction> {
    inner: F,
    failures: RefCell<Vec<PointwiseFailure>>
}

impl<F: FallibleFunction> GuardedFunction<F> {
    /// 在 `first_x` 先求值一次，確認函數本身可以使用。
    pub fn probe(inner: F, first_x: f64) -> Result<GuardedFunction<F>, EvaluationError> {
        inner.try_value(first_x).map_err(|error| EvaluationError::Definition {
            x: first_x,
            reason: error.to_string()
        })?;
        Ok(GuardedFunction {
            inner,
            failures: RefCell::new(Vec::new())
        })
    }

    pub fn failures(&self) -> Vec<PointwiseFailure> {
        self.failures.borrow().clone()
    }

    pub fn take_failures(&self) -> Vec<PointwiseFailure> {
        self.failures.take()
    }
}

impl<F: FallibleFunction> RealFunction for GuardedFunction<F> {
    fn value(&self, x: f64) -> f64 {
        match self.inner.try_value(x) {
            Ok(y) => y,
            Err(error) => {
                warn!(x, %error, "function evaluation failed");
                self.failures
                    .borrow_mut()
                    .push(PointwiseFailure::new(x, error.to_string()));
                f64::NAN
            }
        }
    }
}
