use std::fmt;

use meval::{
    Context,
    Expr
};
use tracing::debug;

use crate::math::function::evaluationerror::EvaluationError;
use crate::math::function::realfunction::RealFunction;

const VARIABLE: &str = "x";

/// 由使用者輸入的文字編譯而成的函數 f(x)。
///
/// 可用的函數與常數來自 `meval::Context::new()`：
/// `sin`, `cos`, `tan`, `abs`, `sqrt`, `exp`, `ln`, `floor`, `ceil`,
/// `min`, `max`, `pi`, `e` 等。
pub struct ExpressionFunction {
    text: String,
    compiled: Box<dyn Fn(f64) -> f64>
}

impl ExpressionFunction {
    pub fn parse(text: &str) -> Result<ExpressionFunction, EvaluationError> {
        let normalized = normalize(text);
        debug!(text, normalized = normalized.as_str(), "compiling expression");
        let to_error = |reason: String| EvaluationError::Expression {
            text: text.to_owned(),
            reason
        };
        let expr: Expr = normalized
            .parse()
            .map_err(|error: meval::Error| to_error(error.to_string()))?;
        let compiled = expr
            .bind_with_context(Context::new(), VARIABLE)
            .map_err(|error| to_error(error.to_string()))?;
        Ok(ExpressionFunction {
            text: text.to_owned(),
            compiled: Box::new(compiled)
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RealFunction for ExpressionFunction {
    fn value(&self, x: f64) -> f64 {
        (self.compiled)(x)
    }
}

impl fmt::Debug for ExpressionFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionFunction")
            .field("text", &self.text)
            .finish()
    }
}

/// 接受 JavaScript 風格的寫法：`Math.abs(x)` → `abs(x)`，`x ** 2` → `x ^ 2`。
fn normalize(text: &str) -> String {
    text.trim()
        .replace("Math.", "")
        .replace("**", "^")
}
