use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::math::function::expressionfunction::ExpressionFunction;
use crate::math::function::guardedfunction::{
    GuardedFunction,
    PointwiseFailure
};
use crate::math::function::realfunction::{
    FallibleFunction,
    RealFunction
};
use crate::math::integration::trapezoidalintegrator::{
    Integral,
    TrapezoidalIntegrator
};
use crate::math::point2d::Point2D;
use crate::objectwithuuid::ObjectWithUUID;
use crate::plot::ploterror::PlotError;

// ─────────────────────────────────────────────────────────────────────────────
// PlotSettings
// ─────────────────────────────────────────────────────────────────────────────

/// 一次重繪所需的全部參數。每次輸入改變時，以新的設定重新呼叫 `compute_plot`。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotSettings {
    domain: (f64, f64),
    samples: usize
}

impl PlotSettings {
    pub fn new(domain: (f64, f64), samples: usize) -> PlotSettings {
        PlotSettings { domain, samples }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotData
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
pub struct PlotData {
    id: Uuid,
    function: Vec<Point2D>,
    integral: Vec<Point2D>,
    total: Integral,
    failures: Vec<PointwiseFailure>
}

impl PlotData {
    pub fn function(&self) -> &[Point2D] {
        &self.function
    }

    pub fn integral(&self) -> &[Point2D] {
        &self.integral
    }

    pub fn total(&self) -> Integral {
        self.total
    }

    pub fn failures(&self) -> &[PointwiseFailure] {
        &self.failures
    }
}

impl ObjectWithUUID for PlotData {
    fn uuid(&self) -> &Uuid {
        &self.id
    }
}

/// 以目前的設定計算 f(x) 曲線、部分和曲線與總積分。
pub fn compute_plot<F: RealFunction>(f: F, settings: &PlotSettings) -> Result<PlotData, PlotError> {
    let integrator = TrapezoidalIntegrator::new(f);
    run_integrator(&integrator, settings)
}

pub fn compute_expression_plot(text: &str, settings: &PlotSettings) -> Result<PlotData, PlotError> {
    let f = ExpressionFunction::parse(text)?;
    compute_plot(f, settings)
}

/// 先在 a 點試算：失敗代表函數定義錯誤，整個請求失敗；
/// 之後各點的失敗會依 x 去重後放進 `PlotData::failures`。
pub fn compute_guarded_plot<F: FallibleFunction>(f: F, settings: &PlotSettings) -> Result<PlotData, PlotError> {
    let guarded = GuardedFunction::probe(f, settings.domain().0)?;
    let integrator = TrapezoidalIntegrator::new(guarded);
    let mut data = run_integrator(&integrator, settings)?;

    let mut failures = integrator.function().take_failures();
    failures.sort_by(|lhs, rhs| lhs.x().total_cmp(&rhs.x()));
    failures.dedup_by(|lhs, rhs| lhs.x() == rhs.x());
    data.failures = failures;
    Ok(data)
}

fn run_integrator<F: RealFunction>(
    integrator: &TrapezoidalIntegrator<F>,
    settings: &PlotSettings
) -> Result<PlotData, PlotError> {
    let (a, b) = settings.domain();
    let n = settings.samples();
    let function = integrator.sample_function(a, b, n)?;
    let integral = integrator.sample_integral(a, b, n)?;
    let total = integrator.integrate_detailed(a, b, n)?;
    let id = Uuid::new_v4();
    debug!(
        %id,
        a,
        b,
        n,
        total = total.value(),
        skipped = total.skipped(),
        "plot computed"
    );
    Ok(PlotData {
        id,
        function,
        integral,
        total,
        failures: Vec::new()
    })
}
