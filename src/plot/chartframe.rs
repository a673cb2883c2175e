use std::fmt::Write;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::curve::Curve;
use crate::math::point2d::Point2D;
use crate::math::round::round;
use crate::plot::linearscale::LinearScale;
use crate::plot::plotdata::PlotData;

const PATH_DECIMALS: i32 = 3;

const TICK_COUNT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64
}

impl Default for Margins {
    fn default() -> Margins {
        Margins {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartFrame
// ─────────────────────────────────────────────────────────────────────────────

/// 圖表的像素尺寸與邊界。只負責座標轉換，不決定顏色或線寬。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margins: Margins
}

impl Default for ChartFrame {
    fn default() -> ChartFrame {
        ChartFrame {
            width: 640.0,
            height: 400.0,
            margins: Margins::default()
        }
    }
}

impl ChartFrame {
    pub fn x_scale(&self, domain: (f64, f64)) -> LinearScale {
        LinearScale::new(domain, (self.margins.left, self.width - self.margins.right))
    }

    /// y 軸向上為正，因此 range 由下邊界到上邊界。
    pub fn y_scale(&self, range: (f64, f64)) -> LinearScale {
        LinearScale::new(range, (self.height - self.margins.bottom, self.margins.top))
    }

    pub fn project(points: &[Point2D], x_scale: &LinearScale, y_scale: &LinearScale) -> Vec<Point2D> {
        points
            .iter()
            .map(|pt| Point2D::new(x_scale.value(pt.x()), y_scale.value(pt.y())))
            .collect()
    }

    pub fn paths(&self, data: &PlotData, domain: (f64, f64), range: (f64, f64)) -> ChartPaths {
        let x_scale = self.x_scale(domain);
        let y_scale = self.y_scale(range);
        let to_ticks = |scale: &LinearScale| -> Vec<Tick> {
            scale
                .ticks(TICK_COUNT)
                .into_iter()
                .map(|value| Tick { value, position: round(scale.value(value), PATH_DECIMALS) })
                .collect()
        };
        ChartPaths {
            function_path: line_path(&Self::project(data.function(), &x_scale, &y_scale)),
            integral_path: line_path(&Self::project(data.integral(), &x_scale, &y_scale)),
            x_ticks: to_ticks(&x_scale),
            y_ticks: to_ticks(&y_scale)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartPaths
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Tick {
    value: f64,
    position: f64
}

impl Tick {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn position(&self) -> f64 {
        self.position
    }
}

/// 畫面座標下的兩條曲線（SVG path data）與兩軸刻度。
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartPaths {
    function_path: String,
    integral_path: String,
    x_ticks: Vec<Tick>,
    y_ticks: Vec<Tick>
}

impl ChartPaths {
    pub fn function_path(&self) -> &str {
        &self.function_path
    }

    pub fn integral_path(&self) -> &str {
        &self.integral_path
    }

    pub fn x_ticks(&self) -> &[Tick] {
        &self.x_ticks
    }

    pub fn y_ticks(&self) -> &[Tick] {
        &self.y_ticks
    }
}

/// `M x0,y0 L x1,y1 ...` 形式的折線。沒有點時回傳空字串。
pub fn line_path(points: &[Point2D]) -> String {
    let mut path = String::new();
    for (i, pt) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(
            path,
            "{}{},{}",
            command,
            round(pt.x(), PATH_DECIMALS),
            round(pt.y(), PATH_DECIMALS)
        );
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::plot::plotdata::{
        compute_plot,
        PlotSettings
    };

    #[test]
    fn test_default_frame_scales() {
        let frame = ChartFrame::default();
        let x_scale = frame.x_scale((0.0, 10.0));
        let y_scale = frame.y_scale((-2.0, 2.0));
        assert_relative_eq!(x_scale.value(0.0), 40.0);
        assert_relative_eq!(x_scale.value(10.0), 620.0);
        assert_relative_eq!(y_scale.value(-2.0), 370.0);
        assert_relative_eq!(y_scale.value(2.0), 20.0);
    }

    #[test]
    fn test_line_path() {
        let points = vec![
            Point2D::new(0.0, 1.0),
            Point2D::new(1.5, 2.0),
            Point2D::new(3.0, 0.3333333)
        ];
        assert_eq!(line_path(&points), "M0,1L1.5,2L3,0.333");
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn test_paths_for_plot() {
        let frame = ChartFrame::default();
        let settings = PlotSettings::new((0.0, 10.0), 2);
        let data = compute_plot(|_x: f64| 1.0, &settings).unwrap();
        let paths = frame.paths(&data, (0.0, 10.0), (-2.0, 2.0));

        // f = 1 → y = 1 落在 y 像素 107.5
        assert_eq!(paths.function_path(), "M40,107.5L330,107.5L620,107.5");
        assert_eq!(paths.x_ticks().len(), 11);
        assert_relative_eq!(paths.x_ticks()[1].position(), 98.0);
        assert_eq!(paths.y_ticks().first().map(|tick| tick.value()), Some(-2.0));
        assert!(paths.integral_path().starts_with("M40,"));
    }

    #[test]
    fn test_frame_from_partial_json() {
        let frame: ChartFrame = serde_json::from_str(r#"{ "width": 800.0 }"#).unwrap();
        assert_eq!(frame.width, 800.0);
        assert_eq!(frame.height, 400.0);
        assert_eq!(frame.margins, Margins::default());
    }
}
