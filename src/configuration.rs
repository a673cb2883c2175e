use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::plot::chartframe::ChartFrame;
use crate::plot::plotdata::PlotSettings;

pub const DEFAULT_EXPRESSION: &str = "abs((x + 2) % 4 - 2) - 1";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error)
}

// ─────────────────────────────────────────────────────────────────────────────
// PlotConfiguration
// ─────────────────────────────────────────────────────────────────────────────
//
// JSON 範例（所有欄位皆可省略）：
//
//   {
//     "expression": "sin(x)",
//     "domain": [0.0, 10.0],
//     "range": [-2.0, 2.0],
//     "samples": 1000,
//     "chart": { "width": 640.0, "height": 400.0 }
//   }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfiguration {
    pub expression: String,
    pub domain: [f64; 2],
    pub range: [f64; 2],
    pub samples: usize,
    pub chart: ChartFrame
}

impl Default for PlotConfiguration {
    fn default() -> PlotConfiguration {
        PlotConfiguration {
            expression: DEFAULT_EXPRESSION.to_owned(),
            domain: [0.0, 10.0],
            range: [-2.0, 2.0],
            samples: 1000,
            chart: ChartFrame::default()
        }
    }
}

impl PlotConfiguration {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<PlotConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.domain[0], self.domain[1])
    }

    pub fn range(&self) -> (f64, f64) {
        (self.range[0], self.range[1])
    }

    pub fn settings(&self) -> PlotSettings {
        PlotSettings::new(self.domain(), self.samples)
    }
}
