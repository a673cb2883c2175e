/// 一維映射 y = c(x)，例如把資料座標轉成畫面座標的比例尺。
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}
