/// Drawing operations the confetti engine needs from a 2D canvas.
///
/// The browser implementation wraps `CanvasRenderingContext2d`; tests use a
/// recorder. Implementations swallow drawing errors, a dropped frame is not
/// worth surfacing.
pub trait ConfettiSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, x: f64, y: f64);
    fn set_fill_color(&mut self, color: &str);
    fn set_alpha(&mut self, alpha: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64);
}
