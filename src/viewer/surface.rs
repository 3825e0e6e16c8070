/// The five drawing primitives the renderer needs from a 2D surface.
///
/// Coordinates are surface-space (already mapped from world space); colors
/// are CSS color strings, which every intended backend understands.
pub trait Surface {
    fn clear(&mut self);
    fn line(&mut self, from: [f64; 2], to: [f64; 2], color: &str, width: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, fill: &str, stroke: &str, width: f64);
    fn text(&mut self, position: [f64; 2], content: &str, size: f64);
}
