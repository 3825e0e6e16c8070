use std::fmt::Write as _;

use super::surface::Surface;

/// Renders the primitive stream into a standalone SVG document. The binary
/// writes one document per frame, overwriting the previous one, so the last
/// successfully drawn frame stays on disk while the endpoint is down.
#[derive(Debug)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.body.clear();
    }

    fn line(&mut self, from: [f64; 2], to: [f64; 2], color: &str, width: f64) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            from[0], from[1], to[0], to[1], color, width,
        );
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, fill: &str, stroke: &str, width: f64) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            center[0], center[1], radius, fill, stroke, width,
        );
    }

    fn text(&mut self, position: [f64; 2], content: &str, size: f64) {
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"Arial\" font-size=\"{}\">{}</text>",
            position[0],
            position[1],
            size,
            escape_text(content),
        );
    }
}

fn escape_text(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_contains_drawn_primitives() {
        let mut surface = SvgSurface::new(1000.0, 1000.0);
        surface.line([0.0, 0.0], [10.0, 20.0], "black", 3.0);
        surface.fill_circle([500.0, 500.0], 9.0, "green", "#003300", 5.0);
        surface.text([100.0, 50.0], "Score:", 18.0);
        let document = surface.finish();

        assert!(document.starts_with("<svg"));
        assert!(document.contains("<line x1=\"0\" y1=\"0\" x2=\"10\" y2=\"20\" stroke=\"black\""));
        assert!(document.contains("<circle cx=\"500\" cy=\"500\" r=\"9\" fill=\"green\""));
        assert!(document.contains(">Score:</text>"));
        assert!(document.ends_with("</svg>\n"));
    }

    #[test]
    fn clear_discards_earlier_primitives() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.line([0.0, 0.0], [1.0, 1.0], "red", 1.0);
        surface.clear();
        let document = surface.finish();
        assert!(!document.contains("<line"));
    }

    #[test]
    fn text_content_is_escaped() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.text([0.0, 0.0], "a < b & c", 12.0);
        assert!(surface.finish().contains(">a &lt; b &amp; c</text>"));
    }
}
