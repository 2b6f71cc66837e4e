// File: crates/month-graph-skia/src/lib.rs
// Summary: Skia raster backend: implements the core `Canvas` and writes PNG / RGBA output.

pub mod text;

use anyhow::Result;
use log::debug;
use skia_safe as skia;

use month_graph_core::geometry::{PointF, RectF};
use month_graph_core::{
    Canvas, Color, GraphError, GraphLayout, MonthGraph, RenderOptions, ResourceResolver, Stroke, TextStyle,
};

pub use text::TextShaper;

#[inline]
fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// CPU raster surface implementing [`Canvas`].
pub struct SkiaCanvas {
    surface: skia::Surface,
    width: i32,
    height: i32,
    shaper: TextShaper,
}

impl SkiaCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| GraphError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        Ok(Self { surface, width, height, shaper: TextShaper::new() })
    }

    /// Snapshot the surface as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| GraphError::Encode("PNG".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = self.width as usize * 4;
        let mut pixels = vec![0u8; stride * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(GraphError::Surface("reading surface pixels failed".into()).into());
        }
        Ok((pixels, self.width as u32, self.height as u32, stride))
    }
}

impl Canvas for SkiaCanvas {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn draw_line(&mut self, from: PointF, to: PointF, stroke: &Stroke) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(stroke.width);
        paint.set_color(to_skia(stroke.color));
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        if rect.height() <= 0.0 || rect.width() <= 0.0 {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia(color));
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.surface.canvas().draw_rect(r, &paint);
    }

    fn draw_text(&mut self, text: &str, at: PointF, style: &TextStyle) {
        let canvas = self.surface.canvas();
        self.shaper.draw_aligned(
            canvas,
            text,
            at.x,
            at.y,
            style.size,
            to_skia(style.color),
            style.mono_numeric,
            style.align,
        );
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        self.shaper.measure_width(text, style.size, style.mono_numeric)
    }
}

/// Headless output for a [`MonthGraph`]; each call is one draw pass on a
/// fresh `opts.width` x `opts.height` surface.
pub trait SkiaRenderExt {
    fn render_to_canvas(&mut self, opts: &RenderOptions) -> Result<(SkiaCanvas, GraphLayout)>;

    fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (mut canvas, _) = self.render_to_canvas(opts)?;
        canvas.encode_png()
    }

    fn render_to_rgba8(&mut self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (mut canvas, _) = self.render_to_canvas(opts)?;
        canvas.read_rgba8()
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

impl<R: ResourceResolver> SkiaRenderExt for MonthGraph<R> {
    fn render_to_canvas(&mut self, opts: &RenderOptions) -> Result<(SkiaCanvas, GraphLayout)> {
        let mut canvas = SkiaCanvas::new(opts.width, opts.height)?;
        let layout = self.draw(&mut canvas, opts);
        Ok((canvas, layout))
    }
}
