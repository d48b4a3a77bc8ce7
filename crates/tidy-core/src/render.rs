// File: crates/tidy-core/src/render.rs
// Summary: Headless rendering of a Chart through Skia CPU raster surfaces (RGBA buffer or PNG).

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::axis::Axis;
use crate::chart::{Chart, Geom};
use crate::error::{PlotError, Result};
use crate::grid::linspace;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

const LABEL_SIZE: f32 = 14.0;
const LEGEND_SWATCH: f32 = 18.0;
const LEGEND_ROW: f32 = 20.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (titles, legend names). Off gives font-independent pixels.
    pub draw_labels: bool,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            line_width: 2.0,
        }
    }
}

/// Plot area in pixels.
#[derive(Clone, Copy, Debug)]
struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl PlotRect {
    fn sx(&self, x_axis: &Axis, x: f64) -> f32 {
        self.l + x_axis.unit(x) as f32 * (self.r - self.l)
    }

    fn sy(&self, y_axis: &Axis, y: f64) -> f32 {
        self.b - y_axis.unit(y) as f32 * (self.b - self.t)
    }
}

impl Chart {
    /// Render into a tightly packed RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(PlotError::Render(format!("invalid surface size {}x{}", opts.width, opts.height)));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;

        self.draw(surface.canvas(), opts);

        let (w, h) = (opts.width as u32, opts.height as u32);
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::Render("failed to read back surface pixels".into()));
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels)
            .ok_or_else(|| PlotError::Render("pixel buffer does not match surface size".into()))?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let data = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)?;
        tracing::debug!(path = %path.display(), "chart written");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = PlotRect {
            l: opts.insets.left as f32,
            t: opts.insets.top as f32,
            r: (opts.width - opts.insets.right as i32) as f32,
            b: (opts.height - opts.insets.bottom as i32) as f32,
        };

        let series = self.series();
        let view = ViewState::from_series(&series);
        let (x_axis, y_axis) = view.axes(self.x_title(), self.y_title());
        tracing::trace!(series = series.len(), ?view, "rendering chart");

        let text = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, rect, theme);
        draw_axes(canvas, rect, theme, &x_axis, &y_axis, text.as_ref());
        if let (Some(title), Some(shaper)) = (self.title(), text.as_ref()) {
            shaper.draw_left(canvas, title, rect.l, rect.t - 6.0, LABEL_SIZE + 2.0, theme.axis_label);
        }

        for geom in self.layers() {
            match geom {
                Geom::Line => {
                    for (i, s) in series.iter().enumerate() {
                        draw_line_series(canvas, rect, &x_axis, &y_axis, s, theme.series_color(i), opts.line_width);
                    }
                }
            }
        }

        draw_legend(canvas, rect, theme, &series, text.as_ref());
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, rect: PlotRect, theme: &Theme) {
    let paint = stroke_paint(theme.grid, 1.0);

    // verticals
    for x in linspace(rect.l as f64, rect.r as f64, 10) {
        canvas.draw_line((x as f32, rect.t), (x as f32, rect.b), &paint);
    }
    // horizontals
    for y in linspace(rect.t as f64, rect.b as f64, 6) {
        canvas.draw_line((rect.l, y as f32), (rect.r, y as f32), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    rect: PlotRect,
    theme: &Theme,
    x: &Axis,
    y: &Axis,
    text: Option<&TextShaper>,
) {
    let axis_paint = stroke_paint(theme.axis_line, 1.5);
    canvas.draw_line((rect.l, rect.b), (rect.r, rect.b), &axis_paint);
    canvas.draw_line((rect.l, rect.t), (rect.l, rect.b), &axis_paint);

    let Some(shaper) = text else { return };
    // Empty titles draw nothing.
    let xw = shaper.measure_width(&x.label, LABEL_SIZE);
    shaper.draw_left(canvas, &x.label, rect.r - xw, rect.b + 32.0, LABEL_SIZE, theme.axis_label);
    shaper.draw_left(canvas, &y.label, 8.0, rect.t + LABEL_SIZE, LABEL_SIZE, theme.axis_label);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    rect: PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
    width: f32,
) {
    let stroke = stroke_paint(color, width);
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(rect.l, rect.t, rect.r, rect.b), skia::ClipOp::Intersect, true);
    for run in series.finite_runs() {
        if run.len() < 2 {
            continue;
        }
        let pts: Vec<skia::Point> = run
            .iter()
            .map(|&(x, y)| skia::Point::new(rect.sx(x_axis, x), rect.sy(y_axis, y)))
            .collect();
        canvas.draw_points(skia::canvas::PointMode::Polygon, &pts, &stroke);
    }
    canvas.restore();
}

fn draw_legend(
    canvas: &skia::Canvas,
    rect: PlotRect,
    theme: &Theme,
    series: &[Series],
    text: Option<&TextShaper>,
) {
    let names: Vec<&str> = series.iter().filter_map(|s| s.name.as_deref()).collect();
    if names.is_empty() {
        return;
    }

    let text_w = match text {
        Some(shaper) => names.iter().map(|n| shaper.measure_width(n, LABEL_SIZE)).fold(0.0f32, f32::max),
        None => 0.0,
    };
    let pad = 8.0;
    let box_w = pad * 3.0 + LEGEND_SWATCH + text_w;
    let box_h = pad * 2.0 + LEGEND_ROW * names.len() as f32;
    let left = rect.r - box_w - pad;
    let top = rect.t + pad;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_style(skia::paint::Style::Fill);
    bg.set_color(theme.legend_background);
    canvas.draw_rect(skia::Rect::from_ltrb(left, top, left + box_w, top + box_h), &bg);

    for (i, name) in names.iter().enumerate() {
        let cy = top + pad + LEGEND_ROW * (i as f32 + 0.5);
        let swatch = stroke_paint(theme.series_color(i), 3.0);
        canvas.draw_line((left + pad, cy), (left + pad + LEGEND_SWATCH, cy), &swatch);
        if let Some(shaper) = text {
            shaper.draw_left(canvas, name, left + pad * 2.0 + LEGEND_SWATCH, cy + LABEL_SIZE * 0.35, LABEL_SIZE, theme.axis_label);
        }
    }
}
