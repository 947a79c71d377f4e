//! Bar and line chart drawing with plotters, encoded to PNG.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use once_cell::sync::Lazy;
use plotters::coord::Shift;
use plotters::prelude::*;
use streamstats_common::{truncate_string, Result, StatsError};
use streamstats_config::OutputConfig;
use streamstats_i18n::{Catalog, MessageKey};
use tracing::{debug, warn};

/// Font family used for all chart text.
pub const FONT_FAMILY: &str = "sans-serif";

/// Longest category label drawn under a bar.
pub const MAX_LABEL_CHARS: usize = 24;

/// Whether a system font can be resolved for chart text.
///
/// Without one every text operation fails, so charts are drawn without text.
static TEXT_AVAILABLE: Lazy<bool> = Lazy::new(|| {
    let available = (FONT_FAMILY, 12).into_font().box_size("0").is_ok();
    if !available {
        warn!(family = FONT_FAMILY, "No usable font found, charts will be drawn without text");
    }
    available
});

/// Color palettes for bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Soft qualitative palette, eight colors.
    Set2,
    /// Pastel qualitative palette, twelve colors.
    Set3,
    /// Muted qualitative palette, ten colors.
    Muted,
    /// Diverging blue to red gradient spread over all bars.
    CoolWarm,
}

const SET2: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

const SET3: [RGBColor; 12] = [
    RGBColor(141, 211, 199),
    RGBColor(255, 255, 179),
    RGBColor(190, 186, 218),
    RGBColor(251, 128, 114),
    RGBColor(128, 177, 211),
    RGBColor(253, 180, 98),
    RGBColor(179, 222, 105),
    RGBColor(252, 205, 229),
    RGBColor(217, 217, 217),
    RGBColor(188, 128, 189),
    RGBColor(204, 235, 197),
    RGBColor(255, 237, 111),
];

const MUTED: [RGBColor; 10] = [
    RGBColor(72, 120, 208),
    RGBColor(238, 133, 74),
    RGBColor(106, 204, 100),
    RGBColor(214, 95, 95),
    RGBColor(149, 108, 180),
    RGBColor(140, 97, 60),
    RGBColor(220, 126, 192),
    RGBColor(121, 121, 121),
    RGBColor(213, 187, 103),
    RGBColor(130, 198, 226),
];

const COOL: RGBColor = RGBColor(59, 76, 192);
const NEUTRAL: RGBColor = RGBColor(221, 221, 221);
const WARM: RGBColor = RGBColor(180, 4, 38);

/// Line color of the hourly chart.
pub const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

impl ColorScheme {
    /// Color of bar `index` out of `count`.
    #[must_use]
    pub fn color(self, index: usize, count: usize) -> RGBColor {
        match self {
            Self::Set2 => SET2[index % SET2.len()],
            Self::Set3 => SET3[index % SET3.len()],
            Self::Muted => MUTED[index % MUTED.len()],
            Self::CoolWarm => {
                #[allow(clippy::cast_precision_loss)]
                let t = if count <= 1 {
                    0.0
                } else {
                    index as f64 / (count - 1) as f64
                };
                if t < 0.5 {
                    lerp(COOL, NEUTRAL, t * 2.0)
                } else {
                    lerp(NEUTRAL, WARM, (t - 0.5) * 2.0)
                }
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let mix = |a: u8, b: u8| (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a)).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Canvas size and text sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Title font size.
    pub title_size: u32,
    /// Axis label and tick font size.
    pub label_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            title_size: 28,
            label_size: 16,
        }
    }
}

impl ChartStyle {
    /// Style sized by the `output` config section.
    #[must_use]
    pub fn from_output(config: &OutputConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            ..Self::default()
        }
    }

    fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// Title and axis descriptions of a chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartText {
    /// Caption above the plot.
    pub title: String,
    /// X axis description.
    pub x_desc: String,
    /// Y axis description.
    pub y_desc: String,
    /// Caption shown when there is no data.
    pub no_data: String,
}

impl ChartText {
    /// Chart text with `title` and localized axis descriptions.
    #[must_use]
    pub fn localized(catalog: &Catalog, title: String, x_desc: MessageKey, y_desc: MessageKey) -> Self {
        Self {
            title,
            x_desc: catalog.text(x_desc),
            y_desc: catalog.text(y_desc),
            no_data: catalog.text(MessageKey::NoData),
        }
    }
}

/// One category of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Category label.
    pub label: String,
    /// Bar height.
    pub value: f64,
}

impl Bar {
    /// A bar for `label`.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Upper bound of the value axis with headroom, never zero.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

/// Draws a categorical bar chart and returns PNG bytes.
///
/// Category labels are truncated and turned vertical when there are many bars.
pub fn render_bar_chart(style: &ChartStyle, text: &ChartText, bars: &[Bar], scheme: ColorScheme) -> Result<Vec<u8>> {
    let with_text = *TEXT_AVAILABLE;
    let y_max = axis_max(bars.iter().map(|bar| bar.value));
    let count = bars.len().max(1);
    let rotate = bars.len() > 6;

    let category_label = |segment: &SegmentValue<i32>| match segment {
        SegmentValue::CenterOf(index) => usize::try_from(*index)
            .ok()
            .and_then(|i| bars.get(i))
            .map(|bar| truncate_string(&bar.label, MAX_LABEL_CHARS))
            .unwrap_or_default(),
        _ => String::new(),
    };

    let buffer = draw_rgb(style, |root| {
        let mut builder = ChartBuilder::on(root);
        builder.margin(20);
        if with_text {
            builder
                .caption(&text.title, (FONT_FAMILY, style.title_size))
                .x_label_area_size(if rotate { style.height / 4 } else { 60 })
                .y_label_area_size(80);
        }

        let upper = i32::try_from(count).unwrap_or(i32::MAX);
        let mut chart = builder.build_cartesian_2d((0..upper).into_segmented(), 0.0..y_max)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh();
        if with_text {
            let label_style = (FONT_FAMILY, style.label_size).into_font();
            let tick_style = if rotate {
                label_style.transform(FontTransform::Rotate90)
            } else {
                label_style
            };
            mesh.x_labels(count)
                .x_label_style(tick_style)
                .x_label_formatter(&category_label)
                .x_desc(text.x_desc.as_str())
                .y_desc(text.y_desc.as_str())
                .axis_desc_style((FONT_FAMILY, style.label_size));
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(index, bar)| {
            let x = i32::try_from(index).unwrap_or(i32::MAX);
            let color = scheme.color(index, bars.len());
            let mut rect = Rectangle::new(
                [(SegmentValue::Exact(x), 0.0), (SegmentValue::Exact(x + 1), bar.value)],
                color.filled(),
            );
            rect.set_margin(0, 0, 6, 6);
            rect
        }))?;

        if bars.is_empty() && with_text {
            draw_no_data(root, style, &text.no_data)?;
        }
        Ok(())
    })?;

    debug!(title = %text.title, bars = bars.len(), "Rendered bar chart");
    encode_png(&buffer, style.width, style.height)
}

/// Draws a line chart with point markers over hours 0 to 23 and returns PNG bytes.
pub fn render_line_chart(style: &ChartStyle, text: &ChartText, points: &[(u32, f64)]) -> Result<Vec<u8>> {
    let with_text = *TEXT_AVAILABLE;
    let y_max = axis_max(points.iter().map(|&(_, value)| value));
    let series: Vec<(i32, f64)> = points
        .iter()
        .filter_map(|&(hour, value)| i32::try_from(hour).ok().map(|hour| (hour, value)))
        .collect();

    let hour_label = |hour: &i32| hour.to_string();

    let buffer = draw_rgb(style, |root| {
        let mut builder = ChartBuilder::on(root);
        builder.margin(20);
        if with_text {
            builder
                .caption(&text.title, (FONT_FAMILY, style.title_size))
                .x_label_area_size(60)
                .y_label_area_size(80);
        }

        let mut chart = builder.build_cartesian_2d(0i32..23i32, 0.0..y_max)?;

        let mut mesh = chart.configure_mesh();
        if with_text {
            mesh.x_labels(24)
                .x_label_formatter(&hour_label)
                .x_desc(text.x_desc.as_str())
                .y_desc(text.y_desc.as_str())
                .label_style((FONT_FAMILY, style.label_size))
                .axis_desc_style((FONT_FAMILY, style.label_size));
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw()?;

        chart.draw_series(LineSeries::new(series.iter().copied(), LINE_COLOR.stroke_width(2)))?;
        chart.draw_series(
            series
                .iter()
                .map(|&point| Circle::new(point, 5, LINE_COLOR.filled())),
        )?;

        if series.is_empty() && with_text {
            draw_no_data(root, style, &text.no_data)?;
        }
        Ok(())
    })?;

    debug!(title = %text.title, points = points.len(), "Rendered line chart");
    encode_png(&buffer, style.width, style.height)
}

fn draw_no_data<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
    message: &str,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let text_style = TextStyle::from((FONT_FAMILY, style.title_size).into_font());
    let (text_width, text_height) = root.estimate_text_size(message, &text_style)?;
    let (width, height) = root.dim_in_pixel();
    let x = i32::try_from(width.saturating_sub(text_width) / 2).unwrap_or(0);
    let y = i32::try_from(height.saturating_sub(text_height) / 2).unwrap_or(0);
    root.draw_text(message, &text_style, (x, y))
}

/// Runs `draw` on a white RGB canvas and returns the raw pixels.
fn draw_rgb<F>(style: &ChartStyle, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> std::result::Result<(), DrawingAreaErrorKind<<BitMapBackend<'static> as DrawingBackend>::ErrorType>>,
{
    if style.width == 0 || style.height == 0 {
        return Err(StatsError::graph(format!(
            "invalid chart size {}x{}",
            style.width, style.height
        )));
    }

    let mut buffer = vec![0u8; style.buffer_len()];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height)).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Encodes packed RGB pixels as PNG.
pub fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(rgb, width, height, ColorType::Rgb8)
        .map_err(|e| StatsError::graph_with_source("PNG encoding failed", e))?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn small_style() -> ChartStyle {
        ChartStyle {
            width: 400,
            height: 300,
            ..ChartStyle::default()
        }
    }

    fn text() -> ChartText {
        ChartText {
            title: "Chart".to_string(),
            x_desc: "X".to_string(),
            y_desc: "Y".to_string(),
            no_data: "Nothing".to_string(),
        }
    }

    fn png_size(png: &[u8]) -> (u32, u32) {
        image::load_from_memory_with_format(png, image::ImageFormat::Png)
            .unwrap()
            .dimensions()
    }

    #[test]
    fn test_bar_chart_is_png() {
        let bars = vec![Bar::new("Radiohead", 3.0), Bar::new("Björk", 2.0)];
        let png = render_bar_chart(&small_style(), &text(), &bars, ColorScheme::Set2).unwrap();

        assert_eq!(png[..8], PNG_SIGNATURE);
        assert_eq!(png_size(&png), (400, 300));
    }

    #[test]
    fn test_empty_charts_render() {
        let bars = render_bar_chart(&small_style(), &text(), &[], ColorScheme::Muted).unwrap();
        let line = render_line_chart(&small_style(), &text(), &[]).unwrap();

        assert_eq!(png_size(&bars), (400, 300));
        assert_eq!(png_size(&line), (400, 300));
    }

    #[test]
    fn test_many_bars_render() {
        let bars: Vec<_> = (0..20)
            .map(|i| Bar::new(format!("A very long artist name number {i}"), f64::from(20 - i)))
            .collect();
        let png = render_bar_chart(&small_style(), &text(), &bars, ColorScheme::Set3).unwrap();
        assert_eq!(png[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_line_chart_is_png() {
        let points = vec![(0, 6.3), (8, 9.7), (21, 9.75), (23, 5.35)];
        let png = render_line_chart(&small_style(), &text(), &points).unwrap();
        assert_eq!(png_size(&png), (400, 300));
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let style = ChartStyle {
            width: 0,
            ..ChartStyle::default()
        };
        let err = render_line_chart(&style, &text(), &[]).unwrap_err();
        assert!(matches!(err, StatsError::Graph { .. }));
    }

    #[test]
    fn test_axis_max_has_headroom() {
        assert_eq!(axis_max([].into_iter()), 1.0);
        assert_eq!(axis_max([0.0, 0.0].into_iter()), 1.0);
        assert!((axis_max([10.0, 4.0].into_iter()) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_schemes() {
        assert_eq!(ColorScheme::Set2.color(0, 3), RGBColor(102, 194, 165));
        assert_eq!(ColorScheme::Set2.color(8, 9), ColorScheme::Set2.color(0, 9));
        assert_eq!(ColorScheme::CoolWarm.color(0, 12), COOL);
        assert_eq!(ColorScheme::CoolWarm.color(11, 12), WARM);
        assert_eq!(ColorScheme::CoolWarm.color(0, 1), COOL);
    }
}
