//! SVG writing for ring charts.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use super::geometry::RingGeometry;
use super::animation::FillTransition;

const TRACK_COLOR: &str = "#2a2d2a";
const LABEL_COLOR: &str = "white";

pub(crate) struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for WASM/browser use
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl SvgWriter {
    pub(crate) fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[ring::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[ring::svg] SVG output is not valid UTF-8")
    }
}

/// Render a ring as a standalone SVG document. When `transition.animate` is set, the
/// stroke starts at `transition.from` and a SMIL animation eases it to `transition.to`.
pub fn ring_svg_string(geometry: &RingGeometry, transition: &FillTransition) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    write_ring_svg(&mut writer, geometry, transition)?;
    writer.into_string()
}

/// Render a ring to a file.
pub fn write_ring_svg_file(path: &Path, geometry: &RingGeometry, transition: &FillTransition) -> Result<()> {
    let mut writer = SvgWriter::new(path)?;
    write_ring_svg(&mut writer, geometry, transition)?;
    writer.flush()
        .with_context(|| format!("[ring::svg] Failed to flush {}", path.display()))?;
    tracing::debug!(path = %path.display(), percentage = geometry.percentage, "wrote ring svg");
    Ok(())
}

/// Write the full document to any writer.
pub(crate) fn write_ring_svg<W: Write>(writer: &mut W, geometry: &RingGeometry, transition: &FillTransition) -> Result<()> {
    let RingGeometry { size, stroke_width, center: c, radius: r, circumference, .. } = *geometry;

    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" class="ring-chart">"##)?;

    // background track
    writeln!(writer, r##"<circle cx="{c}" cy="{c}" r="{r}" fill="transparent" stroke="{TRACK_COLOR}" stroke-opacity="0.9" stroke-width="{stroke_width}"/>"##)?;

    writeln!(writer, r##"<g transform="rotate(-90 {c} {c})">"##)?;
    write!(
        writer,
        r##"<circle cx="{c}" cy="{c}" r="{r}" fill="transparent" stroke="{color}" stroke-width="{stroke_width}" stroke-dasharray="{circumference}" stroke-dashoffset="{from}" stroke-linecap="{cap}">"##,
        color = geometry.color,
        from = transition.from,
        cap = geometry.line_cap.as_str(),
    )?;
    if transition.animate {
        write!(
            writer,
            r##"<animate attributeName="stroke-dashoffset" from="{from}" to="{to}" begin="{begin}ms" dur="{dur}ms" fill="freeze" calcMode="spline" keyTimes="0;1" keySplines="{spline}"/>"##,
            from = transition.from,
            to = transition.to,
            begin = transition.delay.as_millis(),
            dur = transition.duration.as_millis(),
            spline = transition.easing.key_spline(),
        )?;
    }
    writeln!(writer, "</circle>")?;

    if let Some(tick) = &geometry.reference_tick {
        writeln!(
            writer,
            r##"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="white" stroke-width="2.2" stroke-dasharray="4 4" stroke-linecap="round" opacity="0.9"/>"##,
            x1 = tick.start.x,
            y1 = tick.start.y,
            x2 = tick.end.x,
            y2 = tick.end.y,
        )?;
    }
    writeln!(writer, "</g>")?;

    writeln!(
        writer,
        r##"<text x="50%" y="50%" text-anchor="middle" dy=".45em" fill="{LABEL_COLOR}" font-size="{font}px" font-weight="600">{label}</text>"##,
        font = geometry.font_size,
        label = geometry.label,
    )?;
    writeln!(writer, "</svg>")?;
    Ok(())
}
