use crate::colors::ColorTable;
use crate::error::Result;
use crate::model::LanguageTally;
use std::fs;
use std::path::Path;

/// Renders the cumulative tally as a fixed-canvas SVG bar: one contiguous
/// segment per language, widest first, clipped to rounded corners.
pub fn render_svg(tally: &LanguageTally, colors: &ColorTable, width: u32, height: u32) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="font-family:Arial, sans-serif;">"#
    ));

    let radius = f64::from(height) / 2.0;
    svg.push_str(&format!(
        r#"<defs><clipPath id="roundedClip"><rect x="0" y="0" width="{width}" height="{height}" rx="{radius}" ry="{radius}"/></clipPath></defs>"#
    ));
    svg.push_str(r#"<g clip-path="url(#roundedClip)">"#);

    let total = tally.total_bytes();
    if total > 0 {
        let bar_height = f64::from(height);
        let mut x = 0.0;
        for (language, bytes) in tally.sorted() {
            let segment = f64::from(width) * (bytes as f64 / total as f64);
            svg.push_str(&format!(
                r#"<rect x="{x:.2}" y="0.00" width="{segment:.2}" height="{bar_height:.2}" fill="{}" />"#,
                colors.color_for(language)
            ));
            x += segment;
        }
    }

    svg.push_str("</g></svg>");
    svg
}

/// Writes the rendered chart to `output_path`. Failure here is reportable
/// but never fatal to the run; the textual summary is already printed.
pub fn write_chart(
    tally: &LanguageTally,
    colors: &ColorTable,
    width: u32,
    height: u32,
    output_path: &Path,
) -> Result<()> {
    fs::write(output_path, render_svg(tally, colors, width, height))?;
    Ok(())
}
