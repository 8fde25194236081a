//! SVG assembly from a fixed skeleton.
//!
//! The skeleton is a sequence of literal [`Segment`]s and named
//! [`Placeholder`] slots. Slots are filled from an ordered list of
//! [`PlaceholderSource`]s: the per-render [`ChartRenderData`] is
//! consulted first and the effective [`ChartConfig`] second, so a value
//! supplied by the render data always wins. In particular the `baseline`
//! slot is always filled by the rendered `d="..."` attribute (or the
//! empty string), never by the configuration's baseline value. A slot
//! that no source fills renders as the empty string.

use crate::config::ChartConfig;
use crate::format::{push_js_number, push_xml_escaped};

/// Named slots in the SVG skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Width,
    Height,
    PaddingX,
    PaddingY,
    Baseline,
    Color,
    LineWidth,
    PathData,
}

/// One piece of the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Slot(Placeholder),
}

/// The chart skeleton: a root `<svg>`, a padded `<g>`, the dashed
/// reference path, then the series path.
pub const SKELETON: &[Segment] = &[
    Segment::Literal(r#"<svg xmlns="http://www.w3.org/2000/svg" width=""#),
    Segment::Slot(Placeholder::Width),
    Segment::Literal(r#"" height=""#),
    Segment::Slot(Placeholder::Height),
    Segment::Literal(r#""><g transform="translate("#),
    Segment::Slot(Placeholder::PaddingX),
    Segment::Literal(" "),
    Segment::Slot(Placeholder::PaddingY),
    Segment::Literal(
        r##")"><path fill="none" stroke="#888" stroke-width="1" stroke-dasharray="3" "##,
    ),
    Segment::Slot(Placeholder::Baseline),
    Segment::Literal(r#"></path><path fill="none" stroke=""#),
    Segment::Slot(Placeholder::Color),
    Segment::Literal(r#"" stroke-width=""#),
    Segment::Slot(Placeholder::LineWidth),
    Segment::Literal(r#"" d=""#),
    Segment::Slot(Placeholder::PathData),
    Segment::Literal(r#""></path></g></svg>"#),
];

/// A source of slot values.
///
/// Returns `false` when the source has no value for `slot`, letting the
/// next source try.
pub trait PlaceholderSource {
    /// Append the value for `slot` to `out`, if this source has one.
    fn fill(&self, slot: Placeholder, out: &mut String) -> bool;
}

/// Per-render values produced by the path builder.
///
/// Consumed once by [`render`] and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartRenderData {
    /// `d` value for the series path.
    pub path_data: String,
    /// Complete `d="..."` attribute for the reference path, or empty.
    pub baseline: String,
}

impl PlaceholderSource for ChartRenderData {
    fn fill(&self, slot: Placeholder, out: &mut String) -> bool {
        match slot {
            Placeholder::PathData => out.push_str(&self.path_data),
            Placeholder::Baseline => out.push_str(&self.baseline),
            _ => return false,
        }
        true
    }
}

impl PlaceholderSource for ChartConfig {
    fn fill(&self, slot: Placeholder, out: &mut String) -> bool {
        match slot {
            Placeholder::Width => push_js_number(out, self.width),
            Placeholder::Height => push_js_number(out, self.height),
            Placeholder::PaddingX => push_js_number(out, self.padding_x),
            Placeholder::PaddingY => push_js_number(out, self.padding_y),
            Placeholder::LineWidth => push_js_number(out, self.line_width),
            Placeholder::Color => push_xml_escaped(out, &self.color),
            Placeholder::Baseline => match self.baseline.value() {
                Some(v) => push_js_number(out, v),
                None => out.push_str("false"),
            },
            Placeholder::PathData => return false,
        }
        true
    }
}

/// Fill every slot in `skeleton` from `sources`, first match wins.
#[must_use]
pub fn render_with(skeleton: &[Segment], sources: &[&dyn PlaceholderSource]) -> String {
    let mut out = String::new();
    for segment in skeleton {
        match *segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(slot) => {
                // Unfilled slots are left empty.
                let _ = sources.iter().any(|source| source.fill(slot, &mut out));
            }
        }
    }
    out
}

/// Render the chart skeleton: render data first, configuration second.
#[must_use]
pub fn render(data: &ChartRenderData, config: &ChartConfig) -> String {
    render_with(SKELETON, &[data as &dyn PlaceholderSource, config])
}
