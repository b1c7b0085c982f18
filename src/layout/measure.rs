use std::borrow::Cow;

use crate::foundation::error::{BakeError, BakeResult};
use crate::style::tables::Typography;

/// Text width measurement used by the layout solver.
///
/// Implementations must be deterministic: the same text, size and typography always measure the
/// same, otherwise bakes stop being reproducible.
pub trait TextMeasure {
    /// Advance width in pixels of `text` set at `font_size` pixels.
    fn text_width(&mut self, text: &str, font_size: f64, typography: &Typography) -> f64;
}

/// Text as displayed under `typography` (upper-cased when the style asks for it).
pub fn display_text<'a>(text: &'a str, typography: &Typography) -> Cow<'a, str> {
    if typography.uppercase {
        Cow::Owned(text.to_uppercase())
    } else {
        Cow::Borrowed(text)
    }
}

fn letter_spacing_px(text: &str, font_size: f64, typography: &Typography) -> f64 {
    let gaps = text.chars().count().saturating_sub(1) as f64;
    gaps * typography.letter_spacing * font_size
}

#[derive(Clone, Copy, Debug, Default)]
/// Font-free width estimate from per-character advance classes, in ems.
///
/// The default measurer: needs no font data and is identical on every host.
pub struct GlyphWidthEstimator;

impl GlyphWidthEstimator {
    fn advance_em(c: char) -> f64 {
        match c {
            ' ' => 0.28,
            'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.26,
            'f' | 'r' | 't' | 'I' | '(' | ')' | '-' => 0.36,
            'm' | 'w' | 'M' | 'W' | '@' => 0.86,
            'A'..='Z' => 0.66,
            '0'..='9' => 0.56,
            'a'..='z' => 0.52,
            c if c.is_whitespace() => 0.28,
            _ => 0.6,
        }
    }
}

impl TextMeasure for GlyphWidthEstimator {
    fn text_width(&mut self, text: &str, font_size: f64, typography: &Typography) -> f64 {
        if !font_size.is_finite() || font_size <= 0.0 {
            return 0.0;
        }
        let text = display_text(text, typography);
        let ems: f64 = text.chars().map(Self::advance_em).sum();
        let weight = if typography.font_weight >= 700 { 1.06 } else { 1.0 };
        (ems * font_size * weight + letter_spacing_px(&text, font_size, typography)).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

/// Shaping-based measurement through Parley using caller-supplied font bytes.
///
/// Every typography is measured with the supplied face; only size, case and letter spacing vary.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<MeasureBrush>,
    family_name: String,
}

impl ParleyMeasurer {
    /// Register `font_bytes` and prepare a measurement context.
    pub fn new(font_bytes: &[u8]) -> BakeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BakeError::measurement("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BakeError::measurement("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyMeasurer {
    fn text_width(&mut self, text: &str, font_size: f64, typography: &Typography) -> f64 {
        if !font_size.is_finite() || font_size <= 0.0 || text.is_empty() {
            return 0.0;
        }
        let text = display_text(text, typography);

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, &text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size as f32));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(&text);
        layout.break_all_lines(None);

        f64::from(layout.width()) + letter_spacing_px(&text, font_size, typography)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
