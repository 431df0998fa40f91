use crate::style::FontSpec;

/// Text metrics provider. Idea sizes are derived from it once, at creation.
///
/// Drawing surfaces implement this with real font metrics; headless callers
/// can use [`ApproxMeasure`].
pub trait TextMeasure {
    /// Advance width of `text` in device pixels when set in `font`.
    fn text_width(&self, text: &str, font: &FontSpec) -> f64;
}

/// Fixed-advance estimate: every char is 0.6 em wide.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        text.chars().count() as f64 * font.size.value * 0.6
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn text_width(&self, text: &str, font: &FontSpec) -> f64 {
        (**self).text_width(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_scales_with_length_and_size() {
        let font = FontSpec::default();
        let w = ApproxMeasure.text_width("Topic", &font);
        assert!((w - 5.0 * 12.0 * 0.6).abs() < 1e-9);
        assert_eq!(ApproxMeasure.text_width("", &font), 0.0);
    }
}
