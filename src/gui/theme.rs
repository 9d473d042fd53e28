use gtk::gdk;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha, named};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub pie: Srgba<f64>,
    pub ship: Srgba<f64>,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: opaque(named::BLACK),
            pie: opaque(Srgb::new(0x3d, 0xbb, 0xff)),
            ship: opaque(named::YELLOW),
        }
    }
}

fn opaque(color: Srgb<u8>) -> Srgba<f64> {
    color.into_format::<f64>().with_alpha(1.0)
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.pieship-window, .pieship-drawing-area {
    background: none;
    background-color: black;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let colors = ThemeColors::default();
        assert_eq!(colors.background.into_components(), (0.0, 0.0, 0.0, 1.0));
        let (r, g, b, a) = colors.ship.into_components();
        assert_eq!((r, g, b, a), (1.0, 1.0, 0.0, 1.0));
        let (r, g, b, _) = colors.pie.into_components();
        assert!((r - 61.0 / 255.0).abs() < 1e-12);
        assert!((g - 187.0 / 255.0).abs() < 1e-12);
        assert_eq!(b, 1.0);
    }
}
