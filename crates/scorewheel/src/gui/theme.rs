use dial::Score;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub hub: Srgba<f64>,
    pub hub_shadow: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            hub: Self::lookup_color(
                context,
                "wheel_hub_color",
                Srgba::new(0.043, 0.098, 0.173, 1.0),
                None,
            ),
            hub_shadow: Self::lookup_color(
                context,
                "wheel_shadow_color",
                Srgba::new(0.0, 0.0, 0.0, 0.2),
                Some(0.2),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

/// Pango markup for the big readout, tinted by score.
pub fn score_markup(score: Score) -> String {
    format!(
        "<span foreground=\"{}\">{}</span>",
        score.hex_color(),
        score
    )
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
@define-color wheel_hub_color #0b192c;
@define-color wheel_shadow_color black;

.scorewheel-window, .scorewheel-root {
    background-color: @wheel_hub_color;
}

.scorewheel-header {
    color: white;
    font-size: 20px;
    font-weight: bold;
}

.scorewheel-score {
    font-size: 100px;
    font-weight: bold;
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
    fn test_score_markup_uses_score_color() {
        let markup = score_markup(Score::new(7).unwrap());
        assert_eq!(markup, "<span foreground=\"#24cce3\">7</span>");
    }
}
