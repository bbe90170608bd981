//! Light and dark palettes, switched with Ctrl+D.

use ratatui::style::{Color, Modifier, Style};

use crate::core::pages::weather::TemperatureBand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        text: Color::White,
        muted: Color::DarkGray,
        accent: Color::Cyan,
        border: Color::DarkGray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    };

    pub const LIGHT: Theme = Theme {
        text: Color::Black,
        muted: Color::Gray,
        accent: Color::Blue,
        border: Color::Gray,
        success: Color::Green,
        warning: Color::Rgb(200, 120, 0),
        error: Color::Red,
    };

    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode { Theme::DARK } else { Theme::LIGHT }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight for the selected row of a list.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn temperature(&self, band: TemperatureBand) -> Style {
        let color = match band {
            TemperatureBand::VeryHot => Color::Red,
            TemperatureBand::Hot => Color::LightRed,
            TemperatureBand::Warm => Color::Yellow,
            TemperatureBand::Mild => Color::Green,
            TemperatureBand::Cool => Color::Cyan,
            TemperatureBand::Cold => Color::Blue,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode() {
        assert_eq!(Theme::for_mode(true), Theme::DARK);
        assert_eq!(Theme::for_mode(false), Theme::LIGHT);
    }

    #[test]
    fn test_temperature_colors_differ_by_band() {
        let theme = Theme::DARK;
        assert_ne!(
            theme.temperature(TemperatureBand::VeryHot),
            theme.temperature(TemperatureBand::Cold)
        );
    }
}
