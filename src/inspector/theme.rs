//! Style-token to colour resolution.

use valscope_config::ThemeSettings;

use super::types::StyleToken;

/// RGB palette indexed by [`StyleToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    settings: ThemeSettings,
}

impl Default for ThemeColors {
    /// Catppuccin Mocha-inspired palette.
    fn default() -> Self {
        Self::from_settings(&ThemeSettings::default())
    }
}

impl ThemeColors {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }

    /// Colour for a semantic token.
    pub fn color(&self, token: StyleToken) -> [u8; 3] {
        let s = &self.settings;
        match token {
            StyleToken::String => s.string,
            StyleToken::Number => s.number,
            StyleToken::Boolean => s.boolean,
            StyleToken::Null => s.null,
            StyleToken::Callable => s.callable,
            StyleToken::Symbol => s.symbol,
            StyleToken::Date => s.date,
            StyleToken::Pattern => s.pattern,
            StyleToken::Error => s.error,
            StyleToken::Container => s.container,
            StyleToken::Key => s.key,
            StyleToken::Guide => s.guide,
            StyleToken::Marker => s.marker,
            StyleToken::Title => s.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_from_settings() {
        let settings = ThemeSettings {
            key: [1, 2, 3],
            ..ThemeSettings::default()
        };
        let theme = ThemeColors::from_settings(&settings);
        assert_eq!(theme.color(StyleToken::Key), [1, 2, 3]);
        assert_eq!(theme.color(StyleToken::String), settings.string);
    }
}
