use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::user_settings::ThemeMode;

pub const TITLE_BLUE: Color = Color::from_rgb(0.122, 0.467, 0.706);
pub const META_GRAY: Color = Color::from_rgb(0.6, 0.6, 0.6);
pub const DATE_GRAY: Color = Color::from_rgb(0.55, 0.55, 0.55);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.1),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.98, 0.98, 0.99),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: TITLE_BLUE,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
            },
        ),
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(TITLE_BLUE)),
            text_color: Color::WHITE,
            border: Border {
                color: TITLE_BLUE,
                width: 1.0,
                radius: 5.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.082, 0.337, 0.627))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.082, 0.337, 0.627),
                width: 1.0,
                radius: 5.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.063, 0.263, 0.49))),
            text_color: Color::WHITE,
            border: Border {
                color: Color::from_rgb(0.063, 0.263, 0.49),
                width: 1.0,
                radius: 5.0.into(),
            },
            shadow: Shadow::default(),
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 1.0,
                radius: 5.0.into(),
            },
            shadow: Shadow::default(),
        },
    }
}

pub fn news_card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.06))),
        border: Border {
            color: Color::from_rgba(0.5, 0.5, 0.5, 0.35),
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_light_uses_title_blue_as_primary() {
        let theme = get_theme(&ThemeMode::Light);

        assert_eq!(theme.palette().primary, TITLE_BLUE);
    }

    #[test]
    fn test_get_theme_dark_has_dark_background() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert!(palette.background.r < 0.2);
        assert!(palette.text.r > 0.8);
    }

    #[test]
    fn test_primary_button_style_active_is_blue() {
        let style = primary_button_style(&Theme::Light, button::Status::Active);

        assert_eq!(style.background, Some(Background::Color(TITLE_BLUE)));
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_disabled_is_gray() {
        let style = primary_button_style(&Theme::Light, button::Status::Disabled);

        assert_eq!(
            style.background,
            Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3)))
        );
    }

    #[test]
    fn test_news_card_style_has_rounded_border() {
        let style = news_card_style(&Theme::Light);

        assert_eq!(style.border.radius, 10.0.into());
        assert_eq!(style.border.width, 1.0);
    }
}
