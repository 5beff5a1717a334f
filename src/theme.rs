use anstyle::{AnsiColor, Color, Effects, RgbColor, Style};

pub const ACCENT_RGB: (u8, u8, u8) = (207, 106, 76);

pub const PRIMARY: Style = Style::new()
    .fg_color(Some(Color::Rgb(RgbColor(
        ACCENT_RGB.0,
        ACCENT_RGB.1,
        ACCENT_RGB.2,
    ))))
    .effects(Effects::BOLD);
pub const SECONDARY: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
pub const ERROR: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)))
    .effects(Effects::BOLD);
pub const ARROW: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Blue)))
    .effects(Effects::BOLD);
pub const DIM: Style = Style::new().effects(Effects::DIMMED);
