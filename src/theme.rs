use ratatui::style::Color;

/// Colors for one alive-or-dead rendering state.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub snake: Color,
    pub food: Color,
    /// Checkerboard color for cells where `x + y` is even.
    pub board_even: Color,
    /// Checkerboard color for cells where `x + y` is odd.
    pub board_odd: Color,
}

/// A named pair of palettes selected by the session's alive flag.
///
/// The whole frame shifts color on death, board included, so the terminal
/// communicates the terminal state without any text.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    pub alive: Palette,
    pub dead: Palette,
}

impl Theme {
    /// Returns the palette matching the session's alive flag.
    #[must_use]
    pub fn palette(&self, alive: bool) -> &Palette {
        if alive { &self.alive } else { &self.dead }
    }
}

/// Gold snake on a gray checkerboard; everything tints red on death.
pub const THEME_EMBER: Theme = Theme {
    name: "ember",
    alive: Palette {
        snake: Color::Rgb(0xde, 0xad, 0x00),
        food: Color::Rgb(0xcc, 0x33, 0xbb),
        board_even: Color::Rgb(0x48, 0x48, 0x48),
        board_odd: Color::Rgb(0x38, 0x38, 0x38),
    },
    dead: Palette {
        snake: Color::Rgb(0xff, 0x22, 0x22),
        food: Color::Rgb(0xff, 0x11, 0x11),
        board_even: Color::Rgb(0x88, 0x48, 0x48),
        board_odd: Color::Rgb(0x88, 0x38, 0x38),
    },
};

/// Cyan snake on a blue-gray checkerboard.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    alive: Palette {
        snake: Color::Rgb(0x22, 0xcc, 0xcc),
        food: Color::Rgb(0xee, 0xcc, 0x22),
        board_even: Color::Rgb(0x2e, 0x3a, 0x4e),
        board_odd: Color::Rgb(0x26, 0x30, 0x40),
    },
    dead: Palette {
        snake: Color::Rgb(0xcc, 0x44, 0x44),
        food: Color::Rgb(0xaa, 0x33, 0x33),
        board_even: Color::Rgb(0x4e, 0x2e, 0x3a),
        board_odd: Color::Rgb(0x40, 0x26, 0x30),
    },
};

/// All built-in themes in selection order.
pub const THEMES: &[Theme] = &[THEME_EMBER, THEME_OCEAN];

/// Looks a theme up by its case-insensitive name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::{theme_by_name, THEMES};

    #[test]
    fn lookup_is_case_insensitive() {
        let theme = theme_by_name("EMBER").expect("ember is built in");
        assert_eq!(theme.name, "ember");
    }

    #[test]
    fn unknown_name_returns_none() {
        assert!(theme_by_name("lava").is_none());
    }

    #[test]
    fn theme_names_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
