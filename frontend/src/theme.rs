//! Page theme: colors and spacing.

/// Light/dark palette selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#6750A4";
    pub const LIGHT_SURFACE: &'static str = "#FFFBFE";
    pub const LIGHT_ON_SURFACE: &'static str = "#1C1B1F";
    pub const LIGHT_OUTLINE: &'static str = "#79747E";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#D0BCFF";
    pub const DARK_SURFACE: &'static str = "#1C1B1F";
    pub const DARK_ON_SURFACE: &'static str = "#E6E1E5";
    pub const DARK_OUTLINE: &'static str = "#938F99";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn outline(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_OUTLINE
        } else {
            Self::LIGHT_OUTLINE
        }
    }
}

pub mod spacing {
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const SECTION_PADDING: &str = "16px";
}

/// Inline style for payback rows; settled ones are struck through.
pub fn payback_decoration(settled: bool) -> &'static str {
    if settled {
        "line-through"
    } else {
        "none"
    }
}
