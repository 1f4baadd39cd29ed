//! Theme palettes
//!
//! The built-in palette table the settings screen offers. Applying one is
//! the embedder's job; the core only knows the catalog and the selection.

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME: &str = "green";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub primary: String,
    pub secondary: String,
    pub bg: String,
    pub bg_gradient: String,
    pub animation: String,
}

impl Theme {
    /// All built-in themes, in settings-screen order.
    pub fn all() -> Vec<Theme> {
        vec![red(), blue(), purple(), green(), gold()]
    }

    pub fn get(id: &str) -> Option<Theme> {
        Self::all().into_iter().find(|t| t.id == id)
    }

    pub fn default_theme() -> Theme {
        green()
    }
}

fn theme(
    id: &str,
    name: &str,
    primary: &str,
    secondary: &str,
    bg: &str,
    bg_gradient: &str,
    animation: &str,
) -> Theme {
    Theme {
        id: id.to_string(),
        name: name.to_string(),
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        bg: bg.to_string(),
        bg_gradient: bg_gradient.to_string(),
        animation: animation.to_string(),
    }
}

fn red() -> Theme {
    theme(
        "red",
        "Red Cyber",
        "#ff0000",
        "#cc0000",
        "#000000",
        "linear-gradient(180deg, #111 0%, #000 100%)",
        "cyber",
    )
}

fn blue() -> Theme {
    theme(
        "blue",
        "Ocean Blue",
        "#0080ff",
        "#0066cc",
        "#001122",
        "linear-gradient(180deg, #003366 0%, #001122 100%)",
        "wave",
    )
}

fn purple() -> Theme {
    theme(
        "purple",
        "Neon Purple",
        "#8a2be2",
        "#6a1b9a",
        "#1a0d26",
        "linear-gradient(180deg, #2d1b3d 0%, #1a0d26 100%)",
        "pulse",
    )
}

fn green() -> Theme {
    theme(
        "green",
        "Matrix Green",
        "#00ff41",
        "#00cc33",
        "#0d1b0f",
        "linear-gradient(180deg, #1a331d 0%, #0d1b0f 100%)",
        "matrix",
    )
}

fn gold() -> Theme {
    theme(
        "gold",
        "Golden Luxury",
        "#ffd700",
        "#ffb700",
        "#1a1a0d",
        "linear-gradient(180deg, #333322 0%, #1a1a0d 100%)",
        "shine",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog() {
        let themes = Theme::all();
        assert_eq!(themes.len(), 5);

        let ids: Vec<&str> = themes.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["red", "blue", "purple", "green", "gold"]);
    }

    #[test]
    fn test_lookup() {
        let theme = Theme::get("gold").unwrap();
        assert_eq!(theme.name, "Golden Luxury");
        assert_eq!(theme.primary, "#ffd700");

        assert!(Theme::get("neon-pink").is_none());
    }

    #[test]
    fn test_default_theme_is_in_catalog() {
        let theme = Theme::default_theme();
        assert_eq!(theme.id, DEFAULT_THEME);
        assert_eq!(Theme::get(DEFAULT_THEME), Some(theme));
    }

    #[test]
    fn test_serializes() {
        let json = serde_json::to_string(&Theme::default_theme()).unwrap();
        assert!(json.contains("\"id\":\"green\""));
    }
}
