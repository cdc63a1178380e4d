//! Themes: per-color glyph and gradient lookup.
//!
//! A theme is pure presentation data. The game never inspects it; the view
//! looks up the glyph and the two gradient stops for each cell's color.
//!
//! Themes can be loaded from JSON:
//!
//! ```json
//! {
//!   "name": "Ocean",
//!   "icons": { "pink": "◆", "cyan": "◈", "lime": "♣", "orange": "▲",
//!              "purple": "●", "yellow": "★", "none": "·" },
//!   "gradients": { "pink": ["#ec4899", "#e11d48"], "...": ["#..", "#.."] }
//! }
//! ```

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::fb::Rgb;
use crate::types::BlockColor;

/// One value per palette color plus one for empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable<T> {
    pub pink: T,
    pub cyan: T,
    pub lime: T,
    pub orange: T,
    pub purple: T,
    pub yellow: T,
    pub none: T,
}

impl<T> ColorTable<T> {
    pub fn get(&self, color: Option<BlockColor>) -> &T {
        match color {
            Some(BlockColor::Pink) => &self.pink,
            Some(BlockColor::Cyan) => &self.cyan,
            Some(BlockColor::Lime) => &self.lime,
            Some(BlockColor::Orange) => &self.orange,
            Some(BlockColor::Purple) => &self.purple,
            Some(BlockColor::Yellow) => &self.yellow,
            None => &self.none,
        }
    }

    fn try_map<U>(self, mut f: impl FnMut(&'static str, T) -> Result<U>) -> Result<ColorTable<U>> {
        Ok(ColorTable {
            pink: f("pink", self.pink)?,
            cyan: f("cyan", self.cyan)?,
            lime: f("lime", self.lime)?,
            orange: f("orange", self.orange)?,
            purple: f("purple", self.purple)?,
            yellow: f("yellow", self.yellow)?,
            none: f("none", self.none)?,
        })
    }
}

/// Two color stops drawn across a board cell (left column, right column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    pub const fn new(from: Rgb, to: Rgb) -> Self {
        Self { from, to }
    }
}

/// Glyphs and gradients for every color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub name: String,
    pub icons: ColorTable<char>,
    pub gradients: ColorTable<Gradient>,
}

/// On-disk form of a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeFile {
    name: String,
    icons: ColorTable<String>,
    gradients: ColorTable<[String; 2]>,
}

fn palette_gradients() -> ColorTable<Gradient> {
    ColorTable {
        pink: Gradient::new(Rgb::new(0xec, 0x48, 0x99), Rgb::new(0xe1, 0x1d, 0x48)),
        cyan: Gradient::new(Rgb::new(0x22, 0xd3, 0xee), Rgb::new(0x3b, 0x82, 0xf6)),
        lime: Gradient::new(Rgb::new(0xa3, 0xe6, 0x35), Rgb::new(0x10, 0xb9, 0x81)),
        orange: Gradient::new(Rgb::new(0xfb, 0x92, 0x3c), Rgb::new(0xd9, 0x77, 0x06)),
        purple: Gradient::new(Rgb::new(0xa8, 0x55, 0xf7), Rgb::new(0x4f, 0x46, 0xe5)),
        yellow: Gradient::new(Rgb::new(0xfd, 0xe0, 0x47), Rgb::new(0xfb, 0x92, 0x3c)),
        none: Gradient::new(Rgb::new(0x1e, 0x29, 0x3b), Rgb::new(0x1e, 0x29, 0x3b)),
    }
}

impl ThemeConfig {
    /// Icon glyphs on gradient blocks.
    pub fn neon() -> Self {
        Self {
            name: "Classic Neon".to_string(),
            icons: ColorTable {
                pink: '◆',
                cyan: '◈',
                lime: '♣',
                orange: '▲',
                purple: '●',
                yellow: '★',
                none: '·',
            },
            gradients: palette_gradients(),
        }
    }

    /// Plain gradient blocks.
    pub fn simple() -> Self {
        Self {
            name: "Simple".to_string(),
            icons: ColorTable {
                pink: ' ',
                cyan: ' ',
                lime: ' ',
                orange: ' ',
                purple: ' ',
                yellow: ' ',
                none: '·',
            },
            gradients: palette_gradients(),
        }
    }

    /// Built-in themes in cycling order.
    pub fn builtins() -> Vec<Self> {
        vec![Self::neon(), Self::simple()]
    }

    /// Look up a built-in theme by short name (`neon`, `simple`).
    pub fn builtin(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "neon" | "classic" => Some(Self::neon()),
            "simple" | "plain" => Some(Self::simple()),
            _ => None,
        }
    }

    pub fn icon(&self, color: Option<BlockColor>) -> char {
        *self.icons.get(color)
    }

    pub fn gradient(&self, color: Option<BlockColor>) -> Gradient {
        *self.gradients.get(color)
    }

    /// Parse a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ThemeFile = serde_json::from_str(json).context("invalid theme JSON")?;
        let icons = file.icons.try_map(|key, s| {
            s.chars()
                .next()
                .ok_or_else(|| anyhow!("icon for `{}` is empty", key))
        })?;
        let gradients = file.gradients.try_map(|key, [from, to]| {
            let from = Rgb::from_hex(&from).ok_or_else(|| anyhow!("bad color `{}` for `{}`", from, key))?;
            let to = Rgb::from_hex(&to).ok_or_else(|| anyhow!("bad color `{}` for `{}`", to, key))?;
            Ok(Gradient::new(from, to))
        })?;
        Ok(Self {
            name: file.name,
            icons,
            gradients,
        })
    }

    /// Load a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading theme {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("loading theme {}", path.display()))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::neon()
    }
}
