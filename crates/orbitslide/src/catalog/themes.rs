use eframe::egui::{Color32, FontFamily};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_THEME_ID: &str = "cosmic";

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("invalid color `{0}`")]
    Color(String),

    #[error("invalid background `{0}`")]
    Background(String),
}

/// A theme as written in the catalog or in `config.yaml`, colors in CSS notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDef {
    pub id: String,
    pub name: String,
    pub background: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
    pub font_family: String,
    pub card_background: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub color: Color32,
    /// Position along the gradient line, 0..=1.
    pub at: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Solid(Color32),
    /// CSS angle in degrees: 0 points up, 90 points right.
    Linear {
        angle: f32,
        stops: Vec<GradientStop>,
    },
    Radial(Vec<GradientStop>),
}

impl Background {
    /// Color at a normalized slide position (`u`, `v` in 0..=1).
    pub fn sample(&self, u: f32, v: f32) -> Color32 {
        // Slides are 16:9; gradients are measured in that space.
        let (w, h) = (16.0_f32, 9.0_f32);
        match self {
            Self::Solid(color) => *color,
            Self::Linear { angle, stops } => {
                let rad = angle.to_radians();
                let (dx, dy) = (rad.sin(), -rad.cos());
                let length = (w * dx).abs() + (h * dy).abs();
                let t = ((u - 0.5) * w * dx + (v - 0.5) * h * dy) / length + 0.5;
                sample_stops(stops, t)
            }
            Self::Radial(stops) => {
                let (x, y) = ((u - 0.5) * w, (v - 0.5) * h);
                let corner = (w * w / 4.0 + h * h / 4.0).sqrt();
                sample_stops(stops, (x * x + y * y).sqrt() / corner)
            }
        }
    }
}

fn sample_stops(stops: &[GradientStop], t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let Some(first) = stops.first() else {
        return Color32::BLACK;
    };
    if t <= first.at {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.at {
            let span = (b.at - a.at).max(f32::EPSILON);
            return lerp_color(a.color, b.color, (t - a.at) / span);
        }
    }
    stops.last().map_or(first.color, |s| s.color)
}

pub fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub background: Background,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub font_family: String,
    pub card_background: Color32,
}

impl Theme {
    pub fn from_def(def: &ThemeDef) -> Result<Self, ColorParseError> {
        Ok(Self {
            id: def.id.clone(),
            name: def.name.clone(),
            background: parse_background(&def.background)?,
            text_primary: parse_color(&def.text_primary)?,
            text_secondary: parse_color(&def.text_secondary)?,
            accent: parse_color(&def.accent)?,
            font_family: def.font_family.clone(),
            card_background: parse_color(&def.card_background)?,
        })
    }

    /// The cosmic theme built without parsing.
    pub fn fallback() -> Self {
        Self {
            id: DEFAULT_THEME_ID.to_string(),
            name: "Cosmic".to_string(),
            background: Background::Linear {
                angle: 135.0,
                stops: vec![
                    GradientStop {
                        color: Color32::from_rgb(0x0f, 0x17, 0x2a),
                        at: 0.0,
                    },
                    GradientStop {
                        color: Color32::from_rgb(0x1e, 0x1b, 0x4b),
                        at: 1.0,
                    },
                ],
            },
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            accent: Color32::from_rgb(0x3b, 0x82, 0xf6),
            font_family: "Inter".to_string(),
            card_background: Color32::from_rgba_unmultiplied(255, 255, 255, 13),
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Color32::from_rgba_unmultiplied(r, g, b, (a as f32 * opacity.clamp(0.0, 1.0)) as u8)
    }

    pub fn egui_font_family(&self) -> FontFamily {
        if self.font_family.contains("Mono") {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeCategory {
    pub name: String,
    pub themes: Vec<Theme>,
}

#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    categories: Vec<ThemeCategory>,
}

impl ThemeCatalog {
    pub fn builtin() -> Self {
        let categories = builtin_defs()
            .into_iter()
            .map(|(name, defs)| ThemeCategory {
                name: name.to_string(),
                themes: defs
                    .iter()
                    .filter_map(|def| match Theme::from_def(def) {
                        Ok(theme) => Some(theme),
                        Err(e) => {
                            log::error!("built-in theme {} is invalid: {e}", def.id);
                            None
                        }
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Built-in themes plus user themes from the configuration file. Invalid
    /// user themes are skipped with a warning; a user theme reusing a
    /// built-in id shadows it.
    pub fn with_custom(defs: &[ThemeDef]) -> Self {
        let mut catalog = Self::builtin();
        let custom: Vec<Theme> = defs
            .iter()
            .filter_map(|def| match Theme::from_def(def) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("Skipping custom theme {}: {e}", def.id);
                    None
                }
            })
            .collect();
        if !custom.is_empty() {
            catalog.categories.insert(
                0,
                ThemeCategory {
                    name: "Custom".to_string(),
                    themes: custom,
                },
            );
        }
        catalog
    }

    pub fn categories(&self) -> &[ThemeCategory] {
        &self.categories
    }

    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.categories.iter().flat_map(|c| c.themes.iter())
    }

    pub fn find(&self, id: &str) -> Option<&Theme> {
        self.themes().find(|t| t.id == id)
    }

    /// The theme with `id`, or the default theme when it is unknown.
    pub fn resolve(&self, id: &str) -> Theme {
        self.find(id)
            .or_else(|| self.find(DEFAULT_THEME_ID))
            .cloned()
            .unwrap_or_else(Theme::fallback)
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`, `black`, `white`.
pub fn parse_color(input: &str) -> Result<Color32, ColorParseError> {
    let err = || ColorParseError::Color(input.to_string());
    let s = input.trim().to_ascii_lowercase();

    match s.as_str() {
        // "#black" appears in the Industrial gradient and browsers treat the stop as black.
        "black" | "#black" => return Ok(Color32::BLACK),
        "white" => return Ok(Color32::WHITE),
        "transparent" => return Ok(Color32::TRANSPARENT),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(err)?;
        return match digits.as_slice() {
            [r, g, b] => Ok(Color32::from_rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Color32::from_rgb(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
            )),
            [r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Color32::from_rgba_unmultiplied(
                r1 * 16 + r2,
                g1 * 16 + g2,
                b1 * 16 + b2,
                a1 * 16 + a2,
            )),
            _ => Err(err()),
        };
    }

    let args = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(err)?;
    let parts: Vec<f32> = args
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .map_err(|_| err())?;
    let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
    match parts.as_slice() {
        [r, g, b] => Ok(Color32::from_rgb(channel(*r), channel(*g), channel(*b))),
        [r, g, b, a] => Ok(Color32::from_rgba_unmultiplied(
            channel(*r),
            channel(*g),
            channel(*b),
            (a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )),
        _ => Err(err()),
    }
}

/// Parse a solid color or a `linear-gradient(..)` / `radial-gradient(..)`.
pub fn parse_background(input: &str) -> Result<Background, ColorParseError> {
    let s = input.trim();
    let err = || ColorParseError::Background(input.to_string());

    if let Some(args) = function_args(s, "linear-gradient")
        .or_else(|| function_args(s, "repeating-linear-gradient"))
    {
        let parts = split_top_level(args);
        let (angle, rest) = match parts.first().and_then(|p| parse_direction(p)) {
            Some(angle) => (angle, &parts[1..]),
            None => (180.0, &parts[..]),
        };
        let stops = parse_stops(rest).map_err(|_| err())?;
        return Ok(Background::Linear { angle, stops });
    }

    if let Some(args) = function_args(s, "radial-gradient") {
        let parts = split_top_level(args);
        // Leading shape arguments ("circle", "ellipse at top") are not color stops.
        let rest = match parts.first() {
            Some(first) if parse_stop(first).is_err() => &parts[1..],
            _ => &parts[..],
        };
        let stops = parse_stops(rest).map_err(|_| err())?;
        return Ok(Background::Radial(stops));
    }

    parse_color(s).map(Background::Solid).map_err(|_| err())
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts
}

fn parse_direction(arg: &str) -> Option<f32> {
    let arg = arg.trim();
    if let Some(deg) = arg.strip_suffix("deg") {
        return deg.trim().parse().ok();
    }
    match arg {
        "to top" => Some(0.0),
        "to right" => Some(90.0),
        "to bottom" => Some(180.0),
        "to left" => Some(270.0),
        "to top right" | "to right top" => Some(45.0),
        "to bottom right" | "to right bottom" => Some(135.0),
        "to bottom left" | "to left bottom" => Some(225.0),
        "to top left" | "to left top" => Some(315.0),
        _ => None,
    }
}

fn parse_stop(part: &str) -> Result<(Color32, Option<f32>), ColorParseError> {
    let part = part.trim();
    if let Some((color, position)) = part.rsplit_once(' ') {
        let position = position.trim();
        if let Some(pct) = position.strip_suffix('%') {
            let at = pct
                .parse::<f32>()
                .map_err(|_| ColorParseError::Color(part.to_string()))?;
            return Ok((parse_color(color)?, Some(at / 100.0)));
        }
        // Pixel positions (repeating stripes) are spread evenly instead.
        if position.ends_with("px") || position.parse::<f32>().is_ok() {
            return Ok((parse_color(color)?, None));
        }
    }
    Ok((parse_color(part)?, None))
}

fn parse_stops(parts: &[&str]) -> Result<Vec<GradientStop>, ColorParseError> {
    let raw = parts
        .iter()
        .map(|p| parse_stop(p))
        .collect::<Result<Vec<_>, _>>()?;
    if raw.is_empty() {
        return Err(ColorParseError::Background(parts.join(",")));
    }
    Ok(resolve_stops(raw))
}

/// Fill in missing stop positions the way CSS does: first at 0, last at 1,
/// gaps spread evenly, never decreasing.
fn resolve_stops(raw: Vec<(Color32, Option<f32>)>) -> Vec<GradientStop> {
    let n = raw.len();
    let mut at: Vec<Option<f32>> = raw.iter().map(|(_, p)| *p).collect();
    if at[0].is_none() {
        at[0] = Some(0.0);
    }
    if n > 1 && at[n - 1].is_none() {
        at[n - 1] = Some(1.0);
    }

    let mut i = 1;
    while i < n {
        if at[i].is_none() {
            let start = i - 1;
            let mut end = i;
            while end < n - 1 && at[end].is_none() {
                end += 1;
            }
            let a = at[start].unwrap_or(0.0);
            let b = at[end].unwrap_or(1.0);
            let span = (end - start) as f32;
            for (k, slot) in at.iter_mut().enumerate().take(end).skip(i) {
                *slot = Some(a + (b - a) * (k - start) as f32 / span);
            }
            i = end;
        }
        i += 1;
    }

    let mut last = 0.0_f32;
    raw.into_iter()
        .zip(at)
        .map(|((color, _), at)| {
            last = at.unwrap_or(last).max(last);
            GradientStop { color, at: last }
        })
        .collect()
}

macro_rules! theme {
    ($id:literal, $name:literal, $bg:literal, $primary:literal, $secondary:literal, $accent:literal, $font:literal, $card:literal) => {
        ThemeDef {
            id: $id.to_string(),
            name: $name.to_string(),
            background: $bg.to_string(),
            text_primary: $primary.to_string(),
            text_secondary: $secondary.to_string(),
            accent: $accent.to_string(),
            font_family: $font.to_string(),
            card_background: $card.to_string(),
        }
    };
}

fn builtin_defs() -> Vec<(&'static str, Vec<ThemeDef>)> {
    vec![
        (
            "Dark & Cosmic",
            vec![
                theme!("cosmic", "Cosmic", "linear-gradient(135deg, #0f172a 0%, #1e1b4b 100%)", "#ffffff", "#cbd5e1", "#3b82f6", "Inter", "rgba(255,255,255,0.05)"),
                theme!("obsidian", "Obsidian", "linear-gradient(135deg, #000000 0%, #111 100%)", "#f8fafc", "#94a3b8", "#38bdf8", "Inter", "rgba(30,41,59,0.4)"),
                theme!("deep-space", "Deep Space", "linear-gradient(135deg, #0f0c29, #302b63, #24243e)", "#ffffff", "#b1b1b1", "#764ba2", "Inter", "rgba(255,255,255,0.05)"),
                theme!("midnight-pro", "Midnight", "linear-gradient(to right, #232526, #414345)", "#ffffff", "#cccccc", "#2193b0", "Roboto Mono", "rgba(0,0,0,0.3)"),
                theme!("cyberpunk", "Cyberpunk", "repeating-linear-gradient(45deg, #000 0, #000 10px, #111 10px, #111 20px)", "#00ff00", "#ff00ff", "#00ff00", "Roboto Mono", "rgba(0,0,0,0.8)"),
                theme!("nebula", "Nebula", "linear-gradient(135deg, #200122, #6f0000)", "#ffffff", "#ffcccc", "#ff0000", "Open Sans", "rgba(255,255,255,0.1)"),
                theme!("eclipse", "Eclipse", "linear-gradient(to bottom, #000000, #434343)", "#ffffff", "#a8a8a8", "#ffd700", "Montserrat", "rgba(50,50,50,0.3)"),
                theme!("void", "The Void", "radial-gradient(circle, #333333, #000000)", "#e0e0e0", "#666666", "#ffffff", "Raleway", "rgba(255,255,255,0.05)"),
                theme!("matrix", "Matrix", "linear-gradient(to bottom, #000000, #0a0a0a)", "#00ff00", "#008f00", "#003300", "Roboto Mono", "rgba(0,50,0,0.2)"),
                theme!("abyss", "Abyss", "linear-gradient(135deg, #090912, #182848)", "#dbeafe", "#60a5fa", "#2563eb", "Inter", "rgba(30,41,59,0.4)"),
            ],
        ),
        (
            "Clean & Light",
            vec![
                theme!("light", "Clean Light", "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)", "#1e293b", "#475569", "#0f172a", "Inter", "rgba(255,255,255,0.8)"),
                theme!("paper", "Paper", "#ffffff", "#333333", "#666666", "#ff6b6b", "Playfair Display", "#f9f9f9"),
                theme!("minimal", "Minimal", "linear-gradient(to top, #cfd9df 0%, #e2ebf0 100%)", "#2d3436", "#636e72", "#0984e3", "Inter", "rgba(255,255,255,0.6)"),
                theme!("ivory", "Ivory", "#fffff0", "#5c5c5c", "#8f8f8f", "#d4af37", "Merriweather", "#ffffff"),
                theme!("porcelain", "Porcelain", "linear-gradient(135deg, #e6e9f0 0%, #eef1f5 100%)", "#3b3b3b", "#7a7a7a", "#3498db", "Open Sans", "rgba(255,255,255,0.9)"),
                theme!("linen", "Linen", "#faf0e6", "#4a4a4a", "#8c8c8c", "#8b4513", "Lato", "rgba(255,255,255,0.5)"),
                theme!("cream", "Cream", "linear-gradient(to right, #f2994a, #f2c94c)", "#4d3b00", "#806000", "#fff", "Poppins", "rgba(255,255,255,0.4)"),
                theme!("snow", "Snow", "linear-gradient(to top, #e6e9f0 0%, #eef1f5 100%)", "#2c3e50", "#95a5a6", "#34495e", "Nunito", "#fff"),
                theme!("frost", "Frost", "linear-gradient(135deg, #e0eafc, #cfdef3)", "#304352", "#7f8c8d", "#2980b9", "Inter", "rgba(255,255,255,0.7)"),
                theme!("cloud", "Cloud", "linear-gradient(to top, #accbee 0%, #e7f0fd 100%)", "#2b5876", "#5e7d91", "#1e3c72", "Quicksand", "rgba(255,255,255,0.8)"),
            ],
        ),
        (
            "Professional",
            vec![
                theme!("corporate", "Corporate", "linear-gradient(135deg, #1e3a8a 0%, #172554 100%)", "#ffffff", "#bfdbfe", "#60a5fa", "Inter", "rgba(255,255,255,0.05)"),
                theme!("blue-steel", "Blue Steel", "linear-gradient(135deg, #2c3e50, #3498db)", "#ecf0f1", "#bdc3c7", "#e74c3c", "Inter", "rgba(0,0,0,0.2)"),
                theme!("executive", "Executive", "linear-gradient(135deg, #2b5876, #4e4376)", "#ffffff", "#dcdcdc", "#f39c12", "Playfair Display", "rgba(255,255,255,0.1)"),
                theme!("finance", "Finance", "linear-gradient(135deg, #134e5e, #71b280)", "#ffffff", "#e0e0e0", "#a8ff78", "Inter", "rgba(0,0,0,0.2)"),
                theme!("slate", "Slate", "#2f3542", "#dfe4ea", "#a4b0be", "#ff4757", "Roboto", "rgba(0,0,0,0.2)"),
                theme!("law", "Law Firm", "linear-gradient(to right, #243949 0%, #517fa4 100%)", "#f1f2f6", "#ced6e0", "#ffa502", "Merriweather", "rgba(255,255,255,0.1)"),
                theme!("medical", "Medical", "linear-gradient(to right, #e0eafc, #cfdef3)", "#2c3e50", "#7f8c8d", "#e74c3c", "Open Sans", "rgba(255,255,255,0.9)"),
                theme!("startup", "Startup", "linear-gradient(to right, #6a11cb 0%, #2575fc 100%)", "#ffffff", "#e0c3fc", "#00d2ff", "Poppins", "rgba(255,255,255,0.1)"),
                theme!("industrial", "Industrial", "linear-gradient(to right, #434343 0%, #black 100%)", "#d1d8e0", "#778ca3", "#f7b731", "Oswald", "rgba(255,255,255,0.05)"),
                theme!("architect", "Architect", "#353b48", "#f5f6fa", "#dcdde1", "#44bd32", "Lato", "rgba(0,0,0,0.3)"),
            ],
        ),
        (
            "Vibrant & Creative",
            vec![
                theme!("sunset", "Sunset", "linear-gradient(135deg, #4c0519 0%, #7c2d12 100%)", "#fff1f2", "#fda4af", "#f43f5e", "Playfair Display", "rgba(255,255,255,0.1)"),
                theme!("berry", "Berry", "linear-gradient(135deg, #831843 0%, #500724 100%)", "#fce7f3", "#fbcfe8", "#ec4899", "Inter", "rgba(255,255,255,0.08)"),
                theme!("mint", "Fresh Mint", "linear-gradient(135deg, #f0fdf4 0%, #dcfce7 100%)", "#14532d", "#166534", "#22c55e", "Inter", "rgba(255,255,255,0.6)"),
                theme!("lava", "Magma", "linear-gradient(135deg, #450a0a 0%, #7f1d1d 100%)", "#fef2f2", "#fca5a5", "#ef4444", "Inter", "rgba(0,0,0,0.3)"),
                theme!("ocean", "Ocean", "linear-gradient(to top, #30cfd0 0%, #330867 100%)", "#ffffff", "#a0e6ff", "#00ffff", "Inter", "rgba(255,255,255,0.1)"),
                theme!("coral", "Coral", "linear-gradient(to right, #ff9966, #ff5e62)", "#fff", "#ffe0d0", "#ffcccb", "Poppins", "rgba(255,255,255,0.2)"),
                theme!("candy", "Candy", "linear-gradient(120deg, #f093fb 0%, #f5576c 100%)", "#fff", "#ffe4e1", "#fffacd", "Nunito", "rgba(255,255,255,0.2)"),
                theme!("forest", "Forest", "linear-gradient(135deg, #134e5e, #71b280)", "#f0fff4", "#c6f6d5", "#9ae6b4", "Montserrat", "rgba(0,0,0,0.2)"),
                theme!("flamingo", "Flamingo", "linear-gradient(to right, #fe8c00, #f83600)", "#fff", "#ffe0b2", "#ffccbc", "Lato", "rgba(255,255,255,0.2)"),
                theme!("electric", "Electric", "linear-gradient(to right, #4facfe 0%, #00f2fe 100%)", "#002f4b", "#004e92", "#fff", "Raleway", "rgba(255,255,255,0.5)"),
            ],
        ),
        (
            "Retro & Vintage",
            vec![
                theme!("retro", "Retro 80s", "linear-gradient(to right, #ff00cc, #333399)", "#00ff00", "#ffff00", "#ff0099", "Oswald", "rgba(0,0,0,0.5)"),
                theme!("vintage", "Vintage", "#f4e4c1", "#5d4037", "#8d6e63", "#d84315", "Merriweather", "rgba(255,255,255,0.5)"),
                theme!("sepia", "Sepia", "#704214", "#eaddcf", "#d2b48c", "#ffdead", "Playfair Display", "rgba(0,0,0,0.3)"),
                theme!("pastel", "Pastel Dream", "linear-gradient(to right, #ffecd2 0%, #fcb69f 100%)", "#6d6d6d", "#9e9e9e", "#ff6b6b", "Nunito", "rgba(255,255,255,0.6)"),
                theme!("coffee", "Coffee House", "linear-gradient(to right, #3e2b25, #6f4e37)", "#d7ccc8", "#a1887f", "#8d6e63", "Lato", "rgba(255,255,255,0.05)"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_theme_parses() {
        let expected: usize = builtin_defs().iter().map(|(_, defs)| defs.len()).sum();
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.themes().count(), expected);
        assert_eq!(expected, 45);
        assert_eq!(catalog.categories().len(), 5);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#fff").unwrap(), Color32::WHITE);
        assert_eq!(
            parse_color("#3b82f6").unwrap(),
            Color32::from_rgb(0x3b, 0x82, 0xf6)
        );
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#zzzzzz").is_err());
    }

    #[test]
    fn test_parse_rgba() {
        let c = parse_color("rgba(255,255,255,0.5)").unwrap();
        assert_eq!(c.to_srgba_unmultiplied()[3], 128);
        assert_eq!(
            parse_color("rgb(10, 20, 30)").unwrap(),
            Color32::from_rgb(10, 20, 30)
        );
        assert!(parse_color("rgba(1,2)").is_err());
    }

    #[test]
    fn test_parse_linear_gradient() {
        let bg = parse_background("linear-gradient(to right, #000000 0%, #ffffff 100%)").unwrap();
        match &bg {
            Background::Linear { angle, stops } => {
                assert_eq!(*angle, 90.0);
                assert_eq!(stops.len(), 2);
            }
            other => panic!("unexpected background {other:?}"),
        }
        assert_eq!(bg.sample(0.0, 0.5), Color32::BLACK);
        assert_eq!(bg.sample(1.0, 0.5), Color32::WHITE);
    }

    #[test]
    fn test_stops_without_positions_spread_evenly() {
        let bg = parse_background("linear-gradient(135deg, #0f0c29, #302b63, #24243e)").unwrap();
        let Background::Linear { stops, .. } = bg else {
            panic!("expected linear gradient");
        };
        let at: Vec<f32> = stops.iter().map(|s| s.at).collect();
        assert_eq!(at, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_radial_skips_shape() {
        let bg = parse_background("radial-gradient(circle, #333333, #000000)").unwrap();
        assert_eq!(bg.sample(0.5, 0.5), Color32::from_rgb(0x33, 0x33, 0x33));
        assert_eq!(bg.sample(0.0, 0.0), Color32::BLACK);
    }

    #[test]
    fn test_invalid_background() {
        assert!(parse_background("linear-gradient(90deg)").is_err());
        assert!(parse_background("plaid").is_err());
    }

    #[test]
    fn test_custom_themes() {
        let good = ThemeDef {
            id: "brand".into(),
            name: "Brand".into(),
            background: "#101820".into(),
            text_primary: "#ffffff".into(),
            text_secondary: "#cccccc".into(),
            accent: "#f2aa4c".into(),
            font_family: "Inter".into(),
            card_background: "rgba(255,255,255,0.05)".into(),
        };
        let bad = ThemeDef {
            id: "broken".into(),
            accent: "not-a-color".into(),
            ..good.clone()
        };
        let catalog = ThemeCatalog::with_custom(&[good, bad]);
        assert_eq!(catalog.categories()[0].name, "Custom");
        assert!(catalog.find("brand").is_some());
        assert!(catalog.find("broken").is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.resolve("does-not-exist").id, DEFAULT_THEME_ID);
        assert_eq!(catalog.resolve("paper").name, "Paper");
    }
}
