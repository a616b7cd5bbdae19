//! Sprites and the score font, embedded in the binary as text art and
//! decoded once at startup into an [`AssetBundle`].
//!
//! Sprite format: a `WIDTHxHEIGHT` header giving the logical size used for
//! collisions, then one line per terminal row of art.  Font format: a `[c]`
//! line naming each glyph, followed by its rows.  In both, `.` is a
//! transparent cell.

use std::collections::HashMap;

use thiserror::Error;

use crate::entities::{AlienKind, Metrics, Size};

pub const SHIP: &str = "ship";
pub const ALIEN_1: &str = "alien_1";
pub const ALIEN_2: &str = "alien_2";
pub const ALIEN_3: &str = "alien_3";
pub const SCORE_FONT: &str = "score_font";

const TRANSPARENT: char = '.';
const FONT_INK: char = '#';
const FONT_FILL: char = '█';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset `{name}` is not available")]
    Missing { name: String },
    #[error("asset `{name}`: bad size header `{line}` (expected WIDTHxHEIGHT)")]
    BadHeader { name: String, line: String },
    #[error("asset `{name}` has no art")]
    EmptyArt { name: String },
    #[error("font `{name}`: glyph `{glyph}` is malformed")]
    MalformedGlyph { name: String, glyph: char },
    #[error("font `{name}` has no glyph for `{glyph}`")]
    MissingGlyph { name: String, glyph: char },
}

/// Look up the raw text of a built-in asset by logical name.
pub fn embedded_source(name: &str) -> Option<&'static str> {
    match name {
        SHIP => Some(include_str!("../assets/ship.txt")),
        ALIEN_1 => Some(include_str!("../assets/alien_1.txt")),
        ALIEN_2 => Some(include_str!("../assets/alien_2.txt")),
        ALIEN_3 => Some(include_str!("../assets/alien_3.txt")),
        SCORE_FONT => Some(include_str!("../assets/score_font.txt")),
        _ => None,
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Logical size in screen units.
    pub size: Size,
    /// Terminal rows, all padded to the same width.  Transparent cells are spaces.
    pub rows: Vec<String>,
}

impl Sprite {
    pub fn decode(name: &str, source: &str) -> Result<Self, AssetError> {
        let mut lines = source.lines().map(str::trim_end);

        let header = lines.next().unwrap_or_default();
        let size = parse_size(header).ok_or_else(|| AssetError::BadHeader {
            name: name.to_string(),
            line: header.to_string(),
        })?;

        let art: Vec<String> = lines
            .filter(|l| !l.is_empty())
            .map(|l| l.replace(TRANSPARENT, " "))
            .collect();
        if art.is_empty() {
            return Err(AssetError::EmptyArt {
                name: name.to_string(),
            });
        }

        let width = art.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let rows = art
            .into_iter()
            .map(|r| {
                let pad = width - r.chars().count();
                r + &" ".repeat(pad)
            })
            .collect();

        Ok(Self { size, rows })
    }

    /// Width of the art in terminal cells.
    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }
}

fn parse_size(header: &str) -> Option<Size> {
    let (w, h) = header.trim().split_once('x')?;
    let w: f32 = w.trim().parse().ok()?;
    let h: f32 = h.trim().parse().ok()?;
    (w > 0.0 && h > 0.0).then(|| Size::new(w, h))
}

// ── Font ──────────────────────────────────────────────────────────────────────

/// A fixed-height block font.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub height: usize,
    glyphs: HashMap<char, Vec<String>>,
}

impl Font {
    pub fn decode(name: &str, source: &str) -> Result<Self, AssetError> {
        let mut glyphs: HashMap<char, Vec<String>> = HashMap::new();
        let mut current: Option<char> = None;

        for line in source.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
            if let Some(glyph) = parse_glyph_label(line) {
                current = Some(glyph);
                glyphs.entry(glyph).or_default();
                continue;
            }
            let glyph = current.ok_or_else(|| AssetError::BadHeader {
                name: name.to_string(),
                line: line.to_string(),
            })?;
            let row = line.replace(TRANSPARENT, " ").replace(FONT_INK, &FONT_FILL.to_string());
            glyphs.entry(glyph).or_default().push(row);
        }

        if glyphs.is_empty() {
            return Err(AssetError::EmptyArt {
                name: name.to_string(),
            });
        }

        // Every glyph must be a full rectangle of the same height.
        let height = glyphs.values().map(Vec::len).max().unwrap_or(0);
        for (&glyph, rows) in &glyphs {
            let width = rows.first().map_or(0, |r| r.chars().count());
            let ragged = rows.iter().any(|r| r.chars().count() != width);
            if rows.len() != height || width == 0 || ragged {
                return Err(AssetError::MalformedGlyph {
                    name: name.to_string(),
                    glyph,
                });
            }
        }

        for digit in '0'..='9' {
            if !glyphs.contains_key(&digit) {
                return Err(AssetError::MissingGlyph {
                    name: name.to_string(),
                    glyph: digit,
                });
            }
        }

        Ok(Self { height, glyphs })
    }

    /// Lay `text` out as `height` rows, one blank column between glyphs.
    /// Characters without a glyph are skipped.
    pub fn render(&self, text: &str) -> Vec<String> {
        let mut rows = vec![String::new(); self.height];
        for glyph in text.chars().filter_map(|c| self.glyphs.get(&c)) {
            for (row, part) in rows.iter_mut().zip(glyph) {
                if !row.is_empty() {
                    row.push(' ');
                }
                row.push_str(part);
            }
        }
        rows
    }
}

fn parse_glyph_label(line: &str) -> Option<char> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// ── Bundle ────────────────────────────────────────────────────────────────────

/// Every decoded asset the game needs.  Built once and handed to both the
/// simulation (as [`Metrics`]) and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetBundle {
    pub ship: Sprite,
    /// Indexed by `AlienKind::index`.
    pub aliens: [Sprite; 3],
    pub font: Font,
}

impl AssetBundle {
    /// Decode the assets compiled into the binary.
    pub fn embedded() -> Result<Self, AssetError> {
        Self::load(embedded_source)
    }

    /// Decode every asset through `lookup`.  The first missing or malformed
    /// asset aborts the load.
    pub fn load<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, AssetError> {
        let fetch = |name: &str| {
            lookup(name).ok_or_else(|| AssetError::Missing {
                name: name.to_string(),
            })
        };

        Ok(Self {
            ship: Sprite::decode(SHIP, fetch(SHIP)?)?,
            aliens: [
                Sprite::decode(ALIEN_1, fetch(ALIEN_1)?)?,
                Sprite::decode(ALIEN_2, fetch(ALIEN_2)?)?,
                Sprite::decode(ALIEN_3, fetch(ALIEN_3)?)?,
            ],
            font: Font::decode(SCORE_FONT, fetch(SCORE_FONT)?)?,
        })
    }

    pub fn alien(&self, kind: AlienKind) -> &Sprite {
        &self.aliens[kind.index()]
    }

    pub fn metrics(&self) -> Metrics {
        Metrics {
            ship: self.ship.size,
            aliens: [
                self.aliens[0].size,
                self.aliens[1].size,
                self.aliens[2].size,
            ],
        }
    }
}
