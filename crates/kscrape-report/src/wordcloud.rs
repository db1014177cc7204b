//! Title word cloud: tokenization, frequency ranking and spiral layout.

use std::error::Error;
use std::path::Path;
use std::sync::LazyLock;

use plotters::prelude::*;
use regex::Regex;

use crate::charts::FONT_FAMILY;
use crate::dataset::Dataset;
use crate::plan::ReportPlan;
use crate::stats::count_by;

pub const CANVAS: (u32, u32) = (800, 400);
pub const MAX_WORDS: usize = 100;
const MIN_TOKEN_CHARS: usize = 2;
const MIN_FONT: f64 = 12.0;
const MAX_FONT: f64 = 72.0;
const SPIRAL_STEP: f64 = 0.1;
const SPIRAL_GROWTH: f64 = 2.0;
const SPIRAL_TURNS_LIMIT: usize = 20_000;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid token regex"));

const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

/// Lower-cased word tokens of `text` that survive the length and stopword
/// filters.
pub fn tokens<'a>(text: &'a str, plan: &'a ReportPlan) -> impl Iterator<Item = String> + 'a {
    TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(move |t| t.chars().count() >= MIN_TOKEN_CHARS && !plan.is_stopword(t))
}

/// The [`MAX_WORDS`] most frequent title tokens, most frequent first.
#[must_use]
pub fn word_frequencies(data: &Dataset, plan: &ReportPlan) -> Vec<(String, usize)> {
    let all: Vec<String> = data
        .books
        .iter()
        .flat_map(|b| tokens(&b.title, plan))
        .collect();
    let mut counts = count_by(all.iter().map(String::as_str));
    counts.truncate(MAX_WORDS);
    counts
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    /// Top-left corner in canvas pixels.
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub width: f64,
}

impl PlacedWord {
    fn overlaps(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x < self.x + self.width && self.x < x + width && y < self.y + self.size && self.y < y + height
    }
}

/// Rough rendered width: Hangul and other wide glyphs are about one em,
/// narrow Latin glyphs about 0.6 em.
#[must_use]
pub fn estimate_width(text: &str, size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { 0.6 } else { 1.0 })
        .sum::<f64>()
        * size
}

/// Places words along an Archimedean spiral from the canvas centre, the
/// most frequent first. Words that find no free spot are dropped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn layout_words(frequencies: &[(String, usize)], canvas: (u32, u32)) -> Vec<PlacedWord> {
    let Some(peak) = frequencies.iter().map(|(_, n)| *n).max() else {
        return Vec::new();
    };
    let (w, h) = (f64::from(canvas.0), f64::from(canvas.1));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let mut placed: Vec<PlacedWord> = Vec::new();

    for (text, count) in frequencies {
        let size = MIN_FONT + (MAX_FONT - MIN_FONT) * (*count as f64 / peak as f64);
        let width = estimate_width(text, size);
        if width > w || size > h {
            continue;
        }

        let spot = (0..SPIRAL_TURNS_LIMIT).find_map(|step| {
            let t = step as f64 * SPIRAL_STEP;
            let r = SPIRAL_GROWTH * t;
            let x = cx + r * t.cos() - width / 2.0;
            // the canvas is twice as wide as tall
            let y = cy + r * t.sin() / 2.0 - size / 2.0;
            let inside = x >= 0.0 && y >= 0.0 && x + width <= w && y + size <= h;
            (inside && !placed.iter().any(|p| p.overlaps(x, y, width, size))).then_some((x, y))
        });

        if let Some((x, y)) = spot {
            placed.push(PlacedWord {
                text: text.clone(),
                x,
                y,
                size,
                width,
            });
        }
    }
    placed
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn render(data: &Dataset, plan: &ReportPlan, path: &Path) -> Result<(), Box<dyn Error>> {
    let frequencies = word_frequencies(data, plan);
    let words = layout_words(&frequencies, CANVAS);
    if words.is_empty() {
        return Err("no title words left after filtering".into());
    }

    let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
    root.fill(&WHITE)?;
    for (idx, word) in words.iter().enumerate() {
        let color = PALETTE[idx % PALETTE.len()];
        let style = (FONT_FAMILY, word.size).into_font().color(&color);
        root.draw(&Text::new(
            word.text.as_str(),
            (word.x as i32, word.y as i32),
            style,
        ))?;
    }
    root.present()?;
    Ok(())
}
