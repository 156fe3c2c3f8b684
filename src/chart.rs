// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Terminal pie chart. Slices run clockwise from 12 o'clock in series order;
//! each one is drawn with its own glyph (and colour, when enabled).

use std::f64::consts::PI;

use colored::{Color, Colorize};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ledger::Slice;
use crate::utils::{align_right, fmt_amount, pretty_table};

pub const MIN_RADIUS: u16 = 2;
pub const MAX_RADIUS: u16 = 40;

const GLYPHS: [char; 10] = ['█', '▓', '▒', '░', '#', '*', '+', 'o', '@', '%'];
const COLORS: [Color; 6] = [
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Red,
];

pub fn glyph_for(idx: usize) -> char {
    GLYPHS[idx % GLYPHS.len()]
}

/// Fraction of the positive total held by each slice. Slices at or below
/// zero get 0. Returns all zeros when nothing is positive.
pub fn shares(series: &[Slice]) -> Vec<f64> {
    let positive = |v: &Decimal| if *v > Decimal::ZERO { *v } else { Decimal::ZERO };
    let total: Decimal = series.iter().map(|s| positive(&s.value)).sum();
    if total.is_zero() {
        return vec![0.0; series.len()];
    }
    series
        .iter()
        .map(|s| (positive(&s.value) / total).to_f64().unwrap_or(0.0))
        .collect()
}

#[derive(Debug, Clone)]
pub struct PieChart {
    radius: u16,
    color: bool,
}

impl PieChart {
    pub fn new(radius: u16, color: bool) -> Self {
        Self {
            radius: radius.clamp(MIN_RADIUS, MAX_RADIUS),
            color,
        }
    }

    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// Index of the slice covering `fraction` of a full turn.
    fn slice_at(bounds: &[(usize, f64)], fraction: f64) -> Option<usize> {
        bounds
            .iter()
            .find(|(_, upper)| fraction < *upper)
            .or_else(|| bounds.last())
            .map(|(idx, _)| *idx)
    }

    /// The disc alone, one string per terminal row. Columns are doubled so
    /// the circle looks round in a typical 2:1 character cell.
    pub fn disc(&self, series: &[Slice]) -> Vec<String> {
        let fractions = shares(series);
        let mut bounds = Vec::new();
        let mut acc = 0.0;
        for (idx, f) in fractions.iter().enumerate() {
            if *f > 0.0 {
                acc += f;
                bounds.push((idx, acc));
            }
        }
        if bounds.is_empty() {
            return Vec::new();
        }

        let r = self.radius as i32;
        let rf = r as f64;
        let limit = rf * rf + rf;
        let mut lines = Vec::with_capacity((2 * r + 1) as usize);
        for y in -r..=r {
            let mut line = String::new();
            for x in -2 * r..=2 * r {
                let dx = x as f64 / 2.0;
                let dy = y as f64;
                if dx * dx + dy * dy > limit {
                    line.push(' ');
                    continue;
                }
                let mut angle = dx.atan2(-dy);
                if angle < 0.0 {
                    angle += 2.0 * PI;
                }
                match Self::slice_at(&bounds, angle / (2.0 * PI)) {
                    Some(idx) => line.push_str(&self.paint(idx, glyph_for(idx))),
                    None => line.push(' '),
                }
            }
            lines.push(line.trim_end().to_string());
        }
        lines
    }

    fn paint(&self, idx: usize, glyph: char) -> String {
        if self.color {
            glyph.to_string().color(COLORS[idx % COLORS.len()]).to_string()
        } else {
            glyph.to_string()
        }
    }

    pub fn legend(&self, series: &[Slice]) -> comfy_table::Table {
        let fractions = shares(series);
        let rows = series
            .iter()
            .zip(fractions)
            .enumerate()
            .map(|(idx, (s, f))| {
                vec![
                    glyph_for(idx).to_string(),
                    s.label.clone(),
                    fmt_amount(&s.value),
                    format!("{:.1}%", f * 100.0),
                ]
            })
            .collect();
        let mut t = pretty_table(&["", "Label", "Value", "Share"], rows);
        align_right(&mut t, &[2, 3]);
        t
    }

    /// Disc followed by the legend, or a short notice when no slice is
    /// positive.
    pub fn render(&self, series: &[Slice]) -> String {
        let disc = self.disc(series);
        if disc.is_empty() {
            return "Nothing to plot".to_string();
        }
        format!("{}\n\n{}", disc.join("\n"), self.legend(series))
    }
}
