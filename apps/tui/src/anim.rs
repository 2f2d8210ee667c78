//! Letter-glide animation for the question-to-answer reveal.
//!
//! Logical staging lives in `riddle_core::Transition`; this module adds
//! the wall-clock side: how long each stage holds, where each letter
//! sits on screen, and how a reused letter interpolates from its source
//! cell to its target cell. Identity equality between the before and
//! after renderings is what makes a letter glide instead of cross-fade.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
};
use riddle_core::{Letter, Stage, Transition};

/// Seconds the source text holds before letters start moving.
pub const HOLD_SECS: f32 = 0.5;
/// Seconds the glide takes.
pub const GLIDE_SECS: f32 = 2.0;

const INK: (u8, u8, u8) = (226, 232, 240);
const GLOW: (u8, u8, u8) = (165, 243, 252);
const FADE: (u8, u8, u8) = (100, 106, 120);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpriteKind {
    Reused,
    Fresh,
    Leftover,
}

struct Sprite {
    ch: char,
    from: (f32, f32),
    to: (f32, f32),
    /// Per-letter stagger as a fraction of the glide, in [0, 0.2].
    delay: f32,
    kind: SpriteKind,
}

/// One reveal in progress: a core transition plus a clock.
pub struct RevealAnimation {
    transition: Transition,
    clock: f32,
}

impl RevealAnimation {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            transition: Transition::new(question, answer),
            clock: 0.0,
        }
    }

    /// A reveal that starts already settled, for riddles solved earlier
    /// in the session.
    pub fn settled(question: &str, answer: &str) -> Self {
        let mut transition = Transition::new(question, answer);
        transition.advance();
        transition.advance();
        Self {
            transition,
            clock: HOLD_SECS + GLIDE_SECS,
        }
    }

    /// Advance the clock and fire stage changes when their hold expires.
    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
        match self.transition.stage() {
            Stage::Start if self.clock >= HOLD_SECS => {
                self.transition.advance();
            }
            Stage::Scramble if self.clock >= HOLD_SECS + GLIDE_SECS => {
                self.transition.advance();
            }
            _ => {}
        }
    }

    pub fn is_settled(&self) -> bool {
        self.transition.is_settled()
    }

    fn glide_progress(&self) -> f32 {
        ((self.clock - HOLD_SECS) / GLIDE_SECS).clamp(0.0, 1.0)
    }

    fn settled_secs(&self) -> f32 {
        (self.clock - HOLD_SECS - GLIDE_SECS).max(0.0)
    }

    fn sprites(&self, width: u16, row: u16) -> Vec<Sprite> {
        let start = self.transition.start_letters();
        let reconciliation = self.transition.reconciliation();
        let from_pos = layout(start, width, row);
        let to_pos = layout(&reconciliation.letters, width, row);

        let mut sprites = Vec::with_capacity(reconciliation.len() + reconciliation.leftover.len());
        for (j, letter) in reconciliation.letters.iter().enumerate() {
            let (from, kind) = match letter.origin {
                Some(i) => (from_pos[i], SpriteKind::Reused),
                None => (to_pos[j], SpriteKind::Fresh),
            };
            sprites.push(Sprite {
                ch: letter.ch,
                from,
                to: to_pos[j],
                delay: stagger(j),
                kind,
            });
        }
        for &i in &reconciliation.leftover {
            sprites.push(Sprite {
                ch: start[i].ch,
                from: from_pos[i],
                to: from_pos[i],
                delay: stagger(i),
                kind: SpriteKind::Leftover,
            });
        }
        sprites
    }

    pub fn draw(&self, out: &mut impl Write, width: u16, row: u16) -> io::Result<()> {
        match self.transition.stage() {
            Stage::Start => draw_letters(out, self.transition.start_letters(), width, row, INK),
            Stage::Scramble => self.draw_glide(out, width, row),
            Stage::Settled => self.draw_settled(out, width, row),
        }
    }

    fn draw_glide(&self, out: &mut impl Write, width: u16, row: u16) -> io::Result<()> {
        let t = self.glide_progress();
        for sprite in self.sprites(width, row) {
            // Staggered letters start a beat later but all land by t = 1.
            let p = smoothstep(((t * 1.25) - sprite.delay).clamp(0.0, 1.0));
            match sprite.kind {
                SpriteKind::Reused => {
                    let x = lerp(sprite.from.0, sprite.to.0, p);
                    let y = lerp(sprite.from.1, sprite.to.1, p);
                    put(out, x, y, width, sprite.ch, mix(INK, GLOW, p))?;
                }
                SpriteKind::Fresh => {
                    if p > 0.4 {
                        let fade_in = (p - 0.4) / 0.6;
                        put(out, sprite.to.0, sprite.to.1, width, sprite.ch, scale(GLOW, fade_in))?;
                    }
                }
                SpriteKind::Leftover => {
                    if p < 0.7 {
                        put(out, sprite.from.0, sprite.from.1, width, sprite.ch, scale(FADE, 1.0 - p))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_settled(&self, out: &mut impl Write, width: u16, row: u16) -> io::Result<()> {
        let letters = &self.transition.reconciliation().letters;
        let positions = layout(letters, width, row);
        let pulse_clock = self.settled_secs();
        queue!(out, SetAttribute(Attribute::Bold))?;
        for (j, (letter, pos)) in letters.iter().zip(&positions).enumerate() {
            let pulse = 0.82 + 0.18 * (pulse_clock * 4.0 + j as f32 * 0.7).sin();
            put(out, pos.0, pos.1, width, letter.ch, scale(GLOW, pulse))?;
        }
        queue!(out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Draw a plain, unanimated letter row (the unsolved question).
pub fn draw_static_text(
    out: &mut impl Write,
    text: &str,
    width: u16,
    row: u16,
) -> io::Result<()> {
    draw_letters(out, &riddle_core::source_letters(text), width, row, INK)
}

/// Cell positions for a letter row: centered, one blank column between
/// letters for the wide-tracking look.
fn layout(letters: &[Letter], width: u16, row: u16) -> Vec<(f32, f32)> {
    let n = letters.len();
    let span = if n == 0 { 0 } else { 2 * n - 1 };
    let x0 = (width.saturating_sub(span as u16) / 2) as f32;
    (0..n).map(|i| (x0 + (2 * i) as f32, row as f32)).collect()
}

fn stagger(i: usize) -> f32 {
    ((i * 7) % 10) as f32 * 0.02
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn mix(a: (u8, u8, u8), b: (u8, u8, u8), t: f32) -> Color {
    Color::Rgb {
        r: lerp(a.0 as f32, b.0 as f32, t) as u8,
        g: lerp(a.1 as f32, b.1 as f32, t) as u8,
        b: lerp(a.2 as f32, b.2 as f32, t) as u8,
    }
}

fn scale(tint: (u8, u8, u8), factor: f32) -> Color {
    let f = factor.clamp(0.0, 1.0);
    Color::Rgb {
        r: (tint.0 as f32 * f) as u8,
        g: (tint.1 as f32 * f) as u8,
        b: (tint.2 as f32 * f) as u8,
    }
}

fn draw_letters(
    out: &mut impl Write,
    letters: &[Letter],
    width: u16,
    row: u16,
    tint: (u8, u8, u8),
) -> io::Result<()> {
    let positions = layout(letters, width, row);
    for (letter, pos) in letters.iter().zip(&positions) {
        put(out, pos.0, pos.1, width, letter.ch, scale(tint, 1.0))?;
    }
    Ok(())
}

fn put(
    out: &mut impl Write,
    x: f32,
    y: f32,
    width: u16,
    ch: char,
    color: Color,
) -> io::Result<()> {
    if ch == ' ' {
        return Ok(());
    }
    let cx = x.round();
    let cy = y.round();
    if cx < 0.0 || cy < 0.0 || cx >= width as f32 {
        return Ok(());
    }
    queue!(
        out,
        cursor::MoveTo(cx as u16, cy as u16),
        SetForegroundColor(color),
        Print(ch)
    )
}
