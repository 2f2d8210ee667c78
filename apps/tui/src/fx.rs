//! Decorative background effects.
//!
//! Slow drifting fog blobs behind the quiz content. Drawn first each
//! frame so foreground text overwrites whatever cells it needs.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, SetForegroundColor},
};
use rand::Rng;

// Purple and indigo mist, kept dim so text stays readable.
const TINTS: [(u8, u8, u8); 2] = [(110, 60, 180), (70, 85, 210)];

struct FogBlob {
    x: f32,
    y: f32,
    vx: f32,
    radius: f32,
    tint: (u8, u8, u8),
}

pub struct Fog {
    blobs: Vec<FogBlob>,
    width: u16,
    height: u16,
}

impl Fog {
    pub fn new<R: Rng>(width: u16, height: u16, rng: &mut R) -> Self {
        let w = width.max(10) as f32;
        let h = height.max(6) as f32;
        let mut blobs = Vec::new();
        for i in 0..5 {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            blobs.push(FogBlob {
                x: rng.gen_range(0.0..w),
                y: rng.gen_range(0.0..h),
                vx: dir * rng.gen_range(1.5..4.0),
                radius: rng.gen_range(7.0..15.0),
                tint: TINTS[i % TINTS.len()],
            });
        }
        Self {
            blobs,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let w = width.max(10) as f32;
        let h = height.max(6) as f32;
        for blob in &mut self.blobs {
            blob.x = blob.x.clamp(0.0, w);
            blob.y = blob.y.clamp(0.0, h - 1.0);
        }
    }

    /// Drift horizontally, reversing at the edges.
    pub fn update(&mut self, dt: f32) {
        let w = self.width.max(10) as f32;
        for blob in &mut self.blobs {
            blob.x += blob.vx * dt;
            if blob.x < -2.0 {
                blob.x = -2.0;
                blob.vx = blob.vx.abs();
            } else if blob.x > w + 2.0 {
                blob.x = w + 2.0;
                blob.vx = -blob.vx.abs();
            }
        }
    }

    pub fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        for blob in &self.blobs {
            let r = blob.radius;
            let x_min = (blob.x - r).floor().max(0.0) as i32;
            let x_max = (blob.x + r).ceil().min(self.width as f32 - 1.0) as i32;
            // Terminal cells are roughly twice as tall as wide.
            let ry = r * 0.5;
            let y_min = (blob.y - ry).floor().max(0.0) as i32;
            let y_max = (blob.y + ry).ceil().min(self.height as f32 - 1.0) as i32;

            for cy in y_min..=y_max {
                for cx in x_min..=x_max {
                    let dx = (cx as f32 - blob.x) / r;
                    let dy = (cy as f32 - blob.y) / ry;
                    let d2 = dx * dx + dy * dy;
                    if d2 >= 1.0 {
                        continue;
                    }
                    let intensity = (1.0 - d2) * 0.55;
                    if intensity < 0.08 {
                        continue;
                    }
                    let (tr, tg, tb) = blob.tint;
                    let color = Color::Rgb {
                        r: (tr as f32 * intensity) as u8,
                        g: (tg as f32 * intensity) as u8,
                        b: (tb as f32 * intensity) as u8,
                    };
                    let glyph = if intensity > 0.35 { '▒' } else { '░' };
                    queue!(
                        out,
                        cursor::MoveTo(cx as u16, cy as u16),
                        SetForegroundColor(color),
                        Print(glyph)
                    )?;
                }
            }
        }
        Ok(())
    }
}
