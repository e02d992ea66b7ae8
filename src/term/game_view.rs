//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PowerUpKind, Skin, GRID_TILES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// How many leaderboard entries the side panel shows.
pub const LEADERBOARD_LINES: usize = 5;

/// A lightweight terminal renderer for the Snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    skin: Skin,
    /// Rolling hue for the color-cycling skins, advanced each frame.
    hue: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            skin: Skin::Classic,
            hue: 0,
        }
    }
}

impl GameView {
    pub fn new(skin: Skin) -> Self {
        Self {
            skin,
            ..Self::default()
        }
    }

    pub fn skin(&self) -> Skin {
        self.skin
    }

    pub fn cycle_skin(&mut self) {
        self.skin = self.skin.next();
    }

    /// Render the snapshot and leaderboard into a framebuffer.
    pub fn render(
        &mut self,
        snap: &GameSnapshot,
        top_scores: &[u32],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_px_w = (GRID_TILES as u16) * self.cell_w;
        let grid_px_h = (GRID_TILES as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;
        let panel_w: u16 = 22;

        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        self.fill_cell(
            &mut fb,
            start_x,
            start_y,
            snap.food.x as u16,
            snap.food.y as u16,
            self.food_style(),
        );

        // Power-ups.
        for p in &snap.power_ups {
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: power_up_color(p.kind),
                bold: false,
                dim: false,
            };
            self.fill_cell(&mut fb, start_x, start_y, p.pos.x as u16, p.pos.y as u16, style);
        }

        // Snake, head first.
        for (i, seg) in snap.snake.iter().enumerate() {
            let color = if i == 0 {
                // Limegreen head regardless of skin.
                Rgb::new(50, 205, 50)
            } else {
                self.body_color(i)
            };
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: color,
                bold: false,
                dim: false,
            };
            self.fill_cell(&mut fb, start_x, start_y, seg.x as u16, seg.y as u16, style);
        }

        self.draw_panel(&mut fb, start_x + frame_w + 2, start_y, snap, top_scores);

        if snap.game_over {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        self.hue = (self.hue + 2) % 360;
        fb
    }

    fn body_color(&self, index: usize) -> Rgb {
        let i = index as u16;
        match self.skin {
            Skin::Classic => Rgb::new(0, 128, 0),
            Skin::Neon => Rgb::from_hsl((self.hue + i * 10) % 360, 100, 50),
            Skin::Dark => {
                let brightness = 70u16.saturating_sub(i * 2).max(10) as u8;
                Rgb::from_hsl(200, 20, brightness)
            }
            Skin::Rainbow => Rgb::from_hsl((self.hue + i * 20) % 360, 100, 50),
        }
    }

    fn food_style(&self) -> CellStyle {
        let bg = match self.skin {
            Skin::Neon => Rgb::from_hsl(60, 100, 60),
            _ => Rgb::new(255, 215, 0), // gold
        };
        CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg,
            bold: false,
            dim: false,
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cx: u16,
        cy: u16,
        style: CellStyle,
    ) {
        fb.fill_rect(
            start_x + 1 + cx * self.cell_w,
            start_y + 1 + cy * self.cell_h,
            self.cell_w,
            self.cell_h,
            ' ',
            style,
        );
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        for dx in 0..w {
            fb.set(x + dx, y, style.into_cell('─'));
            fb.set(x + dx, y + h - 1, style.into_cell('─'));
        }
        for dy in 0..h {
            fb.set(x, y + dy, style.into_cell('│'));
            fb.set(x + w - 1, y + dy, style.into_cell('│'));
        }
        fb.set(x, y, style.into_cell('┌'));
        fb.set(x + w - 1, y, style.into_cell('┐'));
        fb.set(x, y + h - 1, style.into_cell('└'));
        fb.set(x + w - 1, y + h - 1, style.into_cell('┘'));
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        snap: &GameSnapshot,
        top_scores: &[u32],
    ) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 160),
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(240, 240, 240),
            bold: true,
            ..CellStyle::default()
        };

        fb.print_str(x, y, &format!("Score  {}", snap.score), value);
        fb.print_str(x, y + 1, &format!("Pace   {} ms", snap.tick_interval_ms), label);
        fb.print_str(x, y + 2, &format!("Skin   {}", self.skin.as_str()), label);

        let mut flags_y = y + 3;
        if snap.double_points {
            fb.print_str(x, flags_y, "2x points!", value);
            flags_y += 1;
        }
        if snap.autopilot {
            fb.print_str(x, flags_y, "autopilot", label);
            flags_y += 1;
        }

        let lb_y = flags_y + 1;
        fb.print_str(x, lb_y, "High scores", label);
        for (i, score) in top_scores.iter().take(LEADERBOARD_LINES).enumerate() {
            fb.print_str(
                x,
                lb_y + 1 + i as u16,
                &format!("{}. {}", i + 1, score),
                value,
            );
        }

        let help_y = lb_y + 2 + LEADERBOARD_LINES as u16;
        fb.print_str(x, help_y, "arrows move  p pause", label);
        fb.print_str(x, help_y + 1, "a auto  k skin  r new", label);
        fb.print_str(x, help_y + 2, "c clear  q quit", label);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(120, 20, 20),
            bold: true,
            dim: false,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.print_str(tx, ty, text, style);
    }
}

fn power_up_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::Speed => Rgb::new(30, 60, 255),
        PowerUpKind::Slow => Rgb::new(128, 0, 128),
        PowerUpKind::DoublePoints => Rgb::new(220, 30, 30),
    }
}
