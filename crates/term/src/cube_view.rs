//! CubeView: maps a session snapshot into a terminal framebuffer.
//!
//! The cube is shown from the current facing as a 3x3 grid of tiles. Each tile
//! is one column of cells running away from the camera and shows its three
//! depth slots as dots, nearest on the left. This module is pure (no I/O).

use crate::core::{MarkerSnapshot, SessionSnapshot};
use crate::engine::Facing;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PALETTE, PALETTE_SIZE};

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

/// Where the pickable cube area landed, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeLayout {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Host state that is not part of the session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    pub facing: Facing,
    pub status: Option<&'a str>,
}

const BG: Rgb = Rgb::new(0, 0, 0);
const TILE_BG: [Rgb; 2] = [Rgb::new(28, 28, 38), Rgb::new(38, 38, 52)];
const DEPTH_SHADE: [u8; 3] = [100, 70, 45];
const GAUGE_W: u16 = 12;

pub struct CubeView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for CubeView {
    fn default() -> Self {
        // Wide tiles make up for the usual glyph aspect ratio.
        Self {
            tile_w: 10,
            tile_h: 4,
        }
    }
}

impl CubeView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(7),
            tile_h: tile_h.max(1),
        }
    }

    pub fn layout(&self, viewport: Viewport) -> CubeLayout {
        let width = self.tile_w * 3;
        let height = self.tile_h * 3;
        let frame_w = width + 2;
        let frame_h = height + 2;
        CubeLayout {
            x: viewport.width.saturating_sub(frame_w) / 2 + 1,
            y: viewport.height.saturating_sub(frame_h) / 2 + 1,
            width,
            height,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), BG).into_cell(' '));

        let cube = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BG);
        draw_border(
            fb,
            cube.x.saturating_sub(1),
            cube.y.saturating_sub(1),
            cube.width + 2,
            cube.height + 2,
            border,
        );

        let title = CellStyle::new(Rgb::new(160, 160, 170), BG);
        fb.put_str(cube.x, cube.y.saturating_sub(1), hud.facing.as_str(), title);

        for row in 0..3u16 {
            for col in 0..3u16 {
                let u = col as i8 - 1;
                let v = 1 - row as i8;
                if let Some(column) = hud.facing.column(u, v) {
                    let slots = column.map(|i| snap.cells[i]);
                    self.draw_tile(fb, &cube, col, row, &slots);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, &cube);

        if let Some(text) = hud.status {
            let text_w = text.chars().count() as u16;
            let x = cube.x.saturating_add(cube.width.saturating_sub(text_w) / 2);
            let y = cube.y.saturating_add(cube.height / 2);
            let style = CellStyle::new(Rgb::new(255, 255, 255), BG).bold();
            fb.fill_rect(x.saturating_sub(1), y, text_w + 2, 1, ' ', style);
            fb.put_str(x, y, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        cube: &CubeLayout,
        col: u16,
        row: u16,
        slots: &[Option<MarkerSnapshot>; 3],
    ) {
        let bg = TILE_BG[usize::from((col + row) % 2)];
        let x0 = cube.x + col * self.tile_w;
        let y0 = cube.y + row * self.tile_h;
        fb.fill_rect(x0, y0, self.tile_w, self.tile_h, ' ', CellStyle::new(bg, bg));

        let mid_y = y0 + self.tile_h / 2;
        let first_x = x0 + (self.tile_w - 5) / 2;
        for (depth, slot) in slots.iter().enumerate() {
            let x = first_x + depth as u16 * 2;
            let (ch, style) = match slot {
                Some(m) if m.removing => ('✸', CellStyle::new(Rgb::new(255, 255, 255), bg).bold()),
                Some(m) => {
                    let fg = marker_rgb(m.color).shade(DEPTH_SHADE[depth]);
                    let style = CellStyle::new(fg, bg);
                    ('●', if depth == 0 { style.bold() } else { style })
                }
                None => ('·', CellStyle::new(Rgb::new(90, 90, 100), bg).dim()),
            };
            fb.put_char(x, mid_y, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        cube: &CubeLayout,
    ) {
        let panel_x = cube.x.saturating_add(cube.width).saturating_add(3);
        if panel_x.saturating_add(GAUGE_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BG);
        let hint = value.dim();

        let mut y = cube.y.saturating_sub(1);
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "BEST", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.highscore, value);
        y += 2;

        fb.put_str(panel_x, y, "BOOST", label);
        y += 1;
        let x = fb.put_str(panel_x, y, "x", value);
        fb.put_u64(x, y, u64::from(snap.booster.multiplier), value.bold());
        y += 1;
        let filled = (u32::from(snap.booster.degrees) * u32::from(GAUGE_W) / 360) as u16;
        let gauge = CellStyle::new(Rgb::new(255, 204, 0), BG);
        for i in 0..GAUGE_W {
            let ch = if i < filled { '█' } else { '░' };
            fb.put_char(panel_x + i, y, ch, if i < filled { gauge } else { hint });
        }
        y += 1;
        fb.put_str(panel_x, y, snap.booster.phase.as_str(), hint);
        y += 2;

        fb.put_str(panel_x, y, "COLORS", label);
        y += 1;
        for c in 0..snap.color_count {
            fb.put_char(panel_x + u16::from(c) * 2, y, '●', CellStyle::new(marker_rgb(c), BG));
        }
        y += 2;

        fb.put_str(panel_x, y, "SPAWN", label);
        y += 1;
        let x = fb.put_u64(panel_x, y, u64::from(snap.spawn_rate_ms), value);
        fb.put_str(x, y, "ms", hint);
        y += 2;

        if y < viewport.height {
            fb.put_str(panel_x, y, "tab view  q quit", hint);
        }
    }
}

fn marker_rgb(color: u8) -> Rgb {
    Rgb::from_hex(PALETTE[usize::from(color % PALETTE_SIZE)])
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MarkerId;

    #[test]
    fn layout_is_centered() {
        let view = CubeView::default();
        let l = view.layout(Viewport::new(80, 24));
        assert_eq!((l.width, l.height), (30, 12));
        assert_eq!(l.x, (80 - 32) / 2 + 1);
        assert_eq!(l.y, (24 - 14) / 2 + 1);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = CubeView::default();
        let snap = SessionSnapshot::default();
        let hud = Hud {
            facing: Facing::Top,
            status: Some("Click to Start"),
        };
        let fb = view.render(&snap, &hud, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn nearest_marker_is_bold_dot() {
        let view = CubeView::default();
        let mut snap = SessionSnapshot::default();
        // Front view, center column, nearest slot is (0, 0, 1).
        let index = 1 + 3 + 2 * 9;
        snap.cells[index] = Some(MarkerSnapshot {
            id: MarkerId(1),
            color: 2,
            removing: false,
        });
        let hud = Hud {
            facing: Facing::Front,
            status: None,
        };
        let vp = Viewport::new(80, 24);
        let fb = view.render(&snap, &hud, vp);

        let l = view.layout(vp);
        let x = l.x + view.tile_w + (view.tile_w - 5) / 2;
        let y = l.y + view.tile_h + view.tile_h / 2;
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, '●');
        assert!(cell.style.bold);
        assert_eq!(cell.style.fg, Rgb::from_hex(PALETTE[2]));
        assert_eq!(fb.get(x + 2, y).unwrap().ch, '·');
    }
}
