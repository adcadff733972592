//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the dashboard row, the framed card grid, the victory
//! line (once completed) and a key help line.

use crate::core::{format_time, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{grid_columns, FaceValue, GameStatus, Position};

/// Terminal columns per card.
pub const CARD_W: u16 = 7;
/// Terminal rows per card.
pub const CARD_H: u16 = 3;
/// Blank cells between cards.
pub const CARD_GAP: u16 = 1;

const GLYPHS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456";

const PALETTE: [Rgb; 8] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

const TABLE_BG: Rgb = Rgb::new(30, 30, 40);

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

/// Letter shown on a face-up card.
pub fn face_glyph(face_value: FaceValue) -> char {
    face_value
        .checked_sub(1)
        .and_then(|i| GLYPHS.get(i as usize))
        .map(|&b| b as char)
        .unwrap_or('?')
}

fn face_color(face_value: FaceValue) -> Rgb {
    PALETTE[face_value as usize % PALETTE.len()]
}

/// Where everything lands for a given deck size and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub rows: u16,
    /// Top-left corner of the grid frame.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub dashboard_y: u16,
    pub message_y: u16,
    pub help_y: u16,
}

impl Layout {
    pub fn new(card_count: usize, viewport: Viewport) -> Self {
        let columns = grid_columns(card_count) as u16;
        let rows = card_count.div_ceil(columns as usize) as u16;

        let grid_w = (columns * CARD_W + columns.saturating_sub(1) * CARD_GAP).max(1);
        let grid_h = (rows * CARD_H + rows.saturating_sub(1) * CARD_GAP).max(1);
        // Border plus one cell of padding on each side.
        let frame_w = grid_w + 4;
        let frame_h = grid_h + 4;
        // Dashboard, spacer, frame, victory line, help line.
        let total_h = 2 + frame_h + 2;

        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let dashboard_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = dashboard_y + 2;

        Self {
            columns,
            rows,
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            dashboard_y,
            message_y: frame_y + frame_h,
            help_y: frame_y + frame_h + 1,
        }
    }

    /// Top-left terminal cell of the card at `position`.
    pub fn card_origin(&self, position: Position) -> (u16, u16) {
        let col = (position % self.columns as usize) as u16;
        let row = (position / self.columns as usize) as u16;
        (
            self.frame_x + 2 + col * (CARD_W + CARD_GAP),
            self.frame_y + 2 + row * (CARD_H + CARD_GAP),
        )
    }
}

/// A lightweight terminal renderer for the memory game.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `cursor` highlights the card a keyboard player is on.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = Layout::new(snap.deck.len(), viewport);

        self.draw_dashboard(fb, snap, &layout);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            layout.frame_w.saturating_sub(2),
            layout.frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(TABLE_BG, TABLE_BG),
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for card in &snap.deck {
            self.draw_card(fb, snap, &layout, card.position, cursor == Some(card.position));
        }

        match snap.status {
            GameStatus::Idle => self.draw_overlay_text(fb, &layout, "PRESS P TO START"),
            GameStatus::Paused => self.draw_overlay_text(fb, &layout, "PAUSED"),
            GameStatus::Completed => {
                let line = victory_message(snap.moves, snap.elapsed_seconds);
                let style = CellStyle::new(Rgb::new(120, 230, 120), Rgb::new(0, 0, 0)).bold();
                fb.put_str_centered(0, viewport.width, layout.message_y, &line, style);
            }
            GameStatus::Playing => {}
        }

        let help = help_line(snap.status);
        let style = CellStyle::default().dim();
        fb.put_str_centered(0, viewport.width, layout.help_y, &help, style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_dashboard(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let label = CellStyle::default().bold();
        let line = format!(
            "Time: {}   {} moves   Score: {}",
            format_time(snap.elapsed_seconds),
            snap.moves,
            snap.score
        );
        fb.put_str_centered(
            layout.frame_x,
            layout.frame_w,
            layout.dashboard_y,
            &line,
            label,
        );
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        layout: &Layout,
        position: Position,
        selected: bool,
    ) {
        let Some(card) = snap.card(position) else {
            return;
        };
        let (x, y) = layout.card_origin(position);

        let matched = snap.is_matched(position);
        let face_up = matched || snap.is_pending(position);

        let edge = if selected {
            CellStyle::new(Rgb::new(255, 255, 255), TABLE_BG).bold()
        } else if matched {
            CellStyle::new(Rgb::new(90, 160, 90), TABLE_BG).dim()
        } else {
            CellStyle::new(Rgb::new(140, 140, 160), TABLE_BG)
        };
        fb.draw_box(x, y, CARD_W, CARD_H, edge);

        let inner_x = x + 1;
        let inner_w = CARD_W - 2;
        let mid_y = y + 1;

        if face_up {
            let mut style = CellStyle::new(face_color(card.face_value), TABLE_BG).bold();
            if matched {
                style = CellStyle { bold: false, ..style }.dim();
            }
            fb.fill_rect(inner_x, mid_y, inner_w, 1, ' ', style);
            fb.put_char(inner_x + inner_w / 2, mid_y, face_glyph(card.face_value), style);
        } else {
            let back = CellStyle::new(Rgb::new(90, 90, 110), TABLE_BG);
            fb.fill_rect(inner_x, mid_y, inner_w, 1, '▒', back);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.frame_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let padded = format!(" {} ", text);
        fb.put_str_centered(layout.frame_x, layout.frame_w, mid_y, &padded, style);
    }
}

/// Shown once every pair is matched.
pub fn victory_message(moves: u32, elapsed_seconds: u32) -> String {
    format!(
        "Congratulations! You won in {} moves! You took {}!",
        moves,
        format_time(elapsed_seconds)
    )
}

/// Key help; the start/pause label and restart entry follow the status.
pub fn help_line(status: GameStatus) -> String {
    let toggle = if status == GameStatus::Playing {
        "[p] Pause"
    } else {
        "[p] Start"
    };

    let mut parts = vec!["[arrows] Move", "[space] Flip", toggle];
    if matches!(status, GameStatus::Playing | GameStatus::Paused) {
        parts.push("[r] Restart");
    }
    parts.push("[q] Quit");
    parts.join("  ")
}
