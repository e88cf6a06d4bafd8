//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What the board should show besides the stones
pub struct BoardOverlay<'a> {
    pub last_move: Option<Pos>,
    pub winning_line: Option<&'a [Pos]>,
    /// Cells the human may click; `None` while input is disabled
    pub legal_moves: Option<&'a [Pos]>,
}

impl BoardView {
    /// Render the board and return the clicked cell, if it is a legal move
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: BoardOverlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, line);
        }

        let legal_moves = overlay.legal_moves?;
        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = legal_moves.contains(&board_pos);
        self.draw_hover_preview(&painter, board_pos, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Label rows and columns 1-15, the numbering used for typed moves
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for i in 0..BOARD_SIZE {
            let label = (i + 1).to_string();
            let along = BOARD_MARGIN + i as f32 * self.cell_size;

            // Columns, top edge
            let pos = Pos2::new(self.board_rect.min.x + along, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            // Rows, left edge
            let pos = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + along);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for stone in [Stone::Black, Stone::White] {
            if let Some(stones) = board.stones(stone) {
                for pos in stones.iter_ones() {
                    self.draw_stone(painter, pos, stone);
                }
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Ghost White stone under the pointer, red when the cell is not playable
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = if is_valid { hover_white() } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
