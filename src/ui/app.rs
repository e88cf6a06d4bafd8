//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::eval::EvalFn;
use crate::session::MatchOutcome;
use crate::solver::format_elapsed;
use crate::Stone;

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{MatchSettings, MatchState};
use super::theme::*;

/// Deepest search offered in the settings menu
const MAX_MENU_DEPTH: u8 = 3;

/// Main Gomoku application
pub struct GomokuApp {
    state: MatchState,
    /// Settings for the next match; applied on "New Game"
    pending: MatchSettings,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: MatchSettings) -> Self {
        Self {
            state: MatchState::new(settings),
            pending: settings,
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self) {
        self.state = MatchState::new(self.pending);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.checkbox(&mut self.pending.use_preset, "Preset White moves");
                });

                ui.menu_button("AI", |ui| {
                    ui.label("Evaluation function");
                    ui.radio_value(&mut self.pending.eval, EvalFn::One, "1: count fives");
                    ui.radio_value(&mut self.pending.eval, EvalFn::Two, "2: count chains");
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.pending.max_depth, 0..=MAX_MENU_DEPTH).text("Depth"));
                    ui.label(RichText::new("Applies to the next game").size(10.0).color(TEXT_MUTED));
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings = self.state.settings;
                    let mode = if settings.use_preset { "Preset" } else { "Interactive" };
                    ui.label(format!(
                        "{mode} - eval {} - depth {}",
                        settings.eval, settings.max_depth
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.session.outcome() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Alpha-Beta plays Black").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let to_move = self.state.session.state().to_move;
            let is_black = to_move == Stone::Black;
            let (color_name, accent, stone_color) = if is_black {
                ("BLACK", BLACK_STONE, BLACK_STONE_HIGHLIGHT)
            } else {
                ("WHITE", WHITE_STONE, WHITE_STONE_SHADOW)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, stone_color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.session.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.session.uses_preset() {
                        ("Preset move", TIMER_NORMAL)
                    } else {
                        ("Your turn", TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
            ui.label(
                RichText::new(format!("Match: {:.1}s", self.state.match_time().as_secs_f32()))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("New Game").clicked() {
                self.new_game();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.state.session.last_ai_result() else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?}", result.search_type))
                    .size(11.0)
                    .strong()
                    .color(TIMER_NORMAL),
            );
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {pos}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: MatchOutcome) {
        let time = format_elapsed(self.state.match_time(), false);

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(outcome.to_string()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("Time taken: {time}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                let winning_line = self.state.session.winning_line();
                let overlay = BoardOverlay {
                    last_move: self.state.session.last_move(),
                    winning_line: winning_line.as_deref(),
                    legal_moves: self.state.clickable_moves(),
                };

                let board = self.state.session.state().board;
                if let Some(pos) = self.board_view.show(ui, &board, overlay) {
                    self.state.try_place_stone(pos);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        if self.state.session.is_ai_turn() {
            self.state.start_ai_thinking();
        } else {
            self.state.play_preset_move();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || !self.state.session.is_over() {
            ctx.request_repaint();
        }
    }
}
