//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::trace;

use super::board_view::BoardView;
use super::theme::*;
use crate::game::{GameMode, GameState, Outcome, Settings};
use crate::Player;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            state: GameState::new(Settings::default()),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::One => "BLACK",
        Player::Two => "WHITE",
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI)").clicked() {
                        self.state.set_mode(GameMode::HumanVsAi);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.state.set_mode(GameMode::TwoHuman);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.request_undo();
                        ui.close_menu();
                    }
                    if ui.button("Restart (N)").clicked() {
                        self.state.request_restart();
                        ui.close_menu();
                    }
                    if ui.button("Reset Scores").clicked() {
                        self.state.reset_scores();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode() {
                        GameMode::HumanVsAi => "You (Black) vs AI",
                        GameMode::TwoHuman => "Two Players - Hotseat",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.outcome().is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_player();
            let stone = if player == Player::One { BLACK_STONE } else { WHITE_STONE };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, stone);

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(player_name(player)).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                        (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_WAITING)
                    } else if self.state.outcome().is_terminal() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        ("To move".to_string(), STATUS_READY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render per-player score tally
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for player in [Player::One, Player::Two] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(player_name(player)).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.state.score(player).to_string())
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }
        });
    }

    /// Render undo/restart actions
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let undo = ui.add_enabled(
                    self.state.can_undo(),
                    egui::Button::new(RichText::new("Undo").size(12.0)).fill(BUTTON_BG),
                );
                if undo.clicked() {
                    self.state.request_undo();
                }

                let restart = ui.add(egui::Button::new(RichText::new("Restart").size(12.0)).fill(BUTTON_BG));
                if restart.clicked() {
                    self.state.request_restart();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the last heuristic decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = self.state.last_ai_result() else {
                ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let line = |text: String| RichText::new(text).size(10.0).color(TEXT_SECONDARY);
            ui.label(line(format!("Priority: {:.1}", f64::from(result.priority) / 10.0)));
            ui.label(line(format!("Offense {} / Defense {}", result.offense, result.defense)));
            ui.label(line(format!("{} tied of {} cells", result.candidates, result.scanned)));
            ui.label(line(format!("{}ms", result.time_ms)));

            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.col) as char;
                let row = crate::BOARD_SIZE as u8 - pos.row;
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {col}{row}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    /// Render result and a new-game button
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let text = match self.state.outcome() {
            Outcome::Won(player) => format!("{} WINS!", player_name(player)),
            Outcome::Draw => "DRAW".to_string(),
            Outcome::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(text).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.add_space(10.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.request_restart();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepting = !self.state.outcome().is_terminal()
                && !self.state.is_ai_pending()
                && !self.state.is_ai_turn();

            let clicked = self.board_view.show(
                ui,
                self.state.board(),
                self.state.current_player(),
                self.state.last_move(),
                self.state.winning_line(),
                accepting,
            );

            if let Some(pos) = clicked {
                if let Err(reason) = self.state.select_cell(pos.row as usize, pos.col as usize) {
                    trace!(%reason, "click ignored");
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.state.request_undo();
        }
        if restart {
            self.state.request_restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Apply the opponent's move once its task has finished
        self.state.poll_ai();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_pending() {
            ctx.request_repaint();
        }
    }
}
