//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::AppConfig;
use crate::{GameState, Player, Status};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_move_list: bool,
    /// Outcome of the last resignation, shown until the next move
    message: Option<String>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_config(&config)
    }

    fn with_config(config: &AppConfig) -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_move_list: config.show_move_list,
            message: None,
        }
    }

    fn restart(&mut self) {
        self.state.restart();
        self.message = None;
    }

    fn undo(&mut self) {
        // Undo at the start of the game does nothing
        if let Err(e) = self.state.undo() {
            debug!(error = %e, "undo ignored");
        }
        self.message = None;
    }

    fn jump_to(&mut self, index: usize) {
        if let Err(e) = self.state.jump_to(index) {
            debug!(error = %e, "history jump ignored");
        }
    }

    /// Announce the opponent's win, then start over
    fn resign(&mut self) {
        let resigning = self.state.current_player();
        let winner = self.state.resign();
        self.restart();
        self.message = Some(format!("{winner} wins, {resigning} resigned"));
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Resign").clicked() {
                        self.resign();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_move_list, "Move List");
                });
            });
        });
    }

    /// Render the side panel with status, actions and history
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }

                if self.show_move_list {
                    ui.add_space(10.0);
                    self.render_move_list(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, or how the game ended
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (stone, headline, detail, color) = match self.state.status() {
                Status::Turn(player) => (Some(player), player.name().to_uppercase(), "to move", STATUS_TURN),
                Status::Won(player) => (Some(player), player.name().to_uppercase(), "WINS!", WIN_HIGHLIGHT),
                Status::Draw => (None, "DRAW".to_string(), "board is full", STATUS_DRAW),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                match stone {
                    Some(Player::Black) => {
                        ui.painter().circle_filled(rect.center(), 20.0, BLACK_STONE);
                    }
                    Some(Player::White) => {
                        ui.painter().circle_filled(rect.center(), 20.0, WHITE_STONE);
                    }
                    None => {
                        ui.painter().circle_filled(rect.center() - Vec2::new(8.0, 0.0), 14.0, BLACK_STONE);
                        ui.painter().circle_filled(rect.center() + Vec2::new(8.0, 0.0), 14.0, WHITE_STONE);
                    }
                }

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            let viewing = self.state.current_move_index();
            let latest = self.state.history_len() - 1;
            let caption = if viewing == latest {
                format!("Move #{viewing}")
            } else {
                format!("Viewing move #{viewing} of {latest}")
            };
            ui.label(RichText::new(caption).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let can_undo = self.state.current_move_index() > 0;

            ui.horizontal(|ui| {
                if Self::action_button(ui, "New Game", true) {
                    self.restart();
                }
                if Self::action_button(ui, "↩ Undo", can_undo) {
                    self.undo();
                }
                if Self::action_button(ui, "⚑ Resign", true) {
                    self.resign();
                }
            });
        });
    }

    fn action_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
        let button = egui::Button::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6));
        ui.add_enabled(enabled, button).clicked()
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(RESIGN_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(12.0).strong().color(TEXT_PRIMARY));
            });
    }

    /// One jump button per history entry
    fn render_move_list(&mut self, ui: &mut egui::Ui) {
        let current = self.state.current_move_index();
        let mut jump = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("HISTORY").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ScrollArea::vertical().max_height(ui.available_height()).show(ui, |ui| {
                for index in 0..self.state.history_len() {
                    let label = RichText::new(GameState::move_label(index)).size(12.0);
                    let label = if index == current {
                        label.strong().color(TEXT_PRIMARY).background_color(BUTTON_ACTIVE)
                    } else {
                        label.color(TEXT_SECONDARY)
                    };
                    if ui.selectable_label(index == current, label).clicked() {
                        jump = Some(index);
                    }
                }
            });
        });

        if let Some(index) = jump {
            self.jump_to(index);
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let status = self.state.status();
            let to_move = match status {
                Status::Turn(player) => Some(player),
                Status::Won(_) | Status::Draw => None,
            };
            let winning_line = self.state.winning_line();

            let clicked = self.board_view.show(
                ui,
                self.state.current_snapshot(),
                to_move,
                self.state.last_move(),
                winning_line.as_ref(),
            );

            if let Some(pos) = clicked {
                match self.state.apply_move(pos) {
                    Ok(()) => self.message = None,
                    Err(e) => debug!(error = %e, "click ignored"),
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));

        if undo {
            self.undo();
        }
        if restart {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
