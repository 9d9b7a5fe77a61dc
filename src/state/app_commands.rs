//! Command execution and input handling for the lazyflow application.
//!
//! This module handles keyboard and mouse input, mapping them to commands,
//! and executing those commands to update application state.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{App, Focus, GraphView, PopupState};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::RECORD_HEIGHT;
use crate::ui::layout::calculate_app_layout;
use crate::widgets::{HitTarget, centered_offset, hit_test};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context based on application state.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::Search(_) => InputContext::SearchInput,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => match self.ui.focus {
                Focus::Graph => InputContext::GraphPanel,
                Focus::List => InputContext::ListPanel,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        if command.is_viewport() {
            self.apply_viewport_command(&command);
            return;
        }

        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Reload => {
                self.reload_wallet();
            }

            // === Popup Control ===
            AppCommand::OpenSearch => {
                self.ui.open_search("");
            }
            AppCommand::Dismiss => {
                self.ui.dismiss_popup();
            }

            // === Panels ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::CopySelection => {
                self.copy_selection();
            }
            AppCommand::OpenInExplorer => {
                self.open_in_browser();
            }

            // === Selection ===
            AppCommand::NextNode => self.with_view(|view| view.cycle_node(true)),
            AppCommand::PreviousNode => self.with_view(|view| view.cycle_node(false)),
            AppCommand::NextEdge => self.with_view(|view| view.cycle_record(true)),
            AppCommand::PreviousEdge => self.with_view(|view| view.cycle_record(false)),
            AppCommand::TapBackground => self.with_view(GraphView::tap_background),

            // === Search Input ===
            AppCommand::TypeChar(c) => {
                self.ui.search_type_char(c);
            }
            AppCommand::Backspace => {
                self.ui.search_backspace();
            }
            AppCommand::SubmitSearch => {
                let query = self.ui.popup_state.as_search().map(str::to_string);
                self.ui.dismiss_popup();
                if let Some(query) = query {
                    self.load_wallet(&query);
                }
            }

            AppCommand::Pan(_)
            | AppCommand::ZoomIn
            | AppCommand::ZoomOut
            | AppCommand::ResetView
            | AppCommand::Noop => {}
        }
    }

    fn apply_viewport_command(&mut self, command: &AppCommand) {
        let Some(view) = self.data.view.as_mut() else {
            return;
        };
        match command {
            AppCommand::Pan(direction) => view.viewport.pan(*direction),
            AppCommand::ZoomIn => view.viewport.zoom_in(),
            AppCommand::ZoomOut => view.viewport.zoom_out(),
            AppCommand::ResetView => view.viewport.reset(),
            _ => {}
        }
    }

    /// Run `f` against the current graph view, if any.
    fn with_view(&mut self, f: impl FnOnce(&mut GraphView)) {
        if let Some(view) = self.data.view.as_mut() {
            f(view);
        }
    }

    // ========================================================================
    // Mouse Input
    // ========================================================================

    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        match &self.ui.popup_state {
            PopupState::Message(_) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.ui.dismiss_popup();
                }
                return;
            }
            PopupState::Search(_) => return,
            PopupState::None => {}
        }

        let layout = calculate_app_layout(self.ui.terminal_area);
        let position = Position::new(mouse.column, mouse.row);
        let in_graph = layout.graph.contains(position);
        let in_list = layout.list.contains(position);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if in_graph {
                    self.ui.set_focus(Focus::Graph);
                    self.handle_graph_click(layout.graph_inner(), position);
                } else if in_list {
                    self.ui.set_focus(Focus::List);
                    self.handle_list_click(layout.list_inner(), position);
                }
            }
            MouseEventKind::ScrollUp => {
                if in_graph {
                    self.execute_command(AppCommand::ZoomIn);
                } else if in_list {
                    self.execute_command(AppCommand::PreviousEdge);
                }
            }
            MouseEventKind::ScrollDown => {
                if in_graph {
                    self.execute_command(AppCommand::ZoomOut);
                } else if in_list {
                    self.execute_command(AppCommand::NextEdge);
                }
            }
            _ => {}
        }
    }

    /// Hit-test a click inside the graph panel and tap what it landed on.
    fn handle_graph_click(&mut self, inner: Rect, position: Position) {
        if !inner.contains(position) {
            return;
        }
        let Some(view) = self.data.view.as_mut() else {
            return;
        };
        match hit_test(view, inner, position.x - inner.x, position.y - inner.y) {
            HitTarget::Node(id) => view.tap_node(&id),
            HitTarget::Edge(id) => {
                view.tap_edge(&id);
            }
            HitTarget::Background => view.tap_background(),
        }
    }

    /// Select the list entry under the click.
    fn handle_list_click(&mut self, inner: Rect, position: Position) {
        if !inner.contains(position) {
            return;
        }
        let Some(view) = self.data.view.as_mut() else {
            return;
        };
        let len = view.graph.records().len();
        let visible_items = usize::from(inner.height / RECORD_HEIGHT).max(1);
        let offset = centered_offset(view.selection.highlighted_record(), len, visible_items);
        let index = offset + usize::from((position.y - inner.y) / RECORD_HEIGHT);
        if index < len {
            view.selection.select_record(&view.graph, index);
        }
    }
}
