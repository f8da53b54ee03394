//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        let display_len = self.display_count();
        if self.selected_index < display_len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.list_state.select(Some(self.selected_index));
    }

    pub fn jump_to_bottom(&mut self) {
        let display_len = self.display_count();
        if display_len > 0 {
            self.selected_index = display_len - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.list_state.select(Some(self.selected_index));
    }

    pub fn page_down(&mut self) {
        let max_index = self.display_count().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.list_state.select(Some(self.selected_index));
    }
}
