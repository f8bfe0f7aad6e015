//! Keyboard Input Handler
//!
//! Handles all keyboard input. Radius edits go through the input
//! affordance (step, clamp, snap) before reaching the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::navigation::{move_by_row, next_selection, prev_selection};
use crate::logic::radius::{parse_radius_input, step_down, step_up};
use crate::logic::update::update;
use crate::messages::{Command, Msg};
use crate::model::Model;

/// Longest radius text accepted while typing
const MAX_RADIUS_DIGITS: usize = 6;

/// Handle keyboard input
pub fn handle_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(model);
    }

    if model.ui.is_editing_radius() {
        return handle_radius_edit_key(model, key);
    }

    let vim = model.ui.vim_mode;
    let len = model.finder.shops.len();
    let columns = model.ui.grid_columns;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => quit(model),

        KeyCode::Char('+') | KeyCode::Char('=') => {
            change_radius(model, step_up(model.finder.radius))
        }
        KeyCode::Char('-') => change_radius(model, step_down(model.finder.radius)),

        // Typing replaces the radius; the field title shows the current one
        KeyCode::Char('e') | KeyCode::Char('/') => {
            model.ui.radius_edit = Some(String::new());
            Vec::new()
        }

        KeyCode::Char('r') => update(model, Msg::Refresh),

        KeyCode::Right => {
            model.ui.selected_card = next_selection(model.ui.selected_card, len);
            Vec::new()
        }
        KeyCode::Char('l') if vim => {
            model.ui.selected_card = next_selection(model.ui.selected_card, len);
            Vec::new()
        }
        KeyCode::Left => {
            model.ui.selected_card = prev_selection(model.ui.selected_card, len);
            Vec::new()
        }
        KeyCode::Char('h') if vim => {
            model.ui.selected_card = prev_selection(model.ui.selected_card, len);
            Vec::new()
        }
        KeyCode::Down => {
            model.ui.selected_card = move_by_row(model.ui.selected_card, len, columns, true);
            Vec::new()
        }
        KeyCode::Char('j') if vim => {
            model.ui.selected_card = move_by_row(model.ui.selected_card, len, columns, true);
            Vec::new()
        }
        KeyCode::Up => {
            model.ui.selected_card = move_by_row(model.ui.selected_card, len, columns, false);
            Vec::new()
        }
        KeyCode::Char('k') if vim => {
            model.ui.selected_card = move_by_row(model.ui.selected_card, len, columns, false);
            Vec::new()
        }
        KeyCode::Home => {
            model.ui.selected_card = if len > 0 { Some(0) } else { None };
            Vec::new()
        }
        KeyCode::Char('g') if vim => {
            model.ui.selected_card = if len > 0 { Some(0) } else { None };
            Vec::new()
        }
        KeyCode::End => {
            model.ui.selected_card = len.checked_sub(1);
            Vec::new()
        }
        KeyCode::Char('G') if vim => {
            model.ui.selected_card = len.checked_sub(1);
            Vec::new()
        }

        KeyCode::Char('o') | KeyCode::Enter => link_command(model, Command::OpenLink),
        KeyCode::Char('c') => link_command(model, Command::CopyLink),

        _ => Vec::new(),
    }
}

fn handle_radius_edit_key(model: &mut Model, key: KeyEvent) -> Vec<Command> {
    let Some(buffer) = model.ui.radius_edit.as_mut() else {
        return Vec::new();
    };

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if buffer.len() < MAX_RADIUS_DIGITS {
                buffer.push(c);
            }
            Vec::new()
        }
        KeyCode::Backspace => {
            buffer.pop();
            Vec::new()
        }
        KeyCode::Esc => {
            model.ui.radius_edit = None;
            Vec::new()
        }
        KeyCode::Enter => {
            let input = model.ui.radius_edit.take().unwrap_or_default();
            match parse_radius_input(&input) {
                Some(radius) => change_radius(model, radius),
                None => {
                    model.show_toast("Error: radius must be a number of meters".to_string());
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    }
}

fn change_radius(model: &mut Model, radius: u32) -> Vec<Command> {
    update(model, Msg::RadiusChanged(radius))
}

fn link_command(model: &mut Model, make: fn(String) -> Command) -> Vec<Command> {
    match model.selected_map_link() {
        Some(link) => vec![make(link)],
        None => Vec::new(),
    }
}

fn quit(model: &mut Model) -> Vec<Command> {
    model.ui.should_quit = true;
    update(model, Msg::Unmounted)
}
