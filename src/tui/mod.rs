// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Renders the chart as colored label boxes with elbow edges (ratatui +
//! crossterm) and translates keyboard input into engine calls. Grab mode turns
//! cursor movement into drag change descriptors, so one grab-move-drop cycle
//! is exactly one undo step.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tokio::sync::Mutex;

use crate::bridge::{self, ChordAction, Signal};
use crate::engine::ChartEngine;
use crate::layout::child_column_positions;
use crate::model::{
    seed_chart, Chart, EdgeStyle, Node, NodeId, NodeKind, Person, PersonId, Position,
};
use crate::ops::NodeChange;
use crate::query;

pub(crate) mod theme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅣 🆁 🅸 🆃 🅾 🅽 ";

/// Chart units per terminal cell.
const CANVAS_X_SCALE: f64 = 8.0;
const CANVAS_Y_SCALE: f64 = 12.0;

/// Grab-mode movement per key press, in chart units.
const GRAB_STEP_X: f64 = 16.0;
const GRAB_STEP_Y: f64 = 12.0;

const TOAST_TTL: Duration = Duration::from_secs(4);

/// Runs the interactive terminal UI over a shared engine until quit.
pub fn run(engine: Arc<Mutex<ChartEngine>>) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(engine);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

/// The seed chart plus a couple of demo people, used by `--demo`.
pub fn demo_chart() -> Chart {
    let mut chart = seed_chart();

    let hanako = PersonId::new("person-hanako").expect("hard-coded demo person id is valid");
    chart.register_person(Person::new_with(
        hanako,
        "佐藤花子",
        Some("部長".to_owned()),
        None,
    ));
    let taro = PersonId::new("person-taro").expect("hard-coded demo person id is valid");
    chart.register_person(Person::new_with(
        taro,
        "山田太郎",
        Some("課長".to_owned()),
        None,
    ));

    chart
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Canvas,
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CanvasMode {
    Browse,
    /// The selected node follows the arrow keys until dropped.
    Grab,
    /// A connect request is armed; the next `x` closes it.
    Connect { source: NodeId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelTab {
    Departments,
    People,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchKind {
    Substring,
    Fuzzy,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    created_at: Instant,
}

struct App {
    engine: Arc<Mutex<ChartEngine>>,
    focus: Focus,
    mode: CanvasMode,
    panel_tab: PanelTab,
    search_kind: SearchKind,
    search_query: String,
    search_editing: bool,
    department_state: ListState,
    people_state: ListState,
    pan_x: i32,
    pan_y: i32,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(engine: Arc<Mutex<ChartEngine>>) -> Self {
        let mut department_state = ListState::default();
        department_state.select(Some(0));
        let mut people_state = ListState::default();
        people_state.select(Some(0));

        Self {
            engine,
            focus: Focus::Canvas,
            mode: CanvasMode::Browse,
            panel_tab: PanelTab::Departments,
            search_kind: SearchKind::Substring,
            search_query: String::new(),
            search_editing: false,
            department_state,
            people_state,
            pan_x: 0,
            pan_y: 0,
            toast: None,
            should_quit: false,
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            created_at: Instant::now(),
        });
    }

    fn active_toast(&mut self) -> Option<String> {
        let expired = self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.created_at.elapsed() >= TOAST_TTL);
        if expired {
            self.toast = None;
        }
        self.toast.as_ref().map(|toast| toast.message.clone())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = bridge::chord_action(&key) {
            let mut engine = self.engine.blocking_lock();
            let applied = match action {
                ChordAction::Undo => engine.undo(),
                ChordAction::Redo => engine.redo(),
            };
            drop(engine);
            if !applied {
                self.set_toast(match action {
                    ChordAction::Undo => "Nothing to undo",
                    ChordAction::Redo => "Nothing to redo",
                });
            }
            return;
        }

        if self.search_editing && self.focus == Focus::Panel {
            self.handle_search_edit_key(key.code);
            return;
        }

        if self.mode == CanvasMode::Grab && self.focus == Focus::Canvas {
            self.handle_grab_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Canvas => Focus::Panel,
                    Focus::Panel => Focus::Canvas,
                };
                return;
            }
            KeyCode::Char('1') => {
                self.focus = Focus::Canvas;
                return;
            }
            KeyCode::Char('2') => {
                self.engine.blocking_lock().set_panel_open(true);
                self.focus = Focus::Panel;
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Canvas => self.handle_canvas_key(key.code),
            Focus::Panel => self.handle_panel_key(key.code),
        }
    }

    fn handle_canvas_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.pan_x += 2,
            KeyCode::Right => self.pan_x -= 2,
            KeyCode::Up => self.pan_y += 1,
            KeyCode::Down => self.pan_y -= 1,
            KeyCode::Char('n') => self.select_step(1),
            KeyCode::Char('p') => self.select_step(-1),
            KeyCode::Char('a') => self.add_department_node(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('g') => self.enter_grab_mode(),
            KeyCode::Char('x') => self.toggle_connect(),
            KeyCode::Char('c') => self.add_child_of_selected(),
            KeyCode::Enter => {
                if self.selected_node_id().is_some() {
                    self.engine.blocking_lock().set_panel_open(true);
                    self.focus = Focus::Panel;
                }
            }
            KeyCode::Esc => {
                if matches!(self.mode, CanvasMode::Connect { .. }) {
                    self.mode = CanvasMode::Browse;
                    self.set_toast("Connect cancelled");
                } else {
                    self.engine.blocking_lock().set_panel_open(false);
                }
            }
            _ => {}
        }
    }

    fn handle_grab_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.grab_move(-GRAB_STEP_X, 0.0),
            KeyCode::Right => self.grab_move(GRAB_STEP_X, 0.0),
            KeyCode::Up => self.grab_move(0.0, -GRAB_STEP_Y),
            KeyCode::Down => self.grab_move(0.0, GRAB_STEP_Y),
            KeyCode::Char('g') | KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                self.drop_grab();
            }
            _ => {}
        }
    }

    fn handle_panel_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.focus = Focus::Canvas,
            KeyCode::Char('/') => {
                self.search_editing = true;
            }
            KeyCode::Char('\\') => {
                self.search_kind = match self.search_kind {
                    SearchKind::Substring => SearchKind::Fuzzy,
                    SearchKind::Fuzzy => SearchKind::Substring,
                };
            }
            KeyCode::Char('p') => {
                self.panel_tab = match self.panel_tab {
                    PanelTab::Departments => PanelTab::People,
                    PanelTab::People => PanelTab::Departments,
                };
            }
            KeyCode::Up => self.panel_list_step(-1),
            KeyCode::Down => self.panel_list_step(1),
            KeyCode::Enter => match self.panel_tab {
                PanelTab::Departments => self.relabel_from_list(),
                PanelTab::People => self.spawn_person_node_from_list(),
            },
            KeyCode::Char('o') => self.cycle_selected_color(),
            KeyCode::Char('+') => self.register_query_as_department(),
            _ => {}
        }
    }

    fn handle_search_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Enter => self.search_editing = false,
            KeyCode::Backspace => {
                self.search_query.pop();
            }
            KeyCode::Char(ch) => {
                self.search_query.push(ch);
                self.department_state.select(Some(0));
                self.people_state.select(Some(0));
            }
            _ => {}
        }
    }

    fn selected_node_id(&self) -> Option<NodeId> {
        self.engine.blocking_lock().selected_node_id().cloned()
    }

    fn select_step(&mut self, direction: i32) {
        let mut engine = self.engine.blocking_lock();
        let ids: Vec<NodeId> = engine.nodes().keys().cloned().collect();
        if ids.is_empty() {
            return;
        }

        let next = match engine.selected_node_id() {
            Some(current) => {
                let current_index = ids.iter().position(|id| id == current).unwrap_or(0);
                let len = ids.len() as i32;
                let stepped = (current_index as i32 + direction).rem_euclid(len);
                ids[stepped as usize].clone()
            }
            None => ids[0].clone(),
        };
        engine.select_node(Some(next));
    }

    fn add_department_node(&mut self) {
        let result = self.engine.blocking_lock().add_department_node();
        match result {
            Ok(_) => self.focus = Focus::Panel,
            Err(err) => self.set_toast(format!("Add failed: {err}")),
        }
    }

    fn delete_selected(&mut self) {
        let Some(node_id) = self.selected_node_id() else {
            self.set_toast("Nothing selected");
            return;
        };
        let result = self
            .engine
            .blocking_lock()
            .apply_node_changes(&[NodeChange::Remove { node_id }]);
        if let Err(err) = result {
            self.set_toast(format!("Delete failed: {err}"));
        }
    }

    fn enter_grab_mode(&mut self) {
        if self.selected_node_id().is_some() {
            self.mode = CanvasMode::Grab;
        } else {
            self.set_toast("Nothing selected");
        }
    }

    fn grab_move(&mut self, dx: f64, dy: f64) {
        let mut engine = self.engine.blocking_lock();
        let Some(node_id) = engine.selected_node_id().cloned() else {
            return;
        };
        let Some(node) = engine.nodes().get(&node_id) else {
            return;
        };
        let position = Position::new(node.position().x + dx, node.position().y + dy);

        let result = engine.apply_node_changes(&[NodeChange::Position {
            node_id,
            position,
            dragging: true,
        }]);
        drop(engine);
        if let Err(err) = result {
            self.set_toast(format!("Move failed: {err}"));
        }
    }

    fn drop_grab(&mut self) {
        self.mode = CanvasMode::Browse;

        let mut engine = self.engine.blocking_lock();
        let Some(node_id) = engine.selected_node_id().cloned() else {
            return;
        };
        let Some(node) = engine.nodes().get(&node_id) else {
            return;
        };
        let position = node.position();

        let result = engine.apply_node_changes(&[NodeChange::Position {
            node_id,
            position,
            dragging: false,
        }]);
        drop(engine);
        if let Err(err) = result {
            self.set_toast(format!("Drop failed: {err}"));
        }
    }

    fn toggle_connect(&mut self) {
        let Some(selected) = self.selected_node_id() else {
            self.set_toast("Nothing selected");
            return;
        };

        match self.mode.clone() {
            CanvasMode::Connect { source } => {
                self.mode = CanvasMode::Browse;
                if source == selected {
                    self.set_toast("Connect cancelled");
                    return;
                }
                let result = self
                    .engine
                    .blocking_lock()
                    .connect(source.as_str(), selected.as_str());
                match result {
                    Ok(_) => self.set_toast(format!("Connected {source} -> {selected}")),
                    Err(err) => self.set_toast(format!("Connect failed: {err}")),
                }
            }
            _ => {
                self.mode = CanvasMode::Connect { source: selected };
                self.set_toast("Select the target node, then press x again");
            }
        }
    }

    /// Spawns a department child under the selection, respacing the existing
    /// child column first so the new node slots in evenly.
    fn add_child_of_selected(&mut self) {
        let mut engine = self.engine.blocking_lock();
        let Some(parent_id) = engine.selected_node_id().cloned() else {
            drop(engine);
            self.set_toast("Nothing selected");
            return;
        };
        let Some(parent) = engine.nodes().get(&parent_id) else {
            return;
        };
        let parent_position = parent.position();

        let child_ids: Vec<NodeId> = query::children_of(engine.chart(), &parent_id)
            .into_iter()
            .map(|node| node.node_id().clone())
            .collect();
        let positions = child_column_positions(parent_position, child_ids.len() + 1);

        for (node_id, position) in child_ids.into_iter().zip(positions.iter().copied()) {
            if let Err(err) = bridge::dispatch(
                &mut engine,
                Signal::RepositionNode { node_id, position },
            ) {
                drop(engine);
                self.set_toast(format!("Reflow failed: {err}"));
                return;
            }
        }

        let new_position = *positions.last().expect("column has at least one slot");
        let node_id = engine.next_node_id();
        let mut node = Node::department(node_id, new_position, crate::engine::NEW_DEPARTMENT_LABEL);
        node.set_source_node_id(Some(parent_id));

        let result = bridge::dispatch(&mut engine, Signal::AddNode(node));
        drop(engine);
        match result {
            Ok(()) => self.focus = Focus::Panel,
            Err(err) => self.set_toast(format!("Add child failed: {err}")),
        }
    }

    fn filtered_departments(&self, engine: &ChartEngine) -> Vec<String> {
        let names = engine.chart().department_names();
        let filtered = match self.search_kind {
            SearchKind::Substring => query::filter_departments(names, &self.search_query),
            SearchKind::Fuzzy => query::fuzzy_rank_departments(names, &self.search_query),
        };
        filtered.into_iter().map(ToOwned::to_owned).collect()
    }

    fn filtered_people(&self, engine: &ChartEngine) -> Vec<Person> {
        query::filter_unassigned_people(engine.chart(), &self.search_query)
            .into_iter()
            .cloned()
            .collect()
    }

    fn panel_list_step(&mut self, direction: i32) {
        let engine = self.engine.blocking_lock();
        let len = match self.panel_tab {
            PanelTab::Departments => self.filtered_departments(&engine).len(),
            PanelTab::People => self.filtered_people(&engine).len(),
        };
        drop(engine);
        if len == 0 {
            return;
        }

        let state = match self.panel_tab {
            PanelTab::Departments => &mut self.department_state,
            PanelTab::People => &mut self.people_state,
        };
        let current = state.selected().unwrap_or(0) as i32;
        let next = (current + direction).rem_euclid(len as i32);
        state.select(Some(next as usize));
    }

    fn relabel_from_list(&mut self) {
        let mut engine = self.engine.blocking_lock();
        let departments = self.filtered_departments(&engine);
        let Some(name) = self
            .department_state
            .selected()
            .and_then(|index| departments.get(index))
            .cloned()
        else {
            drop(engine);
            self.set_toast("No department picked");
            return;
        };

        let result = engine.relabel_selected(name.clone());
        drop(engine);
        match result {
            Ok(true) => self.set_toast(format!("Renamed to {name}")),
            Ok(false) => self.set_toast("Select a department node first"),
            Err(err) => self.set_toast(format!("Rename failed: {err}")),
        }
    }

    /// Puts the picked person on the chart as a child of the selected node,
    /// connected with a dashed edge.
    fn spawn_person_node_from_list(&mut self) {
        let mut engine = self.engine.blocking_lock();
        let people = self.filtered_people(&engine);
        let Some(person) = self
            .people_state
            .selected()
            .and_then(|index| people.get(index))
            .cloned()
        else {
            drop(engine);
            self.set_toast("No person picked");
            return;
        };

        let Some(parent_id) = engine.selected_node_id().cloned() else {
            drop(engine);
            self.set_toast("Select a department node first");
            return;
        };
        let Some(parent) = engine.nodes().get(&parent_id) else {
            return;
        };
        let position = Position::new(
            parent.position().x + crate::layout::CHILD_COLUMN_X_OFFSET,
            parent.position().y,
        );

        let node_id = engine.next_node_id();
        let mut node = Node::person(
            node_id,
            position,
            person.person_id().clone(),
            person.name().to_owned(),
        );
        node.set_source_node_id(Some(parent_id));

        let result = bridge::dispatch(&mut engine, Signal::AddNode(node));
        drop(engine);
        match result {
            Ok(()) => self.set_toast(format!("Assigned {}", person.name())),
            Err(err) => self.set_toast(format!("Assign failed: {err}")),
        }
    }

    fn cycle_selected_color(&mut self) {
        let mut engine = self.engine.blocking_lock();
        let current = engine
            .selected_node()
            .and_then(Node::as_department)
            .and_then(|body| body.color())
            .map(ToOwned::to_owned);
        let next = theme::next_color_key(current.as_deref());

        let result = engine.recolor_selected(next);
        drop(engine);
        match result {
            Ok(true) => self.set_toast(format!("Color: {next}")),
            Ok(false) => self.set_toast("Select a department node first"),
            Err(err) => self.set_toast(format!("Recolor failed: {err}")),
        }
    }

    fn register_query_as_department(&mut self) {
        let name = self.search_query.trim().to_owned();
        if name.is_empty() {
            self.set_toast("Type a name with / first");
            return;
        }

        let result = self.engine.blocking_lock().register_department_name(name.clone());
        match result {
            Ok(true) => self.set_toast(format!("Registered {name}")),
            Ok(false) => self.set_toast(format!("{name} already registered")),
            Err(err) => self.set_toast(format!("Register failed: {err}")),
        }
    }
}

/// Chart coordinates to terminal cells, including the current pan.
fn project(position: Position, pan_x: i32, pan_y: i32) -> (i32, i32) {
    (
        (position.x / CANVAS_X_SCALE).round() as i32 + pan_x,
        (position.y / CANVAS_Y_SCALE).round() as i32 + pan_y,
    )
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let engine = app.engine.clone();
    let engine = engine.blocking_lock();

    let (canvas_area, panel_area) = if engine.panel_open() {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    draw_canvas(frame, canvas_area, app, &engine);
    if let Some(panel_area) = panel_area {
        draw_panel(frame, panel_area, app, &engine);
    }
    drop(engine);

    draw_status(frame, status_area, app);
}

fn draw_canvas(frame: &mut Frame<'_>, area: Rect, app: &App, engine: &ChartEngine) {
    let mode_hint = match &app.mode {
        CanvasMode::Browse => String::new(),
        CanvasMode::Grab => " — GRAB".to_owned(),
        CanvasMode::Connect { source } => format!(" — connect from {source}"),
    };
    let title = format!(
        "Chart ({} nodes, {} edges){mode_hint}",
        engine.nodes().len(),
        engine.edges().len()
    );

    let border_style = if app.focus == Focus::Canvas {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let buffer = frame.buffer_mut();

    let mut put = |x: i32, y: i32, ch: char, style: Style| {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if x >= inner.width || y >= inner.height {
            return;
        }
        buffer
            .get_mut(inner.x + x, inner.y + y)
            .set_char(ch)
            .set_style(style);
    };

    for edge in engine.edges().values() {
        let Some(source) = engine.nodes().get(edge.source_node_id()) else {
            continue;
        };
        let Some(target) = engine.nodes().get(edge.target_node_id()) else {
            continue;
        };

        let (sx, sy) = project(source.position(), app.pan_x, app.pan_y);
        let (tx, ty) = project(target.position(), app.pan_x, app.pan_y);
        let (horizontal, vertical) = match edge.style() {
            EdgeStyle::Solid => ('─', '│'),
            EdgeStyle::Dashed => ('┄', '┊'),
        };
        let style = Style::default().fg(Color::DarkGray);

        // Step path: out of the source, a vertical run at the midpoint
        // column, then into the target.
        let mx = (sx + tx) / 2;
        for x in range_between(sx, mx) {
            put(x, sy, horizontal, style);
        }
        for y in range_between(sy, ty) {
            put(mx, y, vertical, style);
        }
        for x in range_between(mx, tx) {
            put(x, ty, horizontal, style);
        }
    }

    for (node_id, node) in engine.nodes() {
        let (x, y) = project(node.position(), app.pan_x, app.pan_y);
        let selected = engine.selected_node_id() == Some(node_id);
        let (text, style) = match node.kind() {
            NodeKind::Department => (
                format!("[{}]", node.display_label()),
                theme::department_style(
                    node.as_department().and_then(|body| body.color()),
                    selected,
                ),
            ),
            NodeKind::Person => (
                format!("({})", node.display_label()),
                theme::person_style(selected),
            ),
        };

        for (offset, ch) in text.chars().enumerate() {
            put(x + offset as i32, y, ch, style);
        }
    }
}

fn range_between(a: i32, b: i32) -> std::ops::RangeInclusive<i32> {
    if a <= b {
        a..=b
    } else {
        b..=a
    }
}

fn draw_panel(frame: &mut Frame<'_>, area: Rect, app: &mut App, engine: &ChartEngine) {
    let selected_label = engine
        .selected_node()
        .map(|node| node.display_label().to_owned())
        .unwrap_or_else(|| "—".to_owned());
    let tab_label = match app.panel_tab {
        PanelTab::Departments => "departments",
        PanelTab::People => "people",
    };

    let border_style = if app.focus == Focus::Panel {
        Style::default().fg(Color::LightGreen)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!("Edit: {selected_label} [{tab_label}]"))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let search_kind = match app.search_kind {
        SearchKind::Substring => "find",
        SearchKind::Fuzzy => "fuzzy",
    };
    let cursor = if app.search_editing { "_" } else { "" };
    let search_line = Paragraph::new(format!("{search_kind}: {}{cursor}", app.search_query))
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(search_line, rows[0]);

    match app.panel_tab {
        PanelTab::Departments => {
            let items: Vec<ListItem> = app
                .filtered_departments(engine)
                .into_iter()
                .map(ListItem::new)
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, rows[1], &mut app.department_state);
        }
        PanelTab::People => {
            let items: Vec<ListItem> = app
                .filtered_people(engine)
                .into_iter()
                .map(|person| {
                    let line = match person.title() {
                        Some(title) => format!("{} — {title}", person.name()),
                        None => person.name().to_owned(),
                    };
                    ListItem::new(line)
                })
                .collect();
            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
            frame.render_stateful_widget(list, rows[1], &mut app.people_state);
        }
    }
}

fn draw_status(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    if let Some(message) = app.active_toast() {
        let toast = Paragraph::new(message).style(Style::default().fg(Color::Yellow));
        frame.render_widget(toast, area);
        return;
    }

    let mut spans = vec![Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    )];
    let hints: &[(&str, &str)] = match (app.focus, &app.mode) {
        (Focus::Canvas, CanvasMode::Grab) => {
            &[("arrows", "move"), ("g", "drop"), ("^Z", "undo")]
        }
        (Focus::Canvas, _) => &[
            ("n/p", "select"),
            ("g", "grab"),
            ("a", "add"),
            ("c", "child"),
            ("x", "connect"),
            ("d", "delete"),
            ("^Z", "undo"),
            ("^Y", "redo"),
            ("q", "quit"),
        ],
        (Focus::Panel, _) => &[
            ("/", "search"),
            ("enter", "apply"),
            ("o", "color"),
            ("+", "register"),
            ("p", "people"),
            ("esc", "back"),
        ],
    };
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(FOOTER_KEY_COLOR),
        ));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
