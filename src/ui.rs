use anyhow::Result;
use chrono::NaiveDateTime;
use clinic_registry::{
    format_slot, is_partial_national_id, parse_slot, validate_national_id, Registry,
    RegistryError,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

const NO_AVAILABILITY: &str = "No availability";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    PatientName,
    NationalId,
    Doctor,
    Slots,
    Appointments,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::PatientName => Focus::NationalId,
            Focus::NationalId => Focus::Doctor,
            Focus::Doctor => Focus::Slots,
            Focus::Slots => Focus::Appointments,
            Focus::Appointments => Focus::PatientName,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::PatientName => Focus::Appointments,
            Focus::NationalId => Focus::PatientName,
            Focus::Doctor => Focus::NationalId,
            Focus::Slots => Focus::Doctor,
            Focus::Appointments => Focus::Slots,
        }
    }

    fn is_text_field(&self) -> bool {
        matches!(self, Focus::PatientName | Focus::NationalId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

impl Message {
    fn new(kind: MessageKind, title: &str, text: impl Into<String>) -> Self {
        Message {
            kind,
            title: title.to_string(),
            text: text.into(),
        }
    }

    fn color(&self) -> Color {
        match self.kind {
            MessageKind::Info => Color::Green,
            MessageKind::Warning => Color::Yellow,
            MessageKind::Error => Color::Red,
        }
    }
}

/// One line of the active appointments table. Keeps the patient ID so a
/// cancellation never has to look the patient up by display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub at: NaiveDateTime,
    pub doctor: String,
    pub patient_name: String,
    pub patient_id: String,
}

pub struct App {
    pub registry: Registry,
    pub focus: Focus,
    pub patient_name: String,
    pub national_id: String,
    pub doctor_names: Vec<String>,
    pub doctor_index: usize,
    pub slots: Vec<NaiveDateTime>,
    pub slot_state: ListState,
    /// Slot field, filled by picking from the availability list
    pub slot_text: String,
    pub rows: Vec<AppointmentRow>,
    pub table_state: TableState,
    pub message: Option<Message>,
}

impl App {
    pub fn new(registry: Registry) -> Self {
        let doctor_names = registry.doctor_names();

        let mut app = Self {
            registry,
            focus: Focus::PatientName,
            patient_name: String::new(),
            national_id: String::new(),
            doctor_names,
            doctor_index: 0,
            slots: Vec::new(),
            slot_state: ListState::default(),
            slot_text: String::new(),
            rows: Vec::new(),
            table_state: TableState::default(),
            message: None,
        };

        app.refresh_availability();
        app.refresh_appointments();
        app
    }

    pub fn selected_doctor(&self) -> Option<&str> {
        self.doctor_names.get(self.doctor_index).map(String::as_str)
    }

    pub fn refresh_availability(&mut self) {
        self.slots = self
            .selected_doctor()
            .and_then(|name| self.registry.available_slots(name).ok())
            .unwrap_or_default();

        if self.slots.is_empty() {
            self.slot_state.select(None);
        } else {
            let keep = self.slot_state.selected().unwrap_or(0).min(self.slots.len() - 1);
            self.slot_state.select(Some(keep));
        }
    }

    pub fn refresh_appointments(&mut self) {
        self.rows = self
            .registry
            .list_appointments()
            .into_iter()
            .map(|a| AppointmentRow {
                at: a.at(),
                doctor: a.doctor_name().to_string(),
                patient_name: self
                    .registry
                    .patient(a.patient_id())
                    .map(|p| p.name().to_string())
                    .unwrap_or_default(),
                patient_id: a.patient_id().to_string(),
            })
            .collect();

        if self.rows.is_empty() {
            self.table_state.select(None);
        } else {
            let keep = self.table_state.selected().unwrap_or(0).min(self.rows.len() - 1);
            self.table_state.select(Some(keep));
        }
    }

    // ------------------------------------------------------------------------
    // Form editing
    // ------------------------------------------------------------------------

    pub fn type_char(&mut self, c: char) {
        match self.focus {
            Focus::PatientName => self.patient_name.push(c),
            Focus::NationalId => {
                let mut proposed = self.national_id.clone();
                proposed.push(c);
                if is_partial_national_id(&proposed) {
                    self.national_id = proposed;
                }
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::PatientName => {
                self.patient_name.pop();
            }
            Focus::NationalId => {
                self.national_id.pop();
            }
            _ => {}
        }
    }

    pub fn next_doctor(&mut self) {
        if self.doctor_names.is_empty() {
            return;
        }
        self.doctor_index = (self.doctor_index + 1) % self.doctor_names.len();
        self.on_doctor_changed();
    }

    pub fn previous_doctor(&mut self) {
        if self.doctor_names.is_empty() {
            return;
        }
        self.doctor_index = if self.doctor_index == 0 {
            self.doctor_names.len() - 1
        } else {
            self.doctor_index - 1
        };
        self.on_doctor_changed();
    }

    fn on_doctor_changed(&mut self) {
        self.slot_state.select(None);
        self.slot_text.clear();
        self.refresh_availability();
    }

    /// Copy the highlighted availability entry into the slot field
    pub fn pick_slot(&mut self) {
        if let Some(at) = self.slot_state.selected().and_then(|i| self.slots.get(i)) {
            self.slot_text = format_slot(at);
        }
    }

    pub fn next_row(&mut self) {
        match self.focus {
            Focus::Slots => step(&mut self.slot_state, self.slots.len(), true),
            Focus::Appointments => step(&mut self.table_state, self.rows.len(), true),
            _ => {}
        }
    }

    pub fn previous_row(&mut self) {
        match self.focus {
            Focus::Slots => step(&mut self.slot_state, self.slots.len(), false),
            Focus::Appointments => step(&mut self.table_state, self.rows.len(), false),
            _ => {}
        }
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    pub fn book(&mut self) {
        let name = self.patient_name.trim().to_string();
        let doctor = self.selected_doctor().unwrap_or_default().to_string();

        if name.is_empty() || self.national_id.is_empty() || doctor.is_empty() || self.slot_text.is_empty() {
            self.message = Some(Message::new(
                MessageKind::Warning,
                "Missing information",
                "Fill in all fields.",
            ));
            return;
        }

        let national_id = match validate_national_id(&self.national_id) {
            Ok(id) => id,
            Err(e) => {
                self.message = Some(Message::new(MessageKind::Warning, "ID error", e.to_string()));
                return;
            }
        };

        let at = match parse_slot(&self.slot_text) {
            Ok(at) => at,
            Err(e) => {
                self.message = Some(Message::new(MessageKind::Error, "Date error", e.to_string()));
                return;
            }
        };

        self.registry.register_patient(&name, &national_id);

        match self.registry.book_appointment(&national_id, &doctor, at) {
            Ok(appointment) => {
                self.message = Some(Message::new(
                    MessageKind::Info,
                    "Booked",
                    appointment.to_string(),
                ));
                self.slot_text.clear();
            }
            Err(e) => {
                self.message = Some(Message::new(MessageKind::Error, booking_error_title(&e), e.to_string()));
                return;
            }
        }

        self.refresh_appointments();
        self.refresh_availability();
    }

    pub fn cancel_selected(&mut self) {
        let Some(row) = self.table_state.selected().and_then(|i| self.rows.get(i)).cloned() else {
            return;
        };

        match self.registry.cancel_appointment(&row.patient_id, row.at) {
            Ok(appointment) => {
                self.message = Some(Message::new(
                    MessageKind::Info,
                    "Cancelled",
                    format!("{} | {}", format_slot(&appointment.at()), appointment.doctor_name()),
                ));
            }
            Err(e) => {
                self.message = Some(Message::new(MessageKind::Error, "Cancellation error", e.to_string()));
                return;
            }
        }

        self.refresh_appointments();
        self.refresh_availability();
    }

    /// Returns false when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return false,
                KeyCode::Char('b') => self.book(),
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Char('q') if !self.focus.is_text_field() => return false,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) if self.focus.is_text_field() => self.type_char(c),
            KeyCode::Left if self.focus == Focus::Doctor => self.previous_doctor(),
            KeyCode::Right if self.focus == Focus::Doctor => self.next_doctor(),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Enter => match self.focus {
                Focus::Slots => self.pick_slot(),
                Focus::Appointments => {}
                _ => self.book(),
            },
            KeyCode::Delete | KeyCode::Char('x') if self.focus == Focus::Appointments => {
                self.cancel_selected()
            }
            _ => {}
        }

        true
    }
}

/// Each domain error kind gets its own heading
fn booking_error_title(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::NotFound(_) => "Booking error: not found",
        RegistryError::Unavailable => "Booking error: doctor unavailable",
        RegistryError::Conflict => "Booking error: slot taken",
    }
}

/// Wrap-around selection step shared by the list and the table
fn step<S: Selectable>(state: &mut S, len: usize, forward: bool) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if forward => if i >= len - 1 { 0 } else { i + 1 },
        Some(i) => if i == 0 { len - 1 } else { i - 1 },
        None => 0,
    };
    state.select(Some(i));
}

trait Selectable {
    fn selected(&self) -> Option<usize>;
    fn select(&mut self, index: Option<usize>);
}

impl Selectable for ListState {
    fn selected(&self) -> Option<usize> {
        ListState::selected(self)
    }

    fn select(&mut self, index: Option<usize>) {
        ListState::select(self, index)
    }
}

impl Selectable for TableState {
    fn selected(&self) -> Option<usize> {
        TableState::selected(self)
    }

    fn select(&mut self, index: Option<usize>) {
        TableState::select(self, index)
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports both press and release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + appointments
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Patient
            Constraint::Length(4), // Doctor + slot
            Constraint::Min(0),    // Availability
        ])
        .split(body[0]);

    render_patient(f, form[0], app);
    render_appointment_fields(f, form[1], app);
    render_availability(f, form[2], app);
    render_appointments(f, body[1], app);

    render_status_bar(f, chunks[2], app);
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "Clinic Appointments",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Doctors: {}", app.registry.doctor_count()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Patients: {}", app.registry.patient_count()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Active: {}", app.rows.len()),
            Style::default().fg(Color::Green),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let cursor = if focused { "▏" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}

fn render_patient(f: &mut Frame, area: Rect, app: &App) {
    let text = vec![
        field_line("Name:", &app.patient_name, app.focus == Focus::PatientName),
        field_line("ID:", &app.national_id, app.focus == Focus::NationalId),
    ];

    let border = if app.focus.is_text_field() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let panel = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(" Patient "));

    f.render_widget(panel, area);
}

fn render_appointment_fields(f: &mut Frame, area: Rect, app: &App) {
    let doctor = match app.selected_doctor().and_then(|n| app.registry.doctor(n)) {
        Some(d) => format!("◀ {} ▶", d),
        None => "-".to_string(),
    };

    let text = vec![
        field_line("Doctor:", &doctor, false),
        field_line("Date:", &app.slot_text, false),
    ];

    let panel = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(app, Focus::Doctor))
            .title(" Appointment "),
    );

    f.render_widget(panel, area);
}

fn render_availability(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = if app.slots.is_empty() {
        vec![ListItem::new(NO_AVAILABILITY).style(Style::default().fg(Color::DarkGray))]
    } else {
        app.slots.iter().map(|at| ListItem::new(format_slot(at))).collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app, Focus::Slots))
                .title(" Availability (Enter to pick) "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.slot_state);
}

fn render_appointments(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Date", "Doctor", "Patient"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });
    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(format_slot(&row.at)),
            Cell::from(truncate(&row.doctor, 20)),
            Cell::from(truncate(&row.patient_name, 24)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(22),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(app, Focus::Appointments))
            .title(" Active Appointments (x to cancel) "),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = Vec::new();

    if let Some(message) = &app.message {
        status_spans.push(Span::styled(
            format!(" {}: ", message.title),
            Style::default().fg(message.color()).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::styled(message.text.clone(), Style::default().fg(message.color())));
        status_spans.push(Span::raw(" | "));
    }

    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Field | "));
    status_spans.push(Span::styled("←/→", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Doctor | "));
    status_spans.push(Span::styled("Ctrl+B", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Book | "));
    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_registry::seed_demo;

    fn app() -> App {
        let mut registry = Registry::new();
        seed_demo(&mut registry);
        App::new(registry)
    }

    fn fill_patient(app: &mut App, name: &str, id: &str) {
        app.focus = Focus::PatientName;
        name.chars().for_each(|c| app.type_char(c));
        app.focus = Focus::NationalId;
        id.chars().for_each(|c| app.type_char(c));
    }

    #[test]
    fn test_initial_state() {
        let app = app();

        // Doctors are sorted by name
        assert_eq!(app.selected_doctor(), Some("Ahmet Yılmaz"));
        assert_eq!(app.slots.len(), 7);
        assert_eq!(app.slot_state.selected(), Some(0));
        assert!(app.rows.is_empty());
    }

    #[test]
    fn test_national_id_field_filters_keys() {
        let mut app = app();
        app.focus = Focus::NationalId;

        for c in "12a345678901999".chars() {
            app.type_char(c);
        }

        // Letters dropped, capped at 11 digits
        assert_eq!(app.national_id, "12345678901");
    }

    #[test]
    fn test_book_requires_all_fields() {
        let mut app = app();
        app.book();

        let message = app.message.unwrap();
        assert_eq!(message.kind, MessageKind::Warning);
        assert_eq!(message.title, "Missing information");
    }

    #[test]
    fn test_book_rejects_short_id() {
        let mut app = app();
        fill_patient(&mut app, "Ayşe Demir", "12345");
        app.pick_slot();
        app.book();

        assert_eq!(app.message.unwrap().title, "ID error");
        assert_eq!(app.registry.patient_count(), 0);
    }

    #[test]
    fn test_book_and_cancel_through_form() {
        let mut app = app();
        fill_patient(&mut app, "Ayşe Demir", "12345678901");
        app.pick_slot();
        assert_eq!(app.slot_text, "2025-05-01 10:00");

        app.book();
        assert_eq!(app.message.as_ref().unwrap().kind, MessageKind::Info);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].patient_id, "12345678901");
        assert_eq!(app.slots.len(), 6);
        assert!(app.slot_text.is_empty());

        app.focus = Focus::Appointments;
        app.cancel_selected();
        assert_eq!(app.message.as_ref().unwrap().title, "Cancelled");
        assert!(app.rows.is_empty());
        assert_eq!(app.slots.len(), 7);
    }

    #[test]
    fn test_same_patient_same_time_shows_conflict() {
        let mut app = app();
        fill_patient(&mut app, "Ayşe Demir", "12345678901");

        app.slot_text = "2025-05-04 10:00".to_string();
        app.book();
        assert_eq!(app.rows.len(), 1);

        // Mehmet Kara also offers 2025-05-04 10:00
        app.previous_doctor();
        assert_eq!(app.selected_doctor(), Some("Mehmet Kara"));
        app.slot_text = "2025-05-04 10:00".to_string();
        app.book();

        let message = app.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.title, "Booking error: slot taken");
        assert_eq!(message.text, "Conflict: slot taken");
        assert_eq!(app.rows.len(), 1);
    }

    #[test]
    fn test_unoffered_slot_shows_unavailable() {
        let mut app = app();
        fill_patient(&mut app, "Ayşe Demir", "12345678901");

        // Aylin Şahin only works afternoons
        app.next_doctor();
        assert_eq!(app.selected_doctor(), Some("Aylin Şahin"));
        app.slot_text = "2025-05-01 10:00".to_string();
        app.book();

        let message = app.message.clone().unwrap();
        assert_eq!(message.title, "Booking error: doctor unavailable");
        assert!(app.rows.is_empty());
    }

    #[test]
    fn test_changing_doctor_clears_slot() {
        let mut app = app();
        app.pick_slot();
        assert!(!app.slot_text.is_empty());

        app.previous_doctor();
        assert_eq!(app.selected_doctor(), Some("Mehmet Kara"));
        assert!(app.slot_text.is_empty());
        assert_eq!(app.slots.len(), 7);
    }

    #[test]
    fn test_handle_key_navigation() {
        let mut app = app();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        // 'q' is text while typing a name
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.patient_name, "q");

        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Slots);

        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.slot_text, "2025-05-01 11:00");

        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert!(!app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Ahmet", 10), "Ahmet");
        assert_eq!(truncate("Ahmet Yılmaz Kardiyoloji", 10), "Ahmet Y...");
    }
}
