use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use periodica::ai::FAILURE_REPLY;
use periodica::ai_worker::spawn_chat_worker;
use periodica::models::{
    AiRequest, AiResponse, AppState, ChatMessage, ChatRole, ChatState, Element, QuizPhase,
    ViewMode,
};
use periodica::quiz::QuizRun;
use periodica::trends::TrendProperty;
use periodica::ui::layout::calculate_explorer_chunks;
use periodica::{dataset, grid, logger, trends, ui};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

/// Poll timeout for the event loop; bounds how late timed transitions
/// (quiz auto-advance, chat replies) can fire.
const TICK_RATE: Duration = Duration::from_millis(100);

struct DetailView {
    element: &'static Element,
    chat: ChatState,
}

struct App {
    state: AppState,
    view: ViewMode,
    search_query: String,
    search_focused: bool,
    selected: usize,
    detail: Option<DetailView>,
    quiz_phase: QuizPhase,
    quiz_run: Option<QuizRun<'static>>,
    trend_property: TrendProperty,
    ai_tx: Sender<AiRequest>,
    ai_rx: Receiver<AiResponse>,
}

impl App {
    fn new(ai_tx: Sender<AiRequest>, ai_rx: Receiver<AiResponse>) -> Self {
        App {
            state: AppState::Landing,
            view: ViewMode::Table,
            search_query: String::new(),
            search_focused: false,
            selected: 0,
            detail: None,
            quiz_phase: QuizPhase::Menu,
            quiz_run: None,
            trend_property: TrendProperty::Density,
            ai_tx,
            ai_rx,
        }
    }

    fn filtered(&self) -> Vec<&'static Element> {
        dataset::filter_elements(dataset::all(), &self.search_query)
    }

    fn start_quiz(&mut self) {
        self.quiz_run = Some(QuizRun::new(dataset::all(), &mut rand::thread_rng()));
        self.quiz_phase = QuizPhase::Playing;
    }

    /// Route a worker reply to the chat panel it belongs to. Replies for a
    /// panel that has since closed (or switched element) are dropped.
    fn apply_chat_reply(&mut self, element_z: u32, text: String) {
        match &mut self.detail {
            Some(detail) if detail.element.z == element_z && detail.chat.is_loading => {
                detail.chat.messages.push(ChatMessage {
                    role: ChatRole::Assistant,
                    content: text,
                });
                detail.chat.is_loading = false;
                detail.chat.scroll_y = detail.chat.max_scroll;
            }
            _ => {
                logger::log(&format!(
                    "dropping chat reply for closed panel (element {})",
                    element_z
                ));
            }
        }
    }
}

fn main() -> io::Result<()> {
    logger::init();

    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    spawn_chat_worker(reply_tx, request_rx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(request_tx, reply_rx);
    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    loop {
        while let Ok(AiResponse::Reply { element_z, text }) = app.ai_rx.try_recv() {
            app.apply_chat_reply(element_z, text);
        }

        if app.quiz_phase == QuizPhase::Playing
            && let Some(run) = app.quiz_run.as_mut()
            && run.tick(Instant::now())
        {
            app.quiz_phase = QuizPhase::Summary;
        }

        terminal.draw(|f| draw(f, &mut app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && handle_key(&mut app, key)
        {
            return Ok(());
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    match app.state {
        AppState::Landing => ui::draw_landing(f),
        AppState::Explorer => draw_explorer(f, app),
    }
}

fn draw_explorer(f: &mut Frame, app: &mut App) {
    let layout = calculate_explorer_chunks(f.area());
    ui::draw_header(
        f,
        layout.header_area,
        app.view,
        &app.search_query,
        app.search_focused,
    );

    match app.view {
        ViewMode::Table => {
            let filtered = app.filtered();
            if app.selected >= filtered.len() {
                app.selected = filtered.len().saturating_sub(1);
            }
            let selected_z = filtered.get(app.selected).map(|e| e.z);
            let grid_layout = grid::layout(&filtered, dataset::all().len());
            ui::draw_table(f, layout.content_area, &grid_layout, selected_z);
        }
        ViewMode::Trends => {
            let points = trends::project(dataset::all(), app.trend_property);
            let stats = trends::stats(&points);
            ui::draw_trends(
                f,
                layout.content_area,
                app.trend_property,
                &points,
                stats.as_ref(),
            );
        }
        ViewMode::Quiz => match (app.quiz_phase, app.quiz_run.as_ref()) {
            (QuizPhase::Playing, Some(run)) => ui::draw_quiz(f, layout.content_area, run),
            (QuizPhase::Summary, Some(run)) => {
                ui::draw_quiz_summary(f, layout.content_area, run)
            }
            _ => ui::draw_quiz_menu(f, layout.content_area),
        },
    }

    ui::draw_help(f, layout.help_area, app.view, app.search_focused);

    if let Some(detail) = &mut app.detail {
        ui::draw_detail(f, detail.element, &mut detail.chat);
    }
}

/// Returns true when the application should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.state {
        AppState::Landing => match key.code {
            KeyCode::Enter => {
                app.state = AppState::Explorer;
                false
            }
            KeyCode::Esc | KeyCode::Char('q') => true,
            _ => false,
        },
        AppState::Explorer => {
            if app.detail.is_some() {
                handle_detail_key(app, key);
                return false;
            }
            if app.search_focused {
                handle_search_key(app, key);
                return false;
            }
            let quiz_playing =
                app.view == ViewMode::Quiz && app.quiz_phase == QuizPhase::Playing;
            match key.code {
                KeyCode::Tab => app.view = app.view.next(),
                KeyCode::Esc => app.state = AppState::Landing,
                KeyCode::Char('1') if !quiz_playing => app.view = ViewMode::Table,
                KeyCode::Char('2') if !quiz_playing => app.view = ViewMode::Trends,
                KeyCode::Char('3') if !quiz_playing => app.view = ViewMode::Quiz,
                _ => match app.view {
                    ViewMode::Table => handle_table_key(app, key),
                    ViewMode::Trends => handle_trends_key(app, key),
                    ViewMode::Quiz => handle_quiz_key(app, key),
                },
            }
            false
        }
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Left | KeyCode::Up => app.selected = app.selected.saturating_sub(1),
        KeyCode::Right | KeyCode::Down => {
            let count = app.filtered().len();
            if app.selected + 1 < count {
                app.selected += 1;
            }
        }
        KeyCode::Enter => {
            let filtered = app.filtered();
            if let Some(&element) = filtered.get(app.selected) {
                app.detail = Some(DetailView {
                    element,
                    chat: ChatState::for_element(&element.name),
                });
            }
        }
        _ => {}
    }
}

fn handle_trends_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.trend_property = app.trend_property.prev(),
        KeyCode::Right => app.trend_property = app.trend_property.next(),
        _ => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match app.quiz_phase {
        QuizPhase::Menu => {
            if key.code == KeyCode::Enter {
                app.start_quiz();
            }
        }
        QuizPhase::Playing => {
            if let KeyCode::Char(c @ '1'..='4') = key.code
                && let Some(run) = app.quiz_run.as_mut()
            {
                let index = c as usize - '1' as usize;
                if index < run.current().options.len() {
                    let question = run.current();
                    let label = question.kind.option_label(question.options[index]);
                    run.answer(label, Instant::now());
                }
            }
        }
        QuizPhase::Summary => match key.code {
            KeyCode::Char('r') => app.start_quiz(),
            KeyCode::Char('m') => {
                app.quiz_phase = QuizPhase::Menu;
                app.quiz_run = None;
            }
            _ => {}
        },
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.search_focused = false,
        KeyCode::Backspace => {
            app.search_query.pop();
            app.selected = 0;
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.selected = 0;
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // An in-flight request keeps running; its reply is dropped when
            // it arrives for a panel that no longer exists.
            app.detail = None;
        }
        KeyCode::Enter => submit_chat(app),
        KeyCode::Up => {
            if let Some(detail) = &mut app.detail {
                detail.chat.scroll_y = detail.chat.scroll_y.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if let Some(detail) = &mut app.detail {
                detail.chat.scroll_y = (detail.chat.scroll_y + 1).min(detail.chat.max_scroll);
            }
        }
        KeyCode::Left => {
            if let Some(detail) = &mut app.detail
                && detail.chat.cursor_position > 0
            {
                detail.chat.cursor_position -= 1;
            }
        }
        KeyCode::Right => {
            if let Some(detail) = &mut app.detail
                && detail.chat.cursor_position < detail.chat.input_buffer.len()
            {
                detail.chat.cursor_position += 1;
            }
        }
        KeyCode::Backspace => {
            if let Some(detail) = &mut app.detail
                && !detail.chat.is_loading
                && detail.chat.cursor_position > 0
            {
                detail
                    .chat
                    .input_buffer
                    .remove(detail.chat.cursor_position - 1);
                detail.chat.cursor_position -= 1;
            }
        }
        KeyCode::Char(c) => {
            if let Some(detail) = &mut app.detail
                && !detail.chat.is_loading
            {
                detail.chat.input_buffer.insert(detail.chat.cursor_position, c);
                detail.chat.cursor_position += 1;
            }
        }
        _ => {}
    }
}

fn submit_chat(app: &mut App) {
    let Some(detail) = &mut app.detail else {
        return;
    };
    // Submit is a no-op while blank or while a request is already pending.
    if detail.chat.is_loading || detail.chat.input_buffer.trim().is_empty() {
        return;
    }

    let question = detail.chat.input_buffer.trim().to_string();
    detail.chat.input_buffer.clear();
    detail.chat.cursor_position = 0;
    detail.chat.messages.push(ChatMessage {
        role: ChatRole::User,
        content: question.clone(),
    });
    detail.chat.is_loading = true;

    let request = AiRequest::Ask {
        element_z: detail.element.z,
        element_name: detail.element.name.clone(),
        question,
    };
    if app.ai_tx.send(request).is_err() {
        detail.chat.is_loading = false;
        detail.chat.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: FAILURE_REPLY.to_string(),
        });
    }
}
