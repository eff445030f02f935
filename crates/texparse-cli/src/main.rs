use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use texparse_config::Config;
use texparse_engine::{
    Parser, Root, io,
    outline::{self, OutlineEntry},
};

enum View {
    Files,
    Outline,
}

struct App {
    parser: Parser,
    tab_width: usize,
    files: Vec<PathBuf>,
    file_list_state: ListState,
    view: View,
    root: Option<Root>,
    entries: Vec<OutlineEntry>,
    outline_state: ListState,
    current_content: Vec<String>,
}

impl App {
    fn new(files: Vec<PathBuf>, config: &Config) -> Self {
        let mut app = Self {
            parser: Parser::with_options(config.parse_options()),
            tab_width: config.tab_width,
            files,
            file_list_state: ListState::default(),
            view: View::Files,
            root: None,
            entries: Vec::new(),
            outline_state: ListState::default(),
            current_content: Vec::new(),
        };

        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
        }
        // A single file opens straight into its outline
        if app.files.len() == 1 {
            app.open_selected_file();
        } else {
            app.update_content_for_selection();
        }

        app
    }

    fn state_mut(&mut self) -> (&mut ListState, usize) {
        match self.view {
            View::Files => (&mut self.file_list_state, self.files.len()),
            View::Outline => (&mut self.outline_state, self.entries.len()),
        }
    }

    fn next_item(&mut self) {
        let (state, len) = self.state_mut();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_item(&mut self) {
        let (state, len) = self.state_mut();
        if len == 0 {
            return;
        }
        let i = match state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        state.select(Some(i));
        self.update_content_for_selection();
    }

    fn open_selected_file(&mut self) {
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        match self.parser.parse_file(path) {
            Ok(root) => {
                log::info!("Parsed {}", path.display());
                for diagnostic in root.diagnostics() {
                    log::warn!("{}: {diagnostic}", path.display());
                }
                self.entries = outline::outline(&root);
                self.root = Some(root);
                self.outline_state
                    .select((!self.entries.is_empty()).then_some(0));
                self.view = View::Outline;
                self.update_content_for_selection();
            }
            Err(e) => {
                self.current_content = vec![format!("Error parsing {}: {e}", path.display())];
            }
        }
    }

    fn back_to_files(&mut self) {
        if self.files.len() > 1 {
            self.view = View::Files;
            self.root = None;
            self.entries.clear();
            self.update_content_for_selection();
        }
    }

    fn update_content_for_selection(&mut self) {
        self.current_content = match self.view {
            View::Files => match self
                .file_list_state
                .selected()
                .and_then(|i| self.files.get(i))
            {
                Some(path) => vec![
                    path.display().to_string(),
                    String::new(),
                    "Press Enter to parse".to_string(),
                ],
                None => Vec::new(),
            },
            View::Outline => self.render_selected_node(),
        };
    }

    fn render_selected_node(&self) -> Vec<String> {
        let Some(root) = &self.root else {
            return Vec::new();
        };
        let mut lines = Vec::new();

        if let Some(entry) = self
            .outline_state
            .selected()
            .and_then(|i| self.entries.get(i))
            && let Some(node) = outline::node_at(root, &entry.path)
        {
            if let Some(span) = entry.span {
                lines.push(format!(
                    "{} at bytes {}..{}, lines {}..{}",
                    entry.kind, span.start, span.end, span.start_line, span.end_line
                ));
                lines.push(String::new());
            }
            let tab = " ".repeat(self.tab_width);
            lines.extend(node.string().replace('\t', &tab).lines().map(str::to_string));
        }

        if !root.diagnostics().is_empty() {
            lines.push(String::new());
            lines.extend(root.diagnostics().iter().map(|d| format!("! {d}")));
        }

        lines
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let files = if args.len() == 2 {
        let path = PathBuf::from(&args[1]);
        if !path.is_file() {
            eprintln!("Error: '{}' is not a file", path.display());
            process::exit(1);
        }
        vec![path]
    } else if args.len() == 1 {
        let Some(documents_path) = config.documents_path.as_deref() else {
            eprintln!("Error: No file provided and no documents_path configured");
            eprintln!("Usage: {} <file.tex>", args[0]);
            eprintln!("Or set documents_path in {}", config_path.display());
            process::exit(1);
        };
        match list_documents(documents_path) {
            Ok(files) => files,
            Err(e) => {
                eprintln!(
                    "Error: Documents path '{}' from config file '{}' is invalid: {e}",
                    documents_path.display(),
                    config_path.display()
                );
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [file.tex]", args[0]);
        process::exit(1);
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(files, &config);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn list_documents(documents_path: &Path) -> Result<Vec<PathBuf>, io::IoError> {
    let files = io::scan_tex_files(documents_path)?;
    log::info!(
        "Found {} .tex files under {}",
        files.len(),
        documents_path.display()
    );
    Ok(files)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Enter => {
                    if matches!(app.view, View::Files) {
                        app.open_selected_file();
                    }
                }
                KeyCode::Esc | KeyCode::Backspace => app.back_to_files(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
        .split(rows[0]);

    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);

    match app.view {
        View::Files => {
            let items: Vec<ListItem> = app
                .files
                .iter()
                .map(|path| ListItem::new(Line::from(Span::raw(path.display().to_string()))))
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Files"))
                .highlight_style(highlight);
            f.render_stateful_widget(list, chunks[0], &mut app.file_list_state);
        }
        View::Outline => {
            let items: Vec<ListItem> = app
                .entries
                .iter()
                .map(|entry| {
                    let indent = "  ".repeat(entry.depth);
                    ListItem::new(Line::from(vec![
                        Span::raw(indent),
                        Span::styled(format!("{} ", entry.kind), Style::default().fg(Color::Cyan)),
                        Span::raw(entry.label.clone()),
                    ]))
                })
                .collect();
            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL).title("Outline"))
                .highlight_style(highlight);
            f.render_stateful_widget(list, chunks[0], &mut app.outline_state);
        }
    }

    let content_text: Vec<Line> = if app.current_content.is_empty() {
        vec![Line::from("Nothing selected")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(Span::raw(line.clone())))
            .collect()
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Source"))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous | ↓/j: Next | Enter: Parse file | Esc: Back to files",
    ));
    f.render_widget(help, rows[1]);
}
