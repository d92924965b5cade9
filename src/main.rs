use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{fs, io, path::PathBuf, sync::atomic::Ordering, time::Instant};

use docsearch::api::ContentClient;
use docsearch::config::{Config, UiConfig};
use docsearch::controller::{Behavior, SearchController};
use docsearch::services::search::{spawn_search_worker, SearchRequest, SearchResponse};
use docsearch::ui;
use docsearch::ui::dropdown::HyperlinkRenderer;
use docsearch::utils::{log_debug, DEBUG_MODE};

/// Document search TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir log file
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

struct App {
    controller: SearchController,
    ui: UiConfig,
    renderer: HyperlinkRenderer,
    request_tx: tokio::sync::mpsc::UnboundedSender<SearchRequest>,
    response_rx: tokio::sync::mpsc::UnboundedReceiver<SearchResponse>,
    should_quit: bool,
}

impl App {
    fn new(config: Config) -> Self {
        let client = std::sync::Arc::new(ContentClient::new(config.api, config.search));

        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = tokio::sync::mpsc::unbounded_channel();
        spawn_search_worker(client, request_rx, response_tx);

        Self {
            controller: SearchController::new(Behavior::from(&config.behavior)),
            ui: config.ui,
            renderer: HyperlinkRenderer,
            request_tx,
            response_rx,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.controller.close(),
            KeyCode::Down => {
                self.controller.reopen();
                self.controller.select_next();
            }
            KeyCode::Up => {
                self.controller.reopen();
                self.controller.select_prev();
            }
            KeyCode::Enter => {
                if let Some(href) = self.controller.selected_href() {
                    log_debug(&format!("DEBUG [APP]: Opening {}", href));
                    if let Err(e) = open::that(href) {
                        log_debug(&format!("DEBUG [APP]: Failed to open {}: {}", href, e));
                    }
                }
            }
            KeyCode::Backspace => self.controller.backspace(Instant::now()),
            KeyCode::Char(c) => self.controller.push_char(c, Instant::now()),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, frame_area: Rect) {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return;
        }

        let layout = ui::layout::widget_layout(frame_area);
        let dropdown_visible = self.controller.dropdown_visible();
        let inside =
            ui::layout::widget_contains(&layout, mouse.column, mouse.row, dropdown_visible);

        // A click on a visible result row selects it and follows the link
        if dropdown_visible {
            if let Some(index) = ui::layout::dropdown_hit_index(
                &layout,
                mouse.row,
                self.controller.results().len(),
            ) {
                self.controller.select(index);
                if let Some(href) = self.controller.selected_href() {
                    log_debug(&format!("DEBUG [APP]: Opening {}", href));
                    let _ = open::that(href);
                }
                return;
            }
        }

        self.controller.pointer_down(inside);
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/docsearch/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docsearch").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fall back to a config file next to the binary's working directory
    let local = PathBuf::from("docsearch.yaml");
    if local.exists() {
        return Ok(local);
    }

    let expected_path = dirs::config_dir()
        .map(|d| d.join("docsearch").join("config.yaml"))
        .unwrap_or_else(|| PathBuf::from("docsearch.yaml"));

    anyhow::bail!(
        "No config file found.\n\
         \n\
         Expected location: {}\n\
         \n\
         Minimal config:\n\
         \n\
         api:\n\
         \x20 base_url: https://<project>.api.sanity.io\n\
         \x20 dataset: production\n\
         search:\n\
         \x20 document_type: post\n\
         \x20 searchable_fields: [title, body]\n\
         \x20 result_fragment: '{{ \"title\": title, \"description\": description, \"href\": \"/posts/\" + slug.current }}'\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path.display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    // Determine config file path and load configuration
    let config_path = get_config_path(args.config)?;
    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    let config_str = fs::read_to_string(&config_path)?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    let mut app = App::new(config);

    // Setup terminal; mouse capture is scoped to the app lifetime so the
    // outside-click listener exists exactly while the widget is mounted
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.controller, &app.ui, &app.renderer);
        })?;

        if app.should_quit {
            break;
        }

        // Process completed searches (non-blocking); stale sequence numbers
        // are discarded inside the controller
        while let Ok(response) = app.response_rx.try_recv() {
            let SearchResponse::Completed { seq, term, results } = response;
            log_debug(&format!(
                "DEBUG [APP]: Search completed seq={} term={:?}",
                seq, term
            ));
            app.controller.apply_response(seq, results);
        }

        // Dispatch a search when the debounce deadline has elapsed
        if let Some(ticket) = app.controller.poll(Instant::now()) {
            let _ = app.request_tx.send(SearchRequest {
                seq: ticket.seq,
                term: ticket.term,
            });
        }

        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }
    }

    Ok(())
}
