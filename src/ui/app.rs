//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::fetcher::{FetchCommand, SnapshotUpdate};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone, Copy)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub refresh_secs: u64,
}

impl UIConfig {
    pub fn new(with_background_color: bool, refresh_secs: u64) -> Self {
        Self {
            with_background_color,
            refresh_secs,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the alarm tables and status.
    Dashboard(Box<DashboardState>),
}

/// Application state
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment in which the application is running.
    environment: Environment,

    /// Base URL of the alarm server being watched.
    server_url: String,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives events from worker threads.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Receives snapshot updates from the fetch worker.
    snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,

    /// Sends manual refresh requests to the fetch worker.
    command_sender: mpsc::Sender<FetchCommand>,

    /// Broadcasts shutdown signal to worker threads.
    shutdown_sender: broadcast::Sender<()>,

    /// UI configuration.
    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        server_url: String,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        snapshot_receiver: mpsc::Receiver<SnapshotUpdate>,
        command_sender: mpsc::Sender<FetchCommand>,
        shutdown_sender: broadcast::Sender<()>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            server_url,
            current_screen: Screen::Splash,
            event_receiver,
            snapshot_receiver,
            command_sender,
            shutdown_sender,
            ui_config,
        }
    }

    fn dashboard_state(&self) -> DashboardState {
        DashboardState::new(
            self.environment,
            self.server_url.clone(),
            self.start_time,
            self.ui_config,
        )
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        // Queue all incoming worker events and snapshot updates
        while let Ok(event) = app.event_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_event(event);
            }
        }
        while let Ok(update) = app.snapshot_receiver.try_recv() {
            if let Screen::Dashboard(state) = &mut app.current_screen {
                state.add_update(update);
            }
        }

        // Update the state based on the current screen
        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.current_screen = Screen::Dashboard(Box::new(app.dashboard_state()));
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Send shutdown signal to workers
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any key press will skip the splash screen
                        app.current_screen = Screen::Dashboard(Box::new(
                            DashboardState::new(
                                app.environment,
                                app.server_url.clone(),
                                app.start_time,
                                app.ui_config,
                            ),
                        ));
                    }
                    Screen::Dashboard(state) => match key.code {
                        KeyCode::Tab => state.toggle_focus(),
                        KeyCode::Left => state.select_previous_column(),
                        KeyCode::Right => state.select_next_column(),
                        KeyCode::Char('s') | KeyCode::Enter => state.sort_selected(),
                        KeyCode::Char('r') => {
                            let _ = app.command_sender.try_send(FetchCommand::RefreshNow);
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}
