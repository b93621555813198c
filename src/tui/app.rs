use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};

use crate::collection::CarSystem;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{AddCarState, HelpState, draw_add_car, draw_help};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Enter a new car.
    AddCar,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// The car system is injected by the caller; the app only ever reaches it
/// through the [`CarSystem`] trait.
pub struct App<S: CarSystem> {
    screen: Screen,
    system: S,
    add_car: AddCarState,
    help: HelpState,
    status: StatusBarContext,
    should_quit: bool,
}

impl<S: CarSystem> App<S> {
    /// Creates a new `App` starting on the [`Screen::AddCar`] screen.
    pub fn new(system: S) -> Self {
        let status = StatusBarContext::from_system(&system);
        Self {
            screen: Screen::AddCar,
            system,
            add_car: AddCarState::new(),
            help: HelpState::new(),
            status,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::AddCar => draw_add_car(&self.add_car, frame, main_area),
            Screen::Help => draw_help(&self.help, frame, main_area),
        }
        draw_status_bar(&self.status, frame, status_area);
    }

    /// Handles a key event by passing it to the current screen and applying
    /// the returned action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::AddCar => self.add_car.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::AddCar(car) => {
                let label = car.to_string();
                let result = self.system.add_new_car(car);
                match &result {
                    Ok(()) => {
                        info!("added {label}");
                        self.system.set_cars_updated();
                    }
                    Err(e) => warn!("could not add {label}: {e}"),
                }
                self.add_car.show_add_result(result);
                self.refresh_status();
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Re-reads the status bar counts if the collection reported a change.
    fn refresh_status(&mut self) {
        if self.system.take_cars_updated() {
            self.status = StatusBarContext::from_system(&self.system);
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the car system.
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Returns the add-car screen state.
    pub fn add_car(&self) -> &AddCarState {
        &self.add_car
    }

    /// Returns the status bar context currently displayed.
    pub fn status(&self) -> StatusBarContext {
        self.status
    }
}
