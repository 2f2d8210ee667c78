//! Application state: one intro splash, then the quiz loop.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use riddle_core::{shuffled_options, Answer, QuizSession, SessionStats};
use tracing::{debug, info};

use crate::anim::RevealAnimation;
use crate::fx::Fog;

/// Seconds before the intro dismisses itself.
const INTRO_SECS: f32 = 4.0;
/// Seconds the wrong-answer flash and card shake last.
const SHAKE_SECS: f32 = 0.5;

pub enum Screen {
    Intro,
    Quiz,
}

pub struct WrongFlash {
    pub option: usize,
    pub left: f32,
}

pub struct App {
    pub session: QuizSession,
    pub options: Vec<String>,
    pub reveal: Option<RevealAnimation>,
    pub wrong_flash: Option<WrongFlash>,
    pub screen: Screen,
    pub intro_elapsed: f32,
    pub fog: Fog,
    pub effects: bool,
    pub width: u16,
    pub height: u16,
    rng: StdRng,
    quit: bool,
}

impl App {
    pub fn new(session: QuizSession, mut rng: StdRng, effects: bool, width: u16, height: u16) -> Self {
        let fog = Fog::new(width, height, &mut rng);
        let mut app = Self {
            session,
            options: Vec::new(),
            reveal: None,
            wrong_flash: None,
            screen: Screen::Intro,
            intro_elapsed: 0.0,
            fog,
            effects,
            width,
            height,
            rng,
            quit: false,
        };
        app.enter_riddle();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// Refresh per-riddle presentation state after navigation.
    fn enter_riddle(&mut self) {
        let riddle = self.session.current().clone();
        self.options = shuffled_options(&riddle, &mut self.rng);
        self.wrong_flash = None;
        self.reveal = if self.session.current_record().is_solved() {
            Some(RevealAnimation::settled(&riddle.question, &riddle.answer))
        } else {
            None
        };
        debug!(riddle = %riddle.id, "entered riddle");
    }

    fn start_reveal(&mut self) {
        let riddle = self.session.current();
        self.reveal = Some(RevealAnimation::new(&riddle.question, &riddle.answer));
        self.wrong_flash = None;
    }

    fn choose(&mut self, index: usize) {
        if self.reveal.is_some() || index >= self.options.len() {
            return;
        }
        let option = self.options[index].clone();
        let riddle_id = self.session.current().id.clone();
        match self.session.choose(&option, Utc::now()) {
            Answer::Correct => {
                info!(riddle = %riddle_id, "solved");
                self.start_reveal();
            }
            Answer::Incorrect => {
                info!(riddle = %riddle_id, option = %option, "wrong guess");
                self.wrong_flash = Some(WrongFlash {
                    option: index,
                    left: SHAKE_SECS,
                });
            }
            Answer::AlreadySolved => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(self.screen, Screen::Intro) {
            // Any key dismisses the splash.
            self.screen = Screen::Quiz;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.choose(index);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.session.next();
                self.enter_riddle();
            }
            KeyCode::Left | KeyCode::Char('p') => {
                self.session.prev();
                self.enter_riddle();
            }
            KeyCode::Char('r') => {
                if self.reveal.is_none() {
                    let riddle_id = self.session.current().id.clone();
                    self.session.reveal(Utc::now());
                    info!(riddle = %riddle_id, "revealed");
                    self.start_reveal();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let settled = self.reveal.as_ref().is_some_and(RevealAnimation::is_settled);
                if settled {
                    self.session.next();
                    self.enter_riddle();
                }
            }
            _ => {}
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.effects {
            self.fog.update(dt);
        }
        if let Screen::Intro = self.screen {
            self.intro_elapsed += dt;
            if self.intro_elapsed >= INTRO_SECS {
                self.screen = Screen::Quiz;
            }
            return;
        }
        if let Some(reveal) = &mut self.reveal {
            reveal.update(dt);
        }
        if let Some(flash) = &mut self.wrong_flash {
            flash.left -= dt;
            if flash.left <= 0.0 {
                self.wrong_flash = None;
            }
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.fog.resize(width, height);
    }

    /// Horizontal card offset while the wrong-answer shake is active.
    pub fn shake_offset(&self) -> i16 {
        match &self.wrong_flash {
            Some(flash) => {
                if ((flash.left * 30.0) as i32) % 2 == 0 {
                    1
                } else {
                    -1
                }
            }
            None => 0,
        }
    }

    /// True once the current riddle's reveal has finished settling.
    pub fn is_settled(&self) -> bool {
        self.reveal.as_ref().is_some_and(RevealAnimation::is_settled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use rand::SeedableRng;
    use riddle_core::Riddle;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        let riddles = vec![
            Riddle {
                id: "1".to_string(),
                question: "FUNERAL".to_string(),
                answer: "REAL FUN".to_string(),
                options: vec!["REAL FUN".to_string(), "FEAR RUN".to_string()],
            },
            Riddle {
                id: "2".to_string(),
                question: "THE EYES".to_string(),
                answer: "THEY SEE".to_string(),
                options: vec!["THEY SEE".to_string(), "THE YES".to_string()],
            },
        ];
        let session = QuizSession::new(riddles).unwrap();
        App::new(session, StdRng::seed_from_u64(1), false, 80, 24)
    }

    #[test]
    fn any_key_dismisses_the_intro() {
        let mut app = app();
        assert!(matches!(app.screen, Screen::Intro));
        app.handle_key(press(KeyCode::Char('x')));
        assert!(matches!(app.screen, Screen::Quiz));
    }

    #[test]
    fn intro_times_out_on_its_own() {
        let mut app = app();
        app.update(INTRO_SECS + 0.1);
        assert!(matches!(app.screen, Screen::Quiz));
    }

    #[test]
    fn wrong_choice_flashes_and_clears() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        let wrong = app
            .options
            .iter()
            .position(|o| o != &app.session.current().answer)
            .unwrap();
        app.handle_key(press(KeyCode::Char(('1' as u8 + wrong as u8) as char)));
        assert!(app.wrong_flash.is_some());
        assert_ne!(app.shake_offset(), 0);
        app.update(SHAKE_SECS + 0.1);
        assert!(app.wrong_flash.is_none());
    }

    #[test]
    fn correct_choice_starts_the_reveal() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        let right = app
            .options
            .iter()
            .position(|o| o == &app.session.current().answer)
            .unwrap();
        app.handle_key(press(KeyCode::Char(('1' as u8 + right as u8) as char)));
        assert!(app.reveal.is_some());
        assert!(app.session.current_record().is_solved());
    }

    #[test]
    fn options_reshuffle_is_seed_deterministic() {
        let first = app().options.clone();
        let second = app().options.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn returning_to_a_solved_riddle_shows_it_settled() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('r')));
        assert!(app.reveal.is_some());
        app.handle_key(press(KeyCode::Right));
        assert!(app.reveal.is_none());
        app.handle_key(press(KeyCode::Left));
        assert!(app.is_settled());
    }
}
