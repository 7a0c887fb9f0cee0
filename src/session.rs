//! Interactive session state machine
//!
//! The session owns the grade book and the menu flow. Frontends ask it what
//! to show (`prompt`) and feed back what the user did (`handle`); neither
//! frontend carries any flow logic of its own, so dialog mode and console
//! mode stay semantically identical.

use crate::constants::{MENU_CHOICE_MAX, MENU_CHOICE_MIN};
use crate::grades::{GradeBook, GradeError, Summary};

/// Menu entries, in menu order (choices 1-4).
pub const MENU_ITEMS: [&str; 4] = [
    "Add a Grade",
    "View Current Average",
    "View Letter Grade",
    "Exit",
];

pub const NO_GRADES_MSG: &str = "No grades entered yet.";

/// Why a menu selection was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a number between 1 and 4.")]
    OutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGrade,
    ViewAverage,
    ViewLetter,
    Exit,
}

/// Parse a menu selection. Accepts an integer 1-4 with surrounding
/// whitespace; everything else is an error that re-prompts.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, MenuError> {
    let n: i64 = input.trim().parse().map_err(|_| MenuError::NotANumber)?;
    if n < MENU_CHOICE_MIN as i64 || n > MENU_CHOICE_MAX as i64 {
        return Err(MenuError::OutOfRange);
    }
    Ok(match n {
        1 => MenuChoice::AddGrade,
        2 => MenuChoice::ViewAverage,
        3 => MenuChoice::ViewLetter,
        _ => MenuChoice::Exit,
    })
}

/// What the frontend should present right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Welcome message, shown once at startup.
    Welcome,
    /// Main menu, optionally preceded by an input error.
    Menu { error: Option<MenuError> },
    /// Grade entry, optionally preceded by an input error.
    GradeEntry { error: Option<GradeError> },
    /// Confirmation that a grade was recorded.
    GradeAdded { value: f64 },
    /// "Add another grade?" yes/no question.
    AskAnother,
    /// Current average, `None` when no grades were recorded yet.
    Average(Option<Summary>),
    /// Average plus letter grade, `None` when no grades were recorded yet.
    LetterGrade(Option<Summary>),
    /// Goodbye message with the final statistics (omitted when empty).
    Goodbye(Option<Summary>),
    /// Terminal state; the frontend should stop.
    Done,
}

/// What the user did with the current prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Message dismissed / acknowledged.
    Ack,
    /// Text entered into an input prompt.
    Text(String),
    /// Prompt cancelled (dialog closed, or "stop"/EOF on the console).
    Cancel,
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Welcome,
    Menu(Option<MenuError>),
    GradeEntry(Option<GradeError>),
    GradeAdded(f64),
    AskAnother,
    ShowAverage,
    ShowLetter,
    Goodbye,
    Done,
}

pub struct Session {
    book: GradeBook,
    stage: Stage,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            book: GradeBook::new(),
            stage: Stage::Welcome,
        }
    }

    pub fn book(&self) -> &GradeBook {
        &self.book
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    pub fn prompt(&self) -> Prompt {
        match &self.stage {
            Stage::Welcome => Prompt::Welcome,
            Stage::Menu(error) => Prompt::Menu { error: *error },
            Stage::GradeEntry(error) => Prompt::GradeEntry { error: *error },
            Stage::GradeAdded(value) => Prompt::GradeAdded { value: *value },
            Stage::AskAnother => Prompt::AskAnother,
            Stage::ShowAverage => Prompt::Average(self.book.summary()),
            Stage::ShowLetter => Prompt::LetterGrade(self.book.summary()),
            Stage::Goodbye => Prompt::Goodbye(self.book.summary()),
            Stage::Done => Prompt::Done,
        }
    }

    /// Advance the state machine with the user's reply to the current
    /// prompt. Invalid input never advances past the prompt it belongs to.
    pub fn handle(&mut self, reply: Reply) {
        self.stage = match (self.stage.clone(), reply) {
            (Stage::Welcome, _) => Stage::Menu(None),

            (Stage::Menu(_), Reply::Text(input)) => match parse_menu_choice(&input) {
                Ok(MenuChoice::AddGrade) => Stage::GradeEntry(None),
                Ok(MenuChoice::ViewAverage) => Stage::ShowAverage,
                Ok(MenuChoice::ViewLetter) => Stage::ShowLetter,
                Ok(MenuChoice::Exit) => Stage::Goodbye,
                Err(e) => Stage::Menu(Some(e)),
            },
            // Cancelling the menu is treated as choosing Exit.
            (Stage::Menu(_), Reply::Cancel) => Stage::Goodbye,
            (stage @ Stage::Menu(_), _) => stage,

            (Stage::GradeEntry(_), Reply::Text(input)) => {
                match input.trim().parse::<f64>() {
                    Ok(value) => match self.book.add(value) {
                        Ok(()) => {
                            tracing::debug!(value, count = self.book.len(), "Grade added");
                            Stage::GradeAdded(value)
                        }
                        Err(e) => Stage::GradeEntry(Some(e)),
                    },
                    Err(_) => Stage::GradeEntry(Some(GradeError::NotANumber)),
                }
            }
            (Stage::GradeEntry(_), Reply::Cancel) => Stage::Menu(None),
            (stage @ Stage::GradeEntry(_), _) => stage,

            (Stage::GradeAdded(_), _) => Stage::AskAnother,

            (Stage::AskAnother, Reply::Yes) => Stage::GradeEntry(None),
            (Stage::AskAnother, _) => Stage::Menu(None),

            (Stage::ShowAverage, _) => Stage::Menu(None),
            (Stage::ShowLetter, _) => Stage::Menu(None),

            (Stage::Goodbye, _) => Stage::Done,
            (Stage::Done, _) => Stage::Done,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::Letter;

    fn text(s: &str) -> Reply {
        Reply::Text(s.to_string())
    }

    /// Drive a fresh session past the welcome message to the menu.
    fn at_menu() -> Session {
        let mut session = Session::new();
        assert_eq!(session.prompt(), Prompt::Welcome);
        session.handle(Reply::Ack);
        assert_eq!(session.prompt(), Prompt::Menu { error: None });
        session
    }

    fn add_grades(session: &mut Session, grades: &[&str]) {
        for (i, g) in grades.iter().enumerate() {
            session.handle(text("1"));
            assert!(matches!(session.prompt(), Prompt::GradeEntry { error: None }));
            session.handle(text(g));
            assert!(matches!(session.prompt(), Prompt::GradeAdded { .. }));
            session.handle(Reply::Ack);
            assert_eq!(session.prompt(), Prompt::AskAnother);
            session.handle(Reply::No);
            assert_eq!(session.prompt(), Prompt::Menu { error: None });
            assert_eq!(session.book().len(), i + 1);
        }
    }

    #[test]
    fn menu_rejects_bad_input_without_advancing() {
        let mut session = at_menu();
        session.handle(text("abc"));
        assert_eq!(
            session.prompt(),
            Prompt::Menu {
                error: Some(MenuError::NotANumber)
            }
        );
        session.handle(text("7"));
        assert_eq!(
            session.prompt(),
            Prompt::Menu {
                error: Some(MenuError::OutOfRange)
            }
        );
        session.handle(text("0"));
        assert_eq!(
            session.prompt(),
            Prompt::Menu {
                error: Some(MenuError::OutOfRange)
            }
        );
        session.handle(text(" 2 "));
        assert!(matches!(session.prompt(), Prompt::Average(None)));
    }

    #[test]
    fn cancel_at_menu_exits() {
        let mut session = at_menu();
        session.handle(Reply::Cancel);
        assert_eq!(session.prompt(), Prompt::Goodbye(None));
        session.handle(Reply::Ack);
        assert!(session.is_done());
    }

    #[test]
    fn add_three_grades_then_view_average_and_letter() {
        let mut session = at_menu();

        // One invocation of Add can record several grades.
        session.handle(text("1"));
        for g in ["80", "90"] {
            session.handle(text(g));
            session.handle(Reply::Ack);
            assert_eq!(session.prompt(), Prompt::AskAnother);
            session.handle(Reply::Yes);
        }
        session.handle(text("100"));
        session.handle(Reply::Ack);
        session.handle(Reply::No);
        assert_eq!(session.prompt(), Prompt::Menu { error: None });

        session.handle(text("2"));
        match session.prompt() {
            Prompt::Average(Some(summary)) => {
                assert_eq!(summary.count, 3);
                assert!((summary.average - 90.0).abs() < 1e-9);
            }
            other => panic!("unexpected prompt: {:?}", other),
        }
        session.handle(Reply::Ack);

        session.handle(text("3"));
        match session.prompt() {
            Prompt::LetterGrade(Some(summary)) => assert_eq!(summary.letter, Letter::A),
            other => panic!("unexpected prompt: {:?}", other),
        }
        session.handle(Reply::Ack);

        session.handle(text("4"));
        match session.prompt() {
            Prompt::Goodbye(Some(summary)) => {
                assert_eq!(summary.count, 3);
                assert_eq!(summary.letter, Letter::A);
            }
            other => panic!("unexpected prompt: {:?}", other),
        }
    }

    #[test]
    fn invalid_grade_reprompts_and_leaves_book_unchanged() {
        let mut session = at_menu();
        session.handle(text("1"));
        session.handle(text("105"));
        assert_eq!(
            session.prompt(),
            Prompt::GradeEntry {
                error: Some(GradeError::OutOfRange)
            }
        );
        session.handle(text("nope"));
        assert_eq!(
            session.prompt(),
            Prompt::GradeEntry {
                error: Some(GradeError::NotANumber)
            }
        );
        assert_eq!(session.book().len(), 0);

        // Cancelling grade entry returns to the menu, not to exit.
        session.handle(Reply::Cancel);
        assert_eq!(session.prompt(), Prompt::Menu { error: None });
        assert_eq!(session.book().len(), 0);
    }

    #[test]
    fn single_grade_yields_failing_letter() {
        let mut session = at_menu();
        add_grades(&mut session, &["55"]);
        session.handle(text("3"));
        match session.prompt() {
            Prompt::LetterGrade(Some(summary)) => {
                assert_eq!(summary.average, 55.0);
                assert_eq!(summary.letter, Letter::F);
            }
            other => panic!("unexpected prompt: {:?}", other),
        }
    }

    #[test]
    fn empty_book_reports_no_data_not_error() {
        let mut session = at_menu();
        session.handle(text("2"));
        assert_eq!(session.prompt(), Prompt::Average(None));
        session.handle(Reply::Ack);
        session.handle(text("3"));
        assert_eq!(session.prompt(), Prompt::LetterGrade(None));
        session.handle(Reply::Ack);
        session.handle(text("4"));
        // Exit summary omits statistics when nothing was recorded.
        assert_eq!(session.prompt(), Prompt::Goodbye(None));
    }
}
