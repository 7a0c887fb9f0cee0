//! Console-text presentation
//!
//! Fallback frontend for environments without a display. Renders the same
//! prompts as the dialog frontend on stdout and reads replies line by line
//! from stdin. EOF at the menu exits; EOF or "stop" during grade entry
//! returns to the menu.

use std::io::{self, BufRead, Write};

use crate::constants::APP_NAME;
use crate::grades::format_score;
use crate::session::{Prompt, Reply, Session, MENU_ITEMS, NO_GRADES_MSG};
use tracing::info;

pub fn run() -> io::Result<()> {
    info!("Running in console mode");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&mut stdin.lock(), &mut stdout.lock())
}

/// The console loop, generic over its streams so tests can script it.
pub fn run_with<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    let mut session = Session::new();

    while !session.is_done() {
        let reply = match session.prompt() {
            Prompt::Welcome => {
                writeln!(out, "=== {} ===", APP_NAME)?;
                writeln!(
                    out,
                    "Track grades and see your running average and letter grade."
                )?;
                writeln!(out, "Add as many grades as you like.")?;
                Reply::Ack
            }
            Prompt::Menu { error } => {
                if let Some(e) = error {
                    writeln!(out, "{}", e)?;
                }
                writeln!(out)?;
                writeln!(out, "Menu")?;
                for (i, item) in MENU_ITEMS.iter().enumerate() {
                    writeln!(out, "  {}. {}", i + 1, item)?;
                }
                write!(out, "Enter a number (1-4): ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(line) => Reply::Text(line),
                    None => Reply::Cancel,
                }
            }
            Prompt::GradeEntry { error } => {
                if let Some(e) = error {
                    writeln!(out, "{}", e)?;
                }
                write!(out, "Enter a grade (0-100), or 'stop' to finish: ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(line) if line.trim().eq_ignore_ascii_case("stop") => Reply::Cancel,
                    Some(line) => Reply::Text(line),
                    None => Reply::Cancel,
                }
            }
            Prompt::GradeAdded { value } => {
                writeln!(out, "Grade {} added.", format_score(value))?;
                Reply::Ack
            }
            Prompt::AskAnother => {
                write!(out, "Add another grade? (y/n): ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(line) if line.trim().eq_ignore_ascii_case("y") => Reply::Yes,
                    _ => Reply::No,
                }
            }
            Prompt::Average(summary) => {
                match summary {
                    Some(s) => writeln!(out, "Current Average: {}%", format_score(s.average))?,
                    None => writeln!(out, "{}", NO_GRADES_MSG)?,
                }
                Reply::Ack
            }
            Prompt::LetterGrade(summary) => {
                match summary {
                    Some(s) => {
                        writeln!(out, "Average: {}%", format_score(s.average))?;
                        writeln!(out, "Letter Grade: {}", s.letter)?;
                    }
                    None => writeln!(out, "{}", NO_GRADES_MSG)?,
                }
                Reply::Ack
            }
            Prompt::Goodbye(summary) => {
                writeln!(out)?;
                writeln!(out, "Thank you for using {}!", APP_NAME)?;
                if let Some(s) = summary {
                    writeln!(out, "Final Statistics:")?;
                    writeln!(out, "  Total Grades: {}", s.count)?;
                    writeln!(out, "  Final Average: {}%", format_score(s.average))?;
                    writeln!(out, "  Letter Grade: {}", s.letter)?;
                }
                Reply::Ack
            }
            Prompt::Done => break,
        };
        session.handle(reply);
    }

    info!("Console session finished");
    Ok(())
}

/// Read one line, without the trailing newline. `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run_with(&mut input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_session_with_three_grades() {
        let out = transcript("1\n80\ny\n90\ny\n100\nn\n2\n3\n4\n");
        assert!(out.contains("=== Grade Calculator ==="));
        assert!(out.contains("Grade 80 added."));
        assert!(out.contains("Grade 100 added."));
        assert!(out.contains("Current Average: 90%"));
        assert!(out.contains("Letter Grade: A"));
        assert!(out.contains("Total Grades: 3"));
        assert!(out.contains("Final Average: 90%"));
    }

    #[test]
    fn single_grade_failing_letter() {
        let out = transcript("1\n55\nn\n3\n4\n");
        assert!(out.contains("Grade 55 added."));
        assert!(out.contains("Average: 55%"));
        assert!(out.contains("Letter Grade: F"));
    }

    #[test]
    fn invalid_menu_input_reprompts() {
        let out = transcript("abc\n9\n4\n");
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Please enter a number between 1 and 4."));
        // Three menu renderings: initial plus one per rejected input.
        assert_eq!(out.matches("Enter a number (1-4):").count(), 3);
    }

    #[test]
    fn invalid_grades_reprompt_and_stop_returns_to_menu() {
        let out = transcript("1\n105\n-3\noops\nstop\n4\n");
        assert_eq!(out.matches("Grade must be between 0 and 100.").count(), 2);
        assert!(out.contains("Please enter a valid number (e.g., 88 or 92.5)."));
        assert!(!out.contains("added."));
        // No grades were recorded, so the exit summary is omitted.
        assert!(!out.contains("Final Statistics:"));
    }

    #[test]
    fn empty_book_reports_no_data() {
        let out = transcript("2\n3\n4\n");
        assert_eq!(out.matches("No grades entered yet.").count(), 2);
        assert!(out.contains("Thank you for using Grade Calculator!"));
        assert!(!out.contains("Final Statistics:"));
    }

    #[test]
    fn eof_at_menu_exits_with_summary() {
        let out = transcript("1\n92.5\nn\n");
        assert!(out.contains("Grade 92.5 added."));
        assert!(out.contains("Final Average: 92.5%"));
        assert!(out.contains("Letter Grade: A"));
    }
}
