//! Grade store and statistics

use crate::constants::{GRADE_MAX, GRADE_MIN};

/// Why a grade entry was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    #[error("Please enter a valid number (e.g., 88 or 92.5).")]
    NotANumber,
    #[error("Grade must be between 0 and 100.")]
    OutOfRange,
}

/// Letter grade bands, inclusive on the lower edge of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Letter::A
        } else if average >= 80.0 {
            Letter::B
        } else if average >= 70.0 {
            Letter::C
        } else if average >= 60.0 {
            Letter::D
        } else {
            Letter::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived statistics for a non-empty grade list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub letter: Letter,
}

/// Ordered, append-only list of grades for one session.
#[derive(Debug, Default)]
pub struct GradeBook {
    grades: Vec<f64>,
}

impl GradeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a grade. Rejects non-finite values and values outside
    /// [0, 100] without touching the list.
    pub fn add(&mut self, value: f64) -> Result<(), GradeError> {
        if !value.is_finite() {
            return Err(GradeError::NotANumber);
        }
        if !(GRADE_MIN..=GRADE_MAX).contains(&value) {
            return Err(GradeError::OutOfRange);
        }
        self.grades.push(value);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Arithmetic mean. `None` when no grades have been added.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: f64 = self.grades.iter().sum();
        Some(sum / self.grades.len() as f64)
    }

    pub fn summary(&self) -> Option<Summary> {
        self.average().map(|average| Summary {
            count: self.grades.len(),
            average,
            letter: Letter::from_average(average),
        })
    }
}

/// Format a score with at most two decimal places, trailing zeros trimmed:
/// 90 -> "90", 92.5 -> "92.5", 86.666 -> "86.67".
pub fn format_score(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_is_arithmetic_mean() {
        let mut book = GradeBook::new();
        for g in [80.0, 90.0, 100.0] {
            book.add(g).unwrap();
        }
        let avg = book.average().unwrap();
        assert!((avg - 90.0).abs() < 1e-9);
        assert_eq!(book.summary().unwrap().letter, Letter::A);
    }

    #[test]
    fn single_failing_grade() {
        let mut book = GradeBook::new();
        book.add(55.0).unwrap();
        assert_eq!(book.average(), Some(55.0));
        assert_eq!(book.summary().unwrap().letter, Letter::F);
    }

    #[test]
    fn empty_book_has_no_average() {
        let book = GradeBook::new();
        assert!(book.is_empty());
        assert_eq!(book.average(), None);
        assert!(book.summary().is_none());
    }

    #[test]
    fn out_of_range_grades_are_rejected() {
        let mut book = GradeBook::new();
        assert_eq!(book.add(-0.01), Err(GradeError::OutOfRange));
        assert_eq!(book.add(100.01), Err(GradeError::OutOfRange));
        assert_eq!(book.add(f64::NAN), Err(GradeError::NotANumber));
        assert_eq!(book.add(f64::INFINITY), Err(GradeError::NotANumber));
        assert_eq!(book.len(), 0);

        book.add(0.0).unwrap();
        book.add(100.0).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn letter_bands_are_inclusive_on_lower_edge() {
        assert_eq!(Letter::from_average(100.0), Letter::A);
        assert_eq!(Letter::from_average(90.0), Letter::A);
        assert_eq!(Letter::from_average(89.99), Letter::B);
        assert_eq!(Letter::from_average(80.0), Letter::B);
        assert_eq!(Letter::from_average(79.99), Letter::C);
        assert_eq!(Letter::from_average(70.0), Letter::C);
        assert_eq!(Letter::from_average(69.99), Letter::D);
        assert_eq!(Letter::from_average(60.0), Letter::D);
        assert_eq!(Letter::from_average(59.99), Letter::F);
        assert_eq!(Letter::from_average(0.0), Letter::F);
    }

    #[test]
    fn letter_is_monotonic_in_average() {
        let order = |l: Letter| match l {
            Letter::F => 0,
            Letter::D => 1,
            Letter::C => 2,
            Letter::B => 3,
            Letter::A => 4,
        };
        let mut prev = 0;
        for tenths in 0..=1000 {
            let rank = order(Letter::from_average(tenths as f64 / 10.0));
            assert!(rank >= prev);
            prev = rank;
        }
    }

    #[test]
    fn score_formatting_trims_trailing_zeros() {
        assert_eq!(format_score(90.0), "90");
        assert_eq!(format_score(92.5), "92.5");
        assert_eq!(format_score(86.666), "86.67");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(100.0), "100");
    }
}
