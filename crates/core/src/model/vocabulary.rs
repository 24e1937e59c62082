use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Raised when persisted text does not name a known mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VocabularyError {
    #[error("unknown quiz mode: {0}")]
    UnknownQuizMode(String),

    #[error("unknown timer mode: {0}")]
    UnknownTimerMode(String),
}

//
// ─── QUIZ MODE ────────────────────────────────────────────────────────────────
//

/// Direction of the chord quiz.
///
/// - `NumberToChord`: a scale degree is shown, the player names the chord
/// - `ChordToNumber`: a chord is shown, the player names the scale degree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMode {
    #[serde(rename = "number-to-chord")]
    NumberToChord,
    #[serde(rename = "chord-to-number")]
    ChordToNumber,
}

impl QuizMode {
    pub const ALL: [QuizMode; 2] = [QuizMode::NumberToChord, QuizMode::ChordToNumber];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuizMode::NumberToChord => "number-to-chord",
            QuizMode::ChordToNumber => "chord-to-number",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizMode {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number-to-chord" => Ok(QuizMode::NumberToChord),
            "chord-to-number" => Ok(QuizMode::ChordToNumber),
            other => Err(VocabularyError::UnknownQuizMode(other.to_owned())),
        }
    }
}

//
// ─── TIMER MODE ───────────────────────────────────────────────────────────────
//

/// Time limit for a round: untimed, or 15, 30 or 60 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerMode {
    #[serde(rename = "untimed")]
    Untimed,
    #[serde(rename = "15")]
    Seconds15,
    #[serde(rename = "30")]
    Seconds30,
    #[serde(rename = "60")]
    Seconds60,
}

impl TimerMode {
    pub const ALL: [TimerMode; 4] = [
        TimerMode::Untimed,
        TimerMode::Seconds15,
        TimerMode::Seconds30,
        TimerMode::Seconds60,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimerMode::Untimed => "untimed",
            TimerMode::Seconds15 => "15",
            TimerMode::Seconds30 => "30",
            TimerMode::Seconds60 => "60",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimerMode {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "untimed" => Ok(TimerMode::Untimed),
            "15" => Ok(TimerMode::Seconds15),
            "30" => Ok(TimerMode::Seconds30),
            "60" => Ok(TimerMode::Seconds60),
            other => Err(VocabularyError::UnknownTimerMode(other.to_owned())),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_mode_parses_wire_names() {
        assert_eq!(
            "number-to-chord".parse::<QuizMode>().unwrap(),
            QuizMode::NumberToChord
        );
        assert_eq!(
            "chord-to-number".parse::<QuizMode>().unwrap(),
            QuizMode::ChordToNumber
        );
        let err = "chord-to-chord".parse::<QuizMode>().unwrap_err();
        assert_eq!(err, VocabularyError::UnknownQuizMode("chord-to-chord".into()));
    }

    #[test]
    fn timer_mode_parses_wire_names() {
        for mode in TimerMode::ALL {
            assert_eq!(mode.as_str().parse::<TimerMode>().unwrap(), mode);
        }
        assert!("45".parse::<TimerMode>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&(QuizMode::ChordToNumber, TimerMode::Seconds15)).unwrap();
        assert_eq!(json, r#"["chord-to-number","15"]"#);

        let parsed: TimerMode = serde_json::from_str(r#""untimed""#).unwrap();
        assert_eq!(parsed, TimerMode::Untimed);
        assert!(serde_json::from_str::<QuizMode>(r#""sideways""#).is_err());
    }
}
