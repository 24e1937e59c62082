mod session;
mod stats;
mod vocabulary;

pub use session::{SessionDraft, SessionRecord};
pub use stats::{HighScore, KeyStats, OverallStats};
pub use vocabulary::{QuizMode, TimerMode, VocabularyError};
