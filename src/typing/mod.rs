// Typing model: words, cursor, styles and the session that drives them
//
// - Word: per-word typing state with a cached styled render
// - TypingSession: ordered words with exactly one active
// - Cursor / WordStyles: injected rendering capabilities

mod cursor;
mod session;
mod styles;
mod word;

pub use cursor::CursorType;
pub use session::TypingSession;
pub use styles::WordStyles;
pub use word::WordState;
