//! System clipboard adapters

pub mod arboard;

pub use self::arboard::ArboardClipboard;
