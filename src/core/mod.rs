//! 한글 음절 코덱
//!
//! 음절 분해/조합, 받침 보정 글자, 자모 패턴 매칭, 모음조화

pub mod error;
pub mod geulja;
pub mod harmony;
pub mod jamo;
pub mod unicode;

pub use error::HangeulError;
pub use geulja::{wrap, Geulja};
pub use harmony::find_vowel_to_append;
pub use jamo::{is_hangeul, is_match, join, lead, padchim, vowel, HangeulChar, Padchim, Pattern};
