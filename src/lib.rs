//! 한글 음절 분해/조합과 모음조화
//!
//! ```
//! use hangeul::{find_vowel_to_append, join, lead, padchim, vowel, wrap, Padchim};
//!
//! assert_eq!(lead(&'가'), Ok('\u{1100}'));
//! assert_eq!(vowel(&'가'), Ok('\u{1161}'));
//! assert_eq!(padchim(&'가'), Ok(Padchim::Absent));
//! assert_eq!(join('\u{1100}', '\u{1161}', None), Ok('가'));
//!
//! // 듣다 -> 들어: 원래 받침 ㄷ을 기억
//! let stem = wrap("들").with_original_padchim('\u{11AE}');
//! assert_eq!(padchim(&stem), Ok(Padchim::Jamo('\u{11AE}')));
//! assert_eq!(find_vowel_to_append(&stem), '어');
//! ```

pub mod analysis;
pub mod config;
pub mod core;

pub use crate::core::{
    find_vowel_to_append, is_hangeul, is_match, join, lead, padchim, vowel, wrap, Geulja,
    HangeulChar, HangeulError, Padchim, Pattern,
};
