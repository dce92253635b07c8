//! 모음조화: 어간 뒤에 붙일 "아"/"어" 선택
//!
//! 마지막 글자부터 거꾸로 살펴 처음 결정된 값을 사용합니다.
//! 1. 뜨/쓰/트는 항상 "어"
//! 2. 받침 없는 ㅡ는 판단에 쓰지 않고 앞 글자로 넘어감
//! 3. ㅗ/ㅏ/ㅑ(양성 모음)는 "아"
//! 4. 나머지는 "어"
//!
//! 끝까지 결정되지 않으면 "어"입니다.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::geulja::Geulja;
use crate::core::jamo::{padchim, vowel};

/// 양성 모음 뒤에 붙는 모음
pub const A: char = '아';
/// 음성/중성 모음 뒤에 붙는 모음
pub const EO: char = '어';

/// 중성 ㅡ
const EU: char = '\u{1173}';

/// 항상 "어"를 붙이는 ㅡ 어간 (뜨다, 쓰다, 트다)
pub static IRREGULAR_EU_STEMS: LazyLock<HashSet<char>> =
    LazyLock::new(|| ['뜨', '쓰', '트'].into_iter().collect());

/// 양성 모음 (ㅗ, ㅏ, ㅑ)
pub static BRIGHT_VOWELS: LazyLock<HashSet<char>> =
    LazyLock::new(|| ['\u{1169}', '\u{1161}', '\u{1163}'].into_iter().collect());

/// 글자 하나에 대한 판정
fn decide(syllable: &Geulja) -> Option<char> {
    if syllable.first().is_some_and(|c| IRREGULAR_EU_STEMS.contains(&c)) {
        return Some(EO);
    }
    match (vowel(syllable), padchim(syllable)) {
        (Ok(EU), Ok(p)) if !p.is_present() => None,
        (Ok(v), _) if BRIGHT_VOWELS.contains(&v) => Some(A),
        // 한글 음절이 아닌 글자도 "어"로 결정
        _ => Some(EO),
    }
}

/// 뒤에 붙일 모음("아"/"어") 선택
///
/// 받침 보정 정보는 마지막 글자([`Geulja::last_syllable`])에만 적용됩니다.
///
/// ```
/// use hangeul::{find_vowel_to_append, wrap};
///
/// assert_eq!(find_vowel_to_append(&wrap("가")), '아');
/// assert_eq!(find_vowel_to_append(&wrap("먹")), '어');
/// assert_eq!(find_vowel_to_append(&wrap("아프")), '아');
/// ```
pub fn find_vowel_to_append(text: &Geulja) -> char {
    let last = text.last_syllable();
    let earlier = text.chars().rev().skip(1).map(Geulja::from);
    for syllable in last.into_iter().chain(earlier) {
        if let Some(decided) = decide(&syllable) {
            log::trace!("모음조화: {:?} -> {} ({:?})", text.as_str(), decided, syllable.as_str());
            return decided;
        }
    }
    log::trace!("모음조화: {:?} -> {} (기본값)", text.as_str(), EO);
    EO
}
