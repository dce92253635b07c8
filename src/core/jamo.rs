//! 한글 음절 분해/조합 및 자모 패턴 매칭
//!
//! 음절을 초성(lead) / 중성(vowel) / 받침(padchim)으로 분해하고 다시 조합합니다.
//! [`Geulja`]를 넘기면 받침 보정 정보가 산술 분해보다 우선합니다.
//!
//! ```
//! use hangeul::{join, lead, padchim, vowel, Padchim};
//!
//! assert_eq!(lead(&'각'), Ok('\u{1100}'));
//! assert_eq!(vowel(&'각'), Ok('\u{1161}'));
//! assert_eq!(padchim(&'각'), Ok(Padchim::Jamo('\u{11A8}')));
//! assert_eq!(join('\u{1100}', '\u{1161}', Some('\u{11A8}')), Ok('각'));
//! ```

use std::fmt;

use serde::Serialize;

use crate::core::error::HangeulError;
use crate::core::geulja::Geulja;
use crate::core::unicode::{
    choseong_index, compose_syllable, decompose_syllable, is_syllable_code, jamo_at, jongseong_index,
    jungseong_index, CHOSEONG_BASE, HANGUL_SYLLABLE_BASE, JONGSEONG_BASE, JONGSEONG_COUNT,
    JUNGSEONG_BASE, SYLLABLES_PER_CHOSEONG,
};

/// 분해 대상이 될 수 있는 글자
///
/// 분해는 첫 코드포인트를 기준으로 하며, 받침 보정 정보가 있으면 함께 제공합니다.
/// 보정 정보는 마지막 글자에 대한 것이므로 한 글자일 때만 의미가 있습니다.
pub trait HangeulChar {
    /// 분해할 음절 (빈 글자면 None)
    fn syllable(&self) -> Option<char>;

    /// 받침이 없지만 있는 것처럼 다뤄야 하는지
    fn hidden_padchim(&self) -> bool {
        false
    }

    /// 산술 분해 대신 사용할 원래 받침
    fn original_padchim(&self) -> Option<char> {
        None
    }
}

impl HangeulChar for char {
    fn syllable(&self) -> Option<char> {
        Some(*self)
    }
}

/// 여러 글자면 첫 글자를 분해하고, 마지막 글자의 보정 정보는 적용하지 않음
impl HangeulChar for Geulja {
    fn syllable(&self) -> Option<char> {
        self.first()
    }

    fn hidden_padchim(&self) -> bool {
        self.is_single() && Geulja::hidden_padchim(self)
    }

    fn original_padchim(&self) -> Option<char> {
        Geulja::original_padchim(self).filter(|_| self.is_single())
    }
}

/// 받침 분해 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "jamo", rename_all = "snake_case")]
pub enum Padchim {
    /// 받침 없음
    Absent,
    /// 글자에는 없지만 받침이 있는 것으로 취급 (ㅅ 불규칙 등)
    Hidden,
    /// 종성 자모 (ᆨ-ᇂ)
    Jamo(char),
}

impl Padchim {
    /// 조합에 쓸 수 있는 종성 자모
    pub fn jamo(self) -> Option<char> {
        match self {
            Padchim::Jamo(c) => Some(c),
            Padchim::Absent | Padchim::Hidden => None,
        }
    }

    /// 받침이 있는 것으로 취급되는지 (숨은 받침 포함)
    pub fn is_present(self) -> bool {
        !matches!(self, Padchim::Absent)
    }
}

impl fmt::Display for Padchim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padchim::Absent => f.write_str("-"),
            Padchim::Hidden => f.write_str("(숨은 받침)"),
            Padchim::Jamo(c) => write!(f, "{}", c),
        }
    }
}

/// 자모 패턴: 와일드카드 또는 정확한 값
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern<T> {
    /// 무엇이든 일치
    Any,
    /// 정확히 이 값과 일치
    Exact(T),
}

impl<T: PartialEq> Pattern<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Pattern::Any => true,
            Pattern::Exact(expected) => expected == value,
        }
    }
}

impl<T> From<T> for Pattern<T> {
    fn from(value: T) -> Self {
        Pattern::Exact(value)
    }
}

/// 완성형 음절과 그 코드포인트
fn syllable_code<C: HangeulChar + ?Sized>(ch: &C) -> Result<(char, u32), HangeulError> {
    let c = ch.syllable().ok_or(HangeulError::Empty)?;
    let code = c as u32;
    if !is_syllable_code(code) {
        return Err(HangeulError::InvalidSyllable(c));
    }
    Ok((c, code))
}

/// 글자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangeul<C: HangeulChar + ?Sized>(ch: &C) -> bool {
    ch.syllable().is_some_and(|c| is_syllable_code(c as u32))
}

/// 초성 자모 (ᄀ-ᄒ)
pub fn lead<C: HangeulChar + ?Sized>(ch: &C) -> Result<char, HangeulError> {
    let (c, _) = syllable_code(ch)?;
    decompose_syllable(c)
        .and_then(|(cho, _, _)| jamo_at(CHOSEONG_BASE, cho))
        .ok_or(HangeulError::InvalidSyllable(c))
}

/// 받침
///
/// 우선순위:
/// 1. 숨은 받침이면 [`Padchim::Hidden`]
/// 2. 원래 받침이 지정되어 있으면 그 자모 (종성 자모가 아니면 [`HangeulError::InvalidJamo`])
/// 3. 산술 분해 (종성 인덱스 0이면 [`Padchim::Absent`])
pub fn padchim<C: HangeulChar + ?Sized>(ch: &C) -> Result<Padchim, HangeulError> {
    let (c, _) = syllable_code(ch)?;
    if ch.hidden_padchim() {
        return Ok(Padchim::Hidden);
    }
    if let Some(original) = ch.original_padchim() {
        jongseong_index(original).ok_or(HangeulError::InvalidJamo(original))?;
        return Ok(Padchim::Jamo(original));
    }
    match decompose_syllable(c) {
        Some((_, _, 0)) => Ok(Padchim::Absent),
        Some((_, _, jong)) => jamo_at(JONGSEONG_BASE, jong)
            .map(Padchim::Jamo)
            .ok_or(HangeulError::InvalidSyllable(c)),
        None => Err(HangeulError::InvalidSyllable(c)),
    }
}

/// 중성 자모 (ᅡ-ᅵ)
///
/// 받침을 먼저 구한 뒤 그 오프셋을 빼고 계산합니다. 받침이 없거나 숨은 받침이면
/// 오프셋은 -1입니다. 보정된 받침이 실제 받침과 달라도 이 순서를 그대로 따릅니다.
pub fn vowel<C: HangeulChar + ?Sized>(ch: &C) -> Result<char, HangeulError> {
    let resolved = padchim(ch)?;
    let (c, code) = syllable_code(ch)?;
    let offset = match resolved {
        Padchim::Absent | Padchim::Hidden => -1,
        Padchim::Jamo(p) => i64::from(p as u32) - i64::from(JONGSEONG_BASE),
    };
    let relative = i64::from(code - HANGUL_SYLLABLE_BASE) - offset;
    let index = relative.rem_euclid(i64::from(SYLLABLES_PER_CHOSEONG)) / i64::from(JONGSEONG_COUNT);
    u32::try_from(index)
        .ok()
        .and_then(|index| jamo_at(JUNGSEONG_BASE, index))
        .ok_or(HangeulError::InvalidSyllable(c))
}

/// 초성/중성/받침 자모로 음절 조합
///
/// 받침이 없으면 `None`을 넘깁니다.
pub fn join(lead: char, vowel: char, padchim: Option<char>) -> Result<char, HangeulError> {
    let cho = choseong_index(lead).ok_or(HangeulError::InvalidJamo(lead))?;
    let jung = jungseong_index(vowel).ok_or(HangeulError::InvalidJamo(vowel))?;
    let jong = match padchim {
        Some(p) => jongseong_index(p).ok_or(HangeulError::InvalidJamo(p))?,
        None => 0,
    };
    compose_syllable(cho, jung, jong).ok_or(HangeulError::InvalidJamo(lead))
}

/// 초성/중성/받침 패턴 매칭
///
/// 한글 음절이 아니면 항상 false입니다.
pub fn is_match<C: HangeulChar + ?Sized>(
    ch: &C,
    lead_pattern: Pattern<char>,
    vowel_pattern: Pattern<char>,
    padchim_pattern: Pattern<Padchim>,
) -> bool {
    let Ok(l) = lead(ch) else {
        return false;
    };
    let Ok(v) = vowel(ch) else {
        return false;
    };
    let Ok(p) = padchim(ch) else {
        return false;
    };
    lead_pattern.matches(&l) && vowel_pattern.matches(&v) && padchim_pattern.matches(&p)
}
