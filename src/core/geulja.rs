//! 글자(Geulja): 받침 보정 정보를 가진 텍스트 조각
//!
//! 불규칙 활용에서 바뀐 받침을 기억하기 위한 값 타입입니다.
//! - `original_padchim`: ㄷ → ㄹ 불규칙처럼 원래 받침이 다른 경우
//! - `hidden_padchim`: ㅅ 불규칙처럼 받침이 없어졌지만 있는 것처럼 다뤄야 하는 경우
//!
//! 두 정보는 항상 **마지막 글자**에 대한 것이며, 부분 문자열을 잘라낼 때
//! 마지막 글자가 유지되는 경우에만 함께 넘어갑니다.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use crate::core::harmony::find_vowel_to_append;

/// 받침 보정 정보를 가진 글자
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Geulja {
    text: String,
    hidden_padchim: bool,
    original_padchim: Option<char>,
}

/// 텍스트를 보정 정보 없는 글자로 감싸기
pub fn wrap(text: impl Into<String>) -> Geulja {
    Geulja::new(text)
}

impl Geulja {
    /// 보정 정보 없이 생성
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden_padchim: false,
            original_padchim: None,
        }
    }

    /// 받침이 없지만 있는 것처럼 다룰지 설정한 새 값 반환
    pub fn with_hidden_padchim(mut self, hidden: bool) -> Self {
        self.hidden_padchim = hidden;
        self
    }

    /// 마지막 글자의 원래 받침(종성 자모)을 설정한 새 값 반환
    ///
    /// 종성 자모(ᆨ-ᇂ)가 아니면 분해할 때 `InvalidJamo` 에러가 납니다.
    pub fn with_original_padchim(mut self, padchim: char) -> Self {
        self.original_padchim = Some(padchim);
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 코드포인트 개수
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.text.chars()
    }

    pub fn first(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn last(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    pub fn hidden_padchim(&self) -> bool {
        self.hidden_padchim
    }

    pub fn original_padchim(&self) -> Option<char> {
        self.original_padchim
    }

    /// 코드포인트 범위로 부분 글자 생성
    ///
    /// 범위는 텍스트 길이에 맞춰 잘립니다. 결과가 원본의 마지막 글자에서
    /// 끝나는 경우에만 받침 보정 정보를 유지하고, 그 외에는 초기화합니다.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Geulja {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .clamp(start, len);

        let text: String = self.text.chars().skip(start).take(end - start).collect();

        if start < end && end == len {
            if self.hidden_padchim || self.original_padchim.is_some() {
                log::debug!("받침 보정 유지: {:?} -> {:?}", self.text, text);
            }
            Geulja {
                text,
                hidden_padchim: self.hidden_padchim,
                original_padchim: self.original_padchim,
            }
        } else {
            Geulja::new(text)
        }
    }

    /// 마지막 글자 하나 (받침 보정 정보 유지)
    ///
    /// `slice(len - 1..)`와 같은 결과를 길이를 세지 않고 만듭니다.
    pub fn last_syllable(&self) -> Option<Geulja> {
        self.last().map(|c| Geulja {
            text: c.to_string(),
            hidden_padchim: self.hidden_padchim,
            original_padchim: self.original_padchim,
        })
    }

    /// 정확히 한 글자인지
    pub fn is_single(&self) -> bool {
        let mut chars = self.chars();
        chars.next().is_some() && chars.next().is_none()
    }

    /// 뒤에 붙일 모음("아"/"어") 선택
    pub fn vowel_to_append(&self) -> char {
        find_vowel_to_append(self)
    }
}

impl fmt::Display for Geulja {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Geulja {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Geulja {
    fn from(text: &str) -> Self {
        Geulja::new(text)
    }
}

impl From<String> for Geulja {
    fn from(text: String) -> Self {
        Geulja::new(text)
    }
}

impl From<char> for Geulja {
    fn from(c: char) -> Self {
        Geulja::new(c.to_string())
    }
}
