//! 자모 코덱 에러

/// 분해/조합 입력 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangeulError {
    /// 완성형 한글 음절(가-힣)이 아닌 문자
    InvalidSyllable(char),
    /// 자리(초성/중성/종성)에 맞지 않는 자모
    InvalidJamo(char),
    /// 빈 글자
    Empty,
}

impl std::fmt::Display for HangeulError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HangeulError::InvalidSyllable(c) => {
                write!(f, "한글 음절이 아닙니다: {:?} (U+{:04X})", c, *c as u32)
            }
            HangeulError::InvalidJamo(c) => {
                write!(f, "잘못된 자모입니다: {:?} (U+{:04X})", c, *c as u32)
            }
            HangeulError::Empty => write!(f, "빈 글자입니다"),
        }
    }
}

impl std::error::Error for HangeulError {}
