//! 단어 분석 결과 (CLI 출력용)

use serde::Serialize;

use crate::core::geulja::Geulja;
use crate::core::harmony::find_vowel_to_append;
use crate::core::jamo::{is_hangeul, lead, padchim, vowel, Padchim};

/// 음절 하나의 분해 결과
///
/// 한글 음절이 아니면 자모 필드가 모두 None
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableReport {
    pub syllable: char,
    pub lead: Option<char>,
    pub vowel: Option<char>,
    pub padchim: Option<Padchim>,
}

/// 단어 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAnalysis {
    pub word: String,
    pub syllables: Vec<SyllableReport>,
    pub vowel_to_append: char,
}

fn report(syllable: char, piece: &Geulja) -> SyllableReport {
    if !is_hangeul(piece) {
        return SyllableReport {
            syllable,
            lead: None,
            vowel: None,
            padchim: None,
        };
    }
    SyllableReport {
        syllable,
        lead: lead(piece).ok(),
        vowel: vowel(piece).ok(),
        padchim: padchim(piece).ok(),
    }
}

/// 단어를 음절별로 분해하고 붙일 모음을 선택
///
/// 받침 보정 정보는 마지막 음절에만 적용
pub fn analyze(word: &Geulja) -> WordAnalysis {
    let last_index = word.len().checked_sub(1);
    let last = word.last_syllable();
    let syllables = word
        .chars()
        .enumerate()
        .map(|(index, c)| match &last {
            Some(last) if Some(index) == last_index => report(c, last),
            _ => report(c, &Geulja::from(c)),
        })
        .collect();

    WordAnalysis {
        word: word.to_string(),
        syllables,
        vowel_to_append: find_vowel_to_append(word),
    }
}

impl WordAnalysis {
    /// 사람이 읽는 형식
    ///
    /// `show_jamo`가 false면 붙일 모음만 출력
    pub fn render_text(&self, show_jamo: bool) -> String {
        if !show_jamo {
            return format!("{}\t+{}", self.word, self.vowel_to_append);
        }
        let parts: Vec<String> = self
            .syllables
            .iter()
            .map(|s| match (s.lead, s.vowel, s.padchim) {
                (Some(l), Some(v), Some(p)) => format!("{}[{} {} {}]", s.syllable, l, v, p),
                _ => s.syllable.to_string(),
            })
            .collect();
        format!("{}\t{}\t+{}", self.word, parts.join(" "), self.vowel_to_append)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geulja::wrap;

    #[test]
    fn test_analyze_word() {
        let result = analyze(&wrap("먹다"));
        assert_eq!(result.word, "먹다");
        assert_eq!(result.syllables.len(), 2);
        assert_eq!(result.syllables[0].lead, Some('\u{1106}'));
        assert_eq!(result.syllables[0].padchim, Some(Padchim::Jamo('\u{11A8}')));
        assert_eq!(result.syllables[1].padchim, Some(Padchim::Absent));
        assert_eq!(result.vowel_to_append, '아');
    }

    #[test]
    fn test_analyze_keeps_last_override() {
        let result = analyze(&wrap("나").with_hidden_padchim(true));
        assert_eq!(result.syllables[0].padchim, Some(Padchim::Hidden));
    }

    #[test]
    fn test_analyze_override_only_on_last_syllable() {
        let result = analyze(&wrap("나나").with_hidden_padchim(true));
        assert_eq!(result.syllables[0].padchim, Some(Padchim::Absent));
        assert_eq!(result.syllables[1].padchim, Some(Padchim::Hidden));
    }

    #[test]
    fn test_analyze_non_hangeul() {
        let result = analyze(&wrap("a가"));
        assert_eq!(result.syllables[0].lead, None);
        assert_eq!(result.syllables[1].vowel, Some('\u{1161}'));
    }

    #[test]
    fn test_render_text() {
        let result = analyze(&wrap("가"));
        assert_eq!(result.render_text(false), "가\t+아");
        assert_eq!(result.render_text(true), "가\t가[\u{1100} \u{1161} -]\t+아");
    }

    #[test]
    fn test_serialize_json() {
        let result = analyze(&wrap("각"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["word"], "각");
        assert_eq!(json["vowel_to_append"], "아");
        assert_eq!(json["syllables"][0]["padchim"]["kind"], "jamo");
        assert_eq!(json["syllables"][0]["padchim"]["jamo"], "\u{11A8}");
    }
}
