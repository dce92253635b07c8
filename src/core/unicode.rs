//! 유니코드 한글 음절/자모 산술 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 자모 시작 (ᄀ)
pub const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
pub const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 시작 직전 (ᆨ - 1), 종성 인덱스 0 = 종성 없음
pub const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나가 차지하는 음절 수 (21 × 28 = 588)
pub const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 코드포인트가 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable_code(code: u32) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code)
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !is_syllable_code(code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / SYLLABLES_PER_CHOSEONG;
    Some((choseong, jungseong, jongseong))
}

/// 초성 자모(ᄀ-ᄒ)의 인덱스 (0~18)
pub fn choseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (CHOSEONG_BASE..CHOSEONG_BASE + CHOSEONG_COUNT)
        .contains(&code)
        .then(|| code - CHOSEONG_BASE)
}

/// 중성 자모(ᅡ-ᅵ)의 인덱스 (0~20)
pub fn jungseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT)
        .contains(&code)
        .then(|| code - JUNGSEONG_BASE)
}

/// 종성 자모(ᆨ-ᇂ)의 인덱스 (1~27)
pub fn jongseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (JONGSEONG_BASE + 1..JONGSEONG_BASE + JONGSEONG_COUNT)
        .contains(&code)
        .then(|| code - JONGSEONG_BASE)
}

/// 기준 코드포인트 + 인덱스에 해당하는 자모 문자
pub fn jamo_at(base: u32, index: u32) -> Option<char> {
    char::from_u32(base + index)
}
