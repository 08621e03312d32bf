use saju_types::FortuneType;

pub const SAJU_READING: &str = "\
안녕하세요. 요청하신 사주 해석입니다.

## 🔮 사주 기본 분석
구분\t천간\t지지
년주\t경\t오
월주\t신\t사

**일간 병화**의 기운이 강한 사주입니다.

## 🧠 성격과 기질
- 밝고 적극적인 성향
- 결단력이 뛰어남

## 🍀 건강운
과로에 주의하고 **규칙적인 수면**을 유지하세요.

## 💼 직업운과 재물운
창의력이 필요한 분야에서 두각을 나타냅니다.

## 👥 인간관계운
주변의 신뢰를 얻기 쉬운 해입니다.

## 📅 연도별 운세
- 2025년: 새로운 시작
- 2026년: 안정과 성장

## 🌈 개운 방법
붉은 계열의 소품이 도움이 됩니다.
";

pub const DAILY_READING: &str = "\
## 🌟 오늘의 종합운
전반적으로 **순조로운** 하루입니다.

## 💼 직업/학업운
집중력이 높아지는 시간대는 오전입니다.

## 💰 재물/금전운
- 충동구매를 피하세요

## ❤️ 연애/인간관계운
가까운 사람과 대화를 나누세요.

## 🍀 건강/컨디션
가벼운 산책을 추천합니다.

## 🎯 행운의 요소
행운의 색: 파랑

## 🌈 오늘의 조언
서두르지 않으면 원하는 것을 얻습니다.
";

/// Canned reading for `fortune_type`; tarot has none.
pub fn reading_for(fortune_type: FortuneType) -> Option<&'static str> {
    match fortune_type {
        FortuneType::Saju => Some(SAJU_READING),
        FortuneType::Daily => Some(DAILY_READING),
        FortuneType::Tarot => None,
    }
}
