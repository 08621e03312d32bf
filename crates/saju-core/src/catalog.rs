//! Reading types offered by the client and whether they can be requested.

use saju_types::FortuneType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneCard {
    pub fortune_type: FortuneType,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
    pub coming_soon: bool,
}

pub static FORTUNE_CARDS: [FortuneCard; 3] = [
    FortuneCard {
        fortune_type: FortuneType::Saju,
        title: "사주 운세",
        description: "생년월일과 생시를 바탕으로 한 전통 사주명리학 해석",
        icon: "🔮",
        enabled: true,
        coming_soon: false,
    },
    FortuneCard {
        fortune_type: FortuneType::Tarot,
        title: "타로 운세",
        description: "카드를 통해 현재 상황과 미래를 점쳐보세요",
        icon: "🎴",
        enabled: false,
        coming_soon: true,
    },
    FortuneCard {
        fortune_type: FortuneType::Daily,
        title: "오늘의 운세",
        description: "오늘 하루의 운세와 조언을 확인해보세요",
        icon: "🌟",
        enabled: true,
        coming_soon: false,
    },
];

/// Catalog entry for `fortune_type`.
pub fn card(fortune_type: FortuneType) -> &'static FortuneCard {
    FORTUNE_CARDS
        .iter()
        .find(|card| card.fortune_type == fortune_type)
        .unwrap_or(&FORTUNE_CARDS[0])
}

/// Message shown when a disabled type is picked; `None` if it is available.
pub fn unavailable_reason(fortune_type: FortuneType) -> Option<String> {
    let card = card(fortune_type);
    if card.enabled {
        None
    } else {
        Some(format!("{} 서비스는 준비 중입니다.", fortune_type.display_name()))
    }
}
