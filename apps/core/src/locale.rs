use serde::{Deserialize, Serialize};
use std::fmt;

/// The two locales the map ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::Ko, Self::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Label shown on the language selector controls.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Ko => Self::En,
            Self::En => Self::Ko,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys of the UI strings carried by the locale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiKey {
    Title,
    MainTitle,
    About,
    SearchPlaceholder,
    SelectCity,
    WelcomeMessage,
    Origin,
    History,
    Geography,
    Back,
    NoResults,
    LoadingCity,
    CheckDataSource,
}

impl UiKey {
    pub const ALL: [Self; 13] = [
        Self::Title,
        Self::MainTitle,
        Self::About,
        Self::SearchPlaceholder,
        Self::SelectCity,
        Self::WelcomeMessage,
        Self::Origin,
        Self::History,
        Self::Geography,
        Self::Back,
        Self::NoResults,
        Self::LoadingCity,
        Self::CheckDataSource,
    ];

    /// The attribute value markup uses to refer to this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::MainTitle => "main_title",
            Self::About => "about",
            Self::SearchPlaceholder => "search_placeholder",
            Self::SelectCity => "select_city",
            Self::WelcomeMessage => "welcome_message",
            Self::Origin => "origin",
            Self::History => "history",
            Self::Geography => "geography",
            Self::Back => "back",
            Self::NoResults => "no_results",
            Self::LoadingCity => "loading_city",
            Self::CheckDataSource => "check_data_source",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }
}

/// Localized text for a key that is known at compile time.
pub const fn translate(lang: Language, key: UiKey) -> &'static str {
    match lang {
        Language::Ko => match key {
            UiKey::Title => "한국 전통 요리 지도",
            UiKey::MainTitle => "🍜 한국 전통 요리 탐험",
            UiKey::About => "소개",
            UiKey::SearchPlaceholder => "음식 이름을 검색하세요...",
            UiKey::SelectCity => "도시를 선택하세요",
            UiKey::WelcomeMessage => "지도에서 도시 마커를 클릭하여 전통 요리를 탐험해보세요!",
            UiKey::Origin => "유래",
            UiKey::History => "역사적 배경",
            UiKey::Geography => "지리적 특징",
            UiKey::Back => "뒤로 가기",
            UiKey::NoResults => "검색 결과가 없습니다.",
            UiKey::LoadingCity => "이 도시의 음식 데이터를 불러오는 중입니다...",
            UiKey::CheckDataSource => "또는 데이터 파일을 확인해주세요:",
        },
        Language::En => match key {
            UiKey::Title => "Korean Traditional Food Map",
            UiKey::MainTitle => "🍜 Explore Korean Traditional Cuisine",
            UiKey::About => "About",
            UiKey::SearchPlaceholder => "Search for food names...",
            UiKey::SelectCity => "Select a City",
            UiKey::WelcomeMessage => {
                "Click on city markers on the map to explore traditional cuisine!"
            }
            UiKey::Origin => "Origin",
            UiKey::History => "Historical Background",
            UiKey::Geography => "Geographic Features",
            UiKey::Back => "Back",
            UiKey::NoResults => "No results found.",
            UiKey::LoadingCity => "Loading food data for this city...",
            UiKey::CheckDataSource => "Or check the data file:",
        },
    }
}

/// Looks up a key coming from markup. Unknown keys yield `None`.
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    UiKey::parse(key).map(|key| translate(lang, key))
}
