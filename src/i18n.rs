//! Display text lookup.
//!
//! Views never embed user-facing words; they ask a [`MessageCatalog`] for a
//! [`MessageId`]. [`StaticMessages`] is the built-in catalogue for the three
//! supported languages, and the range formatters below build the season and
//! time-of-day labels from it.

use serde::Deserialize;
use strum::{AsRefStr, EnumIter, EnumString};

use crate::catalogue::{Habitat, HourRange, Month, MonthRange, Size, SpeciesRecord};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ko,
    Ja,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageId {
    ColumnName,
    ColumnPrice,
    ColumnLivingMonths,
    ColumnAppearTime,
    ColumnHabitat,
    ColumnSize,
    ColumnOwned,
    ColumnCompare,
    CompareField,
    MineField,
    Share,
    Copied,
    Add,
    Subtract,
    InvalidInput,
    AllYear,
    AllDay,
    Habitat(Habitat),
    Size(Size),
}

pub trait MessageCatalog {
    fn text(&self, id: MessageId) -> &str;

    fn month(&self, month: Month) -> String;

    fn hour(&self, hour: u8) -> String;

    fn range_separator(&self) -> &str {
        " ~ "
    }
}

/// Built-in catalogue.
#[derive(Debug, Clone, Copy)]
pub struct StaticMessages {
    pub language: Language,
}

impl StaticMessages {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MessageCatalog for StaticMessages {
    fn text(&self, id: MessageId) -> &str {
        use Language::{En, Ja, Ko};
        use MessageId as M;
        match (id, self.language) {
            (M::ColumnName, En) => "Name",
            (M::ColumnName, Ko) => "이름",
            (M::ColumnName, Ja) => "なまえ",
            (M::ColumnPrice, En) => "Price",
            (M::ColumnPrice, Ko) => "가격",
            (M::ColumnPrice, Ja) => "ねだん",
            (M::ColumnLivingMonths, En) => "Season",
            (M::ColumnLivingMonths, Ko) => "출현 기간",
            (M::ColumnLivingMonths, Ja) => "きせつ",
            (M::ColumnAppearTime, En) => "Time",
            (M::ColumnAppearTime, Ko) => "출현 시간",
            (M::ColumnAppearTime, Ja) => "じかん",
            (M::ColumnHabitat, En) => "Location",
            (M::ColumnHabitat, Ko) => "출현 장소",
            (M::ColumnHabitat, Ja) => "ばしょ",
            (M::ColumnSize, En) => "Shadow",
            (M::ColumnSize, Ko) => "크기",
            (M::ColumnSize, Ja) => "かげ",
            (M::ColumnOwned, En) => "Owned",
            (M::ColumnOwned, Ko) => "소유",
            (M::ColumnOwned, Ja) => "しょじ",
            (M::ColumnCompare, En) => "Compare",
            (M::ColumnCompare, Ko) => "비교",
            (M::ColumnCompare, Ja) => "ひかく",
            (M::CompareField, En) => "Comparison data",
            (M::CompareField, Ko) => "비교 데이터",
            (M::CompareField, Ja) => "ひかくデータ",
            (M::MineField, En) => "My data",
            (M::MineField, Ko) => "내 데이터",
            (M::MineField, Ja) => "じぶんのデータ",
            (M::Share, En) => "Share",
            (M::Share, Ko) => "공유",
            (M::Share, Ja) => "シェア",
            (M::Copied, En) => "Copied!",
            (M::Copied, Ko) => "복사했습니다!",
            (M::Copied, Ja) => "コピーしました！",
            (M::Add, En) => "add",
            (M::Add, Ko) => "추가",
            (M::Add, Ja) => "ふやす",
            (M::Subtract, En) => "subtract",
            (M::Subtract, Ko) => "빼기",
            (M::Subtract, Ja) => "へらす",
            (M::InvalidInput, En) => "Invalid input",
            (M::InvalidInput, Ko) => "잘못된 입력",
            (M::InvalidInput, Ja) => "にゅうりょくがただしくありません",
            (M::AllYear, En) => "All year",
            (M::AllYear, Ko) => "1년 내내",
            (M::AllYear, Ja) => "いちねんじゅう",
            (M::AllDay, En) => "All day",
            (M::AllDay, Ko) => "하루 종일",
            (M::AllDay, Ja) => "いちにちじゅう",
            (M::Habitat(h), lang) => habitat_text(h, lang),
            (M::Size(s), lang) => size_text(s, lang),
        }
    }

    fn month(&self, month: Month) -> String {
        match self.language {
            Language::En => EN_MONTHS[month.index()].to_string(),
            Language::Ko => format!("{}월", month.number()),
            Language::Ja => format!("{}月", month.number()),
        }
    }

    fn hour(&self, hour: u8) -> String {
        match self.language {
            Language::En => format!("{hour}h"),
            Language::Ko => format!("{hour}시"),
            Language::Ja => format!("{hour}時"),
        }
    }
}

fn habitat_text(habitat: Habitat, language: Language) -> &'static str {
    match (habitat, language) {
        (Habitat::River, Language::En) => "River",
        (Habitat::River, Language::Ko) => "강",
        (Habitat::River, Language::Ja) => "かわ",
        (Habitat::RiverMouth, Language::En) => "River (mouth)",
        (Habitat::RiverMouth, Language::Ko) => "하구",
        (Habitat::RiverMouth, Language::Ja) => "かこう",
        (Habitat::Waterfall, Language::En) => "River (clifftop)",
        (Habitat::Waterfall, Language::Ko) => "강(절벽 위)",
        (Habitat::Waterfall, Language::Ja) => "かわ(がけのうえ)",
        (Habitat::Pond, Language::En) => "Pond",
        (Habitat::Pond, Language::Ko) => "연못",
        (Habitat::Pond, Language::Ja) => "いけ",
        (Habitat::Sea, Language::En) => "Sea",
        (Habitat::Sea, Language::Ko) => "바다",
        (Habitat::Sea, Language::Ja) => "うみ",
        (Habitat::Dock, Language::En) => "Pier",
        (Habitat::Dock, Language::Ko) => "부두",
        (Habitat::Dock, Language::Ja) => "さんばし",
    }
}

fn size_text(size: Size, language: Language) -> &'static str {
    match (size, language) {
        (Size::Small, Language::En) => "Small",
        (Size::Small, Language::Ko) => "작음",
        (Size::Small, Language::Ja) => "ちいさい",
        (Size::SlightlySmall, Language::En) => "Slightly small",
        (Size::SlightlySmall, Language::Ko) => "약간 작음",
        (Size::SlightlySmall, Language::Ja) => "ややちいさい",
        (Size::Medium, Language::En) => "Medium",
        (Size::Medium, Language::Ko) => "중간",
        (Size::Medium, Language::Ja) => "ふつう",
        (Size::SlightlyLarge, Language::En) => "Slightly large",
        (Size::SlightlyLarge, Language::Ko) => "약간 큼",
        (Size::SlightlyLarge, Language::Ja) => "ややおおきい",
        (Size::Large, Language::En) => "Large",
        (Size::Large, Language::Ko) => "큼",
        (Size::Large, Language::Ja) => "おおきい",
        (Size::VeryLarge, Language::En) => "Very large",
        (Size::VeryLarge, Language::Ko) => "매우 큼",
        (Size::VeryLarge, Language::Ja) => "とてもおおきい",
    }
}

// --- Range labels -------------------------------------------------------------

pub fn describe_month_range(range: MonthRange, messages: &dyn MessageCatalog) -> String {
    if range.is_all_year() {
        return messages.text(MessageId::AllYear).to_string();
    }
    let (Some(start), Some(end)) = (Month::new(range.start), Month::new(range.end)) else {
        return format!("{}{}{}", range.start, messages.range_separator(), range.end);
    };
    if start == end {
        return messages.month(start);
    }
    format!(
        "{}{}{}",
        messages.month(start),
        messages.range_separator(),
        messages.month(end)
    )
}

pub fn describe_hour_range(range: HourRange, messages: &dyn MessageCatalog) -> String {
    if range.is_all_day() {
        return messages.text(MessageId::AllDay).to_string();
    }
    format!(
        "{}{}{}",
        messages.hour(range.start),
        messages.range_separator(),
        messages.hour(range.end)
    )
}

/// One line per season. With split seasons each line carries its season in parentheses.
pub fn describe_appear_times(record: &SpeciesRecord, messages: &dyn MessageCatalog) -> Vec<String> {
    let split = record.appear_time.len() > 1;
    record
        .appear_time
        .iter()
        .enumerate()
        .map(|(idx, hours)| {
            let mut line = hours
                .iter()
                .map(|range| describe_hour_range(*range, messages))
                .collect::<Vec<_>>()
                .join(", ");
            if split {
                if let Some(season) = record.living_months.get(idx) {
                    line.push_str(&format!("({})", describe_month_range(*season, messages)));
                }
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KO: StaticMessages = StaticMessages::new(Language::Ko);

    #[test]
    fn month_range_labels() {
        assert_eq!(describe_month_range(MonthRange::new(1, 12), &KO), "1년 내내");
        assert_eq!(describe_month_range(MonthRange::new(7, 7), &KO), "7월");
        assert_eq!(describe_month_range(MonthRange::new(11, 3), &KO), "11월 ~ 3월");
        let en = StaticMessages::new(Language::En);
        assert_eq!(describe_month_range(MonthRange::new(11, 3), &en), "Nov ~ Mar");
    }

    #[test]
    fn hour_range_labels() {
        assert_eq!(describe_hour_range(HourRange::new(0, 23), &KO), "하루 종일");
        assert_eq!(describe_hour_range(HourRange::new(21, 4), &KO), "21시 ~ 4시");
    }

    #[test]
    fn split_season_lines_carry_their_season() {
        static RECORD: SpeciesRecord = SpeciesRecord {
            name: "split",
            living_months: &[MonthRange::new(3, 6), MonthRange::new(9, 11)],
            appear_time: &[&[HourRange::new(16, 21)], &[HourRange::new(4, 21)]],
            habitat: Habitat::River,
            size: Size::Medium,
            price: 1,
        };
        let lines = describe_appear_times(&RECORD, &KO);
        assert_eq!(lines, vec!["16시 ~ 21시(3월 ~ 6월)", "4시 ~ 21시(9월 ~ 11월)"]);
    }

    #[test]
    fn single_season_with_two_windows() {
        static RECORD: SpeciesRecord = SpeciesRecord {
            name: "two-windows",
            living_months: &[MonthRange::new(1, 12)],
            appear_time: &[&[HourRange::new(9, 16), HourRange::new(21, 4)]],
            habitat: Habitat::Sea,
            size: Size::Small,
            price: 1,
        };
        assert_eq!(describe_appear_times(&RECORD, &KO), vec!["9시 ~ 16시, 21시 ~ 4시"]);
    }

    #[test]
    fn language_parses_from_lowercase_code() {
        use std::str::FromStr;
        assert_eq!(Language::from_str("ja").unwrap(), Language::Ja);
        assert!(Language::from_str("fr").is_err());
    }
}
