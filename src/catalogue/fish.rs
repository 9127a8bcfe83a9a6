// Species table. Row order is display order.
use super::{Habitat, HourRange, MonthRange, Size, SpeciesRecord};

const fn m(start: u8, end: u8) -> MonthRange {
    MonthRange::new(start, end)
}

const fn h(start: u8, end: u8) -> HourRange {
    HourRange::new(start, end)
}

pub static FISH: &[SpeciesRecord] = &[
    SpeciesRecord {
        name: "납줄개",
        living_months: &[m(11, 3)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 900,
    },
    SpeciesRecord {
        name: "피라미",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 200,
    },
    SpeciesRecord {
        name: "붕어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 160,
    },
    SpeciesRecord {
        name: "황어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::River,
        size: Size::Medium,
        price: 240,
    },
    SpeciesRecord {
        name: "잉어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::SlightlyLarge,
        price: 300,
    },
    SpeciesRecord {
        name: "비단잉어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::Pond,
        size: Size::SlightlyLarge,
        price: 4000,
    },
    SpeciesRecord {
        name: "금붕어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::Small,
        price: 1300,
    },
    SpeciesRecord {
        name: "툭눈금붕어",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::Pond,
        size: Size::Small,
        price: 1300,
    },
    SpeciesRecord {
        name: "난주",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::Pond,
        size: Size::Small,
        price: 4500,
    },
    SpeciesRecord {
        name: "송사리",
        living_months: &[m(4, 8)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::Small,
        price: 300,
    },
    SpeciesRecord {
        name: "가재",
        living_months: &[m(4, 9)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::SlightlySmall,
        price: 200,
    },
    SpeciesRecord {
        name: "자라",
        living_months: &[m(8, 9)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::River,
        size: Size::Medium,
        price: 3750,
    },
    SpeciesRecord {
        name: "늑대거북",
        living_months: &[m(4, 10)],
        appear_time: &[&[h(21, 4)]],
        habitat: Habitat::River,
        size: Size::Medium,
        price: 5000,
    },
    SpeciesRecord {
        name: "올챙이",
        living_months: &[m(3, 7)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::Small,
        price: 100,
    },
    SpeciesRecord {
        name: "개구리",
        living_months: &[m(5, 8)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::SlightlySmall,
        price: 120,
    },
    SpeciesRecord {
        name: "동사리",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 400,
    },
    SpeciesRecord {
        name: "미꾸라지",
        living_months: &[m(3, 5)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 400,
    },
    SpeciesRecord {
        name: "메기",
        living_months: &[m(5, 10)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::Pond,
        size: Size::SlightlyLarge,
        price: 800,
    },
    SpeciesRecord {
        name: "가물치",
        living_months: &[m(6, 8)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::Pond,
        size: Size::Large,
        price: 5500,
    },
    SpeciesRecord {
        name: "블루길",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 180,
    },
    SpeciesRecord {
        name: "옐로우퍼치",
        living_months: &[m(10, 3)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::Pond,
        size: Size::Medium,
        price: 300,
    },
    SpeciesRecord {
        name: "큰입배스",
        living_months: &[m(1, 12)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::SlightlyLarge,
        price: 320,
    },
    SpeciesRecord {
        name: "틸라피아",
        living_months: &[m(6, 10)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::Large,
        price: 800,
    },
    SpeciesRecord {
        name: "강꼬치고기",
        living_months: &[m(9, 12)],
        appear_time: &[&[h(4, 21)]],
        habitat: Habitat::River,
        size: Size::Large,
        price: 1800,
    },
    SpeciesRecord {
        name: "빙어",
        living_months: &[m(12, 2)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 400,
    },
    SpeciesRecord {
        name: "은어",
        living_months: &[m(7, 9)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::River,
        size: Size::Medium,
        price: 900,
    },
    SpeciesRecord {
        name: "산천어",
        living_months: &[m(3, 6), m(9, 11)],
        appear_time: &[&[h(16, 21)], &[h(4, 21)]],
        habitat: Habitat::Waterfall,
        size: Size::SlightlyLarge,
        price: 1000,
    },
    SpeciesRecord {
        name: "열목어",
        living_months: &[m(3, 6), m(9, 11)],
        appear_time: &[&[h(16, 9)], &[h(4, 21)]],
        habitat: Habitat::Waterfall,
        size: Size::SlightlySmall,
        price: 3800,
    },
    SpeciesRecord {
        name: "금송어",
        living_months: &[m(3, 5), m(9, 11)],
        appear_time: &[&[h(16, 9)], &[h(4, 21)]],
        habitat: Habitat::Waterfall,
        size: Size::Medium,
        price: 15000,
    },
    SpeciesRecord {
        name: "일본연어",
        living_months: &[m(3, 12)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::Waterfall,
        size: Size::VeryLarge,
        price: 15000,
    },
    SpeciesRecord {
        name: "연어",
        living_months: &[m(9, 9)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::RiverMouth,
        size: Size::SlightlyLarge,
        price: 700,
    },
    SpeciesRecord {
        name: "왕연어",
        living_months: &[m(9, 9)],
        appear_time: &[&[h(0, 23)]],
        habitat: Habitat::RiverMouth,
        size: Size::VeryLarge,
        price: 1800,
    },
    SpeciesRecord {
        name: "참게",
        living_months: &[m(9, 11)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 2000,
    },
    SpeciesRecord {
        name: "구피",
        living_months: &[m(4, 11)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 1300,
    },
    SpeciesRecord {
        name: "닥터피시",
        living_months: &[m(5, 9)],
        appear_time: &[&[h(9, 17)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 1500,
    },
    SpeciesRecord {
        name: "천사어",
        living_months: &[m(5, 10)],
        appear_time: &[&[h(16, 9)]],
        habitat: Habitat::River,
        size: Size::SlightlySmall,
        price: 3000,
    },
    SpeciesRecord {
        name: "베타",
        living_months: &[m(5, 10)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 2500,
    },
    SpeciesRecord {
        name: "네온테트라",
        living_months: &[m(4, 11)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 500,
    },
    SpeciesRecord {
        name: "레인보우피쉬",
        living_months: &[m(5, 10)],
        appear_time: &[&[h(9, 16)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 800,
    },
    SpeciesRecord {
        name: "피라니아",
        living_months: &[m(6, 9)],
        appear_time: &[&[h(9, 16), h(21, 4)]],
        habitat: Habitat::River,
        size: Size::Small,
        price: 2500,
    },
];
