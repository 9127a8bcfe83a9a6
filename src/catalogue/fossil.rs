// Fossil table, embedded from data/fossil.csv and decoded once.
use std::sync::OnceLock;

use super::FossilRecord;
use crate::Result;

const FOSSIL_CSV: &str = include_str!("../../data/fossil.csv");

/// Decodes a fossil table with header `en,ko,ja,price`.
pub fn parse_fossil_table(text: &str) -> Result<Vec<FossilRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut rows: Vec<FossilRecord> = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

pub(super) fn table() -> &'static [FossilRecord] {
    static TABLE: OnceLock<Vec<FossilRecord>> = OnceLock::new();
    TABLE.get_or_init(|| match parse_fossil_table(FOSSIL_CSV) {
        Ok(rows) => rows,
        Err(err) => {
            log::error!("embedded fossil table is unreadable: {err}");
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_trims_cells() {
        let rows = parse_fossil_table("en,ko,ja,price\n amber , 호박 ,こはく, 1200\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].en, "amber");
        assert_eq!(rows[0].ko, "호박");
        assert_eq!(rows[0].price, 1200);
    }

    #[test]
    fn rejects_non_numeric_price() {
        assert!(parse_fossil_table("en,ko,ja,price\namber,호박,こはく,lots\n").is_err());
    }

    #[test]
    fn embedded_table_decodes() {
        assert!(!table().is_empty());
    }
}
