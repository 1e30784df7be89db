use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::config::DATASET;
use crate::domain::CoinRecord;
use crate::models::CoinDataset;

/// Raw file entry, before date parsing and numeric coercion.
///
/// The numeric fields are kept as loose JSON values: the file mixes numbers,
/// numeric strings and nulls depending on the coin and the era of the row.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    date: Option<String>,
    #[serde(rename = "24h_vol", default)]
    vol_24h: Value,
    #[serde(default)]
    market_cap: Value,
    #[serde(default)]
    price_usd: Value,
}

/// Number or numeric string -> value; anything else -> missing.
/// Coercion failures are never an error, they just leave a gap.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn parse_record(entry: &RawEntry) -> Option<CoinRecord> {
    let raw_date = entry.date.as_deref()?;
    let date = NaiveDate::parse_from_str(raw_date, DATASET.date_format).ok()?;

    Some(CoinRecord {
        date,
        vol_24h: coerce_number(&entry.vol_24h),
        market_cap: coerce_number(&entry.market_cap),
        price_usd: coerce_number(&entry.price_usd),
    })
}

/// Parse the raw JSON text into a dataset.
///
/// Only the top-level shape (a coin -> records map) can fail; individual
/// records degrade instead. Records without a usable date are dropped with
/// a warning, everything else keeps whatever fields coerced cleanly.
fn parse_coins(raw: &str) -> Result<CoinDataset> {
    let by_coin: BTreeMap<String, Vec<RawEntry>> =
        serde_json::from_str(raw).context("Dataset is not a coin -> records map")?;

    let mut coins = BTreeMap::new();
    for (coin, entries) in by_coin {
        let total = entries.len();
        let mut records: Vec<CoinRecord> = entries.iter().filter_map(parse_record).collect();

        let dropped = total - records.len();
        if dropped > 0 {
            log::warn!("{}: dropped {} record(s) with unparseable dates", coin, dropped);
        }

        // Bisection and line drawing both require ascending dates
        records.sort_by_key(|r| r.date);
        coins.insert(coin, records);
    }

    Ok(CoinDataset::new(coins))
}

pub fn load_dataset(path: &Path) -> Result<CoinDataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {}", path.display()))?;

    let dataset = parse_coins(&raw)
        .with_context(|| format!("Failed to parse dataset file {}", path.display()))?;

    log::info!(
        "Loaded {} coins / {} records from {}",
        dataset.coin_count(),
        dataset.record_count(),
        path.display()
    );
    Ok(dataset)
}

/// Loads the dataset off the UI thread; the result arrives over the channel
/// and gates the first render.
pub fn spawn_dataset_loader(path: PathBuf, tx: Sender<Result<CoinDataset>>) {
    thread::spawn(move || {
        let _ = tx.send(load_dataset(&path));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_string_and_numeric_fields() {
        let raw = r#"{
            "bitcoin": [
                {"date": "28/4/2013", "24h_vol": "0", "market_cap": "1500520590", "price_usd": "135.3"},
                {"date": "12/5/2013", "24h_vol": 21560000, "market_cap": 1288693176, "price_usd": 113.9}
            ]
        }"#;

        let dataset = parse_coins(raw).unwrap();
        let records = dataset.records("bitcoin").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2013, 4, 28));
        assert_eq!(records[0].price_usd, Some(135.3));
        assert_eq!(records[1].vol_24h, Some(21_560_000.0));
        assert_eq!(records[1].market_cap, Some(1_288_693_176.0));
    }

    #[test]
    fn malformed_values_become_missing_not_errors() {
        let raw = r#"{
            "ripple": [
                {"date": "1/8/2013", "24h_vol": null, "market_cap": "n/a", "price_usd": "0.004"}
            ]
        }"#;

        let dataset = parse_coins(raw).unwrap();
        let records = dataset.records("ripple").unwrap();
        assert_eq!(records[0].vol_24h, None);
        assert_eq!(records[0].market_cap, None);
        assert_eq!(records[0].price_usd, Some(0.004));
    }

    #[test]
    fn records_without_a_usable_date_are_dropped() {
        let raw = r#"{
            "litecoin": [
                {"date": "not-a-date", "price_usd": "1.0"},
                {"price_usd": "2.0"},
                {"date": "5/6/2014", "price_usd": "3.0"}
            ]
        }"#;

        let dataset = parse_coins(raw).unwrap();
        let records = dataset.records("litecoin").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2014, 6, 5));
    }

    #[test]
    fn records_are_sorted_by_ascending_date() {
        let raw = r#"{
            "ethereum": [
                {"date": "1/1/2017", "price_usd": "8.1"},
                {"date": "1/6/2016", "price_usd": "14.0"},
                {"date": "1/12/2016", "price_usd": "7.5"}
            ]
        }"#;

        let dataset = parse_coins(raw).unwrap();
        let dates: Vec<NaiveDate> = dataset
            .records("ethereum")
            .unwrap()
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(
            dates,
            vec![date(2016, 6, 1), date(2016, 12, 1), date(2017, 1, 1)]
        );
    }

    #[test]
    fn metric_series_filters_missing_values() {
        let raw = r#"{
            "bitcoin": [
                {"date": "28/4/2013", "24h_vol": null, "price_usd": "135.3"},
                {"date": "29/4/2013", "24h_vol": "0", "price_usd": "141.96"},
                {"date": "30/4/2013", "24h_vol": "1000", "price_usd": "135.3"}
            ]
        }"#;

        let dataset = parse_coins(raw).unwrap();
        // null is missing outright, the placeholder "0" counts as missing too
        let vol = dataset.metric_series("bitcoin", Metric::Vol24h);
        assert_eq!(vol.len(), 1);
        assert_eq!(vol.points()[0].value, 1000.0);
        // market_cap never appears in this fixture at all
        let cap = dataset.metric_series("bitcoin", Metric::MarketCap);
        assert!(cap.is_empty());
        // unknown coin yields an empty series, not a crash
        let ghost = dataset.metric_series("dogecoin", Metric::PriceUsd);
        assert!(ghost.is_empty());
    }

    #[test]
    fn top_level_shape_errors_are_surfaced() {
        assert!(parse_coins("[1, 2, 3]").is_err());
        assert!(parse_coins("not json").is_err());
    }
}
