use chrono::{Duration, Local};

use crate::trade::FiatVolume;

const SATS_PER_BTC: u64 = 100_000_000;
const MINUTES_PER_BLOCK: u64 = 10;

/// Display formatting for the pending-trades screen. Stateless; all inputs
/// come from the data model.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Self
    }

    /// Satoshi amount as a BTC decimal, trailing zeros trimmed but keeping
    /// at least two fraction digits.
    pub fn format_btc_with_code(&self, sats: u64) -> String {
        let whole = sats / SATS_PER_BTC;
        let mut fraction = format!("{:08}", sats % SATS_PER_BTC);
        while fraction.len() > 2 && fraction.ends_with('0') {
            fraction.pop();
        }
        format!("{}.{} BTC", whole, fraction)
    }

    /// Fiat minor-unit amount rendered with the currency's exponent and ISO
    /// code, e.g. 2 for EUR cents, 0 for JPY.
    pub fn format_fiat_with_code(&self, volume: &FiatVolume) -> String {
        let exponent = volume
            .currency
            .exponent()
            .and_then(|exponent| u32::try_from(exponent).ok())
            .unwrap_or(2);
        let code = volume.currency.code();
        if exponent == 0 {
            return format!("{} {}", volume.amount_minor, code);
        }
        let divisor = 10u64.pow(exponent);
        format!(
            "{}.{:0width$} {}",
            volume.amount_minor / divisor,
            volume.amount_minor % divisor,
            code,
            width = exponent as usize
        )
    }

    /// Humanized duration between two block heights at the nominal
    /// 10-minute block interval.
    pub fn period_between_block_heights(&self, from_height: u32, to_height: u32) -> String {
        if to_height <= from_height {
            return "0 minutes".to_string();
        }
        let minutes = u64::from(to_height - from_height) * MINUTES_PER_BLOCK;
        let days = minutes / (24 * 60);
        let hours = (minutes % (24 * 60)) / 60;
        let remaining_minutes = minutes % 60;

        let mut parts = Vec::new();
        if days > 0 {
            parts.push(Self::pluralize(days, "day"));
        }
        if hours > 0 {
            parts.push(Self::pluralize(hours, "hour"));
        }
        if remaining_minutes > 0 {
            parts.push(Self::pluralize(remaining_minutes, "minute"));
        }
        parts.join(", ")
    }

    /// Wall-clock date the given number of blocks from now.
    pub fn blocks_to_now_date_formatted(&self, blocks: u32) -> String {
        let eta = Local::now() + Duration::minutes((u64::from(blocks) * MINUTES_PER_BLOCK) as i64);
        eta.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn role(&self, is_buyer_offerer_and_seller_taker: bool, is_offerer: bool) -> String {
        match (is_buyer_offerer_and_seller_taker, is_offerer) {
            (true, true) => "Bitcoin buyer (offerer)".to_string(),
            (true, false) => "Bitcoin seller (taker)".to_string(),
            (false, true) => "Bitcoin seller (offerer)".to_string(),
            (false, false) => "Bitcoin buyer (taker)".to_string(),
        }
    }

    fn pluralize(count: u64, unit: &str) -> String {
        if count == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", count, unit)
        }
    }
}
