use serde::Deserialize;
use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;
use thiserror::Error;

use crate::models::SeatNumber;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got `{value}`")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Верхняя граница `TOTAL_SEATS`: раскладка строится целиком при старте.
pub const MAX_TOTAL_SEATS: u32 = 10_000;

// Главная структура конфигурации
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub layout: LayoutConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Салон: сколько мест, какие уже заняты, цена
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub total_seats: u32,
    pub seats_per_row: usize,
    pub booked_seats: BTreeSet<SeatNumber>,
    pub seat_price: f64,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    pub enable_cors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as `from_env`, with the variable lookup supplied by the caller.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                host: or("HOST", "0.0.0.0"),
                port: parse("PORT", &or("PORT", "8000"), "a valid port number")?,
                environment: or("ENVIRONMENT", "development"),
                rust_log: or("RUST_LOG", "seat_selector=debug,tower_http=debug"),
            },
            layout: LayoutConfig {
                total_seats: parse_total_seats(&or("TOTAL_SEATS", "40"))?,
                seats_per_row: parse_seats_per_row(&or("SEATS_PER_ROW", "4"))?,
                booked_seats: parse_seat_list(&or("BOOKED_SEATS", ""))?,
                seat_price: parse_price(&or("SEAT_PRICE", "0"))?,
                currency_symbol: or("CURRENCY_SYMBOL", "₹"),
            },
            features: FeatureFlags {
                enable_cors: parse("ENABLE_CORS", &or("ENABLE_CORS", "false"), "true or false")?,
            },
        })
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    })
}

fn parse_total_seats(value: &str) -> Result<u32, ConfigError> {
    const EXPECTED: &str = "a number of seats up to 10000";
    let total: u32 = parse("TOTAL_SEATS", value, EXPECTED)?;
    if total > MAX_TOTAL_SEATS {
        return Err(ConfigError::Invalid {
            var: "TOTAL_SEATS",
            expected: EXPECTED,
            value: value.to_string(),
        });
    }
    Ok(total)
}

fn parse_seats_per_row(value: &str) -> Result<usize, ConfigError> {
    match parse::<usize>("SEATS_PER_ROW", value, "a positive number")? {
        0 => Err(ConfigError::Invalid {
            var: "SEATS_PER_ROW",
            expected: "a positive number",
            value: value.to_string(),
        }),
        n => Ok(n),
    }
}

fn parse_price(value: &str) -> Result<f64, ConfigError> {
    let price: f64 = parse("SEAT_PRICE", value, "a non-negative amount")?;
    if !price.is_finite() || price < 0.0 {
        return Err(ConfigError::Invalid {
            var: "SEAT_PRICE",
            expected: "a non-negative amount",
            value: value.to_string(),
        });
    }
    Ok(price)
}

// "1, 2,5" -> {1, 2, 5}
fn parse_seat_list(value: &str) -> Result<BTreeSet<SeatNumber>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse("BOOKED_SEATS", s, "a comma-separated list of seat numbers"))
        .collect()
}
