use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// Цена за место и символ валюты. Цена разбирается один раз при монтировании.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fare {
    currency: String,
    unit_price: f64,
}

impl Fare {
    pub fn new(currency: impl Into<String>, unit_price: f64) -> Self {
        let unit_price = if unit_price.is_finite() { unit_price } else { 0.0 };
        Self {
            currency: currency.into(),
            unit_price,
        }
    }

    /// Ищет в тексте `<валюта><число>`, например `₹100.00 x 0 = ₹0.00`.
    /// Без совпадения цена равна 0.
    pub fn parse(text: &str, currency: &str) -> Self {
        let pattern = format!(r"{}(\d+(?:\.\d*)?|\.\d+)", regex::escape(currency));

        let unit_price = Regex::new(&pattern)
            .ok()
            .and_then(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| {
                debug!("No {} price found in fare text {:?}, defaulting to 0", currency, text);
                0.0
            });

        Self::new(currency, unit_price)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn total(&self, count: usize) -> f64 {
        self.unit_price * count as f64
    }

    pub fn label(&self, count: usize) -> String {
        let cur = &self.currency;
        if count == 0 {
            return format!("{cur}{} x 0 = {cur}0.00", money(self.unit_price));
        }
        format!(
            "{cur}{} x {} = {cur}{}",
            money(self.unit_price),
            count,
            money(self.total(count))
        )
    }
}

/// Два знака после запятой; точная середина округляется вверх, как `toFixed(2)`.
fn money(amount: f64) -> String {
    // Середина между центами представима точно только как k/8 с нечётным k
    let eighths = amount.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        return format!("{:.2}", (amount * 100.0).round() / 100.0);
    }
    format!("{:.2}", amount)
}
