use serde::{Deserialize, Serialize};

/// One commodity quote on the market ticker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MarketQuote {
    pub crop: String,
    /// Spot price in whole currency units.
    pub price: u32,
    /// Day-over-day change in percent; negative means falling.
    pub change_pct: f64,
    /// Currency and measure, e.g. `₹/quintal`.
    pub unit: String,
}

impl MarketQuote {
    pub fn is_rising(&self) -> bool {
        self.change_pct >= 0.0
    }

    /// Price with thousands grouping folded into the unit, e.g. `₹2,150/quintal`.
    pub fn price_label(&self) -> String {
        match self.unit.split_once('/') {
            Some((currency, measure)) => {
                format!("{}{}/{}", currency, group_thousands(self.price), measure)
            }
            None => format!("{} {}", group_thousands(self.price), self.unit),
        }
    }

    /// Magnitude of the change as displayed next to the trend arrow, e.g. `2.5%`.
    pub fn change_label(&self) -> String {
        format!("{}%", self.change_pct.abs())
    }
}

/// The bundled ticker quotes, shown until a live feed is wired up.
pub fn ticker() -> Vec<MarketQuote> {
    vec![
        quote("Wheat", 2150, 2.5),
        quote("Rice", 3200, -1.2),
        quote("Cotton", 5800, 4.8),
        quote("Sugarcane", 350, 1.5),
    ]
}

fn quote(crop: &str, price: u32, change_pct: f64) -> MarketQuote {
    MarketQuote {
        crop: crop.to_string(),
        price,
        change_pct,
        unit: "₹/quintal".to_string(),
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
