//! Dashboard data for CropCast.
//!
//! Provides the welcome banner, weather snapshot, market ticker, and
//! recent-activity feed backing the home screen. All feeds serve bundled
//! sample data until live sources are wired up.

pub mod activity;
pub mod market;
pub mod weather;
pub mod welcome;

pub use activity::{recent_activities, Activity, ActivityKind};
pub use market::{ticker, MarketQuote};
pub use weather::{ForecastDay, SkyCondition, WeatherSnapshot};
pub use welcome::{headline, headline_now, salutation, TAGLINE};
