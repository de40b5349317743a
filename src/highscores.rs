//! High score persistence
//!
//! A single integer stored in LocalStorage as plain decimal text.

/// The best score seen on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    pub score: u32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "highScore";

    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Parse a stored value
    ///
    /// Missing or non-numeric text reads as 0. Fractions truncate and
    /// negative values clamp to 0.
    pub fn parse(raw: Option<&str>) -> Self {
        let score = raw
            .and_then(|text| text.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(|value| value.trunc().min(u32::MAX as f64) as u32)
            .unwrap_or(0);
        Self { score }
    }

    /// Text written to storage
    pub fn to_storage_string(&self) -> String {
        self.score.to_string()
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let raw = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let high = Self::parse(raw.as_deref());
        log::info!("Loaded high score: {}", high.score);
        high
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage {
            Some(storage) => {
                if storage
                    .set_item(Self::STORAGE_KEY, &self.to_storage_string())
                    .is_err()
                {
                    log::warn!("Failed to save high score {}", self.score);
                } else {
                    log::info!("High score saved: {}", self.score);
                }
            }
            None => log::warn!("LocalStorage unavailable, high score not saved"),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::info!("High score (not persisted natively): {}", self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_is_zero() {
        assert_eq!(HighScore::parse(None).score, 0);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(HighScore::parse(Some("42")).score, 42);
        assert_eq!(HighScore::parse(Some(" 17 ")).score, 17);
        assert_eq!(HighScore::parse(Some("12.9")).score, 12);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(HighScore::parse(Some("")).score, 0);
        assert_eq!(HighScore::parse(Some("abc")).score, 0);
        assert_eq!(HighScore::parse(Some("-5")).score, 0);
        assert_eq!(HighScore::parse(Some("NaN")).score, 0);
        assert_eq!(HighScore::parse(Some("inf")).score, 0);
    }

    #[test]
    fn test_storage_string() {
        assert_eq!(HighScore::new(31).to_storage_string(), "31");
    }
}
