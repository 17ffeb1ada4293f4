/// Coarse condition vocabulary used by the provider, plus a catch-all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Other,
}

impl Condition {
    /// Maps a provider condition string onto the fixed vocabulary, case-insensitively.
    /// Anything unrecognized becomes Other.
    ///
    /// # Arguments
    ///
    /// * 'condition' - coarse condition string as reported by the provider
    pub fn parse(condition: &str) -> Self {
        match condition.to_ascii_lowercase().as_str() {
            "clear" | "sunny" => Condition::Clear,
            "clouds" | "cloudy" => Condition::Clouds,
            "rain" | "drizzle" => Condition::Rain,
            "snow" => Condition::Snow,
            _ => Condition::Other,
        }
    }

    /// Icon asset class for the condition. Other takes the clear sky icon.
    pub const fn icon(self) -> &'static str {
        match self {
            Condition::Clear | Condition::Other => "sunny",
            Condition::Clouds => "cloudy",
            Condition::Rain => "rainy",
            Condition::Snow => "snowy",
        }
    }
}
