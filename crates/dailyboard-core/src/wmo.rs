// WMO weather-code mapping for the weather tile

/// Display label for a WMO weather code, per the Open-Meteo code table.
pub fn label(code: u8) -> &'static str {
    match code {
        0 => "Clear Sky",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Icy Fog",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Heavy Drizzle",
        56 => "Freezing Drizzle",
        57 => "Heavy Freezing Drizzle",
        61 => "Light Rain",
        63 => "Rain",
        65 => "Heavy Rain",
        66 => "Freezing Rain",
        67 => "Heavy Freezing Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 => "Light Showers",
        81 => "Showers",
        82 => "Heavy Showers",
        85 => "Light Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm w/ Hail",
        99 => "Heavy Thunderstorm",
        _ => "Unknown",
    }
}

/// The little message under the temperatures, by code band: sunshine,
/// clouds, fog, rain, snow, storms.
pub fn board_message(code: u8) -> &'static str {
    match code {
        0..=1 => "enjoy the sunshine",
        2..=3 => "a cloudy day",
        4..=48 => "its a bit foggy",
        49..=67 => "wear a jacket my love",
        68..=86 => "bundle up my love",
        _ => "wear a jacket my love",
    }
}

/// Board typography: every letter spaced out, double space between words.
pub fn letter_spaced(message: &str) -> String {
    message
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(label(0), "Clear Sky");
        assert_eq!(label(63), "Rain");
        assert_eq!(label(99), "Heavy Thunderstorm");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(label(42), "Unknown");
        assert_eq!(label(100), "Unknown");
    }

    #[test]
    fn messages_follow_the_code_bands() {
        assert_eq!(board_message(0), "enjoy the sunshine");
        assert_eq!(board_message(1), "enjoy the sunshine");
        assert_eq!(board_message(2), "a cloudy day");
        assert_eq!(board_message(45), "its a bit foggy");
        assert_eq!(board_message(61), "wear a jacket my love");
        assert_eq!(board_message(71), "bundle up my love");
        assert_eq!(board_message(95), "wear a jacket my love");
    }

    #[test]
    fn letter_spacing_matches_the_board_style() {
        assert_eq!(letter_spaced("a cloudy day"), "a  c l o u d y  d a y");
    }
}
