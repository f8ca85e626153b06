//! Display strings derived from a [`WeatherResult`](crate::WeatherResult).
//!
//! Everything here is a pure function of its arguments; the only ambient
//! input, the hour of day, comes in through a [`Clock`].

use crate::{clock::Clock, model::CELSIUS};

/// Known condition phrases (lowercase) and the sentence shown for each.
const CONDITION_MESSAGES: &[(&str, &str)] = &[
    ("sunny", "It's a Beautiful Sunny Day!"),
    ("partly cloudy", "Expect some Clouds and Sunshine."),
    ("cloudy", "It's cloudy today."),
    ("overcast", "The sky is Overcast."),
    ("rain", "Don't forget your Umbrella! It's raining."),
    ("thunderstorm", "Thunderstorms are expected today."),
    ("snow", "Bundle up! It's Snowing."),
    ("mist", "It's misty outside."),
    ("fog", "Be careful, there's fog outside."),
];

/// Temperature commentary. Celsius values are banded; any other unit is
/// echoed back as `"{temperature}°{unit}"`.
pub fn format_temperature(temperature: f64, unit: &str) -> String {
    // -0.0 prints as "-0"
    let temperature = temperature + 0.0;

    if unit != CELSIUS {
        return format!("{temperature}°{unit}");
    }

    if temperature < 0.0 {
        format!("It's freezing at {temperature}°C! Bundle up!")
    } else if temperature < 10.0 {
        format!("It's quite cold at {temperature}°C! Wear Warm Clothes.")
    } else if temperature < 20.0 {
        format!("The temperature is {temperature}°C. Comfortable for a Light Jacket.")
    } else if temperature < 30.0 {
        format!("It's a pleasant {temperature}°C. Enjoy the nice weather!")
    } else {
        format!("It's hot at {temperature}°C. Stay hydrated!")
    }
}

/// Sentence for a known condition, matched case-insensitively.
/// Unknown descriptions come back untouched.
pub fn format_condition(description: &str) -> String {
    let key = description.to_lowercase();

    CONDITION_MESSAGES
        .iter()
        .find(|(phrase, _)| *phrase == key)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| description.to_string())
}

/// Night is 18:00 up to (not including) 06:00.
pub fn is_night(hour: u32) -> bool {
    !(6..18).contains(&hour)
}

/// `"{location} at Night"` or `"{location} During the Day"`, judged by the
/// caller's clock at call time.
pub fn format_location(location: &str, clock: &dyn Clock) -> String {
    if is_night(clock.hour()) {
        format!("{location} at Night")
    } else {
        format!("{location} During the Day")
    }
}
