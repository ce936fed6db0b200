use crate::{
    error::Error,
    model::CurrentWeather,
    style::{self, Color},
};

/// Width of the centered city and description fields.
pub const PADDING: usize = 20;

/// Symbol shown when a code matches no listed span.
pub const FALLBACK_SYMBOL: &str = "🌈";

/// Inclusive span of weather condition codes.
#[derive(Debug, Clone, Copy)]
struct CodeSpan {
    lo: u16,
    hi: u16,
}

impl CodeSpan {
    const fn single(code: u16) -> Self {
        Self { lo: code, hi: code }
    }

    const fn contains(self, code: u16) -> bool {
        self.lo <= code && code <= self.hi
    }
}

/// Condition-code spans in evaluation order; first match wins. Codes the
/// table does not cover fall through to the fallback pair, so codes the API
/// adds later still render.
///
/// https://openweathermap.org/weather-conditions#Weather-Condition-Codes-2
const DISPLAY_TABLE: &[(CodeSpan, &str, Color)] = &[
    (CodeSpan { lo: 200, hi: 299 }, "⛈️", Color::Red),   // thunderstorm
    (CodeSpan { lo: 300, hi: 399 }, "🌧️", Color::Cyan),  // drizzle
    (CodeSpan { lo: 500, hi: 599 }, "☔", Color::Blue),   // rain
    (CodeSpan { lo: 600, hi: 699 }, "❄️", Color::White),  // snow
    (CodeSpan::single(701), "🌫️", Color::PaleBlue),      // mist
    (CodeSpan::single(711), "💨", Color::Ash),            // smoke
    (CodeSpan::single(721), "😶‍🌫️", Color::LightBlue),  // haze
    (CodeSpan::single(731), "🌪️", Color::Brown),         // dust whirls
    (CodeSpan::single(741), "😶‍🌫️", Color::Ash),        // fog
    (CodeSpan::single(751), "🏜️", Color::Yellow),        // sand
    (CodeSpan::single(761), "💨", Color::Brown),          // dust
    (CodeSpan::single(762), "🌋", Color::Red),            // volcanic ash
    (CodeSpan::single(771), "🌬️", Color::Blue),          // squall
    (CodeSpan::single(781), "🌪️", Color::White),         // tornado
    (CodeSpan::single(800), "☀️", Color::Yellow),         // clear
    (CodeSpan { lo: 801, hi: 899 }, "⛅", Color::White),  // cloudy
];

/// Symbol and color for a weather condition code.
pub fn display_params(code: u16) -> (&'static str, Color) {
    DISPLAY_TABLE
        .iter()
        .find(|(span, _, _)| span.contains(code))
        .map_or((FALLBACK_SYMBOL, Color::Default), |&(_, symbol, color)| (symbol, color))
}

/// Capitalize each whitespace-separated word: "clear sky" -> "Clear Sky".
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the one-line weather report: reverse-video city, condition
/// symbol, colored title-cased description, temperature in °C.
///
/// No trailing newline; the caller terminates the line.
pub fn render(weather: &CurrentWeather) -> Result<String, Error> {
    let condition = weather.primary()?;
    let (symbol, color) = display_params(condition.id);

    let city = style::reverse(&format!("{:^width$}", weather.name, width = PADDING));
    let description = style::paint(
        &format!("{:^width$}", title_case(&condition.description), width = PADDING),
        color,
    );

    Ok(format!(
        "{city}\t{symbol} \t{description} ({}°C)",
        weather.main.temp
    ))
}
