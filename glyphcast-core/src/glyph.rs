//! Mapping from OpenWeather condition codes to Nerd Font weather glyphs.
//!
//! Lookup happens in two passes. Codes whose icon never depends on the time
//! of day are checked first; everything else goes through the day or night
//! table. Anything left over maps to [`UNKNOWN_GLYPH`].

/// Returned for condition codes no table covers.
pub const UNKNOWN_GLYPH: char = '\u{FFFD}';

/// Which condition codes a rule applies to.
#[derive(Debug, Clone, Copy)]
enum CodeMatch {
    /// Any of the listed codes.
    OneOf(&'static [i32]),
    /// Half-open range `[start, end)`.
    Within(i32, i32),
}

impl CodeMatch {
    fn matches(self, code: i32) -> bool {
        match self {
            CodeMatch::OneOf(codes) => codes.contains(&code),
            CodeMatch::Within(start, end) => (start..end).contains(&code),
        }
    }
}

type Rule = (CodeMatch, char);

const ANY_TIME: &[Rule] = &[
    (CodeMatch::OneOf(&[711]), '\u{e35c}'),      // smoke
    (CodeMatch::OneOf(&[721, 741]), '\u{e313}'), // haze, fog
    (CodeMatch::OneOf(&[761]), '\u{e35d}'),      // dust
    (CodeMatch::OneOf(&[762]), '\u{e3c0}'),      // volcanic ash
    (CodeMatch::OneOf(&[781]), '\u{e351}'),      // tornado
    (CodeMatch::OneOf(&[804]), '\u{e312}'),      // overcast
];

const DAY: &[Rule] = &[
    (CodeMatch::Within(200, 300), '\u{e30f}'),   // thunderstorm
    (CodeMatch::Within(300, 400), '\u{e30b}'),   // drizzle
    (CodeMatch::Within(500, 600), '\u{e308}'),   // rain
    (CodeMatch::Within(600, 700), '\u{e30a}'),   // snow
    (CodeMatch::OneOf(&[800]), '\u{e30d}'),      // clear
    (CodeMatch::OneOf(&[801]), '\u{e30c}'),      // few clouds
    (CodeMatch::OneOf(&[802, 803]), '\u{e302}'), // cloudy
];

const NIGHT: &[Rule] = &[
    (CodeMatch::Within(200, 300), '\u{e338}'),   // thunderstorm
    (CodeMatch::Within(300, 400), '\u{e334}'),   // drizzle
    (CodeMatch::Within(500, 600), '\u{e333}'),   // rain
    (CodeMatch::Within(600, 700), '\u{e335}'),   // snow
    (CodeMatch::OneOf(&[800]), '\u{e32b}'),      // clear
    (CodeMatch::OneOf(&[801]), '\u{e37b}'),      // few clouds
    (CodeMatch::OneOf(&[802, 803]), '\u{e32e}'), // cloudy
];

fn lookup(rules: &[Rule], code: i32) -> Option<char> {
    rules
        .iter()
        .find(|(matcher, _)| matcher.matches(code))
        .map(|&(_, glyph)| glyph)
}

/// Glyph for a condition code, taking the time of day into account where the
/// icon has a day and a night variant.
pub fn glyph_for(code: i32, daytime: bool) -> char {
    let by_time = if daytime { DAY } else { NIGHT };

    lookup(ANY_TIME, code)
        .or_else(|| lookup(by_time, code))
        .unwrap_or(UNKNOWN_GLYPH)
}

/// True iff `now` lies strictly between `sunrise` and `sunset`.
///
/// All three values are Unix timestamps in seconds.
pub fn is_daytime(sunrise: i64, sunset: i64, now: i64) -> bool {
    sunrise < now && now < sunset
}
