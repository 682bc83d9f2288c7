use crate::{Config, CurrentConditions, glyph};

/// Format the output line: `"<glyph> <feels_like>°<units>"`.
///
/// Without a glyph the line starts with the separating space.
pub fn render_line(glyph: Option<char>, feels_like: f64, units: &str) -> String {
    let glyph = glyph.map(String::from).unwrap_or_default();
    format!("{glyph} {feels_like:.1}°{units}")
}

/// Build the output line for `conditions`. `now` is a Unix timestamp in seconds.
pub fn summarize(conditions: &CurrentConditions, config: &Config, now: i64) -> String {
    let glyph = config.icon.then(|| {
        conditions
            .primary_condition()
            .map(|c| glyph::glyph_for(c.id, conditions.is_daytime_at(now)))
            .unwrap_or(glyph::UNKNOWN_GLYPH)
    });

    render_line(glyph, conditions.main.feels_like, &config.units)
}
