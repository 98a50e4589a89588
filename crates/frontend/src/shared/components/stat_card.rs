use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat value is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// Fraction 0..1 shown as a percentage with the given decimals.
    Percent(u8),
    Number(u8),
    Integer,
    DurationMs,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Percent(decimals) => {
            format!("{:.prec$}%", val * 100.0, prec = decimals as usize)
        }
        ValueFormat::Number(decimals) => format!("{:.prec$}", val, prec = decimals as usize),
        ValueFormat::Integer => format_thousands(val as i64),
        ValueFormat::DurationMs => {
            if val >= 1000.0 {
                format!("{:.1}s", val / 1000.0)
            } else {
                format!("{:.0}ms", val)
            }
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "\u{2014}".to_string(),
    };

    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_from_fraction() {
        assert_eq!(format_value(0.731, ValueFormat::Percent(1)), "73.1%");
        assert_eq!(format_value(1.0, ValueFormat::Percent(0)), "100%");
    }

    #[test]
    fn test_format_integer_thousands() {
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_value(42.0, ValueFormat::Integer), "42");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_value(250.0, ValueFormat::DurationMs), "250ms");
        assert_eq!(format_value(1500.0, ValueFormat::DurationMs), "1.5s");
    }
}
