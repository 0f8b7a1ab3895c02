//! Locale-aware number formatting and the decorative count-up curve.

use crate::i18n::Language;

/// Average CO₂ a mature tree absorbs per year, in kilograms.
pub const KG_CO2_PER_TREE_PER_YEAR: f64 = 22.0;

const fn separators(language: Language) -> (char, char) {
    match language {
        Language::De => ('.', ','),
        Language::En => (',', '.'),
    }
}

/// Format `value` with `decimals` fraction digits and the language's grouping.
#[must_use]
pub fn format_decimal(value: f64, decimals: usize, language: Language) -> String {
    if !value.is_finite() {
        return "–".to_string();
    }
    let (group_sep, decimal_sep) = separators(language);
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push(decimal_sep);
        grouped.push_str(frac_part);
    }
    let is_zero = fixed.chars().all(|ch| ch == '0' || ch == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

/// Whole numbers without decimals, everything else with one.
#[must_use]
pub fn format_number(value: f64, language: Language) -> String {
    let decimals = if (value - value.round()).abs() < 1e-9 { 0 } else { 1 };
    format_decimal(value, decimals, language)
}

/// `12,5 kWh`.
#[must_use]
pub fn format_kwh(value: f64, language: Language) -> String {
    format!("{} kWh", format_number(value, language))
}

/// `5 kW`.
#[must_use]
pub fn format_kw(value: f64, language: Language) -> String {
    format!("{} kW", format_number(value, language))
}

/// `1.234 kg`.
#[must_use]
pub fn format_kg(value: f64, language: Language) -> String {
    format!("{} kg", format_decimal(value, 0, language))
}

/// `95,5 %`.
#[must_use]
pub fn format_percent(value: f64, language: Language) -> String {
    format!("{} %", format_number(value, language))
}

/// `8.990 €` / `€8,990`.
#[must_use]
pub fn format_eur(value: f64, language: Language) -> String {
    match language {
        Language::De => format!("{} €", format_decimal(value, 0, language)),
        Language::En => format!("€{}", format_decimal(value, 0, language)),
    }
}

/// Trees needed to absorb `kg` of CO₂ in a year, rounded to the nearest tree.
#[must_use]
pub fn trees_equivalent(kg: f64) -> f64 {
    if !kg.is_finite() || kg <= 0.0 {
        return 0.0;
    }
    (kg / KG_CO2_PER_TREE_PER_YEAR).round()
}

/// Cubic ease-out on `t` clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

/// Value shown by a count-up animation after `elapsed_ms` of `duration_ms`.
#[must_use]
pub fn count_up(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    target * ease_out_cubic(elapsed_ms / duration_ms)
}

/// True once a count-up animation has reached its target and can stop ticking.
#[must_use]
pub fn count_up_done(elapsed_ms: f64, duration_ms: f64) -> bool {
    duration_ms.is_nan() || elapsed_ms >= duration_ms
}
