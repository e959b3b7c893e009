use super::*;

// --- format_count ---

#[test]
fn format_count_small_values_unchanged() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(2), "2");
    assert_eq!(format_count(999), "999");
}

#[test]
fn format_count_groups_thousands() {
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(27_995), "27,995");
    assert_eq!(format_count(114_802), "114,802");
}

#[test]
fn format_count_groups_millions() {
    assert_eq!(format_count(1_234_567), "1,234,567");
    assert_eq!(format_count(12_000_000), "12,000,000");
}

#[test]
fn format_count_max_value() {
    assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
}

// --- FontTone ---

#[test]
fn font_tone_dark_at_threshold() {
    assert_eq!(FontTone::for_value(15_000, 15_000), FontTone::Dark);
}

#[test]
fn font_tone_light_just_above_threshold() {
    assert_eq!(FontTone::for_value(15_001, 15_000), FontTone::Light);
}

#[test]
fn font_tone_dark_for_small_values() {
    assert_eq!(FontTone::for_value(0, 15_000), FontTone::Dark);
    assert_eq!(FontTone::for_value(2, 15_000), FontTone::Dark);
}

#[test]
fn font_tone_css_names() {
    assert_eq!(FontTone::Light.css(), "white");
    assert_eq!(FontTone::Dark.css(), "black");
}
