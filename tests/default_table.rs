//! Properties of the built-in favicon table, checked through the public API.

use std::collections::BTreeSet;

use favicons::{default_favicons, FaviconSet, Sizes, Theme, ValidationRules, DEFAULT_FAVICONS};

#[test]
fn test_exactly_twelve_entries() {
    assert_eq!(DEFAULT_FAVICONS.len(), 12);
    assert_eq!(default_favicons().len(), 12);
}

#[test]
fn test_six_per_theme() {
    let set = default_favicons();
    assert_eq!(set.for_theme(Theme::Light).count(), 6);
    assert_eq!(set.for_theme(Theme::Dark).count(), 6);
}

#[test]
fn test_sizes_tokens_are_any_or_dimensions() {
    for d in &default_favicons() {
        let token = d.sizes().to_string();
        if token == "any" {
            assert!(d.sizes().is_any());
            continue;
        }
        let (w, h) = token.split_once('x').expect("WxH");
        assert!(!w.is_empty() && w.chars().all(|c| c.is_ascii_digit()), "{}", token);
        assert!(!h.is_empty() && h.chars().all(|c| c.is_ascii_digit()), "{}", token);
    }
}

#[test]
fn test_size_parity_across_themes() {
    let set = default_favicons();
    let expected: BTreeSet<Sizes> = ["192x192", "180x180", "32x32", "512x512", "16x16", "any"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    assert_eq!(set.sizes_for(Theme::Light), expected);
    assert_eq!(set.sizes_for(Theme::Dark), expected);
    assert!(set.has_size_parity());
}

#[test]
fn test_every_src_under_favicon_dir() {
    for d in &default_favicons() {
        assert!(!d.src().is_empty());
        assert!(d.src().starts_with("/favicon/"), "{}", d.src());
    }
}

#[test]
fn test_ico_shared_between_themes() {
    let set = default_favicons();
    let icos: Vec<_> = set.iter().filter(|d| d.sizes().is_any()).collect();
    assert_eq!(icos.len(), 2);
    assert_eq!(icos[0].src(), icos[1].src());
    assert_ne!(icos[0].theme(), icos[1].theme());
}

#[test]
fn test_repeated_reads_are_identical() {
    let first = default_favicons();
    let second = FaviconSet::defaults();
    assert_eq!(first, second);
    assert_eq!(first.as_slice(), &DEFAULT_FAVICONS[..]);
}

#[test]
fn test_defaults_pass_validation() {
    default_favicons()
        .validate(&ValidationRules::default())
        .expect("built-in table is valid");
}
