use gridline::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.checkbox(false), "[ ]");
    assert_eq!(service.checkbox(true), "[x]");
    assert_eq!(service.grip(), ":");
    assert_eq!(service.resize_handle(), "|");
    assert_eq!(service.edit(), "E");
    assert_eq!(service.delete(), "X");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.checkbox(true), "☑");
    assert_eq!(service.visibility(true), "◉");
    assert_eq!(service.visibility(false), "○");
}

#[test]
fn test_theme_deserializes_lowercase() {
    let theme: IconTheme = serde_json::from_str("\"emoji\"").unwrap();
    assert_eq!(theme, IconTheme::Emoji);
}
