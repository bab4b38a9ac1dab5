use rat_numbermask::mask_io::{
    all_from_ini_str, from_ini_str, load_mask_config, store_mask_config, to_ini_string,
};
use rat_numbermask::{MaskConfig, MaskError, MaskKind, NumberMaskField};
use std::io::Cursor;

const FIELDS: &str = "
[card]
kind=card
template=XXXX XXXX XXXX XXXX

[phone]
kind=phone
template=(XXX) XXX-XX-XX
country_code=7
bracketed=false
trunk_prefix=8

[local]
kind=phone
template=XXX-XX-XX
";

#[test]
fn test_read() {
    let card = from_ini_str(FIELDS, "card").unwrap();
    assert_eq!(card, MaskConfig::card("XXXX XXXX XXXX XXXX").unwrap());

    let phone = from_ini_str(FIELDS, "phone").unwrap();
    assert_eq!(phone.kind(), MaskKind::PhoneNumber);
    assert_eq!(phone.template(), "(XXX) XXX-XX-XX");
    assert_eq!(phone.country_code(), Some("7"));
    assert!(!phone.bracketed());
    assert_eq!(phone.trunk_prefix(), Some("8"));

    let local = from_ini_str(FIELDS, "local").unwrap();
    assert_eq!(local, MaskConfig::phone("XXX-XX-XX", None).unwrap());

    let field = NumberMaskField::new(phone).unwrap();
    assert_eq!(field.initial_value(), "+7 ");
}

#[test]
fn test_read_all() {
    let all = all_from_ini_str(FIELDS).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().any(|(name, cfg)| name == "card" && cfg.kind() == MaskKind::CardNumber));
    assert!(all.iter().any(|(name, cfg)| name == "local" && cfg.country_code().is_none()));
}

#[test]
fn test_read_errors() {
    assert!(matches!(
        from_ini_str(FIELDS, "fax"),
        Err(MaskError::Config(_))
    ));
    assert!(matches!(
        from_ini_str("[a]\nkind=fax\ntemplate=XXX\n", "a"),
        Err(MaskError::Config(_))
    ));
    assert!(matches!(
        from_ini_str("[a]\nkind=card\n", "a"),
        Err(MaskError::Config(_))
    ));
    assert!(matches!(
        from_ini_str("[a]\nkind=phone\ntemplate=XXX\nbracketed=maybe\n", "a"),
        Err(MaskError::Config(_))
    ));
    assert_eq!(
        from_ini_str("[a]\nkind=card\ntemplate=XX1X\n", "a"),
        Err(MaskError::InvalidTemplate("XX1X".into()))
    );
    assert_eq!(
        from_ini_str("[a]\nkind=phone\ntemplate=XXX\ncountry_code=+7\n", "a"),
        Err(MaskError::InvalidCountryCode("+7".into()))
    );
    // one bad section fails all of them.
    assert!(all_from_ini_str("[a]\nkind=card\ntemplate=XXX\n[b]\nkind=card\n").is_err());
}

#[test]
fn test_write() {
    let cfg = MaskConfig::phone("XXX XXX XX XX", Some("7"))
        .unwrap()
        .with_bracketed(true)
        .unwrap();
    let text = to_ini_string(&cfg, "phone").unwrap();
    assert!(text.contains("[phone]"));
    assert!(text.contains("country_code=7"));
    assert!(text.contains("bracketed=true"));
    assert!(!text.contains("trunk_prefix"));
    assert_eq!(from_ini_str(&text, "phone").unwrap(), cfg);

    let cfg = MaskConfig::card("XXXX XXXX").unwrap();
    let text = to_ini_string(&cfg, "card").unwrap();
    assert!(!text.contains("bracketed"));

    // can't be read back
    let cfg = MaskConfig::card("XXXX ").unwrap();
    assert!(matches!(
        to_ini_string(&cfg, "card"),
        Err(MaskError::Config(_))
    ));
}

#[test]
fn test_load_store() {
    let cfg = MaskConfig::phone("(XX) XXX-XX-XX", Some("375"))
        .unwrap()
        .with_trunk_prefix(Some("80"))
        .unwrap();

    let mut buf = Vec::new();
    store_mask_config(&cfg, "by", &mut buf).unwrap();
    let loaded = load_mask_config(Cursor::new(buf), "by").unwrap();
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.effective_mask(), "+XXX (XX) XXX-XX-XX");
}
