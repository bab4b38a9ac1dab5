//!
//! Load/store a [MaskConfig] as an ini section.
//!
//! ```ini
//! [phone]
//! kind=phone
//! template=XXX XXX XX XX
//! country_code=7
//! bracketed=false
//! trunk_prefix=8
//! ```
//!
//! Serde for MaskConfig is supported as well, with the feature `serde`.
//!

use crate::MaskError;
use crate::mask_config::{MaskConfig, MaskKind};
use configparser::ini::{Ini, IniDefault};
use std::io;

fn new_ini() -> Ini {
    let mut def = IniDefault::default();
    def.case_sensitive = true;
    def.multiline = false;
    def.comment_symbols = vec![];
    Ini::new_from_defaults(def)
}

fn required(ini: &Ini, section: &str, key: &str) -> Result<String, MaskError> {
    ini.get(section, key)
        .ok_or_else(|| MaskError::Config(format!("missing {}.{}", section, key)))
}

fn read_section(ini: &Ini, section: &str) -> Result<MaskConfig, MaskError> {
    let kind = required(ini, section, "kind")?.parse::<MaskKind>()?;
    let template = required(ini, section, "template")?;

    match kind {
        MaskKind::CardNumber => MaskConfig::card(template),
        MaskKind::PhoneNumber => {
            let country_code = ini.get(section, "country_code");
            let bracketed = ini
                .getbool(section, "bracketed")
                .map_err(MaskError::Config)?
                .unwrap_or(false);
            let trunk_prefix = ini.get(section, "trunk_prefix");

            MaskConfig::phone(template, country_code.as_deref())?
                .with_bracketed(bracketed)?
                .with_trunk_prefix(trunk_prefix.as_deref())
        }
    }
}

/// Parse one section of an ini text.
pub fn from_ini_str(text: &str, section: &str) -> Result<MaskConfig, MaskError> {
    let mut ini = new_ini();
    ini.read(text.to_string()).map_err(MaskError::Config)?;
    read_section(&ini, section)
}

/// Parse all sections of an ini text. Each section is one field,
/// empty sections are skipped.
pub fn all_from_ini_str(text: &str) -> Result<Vec<(String, MaskConfig)>, MaskError> {
    let mut ini = new_ini();
    ini.read(text.to_string()).map_err(MaskError::Config)?;

    let mut fields = Vec::new();
    for section in ini.sections() {
        if ini
            .get_map_ref()
            .get(&section)
            .is_none_or(|v| v.is_empty())
        {
            continue;
        }
        let cfg = read_section(&ini, &section)?;
        fields.push((section, cfg));
    }
    Ok(fields)
}

/// Write the config as an ini section.
///
/// The ini format trims values, so a template with leading or
/// trailing whitespace can't be stored.
pub fn to_ini_string(cfg: &MaskConfig, section: &str) -> Result<String, MaskError> {
    cfg.validate()?;
    let template = cfg.template();
    if template.trim() != template {
        return Err(MaskError::Config(format!(
            "template {:?} starts or ends with whitespace",
            template
        )));
    }

    let mut ini = new_ini();
    ini.set(section, "kind", Some(cfg.kind().to_string()));
    ini.set(section, "template", Some(template.to_string()));
    if let MaskConfig::PhoneNumber { .. } = cfg {
        if let Some(code) = cfg.country_code() {
            ini.set(section, "country_code", Some(code.to_string()));
        }
        ini.set(section, "bracketed", Some(cfg.bracketed().to_string()));
        if let Some(prefix) = cfg.trunk_prefix() {
            ini.set(section, "trunk_prefix", Some(prefix.to_string()));
        }
    }
    Ok(ini.writes())
}

/// Load one section.
pub fn load_mask_config(mut r: impl io::Read, section: &str) -> Result<MaskConfig, MaskError> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)
        .map_err(|e| MaskError::Config(e.to_string()))?;
    from_ini_str(&buf, section)
}

/// Store as one section.
pub fn store_mask_config(
    cfg: &MaskConfig,
    section: &str,
    mut buf: impl io::Write,
) -> Result<(), MaskError> {
    let text = to_ini_string(cfg, section)?;
    buf.write_all(text.as_bytes())
        .map_err(|e| MaskError::Config(e.to_string()))
}
