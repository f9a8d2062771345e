// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(%filename, count = errors.len(), "skipping unparsable translation file");
                    continue;
                }
            };
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if bundle.add_resource(resource).is_err() {
                tracing::warn!(%filename, "translation file has duplicate messages");
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(default_locale);
        tracing::info!(locale = %current_locale, "selected locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(DEFAULT_LOCALE.as_bytes()).unwrap_or_default()
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. Check OS locale
    let os_locale = sys_locale::get_locale();
    os_locale.as_deref().and_then(supported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    fn available() -> Vec<LanguageIdentifier> {
        vec![
            "en-US".parse().unwrap(),
            "es".parse().unwrap(),
            "fr".parse().unwrap(),
        ]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let mut config = Config::default();
        config.general.language = Some("es".to_string());
        let lang = resolve_locale(None, &config, &available());
        assert_eq!(lang, Some("es".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_cli_beats_config() {
        let mut config = Config::default();
        config.general.language = Some("es".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_unsupported_cli_is_ignored() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(Some("xx-YY".to_string()), &config, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_default() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, &available());
        // Depends on the OS locale, so only check the result is supported
        if let Some(l) = lang {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        for locale in available() {
            assert!(i18n.available_locales.contains(&locale), "missing {locale}");
        }
        assert_eq!(i18n.current_locale().to_string(), "en-US");
    }

    #[test]
    fn tr_translates_and_reports_missing_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(i18n.tr("button-next"), "Next");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");

        let french = I18n::new(Some("fr".to_string()), &Config::default());
        assert_eq!(french.tr("button-next"), "Suivant");
    }

    #[test]
    fn unknown_cli_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.general.language = Some("es".to_string());
        let i18n = I18n::new(Some("de".to_string()), &config);
        assert_eq!(i18n.current_locale().to_string(), "es");
    }
}
