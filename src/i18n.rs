use dioxus_i18n::prelude::*;

const EN_US: &str = include_str!("../locales/en-US.ftl");
const ES_MX: &str = include_str!("../locales/es-MX.ftl");

/// Initialize i18n configuration with English as default language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US"))
        .with_locale(Locale::new_static(unic_langid::langid!("en-US"), EN_US))
        .with_locale(Locale::new_static(unic_langid::langid!("es-MX"), ES_MX))
}
