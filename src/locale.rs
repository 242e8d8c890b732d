//! Locale table for the instance settings form
//!
//! Mirrors the instance's available-locales list. Tags use the `xx-AA`
//! form. Order is presentation order: the default entry first, then the
//! concrete locales.

/// A selectable locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    /// BCP 47 tag; `None` selects the instance default
    pub value: Option<&'static str>,
    /// Label shown in the selector
    pub title: &'static str,
    /// Flag shown next to the label, when one applies
    pub flag: Option<&'static str>,
}

const fn locale(tag: &'static str, flag: &'static str) -> LocaleOption {
    LocaleOption {
        value: Some(tag),
        title: tag,
        flag: Some(flag),
    }
}

/// The locales an instance can offer, in presentation order
pub const AVAILABLE_LOCALES: &[LocaleOption] = &[
    LocaleOption {
        value: None,
        title: "default (instance locale)",
        flag: None,
    },
    locale("en", "🇺🇸"),
    locale("de", "🇩🇪"),
    locale("ar", "🇸🇦"),
    locale("ar-SA", "🇸🇦"),
    locale("bg", "🇧🇬"),
    locale("ca", "🇪🇺"),
    locale("cs", "🇨🇿"),
    locale("da", "🇩🇰"),
    locale("es", "🇪🇺"),
    locale("fa", "🇮🇷"),
    locale("fi", "🇫🇮"),
    locale("fr", "🇫🇷"),
    locale("he", "🇮🇱"),
    locale("hu", "🇭🇺"),
    locale("id", "🇮🇩"),
    locale("it", "🇮🇹"),
    locale("ja", "🇯🇵"),
    locale("ko", "🇰🇷"),
    locale("lv", "🇱🇻"),
    locale("ms", "🇲🇾"),
    locale("nb", "🇳🇴"),
    locale("nl", "🇳🇱"),
    locale("pl", "🇵🇱"),
    locale("pt-BR", "🇧🇷"),
    locale("ru", "🇷🇺"),
    locale("sk", "🇸🇰"),
    locale("sl", "🇸🇱"),
    locale("sq", "🇦🇱"),
    locale("sr", "🇷🇸"),
    locale("sv", "🇸🇪"),
    locale("tr", "🇹🇷"),
    locale("uk", "🇺🇦"),
    locale("vi", "🇻🇳"),
    locale("zh-CN", "🇨🇳"),
    locale("zh-HK", "🇭🇰"),
    locale("zh-TW", "🇹🇼"),
];

/// Look up a locale by its tag
pub fn find_locale(tag: &str) -> Option<&'static LocaleOption> {
    AVAILABLE_LOCALES
        .iter()
        .find(|option| option.value == Some(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_comes_first() {
        let first = &AVAILABLE_LOCALES[0];
        assert_eq!(first.value, None);
        assert_eq!(first.flag, None);
    }

    #[test]
    fn test_find_known_locale() {
        let option = find_locale("pt-BR").expect("pt-BR should be available");
        assert_eq!(option.title, "pt-BR");
        assert_eq!(option.flag, Some("🇧🇷"));
    }

    #[test]
    fn test_find_unknown_locale() {
        assert!(find_locale("xx").is_none());
        // Tags are exact; the generic "ar" does not answer for "ar-SA"
        assert_eq!(find_locale("ar-SA").unwrap().value, Some("ar-SA"));
    }

    #[test]
    fn test_no_duplicate_tags() {
        let mut tags: Vec<_> = AVAILABLE_LOCALES.iter().filter_map(|o| o.value).collect();
        let before = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), before);
    }
}
