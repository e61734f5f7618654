//! Slug-style path cleaner with per-locale replacement tables.

use std::collections::HashMap;

use deunicode::deunicode;

use mediahub_core::traits::PathCleaner;

type Replacers = Vec<(String, String)>;

/// Cleans names into lowercase ASCII slugs made of `[a-z0-9_-]`.
///
/// Locale replacers are applied first (so `de` turns `ü` into `ue` instead
/// of the transliterated `u`), then the text is transliterated to ASCII.
#[derive(Debug, Clone)]
pub struct SlugPathCleaner {
    /// Applied for every locale.
    default: Replacers,
    /// Keyed by lowercase language code.
    locales: HashMap<String, Replacers>,
}

impl Default for SlugPathCleaner {
    fn default() -> Self {
        let table = |pairs: &[(&str, &str)]| -> Replacers {
            pairs
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect()
        };

        let mut locales = HashMap::new();
        locales.insert(
            "de".to_string(),
            table(&[
                ("&", "und"),
                ("ä", "ae"),
                ("ö", "oe"),
                ("ü", "ue"),
                ("Ä", "ae"),
                ("Ö", "oe"),
                ("Ü", "ue"),
                ("ß", "ss"),
            ]),
        );
        locales.insert("en".to_string(), table(&[("&", "and")]));
        locales.insert("fr".to_string(), table(&[("&", "et")]));
        locales.insert("it".to_string(), table(&[("&", "e")]));
        locales.insert("nl".to_string(), table(&[("&", "en")]));
        locales.insert("es".to_string(), table(&[("&", "y")]));

        Self {
            default: table(&[(" ", "-"), ("+", "-"), (".", "-")]),
            locales,
        }
    }
}

impl SlugPathCleaner {
    /// Adds or overrides replacers for `locale`.
    pub fn with_locale(mut self, locale: &str, replacers: Vec<(String, String)>) -> Self {
        self.locales.insert(locale.to_lowercase(), replacers);
        self
    }

    /// Default replacers overlaid with the locale's.
    ///
    /// A locale entry for an existing key replaces it in place; new keys are
    /// appended.
    fn replacers_for(&self, locale: &str) -> Replacers {
        let mut merged = self.default.clone();

        let locale = locale.to_lowercase();
        let language = locale.split(['-', '_']).next().unwrap_or_default();
        let extra = self
            .locales
            .get(&locale)
            .or_else(|| self.locales.get(language));

        for (from, to) in extra.into_iter().flatten() {
            match merged.iter_mut().find(|(key, _)| key == from) {
                Some(entry) => entry.1 = to.clone(),
                None => merged.push((from.clone(), to.clone())),
            }
        }

        merged
    }
}

impl PathCleaner for SlugPathCleaner {
    fn cleanup(&self, dirty: &str, locale: &str) -> String {
        let mut text = dirty.to_string();
        for (from, to) in self.replacers_for(locale) {
            text = text.replace(&from, &to);
        }

        let ascii = deunicode(&text).to_lowercase();

        let mut clean = String::with_capacity(ascii.len());
        for c in ascii.chars() {
            let c = if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' };
            if c == '-' && clean.ends_with('-') {
                continue;
            }
            clean.push(c);
        }

        clean.trim_matches('-').to_string()
    }
}
