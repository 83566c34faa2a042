use crate::{Catalog, Language};

/// Translation provider contract: key in, localized display string out.
pub trait Translator {
    /// Language strings are currently resolved in.
    fn language(&self) -> Language;

    /// Localized text for `key`; never fails (see [`Catalog::lookup`]).
    fn t(&self, key: &str) -> String;
}

/// A catalog pinned to one language.
#[derive(Debug, Clone, Copy)]
pub struct Localized<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Localized<'a> {
    pub fn new(catalog: &'a Catalog, language: Language) -> Self {
        Self { catalog, language }
    }
}

impl Translator for Localized<'_> {
    fn language(&self) -> Language {
        self.language
    }

    fn t(&self, key: &str) -> String {
        self.catalog.lookup(self.language, key).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_in_pinned_language() {
        let catalog = Catalog::builtin();
        assert_eq!(Localized::new(&catalog, Language::En).t("header.cashier"), "Cashier");
        assert_eq!(
            Localized::new(&catalog, Language::Ar).t("header.cashier"),
            "أمين الصندوق"
        );
    }
}
