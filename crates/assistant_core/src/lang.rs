use std::fmt;

/// The content languages carried by multilingual field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {
    En,
    Fr,
    Ar,
}

impl Lang {
    /// Every configured language, in fallback-resolution order after the
    /// current UI language.
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Fr, Lang::Ar];

    /// The identifier suffix and wire code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Fr => "fr",
            Lang::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "fr" => Some(Lang::Fr),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Splits a trailing language suffix off an element identifier.
///
/// Field groups follow the `{base}-{code}` convention, so
/// `"tagline-en"` resolves to `("tagline", Lang::En)`. Identifiers without
/// a recognized suffix return `None` and are treated as stand-alone fields.
pub fn split_lang_suffix(id: &str) -> Option<(&str, Lang)> {
    let (base, suffix) = id.rsplit_once('-')?;
    if base.is_empty() {
        return None;
    }
    Some((base, Lang::from_code(suffix)?))
}

/// Identifier of the sibling carrying `lang` within the same field group.
pub fn sibling_id(base: &str, lang: Lang) -> String {
    format!("{base}-{}", lang.code())
}
