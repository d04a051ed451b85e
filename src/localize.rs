use std::{fmt, str::FromStr};

/// Every message the card can show, addressed by its dotted path in the language tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    CommonVersion,
    CommonInvalidConfiguration,
    CommonShowWarning,
    CommonShowError,
    StateNoEntity,
    StateInvalidEntityId,
    StateEntityNotFound,
    StateNotNumeric,
    VocExcellent,
    VocGood,
    VocModerate,
    VocPoor,
    VocUnhealthy,
    VocHazardous,
}

impl MessageKey {
    pub const ALL: [MessageKey; 14] = [
        MessageKey::CommonVersion,
        MessageKey::CommonInvalidConfiguration,
        MessageKey::CommonShowWarning,
        MessageKey::CommonShowError,
        MessageKey::StateNoEntity,
        MessageKey::StateInvalidEntityId,
        MessageKey::StateEntityNotFound,
        MessageKey::StateNotNumeric,
        MessageKey::VocExcellent,
        MessageKey::VocGood,
        MessageKey::VocModerate,
        MessageKey::VocPoor,
        MessageKey::VocUnhealthy,
        MessageKey::VocHazardous,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            MessageKey::CommonVersion => "common.version",
            MessageKey::CommonInvalidConfiguration => "common.invalid_configuration",
            MessageKey::CommonShowWarning => "common.show_warning",
            MessageKey::CommonShowError => "common.show_error",
            MessageKey::StateNoEntity => "state.no_entity",
            MessageKey::StateInvalidEntityId => "state.invalid_entity_id",
            MessageKey::StateEntityNotFound => "state.entity_not_found",
            MessageKey::StateNotNumeric => "state.not_numeric",
            MessageKey::VocExcellent => "voc.excellent",
            MessageKey::VocGood => "voc.good",
            MessageKey::VocModerate => "voc.moderate",
            MessageKey::VocPoor => "voc.poor",
            MessageKey::VocUnhealthy => "voc.unhealthy",
            MessageKey::VocHazardous => "voc.hazardous",
        }
    }

    /// Resolves the text for `language`, falling back to English and then to the key path.
    pub fn localize(&self, language: Language) -> &'static str {
        language
            .lookup(*self)
            .or_else(|| Language::default().lookup(*self))
            .unwrap_or_else(|| self.path())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for MessageKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.path() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    Nb,
}

impl Language {
    fn lookup(&self, key: MessageKey) -> Option<&'static str> {
        match self {
            Language::En => lookup_en(key),
            Language::Fr => lookup_fr(key),
            Language::Nb => lookup_nb(key),
        }
    }

    /// Parses a host language code, using English for anything unknown.
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }
}

// Accepts bare codes as well as region tagged ones ("fr-FR", "nb_NO").
impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "nb" | "no" => Ok(Language::Nb),
            _ => Err(()),
        }
    }
}

macro_rules! language_table {
    ($lang:ident { $($key:ident => $text:expr),* $(,)? }) => {
        paste::paste! {
            #[allow(unreachable_patterns)]
            fn [<lookup_ $lang>](key: MessageKey) -> Option<&'static str> {
                match key {
                    $(MessageKey::$key => Some($text),)*
                    _ => None,
                }
            }
        }
    };
}

language_table!(en {
    CommonVersion => "Version",
    CommonInvalidConfiguration => "Invalid configuration",
    CommonShowWarning => "Show Warning",
    CommonShowError => "Show Error",
    StateNoEntity => "No entity defined",
    StateInvalidEntityId => "Invalid entity id: {entity}",
    StateEntityNotFound => "Entity not available: {entity}",
    StateNotNumeric => "No reading from {entity}",
    VocExcellent => "Excellent: Air Ok!",
    VocGood => "Good: Airing or ventilation recommended",
    VocModerate => "Moderate: Increased ventilation recommended",
    VocPoor => "Poor: Airing or ventilation necessary",
    VocUnhealthy => "Health hazard: Increased ventilation necessary",
    VocHazardous => "Danger: Leave the area!!!",
});

language_table!(fr {
    CommonVersion => "Version",
    CommonInvalidConfiguration => "Configuration invalide",
    CommonShowWarning => "Afficher l'avertissement",
    CommonShowError => "Afficher l'erreur",
    StateNoEntity => "Aucune entité définie",
    StateInvalidEntityId => "Identifiant d'entité invalide : {entity}",
    StateEntityNotFound => "Entité indisponible : {entity}",
    StateNotNumeric => "Aucune mesure de {entity}",
    VocExcellent => "Excellent : Air Ok !",
    VocGood => "Correct : Aération ou ventilation recommandée",
    VocModerate => "Moyen : Ventilation intensifiée recommandée",
    VocPoor => "Mauvais : Aération ou ventilation nécessaire",
    VocUnhealthy => "Danger pour la santé : Ventilation intensifiée nécessaire",
    VocHazardous => "Danger : Quitter la zone !!!",
});

// The state.* messages are not translated yet and resolve through English.
language_table!(nb {
    CommonVersion => "Versjon",
    CommonInvalidConfiguration => "Ugyldig konfigurasjon",
    CommonShowWarning => "Vis advarsel",
    CommonShowError => "Vis feil",
    VocExcellent => "Utmerket: Luften er OK!",
    VocGood => "Bra: Lufting eller ventilasjon anbefales",
    VocModerate => "Middels: Økt ventilasjon anbefales",
    VocPoor => "Dårlig: Lufting eller ventilasjon nødvendig",
    VocUnhealthy => "Helsefare: Økt ventilasjon nødvendig",
    VocHazardous => "Fare: Forlat området!!!",
});

/// Looks up a dotted message path such as `"common.version"`.
///
/// `lang` defaults to English. Unknown languages resolve through English, and a path that
/// names no message is returned verbatim.
pub fn localize(path: &str, lang: Option<&str>) -> String {
    let language = Language::from_code_or_default(lang);
    match path.parse::<MessageKey>() {
        Ok(key) => key.localize(language).to_string(),
        Err(_) => path.to_string(),
    }
}

/// Like [`localize`], then replaces the first occurrence of `search` with `replace`.
/// Nothing is replaced when either of them is empty.
pub fn localize_replace(path: &str, lang: Option<&str>, search: &str, replace: &str) -> String {
    let translated = localize(path, lang);
    if search.is_empty() || replace.is_empty() {
        return translated;
    }
    translated.replacen(search, replace, 1)
}
