//! User-facing message catalog for login errors.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Translatable message keys used by the login flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    InvalidCredentials,
    NetworkError,
    LoginFailed,
}

impl MessageKey {
    /// Dotted catalog key, e.g. `errors.networkError`.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "errors.invalidCredentials",
            Self::NetworkError => "errors.networkError",
            Self::LoginFailed => "errors.loginFailed",
        }
    }
}

/// Resolves message keys to display strings.
pub trait Translate {
    fn t(&self, key: MessageKey) -> String;
}

impl<L: Translate + ?Sized> Translate for &L {
    fn t(&self, key: MessageKey) -> String {
        (**self).t(key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Match a BCP 47 tag such as `en-US`; unknown languages use French.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("en") { Self::En } else { Self::Fr }
    }

    /// Browser language, or French when it cannot be read.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or(Self::Fr, |tag| Self::from_tag(&tag))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::Fr
        }
    }
}

/// Built-in French and English strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl Translate for Catalog {
    fn t(&self, key: MessageKey) -> String {
        let text = match (self.locale, key) {
            (Locale::Fr, MessageKey::InvalidCredentials) => "Email ou mot de passe incorrect",
            (Locale::Fr, MessageKey::NetworkError) => {
                "Impossible de joindre le serveur. Vérifiez votre connexion et réessayez."
            }
            (Locale::Fr, MessageKey::LoginFailed) => "La connexion a échoué",
            (Locale::En, MessageKey::InvalidCredentials) => "Invalid email or password",
            (Locale::En, MessageKey::NetworkError) => "Unable to reach the server. Check your connection and try again.",
            (Locale::En, MessageKey::LoginFailed) => "Login failed",
        };
        text.to_owned()
    }
}
