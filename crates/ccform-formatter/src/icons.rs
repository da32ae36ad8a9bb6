//! Icon assets for card brands and the CVC hint.
//!
//! The formatter never renders icons. A UI layer maps the card `type` it
//! receives (or a special key) to an [`IconAsset`] and loads it however it
//! likes.

use crate::brand::BrandKind;
use serde::Serialize;
use std::fmt;

/// Directory that holds every icon asset.
pub const ICON_DIR: &str = "icons";

/// Opaque handle to an icon image, relative to the application assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconAsset(&'static str);

impl IconAsset {
    /// Asset path, e.g. `icons/visa.png`.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for IconAsset {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for IconAsset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Every icon shipped with the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Cvc,
    CvcAmex,
    AmericanExpress,
    DinersClub,
    Mastercard,
    Discover,
    Jcb,
    Placeholder,
    Visa,
    Elo,
}

impl Icon {
    pub const ALL: [Icon; 10] = [
        Icon::Cvc,
        Icon::CvcAmex,
        Icon::AmericanExpress,
        Icon::DinersClub,
        Icon::Mastercard,
        Icon::Discover,
        Icon::Jcb,
        Icon::Placeholder,
        Icon::Visa,
        Icon::Elo,
    ];

    /// Icon for a brand type string or one of the special keys `cvc`,
    /// `cvc_amex` and `placeholder`.
    ///
    /// Hyphens and case are ignored. Unknown names resolve to the
    /// placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use ccform_formatter::Icon;
    ///
    /// assert_eq!(Icon::for_name("american-express"), Icon::AmericanExpress);
    /// assert_eq!(Icon::for_name("americanexpress"), Icon::AmericanExpress);
    /// assert_eq!(Icon::for_name("cvc_amex").asset().path(), "icons/cvc_amex.png");
    /// assert_eq!(Icon::for_name("unionpay"), Icon::Placeholder);
    /// ```
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Icon::ALL
            .into_iter()
            .find(|icon| icon.key() == key)
            .unwrap_or(Icon::Placeholder)
    }

    /// Brand icon, or the placeholder while no brand is recognized.
    #[must_use]
    pub fn for_brand(kind: Option<BrandKind>) -> Self {
        kind.map_or(Icon::Placeholder, |kind| Icon::for_name(kind.as_str()))
    }

    /// CVC hint icon: American Express prints the code on the front.
    #[must_use]
    pub fn cvc_for(kind: Option<BrandKind>) -> Self {
        match kind {
            Some(BrandKind::AmericanExpress) => Icon::CvcAmex,
            _ => Icon::Cvc,
        }
    }

    /// Lookup key, the brand type without hyphens.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Icon::Cvc => "cvc",
            Icon::CvcAmex => "cvc_amex",
            Icon::AmericanExpress => "americanexpress",
            Icon::DinersClub => "dinersclub",
            Icon::Mastercard => "mastercard",
            Icon::Discover => "discover",
            Icon::Jcb => "jcb",
            Icon::Placeholder => "placeholder",
            Icon::Visa => "visa",
            Icon::Elo => "elo",
        }
    }

    #[must_use]
    pub fn asset(self) -> IconAsset {
        IconAsset(match self {
            Icon::Cvc => "icons/cvc.png",
            Icon::CvcAmex => "icons/cvc_amex.png",
            Icon::AmericanExpress => "icons/amex.png",
            Icon::DinersClub => "icons/diners.png",
            Icon::Mastercard => "icons/mastercard.png",
            Icon::Discover => "icons/discover.png",
            Icon::Jcb => "icons/jcb.png",
            Icon::Placeholder => "icons/unknown.png",
            Icon::Visa => "icons/visa.png",
            Icon::Elo => "icons/elo.png",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("visa", Icon::Visa)]
    #[case("VISA", Icon::Visa)]
    #[case("diners-club", Icon::DinersClub)]
    #[case("dinersclub", Icon::DinersClub)]
    #[case("cvc", Icon::Cvc)]
    #[case("elo", Icon::Elo)]
    #[case("", Icon::Placeholder)]
    #[case("maestro", Icon::Placeholder)]
    fn test_for_name(#[case] name: &str, #[case] expected: Icon) {
        assert_eq!(Icon::for_name(name), expected);
    }

    #[test]
    fn test_every_brand_resolves() {
        for kind in BrandKind::ALL {
            let icon = Icon::for_brand(Some(kind));
            assert!(
                icon == Icon::Placeholder || icon.key() == kind.as_str().replace('-', ""),
                "{kind} resolved to {icon:?}"
            );
        }
        assert_eq!(Icon::for_brand(Some(BrandKind::Jcb)), Icon::Jcb);
        assert_eq!(Icon::for_brand(Some(BrandKind::Mir)), Icon::Placeholder);
        assert_eq!(Icon::for_brand(None), Icon::Placeholder);
    }

    #[test]
    fn test_cvc_for() {
        assert_eq!(Icon::cvc_for(Some(BrandKind::AmericanExpress)), Icon::CvcAmex);
        assert_eq!(Icon::cvc_for(Some(BrandKind::Visa)), Icon::Cvc);
        assert_eq!(Icon::cvc_for(None), Icon::Cvc);
    }

    #[test]
    fn test_assets_live_in_icon_dir() {
        for icon in Icon::ALL {
            let path = icon.asset().path();
            assert!(path.starts_with(ICON_DIR), "{path}");
            assert_eq!(Icon::for_name(icon.key()), icon);
        }
    }
}
