use std::{cmp::Ordering, fmt, str::FromStr};

use alphanum_core::{AlphanumericComparator, Collate};
use anyhow::{Context, Result};
use icu_collator::{
    Collator, CollatorBorrowed,
    options::{CollatorOptions, Strength as IcuStrength},
};
use icu_locale_core::Locale;
use serde::Deserialize;

#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    /// Base letters only, ignores case and diacritics.
    #[default]
    Primary,
    /// Also tells diacritics apart.
    Secondary,
    /// Also tells case apart.
    Tertiary,
}

impl From<Strength> for IcuStrength {
    fn from(value: Strength) -> Self {
        match value {
            Strength::Primary => IcuStrength::Primary,
            Strength::Secondary => IcuStrength::Secondary,
            Strength::Tertiary => IcuStrength::Tertiary,
        }
    }
}

impl FromStr for Strength {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(Strength::Primary),
            "secondary" => Ok(Strength::Secondary),
            "tertiary" => Ok(Strength::Tertiary),
            _ => anyhow::bail!(
                "unknown strength `{s}`, expected `primary`, `secondary` or `tertiary`"
            ),
        }
    }
}

/// Locale-aware ordering of text runs backed by ICU collation data.
pub struct LocaleCollation {
    collator: CollatorBorrowed<'static>,
    locale: Locale,
    strength: Strength,
}

impl LocaleCollation {
    pub fn new(tag: &str, strength: Strength) -> Result<Self> {
        let locale: Locale = tag
            .parse()
            .with_context(|| format!("invalid locale tag `{tag}`"))?;

        // Numeric ordering stays off, digit runs never reach the collator.
        let mut options = CollatorOptions::default();
        options.strength = Some(strength.into());

        let collator = Collator::try_new(locale.clone().into(), options)
            .with_context(|| format!("no collation data for `{locale}`"))?;
        tracing::debug!(%locale, ?strength, "created locale collation");

        Ok(Self {
            collator,
            locale,
            strength,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }
}

impl fmt::Debug for LocaleCollation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleCollation")
            .field("locale", &self.locale.to_string())
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

impl Collate for LocaleCollation {
    #[inline]
    fn collate(&self, lhs: &str, rhs: &str) -> Ordering {
        self.collator.compare(lhs, rhs)
    }
}

/// Natural comparator for `tag` whose text runs ignore case and diacritics.
pub fn for_locale(tag: &str) -> Result<AlphanumericComparator<LocaleCollation>> {
    for_locale_with_strength(tag, Strength::Primary)
}

pub fn for_locale_with_strength(
    tag: &str,
    strength: Strength,
) -> Result<AlphanumericComparator<LocaleCollation>> {
    Ok(AlphanumericComparator::new(LocaleCollation::new(
        tag, strength,
    )?))
}
