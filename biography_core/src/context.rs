//! Per-call render context.

use crate::date::QualifiedDate;
use crate::format::PlaceRules;
use crate::locale::{Locale, Localizer};

/// Everything a rendering needs besides the record itself: the locale, the
/// phrase lookup, the place rules and the birth date ages are measured from.
///
/// A context is built once per biography and narrowed by value (see
/// [`RenderContext::with_birth`]); nothing in it is shared or mutated between
/// biographies.
#[derive(Clone)]
pub struct RenderContext<'a> {
    pub locale: Locale,
    pub localizer: &'a dyn Localizer,
    pub places: &'a PlaceRules,
    pub birth: Option<QualifiedDate>,
}

impl<'a> RenderContext<'a> {
    pub fn new(locale: Locale, localizer: &'a dyn Localizer, places: &'a PlaceRules) -> Self {
        Self {
            locale,
            localizer,
            places,
            birth: None,
        }
    }

    /// A copy of this context measuring ages from another birth date.
    pub fn with_birth(&self, birth: Option<QualifiedDate>) -> Self {
        Self {
            birth,
            ..self.clone()
        }
    }

    /// Localize a phrase.
    pub fn tr(&self, phrase: &str) -> String {
        self.localizer.localize(self.locale, phrase)
    }
}

impl std::fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("locale", &self.locale)
            .field("birth", &self.birth)
            .finish_non_exhaustive()
    }
}
