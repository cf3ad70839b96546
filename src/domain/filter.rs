//! Per-field filter expressions.
//!
//! A filter bundles every operator that can be requested for one attribute.
//! Operators left as `None` impose no constraint; the ones that are set are
//! combined with a logical AND. Evaluation follows SQL null semantics so the
//! in-memory predicate and the database query agree: a missing value fails
//! every operator except `specified = false`.

/// Operators shared by every field type.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter<T> {
    pub equals: Option<T>,
    pub not_equals: Option<T>,
    pub specified: Option<bool>,
    pub in_list: Option<Vec<T>>,
    pub not_in: Option<Vec<T>>,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            specified: None,
            in_list: None,
            not_in: None,
        }
    }
}

impl<T: PartialEq> Filter<T> {
    /// Filter accepting only values equal to `value`.
    pub fn equals(value: T) -> Self {
        Self {
            equals: Some(value),
            ..Self::default()
        }
    }

    /// Filter on the presence (`true`) or absence (`false`) of a value.
    pub fn specified(specified: bool) -> Self {
        Self {
            specified: Some(specified),
            ..Self::default()
        }
    }

    /// Whether at least one operator compares against the value itself.
    ///
    /// An empty `not_in` list constrains nothing and is ignored.
    fn has_value_operators(&self) -> bool {
        self.equals.is_some()
            || self.not_equals.is_some()
            || self.in_list.is_some()
            || self.not_in.as_ref().is_some_and(|list| !list.is_empty())
    }

    fn specified_matches(&self, value: Option<&T>) -> bool {
        self.specified
            .is_none_or(|specified| specified == value.is_some())
    }

    fn value_matches(&self, value: &T) -> bool {
        self.equals.as_ref().is_none_or(|expected| expected == value)
            && self.not_equals.as_ref().is_none_or(|other| other != value)
            && self
                .in_list
                .as_ref()
                .is_none_or(|list| list.contains(value))
            && self
                .not_in
                .as_ref()
                .is_none_or(|list| !list.contains(value))
    }

    /// Evaluates the filter against an optional attribute value.
    pub fn matches(&self, value: Option<&T>) -> bool {
        if !self.specified_matches(value) {
            return false;
        }
        match value {
            Some(value) => self.value_matches(value),
            None => !self.has_value_operators(),
        }
    }
}

/// Filter for ordered attributes, adding range bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeFilter<T> {
    pub base: Filter<T>,
    pub greater_than: Option<T>,
    pub greater_than_or_equal: Option<T>,
    pub less_than: Option<T>,
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            base: Filter::default(),
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl<T: PartialOrd> RangeFilter<T> {
    /// Inclusive range; either side may be left open.
    pub fn between(lower: Option<T>, upper: Option<T>) -> Self {
        Self {
            greater_than_or_equal: lower,
            less_than_or_equal: upper,
            ..Self::default()
        }
    }

    fn has_bounds(&self) -> bool {
        self.greater_than.is_some()
            || self.greater_than_or_equal.is_some()
            || self.less_than.is_some()
            || self.less_than_or_equal.is_some()
    }

    fn bounds_match(&self, value: &T) -> bool {
        self.greater_than.as_ref().is_none_or(|bound| value > bound)
            && self
                .greater_than_or_equal
                .as_ref()
                .is_none_or(|bound| value >= bound)
            && self.less_than.as_ref().is_none_or(|bound| value < bound)
            && self
                .less_than_or_equal
                .as_ref()
                .is_none_or(|bound| value <= bound)
    }

    pub fn matches(&self, value: Option<&T>) -> bool {
        if !self.base.matches(value) {
            return false;
        }
        match value {
            Some(value) => self.bounds_match(value),
            None => !self.has_bounds(),
        }
    }
}

impl<T> From<Filter<T>> for RangeFilter<T> {
    fn from(base: Filter<T>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

/// Filter for text attributes, adding substring tests that ignore ASCII case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringFilter {
    pub base: Filter<String>,
    pub contains: Option<String>,
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    pub fn contains(needle: impl Into<String>) -> Self {
        Self {
            contains: Some(needle.into()),
            ..Self::default()
        }
    }

    fn has_substring_operators(&self) -> bool {
        self.contains.is_some() || self.does_not_contain.is_some()
    }

    pub fn matches(&self, value: Option<&str>) -> bool {
        let owned = value.map(str::to_string);
        if !self.base.matches(owned.as_ref()) {
            return false;
        }
        let Some(value) = value else {
            return !self.has_substring_operators();
        };
        let haystack = value.to_ascii_lowercase();
        self.contains
            .as_ref()
            .is_none_or(|needle| haystack.contains(&needle.to_ascii_lowercase()))
            && self
                .does_not_contain
                .as_ref()
                .is_none_or(|needle| !haystack.contains(&needle.to_ascii_lowercase()))
    }
}

impl From<Filter<String>> for StringFilter {
    fn from(base: Filter<String>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = Filter::<i32>::default();
        assert!(filter.matches(Some(&1)));
        assert!(filter.matches(None));
    }

    #[test]
    fn not_equals_and_not_in_reject_missing_values() {
        let filter = Filter {
            not_equals: Some(3),
            ..Filter::default()
        };
        assert!(filter.matches(Some(&2)));
        assert!(!filter.matches(Some(&3)));
        assert!(!filter.matches(None));

        let filter = Filter {
            not_in: Some(vec![1, 2]),
            ..Filter::default()
        };
        assert!(filter.matches(Some(&3)));
        assert!(!filter.matches(Some(&2)));
        assert!(!filter.matches(None));
    }

    #[test]
    fn specified_checks_presence() {
        assert!(Filter::<bool>::specified(true).matches(Some(&false)));
        assert!(!Filter::<bool>::specified(true).matches(None));
        assert!(Filter::<bool>::specified(false).matches(None));
        assert!(!Filter::<bool>::specified(false).matches(Some(&true)));
    }

    #[test]
    fn in_list_requires_membership() {
        let filter = Filter {
            in_list: Some(vec![true]),
            ..Filter::default()
        };
        assert!(filter.matches(Some(&true)));
        assert!(!filter.matches(Some(&false)));

        let empty = Filter::<bool> {
            in_list: Some(vec![]),
            ..Filter::default()
        };
        assert!(!empty.matches(Some(&true)));
    }

    #[test]
    fn range_bounds_are_strict_or_inclusive_as_named() {
        let strict = RangeFilter {
            greater_than: Some(1),
            less_than: Some(3),
            ..RangeFilter::default()
        };
        assert!(!strict.matches(Some(&1)));
        assert!(strict.matches(Some(&2)));
        assert!(!strict.matches(Some(&3)));

        let inclusive = RangeFilter::between(Some(1), Some(3));
        assert!(inclusive.matches(Some(&1)));
        assert!(inclusive.matches(Some(&3)));
        assert!(!inclusive.matches(Some(&4)));
    }

    #[test]
    fn one_sided_range_restricts_only_that_side() {
        let lower = RangeFilter::between(Some(5), None);
        assert!(lower.matches(Some(&i32::MAX)));
        assert!(!lower.matches(Some(&4)));

        let upper = RangeFilter::between(None, Some(5));
        assert!(upper.matches(Some(&i32::MIN)));
        assert!(!upper.matches(Some(&6)));
        assert!(!upper.matches(None));
    }

    #[test]
    fn string_equals_is_exact_and_contains_ignores_case() {
        let equals = StringFilter::from(Filter::equals("Home".to_string()));
        assert!(equals.matches(Some("Home")));
        assert!(!equals.matches(Some("home")));

        let contains = StringFilter::contains("OM");
        assert!(contains.matches(Some("home")));
        assert!(!contains.matches(Some("about")));
        assert!(!contains.matches(None));

        let excludes = StringFilter {
            does_not_contain: Some("adm".to_string()),
            ..StringFilter::default()
        };
        assert!(excludes.matches(Some("Home")));
        assert!(!excludes.matches(Some("Admin")));
        assert!(!excludes.matches(None));
    }

    #[test]
    fn contains_folds_ascii_letters_only() {
        let filter = StringFilter::contains("éco");
        assert!(!filter.matches(Some("ÉCOle")));
        assert!(filter.matches(Some("écOLE")));
    }
}
