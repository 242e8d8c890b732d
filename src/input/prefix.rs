//! Prefixed-value splitting and the two-part input model
//!
//! Settings forms render some string values as a selectable prefix plus a
//! free-text remainder (e.g. a site URL as `https://` + host). The
//! splitter decomposes a value against an ordered candidate list;
//! [`PrefixInput`] holds the resulting `(prefix, remainder)` pair and
//! recombines it on every edit.

/// A value decomposed into a leading prefix and the remaining text
///
/// When a candidate prefix matched, `prefix + remainder` reassembles the
/// original value (up to letter case for case-insensitive matches);
/// otherwise `remainder` is the whole value and `prefix` is the caller's
/// default label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedValue {
    pub prefix: String,
    pub remainder: String,
}

impl PrefixedValue {
    /// Reassemble the combined value
    pub fn combined(&self) -> String {
        format!("{}{}", self.prefix, self.remainder)
    }
}

/// Byte length of the leading segment of `value` that case-folds equal to
/// `prefix`, if the whole prefix matches.
///
/// Folding is per character, so one-to-many case folds do not match;
/// candidates are ASCII scheme strings in practice.
fn case_insensitive_prefix_len(value: &str, prefix: &str) -> Option<usize> {
    let mut consumed = 0;
    let mut value_chars = value.chars();
    for prefix_char in prefix.chars() {
        let value_char = value_chars.next()?;
        if !value_char.to_lowercase().eq(prefix_char.to_lowercase()) {
            return None;
        }
        consumed += value_char.len_utf8();
    }
    Some(consumed)
}

/// Split a value into `(prefix, remainder)` against ordered candidates.
///
/// Candidates are scanned in order and the first match wins, so callers
/// must order them most-specific-first; the splitter never reorders. An
/// absent value yields `("", "")`; an unmatched value is returned whole
/// as the remainder, labeled with `default_prefix`.
pub fn split_prefixed_value<S: AsRef<str>>(
    value: Option<&str>,
    prefixes: &[S],
    default_prefix: &str,
    case_insensitive: bool,
) -> PrefixedValue {
    let Some(value) = value else {
        return PrefixedValue {
            prefix: String::new(),
            remainder: String::new(),
        };
    };

    for candidate in prefixes {
        let candidate = candidate.as_ref();
        if case_insensitive {
            if let Some(len) = case_insensitive_prefix_len(value, candidate) {
                return PrefixedValue {
                    prefix: candidate.to_string(),
                    remainder: value[len..].to_string(),
                };
            }
        } else if let Some(remainder) = value.strip_prefix(candidate) {
            return PrefixedValue {
                prefix: candidate.to_string(),
                remainder: remainder.to_string(),
            };
        }
    }

    PrefixedValue {
        prefix: default_prefix.to_string(),
        remainder: value.to_string(),
    }
}

/// State behind a two-part input control: a prefix selector plus a
/// free-text remainder field.
///
/// Local edits ([`set_prefix`](Self::set_prefix),
/// [`set_remainder`](Self::set_remainder)) return the combined value to
/// notify upward: exactly one notification per state transition, none
/// when the edit leaves state unchanged. External value changes are
/// reconciled with [`sync_value`](Self::sync_value), which overwrites
/// local edit state (last external write wins) but ignores empty values
/// so a momentarily falsy source cannot clobber an in-progress edit.
#[derive(Debug, Clone)]
pub struct PrefixInput {
    prefixes: Vec<String>,
    default_prefix: String,
    case_insensitive: bool,
    prefix: String,
    remainder: String,
}

impl PrefixInput {
    /// Create the input state, deriving `(prefix, remainder)` from the
    /// initial value.
    pub fn new<S: AsRef<str>>(
        value: Option<&str>,
        prefixes: &[S],
        default_prefix: &str,
        case_insensitive: bool,
    ) -> Self {
        let split = split_prefixed_value(value, prefixes, default_prefix, case_insensitive);
        Self {
            prefixes: prefixes.iter().map(|p| p.as_ref().to_string()).collect(),
            default_prefix: default_prefix.to_string(),
            case_insensitive,
            prefix: split.prefix,
            remainder: split.remainder,
        }
    }

    /// The selected prefix, falling back to the default when none is set
    pub fn prefix(&self) -> &str {
        if self.prefix.is_empty() {
            &self.default_prefix
        } else {
            &self.prefix
        }
    }

    /// The free-text remainder
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    /// The candidate prefixes, in selector order
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The combined value as currently held
    pub fn combined(&self) -> String {
        format!("{}{}", self.prefix, self.remainder)
    }

    /// Local edit: select a different prefix.
    ///
    /// Returns the combined value to notify when the state changed.
    pub fn set_prefix(&mut self, prefix: &str) -> Option<String> {
        if self.prefix == prefix {
            return None;
        }
        self.prefix = prefix.to_string();
        self.emit_change()
    }

    /// Local edit: replace the typed remainder.
    ///
    /// Returns the combined value to notify when the state changed.
    pub fn set_remainder(&mut self, remainder: &str) -> Option<String> {
        if self.remainder == remainder {
            return None;
        }
        self.remainder = remainder.to_string();
        self.emit_change()
    }

    /// External reconciliation: re-derive `(prefix, remainder)` from a new
    /// source value, overwriting local edit state.
    ///
    /// Empty or absent values leave the current state untouched. Emits no
    /// notification; the host already holds this value.
    pub fn sync_value(&mut self, value: Option<&str>) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        let split = split_prefixed_value(
            Some(value),
            &self.prefixes,
            &self.default_prefix,
            self.case_insensitive,
        );
        self.prefix = split.prefix;
        self.remainder = split.remainder;
    }

    fn emit_change(&self) -> Option<String> {
        let combined = self.combined();
        tracing::debug!(value = %combined, "prefix input changed");
        Some(combined)
    }
}
