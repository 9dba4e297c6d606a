use std::fmt;

/// The wildcard marker used in media type strings, e.g. `application/*`.
const WILDCARD: &str = "*";

/// How specific a compatibility pairing between two media types is.
///
/// Derived ordering is ascending: `FullWildcard < SubtypeWildcard < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Specificity {
    /// At least one side wildcards the primary type (`*/*`).
    FullWildcard,
    /// Primary types are concrete and equal; one side wildcards the subtype.
    SubtypeWildcard,
    /// Both sides are concrete and equal.
    Exact,
}

/// A `type/subtype` content-type descriptor, possibly wildcarded.
///
/// Both components are stored lowercase; parameters (`; charset=...`) are
/// stripped at parse time. Equality and hashing are over the normalized
/// pair, so `Application/JSON` and `application/json` collide as expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    primary: String,
    subtype: String,
}

impl MediaType {
    /// Build a media type from already-normalized components.
    #[must_use]
    pub fn new(primary: &str, subtype: &str) -> Self {
        Self {
            primary: primary.trim().to_ascii_lowercase(),
            subtype: subtype.trim().to_ascii_lowercase(),
        }
    }

    /// The full wildcard `*/*`.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::new(WILDCARD, WILDCARD)
    }

    /// `application/json`, the default registration in most deployments.
    #[must_use]
    pub fn json() -> Self {
        Self::new("application", "json")
    }

    /// Parse a `type/subtype` string, ignoring any `;`-separated parameters.
    ///
    /// Returns `None` when either component is empty or the slash is
    /// missing. A bare `*` is accepted as `*/*` for lenient Accept headers.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let without_params = raw.split(';').next().unwrap_or("").trim();
        if without_params == WILDCARD {
            return Some(Self::wildcard());
        }
        let (primary, subtype) = without_params.split_once('/')?;
        let primary = primary.trim();
        let subtype = subtype.trim();
        if primary.is_empty() || subtype.is_empty() {
            return None;
        }
        Some(Self::new(primary, subtype))
    }

    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[must_use]
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    #[must_use]
    pub fn is_wildcard_primary(&self) -> bool {
        self.primary == WILDCARD
    }

    #[must_use]
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD
    }

    /// True when neither component is a wildcard.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        !self.is_wildcard_primary() && !self.is_wildcard_subtype()
    }

    /// Test compatibility with another media type and rank the pairing.
    ///
    /// Compatibility is symmetric: a wildcard on either side matches the
    /// corresponding concrete component. Returns `None` when the types are
    /// incompatible.
    #[must_use]
    pub fn matches(&self, other: &MediaType) -> Option<Specificity> {
        let primary_compatible = self.primary == other.primary
            || self.is_wildcard_primary()
            || other.is_wildcard_primary();
        let subtype_compatible = self.subtype == other.subtype
            || self.is_wildcard_subtype()
            || other.is_wildcard_subtype();

        if !primary_compatible || !subtype_compatible {
            return None;
        }

        if self.is_wildcard_primary() || other.is_wildcard_primary() {
            Some(Specificity::FullWildcard)
        } else if self.is_wildcard_subtype() || other.is_wildcard_subtype() {
            Some(Specificity::SubtypeWildcard)
        } else {
            Some(Specificity::Exact)
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary, self.subtype)
    }
}

/// One parsed Accept-header entry: a media type plus its quality weight.
#[derive(Debug, Clone)]
pub struct AcceptEntry {
    pub media: MediaType,
    pub quality: f32,
}

/// Parse an Accept header into entries ordered by descending quality.
///
/// Entries without a `q` parameter default to `q=1`. Malformed entries are
/// skipped rather than failing the whole header. The sort is stable, so
/// entries with equal quality keep their header order.
#[must_use]
pub fn parse_accept(header: &str) -> Vec<AcceptEntry> {
    let mut entries: Vec<AcceptEntry> = header
        .split(',')
        .filter_map(|part| {
            let media = MediaType::parse(part)?;
            let quality = part
                .split(';')
                .skip(1)
                .find_map(|param| {
                    let (key, value) = param.split_once('=')?;
                    if key.trim().eq_ignore_ascii_case("q") {
                        value.trim().parse::<f32>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(1.0)
                .clamp(0.0, 1.0);
            Some(AcceptEntry { media, quality })
        })
        .collect();

    entries.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    entries
}
