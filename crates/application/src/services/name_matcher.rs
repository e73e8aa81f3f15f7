use tailnet_dns_domain::{first_label, normalize_name, PeerSnapshot, RosterEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Query name equals the entry's full name.
    Exact,
    /// Query name equals the entry's first label (suffix omitted).
    ShortForm,
}

/// Finds the roster entry a forward query refers to.
///
/// Entries are scanned in snapshot order and the first one that matches
/// wins. With a domain suffix configured, two entries sharing a first label
/// are ambiguous for short-form queries; the earlier entry is returned.
pub struct NameMatcher;

impl NameMatcher {
    pub fn find<'a>(
        snapshot: &'a PeerSnapshot,
        query_name: &str,
    ) -> Option<(&'a RosterEntry, MatchKind)> {
        let wanted = normalize_name(query_name);
        if wanted.is_empty() {
            return None;
        }

        let short_form = snapshot.domain_suffix().is_some();

        snapshot
            .entries
            .iter()
            .filter(|entry| entry.is_named())
            .find_map(|entry| {
                Self::match_kind(&wanted, &normalize_name(&entry.name), short_form)
                    .map(|kind| (entry, kind))
            })
    }

    /// Compares an already-normalized query name with an already-normalized
    /// entry name.
    pub fn match_kind(wanted: &str, entry_name: &str, short_form: bool) -> Option<MatchKind> {
        if wanted == entry_name {
            Some(MatchKind::Exact)
        } else if short_form && wanted == first_label(entry_name) {
            Some(MatchKind::ShortForm)
        } else {
            None
        }
    }
}
