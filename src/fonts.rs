//! # Process-Wide Font Cache
//!
//! Loads the font database once per process lifetime and reuses it across
//! requests. The database is immutable after loading, so a `OnceLock` is
//! enough to guard the first-use race; there is no invalidation during the
//! process lifetime.
//!
//! Font availability is never a fatal error. Family selection walks a
//! preferred-family fallback chain down to the generic `sans-serif` family,
//! so a host without the preferred face only loses visual fidelity.

use resvg::usvg::fontdb;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Families tried, in order, after the configured preferred family.
/// Mirrors the platform chain the original tool probed for on disk.
const FALLBACK_CHAIN: &[&str] = &[
    "SF Pro Text",
    "SF Pro Display",
    "Helvetica Neue",
    "Helvetica",
    "Arial",
    "Liberation Sans",
    "DejaVu Sans",
];

/// Generic family resolved by the rasterizer when nothing else matches.
const GENERIC_FAMILY: &str = "sans-serif";

static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();

/// The process-wide font database, loading it on first use.
///
/// System fonts are always loaded; `extra_dir`, when given, is loaded on top
/// (deployments that ship their own faces point this at the bundled
/// directory). Because the database is cached for the process lifetime, only
/// the first caller's `extra_dir` takes effect.
pub fn database(extra_dir: Option<&Path>) -> Arc<fontdb::Database> {
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            if let Some(dir) = extra_dir {
                db.load_fonts_dir(dir);
            }
            tracing::debug!("loaded {} font faces", db.len());
            Arc::new(db)
        })
        .clone()
}

/// Resolve the family name to render with: the preferred family if the host
/// has it, otherwise the first available entry of the fallback chain,
/// otherwise the generic `sans-serif`.
pub fn resolve_family(db: &fontdb::Database, preferred: &str) -> String {
    let chain = std::iter::once(preferred).chain(FALLBACK_CHAIN.iter().copied());
    for family in chain {
        let families = [fontdb::Family::Name(family)];
        let query = fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        if db.query(&query).is_some() {
            if family != preferred {
                tracing::debug!(
                    preferred = %preferred,
                    resolved = %family,
                    "preferred font family unavailable, using fallback"
                );
            }
            return family.to_string();
        }
    }

    tracing::debug!(preferred = %preferred, "no chain family available, using generic sans-serif");
    GENERIC_FAMILY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_is_loaded_once_and_shared() {
        let first = database(None);
        let second = database(None);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn empty_database_resolves_to_generic_family() {
        let db = fontdb::Database::new();
        assert_eq!(resolve_family(&db, "SF Pro Text"), GENERIC_FAMILY);
    }

    #[test]
    fn resolution_never_panics_on_odd_names() {
        let db = fontdb::Database::new();
        for name in ["", "   ", "Definitely Not A Font 9000"] {
            let family = resolve_family(&db, name);
            assert!(!family.is_empty());
        }
    }
}
