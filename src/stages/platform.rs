//! Control-panel detection
//!
//! Pure read-only probe. Highest-specificity marker wins; no marker at all is
//! the normal case on a plain server, not an error.

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Plesk,
    DirectAdmin,
    CPanel,
    GenericLinux,
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformKind::Plesk => "Plesk",
            PlatformKind::DirectAdmin => "DirectAdmin",
            PlatformKind::CPanel => "cPanel",
            PlatformKind::GenericLinux => "generic Linux",
        };
        write!(f, "{}", name)
    }
}

/// Marker paths checked in priority order. First hit wins.
const MARKERS: &[(PlatformKind, &str)] = &[
    (PlatformKind::Plesk, "usr/local/psa/version"),
    (PlatformKind::DirectAdmin, "usr/local/directadmin"),
    (PlatformKind::CPanel, "usr/local/cpanel"),
];

pub fn detect() -> PlatformKind {
    detect_at(Path::new("/"))
}

/// Probe relative to `root` so tests can stage marker trees.
pub fn detect_at(root: &Path) -> PlatformKind {
    for (kind, marker) in MARKERS {
        if root.join(marker).exists() {
            return *kind;
        }
    }
    PlatformKind::GenericLinux
}
