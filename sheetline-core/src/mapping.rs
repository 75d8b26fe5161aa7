//! Column mapping between source statement headers and canonical fields.
//!
//! A [`ColumnMapping`] is a plain value owned by whoever drives the review
//! step; every operation here is deterministic and side-effect free, so the
//! caller can recompute, override, and re-validate freely before freezing
//! the mapping for projection.

use serde::{Deserialize, Serialize};

use crate::field::{AUTO_MAP_ORDER, MapTarget, normalize_header};

/// One source header and its current target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    pub header: String,
    pub target: MapTarget,
}

/// The mapping for one document, preserving source header order.
///
/// Invariant: every target other than `Unmapped` is claimed by at most one
/// header. [`ColumnMapping::set`] enforces this by releasing the previous
/// claimant (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: Vec<ColumnAssignment>,
}

impl ColumnMapping {
    /// Every header starts unmapped.
    pub fn unmapped<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: headers
                .into_iter()
                .map(|h| ColumnAssignment {
                    header: h.into(),
                    target: MapTarget::Unmapped,
                })
                .collect(),
        }
    }

    /// Guess a mapping from header text.
    ///
    /// For each header in source order, targets are tried in the fixed
    /// priority order and assigned on the first keyword substring match
    /// against the normalized header. A target claimed by an earlier header
    /// is skipped for later ones (first claim wins within one pass). This is
    /// a convenience heuristic; the caller confirms before projection.
    pub fn auto_map<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut mapping = Self::unmapped(headers);
        let mut claimed: Vec<MapTarget> = Vec::new();

        for col in &mut mapping.columns {
            let normalized = normalize_header(&col.header);
            if normalized.is_empty() {
                continue;
            }
            for target in AUTO_MAP_ORDER {
                if claimed.contains(&target) {
                    continue;
                }
                if target.keywords().iter().any(|kw| normalized.contains(kw)) {
                    col.target = target;
                    claimed.push(target);
                    break;
                }
            }
        }

        mapping
    }

    /// Assign `target` to `header`, releasing any other header that held it.
    /// Returns false (and changes nothing) if `header` is not part of this
    /// document.
    pub fn set(&mut self, header: &str, target: MapTarget) -> bool {
        if !self.columns.iter().any(|c| c.header == header) {
            return false;
        }
        if target != MapTarget::Unmapped {
            for col in &mut self.columns {
                if col.target == target && col.header != header {
                    col.target = MapTarget::Unmapped;
                }
            }
        }
        for col in &mut self.columns {
            if col.header == header {
                col.target = target;
            }
        }
        true
    }

    /// Reset every header to unmapped.
    pub fn clear_all(&mut self) {
        for col in &mut self.columns {
            col.target = MapTarget::Unmapped;
        }
    }

    pub fn target_of(&self, header: &str) -> Option<MapTarget> {
        self.columns
            .iter()
            .find(|c| c.header == header)
            .map(|c| c.target)
    }

    /// The header currently holding `target`, if any. Meaningless for
    /// `Unmapped`, which many headers may share.
    pub fn header_for(&self, target: MapTarget) -> Option<&str> {
        if target == MapTarget::Unmapped {
            return None;
        }
        self.columns
            .iter()
            .find(|c| c.target == target)
            .map(|c| c.header.as_str())
    }

    pub fn contains_target(&self, target: MapTarget) -> bool {
        self.columns.iter().any(|c| c.target == target)
    }

    /// Assignments in source header order.
    pub fn columns(&self) -> &[ColumnAssignment] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}
