use fnv::FnvHashSet;

/// Fingerprints of states that have been expanded.
///
/// States are marked when they are expanded, not when they are created,
/// so the frontier may hold several nodes for the same state at once.
#[derive(Debug)]
pub(crate) struct VisitedSet {
    fingerprints: FnvHashSet<String>,
}

impl VisitedSet {
    pub(crate) fn new() -> Self {
        VisitedSet {
            fingerprints: FnvHashSet::default(),
        }
    }

    pub(crate) fn contains(&self, fingerprint: &str) -> bool {
        self.fingerprints.contains(fingerprint)
    }

    pub(crate) fn mark(&mut self, fingerprint: &str) {
        self.fingerprints.insert(fingerprint.to_owned());
    }

    pub(crate) fn len(&self) -> usize {
        self.fingerprints.len()
    }
}
