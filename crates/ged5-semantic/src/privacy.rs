use chrono::Datelike;
use chrono::Local;
use ged5_conf::PrivacySettings;
use ged5_syntax::Fields;
use ged5_syntax::NodeId;
use ged5_syntax::NodeRef;

use crate::dates::DateValue;

/// Decides whether an individual's details may be disclosed.
///
/// An individual is public when their own birth is old enough, or their
/// own death is old enough, or (with no dates of their own) a parent is
/// public and was born or died long enough ago. Everything else, including
/// missing data, is private.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivacyPolicy {
    pub current_year: i32,
    pub birth_window: u32,
    pub death_window: u32,
    pub ancestor_birth_window: u32,
    pub ancestor_death_window: u32,
    pub max_depth: u32,
}

impl PrivacyPolicy {
    /// The default windows evaluated as of `current_year`.
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self::with_year(&PrivacySettings::default(), current_year)
    }

    /// The default windows evaluated as of today.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Local::now().year())
    }

    #[must_use]
    pub fn from_settings(settings: &PrivacySettings) -> Self {
        let year = settings
            .current_year
            .unwrap_or_else(|| Local::now().year());
        Self::with_year(settings, year)
    }

    fn with_year(settings: &PrivacySettings, current_year: i32) -> Self {
        PrivacyPolicy {
            current_year,
            birth_window: settings.birth_window,
            death_window: settings.death_window,
            ancestor_birth_window: settings.ancestor_birth_window,
            ancestor_death_window: settings.ancestor_death_window,
            max_depth: settings.max_depth,
        }
    }

    /// Whether `individual` must be hidden. Nodes that are not `INDI`
    /// records are always private.
    #[must_use]
    pub fn is_private(&self, individual: NodeRef<'_>) -> bool {
        let mut path = Vec::new();
        self.private_at(individual, &mut path)
    }

    fn private_at(&self, individual: NodeRef<'_>, path: &mut Vec<NodeId>) -> bool {
        if !matches!(individual.fields(), Fields::Individual(_)) {
            return true;
        }
        if path.contains(&individual.id()) {
            tracing::debug!(xref = individual.xref(), "cyclic ancestry");
            return true;
        }
        if path.len() > self.max_depth as usize {
            tracing::debug!(xref = individual.xref(), depth = path.len(), "ancestry too deep");
            return true;
        }

        if let Some(year) = birth_year(individual) {
            return year > self.cutoff(self.birth_window);
        }

        if let Some(year) = death_year(individual) {
            return year > self.cutoff(self.death_window);
        }

        path.push(individual.id());
        let private = self.ancestors_private(individual, path);
        path.pop();
        private
    }

    fn ancestors_private(&self, individual: NodeRef<'_>, path: &mut Vec<NodeId>) -> bool {
        for &link in individual.fields().child_families() {
            let Some(family) = individual.slot(Some(link)).and_then(NodeRef::target) else {
                continue;
            };
            let Fields::Family(fields) = family.fields() else {
                continue;
            };
            for partner in [fields.husb, fields.wife] {
                let Some(parent) = family.slot(partner).and_then(NodeRef::target) else {
                    continue;
                };
                if !matches!(parent.fields(), Fields::Individual(_)) {
                    continue;
                }
                if self.private_at(parent, path) {
                    return true;
                }
                if birth_year(parent).is_some_and(|year| year <= self.cutoff(self.ancestor_birth_window)) {
                    return false;
                }
                if death_year(parent).is_some_and(|year| year <= self.cutoff(self.ancestor_death_window)) {
                    return false;
                }
            }
        }
        true
    }

    fn cutoff(&self, window: u32) -> i32 {
        self.current_year
            .saturating_sub(i32::try_from(window).unwrap_or(i32::MAX))
    }
}

impl Default for PrivacyPolicy {
    fn default() -> Self {
        Self::current()
    }
}

/// The first dated birth, else baptism, else christening.
#[must_use]
pub fn birth_year(individual: NodeRef<'_>) -> Option<i32> {
    let Fields::Individual(fields) = individual.fields() else {
        return None;
    };
    let events = &fields.events;
    first_year(individual, &[&events.birt, &events.bapm, &events.chr])
}

/// The first dated death, else burial, else cremation.
#[must_use]
pub fn death_year(individual: NodeRef<'_>) -> Option<i32> {
    let Fields::Individual(fields) = individual.fields() else {
        return None;
    };
    let events = &fields.events;
    first_year(individual, &[&events.deat, &events.buri, &events.crem])
}

fn first_year(individual: NodeRef<'_>, groups: &[&Vec<NodeId>]) -> Option<i32> {
    groups
        .iter()
        .flat_map(|ids| ids.iter())
        .filter_map(|&id| individual.slot(Some(id)))
        .find_map(|event| DateValue::of(event)?.year())
}
