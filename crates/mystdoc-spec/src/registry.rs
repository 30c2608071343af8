//! Registry of specifications indexed by name and alias.
//!
//! Both indexes are built once at construction. When several specs claim the
//! same name or alias, the one declared first wins and the clash is recorded
//! as a [`Collision`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::Spec;

/// Lookup interface consumed by the documentation compilers.
pub trait SpecSource {
    /// Find a spec by exact name.
    fn get(&self, name: &str) -> Option<&Spec>;

    /// Find a spec by name or alias; the first spec in declaration order
    /// answering to `name` wins.
    fn get_by_name_or_alias(&self, name: &str) -> Option<&Spec>;
}

/// Which index a collision happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    /// Two specs share the same `name`.
    Name,
    /// A name or alias is claimed by more than one spec.
    Alias,
}

/// A name or alias claimed by more than one spec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    /// Contested name or alias.
    pub key: String,
    /// Name of the spec that keeps the key (declared first).
    pub kept: String,
    /// Name of the spec that lost the key.
    pub shadowed: String,
    /// Index the collision happened in.
    pub kind: CollisionKind,
}

/// Specifications in declaration order with name and alias indexes.
#[derive(Debug, Default)]
pub struct Registry {
    specs: Vec<Spec>,
    by_name: HashMap<String, usize>,
    by_name_or_alias: HashMap<String, usize>,
    collisions: Vec<Collision>,
}

impl Registry {
    /// Build a registry, indexing every spec by name and by alias.
    #[must_use]
    pub fn new(specs: Vec<Spec>) -> Self {
        let mut by_name = HashMap::new();
        let mut by_name_or_alias = HashMap::new();
        let mut collisions = Vec::new();

        for (index, spec) in specs.iter().enumerate() {
            if let Some(existing) = claim(&mut by_name, &spec.name, index) {
                collisions.push(Collision {
                    key: spec.name.clone(),
                    kept: specs[existing].name.clone(),
                    shadowed: spec.name.clone(),
                    kind: CollisionKind::Name,
                });
            }

            let keys = std::iter::once(&spec.name).chain(&spec.aliases);
            for key in keys {
                match claim(&mut by_name_or_alias, key, index) {
                    Some(existing) if existing != index && specs[existing].name != spec.name => {
                        collisions.push(Collision {
                            key: key.clone(),
                            kept: specs[existing].name.clone(),
                            shadowed: spec.name.clone(),
                            kind: CollisionKind::Alias,
                        });
                    }
                    _ => {}
                }
            }
        }

        for collision in &collisions {
            tracing::warn!(
                key = %collision.key,
                kept = %collision.kept,
                shadowed = %collision.shadowed,
                kind = ?collision.kind,
                "Spec name collision: lookups resolve to the first declared spec"
            );
        }

        Self {
            specs,
            by_name,
            by_name_or_alias,
            collisions,
        }
    }

    /// All specs in declaration order.
    #[must_use]
    pub fn specs(&self) -> &[Spec] {
        &self.specs
    }

    /// Number of specs, shadowed duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry holds no specs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Names and aliases claimed by more than one spec.
    #[must_use]
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

impl SpecSource for Registry {
    fn get(&self, name: &str) -> Option<&Spec> {
        self.by_name.get(name).map(|&index| &self.specs[index])
    }

    fn get_by_name_or_alias(&self, name: &str) -> Option<&Spec> {
        self.by_name_or_alias
            .get(name)
            .map(|&index| &self.specs[index])
    }
}

impl FromIterator<Spec> for Registry {
    fn from_iter<I: IntoIterator<Item = Spec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Claim `key` for `index`. Returns the previous holder if already claimed.
fn claim(index_map: &mut HashMap<String, usize>, key: &str, index: usize) -> Option<usize> {
    match index_map.entry(key.to_owned()) {
        Entry::Occupied(entry) => Some(*entry.get()),
        Entry::Vacant(entry) => {
            entry.insert(index);
            None
        }
    }
}
