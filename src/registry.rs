// Which primitives a pass may pick from.
// Visual: turning a category off only stops *future* damage of that kind;
// what is already on screen stays.

use crate::fx::EffectKind;

/// The four user toggles. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledEffects {
    flags: [bool; 4], // indexed by EffectKind::index()
}

impl Default for EnabledEffects {
    fn default() -> Self {
        Self { flags: [true; 4] }
    }
}

impl EnabledEffects {
    /// Every category off.
    pub fn none() -> Self {
        Self { flags: [false; 4] }
    }

    pub fn is_enabled(&self, kind: EffectKind) -> bool {
        self.flags[kind.index()]
    }

    pub fn set_enabled(&mut self, kind: EffectKind, on: bool) {
        self.flags[kind.index()] = on;
    }

    /// Flip one category; returns the new state.
    pub fn toggle(&mut self, kind: EffectKind) -> bool {
        let on = !self.is_enabled(kind);
        self.set_enabled(kind, on);
        on
    }

    /// Enabled categories in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = EffectKind> + '_ {
        EffectKind::ALL.into_iter().filter(|k| self.is_enabled(*k))
    }
}

/// Ordered list of primitives eligible for random selection.
/// Rebuilt wholesale whenever the toggles change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectRegistry {
    kinds: Vec<EffectKind>,
}

impl EffectRegistry {
    pub fn from_enabled(enabled: &EnabledEffects) -> Self {
        Self { kinds: enabled.enabled().collect() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<EffectKind> {
        self.kinds.get(i).copied()
    }

    pub fn kinds(&self) -> &[EffectKind] {
        &self.kinds
    }
}
