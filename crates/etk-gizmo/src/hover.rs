//! Hover occlusion resolution
//!
//! Gizmo parts overlap on screen and there is no depth buffer to tell which
//! one the pointer is really over. Every part is therefore declared in a fixed
//! order each frame; the last hovered declaration wins, but the answer only
//! takes effect on the *next* frame. A part can thus be drawn highlighted
//! before anything declared after it has been looked at.

use std::collections::HashMap;

use tracing::debug;

/// Identifies one gizmo across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GizmoId(pub u64);

impl GizmoId {
    /// Derives an id from a name, e.g. `"translate"` or `"orientation_cube"`.
    pub fn from_name(name: &str) -> Self {
        // FNV-1a
        let hash = name.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
        });
        Self(hash)
    }
}

/// Remembers the winning declaration index of every gizmo.
#[derive(Debug, Default, Clone)]
pub struct HoverResolver {
    last_winners: HashMap<GizmoId, Option<usize>>,
}

impl HoverResolver {
    /// Creates an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a drawing session for `id`.
    pub fn begin(&mut self, id: GizmoId) -> HoverSession {
        let last = *self.last_winners.entry(id).or_insert(None);
        HoverSession {
            id,
            last,
            index: 0,
            winner: None,
        }
    }

    /// Closes a session, committing its winner if the pointer was inside the
    /// gizmo's region this frame.
    pub fn end(&mut self, session: HoverSession, pointer_in_region: bool) {
        let winner = if pointer_in_region {
            session.winner
        } else {
            None
        };

        let slot = self.last_winners.entry(session.id).or_insert(None);
        if *slot != winner {
            debug!(id = session.id.0, ?winner, "hover winner changed");
        }
        *slot = winner;
    }

    /// Winner committed by the last session of `id`.
    pub fn last_winner(&self, id: GizmoId) -> Option<usize> {
        self.last_winners.get(&id).copied().flatten()
    }
}

/// Per-frame declaration counter for one gizmo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverSession {
    id: GizmoId,
    last: Option<usize>,
    index: usize,
    winner: Option<usize>,
}

impl HoverSession {
    /// Declares the next candidate part.
    ///
    /// Returns whether this part won the previous frame, independent of
    /// `hovered`.
    pub fn declare(&mut self, hovered: bool) -> bool {
        let was_selected = self.last == Some(self.index);

        if hovered {
            self.winner = Some(self.index);
        }
        self.index += 1;

        was_selected
    }

    /// Gizmo this session belongs to
    pub fn id(&self) -> GizmoId {
        self.id
    }

    /// Number of parts declared so far
    pub fn declared(&self) -> usize {
        self.index
    }

    /// Winner of the current frame so far
    pub fn current_winner(&self) -> Option<usize> {
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: GizmoId = GizmoId(7);

    fn run(resolver: &mut HoverResolver, flags: &[bool], in_region: bool) -> Vec<bool> {
        let mut session = resolver.begin(ID);
        let results = flags.iter().map(|f| session.declare(*f)).collect();
        resolver.end(session, in_region);
        results
    }

    #[test]
    fn test_last_hovered_wins() {
        let mut resolver = HoverResolver::new();
        run(&mut resolver, &[false, true, false, true, false], true);
        assert_eq!(resolver.last_winner(ID), Some(3));
    }

    #[test]
    fn test_nothing_hovered_commits_none() {
        let mut resolver = HoverResolver::new();
        run(&mut resolver, &[false, true], true);
        run(&mut resolver, &[false, false], true);
        assert_eq!(resolver.last_winner(ID), None);
    }

    #[test]
    fn test_outside_region_commits_none() {
        let mut resolver = HoverResolver::new();
        run(&mut resolver, &[true, true], false);
        assert_eq!(resolver.last_winner(ID), None);
    }

    #[test]
    fn test_one_frame_lag() {
        let mut resolver = HoverResolver::new();

        // first frame never reports a selection
        assert_eq!(run(&mut resolver, &[false, true, false], true), [false; 3]);

        // second frame reports last frame's winner even though it is no
        // longer hovered
        assert_eq!(
            run(&mut resolver, &[true, false, false], true),
            [false, true, false]
        );

        // and now index 0 wins
        assert_eq!(
            run(&mut resolver, &[false, false, false], true),
            [true, false, false]
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut resolver = HoverResolver::new();
        let other = GizmoId::from_name("other");

        let mut a = resolver.begin(ID);
        a.declare(true);
        resolver.end(a, true);

        let mut b = resolver.begin(other);
        b.declare(false);
        b.declare(true);
        resolver.end(b, true);

        assert_eq!(resolver.last_winner(ID), Some(0));
        assert_eq!(resolver.last_winner(other), Some(1));
    }

    #[test]
    fn test_ids_from_names() {
        assert_eq!(GizmoId::from_name("translate"), GizmoId::from_name("translate"));
        assert_ne!(GizmoId::from_name("translate"), GizmoId::from_name("rotate"));
    }
}
