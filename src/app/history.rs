use crate::core::FloorPlan;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon des Grundrisses findet erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Grundriss (Arc-Klon für O(1)-Snapshot)
    pub plan: Arc<FloorPlan>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            plan: state.plan.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.plan = self.plan;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::core::Room;
    use glam::Vec2;

    fn make_snapshot_with_room_count(count: usize) -> Snapshot {
        let mut plan = FloorPlan::new();
        for i in 0..count {
            let x = i as f32 * 200.0;
            let room = Room::from_polygon(
                plan.next_room_id(),
                format!("Room {}", i + 1),
                vec![
                    Vec2::new(x, 0.0),
                    Vec2::new(x + 100.0, 0.0),
                    Vec2::new(x + 100.0, 100.0),
                ],
                i,
            )
            .expect("gültiges Polygon");
            plan.add_room(room);
        }
        let mut state = AppState::new();
        state.plan = Arc::new(plan);
        Snapshot::from_state(&state)
    }

    #[test]
    fn test_empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_room_count(1));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_room_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_room_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.plan.rooms.len(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_room_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_room_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_room_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.plan.rooms.len(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_room_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_room_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_room_count(4));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_room_count(i));
        }

        // Nur 3 Undo-Schritte möglich
        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_room_count(0));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn test_pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(make_snapshot_with_room_count(1))
            .is_none());
        assert!(history
            .pop_redo_with_current(make_snapshot_with_room_count(1))
            .is_none());
    }

    #[test]
    fn test_snapshot_apply_to_restores_state() {
        let snap = make_snapshot_with_room_count(1);
        let mut target_state = AppState::new();
        snap.apply_to(&mut target_state);
        assert!(target_state.plan.rooms.contains_key("room-1"));
    }
}
