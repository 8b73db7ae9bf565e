//! Room category assignment
//!
//! The seed room becomes Start and the room farthest from it on the grid
//! becomes Boss. Quota categories are then dealt out at random to the
//! remaining rooms; anything left over stays Normal.

use log::warn;

use crate::config::CategoryQuota;
use crate::error::Diagnostic;
use crate::rng::DungeonRng;

use super::graph::RoomGraph;
use super::room::{RoomCategory, RoomId};

/// Pick the room with the greatest grid distance from the seed room.
///
/// Ties go to the earliest placed room. A lone seed room has no boss.
pub fn select_boss(graph: &RoomGraph) -> Option<RoomId> {
    let start = graph.seed()?.grid;
    let mut best: Option<(RoomId, i64)> = None;

    for room in graph.rooms().iter().skip(1) {
        let d = room.grid.distance_squared(start);
        if best.is_none_or(|(_, best_d)| d > best_d) {
            best = Some((room.id, d));
        }
    }

    best.map(|(id, _)| id)
}

/// Label every room in the graph.
///
/// Returns a diagnostic when the quotas ask for more rooms than remain after
/// Start and Boss; in that case no quota category is handed out at all.
pub fn assign_categories(
    graph: &mut RoomGraph,
    quotas: &[CategoryQuota],
    rng: &mut DungeonRng,
) -> Option<Diagnostic> {
    let start = graph.seed()?.id;

    let ids: Vec<RoomId> = graph.rooms().iter().map(|r| r.id).collect();
    for &id in &ids {
        graph.room_mut(id).category = RoomCategory::Normal;
    }

    graph.room_mut(start).category = RoomCategory::Start;
    let boss = select_boss(graph);
    if let Some(boss) = boss {
        graph.room_mut(boss).category = RoomCategory::Boss;
    }

    let mut pool: Vec<RoomId> = ids
        .into_iter()
        .filter(|&id| id != start && Some(id) != boss)
        .collect();

    let required: usize = quotas
        .iter()
        .filter(|q| !q.category.is_reserved())
        .map(|q| q.minimum)
        .sum();

    if required > pool.len() {
        let diagnostic = Diagnostic::QuotaShortfall {
            required,
            available: pool.len(),
        };
        warn!("{}", diagnostic);
        return Some(diagnostic);
    }

    rng.shuffle(&mut pool);
    for quota in quotas.iter().filter(|q| !q.category.is_reserved()) {
        for _ in 0..quota.minimum {
            // required <= pool.len() was checked above
            if let Some(id) = pool.pop() {
                graph.room_mut(id).category = quota.category;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Direction, GridCoord, Rect};

    /// A straight line of rooms going right, then one going up from the seed.
    fn line_graph(len: i32) -> RoomGraph {
        let mut graph = RoomGraph::new();
        let mut prev = graph.add_room(GridCoord::ORIGIN, Rect::new(0, 0, 3, 3));
        for x in 1..len {
            let id = graph.add_room(GridCoord::new(x, 0), Rect::new(x * 6, 0, 3, 3));
            graph.connect(prev, Direction::Right, id).unwrap();
            prev = id;
        }
        graph
    }

    fn count(graph: &RoomGraph, category: RoomCategory) -> usize {
        graph.rooms().iter().filter(|r| r.category == category).count()
    }

    #[test]
    fn test_boss_is_farthest() {
        let graph = line_graph(4);
        assert_eq!(select_boss(&graph), Some(RoomId(3)));
    }

    #[test]
    fn test_boss_tie_goes_to_first() {
        let mut graph = RoomGraph::new();
        let seed = graph.add_room(GridCoord::ORIGIN, Rect::new(0, 0, 3, 3));
        let right = graph.add_room(GridCoord::new(1, 0), Rect::new(6, 0, 3, 3));
        let left = graph.add_room(GridCoord::new(-1, 0), Rect::new(-6, 0, 3, 3));
        graph.connect(seed, Direction::Right, right).unwrap();
        graph.connect(seed, Direction::Left, left).unwrap();

        assert_eq!(select_boss(&graph), Some(right));
    }

    #[test]
    fn test_single_room_has_no_boss() {
        let mut graph = line_graph(1);
        let diag = assign_categories(&mut graph, &[], &mut DungeonRng::new(1));
        assert!(diag.is_none());
        assert_eq!(graph.rooms()[0].category, RoomCategory::Start);
        assert_eq!(count(&graph, RoomCategory::Boss), 0);
    }

    #[test]
    fn test_empty_graph_is_left_alone() {
        let mut graph = RoomGraph::new();
        assert!(assign_categories(&mut graph, &[], &mut DungeonRng::new(1)).is_none());
    }

    #[test]
    fn test_quotas_met() {
        let mut graph = line_graph(6);
        let quotas = [
            CategoryQuota::new(RoomCategory::Shop, 2),
            CategoryQuota::new(RoomCategory::Heal, 1),
        ];
        let diag = assign_categories(&mut graph, &quotas, &mut DungeonRng::new(5));

        assert!(diag.is_none());
        assert_eq!(count(&graph, RoomCategory::Start), 1);
        assert_eq!(count(&graph, RoomCategory::Boss), 1);
        assert_eq!(count(&graph, RoomCategory::Shop), 2);
        assert_eq!(count(&graph, RoomCategory::Heal), 1);
        assert_eq!(count(&graph, RoomCategory::Normal), 0);
        assert_eq!(graph.rooms()[5].category, RoomCategory::Boss);
    }

    #[test]
    fn test_quota_shortfall_assigns_nothing() {
        let mut graph = line_graph(3);
        let quotas = [
            CategoryQuota::new(RoomCategory::Shop, 1),
            CategoryQuota::new(RoomCategory::Heal, 1),
            CategoryQuota::new(RoomCategory::Exit, 1),
        ];
        let diag = assign_categories(&mut graph, &quotas, &mut DungeonRng::new(5));

        assert_eq!(
            diag,
            Some(Diagnostic::QuotaShortfall {
                required: 3,
                available: 1
            })
        );
        assert_eq!(graph.rooms()[0].category, RoomCategory::Start);
        assert_eq!(graph.rooms()[1].category, RoomCategory::Normal);
        assert_eq!(graph.rooms()[2].category, RoomCategory::Boss);
    }

    #[test]
    fn test_reassignment_resets_previous_labels() {
        let mut graph = line_graph(5);
        let quotas = [CategoryQuota::new(RoomCategory::Exit, 3)];
        assign_categories(&mut graph, &quotas, &mut DungeonRng::new(1));
        assert_eq!(count(&graph, RoomCategory::Exit), 3);

        assign_categories(&mut graph, &[], &mut DungeonRng::new(1));
        assert_eq!(count(&graph, RoomCategory::Exit), 0);
        assert_eq!(count(&graph, RoomCategory::Normal), 3);
    }

    #[test]
    fn test_quota_placement_varies_with_seed() {
        let quotas = [CategoryQuota::new(RoomCategory::Shop, 1)];
        let shop_at = |seed| {
            let mut graph = line_graph(10);
            assign_categories(&mut graph, &quotas, &mut DungeonRng::new(seed));
            graph
                .rooms()
                .iter()
                .position(|r| r.category == RoomCategory::Shop)
                .unwrap()
        };
        let positions: std::collections::HashSet<_> = (0..30).map(shop_at).collect();
        assert!(positions.len() > 1);
        assert!(!positions.contains(&0) && !positions.contains(&9));
    }
}
