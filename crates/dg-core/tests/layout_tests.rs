use dg_core::dungeon::{Direction, GridCoord, Rect, RoomCategory, RoomId};
use dg_core::{
    generate, CategoryQuota, Diagnostic, DungeonGenerator, DungeonRng, GenError, GeneratorConfig,
};

fn count(dungeon: &dg_core::Dungeon, category: RoomCategory) -> usize {
    dungeon.rooms_with(category).count()
}

#[test]
fn test_single_square_room() {
    let cfg = GeneratorConfig::default()
        .with_map_size(100, 100)
        .with_target_rooms(1)
        .with_room_width(5, 5)
        .with_room_height(5, 5)
        .with_quotas(vec![]);

    let dungeon = generate(&cfg, &mut DungeonRng::new(1)).unwrap();

    assert_eq!(dungeon.rooms().len(), 1);
    let room = &dungeon.rooms()[0];
    assert_eq!(room.grid, GridCoord::new(0, 0));
    assert_eq!(room.bounds.width, 5);
    assert_eq!(room.bounds.height, 5);
    assert_eq!(room.category, RoomCategory::Start);
    assert!(dungeon.boss().is_none());
    assert!(dungeon.corridors.is_empty());
    assert_eq!(dungeon.floor.len(), 25);
    assert_eq!(dungeon.walls.len(), 24);
    assert!(dungeon.is_complete());
}

#[test]
fn test_five_rooms_with_shop_and_heal() {
    let cfg = GeneratorConfig::default()
        .with_map_size(200, 200)
        .with_target_rooms(5)
        .with_quotas(vec![
            CategoryQuota::new(RoomCategory::Shop, 1),
            CategoryQuota::new(RoomCategory::Heal, 1),
        ]);

    for seed in 0..30 {
        let dungeon = generate(&cfg, &mut DungeonRng::new(seed)).unwrap();

        assert_eq!(dungeon.rooms().len(), 5, "seed {}", seed);
        assert_eq!(count(&dungeon, RoomCategory::Start), 1);
        assert_eq!(count(&dungeon, RoomCategory::Boss), 1);
        assert_eq!(count(&dungeon, RoomCategory::Shop), 1);
        assert_eq!(count(&dungeon, RoomCategory::Heal), 1);
        assert_eq!(count(&dungeon, RoomCategory::Normal), 1);
        assert!(dungeon.is_complete());

        let start = dungeon.start().unwrap().id;
        assert_eq!(start, RoomId(0));
        let dist = dungeon.graph.graph_distance(start);
        assert!(dist.iter().all(Option::is_some), "seed {}: disconnected", seed);
    }
}

#[test]
fn test_quota_exceeds_available_rooms() {
    let cfg = GeneratorConfig::default()
        .with_target_rooms(3)
        .with_quotas(vec![
            CategoryQuota::new(RoomCategory::Shop, 1),
            CategoryQuota::new(RoomCategory::Heal, 1),
            CategoryQuota::new(RoomCategory::Exit, 1),
        ]);

    let dungeon = generate(&cfg, &mut DungeonRng::new(42)).unwrap();

    assert_eq!(dungeon.rooms().len(), 3);
    assert_eq!(
        dungeon.diagnostics,
        vec![Diagnostic::QuotaShortfall {
            required: 3,
            available: 1
        }]
    );
    assert_eq!(count(&dungeon, RoomCategory::Start), 1);
    assert_eq!(count(&dungeon, RoomCategory::Boss), 1);
    assert_eq!(count(&dungeon, RoomCategory::Normal), 1);
}

#[test]
fn test_boss_is_grid_farthest_from_start() {
    let cfg = GeneratorConfig::default().with_target_rooms(12).with_quotas(vec![]);
    for seed in 0..20 {
        let dungeon = generate(&cfg, &mut DungeonRng::new(seed)).unwrap();
        let start = dungeon.start().unwrap().grid;
        let boss = dungeon.boss().unwrap();
        let farthest = dungeon
            .rooms()
            .iter()
            .map(|r| r.grid.distance_squared(start))
            .max()
            .unwrap();
        assert_eq!(boss.grid.distance_squared(start), farthest);

        let first_farthest = dungeon
            .rooms()
            .iter()
            .find(|r| r.grid.distance_squared(start) == farthest)
            .unwrap();
        assert_eq!(boss.id, first_farthest.id);
    }
}

#[test]
fn test_each_used_side_carries_one_corridor() {
    let cfg = GeneratorConfig::default()
        .with_target_rooms(15)
        .with_expansion(dg_core::ExpansionPolicy::Exhaustive);
    let dungeon = generate(&cfg, &mut DungeonRng::new(6)).unwrap();

    for room in dungeon.rooms() {
        for side in Direction::all() {
            let through_side = dungeon
                .corridors
                .iter()
                .filter(|c| {
                    (c.from == room.id && c.direction == side)
                        || (c.to == room.id && c.direction.opposite() == side)
                })
                .count();
            let expected = usize::from(room.side_used(side));
            assert_eq!(through_side, expected, "room {} side {}", room.id, side);
        }
    }
}

#[test]
fn test_corridor_tiles_link_facing_edges() {
    let cfg = GeneratorConfig::default().with_target_rooms(10);
    let dungeon = generate(&cfg, &mut DungeonRng::new(12)).unwrap();

    for corridor in &dungeon.corridors {
        let a = dungeon.graph.room(corridor.from).bounds;
        let b = dungeon.graph.room(corridor.to).bounds;
        let first = *corridor.tiles.first().unwrap();
        let last = *corridor.tiles.last().unwrap();
        let (dx, dy) = corridor.direction.offset();

        // The tile before the first and after the last one land inside the rooms.
        assert!(a.contains(first.offset(-dx, -dy)));
        assert!(b.contains(last.offset(dx, dy)));
    }
}

#[test]
fn test_rooms_stay_on_grid_pitch() {
    let cfg = GeneratorConfig::default()
        .with_map_size(80, 60)
        .with_room_width(3, 9)
        .with_room_height(3, 6)
        .with_margin(2)
        .with_target_rooms(10);
    let dungeon = generate(&cfg, &mut DungeonRng::new(31)).unwrap();

    for room in dungeon.rooms() {
        assert_eq!(room.bounds.x, 40 + room.grid.x * 11);
        assert_eq!(room.bounds.y, 30 + room.grid.y * 8);
        assert!((3..=9).contains(&room.bounds.width));
        assert!((3..=6).contains(&room.bounds.height));
    }
}

#[test]
fn test_invalid_config_never_runs() {
    let cfg = GeneratorConfig::default().with_map_size(100, 0);
    assert!(DungeonGenerator::new(cfg.clone(), DungeonRng::new(1)).is_err());
    assert!(matches!(
        generate(&cfg, &mut DungeonRng::new(1)),
        Err(GenError::Config(_))
    ));
}

#[test]
fn test_regenerate_runs_full_pipeline_each_time() {
    let cfg = GeneratorConfig::default().with_target_rooms(7);
    let mut generator = DungeonGenerator::new(cfg, DungeonRng::new(5)).unwrap();

    for _ in 0..5 {
        let dungeon = generator.regenerate().unwrap();
        assert_eq!(dungeon.rooms().len(), 7);
        assert!(dungeon.start().is_some());
        assert!(dungeon.walls.is_disjoint(&dungeon.floor));
    }
}

#[test]
fn test_floor_bounding_rect_covers_rooms() {
    let dungeon = generate(
        &GeneratorConfig::default().with_target_rooms(6),
        &mut DungeonRng::new(17),
    )
    .unwrap();
    let floor_rect = dungeon.floor.bounding_rect().unwrap();
    let wall_rect = dungeon.walls.bounding_rect().unwrap();

    assert!(dungeon.rooms().iter().all(|r| floor_rect.contains_rect(&r.bounds)));
    assert_eq!(
        wall_rect,
        Rect::new(
            floor_rect.x - 1,
            floor_rect.y - 1,
            floor_rect.width + 2,
            floor_rect.height + 2
        )
    );
}

#[test]
fn test_dungeon_serializes() {
    let dungeon = generate(
        &GeneratorConfig::default().with_target_rooms(3),
        &mut DungeonRng::new(2),
    )
    .unwrap();
    let json = serde_json::to_value(&dungeon).unwrap();

    assert_eq!(json["rng_seed"], 2);
    assert_eq!(json["graph"]["rooms"].as_array().unwrap().len(), 3);
    assert_eq!(json["graph"]["rooms"][0]["category"], "start");
    assert_eq!(
        json["floor"].as_array().unwrap().len(),
        dungeon.floor.len()
    );
}
