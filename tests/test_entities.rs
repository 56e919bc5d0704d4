use alien_wave::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.right(), 40);
    assert_eq!(r.bottom(), 60);
}

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.overlaps(&Rect::new(5, 5, 10, 10)));
    assert!(a.overlaps(&Rect::new(2, 2, 2, 2))); // contained
    assert!(!a.overlaps(&Rect::new(10, 0, 10, 10))); // shares right edge
    assert!(!a.overlaps(&Rect::new(0, 10, 10, 10))); // shares bottom edge
    assert!(!a.overlaps(&Rect::new(50, 50, 10, 10)));
}

#[test]
fn entity_rects_match_fields() {
    let p = Player { x: 200, y: 450, width: 90, height: 40 };
    assert_eq!(p.rect(), Rect::new(200, 450, 90, 40));
    let b = Bullet { x: 240, y: 450, width: 10, height: 10, active: true };
    assert_eq!(b.rect(), Rect::new(240, 450, 10, 10));
    let a = Alien { x: 39, y: 20, width: 40, height: 40 };
    assert_eq!(a.rect(), Rect::new(39, 20, 40, 40));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player { x: 200, y: 450, width: 90, height: 40 },
        bullet: Bullet { x: 0, y: 0, width: 10, height: 10, active: false },
        aliens: Vec::new(),
        velocity: 3,
        score: 0,
        columns: 5,
        rows: 3,
        status: GameStatus::Playing,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99;
    cloned.score = 999;
    cloned.aliens.push(Alien { x: 5, y: 5, width: 40, height: 40 });

    assert_eq!(original.player.x, 200);
    assert_eq!(original.score, 0);
    assert!(original.aliens.is_empty());
    assert!(!original.is_over());
}
