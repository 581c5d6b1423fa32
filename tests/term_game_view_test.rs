use tui_shapi::core::{GameConfig, GameSession};
use tui_shapi::term::{FrameBuffer, GameView, Viewport, FILL_CHAR, STROKE_CHAR};
use tui_shapi::types::RectF;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn laid_out_session(view: &GameView, vp: Viewport) -> GameSession {
    let mut session = GameSession::new(GameConfig::default()).unwrap();
    let (w, h) = view.play_area(vp);
    session.layout(w, h);
    session
}

fn center(r: RectF) -> (f32, f32) {
    (r.center_x(), r.center_y())
}

#[test]
fn renders_zone_labels_and_panel() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let session = laid_out_session(&view, vp);
    let fb = view.render(&session, vp);
    let text = screen_text(&fb);

    assert!(text.contains("Rectangle"));
    assert!(text.contains("Circle"));
    assert!(!text.contains("Diamond"));
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains('┌'));
    assert!(text.contains(FILL_CHAR));
    assert!(text.contains(STROKE_CHAR));
    assert!(!text.contains("LEVEL COMPLETE"));
}

#[test]
fn narrow_viewport_drops_side_panel() {
    let view = GameView::default();
    let vp = Viewport::new(50, 24);
    let session = laid_out_session(&view, vp);
    let fb = view.render(&session, vp);
    assert_eq!(view.play_area(vp), (25.0, 24.0));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn to_layout_maps_cell_centers() {
    let view = GameView::default();
    assert_eq!(view.to_layout(0, 0), (0.25, 0.5));
    assert_eq!(view.to_layout(9, 3), (4.75, 3.5));
}

#[test]
fn hovered_zone_border_grows() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let mut session = laid_out_session(&view, vp);

    let border_cells = |fb: &FrameBuffer| screen_text(fb).matches('─').count();
    let before = border_cells(&view.render(&session, vp));

    let token = session.tray()[0];
    let zone = session
        .zones()
        .iter()
        .find(|v| v.drop_zone().unwrap().expected_shape() == token.kind)
        .unwrap()
        .bounds();
    let (tx, ty) = center(token.bounds);
    let (zx, zy) = center(zone);
    session.pointer_down(tx, ty);
    session.pointer_move(zx, zy);
    session.tick(1000);

    let after = border_cells(&view.render(&session, vp));
    assert!(after > before, "border {before} -> {after}");
}

#[test]
fn completed_level_shows_overlay() {
    let view = GameView::default();
    let vp = Viewport::new(100, 30);
    let mut session = laid_out_session(&view, vp);

    while let Some(token) = session.tray().first().copied() {
        let zone = session
            .zones()
            .iter()
            .find(|v| v.drop_zone().unwrap().expected_shape() == token.kind)
            .unwrap()
            .bounds();
        let (tx, ty) = center(token.bounds);
        let (zx, zy) = center(zone);
        session.pointer_down(tx, ty);
        session.pointer_move(zx, zy);
        session.pointer_up(zx, zy);
    }

    let text = screen_text(&view.render(&session, vp));
    assert!(text.contains("LEVEL COMPLETE"));
    assert!(text.contains("MATCH!"));
}
