//! Game session: one round of sorting shapes into drop zones.
//!
//! The session owns the zone views, the drag relay and the tray of shape
//! tokens. Zone views relay drops through a channel; the session is the
//! listener that judges them:
//!
//! - **Matched**: the token is consumed and the score goes up
//! - **Mismatched**: the token goes back to the tray and a miss is counted
//! - **Dropped elsewhere**: the token goes back to the tray
//!
//! The round is complete when the tray is empty.
//!
//! All coordinates are layout units. The terminal view decides how many
//! columns and rows a unit takes.

use std::sync::mpsc;

use log::{debug, info};

use crate::config::GameConfig;
use crate::drag::{Dispatch, DragHelper, ZoneId};
use crate::drop_zone::DropOutcome;
use crate::error::ShapeError;
use crate::levels::level_zones;
use crate::presenter::DropZonePresenter;
use crate::rng::{deal_tray, SimpleRng};
use crate::types::{GameAction, GameLevel, PointerEvent, RectF, ShapeKind};
use crate::zone_view::{drop_channel, DropSender, DropZoneView, ShapeDropped};

/// Blank space kept around the play area.
const MARGIN: f32 = 1.0;

/// Horizontal space between zones, wide enough for a zone to grow into.
const ZONE_GAP: f32 = 3.0;

/// Space between tray tokens.
const TOKEN_GAP: f32 = 1.0;

/// Rows reserved between the zone band and the tray (zone labels).
const LABEL_ROWS: f32 = 3.0;

/// A shape waiting in the tray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayToken {
    pub kind: ShapeKind,
    pub bounds: RectF,
}

/// The result of the most recent drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastDrop {
    /// Shape that was dragged.
    pub dragged: ShapeKind,
    /// Expected shape of the zone it landed in, if it landed in one.
    pub zone: Option<ShapeKind>,
    /// Outcome, if it landed in a zone.
    pub outcome: Option<DropOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Held {
    index: usize,
    grab_dx: f32,
    grab_dy: f32,
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    level: GameLevel,
    zones: Vec<DropZoneView>,
    drag: DragHelper,
    drop_tx: DropSender,
    drops: mpsc::Receiver<ShapeDropped>,
    tray: Vec<TrayToken>,
    held: Option<Held>,
    pointer: (f32, f32),
    rng: SimpleRng,
    score: u32,
    misses: u32,
    last_drop: Option<LastDrop>,
    size: (f32, f32),
}

impl GameSession {
    /// Create a session dealt at the configured starting level.
    pub fn new(config: GameConfig) -> Result<Self, ShapeError> {
        let (drop_tx, drops) = drop_channel();
        let mut session = Self {
            level: config.start_level,
            rng: SimpleRng::new(config.seed),
            config,
            zones: Vec::new(),
            drag: DragHelper::new(),
            drop_tx,
            drops,
            tray: Vec::new(),
            held: None,
            pointer: (0.0, 0.0),
            score: 0,
            misses: 0,
            last_drop: None,
            size: (0.0, 0.0),
        };
        session.start_round(session.level)?;
        Ok(session)
    }

    pub fn level(&self) -> GameLevel {
        self.level
    }

    pub fn zones(&self) -> &[DropZoneView] {
        &self.zones
    }

    pub fn tray(&self) -> &[TrayToken] {
        &self.tray
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Tokens left to sort.
    pub fn remaining(&self) -> usize {
        self.tray.len()
    }

    pub fn is_level_complete(&self) -> bool {
        self.tray.is_empty()
    }

    pub fn last_drop(&self) -> Option<LastDrop> {
        self.last_drop
    }

    pub fn drag_helper(&self) -> &DragHelper {
        &self.drag
    }

    /// Index of the token being dragged.
    pub fn held_index(&self) -> Option<usize> {
        self.held.map(|h| h.index)
    }

    /// The token being dragged, positioned under the pointer.
    pub fn held_token(&self) -> Option<TrayToken> {
        let held = self.held?;
        let token = self.tray.get(held.index)?;
        let (px, py) = self.pointer;
        Some(TrayToken {
            kind: token.kind,
            bounds: RectF::from_origin(
                px - held.grab_dx,
                py - held.grab_dy,
                token.bounds.width(),
                token.bounds.height(),
            ),
        })
    }

    /// Deal a fresh round at `level`.
    pub fn start_round(&mut self, level: GameLevel) -> Result<(), ShapeError> {
        for view in &self.zones {
            view.detach(&mut self.drag);
        }
        self.drag.cancel_drag();
        // Stale notifications belong to the previous round.
        while self.drops.try_recv().is_ok() {}

        let shapes = self.config.shapes_for(level);
        let mut zones = Vec::with_capacity(shapes.len());
        for (i, zone) in level_zones(level, &shapes)?.into_iter().enumerate() {
            let mut view = DropZoneView::new(DropZonePresenter::new(ZoneId(i)));
            view.set_drop_zone(zone);
            view.set_listener(self.drop_tx.clone());
            zones.push(view);
        }

        self.level = level;
        self.zones = zones;
        self.tray = deal_tray(&mut self.rng, &shapes, self.config.tokens_per_shape)
            .into_iter()
            .map(|kind| TrayToken {
                kind,
                bounds: RectF::default(),
            })
            .collect();
        self.held = None;
        self.score = 0;
        self.misses = 0;
        self.last_drop = None;

        let (w, h) = self.size;
        self.layout(w, h);
        info!(
            "level {} dealt: {} zones, {} tokens",
            level.number(),
            self.zones.len(),
            self.tray.len()
        );
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), ShapeError> {
        self.start_round(self.level)
    }

    pub fn next_level(&mut self) -> Result<(), ShapeError> {
        self.start_round(self.level.next())
    }

    pub fn previous_level(&mut self) -> Result<(), ShapeError> {
        self.start_round(self.level.previous())
    }

    pub fn apply_action(&mut self, action: GameAction) -> Result<(), ShapeError> {
        match action {
            GameAction::Restart => self.restart(),
            GameAction::NextLevel => self.next_level(),
            GameAction::PreviousLevel => self.previous_level(),
        }
    }

    /// Lay out zones and tray for a play area of `width` x `height` units and
    /// refresh the drag registrations.
    pub fn layout(&mut self, width: f32, height: f32) {
        self.size = (width, height);

        let n = self.zones.len().max(1) as f32;
        let avail_w = (width - 2.0 * MARGIN - (n + 1.0) * ZONE_GAP) / n;
        let side = avail_w.min(height * 0.4).floor().max(1.0);
        let total_w = n * side + (n - 1.0) * ZONE_GAP;
        let start_x = ((width - total_w) / 2.0).floor().max(MARGIN);
        // Leave room above the zones for the hover growth.
        let zone_top = MARGIN + (side * 0.1).ceil();

        for (i, view) in self.zones.iter_mut().enumerate() {
            let x = start_x + i as f32 * (side + ZONE_GAP);
            view.set_bounds(RectF::from_origin(x, zone_top, side, side));
            view.attach(&mut self.drag);
        }

        let tray_top = zone_top + side + LABEL_ROWS;
        let tray_h = height - tray_top - MARGIN;
        let (token, per_row) = tray_grid(self.tray.len(), width - 2.0 * MARGIN, tray_h, side * 0.6);
        for (i, t) in self.tray.iter_mut().enumerate() {
            let col = (i % per_row) as f32;
            let row = (i / per_row) as f32;
            t.bounds = RectF::from_origin(
                MARGIN + col * (token + TOKEN_GAP),
                tray_top + row * (token + TOKEN_GAP),
                token,
                token,
            );
        }
    }

    /// Route a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up { x, y } => self.pointer_up(x, y),
        }
    }

    /// Pick up the tray token under the pointer, if any.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        let Some(index) = self.tray.iter().rposition(|t| t.bounds.contains(x, y)) else {
            return;
        };
        let token = self.tray[index];
        self.held = Some(Held {
            index,
            grab_dx: x - token.bounds.left,
            grab_dy: y - token.bounds.top,
        });
        debug!("picked up {} from tray slot {}", token.kind, index);
        let dispatch = self.drag.start_drag(Some(token.kind));
        self.deliver(dispatch);
        let dispatch = self.drag.drag_to(x, y);
        self.deliver(dispatch);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        if self.held.is_none() {
            return;
        }
        let dispatch = self.drag.drag_to(x, y);
        self.deliver(dispatch);
    }

    /// Release the held token and judge where it landed.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
        let Some(held) = self.held.take() else {
            return;
        };
        let Some(token) = self.tray.get(held.index).copied() else {
            self.drag.cancel_drag();
            return;
        };

        let dispatch = self.drag.drop_at(x, y);
        self.deliver(dispatch);

        let drops: Vec<ShapeDropped> = self.drops.try_iter().collect();
        let mut consumed = false;
        let mut last = LastDrop {
            dragged: token.kind,
            zone: None,
            outcome: None,
        };
        for dropped in drops {
            let outcome = dropped.zone.evaluate(dropped.shape);
            match outcome {
                DropOutcome::Matched => {
                    self.score += 1;
                    consumed = true;
                }
                DropOutcome::Mismatched(_) | DropOutcome::Empty => self.misses += 1,
            }
            info!(
                "{} dropped on {} zone: {:?}",
                token.kind,
                dropped.zone.shape_name(),
                outcome
            );
            last.zone = Some(dropped.zone.expected_shape());
            last.outcome = Some(outcome);
        }
        self.last_drop = Some(last);

        if consumed {
            self.tray.remove(held.index);
            let (w, h) = self.size;
            self.layout(w, h);
            if self.tray.is_empty() {
                info!(
                    "level {} complete: score {}, misses {}",
                    self.level.number(),
                    self.score,
                    self.misses
                );
            }
        }
    }

    /// Advance zone animations.
    pub fn tick(&mut self, dt_ms: u32) {
        for view in &mut self.zones {
            view.tick(dt_ms);
        }
    }

    fn deliver(&mut self, dispatch: Dispatch) {
        for (id, event) in dispatch {
            if let Some(view) = self.zones.get_mut(id.0) {
                event.deliver(view);
            }
        }
    }
}

/// Largest token size (at most `max_token`) whose grid of `count` tokens fits
/// `width` x `height`, with the tokens per row at that size. Falls back to
/// size 1 when nothing fits.
fn tray_grid(count: usize, width: f32, height: f32, max_token: f32) -> (f32, usize) {
    let per_row_for = |token: f32| (((width + TOKEN_GAP) / (token + TOKEN_GAP)).floor() as usize).max(1);

    let mut token = max_token.min(height).floor().max(1.0);
    while token > 1.0 {
        let per_row = per_row_for(token);
        let rows = count.div_ceil(per_row) as f32;
        if rows * (token + TOKEN_GAP) - TOKEN_GAP <= height {
            break;
        }
        token -= 1.0;
    }
    (token, per_row_for(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_TOKENS_PER_SHAPE, NEUTRAL_SCALE, SCALE_ANIMATION_DURATION_MS};

    fn session() -> GameSession {
        let mut s = GameSession::new(GameConfig::default()).unwrap();
        s.layout(80.0, 30.0);
        s
    }

    fn center(r: RectF) -> (f32, f32) {
        (r.center_x(), r.center_y())
    }

    fn zone_center(s: &GameSession, kind: ShapeKind) -> (f32, f32) {
        let view = s
            .zones()
            .iter()
            .find(|v| v.drop_zone().map(|z| z.expected_shape()) == Some(kind))
            .unwrap();
        center(view.bounds())
    }

    #[test]
    fn level_one_deals_two_zones_and_four_tokens() {
        let s = session();
        assert_eq!(s.level(), GameLevel::Level1);
        assert_eq!(s.zones().len(), 2);
        assert_eq!(s.remaining(), 4);
        assert!(!s.is_level_complete());
    }

    #[test]
    fn layout_keeps_zones_and_tokens_apart() {
        let s = session();
        let zone_bottom = s.zones().iter().map(|v| v.bounds().bottom).fold(0.0, f32::max);
        for t in s.tray() {
            assert!(t.bounds.top >= zone_bottom);
            assert!(!t.bounds.is_degenerate());
        }
        for v in s.zones() {
            assert!(s.drag_helper().is_registered(v.id()));
        }
    }

    #[test]
    fn matching_drop_consumes_token() {
        let mut s = session();
        let token = s.tray()[0];
        let (tx, ty) = center(token.bounds);
        let (zx, zy) = zone_center(&s, token.kind);

        s.pointer_down(tx, ty);
        assert_eq!(s.held_index(), Some(0));
        s.pointer_move(zx, zy);
        s.pointer_up(zx, zy);

        assert_eq!(s.score(), 1);
        assert_eq!(s.misses(), 0);
        assert_eq!(s.remaining(), 3);
        let last = s.last_drop().unwrap();
        assert_eq!(last.outcome, Some(DropOutcome::Matched));
        assert_eq!(last.zone, Some(token.kind));
    }

    #[test]
    fn wrong_drop_returns_token() {
        let mut s = session();
        let token = s.tray()[0];
        let other = GameLevel::Level1
            .shapes()
            .iter()
            .copied()
            .find(|&k| k != token.kind)
            .unwrap();
        let (tx, ty) = center(token.bounds);
        let (zx, zy) = zone_center(&s, other);

        s.pointer_down(tx, ty);
        s.pointer_move(zx, zy);
        s.pointer_up(zx, zy);

        assert_eq!(s.score(), 0);
        assert_eq!(s.misses(), 1);
        assert_eq!(s.remaining(), 4);
        assert_eq!(
            s.last_drop().unwrap().outcome,
            Some(DropOutcome::Mismatched(token.kind))
        );
    }

    #[test]
    fn drop_outside_zones_is_neither_hit_nor_miss() {
        let mut s = session();
        let (tx, ty) = center(s.tray()[0].bounds);
        s.pointer_down(tx, ty);
        s.pointer_up(0.0, 0.0);
        assert_eq!((s.score(), s.misses(), s.remaining()), (0, 0, 4));
        assert_eq!(s.last_drop().unwrap().outcome, None);
    }

    #[test]
    fn hovered_zone_settles_after_drop() {
        let mut s = session();
        let token = s.tray()[0];
        let (tx, ty) = center(token.bounds);
        let (zx, zy) = zone_center(&s, token.kind);
        s.pointer_down(tx, ty);
        s.pointer_move(zx, zy);
        assert!(s.zones().iter().any(|v| v.target_scale() > NEUTRAL_SCALE));

        s.pointer_up(zx, zy);
        s.tick(SCALE_ANIMATION_DURATION_MS);
        assert!(s.zones().iter().all(|v| v.scale() == NEUTRAL_SCALE));
    }

    #[test]
    fn sorting_every_token_completes_level() {
        let mut s = session();
        while let Some(token) = s.tray().first().copied() {
            let (tx, ty) = center(token.bounds);
            let (zx, zy) = zone_center(&s, token.kind);
            s.pointer_down(tx, ty);
            s.pointer_move(zx, zy);
            s.pointer_up(zx, zy);
        }
        assert!(s.is_level_complete());
        assert_eq!(s.score(), 4);

        s.apply_action(GameAction::NextLevel).unwrap();
        assert_eq!(s.level(), GameLevel::Level2);
        assert_eq!(s.zones().len(), 3);
        assert_eq!(s.remaining(), 6);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn pointer_without_token_does_nothing() {
        let mut s = session();
        s.pointer_down(0.0, 0.0);
        assert_eq!(s.held_index(), None);
        assert!(!s.drag_helper().is_dragging());
        s.pointer_up(0.0, 0.0);
        assert_eq!(s.last_drop(), None);
    }

    #[test]
    fn crowded_tray_shrinks_to_stay_on_screen() {
        let config = GameConfig {
            start_level: GameLevel::Level3,
            tokens_per_shape: MAX_TOKENS_PER_SHAPE,
            ..GameConfig::default()
        };
        let mut s = GameSession::new(config).unwrap();
        for (w, h) in [(40.0, 24.0), (80.0, 24.0), (30.0, 20.0)] {
            s.layout(w, h);
            assert_eq!(s.remaining(), 36);
            for t in s.tray() {
                assert!(t.bounds.bottom <= h - MARGIN, "{:?} below {h}", t.bounds);
                assert!(t.bounds.right <= w - MARGIN, "{:?} past {w}", t.bounds);
            }
        }
    }

    #[test]
    fn roomy_tray_keeps_full_token_size() {
        assert_eq!(tray_grid(4, 78.0, 11.0, 7.2), (7.0, 9));
        assert_eq!(tray_grid(40, 38.0, 13.0, 3.0), (2.0, 13));
    }

    #[test]
    fn held_token_follows_pointer() {
        let mut s = session();
        let token = s.tray()[1];
        s.pointer_down(token.bounds.left, token.bounds.top);
        s.pointer_move(token.bounds.left + 5.0, token.bounds.top - 2.0);
        let held = s.held_token().unwrap();
        assert_eq!(held.kind, token.kind);
        assert_eq!(held.bounds.left, token.bounds.left + 5.0);
        assert_eq!(held.bounds.top, token.bounds.top - 2.0);
    }
}
