use crate::series::{ExpenseSlice, gauge_band};
use crate::svg::{Anchor, SvgScene};
use proplens_types::Palette;
use std::f32::consts::{PI, TAU};

pub const EXPENSE_SIZE: u32 = 600;
pub const GAUGE_WIDTH: u32 = 400;
pub const GAUGE_HEIGHT: u32 = 300;

/// Ring chart of monthly expenses with a `label: $value (p%)` legend.
pub fn expense_scene(slices: &[ExpenseSlice]) -> SvgScene {
    let mut scene = SvgScene::new(EXPENSE_SIZE, EXPENSE_SIZE);
    scene.text(300.0, 36.0, "Monthly Expense Breakdown", 20.0, Anchor::Middle, true, Palette::DARK);

    let center = (300.0, 230.0);
    let (outer, inner) = (160.0, 90.0);

    match slices {
        [] => {
            scene.ring(center, (outer + inner) / 2.0, outer - inner, Palette::LIGHT);
            scene.text(
                center.0,
                center.1 + 5.0,
                "No expenses reported",
                16.0,
                Anchor::Middle,
                false,
                Palette::MUTED,
            );
        }
        [only] => scene.ring(center, (outer + inner) / 2.0, outer - inner, only.color),
        _ => {
            let mut angle = -PI / 2.0;
            for slice in slices {
                let sweep = (slice.share / 100.0) as f32 * TAU;
                scene.ring_segment(center, outer, inner, angle, angle + sweep, slice.color);
                angle += sweep;
            }
        }
    }

    // Two legend columns under the ring.
    let rows = slices.len().div_ceil(2);
    for (i, slice) in slices.iter().enumerate() {
        let (column, row) = (i / rows.max(1), i % rows.max(1));
        let x = 40.0 + column as f32 * 280.0;
        let y = 440.0 + row as f32 * 28.0;
        scene.legend_item(x, y, &slice.legend(), slice.color);
    }
    scene
}

/// Half ring filled to `score` out of 100, score printed in the middle.
pub fn gauge_scene(score: u8) -> SvgScene {
    let (score, color) = gauge_band(score);
    let mut scene = SvgScene::new(GAUGE_WIDTH, GAUGE_HEIGHT);

    let center = (200.0, 220.0);
    let (outer, inner) = (150.0, 100.0);
    let split = PI + PI * score as f32 / 100.0;
    scene.ring_segment(center, outer, inner, PI, split, color);
    scene.ring_segment(center, outer, inner, split, TAU, Palette::LIGHT);

    scene.text(center.0, center.1 - 12.0, &score.to_string(), 48.0, Anchor::Middle, true, color);
    scene.text(
        center.0,
        center.1 + 30.0,
        "Investment Score",
        16.0,
        Anchor::Middle,
        false,
        Palette::SECONDARY,
    );
    scene
}
