use crate::series::{MARKET_AVERAGE_OCCUPANCY, SEASONS};
use crate::svg::{Anchor, SvgScene};
use proplens_types::Palette;
use std::f32::consts::{FRAC_PI_2, TAU};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

const CENTER: (f32, f32) = (330.0, 215.0);
const RADIUS: f32 = 140.0;

/// Point on axis `index` at `percent` of the full radius. Spring points up
/// and the seasons run clockwise.
fn axis_point(index: usize, percent: f64) -> (f32, f32) {
    let angle = -FRAC_PI_2 + TAU * index as f32 / SEASONS.len() as f32;
    let r = RADIUS * (percent.clamp(0.0, 100.0) / 100.0) as f32;
    (CENTER.0 + r * angle.cos(), CENTER.1 + r * angle.sin())
}

/// Four-axis radar of seasonal occupancy against the market average.
pub fn occupancy_scene(subject: &[f64; 4]) -> SvgScene {
    let mut scene = SvgScene::new(WIDTH, HEIGHT);
    scene.text(
        WIDTH as f32 / 2.0,
        32.0,
        "Seasonal Occupancy Patterns",
        20.0,
        Anchor::Middle,
        true,
        Palette::DARK,
    );

    for ring in 1..=5 {
        let level = ring as f64 * 20.0;
        let mut points: Vec<(f32, f32)> =
            (0..SEASONS.len()).map(|i| axis_point(i, level)).collect();
        points.push(points[0]);
        scene.polyline(&points, Palette::LIGHT, 1.0, None);
        let (x, y) = axis_point(0, level);
        scene.text(
            x + 4.0,
            y + 4.0,
            &format!("{}%", level),
            10.0,
            Anchor::Start,
            false,
            Palette::MUTED,
        );
    }
    for (i, season) in SEASONS.iter().enumerate() {
        let end = axis_point(i, 100.0);
        scene.line(CENTER, end, Palette::LIGHT, 1.0, None);
        let (dx, dy) = (end.0 - CENTER.0, end.1 - CENTER.1);
        let (x, y) = (CENTER.0 + dx * 1.15, CENTER.1 + dy * 1.15 + 5.0);
        scene.text(x, y, season, 14.0, Anchor::Middle, true, Palette::SECONDARY);
    }

    let market: Vec<(f32, f32)> = MARKET_AVERAGE_OCCUPANCY
        .iter()
        .enumerate()
        .map(|(i, v)| axis_point(i, *v))
        .collect();
    scene.polygon(&market, Palette::WARNING, 0.1, Palette::WARNING, Some("6 4"));

    let points: Vec<(f32, f32)> =
        subject.iter().enumerate().map(|(i, v)| axis_point(i, *v)).collect();
    scene.polygon(&points, Palette::ACCENT, 0.3, Palette::ACCENT, None);
    for point in &points {
        scene.circle(*point, 4.0, Palette::ACCENT);
    }

    scene.legend_item(560.0, 180.0, "Your Property", Palette::ACCENT);
    scene.legend_item(560.0, 210.0, "Market Average", Palette::WARNING);
    scene
}
