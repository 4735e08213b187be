use crate::series::Projection;
use crate::svg::{Anchor, PlotArea, SvgScene, nice_axis};
use proplens_types::format::currency;
use proplens_types::Palette;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

/// Dual-line chart of annual and cumulative projected cash flow.
pub fn cash_flow_scene(projection: &Projection) -> SvgScene {
    let mut scene = SvgScene::new(WIDTH, HEIGHT);
    scene.text(
        WIDTH as f32 / 2.0,
        32.0,
        "5-Year Cash Flow Projection",
        20.0,
        Anchor::Middle,
        true,
        Palette::DARK,
    );

    let plot = PlotArea {
        left: 100.0,
        right: 770.0,
        top: 60.0,
        bottom: 320.0,
    };
    let values = projection.annual.iter().chain(&projection.cumulative);
    let min = values.clone().cloned().fold(f64::INFINITY, f64::min);
    let max = values.cloned().fold(f64::NEG_INFINITY, f64::max);
    let axis = if min.is_finite() { nice_axis(min, max) } else { nice_axis(0.0, 0.0) };
    scene.value_grid(plot, axis, currency);

    let count = projection.labels.len().max(1);
    let slot = plot.width() / count as f32;
    let x_at = |i: usize| plot.left + slot * (i as f32 + 0.5);
    for (i, label) in projection.labels.iter().enumerate() {
        scene.text(
            x_at(i),
            plot.bottom + 24.0,
            label,
            13.0,
            Anchor::Middle,
            false,
            Palette::SECONDARY,
        );
    }

    let series = [
        (&projection.annual, Palette::PRIMARY),
        (&projection.cumulative, Palette::SUCCESS),
    ];
    for (values, color) in series {
        let points: Vec<(f32, f32)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (x_at(i), plot.y_for(*v, axis.0, axis.1)))
            .collect();
        scene.polyline(&points, color, 3.0, None);
        for point in points {
            scene.circle(point, 4.5, color);
        }
    }

    scene.legend_item(250.0, 375.0, "Annual Cash Flow", Palette::PRIMARY);
    scene.legend_item(430.0, 375.0, "Cumulative Cash Flow", Palette::SUCCESS);
    scene
}
