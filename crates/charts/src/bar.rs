use crate::series::RoiComparison;
use crate::svg::{Anchor, PlotArea, SvgScene, nice_axis};
use proplens_types::format::currency;
use proplens_types::{Color, Palette};

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

/// Grouped bars comparing long-term and short-term returns.
///
/// ROI and annual cash flow differ by orders of magnitude, so each metric
/// gets its own panel and axis.
pub fn roi_comparison_scene(cmp: &RoiComparison) -> SvgScene {
    let mut scene = SvgScene::new(WIDTH, HEIGHT);
    scene.text(
        WIDTH as f32 / 2.0,
        32.0,
        "Long-term vs Short-term Rental Returns",
        20.0,
        Anchor::Middle,
        true,
        Palette::DARK,
    );

    let percent = |v: f64| format!("{:.1}%", v);
    panel(
        &mut scene,
        PlotArea { left: 80.0, right: 370.0, top: 70.0, bottom: 310.0 },
        "Annual ROI (%)",
        [cmp.long_term.annual_roi, cmp.short_term.annual_roi],
        &percent,
    );
    panel(
        &mut scene,
        PlotArea { left: 490.0, right: 770.0, top: 70.0, bottom: 310.0 },
        "Annual Cash Flow ($)",
        [cmp.long_term.annual_cash_flow, cmp.short_term.annual_cash_flow],
        &currency,
    );

    scene.legend_item(250.0, 375.0, "Long-term Rental", Palette::PRIMARY);
    scene.legend_item(430.0, 375.0, "Short-term Rental", Palette::ACCENT);
    scene
}

fn panel(
    scene: &mut SvgScene,
    plot: PlotArea,
    caption: &str,
    values: [f64; 2],
    label: &dyn Fn(f64) -> String,
) {
    let axis = nice_axis(values[0].min(values[1]), values[0].max(values[1]));
    scene.value_grid(plot, axis, |v| label(v));

    let colors: [Color; 2] = [Palette::PRIMARY, Palette::ACCENT];
    let bar_width = plot.width() * 0.28;
    let zero_y = plot.y_for(0.0, axis.0, axis.1);
    for (i, (value, color)) in values.iter().zip(colors).enumerate() {
        let center = plot.left + plot.width() * (0.3 + 0.4 * i as f32);
        let y = plot.y_for(*value, axis.0, axis.1);
        let (top, height) = if y < zero_y { (y, zero_y - y) } else { (zero_y, y - zero_y) };
        scene.rect(center - bar_width / 2.0, top, bar_width, height, color, 0.9);

        let label_y = if *value >= 0.0 { top - 8.0 } else { top + height + 18.0 };
        scene.text(center, label_y, &label(*value), 13.0, Anchor::Middle, true, Palette::DARK);
    }

    scene.text(
        (plot.left + plot.right) / 2.0,
        plot.bottom + 26.0,
        caption,
        14.0,
        Anchor::Middle,
        false,
        Palette::SECONDARY,
    );
}
