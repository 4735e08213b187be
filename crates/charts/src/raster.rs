use crate::svg::SvgScene;
use crate::ChartError;
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

/// Rasterizes a scene at its intrinsic size and encodes it as PNG.
pub fn rasterize(scene: SvgScene, fontdb: &Arc<fontdb::Database>) -> Result<Vec<u8>, ChartError> {
    let (width, height) = (scene.width(), scene.height());
    let svg = scene.finish();

    let mut options = usvg::Options::default();
    options.fontdb = Arc::clone(fontdb);
    let tree = usvg::Tree::from_str(&svg, &options).map_err(|e| ChartError::Svg(e.to_string()))?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ChartError::Pixmap(width, height))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| ChartError::Encode(e.to_string()))
}
