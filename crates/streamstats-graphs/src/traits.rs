//! Graph renderer trait definitions for the per-view chart types.

use crate::renderer::ChartStyle;
use streamstats_common::Result;

/// A chart that turns one view's aggregate into an image.
pub trait GraphRenderer {
    /// The aggregate this renderer draws.
    type Data: ?Sized;

    /// Renders `data` as PNG bytes.
    fn render(&self, data: &Self::Data, style: &ChartStyle) -> Result<Vec<u8>>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;

    /// Gets the description of this graph type.
    fn description(&self) -> &'static str;
}
