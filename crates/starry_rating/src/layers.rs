//! Star cell layers
//!
//! The widget paints two rows of identical cells: the background row with the
//! normal image and the foreground row with the selected image. Only the
//! foreground's visible width changes during interaction, so cells carry no
//! per-star selection state.

use starry_core::{ClipShape, DrawContext, ImageId, ImageOptions, Rect};

/// One star image slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarCell {
    /// Frame in layer-local coordinates
    pub frame: Rect,
    pub image: Option<ImageId>,
}

/// An ordered row of star cells
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarLayer {
    cells: Vec<StarCell>,
}

impl StarLayer {
    /// Discard all cells and create `count` new ones showing `image`
    pub fn rebuild(&mut self, count: usize, image: Option<ImageId>) {
        self.cells.clear();
        self.cells.extend((0..count).map(|_| StarCell {
            frame: Rect::ZERO,
            image,
        }));
    }

    /// Assign frames in order; extra frames are ignored
    pub fn relayout(&mut self, frames: &[Rect]) {
        for (cell, frame) in self.cells.iter_mut().zip(frames) {
            cell.frame = *frame;
        }
    }

    pub fn set_image(&mut self, image: ImageId) {
        for cell in &mut self.cells {
            cell.image = Some(image);
        }
    }

    pub fn cells(&self) -> &[StarCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Draw every cell that has an image, offset by the layer frame origin
    pub fn paint(&self, ctx: &mut dyn DrawContext, layer_frame: Rect) {
        let options = ImageOptions::new();
        for cell in &self.cells {
            if let Some(image) = cell.image {
                let rect = cell.frame.offset(layer_frame.x(), layer_frame.y());
                ctx.draw_image(image, rect, &options);
            }
        }
    }

    /// Draw the layer clipped to `clip`
    pub fn paint_clipped(&self, ctx: &mut dyn DrawContext, layer_frame: Rect, clip: Rect) {
        ctx.push_clip(ClipShape::rect(clip));
        self.paint(ctx, layer_frame);
        ctx.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starry_core::{DrawCommand, RecordingContext};

    #[test]
    fn test_rebuild_replaces_cells() {
        let mut layer = StarLayer::default();
        layer.rebuild(5, None);
        assert_eq!(layer.len(), 5);

        layer.rebuild(3, Some(ImageId(2)));
        assert_eq!(layer.len(), 3);
        assert!(layer.cells().iter().all(|c| c.image == Some(ImageId(2))));
    }

    #[test]
    fn test_set_image_applies_to_all_cells() {
        let mut layer = StarLayer::default();
        layer.rebuild(4, None);
        layer.set_image(ImageId(9));
        for cell in layer.cells() {
            assert_eq!(cell.image, Some(ImageId(9)));
        }
    }

    #[test]
    fn test_paint_skips_cells_without_image() {
        let mut layer = StarLayer::default();
        layer.rebuild(2, None);
        layer.relayout(&[
            Rect::new(5.0, 0.0, 24.0, 24.0),
            Rect::new(34.0, 0.0, 24.0, 24.0),
        ]);

        let mut ctx = RecordingContext::new();
        layer.paint(&mut ctx, Rect::new(0.0, 0.0, 63.0, 24.0));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_paint_offsets_by_layer_origin() {
        let mut layer = StarLayer::default();
        layer.rebuild(1, Some(ImageId(1)));
        layer.relayout(&[Rect::new(5.0, 0.0, 24.0, 24.0)]);

        let mut ctx = RecordingContext::new();
        layer.paint_clipped(
            &mut ctx,
            Rect::new(0.0, 10.0, 34.0, 24.0),
            Rect::new(0.0, 10.0, 12.0, 24.0),
        );

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::PushClip(ClipShape::rect(Rect::new(0.0, 10.0, 12.0, 24.0))),
                DrawCommand::DrawImage {
                    image: ImageId(1),
                    rect: Rect::new(5.0, 10.0, 24.0, 24.0),
                    options: ImageOptions::new(),
                },
                DrawCommand::PopClip,
            ]
        );
    }
}
