//! The building block every node kind is made of.

use std::fmt;

use glam::{DMat3, DVec2, DVec3, IVec2};
use image::{Pixel, Rgba, RgbaImage};

use super::container::{Container, Node, NodeKind};
use super::defaults;
use super::transform::TransformChain;
use crate::types::{Align, PixelRect};

/// Geometry, colors, transform chain and children of one node.
///
/// `origin` and `size` live in the parent's normalized unit space; the chain
/// maps that space into pixels.
#[derive(Debug, Clone)]
pub struct Primitive {
    pub origin: DVec2,
    pub size: DVec2,
    pub x_align: Align,
    pub y_align: Align,
    pub fill: Rgba<u8>,
    pub stroke: Rgba<u8>,
    /// Border thickness in pixels: inside the bounds when positive, outside
    /// when negative.
    pub stroke_width: i32,
    transforms: TransformChain,
    children: Vec<Node>,
}

impl Primitive {
    /// A parentless primitive owning the whole `transforms` chain.
    pub(crate) fn root(transforms: TransformChain) -> Self {
        Self {
            origin: DVec2::ZERO,
            size: DVec2::ZERO,
            x_align: Align::Leading,
            y_align: Align::Leading,
            fill: defaults::TRANSPARENT,
            stroke: defaults::TRANSPARENT,
            stroke_width: defaults::STROKE_WIDTH,
            transforms,
            children: Vec::new(),
        }
    }

    /// A primitive below `parent` whose own placement matrix is `local`.
    pub(crate) fn child_of(parent: &Primitive, local: DMat3) -> Self {
        Self::root(parent.transforms.extend(local))
    }

    pub(crate) fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = DVec2::new(x, y);
        self
    }

    pub(crate) fn with_size(mut self, w: f64, h: f64) -> Self {
        self.size = DVec2::new(w, h);
        self
    }

    pub(crate) fn with_align(mut self, x_align: Align, y_align: Align) -> Self {
        self.x_align = x_align;
        self.y_align = y_align;
        self
    }

    pub(crate) fn with_fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Rgba<u8>, width: i32) -> Self {
        self.stroke = stroke;
        self.stroke_width = width;
        self
    }

    pub fn transforms(&self) -> &TransformChain {
        &self.transforms
    }

    pub(crate) fn transforms_mut(&mut self) -> &mut TransformChain {
        &mut self.transforms
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub(crate) fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Append `child` and hand back a reference to it in its new home.
    pub(crate) fn attach<T: NodeKind>(&mut self, child: T) -> &mut T {
        let index = self.children.len();
        self.children.push(child.into());
        let Some(attached) = T::from_node_mut(&mut self.children[index]) else {
            unreachable!("a node converts back to the kind it was built from");
        };
        attached
    }

    /// The two corners of this node's rectangle in homogeneous local
    /// coordinates, min corner first (columns of the 3×2 corner matrix).
    pub fn vector(&self) -> [DVec3; 2] {
        let (x0, x1) = self.x_align.span(self.origin.x, self.size.x);
        let (y0, y1) = self.y_align.span(self.origin.y, self.size.y);
        [DVec3::new(x0, y0, 1.0), DVec3::new(x1, y1, 1.0)]
    }

    /// Pixel rectangle covered by this node.
    ///
    /// Corners are pushed through the ancestor transform and truncated toward
    /// zero; min/max are then taken per axis since the figure flips Y.
    pub fn bounds(&self) -> PixelRect {
        let ancestors = self.transforms.ancestors();
        let [lo, hi] = self.vector().map(|corner| {
            let p = ancestors * corner;
            IVec2::new(p.x as i32, p.y as i32)
        });
        PixelRect::from_corners(lo, hi)
    }

    /// Paint `fill` over this node's bounds, then its border.
    pub fn paint(&self, dst: &mut RgbaImage) {
        self.paint_rect(dst, self.bounds());
    }

    /// Paint `fill` over `rect`, then a `stroke_width` border of `stroke`.
    pub fn paint_rect(&self, dst: &mut RgbaImage, rect: PixelRect) {
        fill_rect(dst, rect, self.fill);
        stroke_rect(dst, rect, self.stroke_width, self.stroke);
    }

    /// Copy `parent`'s current matrices into this subtree's inherited prefixes.
    pub(crate) fn rebase(&mut self, parent: &TransformChain) {
        self.transforms.rebase(parent);
        let chain = self.transforms.clone();
        for child in &mut self.children {
            child.primitive_mut().rebase(&chain);
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        write!(
            f,
            "Primitive {{origin: {} (pixels: {}), size: {} (pixels: {}x{}), depth: {}}}",
            self.origin,
            b.min,
            self.size,
            b.width(),
            b.height(),
            self.transforms.len()
        )
    }
}

/// Paint `color` over `rect`, clipped to `dst`.
///
/// Opaque colors overwrite, transparent ones leave the buffer alone and
/// anything in between is blended source-over.
pub fn fill_rect(dst: &mut RgbaImage, rect: PixelRect, color: Rgba<u8>) {
    if color[3] == 0 {
        return;
    }
    let canvas = PixelRect::new(0, 0, dst.width() as i32, dst.height() as i32);
    let area = rect.intersect(canvas);
    if area.is_empty() {
        return;
    }
    for y in area.min.y..area.max.y {
        for x in area.min.x..area.max.x {
            let px = dst.get_pixel_mut(x as u32, y as u32);
            if color[3] == u8::MAX {
                *px = color;
            } else {
                px.blend(&color);
            }
        }
    }
}

/// Paint a border of `width` pixels around `rect`: inside it when `width` is
/// positive, outside it when negative.
///
/// The four sides never overlap, so translucent borders blend once per pixel.
pub fn stroke_rect(dst: &mut RgbaImage, rect: PixelRect, width: i32, color: Rgba<u8>) {
    if width == 0 || color[3] == 0 {
        return;
    }
    let PixelRect { min, max } = rect;
    let sides = if width > 0 {
        // bands stop where they meet, a thick border fills the rect once
        let top = (min.y + width).min(max.y);
        let bottom = (max.y - width).max(top);
        let left = (min.x + width).min(max.x);
        let right = (max.x - width).max(left);
        [
            PixelRect::new(min.x, min.y, max.x, top),
            PixelRect::new(min.x, top, left, bottom),
            PixelRect::new(right, top, max.x, bottom),
            PixelRect::new(min.x, bottom, max.x, max.y),
        ]
    } else {
        let w = -width;
        [
            PixelRect::new(min.x - w, min.y - w, max.x + w, min.y),
            PixelRect::new(min.x - w, min.y, min.x, max.y),
            PixelRect::new(max.x, min.y, max.x + w, max.y),
            PixelRect::new(min.x - w, max.y, max.x + w, max.y + w),
        ]
    };
    for side in sides {
        fill_rect(dst, side, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::transform::{pixel_scale, y_flip};

    /// A 100×100 pixel root, set up like a figure.
    fn unit_root() -> Primitive {
        Primitive::root(TransformChain::new(vec![
            y_flip(100.0),
            pixel_scale(100.0, 100.0),
        ]))
    }

    fn node(x: f64, y: f64, w: f64, h: f64) -> Primitive {
        Primitive::child_of(&unit_root(), DMat3::IDENTITY)
            .with_origin(x, y)
            .with_size(w, h)
    }

    // ==================== vector tests ====================

    #[test]
    fn vector_per_alignment() {
        let p = node(0.5, 0.5, 0.25, 0.5);
        assert_eq!(
            p.clone().with_align(Align::Leading, Align::Leading).vector(),
            [DVec3::new(0.5, 0.5, 1.0), DVec3::new(0.75, 1.0, 1.0)]
        );
        assert_eq!(
            p.clone().with_align(Align::Trailing, Align::Trailing).vector(),
            [DVec3::new(0.25, 0.0, 1.0), DVec3::new(0.5, 0.5, 1.0)]
        );
        // axes are independent
        assert_eq!(
            p.with_align(Align::Center, Align::Leading).vector(),
            [DVec3::new(0.375, 0.5, 1.0), DVec3::new(0.625, 1.0, 1.0)]
        );
    }

    // ==================== bounds tests ====================

    #[test]
    fn bounds_flip_y_and_stay_well_formed() {
        let b = node(0.25, 0.5, 0.5, 0.25).bounds();
        // y in [0.5, 0.75] maps to pixel rows [25, 50]
        assert_eq!(b, PixelRect::new(25, 25, 75, 50));
        assert!(b.min.x <= b.max.x && b.min.y <= b.max.y);
    }

    #[test]
    fn center_aligned_bounds_are_symmetric_around_origin() {
        let p = node(0.5, 0.25, 0.5, 0.25).with_align(Align::Center, Align::Center);
        let b = p.bounds();
        let origin = p.transforms().ancestors().transform_point2(p.origin);
        let (cx, cy) = (origin.x as i32, origin.y as i32);
        assert!(((cx - b.min.x) - (b.max.x - cx)).abs() <= 1);
        assert!(((cy - b.min.y) - (b.max.y - cy)).abs() <= 1);
    }

    #[test]
    fn only_ancestors_apply_to_own_bounds() {
        // The node's own placement matrix must not move its own rectangle.
        let placed = Primitive::child_of(
            &unit_root(),
            crate::canvas::transform::placement(DVec2::new(0.5, 0.5), DVec2::new(0.5, 0.5)),
        )
        .with_origin(0.0, 0.0)
        .with_size(1.0, 1.0);
        assert_eq!(placed.bounds(), PixelRect::new(0, 0, 100, 100));
    }

    // ==================== paint tests ====================

    #[test]
    fn fill_rect_clips_to_buffer() {
        let mut img = RgbaImage::new(4, 4);
        fill_rect(&mut img, PixelRect::new(-2, 2, 10, 10), defaults::INK);
        assert_eq!(*img.get_pixel(0, 3), defaults::INK);
        assert_eq!(*img.get_pixel(3, 2), defaults::INK);
        assert_eq!(*img.get_pixel(0, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn transparent_fill_leaves_buffer_untouched() {
        let mut img = RgbaImage::from_pixel(2, 2, defaults::AXES_FILL);
        fill_rect(&mut img, PixelRect::new(0, 0, 2, 2), defaults::TRANSPARENT);
        assert!(img.pixels().all(|p| *p == defaults::AXES_FILL));
    }

    #[test]
    fn later_paint_wins() {
        let mut img = RgbaImage::new(3, 3);
        fill_rect(&mut img, PixelRect::new(0, 0, 3, 3), defaults::BAR_FILL);
        fill_rect(&mut img, PixelRect::new(1, 1, 2, 2), defaults::POINT_FILL);
        assert_eq!(*img.get_pixel(0, 0), defaults::BAR_FILL);
        assert_eq!(*img.get_pixel(1, 1), defaults::POINT_FILL);
    }

    // ==================== stroke tests ====================

    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    #[test]
    fn default_stroke_leaves_only_the_fill() {
        let p = node(0.25, 0.25, 0.5, 0.5).with_fill(defaults::AXES_FILL);
        let mut img = RgbaImage::new(100, 100);
        p.paint(&mut img);
        assert_eq!(*img.get_pixel(25, 25), defaults::AXES_FILL);
        assert_eq!(*img.get_pixel(50, 50), defaults::AXES_FILL);
    }

    #[test]
    fn positive_stroke_width_draws_inside_the_bounds() {
        let p = node(0.25, 0.25, 0.5, 0.5)
            .with_fill(defaults::AXES_FILL)
            .with_stroke(BLUE, 3);
        assert_eq!(p.bounds(), PixelRect::new(25, 25, 75, 75));
        let mut img = RgbaImage::new(100, 100);
        p.paint(&mut img);

        // every side is 3px thick, inside the rectangle
        for (x, y) in [(25, 50), (27, 50), (72, 50), (74, 50), (50, 25), (50, 27), (50, 74)] {
            assert_eq!(*img.get_pixel(x, y), BLUE, "({x}, {y})");
        }
        assert_eq!(*img.get_pixel(28, 50), defaults::AXES_FILL);
        assert_eq!(*img.get_pixel(50, 71), defaults::AXES_FILL);
        assert_eq!(*img.get_pixel(24, 50), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn negative_stroke_width_draws_outside_the_bounds() {
        let p = node(0.25, 0.25, 0.5, 0.5)
            .with_fill(defaults::AXES_FILL)
            .with_stroke(BLUE, -2);
        let mut img = RgbaImage::new(100, 100);
        p.paint(&mut img);

        assert_eq!(*img.get_pixel(23, 50), BLUE);
        assert_eq!(*img.get_pixel(24, 50), BLUE);
        assert_eq!(*img.get_pixel(75, 50), BLUE);
        // corners are covered by the top and bottom sides
        assert_eq!(*img.get_pixel(23, 23), BLUE);
        assert_eq!(*img.get_pixel(76, 76), BLUE);
        // the rectangle itself keeps its fill
        assert_eq!(*img.get_pixel(25, 50), defaults::AXES_FILL);
        assert_eq!(*img.get_pixel(22, 50), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn translucent_stroke_blends_each_pixel_once() {
        let half = Rgba([0, 0, 255, 128]);
        let mut once = RgbaImage::from_pixel(10, 10, defaults::AXES_FILL);
        stroke_rect(&mut once, PixelRect::new(2, 2, 8, 8), 2, half);
        let mut expected = defaults::AXES_FILL;
        expected.blend(&half);
        // an edge pixel and a corner pixel get the same single blend
        assert_eq!(*once.get_pixel(5, 2), expected);
        assert_eq!(*once.get_pixel(2, 2), expected);
        assert_eq!(*once.get_pixel(5, 5), defaults::AXES_FILL);
    }

    #[test]
    fn thick_stroke_covers_a_small_rect_once() {
        let half = Rgba([0, 0, 0, 128]);
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        stroke_rect(&mut img, PixelRect::new(2, 2, 7, 7), 4, half);
        let first = *img.get_pixel(2, 2);
        assert_ne!(first, Rgba([255, 255, 255, 255]));
        for y in 2..7 {
            for x in 2..7 {
                assert_eq!(*img.get_pixel(x, y), first, "({x}, {y})");
            }
        }
        assert_eq!(*img.get_pixel(7, 7), Rgba([255, 255, 255, 255]));
    }
}
