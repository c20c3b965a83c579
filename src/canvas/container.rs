//! Node kinds and the render traversal
//!
//! Every node kind wraps a [`Primitive`] and implements [`Container`]; the
//! closed set of kinds that can appear below a figure is the [`Node`] enum.

use std::fmt::Write;

use enum_dispatch::enum_dispatch;
use image::RgbaImage;

use super::axes::Axes;
use super::axis::{Axis, Tick};
use super::context::RenderContext;
use super::label::Label;
use super::marks::{Bar, ScatterPoint};
use super::primitive::Primitive;
use crate::types::PixelRect;

/// Common behavior for everything in the scene tree
#[enum_dispatch]
pub trait Container {
    /// The geometry shared by all node kinds
    fn primitive(&self) -> &Primitive;

    fn primitive_mut(&mut self) -> &mut Primitive;

    /// Short name of the node kind, for dumps and logs
    fn kind(&self) -> &'static str;

    /// Pixel rectangle covered by this node
    fn bounds(&self) -> PixelRect {
        self.primitive().bounds()
    }

    /// Paint this node (not its children) into `dst`
    fn render(&self, dst: &mut RgbaImage, _ctx: &mut RenderContext<'_>) {
        self.primitive().paint_rect(dst, self.bounds());
    }

    /// Text drawn by this node, if any
    fn text(&self) -> Option<&str> {
        None
    }

    /// Children in insertion order, back to front
    fn children(&self) -> &[Node] {
        self.primitive().children()
    }
}

/// A node below the figure root
#[enum_dispatch(Container)]
#[derive(Debug, Clone)]
pub enum Node {
    Axes(Axes),
    Axis(Axis),
    Tick(Tick),
    Label(Label),
    Bar(Bar),
    ScatterPoint(ScatterPoint),
}

impl Node {
    /// Borrow this node as a specific kind.
    pub fn as_kind<T: NodeKind>(&self) -> Option<&T> {
        T::from_node(self)
    }
}

/// Access to one variant of [`Node`] by type.
pub trait NodeKind: Into<Node> {
    fn from_node(node: &Node) -> Option<&Self>;
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
}

macro_rules! node_kinds {
    ($($kind:ident),* $(,)?) => {
        $(
            impl NodeKind for $kind {
                fn from_node(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$kind(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

node_kinds!(Axes, Axis, Tick, Label, Bar, ScatterPoint);

/// Pre-order, depth-first draw: a node, then each child subtree in order.
pub fn render_tree<C: Container + ?Sized>(
    node: &C,
    dst: &mut RgbaImage,
    ctx: &mut RenderContext<'_>,
) {
    node.render(dst, ctx);
    for child in node.children() {
        render_tree(child, dst, ctx);
    }
}

/// Indented dump of a tree: one line per node with its kind and pixel bounds.
pub fn outline<C: Container + ?Sized>(root: &C) -> String {
    let mut out = String::new();
    outline_into(root, 0, &mut out);
    out
}

fn outline_into<C: Container + ?Sized>(node: &C, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}{} {}", "", node.kind(), node.bounds(), indent = depth * 2);
    if let Some(text) = node.text() {
        let _ = write!(out, " {:?}", text);
    }
    out.push('\n');
    for child in node.children() {
        outline_into(child, depth + 1, out);
    }
}
