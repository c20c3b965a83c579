//! Scene graph for charts
//!
//! A [`Figure`] is the root of a tree of nodes. Every node stores its origin
//! and size in its parent's normalized unit square plus the chain of affine
//! matrices that leads from that square to pixels. Bounds are derived on
//! demand, so moving or resizing an ancestor is all it takes to relayout.
//!
//! ```text
//! Figure ─┬─ Axes ─┬─ Bar / ScatterPoint
//!         │        └─ Axis ─┬─ Label
//!         │                 └─ Tick
//!         └─ Axes ...
//! ```

mod axes;
mod axis;
mod container;
mod context;
pub mod defaults;
mod figure;
mod label;
pub mod layout;
mod marks;
mod primitive;
pub mod transform;

pub use axes::Axes;
pub use axis::{Axis, Side, Tick};
pub use container::{Container, Node, NodeKind, outline, render_tree};
pub use context::RenderContext;
pub use figure::Figure;
pub use label::Label;
pub use marks::{Bar, ScatterPoint};
pub use primitive::{Primitive, fill_rect, stroke_rect};
