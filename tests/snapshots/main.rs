//! Rendered output snapshots.

mod path_render;
