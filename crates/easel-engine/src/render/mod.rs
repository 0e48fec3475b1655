//! GPU rendering subsystem.
//!
//! The scene's draw list is tessellated into textured triangles and drawn by
//! one pipeline in recorded order.
//!
//! Convention:
//! - CPU geometry is in device pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod batch;
mod common;
mod ctx;
mod tessellate;
mod textures;

pub use batch::BatchRenderer;
pub use ctx::{RenderCtx, RenderTarget};
pub use tessellate::{tessellate, Batch, Mesh, Vertex};
pub use textures::{FrameCache, TEXTURE_IDLE_FRAMES};
