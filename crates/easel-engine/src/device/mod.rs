//! GPU device + swapchain.
//!
//! Brings up the wgpu adapter, device and queue for the window, keeps the
//! surface configured to the window size, hands out one encoder per frame,
//! and tells the runtime how to react when a frame cannot be acquired.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
