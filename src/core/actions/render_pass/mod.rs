pub mod render_pass;

pub use render_pass::{RenderPassError, RenderScheduler, RenderStats};
