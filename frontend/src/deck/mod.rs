pub mod jobs;
pub mod state;
mod view;

pub use view::SwipeDemo;
