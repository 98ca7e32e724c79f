mod config;
mod draw_pass;
mod engine;

pub use config::{GraphConfig, LeniencyOptions, TitleOptions};
pub use engine::GraphEngine;
