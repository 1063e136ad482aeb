pub mod builder;
pub mod feed;
pub mod state;
pub mod window;
