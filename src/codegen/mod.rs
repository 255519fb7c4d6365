pub mod header;
pub mod hex;
pub mod rows;

pub use header::render_header;
