pub mod header;
pub mod input_section;
pub mod results;
pub mod utils;
