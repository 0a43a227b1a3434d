pub mod results_page;
pub mod vote_page;

pub use results_page::*;
pub use vote_page::*;
