pub mod markup;
pub mod output;
pub mod pretty;
pub mod util;
