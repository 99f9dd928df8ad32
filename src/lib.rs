mod abcd;
mod circle;
mod line;
mod load;
mod perf;
mod pi;
mod series;
mod triangle;

pub mod math;
pub mod report;

pub use abcd::*;
pub use circle::*;
pub use line::*;
pub use load::*;
pub use perf::*;
pub use pi::*;
pub use series::*;
pub use triangle::*;
