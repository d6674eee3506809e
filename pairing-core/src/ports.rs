mod negotiate;
mod solver;

pub use negotiate::Negotiate;
pub use solver::Solver;
