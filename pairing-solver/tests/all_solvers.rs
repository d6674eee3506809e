#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to allow for the injection of each solver
// implementation

#[template]
#[rstest]
#[case::exhaustive(pairing_solver::ExhaustiveSolver)]
#[case::hungarian(pairing_solver::HungarianSolver)]
#[case::lp(pairing_solver::LpSolver)]
pub fn all_solvers(#[case] solver: impl pairing_solver::Solver) {}
