mod instance;
mod item;
mod problem;
mod solution;

#[doc(inline)]
pub use instance::KPInstance;
#[doc(inline)]
pub use instance::KPInstanceBuilder;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use problem::KPProblem;
#[doc(inline)]
pub use solution::EMPTY_SELECTION_SYMBOL;
#[doc(inline)]
pub use solution::KPSolution;
