pub mod contagion;
pub mod distance;
pub mod diversity;
pub mod kappa;

pub use contagion::{contagion, CONTAGION_SINGLE_CLASS};
pub use distance::{dist_chebyshev, dist_euclidean, dist_manhattan, rmse};
pub use diversity::{shannon, shannon_evenness, simpson};
pub use kappa::{kappa_pairwise, kappa_self, KAPPA_DEGENERATE};
