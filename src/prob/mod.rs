mod gauss;

pub use gauss::*;

mod mixture;

pub use mixture::*;

mod prior;

pub use prior::*;
