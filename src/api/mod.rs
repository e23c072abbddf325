mod impls;
mod propbook;
mod requests;
mod responses;
mod util;

pub use impls::*;
pub use propbook::*;
pub use requests::*;
pub use responses::*;
pub use util::*;
