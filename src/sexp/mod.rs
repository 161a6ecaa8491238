#[macro_use]
pub mod cons_list;

pub mod cons;
pub mod sexp;


pub use self::cons::Cons;
pub use self::cons_list::ConsList;
pub use self::sexp::{HeapSexp, Readable, Sexp, SexpIter};
