//! Service layer separating file I/O from the classification pass

mod io;

pub use io::ImageIoService;
