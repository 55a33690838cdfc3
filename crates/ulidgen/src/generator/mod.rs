mod seed;
mod stream;
#[cfg(feature = "std")]
mod thread_local;

pub use seed::*;
pub use stream::*;
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
pub use thread_local::*;
