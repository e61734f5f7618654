//! Download path: version resolution, response building, dispatch.

pub mod resolver;
pub mod response;
pub mod stream;

pub use resolver::{FileVersionLookup, FileVersionResolver};
pub use response::{FileResponse, FileResponseBuilder};
pub use stream::{DownloadOutcome, DownloadRequest, MediaStreamService};
