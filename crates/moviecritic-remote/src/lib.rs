pub mod error;
pub mod http;
pub mod traits;

pub use error::RemoteError;
pub use http::HttpDataService;
pub use traits::RemoteDataService;
