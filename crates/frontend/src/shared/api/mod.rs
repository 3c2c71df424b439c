pub mod error;
pub mod gateway;
pub mod operations;
pub mod transport;

pub use error::{ApiError, ApiResult};
pub use gateway::{Gateway, Key, Resource};
pub use operations::Operations;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};
