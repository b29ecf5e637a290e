pub mod authorizenet;
pub mod gateway_trait;

pub use authorizenet::{build_hosted_page_request, AuthorizeNetClient};
pub use gateway_trait::{HostedPageGateway, HostedPageRequest, HostedPageToken};
