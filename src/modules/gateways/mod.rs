pub mod models;
pub mod services;

pub use models::MerchantCredentials;
pub use services::{
    build_hosted_page_request, AuthorizeNetClient, HostedPageGateway, HostedPageRequest,
    HostedPageToken,
};
