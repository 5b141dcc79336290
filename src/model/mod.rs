/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Endpoint categories and default path building
pub mod category;
/// HTTP transport with retry
pub mod http;
/// Request values, parameter mappings and batch entries
pub mod requests;
/// Response decoding and error classification
pub mod responses;
/// Retry configuration for HTTP requests
pub mod retry;
