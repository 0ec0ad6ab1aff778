/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// Request building, response interpretation and the connection handler
pub mod http;
/// Logical requests and paging parameters
pub mod requests;
/// Result envelope and response payloads
pub mod responses;
