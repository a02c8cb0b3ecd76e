pub mod client_requests;
pub mod http_response;
pub mod league;
pub mod lineup;
pub mod player;
pub mod settings;
pub mod squad;
pub mod standing;
pub mod user;
