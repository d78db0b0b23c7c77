pub mod http;
pub mod visitantes;
