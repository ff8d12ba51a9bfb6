pub mod chess_com_client;
pub mod fetch;
pub mod github_client;
pub mod modrinth_client;

pub use chess_com_client::*;
pub use fetch::*;
pub use github_client::*;
pub use modrinth_client::*;
