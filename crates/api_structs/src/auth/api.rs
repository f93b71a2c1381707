use serde::{Deserialize, Serialize};

pub mod logout {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
    }
}
